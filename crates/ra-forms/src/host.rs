//! Callbacks into the page that owns the form

use ra_models::UserPayload;

/// The host page of a form session
pub trait FormHost {
    /// Called once the repository accepted the payload
    fn on_submit(&mut self, payload: &UserPayload);

    /// Called when the user abandons the form
    fn on_cancel(&mut self);
}

/// [`FormHost`] built from a pair of closures
pub struct FnHost<S, C> {
    on_submit: S,
    on_cancel: C,
}

impl<S, C> FnHost<S, C>
where
    S: FnMut(&UserPayload),
    C: FnMut(),
{
    pub fn new(on_submit: S, on_cancel: C) -> Self {
        Self { on_submit, on_cancel }
    }
}

impl<S, C> FormHost for FnHost<S, C>
where
    S: FnMut(&UserPayload),
    C: FnMut(),
{
    fn on_submit(&mut self, payload: &UserPayload) {
        (self.on_submit)(payload)
    }

    fn on_cancel(&mut self) {
        (self.on_cancel)()
    }
}
