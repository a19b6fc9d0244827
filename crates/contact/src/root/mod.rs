use std::ops::Deref;

mod submit_form;

pub use submit_form::{ContactSubmission, SubmitFormInput};

#[derive(Clone)]
pub struct Command(bittencourt_shared::State);

impl Deref for Command {
    type Target = bittencourt_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: bittencourt_shared::State) -> Self {
        Self(state)
    }
}
