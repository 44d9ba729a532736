//! Menu conversation state machine
//!
//! Pure transitions in the Elm style: the engine feeds in the current stage
//! and a classified input, and gets back the next stage plus the reply text.

pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use event::Input;
pub use state::Stage;
pub use transition::{transition, TransitionError, TransitionResult};
