//! Weaver core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{BackendRequest, Effect};
pub use msg::Msg;
pub use state::{AppState, RequestOutcome, RequestSeq, TargetLanguage};
pub use update::{update, EMPTY_EDITOR_ALERT};
pub use view_model::{AppViewModel, INPUT_PLACEHOLDER, LOADING_TEXT, OUTPUT_PLACEHOLDER};
