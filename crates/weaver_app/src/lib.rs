//! Weaver app: session wiring between the editor host, the pure core, and
//! the backend client.
mod editor;
mod effects;
mod notify;
mod session;

pub use editor::{BufferEditor, EditorSurface, DEFAULT_EDITOR_MODE};
pub use effects::EffectRunner;
pub use notify::{AlertSink, StderrAlertSink};
pub use session::Session;
