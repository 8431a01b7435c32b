/// Capability surface of the embedded code editor.
///
/// The session only ever reads the buffer and sets the syntax mode; the
/// concrete widget stays on the host side.
pub trait EditorSurface {
    fn text(&self) -> String;
    fn set_language_mode(&mut self, mode: &str);
}

/// Syntax mode applied to a freshly created editor.
pub const DEFAULT_EDITOR_MODE: &str = "javascript";

/// Plain in-memory editor for hosts and tests without a real widget.
#[derive(Debug, Default, Clone)]
pub struct BufferEditor {
    text: String,
    language_mode: String,
}

impl BufferEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn language_mode(&self) -> &str {
        &self.language_mode
    }
}

impl EditorSurface for BufferEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_language_mode(&mut self, mode: &str) {
        self.language_mode = mode.to_string();
    }
}
