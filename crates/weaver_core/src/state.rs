use crate::view_model::{AppViewModel, INPUT_PLACEHOLDER, LOADING_TEXT, OUTPUT_PLACEHOLDER};

pub type RequestSeq = u64;

/// The enumerated set of conversion targets offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Java,
    C,
    Python,
    JavaScript,
    Php,
}

impl TargetLanguage {
    /// Selector options, in display order.
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Java,
        TargetLanguage::C,
        TargetLanguage::Python,
        TargetLanguage::JavaScript,
        TargetLanguage::Php,
    ];

    /// The identifier sent to the backend as `targetLanguage`.
    pub fn wire_id(self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::C => "C",
            TargetLanguage::Python => "python",
            TargetLanguage::JavaScript => "javascript",
            TargetLanguage::Php => "php",
        }
    }

    /// Parses a selector option value. Empty or unknown values mean
    /// "no selection".
    pub fn from_wire_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.wire_id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success { text: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    selected_language: Option<TargetLanguage>,
    result_text: String,
    pending: Option<RequestSeq>,
    input_placeholder: String,
    output_placeholder: String,
    next_seq: RequestSeq,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_language: None,
            result_text: String::new(),
            pending: None,
            input_placeholder: INPUT_PLACEHOLDER.to_string(),
            output_placeholder: OUTPUT_PLACEHOLDER.to_string(),
            next_seq: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.pending.is_some();
        let output_text = if busy {
            LOADING_TEXT.to_string()
        } else {
            self.result_text.clone()
        };
        AppViewModel {
            selected_language: self.selected_language,
            input_placeholder: self.input_placeholder.clone(),
            output_placeholder: self.output_placeholder.clone(),
            output_text,
            busy,
            // Only the Convert button is gated on an in-flight request.
            convert_enabled: !busy,
        }
    }

    pub fn selected_language(&self) -> Option<TargetLanguage> {
        self.selected_language
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns whether a render is needed and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_selected_language(&mut self, language: Option<TargetLanguage>) {
        if self.selected_language != language {
            self.selected_language = language;
            self.dirty = true;
        }
    }

    /// The input hint disappears the first time the user runs any action.
    pub(crate) fn clear_input_placeholder(&mut self) {
        if !self.input_placeholder.is_empty() {
            self.input_placeholder.clear();
            self.dirty = true;
        }
    }

    /// Allocates a sequence number for a new dispatch and marks it as the
    /// request that owns the display. Any previously pending request becomes
    /// stale.
    pub(crate) fn begin_request(&mut self) -> RequestSeq {
        self.next_seq += 1;
        self.pending = Some(self.next_seq);
        self.dirty = true;
        self.next_seq
    }

    /// Applies a settled request. Settles carrying a sequence number other
    /// than the pending one are stale and ignored outright.
    pub(crate) fn apply_settled(&mut self, seq: RequestSeq, outcome: RequestOutcome) {
        if self.pending != Some(seq) {
            return;
        }
        self.pending = None;
        if let RequestOutcome::Success { text } = outcome {
            self.result_text = text;
        }
        self.dirty = true;
    }
}
