#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an option in the target-language selector (raw value,
    /// empty string clears the selection).
    LanguageSelected(String),
    /// User clicked Convert; `code` is the editor contents at click time.
    ConvertClicked { code: String },
    /// User clicked Debug.
    DebugClicked { code: String },
    /// User clicked Quality Check.
    QualityCheckClicked { code: String },
    /// A dispatched backend call finished, successfully or not.
    RequestSettled {
        seq: crate::RequestSeq,
        outcome: crate::RequestOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
