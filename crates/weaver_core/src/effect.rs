#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowAlert {
        message: String,
    },
    SubmitRequest {
        seq: crate::RequestSeq,
        request: BackendRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    Convert {
        code: String,
        target_language: crate::TargetLanguage,
    },
    Debug {
        code: String,
    },
    QualityCheck {
        code: String,
    },
}
