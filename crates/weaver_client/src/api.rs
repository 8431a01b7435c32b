use serde::{Deserialize, Serialize};

/// One backend call, carrying everything needed to form its HTTP body.
///
/// The target language travels as the raw wire identifier at this layer;
/// the enumerated UI set lives upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Convert {
        code: String,
        target_language: String,
    },
    Debug {
        code: String,
    },
    QualityCheck {
        code: String,
    },
}

impl ApiRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::Convert { .. } => "/convert",
            ApiRequest::Debug { .. } => "/debug",
            ApiRequest::QualityCheck { .. } => "/quality-check",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConvertBody {
    pub code: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CodeBody {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConvertReply {
    pub converted_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebugReply {
    pub debugged_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QualityCheckReply {
    pub checked_code: String,
}
