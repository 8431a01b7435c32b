use weaver_client::{ApiRequest, ClientEvent, ClientHandle, ClientSettings};
use weaver_core::{BackendRequest, Msg, RequestOutcome, RequestSeq};
use weaver_logging::weaver_warn;

/// Executes submit effects against the backend client and drains settled
/// calls back into core messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            client: ClientHandle::new(settings),
        }
    }

    pub fn submit(&self, seq: RequestSeq, request: BackendRequest) {
        self.client.submit(seq, map_request(request));
    }

    /// One settled backend call, already mapped into a core message.
    ///
    /// Failures are logged here and then flattened to `Failed`; they never
    /// reach the display as an error indicator.
    pub fn try_recv_settled(&self) -> Option<Msg> {
        let ClientEvent::RequestCompleted { request_id, result } = self.client.try_recv()?;
        let outcome = match result {
            Ok(output) => RequestOutcome::Success { text: output.text },
            Err(err) => {
                weaver_warn!(
                    "Request {} failed: {} ({})",
                    request_id,
                    err.kind,
                    err.message
                );
                RequestOutcome::Failed
            }
        };
        Some(Msg::RequestSettled {
            seq: request_id,
            outcome,
        })
    }
}

fn map_request(request: BackendRequest) -> ApiRequest {
    match request {
        BackendRequest::Convert {
            code,
            target_language,
        } => ApiRequest::Convert {
            code,
            target_language: target_language.wire_id().to_string(),
        },
        BackendRequest::Debug { code } => ApiRequest::Debug { code },
        BackendRequest::QualityCheck { code } => ApiRequest::QualityCheck { code },
    }
}
