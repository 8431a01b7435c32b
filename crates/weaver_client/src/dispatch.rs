use std::sync::{mpsc, Arc};
use std::thread;

use weaver_logging::weaver_debug;

use crate::client::{Backend, ClientSettings, ReqwestBackend};
use crate::{ApiRequest, ClientEvent, RequestId};

enum ClientCommand {
    Submit {
        request_id: RequestId,
        request: ApiRequest,
    },
}

/// Handle to the worker thread that performs backend calls.
///
/// Commands are spawned as independent tasks, so overlapping submissions may
/// complete in any order; every submission settles with exactly one
/// `RequestCompleted` event.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(ReqwestBackend::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request_id: RequestId, request: ApiRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            request_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit {
            request_id,
            request,
        } => {
            weaver_debug!("submit request_id={} path={}", request_id, request.path());
            let result = backend.submit(&request).await;
            let _ = event_tx.send(ClientEvent::RequestCompleted { request_id, result });
        }
    }
}
