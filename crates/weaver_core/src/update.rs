use crate::{AppState, BackendRequest, Effect, Msg, TargetLanguage};

/// Blocking notification shown when validation rejects an action.
pub const EMPTY_EDITOR_ALERT: &str = "Editor can not be Empty!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LanguageSelected(raw) => {
            state.set_selected_language(TargetLanguage::from_wire_id(raw.trim()));
            Vec::new()
        }
        Msg::ConvertClicked { code } => {
            state.clear_input_placeholder();
            // Convert needs both a non-blank buffer and a chosen target.
            match state.selected_language() {
                Some(target_language) if !is_blank(&code) => {
                    let seq = state.begin_request();
                    vec![Effect::SubmitRequest {
                        seq,
                        request: BackendRequest::Convert {
                            code,
                            target_language,
                        },
                    }]
                }
                _ => vec![empty_editor_alert()],
            }
        }
        Msg::DebugClicked { code } => {
            state.clear_input_placeholder();
            if is_blank(&code) {
                vec![empty_editor_alert()]
            } else {
                let seq = state.begin_request();
                vec![Effect::SubmitRequest {
                    seq,
                    request: BackendRequest::Debug { code },
                }]
            }
        }
        Msg::QualityCheckClicked { code } => {
            state.clear_input_placeholder();
            if is_blank(&code) {
                vec![empty_editor_alert()]
            } else {
                let seq = state.begin_request();
                vec![Effect::SubmitRequest {
                    seq,
                    request: BackendRequest::QualityCheck { code },
                }]
            }
        }
        Msg::RequestSettled { seq, outcome } => {
            state.apply_settled(seq, outcome);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_blank(code: &str) -> bool {
    code.trim().is_empty()
}

fn empty_editor_alert() -> Effect {
    Effect::ShowAlert {
        message: EMPTY_EDITOR_ALERT.to_string(),
    }
}
