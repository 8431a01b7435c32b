use weaver_client::ClientSettings;
use weaver_core::{update, AppState, AppViewModel, Effect, Msg};

use crate::editor::{EditorSurface, DEFAULT_EDITOR_MODE};
use crate::effects::EffectRunner;
use crate::notify::AlertSink;

/// Owns the state machine and its surroundings for one editor session.
///
/// Entry points mirror the UI controls: the language selector and the three
/// action buttons. Each returns `Some(view)` when the display state changed.
pub struct Session<E, A> {
    state: AppState,
    runner: EffectRunner,
    editor: E,
    alerts: A,
}

impl<E: EditorSurface, A: AlertSink> Session<E, A> {
    pub fn new(settings: ClientSettings, mut editor: E, alerts: A) -> Self {
        editor.set_language_mode(DEFAULT_EDITOR_MODE);
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(settings),
            editor,
            alerts,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn language_selected(&mut self, value: &str) -> Option<AppViewModel> {
        self.dispatch(Msg::LanguageSelected(value.to_string()))
    }

    pub fn convert_clicked(&mut self) -> Option<AppViewModel> {
        let code = self.editor.text();
        self.dispatch(Msg::ConvertClicked { code })
    }

    pub fn debug_clicked(&mut self) -> Option<AppViewModel> {
        let code = self.editor.text();
        self.dispatch(Msg::DebugClicked { code })
    }

    pub fn quality_check_clicked(&mut self) -> Option<AppViewModel> {
        let code = self.editor.text();
        self.dispatch(Msg::QualityCheckClicked { code })
    }

    /// Drains settled backend calls; returns a view when the display changed.
    pub fn pump(&mut self) -> Option<AppViewModel> {
        let mut latest = None;
        while let Some(msg) = self.runner.try_recv_settled() {
            if let Some(view) = self.dispatch(msg) {
                latest = Some(view);
            }
        }
        latest
    }

    fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        for effect in effects {
            match effect {
                Effect::ShowAlert { message } => self.alerts.alert(&message),
                Effect::SubmitRequest { seq, request } => self.runner.submit(seq, request),
            }
        }
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;
        was_dirty.then_some(view)
    }
}
