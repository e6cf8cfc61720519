use std::sync::Arc;
use tokio::sync::mpsc;

use homeroom_llm::{HttpTransport, ProviderConfig, ResilientClient};
use homeroom_prompt::{Category, IdeaKind};
use homeroom_session::{Action, Outcome, SessionHandler, SessionState};

/// Ticks the balloon overlay stays on screen (at ~100ms per tick).
const CELEBRATE_TICKS: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Interactive API-key entry, shown only when no key was resolved
    ApiKey,
    /// First-run idea picker
    IdeaSelect,
    /// The chat classroom
    Chat,
}

/// Result of a background action, sent back over the channel.
pub enum SessionEvent {
    Completed { state: SessionState, outcome: Outcome },
    Failed { state: SessionState, error: String },
}

pub struct App {
    handler: Option<Arc<SessionHandler<HttpTransport>>>,
    model_override: Option<String>,
    pub state: SessionState,
    pub screen: Screen,
    /// Chat or custom-idea input line
    pub input: String,
    /// Masked API-key input
    pub key_input: String,
    pub idea_cursor: usize,
    pub is_thinking: bool,
    pub spinner_tick: usize,
    pub celebrate_ticks: u8,
    pub status: Option<String>,
    event_tx: mpsc::Sender<SessionEvent>,
    event_rx: mpsc::Receiver<SessionEvent>,
}

impl App {
    pub fn new(api_key: Option<String>, model_override: Option<String>) -> anyhow::Result<Self> {
        let (event_tx, event_rx) = mpsc::channel(8);
        let mut app = Self {
            handler: None,
            model_override,
            state: SessionState::new(Category::default()),
            screen: Screen::ApiKey,
            input: String::new(),
            key_input: String::new(),
            idea_cursor: 0,
            is_thinking: false,
            spinner_tick: 0,
            celebrate_ticks: 0,
            status: None,
            event_tx,
            event_rx,
        };
        if let Some(key) = api_key {
            app.set_api_key(&key)?;
        }
        Ok(app)
    }

    /// Wire up the completion client once a credential is known.
    pub fn set_api_key(&mut self, api_key: &str) -> anyhow::Result<()> {
        let mut config = ProviderConfig::new(api_key);
        if let Some(model) = &self.model_override {
            config = config.with_model(model.clone());
        }
        let transport = HttpTransport::new(config)?;
        self.handler = Some(Arc::new(SessionHandler::new(ResilientClient::new(transport))));
        self.screen = Screen::IdeaSelect;
        Ok(())
    }

    pub fn has_credential(&self) -> bool {
        self.handler.is_some()
    }

    /// Picker entries: the six presets plus the free-form 기타 slot.
    pub fn idea_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = IdeaKind::PRESETS.iter().map(|idea| idea.label()).collect();
        labels.push("기타 (직접 입력)".to_string());
        labels
    }

    pub fn custom_idea_selected(&self) -> bool {
        self.idea_cursor == IdeaKind::PRESETS.len()
    }

    pub fn idea_cursor_up(&mut self) {
        if self.idea_cursor == 0 {
            self.idea_cursor = IdeaKind::PRESETS.len();
        } else {
            self.idea_cursor -= 1;
        }
    }

    pub fn idea_cursor_down(&mut self) {
        self.idea_cursor = (self.idea_cursor + 1) % (IdeaKind::PRESETS.len() + 1);
    }

    /// Confirm the highlighted idea option.
    pub fn submit_idea(&mut self) {
        if self.is_thinking {
            return;
        }
        let idea = if self.custom_idea_selected() {
            let text = self.input.trim().to_string();
            if text.is_empty() {
                self.status = Some("어떤 종류의 아이디어인지 먼저 입력해주세요.".to_string());
                return;
            }
            self.input.clear();
            IdeaKind::Custom(text)
        } else {
            IdeaKind::PRESETS[self.idea_cursor].clone()
        };
        self.dispatch(Action::SubmitIdea(idea));
    }

    /// Send the chat input line. Ignored while a request is pending.
    pub fn submit_chat(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_thinking {
            return;
        }
        self.input.clear();
        self.dispatch(Action::SubmitChat(text));
    }

    pub fn cycle_category(&mut self) {
        if self.is_thinking {
            return;
        }
        self.dispatch(Action::SelectCategory(self.state.category.next()));
    }

    pub fn save_log(&mut self) {
        if self.is_thinking {
            return;
        }
        self.dispatch(Action::SaveLog);
    }

    pub fn clear_log(&mut self) {
        if self.is_thinking {
            return;
        }
        self.dispatch(Action::ClearLog);
    }

    /// Run one action on a background task; the session's input stays
    /// blocked (`is_thinking`) until the result comes back.
    fn dispatch(&mut self, action: Action) {
        let Some(handler) = self.handler.clone() else {
            return;
        };
        let mut state = self.state.clone();
        let tx = self.event_tx.clone();
        self.is_thinking = true;
        self.status = None;
        tokio::spawn(async move {
            let event = match handler.handle(&mut state, action).await {
                Ok(outcome) => SessionEvent::Completed { state, outcome },
                Err(err) => SessionEvent::Failed {
                    state,
                    error: err.to_string(),
                },
            };
            let _ = tx.send(event).await;
        });
    }

    /// Advance animations and drain finished background work.
    pub fn on_tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
        self.celebrate_ticks = self.celebrate_ticks.saturating_sub(1);

        while let Ok(event) = self.event_rx.try_recv() {
            self.is_thinking = false;
            match event {
                SessionEvent::Completed { state, outcome } => {
                    self.state = state;
                    self.apply_outcome(outcome);
                }
                SessionEvent::Failed { state, error } => {
                    // the student's turn stays in the log; they can resend
                    self.state = state;
                    self.status = Some(format!("⚠ {error}"));
                    log::error!("action failed: {error}");
                }
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        if self.state.idea_selected && self.screen == Screen::IdeaSelect {
            self.screen = Screen::Chat;
        }
        if outcome.celebrate {
            self.celebrate_ticks = CELEBRATE_TICKS;
        }
        if let Some(download) = outcome.download {
            match std::fs::write(&download.file_name, &download.data) {
                Ok(()) => {
                    self.status = Some(format!("💾 {} 저장 완료", download.file_name));
                }
                Err(err) => {
                    self.status = Some(format!("⚠ 저장 실패: {err}"));
                }
            }
            return;
        }
        if let Some(notice) = outcome.notice {
            self.status = Some(notice);
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
        FRAMES[self.spinner_tick % FRAMES.len()]
    }
}
