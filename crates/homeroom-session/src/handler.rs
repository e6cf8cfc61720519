use chrono::Local;
use tracing::{debug, info, warn};

use homeroom_core::{Message, Transcript};
use homeroom_llm::{CompletionTransport, ResilientClient};
use homeroom_prompt::{is_praise, persona_prompt};

use crate::action::Action;
use crate::error::{SessionError, SessionResult};
use crate::types::SessionState;

/// Exported journal, ready for the UI to write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub data: String,
}

/// Render instruction produced by one handled action.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// Assistant reply appended this turn, if any
    pub reply: Option<String>,
    /// Fire the celebration effect (praise detected in the reply)
    pub celebrate: bool,
    /// Journal export to offer, if any
    pub download: Option<Download>,
    /// One-line status notice for the UI
    pub notice: Option<String>,
}

impl Outcome {
    fn notice(text: impl Into<String>) -> Self {
        Self {
            notice: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Dispatches actions against a session, keeping the core flow independent
/// of any particular UI.
///
/// The UI issues at most one action at a time per session; a completion
/// request blocks that session's input until its bounded attempt sequence
/// finishes.
pub struct SessionHandler<T: CompletionTransport> {
    client: ResilientClient<T>,
}

impl<T: CompletionTransport> SessionHandler<T> {
    pub fn new(client: ResilientClient<T>) -> Self {
        Self { client }
    }

    pub async fn handle(&self, state: &mut SessionState, action: Action) -> SessionResult<Outcome> {
        state.touch();
        match action {
            Action::SelectCategory(category) => {
                info!(topic = %category.label(), "switching mentoring topic");
                state.set_category(category);
                Ok(Outcome::notice(format!(
                    "주제를 '{}'(으)로 바꿨습니다.",
                    category.label()
                )))
            }
            Action::SubmitIdea(idea) => {
                if state.idea_selected {
                    return Err(SessionError::IdeaAlreadySelected);
                }
                let outcome = self.chat_turn(state, idea.opening_message()).await?;
                // acknowledged by the assistant, the gate opens for good
                state.idea_selected = true;
                Ok(outcome)
            }
            Action::SubmitChat(text) => {
                if !state.idea_selected {
                    return Err(SessionError::IdeaNotSelected);
                }
                self.chat_turn(state, text).await
            }
            Action::SaveLog => {
                if state.transcript.is_empty() {
                    return Ok(Outcome::notice("저장할 대화 내용이 없습니다."));
                }
                let download = Download {
                    file_name: Transcript::export_file_name(Local::now().date_naive()),
                    data: state.transcript.export(),
                };
                debug!(file = %download.file_name, "journal exported");
                Ok(Outcome {
                    download: Some(download),
                    ..Outcome::default()
                })
            }
            Action::ClearLog => {
                state.clear();
                Ok(Outcome::notice("대화를 새로 시작합니다."))
            }
        }
    }

    /// Append the user turn, fetch a completion, append the reply.
    ///
    /// On any surfaced client error the user turn stays in the transcript
    /// and no reply is appended; the student just submits again.
    async fn chat_turn(&self, state: &mut SessionState, text: String) -> SessionResult<Outcome> {
        state.transcript.append(Message::user(text))?;

        // The instruction is rebuilt from the active category on every
        // call; a request never carries a stale persona.
        let instruction = persona_prompt(state.category);
        let turns: Vec<Message> = state.transcript.visible().cloned().collect();

        let reply = match self.client.complete(instruction, turns).await {
            Ok(reply) => reply.into_text(),
            Err(err) => {
                warn!(error = %err, "completion failed, keeping the student's turn");
                return Err(err.into());
            }
        };

        state.transcript.append(Message::assistant(reply.clone()))?;

        let celebrate = is_praise(&reply);
        Ok(Outcome {
            reply: Some(reply),
            celebrate,
            download: None,
            notice: celebrate
                .then(|| "🎉 통과! 아주 논리적인 수정이었습니다. 상담 일지를 저장하세요.".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use homeroom_core::{CompletionReply, CompletionRequest, Role};
    use homeroom_llm::ClientError;
    use homeroom_prompt::{Category, IdeaKind};

    /// Transport that always answers with a fixed outcome.
    struct FixedTransport {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedTransport {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionTransport for FixedTransport {
        fn model(&self) -> &str {
            "mock-model"
        }

        async fn send(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionReply, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(CompletionReply::new("mock-model", text)),
                None => Err(ClientError::Auth("invalid api key".to_string())),
            }
        }
    }

    fn handler(transport: FixedTransport) -> SessionHandler<FixedTransport> {
        SessionHandler::new(ResilientClient::new(transport))
    }

    #[tokio::test]
    async fn submit_idea_opens_the_chat_gate() {
        let handler = handler(FixedTransport::replying("좋은 선택입니다. 구체적으로 설명해볼까요?"));
        let mut state = SessionState::new(Category::SchoolLife);

        let outcome = handler
            .handle(&mut state, Action::SubmitIdea(IdeaKind::Snack))
            .await
            .unwrap();

        assert!(state.idea_selected);
        assert_eq!(state.transcript.visible_len(), 2);
        assert_eq!(
            outcome.reply.as_deref(),
            Some("좋은 선택입니다. 구체적으로 설명해볼까요?")
        );
        assert!(!outcome.celebrate);

        let roles: Vec<Role> = state.transcript.visible().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[tokio::test]
    async fn chat_is_rejected_before_an_idea_is_picked() {
        let handler = handler(FixedTransport::replying("unreachable"));
        let mut state = SessionState::new(Category::SchoolLife);

        let err = handler
            .handle(&mut state, Action::SubmitChat("쿠키를 팔래요".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::IdeaNotSelected));
        assert!(state.transcript.is_empty());
        assert_eq!(handler.client.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_second_idea_pick_is_rejected() {
        let handler = handler(FixedTransport::replying("unreachable"));
        let mut state = SessionState::new(Category::SchoolLife);
        state.idea_selected = true;

        let err = handler
            .handle(&mut state, Action::SubmitIdea(IdeaKind::Craft))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::IdeaAlreadySelected));
    }

    #[tokio::test]
    async fn failed_completion_keeps_the_student_turn_only() {
        let handler = handler(FixedTransport::failing());
        let mut state = SessionState::new(Category::SchoolLife);
        state.idea_selected = true;

        let err = handler
            .handle(&mut state, Action::SubmitChat("쿠키를 팔래요".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Client(ClientError::Auth(_))));
        // the just-submitted turn stays, no reply was appended
        assert_eq!(state.transcript.visible_len(), 1);
        assert_eq!(
            state.transcript.visible().next().unwrap().role,
            Role::User
        );
    }

    #[tokio::test]
    async fn praise_reply_triggers_the_celebration() {
        let handler = handler(FixedTransport::replying(
            "아주 훌륭합니다. 정확하게 문제를 해결했군요.",
        ));
        let mut state = SessionState::new(Category::SchoolLife);
        state.idea_selected = true;

        let outcome = handler
            .handle(
                &mut state,
                Action::SubmitChat("재료비는 용돈을 모아 마련할게요".to_string()),
            )
            .await
            .unwrap();

        assert!(outcome.celebrate);
        assert!(outcome.notice.unwrap().contains("통과"));
    }

    #[tokio::test]
    async fn save_log_exports_the_journal() {
        let handler = handler(FixedTransport::replying("구체적으로 설명해볼까요?"));
        let mut state = SessionState::new(Category::SchoolLife);

        // nothing to save yet
        let outcome = handler.handle(&mut state, Action::SaveLog).await.unwrap();
        assert!(outcome.download.is_none());
        assert_eq!(
            outcome.notice.as_deref(),
            Some("저장할 대화 내용이 없습니다.")
        );

        handler
            .handle(&mut state, Action::SubmitIdea(IdeaKind::Games))
            .await
            .unwrap();

        let outcome = handler.handle(&mut state, Action::SaveLog).await.unwrap();
        let download = outcome.download.unwrap();
        assert!(download.file_name.starts_with("창업멘토링_"));
        assert_eq!(download.data, state.transcript.export());
    }

    #[tokio::test]
    async fn clear_log_starts_the_session_over() {
        let handler = handler(FixedTransport::replying("구체적으로 설명해볼까요?"));
        let mut state = SessionState::new(Category::Environment);

        handler
            .handle(&mut state, Action::SubmitIdea(IdeaKind::EcoLiving))
            .await
            .unwrap();
        assert!(state.idea_selected);

        handler.handle(&mut state, Action::ClearLog).await.unwrap();

        assert!(!state.idea_selected);
        assert!(state.transcript.is_empty());
    }

    #[tokio::test]
    async fn category_switch_preserves_the_conversation() {
        let handler = handler(FixedTransport::replying("구체적으로 설명해볼까요?"));
        let mut state = SessionState::new(Category::SchoolLife);

        handler
            .handle(&mut state, Action::SubmitIdea(IdeaKind::Digital))
            .await
            .unwrap();

        handler
            .handle(&mut state, Action::SelectCategory(Category::FutureTech))
            .await
            .unwrap();

        assert_eq!(state.category, Category::FutureTech);
        assert_eq!(state.transcript.visible_len(), 2);
        assert!(state
            .transcript
            .system_text()
            .contains(Category::FutureTech.label()));
    }
}
