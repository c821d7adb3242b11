mod begin_exchange;
mod complete_exchange;
mod submit;

use std::sync::Arc;

use crate::api::ChatReply;
use crate::chat::Transcript;
use crate::error::TransportError;
use crate::health::LoadingIndicator;

/// Shown to the user in place of any chat failure.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

pub type ExchangeOutcome = Result<ChatReply, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
}

/// An accepted submit waiting to be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub message: String,
}

/// Mediates one request/response exchange at a time and owns the transcript
#[derive(Debug)]
pub struct ChatSession {
    state: SessionState,
    transcript: Transcript,
    indicator: Arc<dyn LoadingIndicator>,
}

impl ChatSession {
    pub fn new(indicator: Arc<dyn LoadingIndicator>) -> Self {
        Self {
            state: SessionState::Idle,
            transcript: Transcript::new(),
            indicator,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state == SessionState::Sending
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use crate::api::{ChatBackend, HealthReport};
    use crate::chat::{ChatView, Message, Sender};
    use crate::health::{HealthMonitor, LoadingFlag};

    type Log = Arc<Mutex<Vec<String>>>;

    #[derive(Debug, Clone, Copy)]
    enum Reply {
        Echo,
        ServerError,
    }

    #[derive(Debug)]
    struct FakeBackend {
        log: Log,
        reply: Reply,
    }

    #[async_trait]
    impl ChatBackend for FakeBackend {
        async fn health(&self) -> Result<HealthReport, TransportError> {
            Err(TransportError::Status(404))
        }

        async fn chat(&self, message: &str) -> Result<ChatReply, TransportError> {
            self.log.lock().unwrap().push(format!("request:{}", message));
            match self.reply {
                Reply::Echo => Ok(ChatReply { ai_response: format!("echo: {}", message), metadata: None }),
                Reply::ServerError => Err(TransportError::Status(500)),
            }
        }
    }

    struct RecordingView {
        log: Log,
        input: String,
        enabled: bool,
        focused: bool,
    }

    impl RecordingView {
        fn new(log: Log, input: &str) -> Self {
            Self { log, input: input.to_string(), enabled: true, focused: false }
        }
    }

    impl ChatView for RecordingView {
        fn input(&self) -> &str {
            &self.input
        }

        fn clear_input(&mut self) {
            self.input.clear();
        }

        fn render(&mut self, message: &Message) {
            let who = match message.sender() {
                Sender::User => "user",
                Sender::Bot => "bot",
            };
            self.log.lock().unwrap().push(format!("render:{}:{}", who, message.content()));
        }

        fn set_controls_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.focused = false;
        }

        fn focus_input(&mut self) {
            self.focused = true;
        }
    }

    fn fixture() -> (ChatSession, LoadingFlag, Log) {
        let flag = LoadingFlag::new();
        let backend = Arc::new(FakeBackend { log: Log::default(), reply: Reply::Echo });
        let monitor = HealthMonitor::new(backend, Some(flag.clone()));
        (ChatSession::new(Arc::new(monitor)), flag, Log::default())
    }

    #[test]
    fn test_begin_exchange_enters_sending() {
        let (mut session, flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "  what is a biopsy?  ");

        let pending = session.begin_exchange(&mut view).unwrap();

        assert_eq!(pending.message, "what is a biopsy?");
        assert_eq!(session.state(), SessionState::Sending);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().last(), Some(&Message::new_user("what is a biopsy?")));
        assert_eq!(view.input(), "");
        assert!(!view.enabled);
        assert!(flag.is_visible());
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let (mut session, flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), " \n\t ");

        assert!(session.begin_exchange(&mut view).is_none());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.transcript().is_empty());
        assert_eq!(view.input(), " \n\t ");
        assert!(view.enabled);
        assert!(!flag.is_visible());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_while_sending_is_rejected() {
        let (mut session, _flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "first");
        session.begin_exchange(&mut view).unwrap();

        view.input = "second".to_string();
        assert!(session.begin_exchange(&mut view).is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(view.input(), "second");
    }

    #[test]
    fn test_complete_exchange_success_returns_to_idle() {
        let (mut session, flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "hi");
        session.begin_exchange(&mut view).unwrap();

        let reply = ChatReply { ai_response: "Hello **world**".to_string(), metadata: None };
        session.complete_exchange(Ok(reply), &mut view);

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().last(), Some(&Message::new_bot("Hello **world**")));
        assert!(view.enabled);
        assert!(view.focused);
        assert!(!flag.is_visible());
    }

    #[test]
    fn test_reply_metadata_is_not_rendered() {
        let (mut session, _flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "hi");
        session.begin_exchange(&mut view).unwrap();

        let reply = ChatReply {
            ai_response: "plain answer".to_string(),
            metadata: Some(serde_json::json!({ "disease": "lung_cancer" })),
        };
        session.complete_exchange(Ok(reply), &mut view);

        assert_eq!(session.transcript().last(), Some(&Message::new_bot("plain answer")));
        assert_eq!(log.lock().unwrap().last().map(String::as_str), Some("render:bot:plain answer"));
    }

    #[test]
    fn test_complete_exchange_failure_shows_apology() {
        let (mut session, flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "hi");
        session.begin_exchange(&mut view).unwrap();

        session.complete_exchange(Err(TransportError::Status(500)), &mut view);

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().last(), Some(&Message::new_bot(APOLOGY)));
        assert!(view.enabled);
        assert!(!flag.is_visible());
    }

    #[test]
    fn test_stale_reply_while_idle_is_dropped() {
        let (mut session, _flag, log) = fixture();
        let mut view = RecordingView::new(log.clone(), "");

        session.complete_exchange(Err(TransportError::Status(500)), &mut view);
        assert!(session.transcript().is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_message_rendered_before_request() {
        let (mut session, _flag, log) = fixture();
        let backend = FakeBackend { log: log.clone(), reply: Reply::Echo };
        let mut view = RecordingView::new(log.clone(), "ping");

        assert!(session.submit(&backend, &mut view).await);

        let events = log.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "render:user:ping".to_string(),
                "request:ping".to_string(),
                "render:bot:echo: ping".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_cycles_back_to_idle_after_failure() {
        let (mut session, flag, log) = fixture();
        let backend = FakeBackend { log: log.clone(), reply: Reply::ServerError };
        let mut view = RecordingView::new(log.clone(), "one");

        assert!(session.submit(&backend, &mut view).await);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(view.enabled);
        assert!(!flag.is_visible());

        view.input = "two".to_string();
        assert!(session.submit(&backend, &mut view).await);
        assert_eq!(session.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let (mut session, _flag, log) = fixture();
        let backend = FakeBackend { log: log.clone(), reply: Reply::Echo };
        let mut view = RecordingView::new(log.clone(), "   ");

        assert!(!session.submit(&backend, &mut view).await);
        assert!(log.lock().unwrap().is_empty());
    }
}
