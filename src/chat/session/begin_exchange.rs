use tracing::debug;

use super::{ChatSession, PendingExchange, SessionState};
use crate::chat::{ChatView, Message};

impl ChatSession {
    /// Idle -> Sending. Returns the request to issue, or `None` when the
    /// input is blank or an exchange is already in flight.
    pub fn begin_exchange(&mut self, view: &mut dyn ChatView) -> Option<PendingExchange> {
        if self.state == SessionState::Sending {
            debug!("Submit ignored: exchange already in flight");
            return None;
        }

        let message = view.input().trim().to_string();
        if message.is_empty() {
            return None;
        }

        let entry = self.transcript.push(Message::new_user(message.clone()));
        view.render(entry);
        view.clear_input();

        self.state = SessionState::Sending;
        view.set_controls_enabled(false);
        self.indicator.set_loading_visible(true);

        Some(PendingExchange { message })
    }
}
