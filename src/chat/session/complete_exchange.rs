use tracing::{debug, error, warn};

use super::{ChatSession, ExchangeOutcome, SessionState, APOLOGY};
use crate::chat::{ChatView, Message};
use crate::error::WidgetError;

impl ChatSession {
    /// Apply the result of the in-flight exchange, then return to Idle.
    pub fn complete_exchange(&mut self, outcome: ExchangeOutcome, view: &mut dyn ChatView) {
        if self.state != SessionState::Sending {
            warn!("Dropping chat reply received while idle");
            return;
        }

        let reply = match outcome {
            Ok(reply) => {
                if let Some(metadata) = &reply.metadata {
                    debug!("Reply metadata: {}", metadata);
                }
                Message::new_bot(reply.ai_response)
            }
            Err(e) => {
                error!("Chat error: {}", WidgetError::ChatExchangeFailure(e));
                Message::new_bot(APOLOGY)
            }
        };

        let entry = self.transcript.push(reply);
        view.render(entry);

        self.state = SessionState::Idle;
        view.set_controls_enabled(true);
        self.indicator.set_loading_visible(false);
        view.focus_input();
    }
}
