use super::ChatSession;
use crate::api::ChatBackend;
use crate::chat::ChatView;

impl ChatSession {
    /// Run one full exchange in place. Returns whether the submit was accepted.
    pub async fn submit(&mut self, backend: &dyn ChatBackend, view: &mut dyn ChatView) -> bool {
        let Some(pending) = self.begin_exchange(view) else {
            return false;
        };

        let outcome = backend.chat(&pending.message).await;
        self.complete_exchange(outcome, view);
        true
    }
}
