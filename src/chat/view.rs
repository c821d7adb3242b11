use super::message::Message;

/// What the session needs from whatever displays the conversation.
pub trait ChatView {
    /// Text currently waiting in the input field, untrimmed.
    fn input(&self) -> &str;
    fn clear_input(&mut self);
    /// Append one message to the visible transcript and scroll to the bottom.
    fn render(&mut self, message: &Message);
    /// Enable or disable both the input field and the submit control.
    fn set_controls_enabled(&mut self, enabled: bool);
    fn focus_input(&mut self);
}
