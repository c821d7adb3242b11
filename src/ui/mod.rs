pub mod chat_history;
pub mod chat_screen;
pub mod chat_window;
pub mod components;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};
use crate::app::App;
use crate::ui::chat_window::render_chat;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_chat(self, area, buf);
    }
}
