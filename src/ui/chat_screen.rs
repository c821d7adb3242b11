// src/ui/chat_screen.rs

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::Line;
use throbber_widgets_tui::ThrobberState;

use crate::chat::{ChatView, Message};
use crate::event::AppEvent;
use crate::ui::chat_history::message_lines;

/// Terminal side of the conversation: input buffer, rendered transcript,
/// scroll position and control state.
#[derive(Debug, Default)]
pub struct ChatScreen {
    input: String,
    controls_enabled: bool,
    input_focused: bool,
    lines: Vec<Line<'static>>,
    scroll_offset: usize,
    /// Wrapped line count and viewport size from the last draw
    content_height: usize,
    viewport_height: usize,
    pub throbber: ThrobberState,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self {
            controls_enabled: true,
            input_focused: true,
            ..Default::default()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.push_input('\n');
                None
            }
            KeyCode::Enter => Some(AppEvent::ChatSubmit),
            KeyCode::Backspace => {
                if self.controls_enabled {
                    self.input.pop();
                }
                None
            }
            KeyCode::Char(ch) => {
                self.push_input(ch);
                None
            }
            KeyCode::Up => {
                self.scroll_up(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_up(self.viewport_height.max(1));
                None
            }
            KeyCode::Down => {
                self.scroll_down(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_down(self.viewport_height.max(1));
                None
            }
            _ => None,
        }
    }

    fn push_input(&mut self, ch: char) {
        if self.controls_enabled {
            self.input.push(ch);
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Total transcript height in lines; an offset at or past it pins the view to the bottom.
    pub fn scroll_height(&self) -> usize {
        self.lines.len().max(self.content_height)
    }

    pub fn is_pinned_to_bottom(&self) -> bool {
        self.scroll_offset >= self.scroll_height()
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.scroll_height();
    }

    fn max_scroll(&self) -> usize {
        self.scroll_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll()).saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let next = self.scroll_offset.min(self.max_scroll()) + amount;
        if next >= self.max_scroll() {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = next;
        }
    }

    /// Record the drawn geometry and return the first visible line.
    pub fn layout_scroll(&mut self, content_height: usize, viewport_height: usize) -> usize {
        let pinned = self.is_pinned_to_bottom();
        self.content_height = content_height;
        self.viewport_height = viewport_height;

        if pinned {
            self.scroll_to_bottom();
        }
        self.scroll_offset.min(self.max_scroll())
    }

    pub fn tick(&mut self) {
        self.throbber.calc_next();
    }
}

impl ChatView for ChatScreen {
    fn input(&self) -> &str {
        &self.input
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn render(&mut self, message: &Message) {
        self.lines.extend(message_lines(message));
        self.scroll_to_bottom();
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        if !enabled {
            self.input_focused = false;
        }
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ChatScreen, text: &str) {
        for ch in text.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_typing_fills_input() {
        let mut screen = ChatScreen::new();
        type_text(&mut screen, "hey");
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.input(), "he");
    }

    #[test]
    fn test_enter_submits_and_shift_enter_breaks_line() {
        let mut screen = ChatScreen::new();
        type_text(&mut screen, "a");

        let shifted = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert!(screen.handle_key(shifted).is_none());
        type_text(&mut screen, "b");
        assert_eq!(screen.input(), "a\nb");

        assert!(matches!(screen.handle_key(key(KeyCode::Enter)), Some(AppEvent::ChatSubmit)));
    }

    #[test]
    fn test_disabled_controls_ignore_typing() {
        let mut screen = ChatScreen::new();
        type_text(&mut screen, "x");
        screen.set_controls_enabled(false);

        type_text(&mut screen, "yz");
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.input(), "x");
        assert!(!screen.input_focused());

        screen.set_controls_enabled(true);
        screen.focus_input();
        assert!(screen.controls_enabled());
        assert!(screen.input_focused());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut screen = ChatScreen::new();
        assert!(matches!(screen.handle_key(key(KeyCode::Esc)), Some(AppEvent::Quit)));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(screen.handle_key(ctrl_c), Some(AppEvent::Quit)));
        assert_eq!(screen.input(), "");
    }

    #[test]
    fn test_render_scrolls_to_bottom_each_time() {
        let mut screen = ChatScreen::new();

        screen.render(&Message::new_user("one"));
        assert_eq!(screen.scroll_offset(), screen.scroll_height());

        screen.render(&Message::new_bot("two\nlines"));
        assert_eq!(screen.scroll_height(), 7);
        assert_eq!(screen.scroll_offset(), screen.scroll_height());
    }

    #[test]
    fn test_render_after_scrolling_up_returns_to_bottom() {
        let mut screen = ChatScreen::new();
        for i in 0..10 {
            screen.render(&Message::new_user(format!("message {}", i)));
        }
        screen.layout_scroll(30, 5);

        screen.scroll_up(3);
        assert!(!screen.is_pinned_to_bottom());
        assert_eq!(screen.scroll_offset(), 22);

        screen.render(&Message::new_bot("reply"));
        assert!(screen.is_pinned_to_bottom());
    }

    #[test]
    fn test_layout_scroll_clamps_pinned_offset_to_last_page() {
        let mut screen = ChatScreen::new();
        screen.render(&Message::new_user("a\nb\nc\nd"));

        // wrapping made the content taller than the logical line count
        let first_visible = screen.layout_scroll(12, 4);
        assert_eq!(first_visible, 8);
        assert_eq!(screen.scroll_offset(), 12);
    }

    #[test]
    fn test_scroll_down_past_end_pins() {
        let mut screen = ChatScreen::new();
        for _ in 0..5 {
            screen.render(&Message::new_user("x"));
        }
        screen.layout_scroll(15, 5);
        screen.scroll_up(4);
        screen.scroll_down(10);
        assert!(screen.is_pinned_to_bottom());
    }
}
