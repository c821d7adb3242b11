use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Text,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::app::App;
use crate::chat::ChatView;
use crate::ui::{chat_history, components::UiComponent, style::dim_unless_focused};

const HELP_TEXT: &str = "Enter: send • Shift+Enter: new line • ↑↓ PgUp PgDn: scroll • Esc: quit";
const MAX_INPUT_ROWS: u16 = 6;

pub fn render_chat(app: &mut App, area: Rect, buf: &mut Buffer) {
    let input_rows = (app.screen.input().split('\n').count() as u16).min(MAX_INPUT_ROWS);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Title
            Constraint::Min(1),                 // Transcript
            Constraint::Length(input_rows + 2), // Input box
            Constraint::Length(3),              // Help / loading
        ])
        .split(area);

    render_title(app, main_layout[0], buf);
    render_transcript(app, main_layout[1], buf);
    render_input(app, main_layout[2], buf);
    render_status(app, main_layout[3], buf);
}

fn render_title(app: &App, area: Rect, buf: &mut Buffer) {
    Paragraph::new(app.title.as_str())
        .block(
            Block::bordered()
                .title("Chat")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
        )
        .fg(Color::Green)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_transcript(app: &mut App, area: Rect, buf: &mut Buffer) {
    let text = if app.session.transcript().is_empty() {
        Text::from(chat_history::welcome_lines(&app.title))
    } else {
        Text::from(app.screen.lines().to_vec())
    };

    let block = Block::bordered()
        .title("Conversation (↑↓ to scroll)")
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let content_height = paragraph.line_count(inner.width);
    let first_visible = app.screen.layout_scroll(content_height, inner.height as usize);

    paragraph
        .block(block)
        .scroll((first_visible.min(u16::MAX as usize) as u16, 0))
        .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let enabled = app.screen.controls_enabled();
    let title = if enabled { "Type your message [Enter: Send]" } else { "Waiting for reply..." };
    let base = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut rows: Vec<String> = app.screen.input().split('\n').map(|l| l.to_string()).collect();
    let skip = rows.len().saturating_sub(MAX_INPUT_ROWS as usize);
    rows.drain(..skip);
    if let Some(first) = rows.first_mut() {
        first.insert_str(0, "> ");
    }

    Paragraph::new(rows.join("\n"))
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
        )
        .style(dim_unless_focused(app.screen.input_focused(), base))
        .render(area, buf);
}

fn render_status(app: &mut App, area: Rect, buf: &mut Buffer) {
    if !app.loading.is_visible() {
        UiComponent::help(HELP_TEXT).render(area, buf);
        return;
    }

    let block = Block::bordered()
        .title(" Status ")
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    block.render(area, buf);

    let throbber = Throbber::default()
        .label("Waiting for the assistant...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX);
    StatefulWidget::render(throbber, inner, buf, &mut app.screen.throbber);
}
