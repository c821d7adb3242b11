use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::chat::{format_content, Emphasis, Message, Sender};

const INDENT: &str = "    ";

fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Cyan),
        Sender::Bot => Style::default().fg(Color::Green),
    }
}

fn emphasis_style(emphasis: Emphasis) -> Style {
    let mut style = Style::default().fg(Color::White);
    if emphasis.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if emphasis.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// Display lines for one transcript entry: sender label, formatted body, blank spacer.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("{}:", message.sender().label()),
        sender_style(message.sender()).add_modifier(Modifier::BOLD),
    ))];

    for formatted in format_content(message.content()) {
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(
            formatted
                .into_iter()
                .map(|segment| Span::styled(segment.text, emphasis_style(segment.emphasis))),
        );
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines
}

/// Shown while the transcript is still empty
pub fn welcome_lines(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Welcome to {}!", title)),
        Line::from(""),
        Line::from("Ask a question and press Enter to send."),
        Line::from("Replies may take a moment; the spinner below shows a request in flight."),
    ]
}
