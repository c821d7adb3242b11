// src/chat/format.rs
//! Minimal message formatting: line breaks, `**bold**`, `*italic*`.
//!
//! Bold is resolved first, then italic over the result, so `*a **b** c*` is an
//! italic run containing a bold word. Emphasis may span line breaks. Anything
//! else (headings, lists, links, code) passes through untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

pub type FormattedLine = Vec<Segment>;

/// Format message content into display lines of styled segments.
pub fn format_content(content: &str) -> Vec<FormattedLine> {
    let chars: Vec<char> = content.chars().filter(|c| *c != '\r').collect();
    let bolded = apply_bold(&chars);
    let styled = apply_italic(&bolded);
    split_lines(&styled)
}

/// Concatenate a line's segments, dropping style.
pub fn plain_text(line: &[Segment]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

fn apply_bold(chars: &[char]) -> Vec<(char, bool)> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if is_double_star(chars, i) {
            if let Some(close) = (i + 2..chars.len()).find(|&k| is_double_star(chars, k)) {
                out.extend(chars[i + 2..close].iter().map(|&c| (c, true)));
                i = close + 2;
                continue;
            }
        }
        out.push((chars[i], false));
        i += 1;
    }

    out
}

fn apply_italic(chars: &[(char, bool)]) -> Vec<(char, Emphasis)> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let (c, bold) = chars[i];
        if c == '*' {
            if let Some(close) = (i + 1..chars.len()).find(|&k| chars[k].0 == '*') {
                out.extend(chars[i + 1..close].iter().map(|&(c, bold)| {
                    (c, Emphasis { bold, italic: true })
                }));
                i = close + 1;
                continue;
            }
        }
        out.push((c, Emphasis { bold, italic: false }));
        i += 1;
    }

    out
}

fn split_lines(chars: &[(char, Emphasis)]) -> Vec<FormattedLine> {
    let mut lines: Vec<FormattedLine> = vec![Vec::new()];

    for &(c, emphasis) in chars {
        if c == '\n' {
            lines.push(Vec::new());
            continue;
        }

        if let Some(line) = lines.last_mut() {
            match line.last_mut() {
                Some(segment) if segment.emphasis == emphasis => segment.text.push(c),
                _ => line.push(Segment { text: c.to_string(), emphasis }),
            }
        }
    }

    lines
}

fn is_double_star(chars: &[char], i: usize) -> bool {
    chars.get(i) == Some(&'*') && chars.get(i + 1) == Some(&'*')
}
