//! Bordered panel
//!
//! Width is measured on the visible text (ANSI escapes stripped, wide
//! characters counted by `unicode-width`) so colored rows stay aligned.

use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn for_mode(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    rows: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn titled(title: impl Into<String>, style: PanelStyle) -> Self {
        Self {
            title: Some(title.into()),
            rows: Vec::new(),
            style,
        }
    }

    /// Multi-line text becomes one row per line.
    pub fn row(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.rows.extend(text.lines().map(str::to_string));
    }

    pub fn blank(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let b = Borders::for_mode(supports_unicode);
        let lines: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.rows.iter().map(String::as_str))
            .collect();
        let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2;

        let paint = |s: &str| self.paint_border(s, supports_color);
        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.repeat(inner),
            b.top_right
        )));
        out.push('\n');
        for line in lines {
            let pad = inner - 1 - visible_width(line);
            out.push_str(&paint(b.vertical));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(b.vertical));
            out.push('\n');
        }
        out.push_str(&paint(&format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner),
            b.bottom_right
        )));
        out.push('\n');
        out
    }

    fn paint_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Warning => theme::colors::WARNING,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Drop `ESC [ ... <letter>` sequences.
fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_the_widest_line() {
        let mut panel = Panel::titled("Title", PanelStyle::Info);
        panel.row("a much longer row");
        panel.blank();

        let rendered = panel.render(false, false);
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();

        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.starts_with("+---"));
    }

    #[test]
    fn multiline_text_becomes_rows() {
        let mut panel = Panel::titled("T", PanelStyle::Error);
        panel.row("one\ntwo");

        let rendered = panel.render(false, true);

        let two = rendered.lines().find(|l| l.contains("two")).unwrap();
        assert!(two.starts_with(theme::borders::VERTICAL));
    }

    #[test]
    fn ansi_codes_do_not_count_toward_width() {
        let colored = format!("{}", "ok".with(theme::colors::SUCCESS));
        assert_eq!(visible_width(&colored), 2);
        assert_eq!(visible_width("✓ done"), 6);
    }
}
