//! Common styling utilities for TUI components

use clientpage_core::{BadgeStyle, EditIcon, Severity};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels and the selected form field
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Badge colors: success badges are green, default badges gray
pub fn badge_style(style: BadgeStyle) -> Style {
    match style {
        BadgeStyle::Success => Style::default()
            .fg(Color::Black)
            .bg(POSITIVE_COLOR)
            .add_modifier(Modifier::BOLD),
        BadgeStyle::Default => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => HEADER_COLOR,
        Severity::Success => POSITIVE_COLOR,
        Severity::Warning => WARNING_COLOR,
        Severity::Error => NEGATIVE_COLOR,
    }
}

/// Terminal glyph for an edit button icon
pub fn icon_glyph(icon: EditIcon) -> &'static str {
    match icon {
        EditIcon::Edit => "✎",
        EditIcon::Close => "✕",
    }
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Account", true);
        assert!(format!("{:?}", block).contains("Account"));
    }

    #[test]
    fn test_badge_style() {
        assert_eq!(badge_style(BadgeStyle::Success).bg, Some(POSITIVE_COLOR));
        assert_eq!(badge_style(BadgeStyle::Default).bg, Some(Color::Gray));
    }

    #[test]
    fn test_severity_color() {
        assert_eq!(severity_color(Severity::Error), NEGATIVE_COLOR);
        assert_eq!(severity_color(Severity::Success), POSITIVE_COLOR);
    }

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(100.0), POSITIVE_COLOR);
        assert_eq!(value_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
    }
}
