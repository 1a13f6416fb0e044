use super::{Component, EventResult, ViewContext};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR, severity_color};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(ctx: &ViewContext) -> String {
        let state = ctx.controller.state();
        ctx.keybindings.help_text(
            state.has_access,
            state.is_edit_mode,
            ctx.controller.view().show_edit_button,
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        let content = if let Some(toast) = &ctx.state.toast {
            let color = severity_color(toast.notification.severity);
            Line::from(vec![
                Span::styled(
                    format!("{}: ", toast.notification.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(toast.notification.message.clone()),
            ])
        } else if let Some(error) = &ctx.state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error.clone()),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(ctx),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
