//! Account record page: classification badge, opportunity total and the
//! record details, either read-only or as an inline edit form.

use clientpage_core::{AccountField, FeedError, ViewModel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, EventResult, ViewContext};
use crate::state::AppState;
use crate::util::styles::{
    FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, WARNING_COLOR, badge_style, focused_block, icon_glyph,
    value_color,
};

const INSUFFICIENT_PRIVILEGES: &str = "You do not have the level of access necessary to perform the operation you requested. Please contact the owner of the record or your administrator if access is necessary.";

/// Width of the field label column
const LABEL_WIDTH: usize = 26;

pub struct RecordView;

impl RecordView {
    pub fn new() -> Self {
        Self
    }

    fn render_denied(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Insufficient Privileges",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(INSUFFICIENT_PRIVILEGES),
        ];
        if let Some(FeedError::ReadAccess(e)) = &ctx.controller.state().error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                e.message.clone(),
                Style::default().fg(HELP_COLOR),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(focused_block(" Account ", false));
        frame.render_widget(paragraph, area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from("Loading...")])
            .alignment(Alignment::Center)
            .style(Style::default().fg(HELP_COLOR))
            .block(focused_block(" Account ", false));
        frame.render_widget(paragraph, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext, view: &ViewModel) {
        let name = ctx
            .controller
            .snapshot()
            .map(|s| s.name.clone())
            .unwrap_or_default();

        let mut title = vec![
            Span::styled(
                name,
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!(" {} ", view.badge.label), badge_style(view.badge.style)),
        ];
        if view.show_edit_button {
            let hint = if view.is_edit_mode {
                ctx.keybindings.global.cancel.join("/")
            } else {
                ctx.keybindings.record.toggle_edit.join("/")
            };
            title.push(Span::raw("  "));
            title.push(Span::styled(
                format!(
                    "[{hint}] {} {}",
                    icon_glyph(view.edit_icon),
                    view.edit_button_label
                ),
                Style::default().fg(FOCUS_COLOR),
            ));
        }

        let amount = ctx.controller.state().total_opportunity_amount;
        let mut lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::raw("Total Opportunity Amount: "),
                Span::styled(
                    view.formatted_amount.clone(),
                    Style::default().fg(value_color(amount)),
                ),
            ]),
        ];
        if let Some(FeedError::Classification(e)) = &ctx.controller.state().error {
            lines.push(Line::from(Span::styled(
                format!("Classification unavailable: {e}"),
                Style::default().fg(WARNING_COLOR),
            )));
        }

        let paragraph = Paragraph::new(lines).block(focused_block(" Account ", false));
        frame.render_widget(paragraph, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext, view: &ViewModel) {
        let form = &ctx.state.form;
        let editing = view.is_edit_mode && form.active;
        let snapshot = ctx.controller.snapshot();

        let lines: Vec<Line> = AccountField::ALL
            .iter()
            .map(|field| {
                let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH);
                if editing {
                    let selected = form.selected_field() == *field;
                    let marker = if selected { "> " } else { "  " };
                    let value = if selected {
                        format!("{}▏", form.value(*field))
                    } else {
                        form.value(*field).to_string()
                    };
                    let style = if selected {
                        Style::default().fg(FOCUS_COLOR)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{marker}{label}"), style),
                        Span::styled(value, style),
                    ])
                } else {
                    let value = snapshot.and_then(|s| s.get(*field)).unwrap_or("");
                    Line::from(vec![
                        Span::styled(format!("  {label}"), Style::default().fg(HELP_COLOR)),
                        Span::raw(value.to_string()),
                    ])
                }
            })
            .collect();

        let title = match (editing, ctx.controller.is_submit_pending()) {
            (true, true) => " Edit Details (saving...) ",
            (true, false) => " Edit Details ",
            (false, _) => " Details ",
        };
        let paragraph = Paragraph::new(lines).block(focused_block(title, editing));
        frame.render_widget(paragraph, area);
    }
}

impl Default for RecordView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RecordView {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if !state.form.active {
            return EventResult::NotHandled;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char(c) => {
                state.form.insert_char(c);
                EventResult::Handled
            }
            KeyCode::Backspace => {
                state.form.backspace();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        let view = ctx.controller.view();
        if view.show_insufficient_privileges {
            self.render_denied(frame, area, ctx);
            return;
        }
        if !view.show_content {
            self.render_loading(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Min(0),    // Details
            ])
            .split(area);

        self.render_header(frame, chunks[0], ctx, &view);
        self.render_fields(frame, chunks[1], ctx, &view);
    }
}
