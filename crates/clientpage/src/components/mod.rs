pub mod record_view;
pub mod status_bar;

use clientpage_core::RecordViewController;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Everything a component may read while rendering
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub controller: &'a RecordViewController,
    pub keybindings: &'a KeybindingsConfig,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, ctx: &ViewContext);
}
