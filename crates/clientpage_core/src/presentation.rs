//! Read-only values the record view renders, derived from controller state.

use crate::format::format_currency;
use crate::state::ControllerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Default,
}

/// Classification badge shown next to the account name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub style: BadgeStyle,
}

impl Badge {
    pub const HIGH_NET_WORTH: Badge = Badge {
        label: "High Net Worth Client",
        style: BadgeStyle::Success,
    };
    pub const STANDARD: Badge = Badge {
        label: "Standard Client",
        style: BadgeStyle::Default,
    };

    pub fn for_classification(is_high_net_worth: bool) -> Self {
        if is_high_net_worth {
            Self::HIGH_NET_WORTH
        } else {
            Self::STANDARD
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIcon {
    Edit,
    Close,
}

impl EditIcon {
    /// Platform icon name
    pub fn name(&self) -> &'static str {
        match self {
            EditIcon::Edit => "utility:edit",
            EditIcon::Close => "utility:close",
        }
    }
}

/// Everything the view needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub badge: Badge,
    pub formatted_amount: String,
    pub show_content: bool,
    pub show_insufficient_privileges: bool,
    pub show_edit_button: bool,
    pub edit_button_label: &'static str,
    pub edit_icon: EditIcon,
    pub is_edit_mode: bool,
    pub is_loading: bool,
}

impl ViewModel {
    pub fn derive(state: &ControllerState, has_permission: bool) -> Self {
        Self {
            badge: Badge::for_classification(state.is_high_net_worth),
            formatted_amount: format_currency(state.total_opportunity_amount),
            show_content: show_content(state),
            show_insufficient_privileges: !state.has_access,
            show_edit_button: show_edit_button(state, has_permission),
            edit_button_label: edit_button_label(state.is_edit_mode),
            edit_icon: edit_icon(state.is_edit_mode),
            is_edit_mode: state.is_edit_mode,
            is_loading: state.is_loading,
        }
    }
}

pub fn show_content(state: &ControllerState) -> bool {
    state.has_access && !state.is_loading
}

/// Edit affordance: hidden on high net worth records unless the permission is held
pub fn show_edit_button(state: &ControllerState, has_permission: bool) -> bool {
    state.has_access && (!state.is_high_net_worth || has_permission)
}

pub fn edit_button_label(is_edit_mode: bool) -> &'static str {
    if is_edit_mode { "Cancel Edit" } else { "Edit" }
}

pub fn edit_icon(is_edit_mode: bool) -> EditIcon {
    if is_edit_mode {
        EditIcon::Close
    } else {
        EditIcon::Edit
    }
}
