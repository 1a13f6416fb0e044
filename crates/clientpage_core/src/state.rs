use crate::error::FeedError;

/// Presentation state owned by a [`RecordViewController`](crate::RecordViewController)
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub is_high_net_worth: bool,
    pub is_edit_mode: bool,
    pub total_opportunity_amount: f64,
    pub has_access: bool,
    pub is_loading: bool,
    /// Most recent feed failure. Never cleared by a later success.
    pub error: Option<FeedError>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            is_high_net_worth: false,
            is_edit_mode: false,
            total_opportunity_amount: 0.0,
            has_access: true,
            is_loading: true,
            error: None,
        }
    }
}

/// Coarse lifecycle position, derived from [`ControllerState`] and what has resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first record snapshot
    Init,
    /// Record feed failed; content replaced by the insufficient privileges view
    Denied,
    /// Record loaded, waiting for classification
    Loaded,
    /// Classification failed; content shown without a classification
    Unclassified,
    ReadOnly,
    InlineEdit,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Denied => "denied",
            Phase::Loaded => "loaded",
            Phase::Unclassified => "unclassified",
            Phase::ReadOnly => "read-only",
            Phase::InlineEdit => "inline-edit",
        }
    }
}
