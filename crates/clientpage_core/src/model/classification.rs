use serde::{Deserialize, Serialize};

/// Outcome of the server-side high net worth check for one account.
///
/// `total_amount` is the aggregate opportunity value the classification was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_high_net_worth: bool,
    pub total_amount: f64,
}

impl ClassificationResult {
    pub fn new(is_high_net_worth: bool, total_amount: f64) -> Self {
        Self {
            is_high_net_worth,
            total_amount,
        }
    }
}
