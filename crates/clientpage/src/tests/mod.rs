//! Tests driving the record page through the real service worker
//!
//! Tests are organized by topic:
//! - `worker` - Record feed, classification and updates served by the worker
//! - `page` - The app loop: controller, edit form and toasts wired together

mod page;
mod worker;

use std::time::Duration;

use clientpage_core::RecordId;

/// Long enough for a zero-latency worker to answer
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

pub fn harbor() -> RecordId {
    RecordId::from("001Dn000001HARB")
}

pub fn maple() -> RecordId {
    RecordId::from("001Dn000002MAPL")
}

pub fn vault() -> RecordId {
    RecordId::from("001Dn000003VALT")
}
