//! Record view controller for high net worth client pages
//!
//! This crate holds the presentation logic of an account record page:
//! - A view/edit mode controller fed by a record feed and a classification service
//! - The edit-mode policy gating inline edit on high net worth records
//! - Derived presentation values (badge, currency amount, edit affordance)
//! - Port traits for the external collaborators, so hosts and tests can supply their own

pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod ports;
pub mod presentation;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{RecordViewController, default_edit_mode};
pub use error::{
    ClassificationError, EditError, FeedError, PermissionViolation, ReadAccessError, UpdateError,
};
pub use format::{UNAVAILABLE_AMOUNT, format_currency};
pub use model::{
    AccountField, BillingAddress, ClassificationResult, FieldChanges, Notification, RecordId,
    RecordSnapshot, Severity,
};
pub use ports::{
    ClassificationService, HIGH_NET_WORTH_PERMISSION, NotificationSink, PermissionResolver, Ports,
    RecordReader, RecordWriter, ServiceEvent, StaticPermission,
};
pub use presentation::{Badge, BadgeStyle, EditIcon, ViewModel};
pub use state::{ControllerState, Phase};
