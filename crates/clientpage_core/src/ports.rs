//! Collaborators the record view controller talks to.
//!
//! Every request port is non-blocking: it only dispatches the request and
//! reports whether that succeeded. Results come back later, in whatever
//! order the host receives them, as [`ServiceEvent`]s passed to
//! [`RecordViewController::handle_event`](crate::RecordViewController::handle_event).

use crate::error::{ClassificationError, ReadAccessError, UpdateError};
use crate::model::{AccountField, ClassificationResult, FieldChanges, Notification, RecordId, RecordSnapshot};

/// Custom permission granting edit rights on high net worth records
pub const HIGH_NET_WORTH_PERMISSION: &str = "High_Net_Worth_Client_Service_Representative";

/// Reactive record feed
pub trait RecordReader {
    /// Start delivering snapshots (or an error) for `record_id`.
    ///
    /// Returns true if the subscription was dispatched.
    fn subscribe(&self, record_id: &RecordId, fields: &[AccountField]) -> bool;

    /// Stop delivering snapshots for `record_id`
    fn unsubscribe(&self, record_id: &RecordId);
}

/// Record update mechanism used by the edit form
pub trait RecordWriter {
    /// Returns true if the update was dispatched
    fn submit(&self, record_id: &RecordId, changes: FieldChanges) -> bool;
}

/// Remote high net worth check
pub trait ClassificationService {
    /// Returns true if the call was dispatched
    fn request(&self, record_id: &RecordId) -> bool;
}

pub trait PermissionResolver {
    fn has_permission(&self, name: &str) -> bool;
}

/// Toast sink. Fire-and-forget.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Completion delivered back to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    Record {
        record_id: RecordId,
        result: Result<RecordSnapshot, ReadAccessError>,
    },
    Classification {
        record_id: RecordId,
        result: Result<ClassificationResult, ClassificationError>,
    },
    Update {
        record_id: RecordId,
        result: Result<(), UpdateError>,
    },
}

impl ServiceEvent {
    pub fn record_id(&self) -> &RecordId {
        match self {
            ServiceEvent::Record { record_id, .. }
            | ServiceEvent::Classification { record_id, .. }
            | ServiceEvent::Update { record_id, .. } => record_id,
        }
    }
}

/// Collaborators injected into a controller at construction
pub struct Ports {
    pub reader: Box<dyn RecordReader>,
    pub writer: Box<dyn RecordWriter>,
    pub classifier: Box<dyn ClassificationService>,
    pub notifier: Box<dyn NotificationSink>,
}

/// Fixed permission answer, e.g. from session configuration
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub bool);

impl PermissionResolver for StaticPermission {
    fn has_permission(&self, _name: &str) -> bool {
        self.0
    }
}
