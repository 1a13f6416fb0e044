use std::fmt;

use crate::model::RecordId;

/// The record feed failed to deliver the account.
///
/// Treated as an authorization failure: access is revoked for the lifetime
/// of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadAccessError {
    pub record_id: RecordId,
    pub message: String,
}

impl ReadAccessError {
    pub fn new(record_id: RecordId, message: impl Into<String>) -> Self {
        Self {
            record_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReadAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read record {}: {}", self.record_id, self.message)
    }
}

impl std::error::Error for ReadAccessError {}

/// The classification call failed. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// The request could not be handed to the service
    Unavailable,
    /// The service answered with an error
    Service(String),
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationError::Unavailable => write!(f, "classification service unavailable"),
            ClassificationError::Service(msg) => write!(f, "classification failed: {msg}"),
        }
    }
}

impl std::error::Error for ClassificationError {}

/// A record update was rejected. `message` is the server-supplied text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateError {
    pub message: String,
}

impl UpdateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UpdateError {}

/// Most recent failure from either data feed, held in the controller's error slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    ReadAccess(ReadAccessError),
    Classification(ClassificationError),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::ReadAccess(e) => write!(f, "{e}"),
            FeedError::Classification(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<ReadAccessError> for FeedError {
    fn from(e: ReadAccessError) -> Self {
        FeedError::ReadAccess(e)
    }
}

impl From<ClassificationError> for FeedError {
    fn from(e: ClassificationError) -> Self {
        FeedError::Classification(e)
    }
}

/// Edit refused on a high net worth record because the elevated permission is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionViolation;

impl PermissionViolation {
    pub const MESSAGE: &'static str =
        "You do not have permission to edit High Net Worth Client records";
}

impl fmt::Display for PermissionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for PermissionViolation {}

/// Why a user edit action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// Read access to the record was revoked
    NoAccess,
    /// Record or classification has not resolved yet
    Loading,
    /// Submit outside of inline edit mode
    NotEditing,
    Permission(PermissionViolation),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NoAccess => write!(f, "insufficient privileges to view this record"),
            EditError::Loading => write!(f, "record is still loading"),
            EditError::NotEditing => write!(f, "record is not in edit mode"),
            EditError::Permission(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EditError {}

impl From<PermissionViolation> for EditError {
    fn from(e: PermissionViolation) -> Self {
        EditError::Permission(e)
    }
}
