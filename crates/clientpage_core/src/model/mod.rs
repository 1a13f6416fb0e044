mod classification;
mod ids;
mod notification;
mod record;

pub use classification::ClassificationResult;
pub use ids::RecordId;
pub use notification::{Notification, Severity};
pub use record::{AccountField, BillingAddress, FieldChanges, RecordSnapshot};
