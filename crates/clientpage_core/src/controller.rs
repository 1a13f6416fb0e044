//! View/edit mode controller for a single account record.
//!
//! The controller is driven from one thread. It issues requests through
//! [`Ports`] and receives their completions through [`RecordViewController::handle_event`].
//! The record feed is subscribed at mount; the first classification request
//! is only issued once the record feed has delivered a snapshot, so no
//! classification is ever requested for a record that cannot be read.

use tracing::{debug, error, info, warn};

use crate::error::{
    ClassificationError, EditError, FeedError, PermissionViolation, ReadAccessError, UpdateError,
};
use crate::model::{
    AccountField, ClassificationResult, FieldChanges, Notification, RecordId, RecordSnapshot,
};
use crate::ports::{HIGH_NET_WORTH_PERMISSION, PermissionResolver, Ports, ServiceEvent};
use crate::presentation::ViewModel;
use crate::state::{ControllerState, Phase};

pub const UPDATE_SUCCESS_TITLE: &str = "Success";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Record updated successfully";
pub const ERROR_TITLE: &str = "Error";

/// Inline edit mode a record opens in once its classification is known.
///
/// High net worth records open in inline edit for holders of the elevated
/// permission and locked for everyone else. Standard records open read-only
/// and can be toggled freely.
pub fn default_edit_mode(is_high_net_worth: bool, has_permission: bool) -> bool {
    match (is_high_net_worth, has_permission) {
        (true, true) => true,
        (true, false) => false,
        (false, _) => false,
    }
}

pub struct RecordViewController {
    record_id: RecordId,
    has_permission: bool,
    state: ControllerState,
    snapshot: Option<RecordSnapshot>,
    /// First classification request issued for the current record identity
    classification_requested: bool,
    /// Edit-mode policy already evaluated for the current record identity
    policy_applied: bool,
    submit_pending: bool,
    ports: Ports,
}

impl RecordViewController {
    /// Create a controller for `record_id` and subscribe to its record feed.
    ///
    /// The elevated permission is resolved here, once, and never re-read.
    pub fn mount(record_id: RecordId, permissions: &dyn PermissionResolver, ports: Ports) -> Self {
        let has_permission = permissions.has_permission(HIGH_NET_WORTH_PERMISSION);
        info!(record_id = %record_id, has_permission, "Mounting record view");

        let mut controller = Self {
            record_id,
            has_permission,
            state: ControllerState::default(),
            snapshot: None,
            classification_requested: false,
            policy_applied: false,
            submit_pending: false,
            ports,
        };
        controller.subscribe();
        controller
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&RecordSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn has_permission(&self) -> bool {
        self.has_permission
    }

    pub fn is_submit_pending(&self) -> bool {
        self.submit_pending
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::derive(&self.state, self.has_permission)
    }

    pub fn phase(&self) -> Phase {
        if !self.state.has_access {
            Phase::Denied
        } else if self.snapshot.is_none() {
            Phase::Init
        } else if self.state.is_loading {
            Phase::Loaded
        } else if self.state.is_edit_mode {
            Phase::InlineEdit
        } else if !self.policy_applied {
            Phase::Unclassified
        } else {
            Phase::ReadOnly
        }
    }

    /// Whether the current user may hold this record in inline edit mode
    pub fn can_edit(&self) -> bool {
        self.state.has_access && (!self.state.is_high_net_worth || self.has_permission)
    }

    /// Apply a completion from one of the ports.
    ///
    /// Completions for a record other than the current one are discarded.
    /// Returns true if the event was applied.
    pub fn handle_event(&mut self, event: ServiceEvent) -> bool {
        if event.record_id() != &self.record_id {
            warn!(
                current = %self.record_id,
                event_record = %event.record_id(),
                "Discarding completion for a record no longer displayed"
            );
            return false;
        }

        match event {
            ServiceEvent::Record { result, .. } => self.on_record(result),
            ServiceEvent::Classification { result, .. } => self.on_classification(result),
            ServiceEvent::Update { result, .. } => self.on_update(result),
        }
        debug!(record_id = %self.record_id, phase = self.phase().name(), "Completion applied");
        true
    }

    /// Switch the view to another record.
    ///
    /// Access revocation is kept: a denied controller stays denied and does
    /// not resubscribe.
    pub fn set_record_id(&mut self, record_id: RecordId) {
        if record_id == self.record_id {
            return;
        }
        info!(from = %self.record_id, to = %record_id, "Record identity changed");

        self.ports.reader.unsubscribe(&self.record_id);
        self.record_id = record_id;
        self.snapshot = None;
        self.classification_requested = false;
        self.policy_applied = false;
        self.submit_pending = false;
        self.state.is_edit_mode = false;
        self.state.is_high_net_worth = false;
        self.state.total_opportunity_amount = 0.0;

        if self.state.has_access {
            self.state.is_loading = true;
            self.subscribe();
        }
    }

    /// Edit / Cancel Edit button. Returns the new edit mode.
    pub fn toggle_edit(&mut self) -> Result<bool, EditError> {
        if !self.state.has_access {
            return Err(EditError::NoAccess);
        }
        if self.state.is_loading {
            return Err(EditError::Loading);
        }
        if self.state.is_high_net_worth && !self.has_permission {
            warn!(record_id = %self.record_id, "Edit refused on high net worth record");
            self.ports
                .notifier
                .notify(Notification::error(ERROR_TITLE, PermissionViolation::MESSAGE));
            return Err(PermissionViolation.into());
        }

        self.state.is_edit_mode = !self.state.is_edit_mode;
        debug!(record_id = %self.record_id, is_edit_mode = self.state.is_edit_mode, "Edit mode toggled");
        Ok(self.state.is_edit_mode)
    }

    pub fn cancel_edit(&mut self) {
        if self.state.is_edit_mode {
            debug!(record_id = %self.record_id, "Edit cancelled");
        }
        self.state.is_edit_mode = false;
    }

    /// Hand the edit form's values to the record writer.
    ///
    /// Concurrent submits are not deduplicated.
    pub fn submit(&mut self, changes: FieldChanges) -> Result<(), EditError> {
        if !self.state.has_access {
            return Err(EditError::NoAccess);
        }
        if !self.state.is_edit_mode {
            return Err(EditError::NotEditing);
        }

        info!(record_id = %self.record_id, fields = changes.len(), "Submitting record update");
        self.submit_pending = true;
        if !self.ports.writer.submit(&self.record_id, changes) {
            self.on_update(Err(UpdateError::new("record writer unavailable")));
        }
        Ok(())
    }

    /// Re-run the classification check for the current record.
    ///
    /// Returns false when there is no readable record to classify.
    pub fn refresh_classification(&mut self) -> bool {
        if !self.state.has_access || self.snapshot.is_none() {
            return false;
        }
        self.request_classification();
        true
    }

    fn subscribe(&mut self) {
        if !self.ports.reader.subscribe(&self.record_id, &AccountField::ALL) {
            let err = ReadAccessError::new(self.record_id.clone(), "record feed unavailable");
            self.on_record(Err(err));
        }
    }

    fn request_classification(&mut self) {
        debug!(record_id = %self.record_id, "Requesting classification");
        if !self.ports.classifier.request(&self.record_id) {
            self.on_classification(Err(ClassificationError::Unavailable));
        }
    }

    fn on_record(&mut self, result: Result<RecordSnapshot, ReadAccessError>) {
        match result {
            Ok(snapshot) => {
                if !self.state.has_access {
                    debug!(record_id = %self.record_id, "Ignoring snapshot after access was revoked");
                    return;
                }
                debug!(record_id = %self.record_id, name = %snapshot.name, "Record snapshot received");
                self.snapshot = Some(snapshot);

                if !self.classification_requested {
                    self.classification_requested = true;
                    self.request_classification();
                }
            }
            Err(err) => {
                error!(record_id = %self.record_id, "Record feed failed: {err}");
                self.state.error = Some(FeedError::ReadAccess(err));
                self.state.has_access = false;
                self.state.is_loading = false;
                self.state.is_edit_mode = false;
                self.snapshot = None;
            }
        }
    }

    fn on_classification(&mut self, result: Result<ClassificationResult, ClassificationError>) {
        if !self.state.has_access {
            debug!(record_id = %self.record_id, "Ignoring classification after access was revoked");
            return;
        }

        match result {
            Ok(classification) => {
                debug!(
                    record_id = %self.record_id,
                    is_high_net_worth = classification.is_high_net_worth,
                    total_amount = classification.total_amount,
                    "Classification received"
                );
                self.state.is_high_net_worth = classification.is_high_net_worth;
                self.state.total_opportunity_amount = classification.total_amount;

                if !self.policy_applied {
                    self.policy_applied = true;
                    self.state.is_edit_mode =
                        default_edit_mode(classification.is_high_net_worth, self.has_permission);
                } else if self.state.is_edit_mode && !self.can_edit() {
                    info!(record_id = %self.record_id, "Record became high net worth; closing inline edit");
                    self.state.is_edit_mode = false;
                }
            }
            Err(err) => {
                error!(record_id = %self.record_id, "Classification failed: {err}");
                self.state.error = Some(FeedError::Classification(err));
            }
        }

        if self.snapshot.is_some() {
            self.state.is_loading = false;
        }
    }

    fn on_update(&mut self, result: Result<(), UpdateError>) {
        self.submit_pending = false;
        match result {
            Ok(()) => {
                info!(record_id = %self.record_id, "Record updated");
                self.state.is_edit_mode = false;
                self.ports.notifier.notify(Notification::success(
                    UPDATE_SUCCESS_TITLE,
                    UPDATE_SUCCESS_MESSAGE,
                ));
                // Opportunity totals may have changed
                if !self.refresh_classification() {
                    debug!(record_id = %self.record_id, "No readable record; skipping classification refresh");
                }
            }
            Err(err) => {
                warn!(record_id = %self.record_id, "Record update failed: {err}");
                self.ports.notifier.notify(Notification::error(
                    ERROR_TITLE,
                    &format!("Error updating record: {}", err.message),
                ));
            }
        }
    }
}

impl Drop for RecordViewController {
    fn drop(&mut self) {
        self.ports.reader.unsubscribe(&self.record_id);
    }
}
