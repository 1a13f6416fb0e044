//! Port implementations wiring the record view controller to the service
//! worker, the status bar and the session configuration.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::mpsc::Sender;

use clientpage_core::{
    AccountField, ClassificationService, FieldChanges, Notification, NotificationSink,
    PermissionResolver, Ports, RecordId, RecordReader, RecordWriter,
};

use crate::worker::ServiceRequest;

/// Request side of the service worker
#[derive(Clone)]
pub struct WorkerPorts {
    tx: Sender<ServiceRequest>,
}

impl WorkerPorts {
    pub fn new(tx: Sender<ServiceRequest>) -> Self {
        Self { tx }
    }
}

impl RecordReader for WorkerPorts {
    fn subscribe(&self, record_id: &RecordId, fields: &[AccountField]) -> bool {
        self.tx
            .send(ServiceRequest::Subscribe {
                record_id: record_id.clone(),
                fields: fields.to_vec(),
            })
            .is_ok()
    }

    fn unsubscribe(&self, record_id: &RecordId) {
        let _ = self.tx.send(ServiceRequest::Unsubscribe {
            record_id: record_id.clone(),
        });
    }
}

impl RecordWriter for WorkerPorts {
    fn submit(&self, record_id: &RecordId, changes: FieldChanges) -> bool {
        self.tx
            .send(ServiceRequest::Update {
                record_id: record_id.clone(),
                changes,
            })
            .is_ok()
    }
}

impl ClassificationService for WorkerPorts {
    fn request(&self, record_id: &RecordId) -> bool {
        self.tx
            .send(ServiceRequest::Classify {
                record_id: record_id.clone(),
            })
            .is_ok()
    }
}

/// Notifications waiting to be shown in the status bar
#[derive(Clone, Default)]
pub struct ToastQueue {
    queue: Rc<RefCell<VecDeque<Notification>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&self) -> Option<Notification> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            severity = %notification.severity,
            title = %notification.title,
            "Notification: {}",
            notification.message
        );
        self.queue.borrow_mut().push_back(notification);
    }
}

/// Custom permissions granted through `config.yaml`
#[derive(Debug, Clone, Default)]
pub struct GrantedPermissions {
    names: BTreeSet<String>,
}

impl GrantedPermissions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl PermissionResolver for GrantedPermissions {
    fn has_permission(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Controller ports backed by the worker and the toast queue
pub fn worker_ports(tx: Sender<ServiceRequest>, toasts: &ToastQueue) -> Ports {
    let worker = WorkerPorts::new(tx);
    Ports {
        reader: Box::new(worker.clone()),
        writer: Box::new(worker.clone()),
        classifier: Box::new(worker),
        notifier: Box::new(toasts.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientpage_core::HIGH_NET_WORTH_PERMISSION;

    #[test]
    fn test_granted_permissions() {
        let granted = GrantedPermissions::new([HIGH_NET_WORTH_PERMISSION]);
        assert!(granted.has_permission(HIGH_NET_WORTH_PERMISSION));
        assert!(!GrantedPermissions::default().has_permission(HIGH_NET_WORTH_PERMISSION));
    }

    #[test]
    fn test_toast_queue_is_fifo() {
        let toasts = ToastQueue::new();
        toasts.notify(Notification::success("Success", "first"));
        toasts.notify(Notification::error("Error", "second"));

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.pop().map(|n| n.message), Some("first".to_string()));
        assert_eq!(toasts.pop().map(|n| n.message), Some("second".to_string()));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_worker_ports_report_closed_channel() {
        let (tx, rx) = std::sync::mpsc::channel();
        let ports = WorkerPorts::new(tx);
        let id = RecordId::from("001");

        assert!(ports.request(&id));
        assert!(matches!(rx.try_recv(), Ok(ServiceRequest::Classify { .. })));

        drop(rx);
        assert!(!ports.request(&id));
        assert!(!ports.subscribe(&id, &AccountField::ALL));
    }
}
