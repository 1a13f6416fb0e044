use clientpage_core::{AccountField, FieldChanges, ServiceEvent};

use super::{REPLY_TIMEOUT, harbor, maple, vault};
use crate::data::accounts_data::{AccountsData, NO_ACCESS_MESSAGE};
use crate::data::storage::DataDirectory;
use crate::worker::{ServiceRequest, ServiceWorker, WorkerSettings};

fn spawn() -> ServiceWorker {
    ServiceWorker::spawn(AccountsData::sample(), WorkerSettings::default(), None)
}

fn next(worker: &ServiceWorker) -> ServiceEvent {
    worker
        .recv_timeout(REPLY_TIMEOUT)
        .expect("worker did not reply")
}

#[test]
fn test_subscribe_delivers_snapshot() {
    let worker = spawn();
    assert!(worker.send(ServiceRequest::Subscribe {
        record_id: harbor(),
        fields: AccountField::ALL.to_vec(),
    }));

    match next(&worker) {
        ServiceEvent::Record { record_id, result } => {
            assert_eq!(record_id, harbor());
            let snapshot = result.unwrap();
            assert_eq!(snapshot.name, "Harborview Capital");
            assert_eq!(snapshot.get(AccountField::BillingCity), Some("Boston"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_restricted_record_is_denied() {
    let worker = spawn();
    worker.send(ServiceRequest::Subscribe {
        record_id: vault(),
        fields: AccountField::ALL.to_vec(),
    });

    match next(&worker) {
        ServiceEvent::Record { result, .. } => {
            assert_eq!(result.unwrap_err().message, NO_ACCESS_MESSAGE);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_classification_uses_threshold() {
    let worker = spawn();
    worker.send(ServiceRequest::Classify {
        record_id: harbor(),
    });
    worker.send(ServiceRequest::Classify {
        record_id: maple(),
    });

    match next(&worker) {
        ServiceEvent::Classification { record_id, result } => {
            assert_eq!(record_id, harbor());
            let result = result.unwrap();
            assert!(result.is_high_net_worth);
            assert_eq!(result.total_amount, 1_250_000.0);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match next(&worker) {
        ServiceEvent::Classification { record_id, result } => {
            assert_eq!(record_id, maple());
            assert!(!result.unwrap().is_high_net_worth);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_update_persists_and_pushes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = DataDirectory::new(dir.path().to_path_buf());
    let worker = ServiceWorker::spawn(
        AccountsData::sample(),
        WorkerSettings::default(),
        Some(storage.clone()),
    );

    worker.send(ServiceRequest::Subscribe {
        record_id: maple(),
        fields: AccountField::ALL.to_vec(),
    });
    assert!(matches!(next(&worker), ServiceEvent::Record { .. }));

    worker.send(ServiceRequest::Update {
        record_id: maple(),
        changes: FieldChanges::new().with(AccountField::Website, "maplebakery.example.com"),
    });
    match next(&worker) {
        ServiceEvent::Update { record_id, result } => {
            assert_eq!(record_id, maple());
            assert!(result.is_ok());
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match next(&worker) {
        ServiceEvent::Record { result, .. } => {
            let snapshot = result.unwrap();
            assert_eq!(snapshot.get(AccountField::Website), Some("maplebakery.example.com"));
            assert!(snapshot.last_modified.is_some());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let saved = storage.load_accounts().unwrap();
    let entry = saved.find(&maple()).unwrap();
    assert_eq!(entry.record.website.as_deref(), Some("maplebakery.example.com"));
}

#[test]
fn test_rejected_update_leaves_store_untouched() {
    let worker = spawn();
    worker.send(ServiceRequest::Update {
        record_id: harbor(),
        changes: FieldChanges::new().with(AccountField::Name, ""),
    });
    match next(&worker) {
        ServiceEvent::Update { result, .. } => {
            assert_eq!(
                result.unwrap_err().message,
                "Required fields are missing: [Name]"
            );
        }
        other => panic!("unexpected event: {other:?}"),
    }

    worker.send(ServiceRequest::Subscribe {
        record_id: harbor(),
        fields: AccountField::ALL.to_vec(),
    });
    match next(&worker) {
        ServiceEvent::Record { result, .. } => {
            assert_eq!(result.unwrap().name, "Harborview Capital");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_unsubscribed_record_gets_no_push() {
    let worker = spawn();
    worker.send(ServiceRequest::Subscribe {
        record_id: maple(),
        fields: AccountField::ALL.to_vec(),
    });
    next(&worker);
    worker.send(ServiceRequest::Unsubscribe {
        record_id: maple(),
    });
    worker.send(ServiceRequest::Update {
        record_id: maple(),
        changes: FieldChanges::new().with(AccountField::Phone, "555-0100"),
    });

    assert!(matches!(next(&worker), ServiceEvent::Update { .. }));
    assert!(worker.recv_timeout(std::time::Duration::from_millis(200)).is_none());
}

#[test]
fn test_shutdown_stops_worker() {
    let mut worker = spawn();
    worker.shutdown();
    assert!(!worker.send(ServiceRequest::Classify {
        record_id: harbor(),
    }));
}
