//! Background worker serving record, classification and update requests
//! without blocking the UI.
//!
//! The worker owns the account store. Every reply is a [`ServiceEvent`] that
//! the UI thread hands to the record view controller.

use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clientpage_core::{AccountField, FieldChanges, RecordId, ServiceEvent, UpdateError};
use jiff::Timestamp;
use rand::Rng;

use crate::data::accounts_data::AccountsData;
use crate::data::storage::DataDirectory;

/// Request sent to the background worker
#[derive(Debug)]
pub enum ServiceRequest {
    /// Start pushing snapshots of a record
    Subscribe {
        record_id: RecordId,
        fields: Vec<AccountField>,
    },
    Unsubscribe { record_id: RecordId },
    /// Run the high net worth check
    Classify { record_id: RecordId },
    /// Apply an edit form submission
    Update {
        record_id: RecordId,
        changes: FieldChanges,
    },
    /// Graceful shutdown
    Shutdown,
}

/// Server-side behaviour of the worker
#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub high_net_worth_threshold: f64,
    pub latency: Duration,
    pub latency_jitter: Duration,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            high_net_worth_threshold: 1_000_000.0,
            latency: Duration::ZERO,
            latency_jitter: Duration::ZERO,
        }
    }
}

/// Background worker that serves requests on a separate thread
pub struct ServiceWorker {
    request_tx: Sender<ServiceRequest>,
    response_rx: Receiver<ServiceEvent>,
    thread: Option<JoinHandle<()>>,
}

impl ServiceWorker {
    /// Spawn the worker thread.
    ///
    /// Updates are persisted to `storage` when one is given.
    pub fn spawn(data: AccountsData, settings: WorkerSettings, storage: Option<DataDirectory>) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let ctx = WorkerContext {
            response_tx,
            data,
            settings,
            storage,
            subscriptions: BTreeMap::new(),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Handle for issuing requests from other owners on the UI thread
    pub fn sender(&self) -> Sender<ServiceRequest> {
        self.request_tx.clone()
    }

    /// Returns true if the request was sent successfully
    pub fn send(&self, request: ServiceRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a completion (non-blocking)
    pub fn try_recv(&self) -> Option<ServiceEvent> {
        self.response_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for a completion
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ServiceEvent> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop the worker thread and wait for it to exit
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(ServiceRequest::Shutdown);
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            tracing::error!("Service worker thread panicked");
        }
    }
}

impl Drop for ServiceWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct WorkerContext {
    response_tx: Sender<ServiceEvent>,
    data: AccountsData,
    settings: WorkerSettings,
    storage: Option<DataDirectory>,
    /// Active record subscriptions and the fields each one asked for
    subscriptions: BTreeMap<RecordId, Vec<AccountField>>,
}

impl WorkerContext {
    fn run(mut self, request_rx: Receiver<ServiceRequest>) {
        tracing::debug!("Service worker started");
        while let Ok(request) = request_rx.recv() {
            let keep_running = match request {
                ServiceRequest::Shutdown => false,
                ServiceRequest::Subscribe { record_id, fields } => {
                    self.subscribe(record_id, fields)
                }
                ServiceRequest::Unsubscribe { record_id } => {
                    tracing::debug!(record_id = %record_id, "Unsubscribed");
                    self.subscriptions.remove(&record_id);
                    true
                }
                ServiceRequest::Classify { record_id } => self.classify(record_id),
                ServiceRequest::Update { record_id, changes } => self.update(record_id, changes),
            };
            if !keep_running {
                break;
            }
        }
        tracing::debug!("Service worker stopped");
    }

    /// Sleep for the configured round-trip latency
    fn simulate_latency(&self) {
        let mut delay = self.settings.latency;
        let jitter_ms = self.settings.latency_jitter.as_millis() as u64;
        if jitter_ms > 0 {
            delay += Duration::from_millis(rand::rng().random_range(0..=jitter_ms));
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    /// Send a completion. Returns false once the receiving side is gone.
    fn reply(&self, event: ServiceEvent) -> bool {
        self.response_tx.send(event).is_ok()
    }

    fn subscribe(&mut self, record_id: RecordId, fields: Vec<AccountField>) -> bool {
        self.simulate_latency();
        let result = self.data.read(&record_id, &fields);
        if let Err(e) = &result {
            tracing::warn!(record_id = %record_id, "Read denied: {}", e.message);
        }
        self.subscriptions.insert(record_id.clone(), fields);
        self.reply(ServiceEvent::Record { record_id, result })
    }

    fn classify(&mut self, record_id: RecordId) -> bool {
        self.simulate_latency();
        let result = self
            .data
            .classify(&record_id, self.settings.high_net_worth_threshold);
        self.reply(ServiceEvent::Classification { record_id, result })
    }

    fn update(&mut self, record_id: RecordId, changes: FieldChanges) -> bool {
        self.simulate_latency();

        // Work on a copy so a failed save leaves the store untouched
        let mut next = self.data.clone();
        let result = next
            .apply_update(&record_id, &changes, Timestamp::now())
            .and_then(|_| self.persist(&next));

        match result {
            Ok(()) => {
                tracing::info!(record_id = %record_id, fields = changes.len(), "Record updated");
                self.data = next;
                if !self.reply(ServiceEvent::Update {
                    record_id: record_id.clone(),
                    result: Ok(()),
                }) {
                    return false;
                }
                self.push_snapshot(&record_id)
            }
            Err(e) => {
                tracing::warn!(record_id = %record_id, "Update rejected: {}", e.message);
                self.reply(ServiceEvent::Update {
                    record_id,
                    result: Err(e),
                })
            }
        }
    }

    fn persist(&self, data: &AccountsData) -> Result<(), UpdateError> {
        match &self.storage {
            Some(storage) => storage
                .save_accounts(data)
                .map_err(|e| UpdateError::new(format!("Failed to save record: {}", e))),
            None => Ok(()),
        }
    }

    /// Deliver a fresh snapshot to the record's subscriber, if any
    fn push_snapshot(&self, record_id: &RecordId) -> bool {
        match self.subscriptions.get(record_id) {
            Some(fields) => self.reply(ServiceEvent::Record {
                record_id: record_id.clone(),
                result: self.data.read(record_id, fields),
            }),
            None => true,
        }
    }
}
