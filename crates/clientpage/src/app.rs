use std::path::PathBuf;
use std::time::{Duration, Instant};

use clientpage_core::{EditError, RecordId, RecordViewController};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, ViewContext, record_view::RecordView, status_bar::StatusBar,
};
use crate::data::accounts_data::AccountsData;
use crate::data::config_data::AppConfig;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::DataDirectory;
use crate::keybindings::AppAction;
use crate::ports::{GrantedPermissions, ToastQueue, worker_ports};
use crate::state::AppState;
use crate::worker::{ServiceWorker, WorkerSettings};

/// How long to wait for input before pumping worker completions again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    controller: RecordViewController,
    worker: ServiceWorker,
    toasts: ToastQueue,
    permissions: GrantedPermissions,
    keybindings: KeybindingsConfig,
    record_view: RecordView,
    status_bar: StatusBar,
}

impl App {
    /// Create the app and mount the record page.
    ///
    /// `record` wins over `config.default_record`, which wins over the first
    /// account in the store.
    pub fn new(
        config: AppConfig,
        data: AccountsData,
        storage: Option<DataDirectory>,
        record: Option<RecordId>,
    ) -> Self {
        let records = data.ids();
        let record_id = record
            .or_else(|| config.default_record.clone().map(RecordId::new))
            .or_else(|| records.first().cloned())
            .unwrap_or_default();
        let record_index = records.iter().position(|r| r == &record_id).unwrap_or(0);

        let settings = WorkerSettings {
            high_net_worth_threshold: config.high_net_worth_threshold,
            latency: Duration::from_millis(config.latency_ms),
            latency_jitter: Duration::from_millis(config.latency_jitter_ms),
        };
        let worker = ServiceWorker::spawn(data, settings, storage);
        let toasts = ToastQueue::new();
        let permissions = GrantedPermissions::new(config.granted_permissions);

        tracing::info!(record_id = %record_id, "Mounting record page");
        let controller = RecordViewController::mount(
            record_id,
            &permissions,
            worker_ports(worker.sender(), &toasts),
        );

        let state = AppState {
            records,
            record_index,
            toast_duration: Duration::from_secs(config.toast_seconds),
            ..Default::default()
        };

        Self {
            state,
            controller,
            worker,
            toasts,
            permissions,
            keybindings: config.keybindings,
            record_view: RecordView::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Create the app from a data directory, seeding it on first run
    pub fn with_data_dir(data_dir: PathBuf, record: Option<RecordId>) -> color_eyre::Result<Self> {
        let storage = DataDirectory::new(data_dir);
        storage.init()?;
        let config = storage.load_config()?;
        let data = storage.load_accounts()?;
        Ok(Self::new(config, data, Some(storage), record))
    }

    pub fn controller(&self) -> &RecordViewController {
        &self.controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.pump();
            self.handle_events()?;
        }

        self.worker.shutdown();
        Ok(())
    }

    /// Deliver worker completions to the controller and sync the UI state
    pub fn pump(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            self.controller.handle_event(event);
        }
        self.sync();
    }

    /// Block up to `timeout` for one worker completion. Returns false on timeout.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        let Some(event) = self.worker.recv_timeout(timeout) else {
            return false;
        };
        self.controller.handle_event(event);
        self.sync();
        true
    }

    fn sync(&mut self) {
        let editing = self.controller.state().is_edit_mode;
        if editing && !self.state.form.active {
            if let Some(snapshot) = self.controller.snapshot() {
                self.state.form.begin(snapshot);
            }
        } else if !editing && self.state.form.active {
            self.state.form.close();
        }

        while let Some(notification) = self.toasts.pop() {
            self.state.show_toast(notification);
        }
        self.state.expire_toast(Instant::now());
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Record page
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let ctx = ViewContext {
            state: &self.state,
            controller: &self.controller,
            keybindings: &self.keybindings,
        };
        self.record_view.render(frame, chunks[0], &ctx);
        self.status_bar.render(frame, chunks[1], &ctx);
    }

    fn handle_events(&mut self) -> color_eyre::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        if let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let editing = self.state.form.active;
        if let Some(action) = self.keybindings.action_for(&key_event, editing) {
            self.dispatch(action);
            return;
        }

        if self.record_view.handle_key(key_event, &mut self.state) == EventResult::NotHandled {
            tracing::trace!(key = %KeybindingsConfig::key_to_string(&key_event), "Unbound key");
        }
    }

    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.state.exit = true,
            AppAction::ToggleEdit => match self.controller.toggle_edit() {
                Ok(_) => self.state.clear_error(),
                // The controller already raised a toast
                Err(EditError::Permission(_)) => {}
                Err(e) => tracing::debug!("Edit toggle ignored: {}", e),
            },
            AppAction::CancelEdit => {
                if self.controller.state().is_edit_mode {
                    self.controller.cancel_edit();
                } else {
                    self.state.clear_error();
                }
            }
            AppAction::Submit => self.submit(),
            AppAction::Refresh => {
                if !self.controller.refresh_classification() {
                    self.state.set_error("No record to refresh".to_string());
                }
            }
            AppAction::NextRecord => {
                if let Some(record_id) = self.state.next_record().cloned() {
                    self.open_record(record_id);
                }
            }
            AppAction::PrevRecord => {
                if let Some(record_id) = self.state.prev_record().cloned() {
                    self.open_record(record_id);
                }
            }
            AppAction::NextField => self.state.form.next_field(),
            AppAction::PrevField => self.state.form.prev_field(),
        }
        self.sync();
    }

    fn submit(&mut self) {
        let Some(snapshot) = self.controller.snapshot() else {
            return;
        };
        let changes = self.state.form.changes(snapshot);
        if changes.is_empty() {
            self.controller.cancel_edit();
            return;
        }
        if let Err(e) = self.controller.submit(changes) {
            self.state.set_error(e.to_string());
        }
    }

    /// Show another record. A denied page is replaced by a fresh one since
    /// the controller keeps its access revocation across record changes.
    fn open_record(&mut self, record_id: RecordId) {
        self.state.form.close();
        self.state.clear_error();
        if self.controller.state().has_access {
            self.controller.set_record_id(record_id);
            return;
        }

        tracing::info!(record_id = %record_id, "Remounting record page");
        let ports = worker_ports(self.worker.sender(), &self.toasts);
        // Replacing the controller drops the old one, which unsubscribes
        self.controller = RecordViewController::mount(record_id, &self.permissions, ports);
    }
}
