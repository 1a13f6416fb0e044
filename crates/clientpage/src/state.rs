use std::time::{Duration, Instant};

use clientpage_core::{AccountField, FieldChanges, Notification, RecordId, RecordSnapshot};

/// Draft values of the inline edit form
#[derive(Debug, Default)]
pub struct EditForm {
    /// One value per entry of [`AccountField::ALL`]
    pub values: Vec<String>,
    pub selected: usize,
    pub active: bool,
}

impl EditForm {
    /// Start editing from the current snapshot
    pub fn begin(&mut self, snapshot: &RecordSnapshot) {
        self.values = AccountField::ALL
            .iter()
            .map(|f| snapshot.get(*f).unwrap_or("").to_string())
            .collect();
        self.selected = 0;
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
        self.values.clear();
        self.selected = 0;
    }

    pub fn selected_field(&self) -> AccountField {
        AccountField::ALL[self.selected.min(AccountField::ALL.len() - 1)]
    }

    pub fn value(&self, field: AccountField) -> &str {
        AccountField::ALL
            .iter()
            .position(|f| *f == field)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % AccountField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(AccountField::ALL.len() - 1);
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.selected) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.selected) {
            value.pop();
        }
    }

    /// Field values that differ from `snapshot`
    pub fn changes(&self, snapshot: &RecordSnapshot) -> FieldChanges {
        let mut changes = FieldChanges::new();
        for (field, value) in AccountField::ALL.iter().zip(&self.values) {
            changes.set(*field, value.trim());
        }
        changes.diff_against(snapshot)
    }
}

/// Notification currently shown in the status bar
#[derive(Debug)]
pub struct ActiveToast {
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    /// Records reachable with next/previous, in store order
    pub records: Vec<RecordId>,
    pub record_index: usize,
    pub form: EditForm,
    pub toast: Option<ActiveToast>,
    pub toast_duration: Duration,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            record_index: 0,
            form: EditForm::default(),
            toast: None,
            toast_duration: Duration::from_secs(4),
            error_message: None,
            exit: false,
        }
    }
}

impl AppState {
    pub fn current_record(&self) -> Option<&RecordId> {
        self.records.get(self.record_index)
    }

    /// Move to the next record, wrapping. Returns the new record id.
    pub fn next_record(&mut self) -> Option<&RecordId> {
        if self.records.is_empty() {
            return None;
        }
        self.record_index = (self.record_index + 1) % self.records.len();
        self.current_record()
    }

    pub fn prev_record(&mut self) -> Option<&RecordId> {
        if self.records.is_empty() {
            return None;
        }
        self.record_index = self
            .record_index
            .checked_sub(1)
            .unwrap_or(self.records.len() - 1);
        self.current_record()
    }

    pub fn show_toast(&mut self, notification: Notification) {
        self.toast = Some(ActiveToast {
            notification,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once its display time has passed
    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= self.toast_duration)
        {
            self.toast = None;
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
