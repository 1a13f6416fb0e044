use std::time::Duration;

use clientpage_core::{
    AccountField, Badge, HIGH_NET_WORTH_PERMISSION, PermissionViolation, Phase, RecordId, Severity,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{harbor, maple, vault};
use crate::App;
use crate::data::accounts_data::AccountsData;
use crate::data::config_data::AppConfig;
use crate::keybindings::AppAction;

fn config(granted: bool) -> AppConfig {
    AppConfig {
        granted_permissions: if granted {
            vec![HIGH_NET_WORTH_PERMISSION.to_string()]
        } else {
            Vec::new()
        },
        latency_ms: 0,
        latency_jitter_ms: 0,
        ..Default::default()
    }
}

/// Open `record` and deliver completions until the worker goes quiet
fn open(record: RecordId, granted: bool) -> App {
    let mut app = App::new(config(granted), AccountsData::sample(), None, Some(record));
    settle(&mut app);
    app
}

fn settle(app: &mut App) {
    while app.pump_blocking(Duration::from_millis(300)) {}
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn toast(app: &App) -> Option<(Severity, String)> {
    app.state()
        .toast
        .as_ref()
        .map(|t| (t.notification.severity, t.notification.message.clone()))
}

#[test]
fn test_standard_record_opens_read_only() {
    let app = open(maple(), false);
    let controller = app.controller();

    assert_eq!(controller.phase(), Phase::ReadOnly);
    let view = controller.view();
    assert_eq!(view.badge, Badge::STANDARD);
    assert_eq!(view.formatted_amount, "$12,500.00");
    assert!(view.show_edit_button);
    assert!(!app.state().form.active);
}

#[test]
fn test_edit_and_save_standard_record() {
    let mut app = open(maple(), false);

    press(&mut app, KeyCode::Char('e'));
    assert!(app.controller().state().is_edit_mode);
    assert!(app.state().form.active);

    app.dispatch(AppAction::NextField);
    assert_eq!(app.state().form.selected_field(), AccountField::Phone);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "9");
    app.dispatch(AppAction::Submit);
    assert!(app.controller().is_submit_pending());

    settle(&mut app);
    assert!(!app.controller().state().is_edit_mode);
    assert!(!app.state().form.active);
    assert_eq!(
        toast(&app),
        Some((Severity::Success, "Record updated successfully".to_string()))
    );
    assert_eq!(
        app.controller()
            .snapshot()
            .and_then(|s| s.get(AccountField::Phone)),
        Some("(503) 555-0189")
    );
}

#[test]
fn test_high_net_worth_record_locked_without_permission() {
    let mut app = open(harbor(), false);

    assert!(app.controller().state().is_high_net_worth);
    assert_eq!(app.controller().view().badge, Badge::HIGH_NET_WORTH);
    assert_eq!(app.controller().view().formatted_amount, "$1,250,000.00");
    assert!(!app.controller().view().show_edit_button);

    app.dispatch(AppAction::ToggleEdit);
    assert!(!app.controller().state().is_edit_mode);
    assert!(!app.state().form.active);
    assert_eq!(
        toast(&app),
        Some((Severity::Error, PermissionViolation::MESSAGE.to_string()))
    );
}

#[test]
fn test_high_net_worth_record_opens_in_edit_with_permission() {
    let app = open(harbor(), true);

    assert_eq!(app.controller().phase(), Phase::InlineEdit);
    assert!(app.state().form.active);
    assert_eq!(app.state().form.value(AccountField::Name), "Harborview Capital");
}

#[test]
fn test_blank_name_update_reports_error() {
    let mut app = open(harbor(), true);

    for _ in 0.."Harborview Capital".len() {
        press(&mut app, KeyCode::Backspace);
    }
    app.dispatch(AppAction::Submit);
    settle(&mut app);

    assert_eq!(
        toast(&app),
        Some((
            Severity::Error,
            "Error updating record: Required fields are missing: [Name]".to_string()
        ))
    );
    assert!(app.controller().state().is_edit_mode);
    assert_eq!(
        app.controller().snapshot().map(|s| s.name.as_str()),
        Some("Harborview Capital")
    );
}

#[test]
fn test_submit_without_changes_closes_form() {
    let mut app = open(maple(), false);
    app.dispatch(AppAction::ToggleEdit);
    app.dispatch(AppAction::Submit);

    assert!(!app.controller().state().is_edit_mode);
    assert!(!app.controller().is_submit_pending());
    assert!(!app.state().form.active);
}

#[test]
fn test_restricted_record_then_navigate_away() {
    let mut app = open(vault(), false);

    assert_eq!(app.controller().phase(), Phase::Denied);
    assert!(app.controller().view().show_insufficient_privileges);

    // The vault is last in the store, so next wraps to the first account
    app.dispatch(AppAction::NextRecord);
    settle(&mut app);
    assert_eq!(app.controller().record_id(), &harbor());
    assert!(app.controller().state().has_access);
    assert!(app.controller().view().show_content);
}

#[test]
fn test_record_navigation_reclassifies() {
    let mut app = open(harbor(), true);
    assert!(app.state().form.active);

    app.dispatch(AppAction::NextRecord);
    assert!(!app.state().form.active);
    settle(&mut app);

    assert_eq!(app.controller().record_id(), &maple());
    assert!(!app.controller().state().is_high_net_worth);
    assert_eq!(app.controller().phase(), Phase::ReadOnly);
}

#[test]
fn test_escape_cancels_edit() {
    let mut app = open(maple(), false);
    app.dispatch(AppAction::ToggleEdit);
    press(&mut app, KeyCode::Esc);

    assert!(!app.controller().state().is_edit_mode);
    assert!(!app.state().form.active);
}

#[test]
fn test_quit_key() {
    let mut app = open(maple(), false);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.state().exit);
}
