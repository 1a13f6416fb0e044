//! Edit-mode policy, toggling and its permission guard

use super::fakes::*;
use crate::controller::default_edit_mode;
use crate::error::{EditError, PermissionViolation};
use crate::model::Severity;
use crate::presentation::{Badge, BadgeStyle, EditIcon};
use crate::state::Phase;

#[test]
fn test_default_edit_mode_policy() {
    assert!(default_edit_mode(true, true));
    assert!(!default_edit_mode(true, false));
    assert!(!default_edit_mode(false, true));
    assert!(!default_edit_mode(false, false));
}

#[test]
fn test_high_net_worth_with_permission_opens_inline_edit() {
    let (controller, _log) = ready(true, 50_000.0, true);
    let view = controller.view();

    assert_eq!(view.badge, Badge::HIGH_NET_WORTH);
    assert_eq!(view.badge.label, "High Net Worth Client");
    assert_eq!(view.badge.style, BadgeStyle::Success);
    assert!(view.is_edit_mode);
    assert_eq!(view.edit_button_label, "Cancel Edit");
    assert_eq!(view.edit_icon, EditIcon::Close);
    assert_eq!(view.formatted_amount, "$50,000.00");
    assert_eq!(controller.phase(), Phase::InlineEdit);
}

#[test]
fn test_standard_client_opens_read_only_and_editable() {
    let (controller, _log) = ready(false, 0.0, false);
    let view = controller.view();

    assert_eq!(view.badge.label, "Standard Client");
    assert_eq!(view.badge.style, BadgeStyle::Default);
    assert!(!view.is_edit_mode);
    assert!(view.show_edit_button);
    assert_eq!(view.edit_button_label, "Edit");
    assert_eq!(view.formatted_amount, "$0.00");
}

#[test]
fn test_high_net_worth_without_permission_is_locked() {
    let (controller, _log) = ready(true, 2_500_000.0, false);
    let view = controller.view();

    assert!(!view.is_edit_mode);
    assert!(!view.show_edit_button);
    assert!(!controller.can_edit());
}

#[test]
fn test_refused_toggle_notifies_once_and_keeps_mode() {
    let (mut controller, log) = ready(true, 2_500_000.0, false);

    let result = controller.toggle_edit();
    assert_eq!(result, Err(EditError::Permission(PermissionViolation)));
    assert!(!controller.state().is_edit_mode);

    let log = log.borrow();
    assert_eq!(log.notifications.len(), 1);
    assert_eq!(log.notifications[0].severity, Severity::Error);
    assert_eq!(log.notifications[0].title, "Error");
    assert_eq!(
        log.notifications[0].message,
        "You do not have permission to edit High Net Worth Client records"
    );
}

#[test]
fn test_standard_client_toggles_freely() {
    let (mut controller, log) = ready(false, 900.0, false);

    assert_eq!(controller.toggle_edit(), Ok(true));
    assert_eq!(controller.view().edit_button_label, "Cancel Edit");
    assert_eq!(controller.toggle_edit(), Ok(false));
    assert_eq!(controller.toggle_edit(), Ok(true));
    controller.cancel_edit();
    assert!(!controller.state().is_edit_mode);
    assert!(log.borrow().notifications.is_empty());
}

#[test]
fn test_permission_holder_can_leave_and_reenter_edit() {
    let (mut controller, _log) = ready(true, 50_000.0, true);

    assert_eq!(controller.toggle_edit(), Ok(false));
    assert_eq!(controller.phase(), Phase::ReadOnly);
    assert_eq!(controller.toggle_edit(), Ok(true));
}

#[test]
fn test_toggle_refused_while_loading_or_denied() {
    let (mut controller, log) = mount(true);
    assert_eq!(controller.toggle_edit(), Err(EditError::Loading));

    controller.handle_event(record_denied(&account_id()));
    assert_eq!(controller.toggle_edit(), Err(EditError::NoAccess));
    assert!(log.borrow().notifications.is_empty());
}

#[test]
fn test_refresh_does_not_rerun_policy() {
    let (mut controller, _log) = ready(false, 100.0, true);
    let id = account_id();

    assert!(controller.refresh_classification());
    controller.handle_event(classified(&id, true, 5_000_000.0));

    // Permission holder stays where they were; the policy only runs once
    assert!(controller.state().is_high_net_worth);
    assert!(!controller.state().is_edit_mode);
}

#[test]
fn test_refresh_closes_edit_when_record_becomes_locked() {
    let (mut controller, _log) = ready(false, 100.0, false);
    let id = account_id();
    assert_eq!(controller.toggle_edit(), Ok(true));

    assert!(controller.refresh_classification());
    controller.handle_event(classified(&id, true, 5_000_000.0));

    let state = controller.state();
    assert!(state.is_high_net_worth);
    assert!(!state.is_edit_mode);
    assert!(!controller.view().show_edit_button);
}

#[test]
fn test_edit_mode_never_observed_on_locked_record() {
    let id = account_id();
    let sequences: Vec<Vec<bool>> = vec![
        vec![false, true],
        vec![true, false, true],
        vec![false, false, true, true],
    ];

    for classifications in sequences {
        let (mut controller, _log) = mount(false);
        controller.handle_event(record_loaded(&id));
        for is_high_net_worth in classifications {
            controller.handle_event(classified(&id, is_high_net_worth, 1.0));
            let _ = controller.toggle_edit();
            let state = controller.state();
            assert!(!(state.is_edit_mode && state.is_high_net_worth));
            controller.refresh_classification();
        }
    }
}
