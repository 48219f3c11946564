//! Unit tests for opening and focusing the popup.

use tabfinder::managers::popup_dispatcher::{
    DispatchOutcome, HostSnapshot, HostTab, PopupDispatcher, PopupHost, PopupTrigger,
};
use tabfinder::managers::tab_index::{TabIndex, TabIndexTrait};
use tabfinder::managers::timestamp_store::MemoryTimestampStore;
use tabfinder::services::browser_api::{ActivationRequest, QueuedActivator};
use tabfinder::types::errors::DispatchError;
use tabfinder::types::settings::PopupSettings;

fn dispatcher() -> PopupDispatcher {
    PopupDispatcher::new(&PopupSettings::default())
}

struct FailingHost;

impl PopupHost for FailingHost {
    fn find_tab_by_url(&self, _url: &str) -> Option<ActivationRequest> {
        None
    }

    fn create_tab(&mut self, _url: &str) -> Result<(), DispatchError> {
        Err(DispatchError::HostFailed("tabs.create rejected".to_string()))
    }
}

#[test]
fn test_icon_click_opens_popup() {
    let d = dispatcher();
    let mut host = HostSnapshot::new(Vec::new());
    let mut activator = QueuedActivator::new();

    let outcome = d.dispatch(&PopupTrigger::IconClicked, &mut host, &mut activator).unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::Created {
            url: d.popup_url().to_string()
        }
    );
    assert_eq!(host.created(), &[d.popup_url().to_string()]);
    assert!(activator.pending().is_empty());
}

#[test]
fn test_existing_popup_is_focused_not_duplicated() {
    let d = dispatcher();
    let existing = ActivationRequest { tab_id: 12, window_id: 3 };
    let mut host = HostSnapshot::new(vec![HostTab {
        url: d.popup_url().to_string(),
        tab_id: 12,
        window_id: 3,
    }]);
    let mut activator = QueuedActivator::new();

    let outcome = d
        .dispatch(&PopupTrigger::Command("open-tab-finder".to_string()), &mut host, &mut activator)
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Focused(existing));
    assert!(host.created().is_empty());
    assert_eq!(activator.pending(), &[existing]);
}

#[test]
fn test_tab_at_other_url_is_not_the_popup() {
    let d = dispatcher();
    let mut host = HostSnapshot::new(vec![
        HostTab {
            url: "https://example.com/".to_string(),
            tab_id: 5,
            window_id: 1,
        },
        HostTab {
            url: d.popup_url().to_string(),
            tab_id: 6,
            window_id: 2,
        },
    ]);

    assert_eq!(
        host.find_tab_by_url("https://example.com/popup.html"),
        None
    );
    assert_eq!(
        host.find_tab_by_url(d.popup_url()),
        Some(ActivationRequest { tab_id: 6, window_id: 2 })
    );

    let mut only_other = HostSnapshot::new(vec![HostTab {
        url: "https://example.com/".to_string(),
        tab_id: 5,
        window_id: 1,
    }]);
    let mut activator = QueuedActivator::new();
    let outcome = d
        .dispatch(&PopupTrigger::IconClicked, &mut only_other, &mut activator)
        .unwrap();
    assert!(matches!(outcome, DispatchOutcome::Created { .. }));
    assert!(activator.pending().is_empty());
    assert_eq!(only_other.created(), &[d.popup_url().to_string()]);

    let outcome = d.dispatch(&PopupTrigger::IconClicked, &mut host, &mut activator).unwrap();
    assert_eq!(outcome, DispatchOutcome::Focused(ActivationRequest { tab_id: 6, window_id: 2 }));
}

#[test]
fn test_unknown_command_ignored() {
    let d = dispatcher();
    let mut host = HostSnapshot::new(Vec::new());
    let mut activator = QueuedActivator::new();

    let outcome = d
        .dispatch(&PopupTrigger::Command("something-else".to_string()), &mut host, &mut activator)
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert!(host.created().is_empty());
}

#[test]
fn test_host_failure_propagates() {
    let d = dispatcher();
    let mut activator = QueuedActivator::new();
    let err = d
        .dispatch(&PopupTrigger::IconClicked, &mut FailingHost, &mut activator)
        .unwrap_err();
    assert!(matches!(err, DispatchError::HostFailed(_)));
}

#[test]
fn test_tab_created_stamps_index() {
    let d = dispatcher();
    let mut index = TabIndex::new(Box::new(MemoryTimestampStore::new()));
    d.on_tab_created(&mut index, 44, 123);
    assert_eq!(index.opened_at(44), Some(123));
}
