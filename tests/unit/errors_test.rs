use tabfinder::types::errors::*;

#[test]
fn tab_source_error_display() {
    assert_eq!(
        TabSourceError::Unavailable("chrome.tabs missing".to_string()).to_string(),
        "Tab API not available: chrome.tabs missing"
    );
    assert_eq!(
        TabSourceError::QueryFailed("permission denied".to_string()).to_string(),
        "Error loading tabs: permission denied"
    );
}

#[test]
fn activation_error_display() {
    let err = ActivationError::Failed {
        tab_id: 7,
        reason: "No tab with id: 7".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to switch to tab 7: No tab with id: 7");
}

#[test]
fn favicon_error_display() {
    assert_eq!(
        FaviconError::Malformed("unsupported scheme".to_string()).to_string(),
        "Malformed favicon URL: unsupported scheme"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(err.to_string().starts_with("Timestamp store database error:"));
}

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
}

#[test]
fn dispatch_error_wraps_activation_error() {
    let inner = ActivationError::Failed {
        tab_id: 1,
        reason: "gone".to_string(),
    };
    let err: DispatchError = inner.clone().into();
    assert_eq!(err.to_string(), format!("Failed to focus popup: {}", inner));

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_some());
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(TabSourceError::QueryFailed("x".to_string()));
    assert!(err.source().is_none());
}
