//! RPC method handler for the TabFinder JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested directly.
//! `handle_method` dispatches each call to the popup session, dispatcher or
//! settings held by the `App`. Activation requests produced while handling
//! a call are returned in an `activate` array for the host to carry out.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::popup_dispatcher::{HostSnapshot, HostTab, PopupTrigger};
use crate::managers::tab_index::TabIndex;
use crate::services::browser_api::{ActivationRequest, QueuedActivator, SnapshotTabSource};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::session::{Key, KeyOutcome};
use crate::types::errors::{ActivationError, TabSourceError};
use crate::types::tab::RawTab;

/// Serialises the session's current view.
fn view_json(app: &App) -> Result<Value, String> {
    serde_json::to_value(app.session.view(&app.renderer, TabIndex::now())).map_err(|e| e.to_string())
}

fn activation_json(requests: &[ActivationRequest]) -> Result<Value, String> {
    serde_json::to_value(requests).map_err(|e| e.to_string())
}

/// Reads a `tabs.refresh` payload: either a listing or the error the host hit.
fn tab_source_from(params: &Value) -> Result<SnapshotTabSource, String> {
    if let Some(err) = params.get("error") {
        let message = err.get("message").and_then(|v| v.as_str()).unwrap_or("").to_string();
        let error = match err.get("kind").and_then(|v| v.as_str()) {
            Some("unavailable") => TabSourceError::Unavailable(message),
            Some("query_failed") | None => TabSourceError::QueryFailed(message),
            Some(other) => return Err(format!("invalid error kind: {}", other)),
        };
        return Ok(SnapshotTabSource::failed(error));
    }

    let tabs = params.get("tabs").cloned().ok_or("missing tabs")?;
    let tabs: Vec<RawTab> = serde_json::from_value(tabs).map_err(|e| format!("invalid tabs: {}", e))?;
    Ok(SnapshotTabSource::new(tabs))
}

fn outcome_name(outcome: &KeyOutcome) -> &'static str {
    match outcome {
        KeyOutcome::Moved => "moved",
        KeyOutcome::Activated(_) => "activated",
        KeyOutcome::NothingToActivate => "nothing_to_activate",
        KeyOutcome::ActivationFailed(_) => "activation_failed",
        KeyOutcome::QueryCleared => "query_cleared",
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Tabs ───
        "tabs.refresh" => {
            let source = tab_source_from(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let count = a.session.refresh(&source).ok();
            Ok(json!({"count": count, "view": view_json(&a)?}))
        }
        "tabs.created" => {
            let id = params.get("id").and_then(|v| v.as_i64()).ok_or("missing id")?;
            let mut guard = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *guard;
            a.dispatcher.on_tab_created(a.session.index_mut(), id, TabIndex::now());
            Ok(json!({"ok": true}))
        }

        // ─── Query ───
        "query.set" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.session.set_query(query);
            Ok(json!({"view": view_json(&a)?}))
        }
        "query.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.session.clear_query();
            Ok(json!({"focus_input": true, "view": view_json(&a)?}))
        }
        "view" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            view_json(&a)
        }

        // ─── Selection ───
        "key" => {
            let name = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let key = match Key::parse(name) {
                Some(k) => k,
                None => return Ok(json!({"handled": false})),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut activator = QueuedActivator::new();
            let outcome = a.session.handle_key(key, &mut activator);
            let error = match &outcome {
                KeyOutcome::ActivationFailed(e) => Some(e.to_string()),
                _ => None,
            };
            Ok(json!({
                "handled": true,
                "outcome": outcome_name(&outcome),
                "error": error,
                "activate": activation_json(&activator.drain())?,
                "view": view_json(&a)?,
            }))
        }
        "click" => {
            let index = params.get("index").and_then(|v| v.as_u64()).ok_or("missing index")? as usize;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut activator = QueuedActivator::new();
            a.session.click(index, &mut activator).map_err(|e| e.to_string())?;
            Ok(json!({"activate": activation_json(&activator.drain())?}))
        }
        "activation.report" => {
            let tab_id = params.get("tab_id").and_then(|v| v.as_i64()).ok_or("missing tab_id")?;
            let ok = params.get("ok").and_then(|v| v.as_bool()).ok_or("missing ok")?;
            if !ok {
                let reason = params
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown error")
                    .to_string();
                let mut a = app.lock().map_err(|e| e.to_string())?;
                a.session
                    .report_activation_failure(ActivationError::Failed { tab_id, reason });
            }
            Ok(json!({"ok": true}))
        }

        // ─── Popup lifecycle ───
        "popup.trigger" => {
            let trigger = match params.get("trigger").and_then(|v| v.as_str()) {
                Some("icon") => PopupTrigger::IconClicked,
                Some("command") => {
                    let name = params.get("command").and_then(|v| v.as_str()).ok_or("missing command")?;
                    PopupTrigger::Command(name.to_string())
                }
                Some(other) => return Err(format!("invalid trigger: {}", other)),
                None => return Err("missing trigger".to_string()),
            };
            let open_tabs: Vec<HostTab> = match params.get("tabs") {
                Some(v) if !v.is_null() => {
                    serde_json::from_value(v.clone()).map_err(|e| format!("invalid tabs: {}", e))?
                }
                _ => Vec::new(),
            };

            let a = app.lock().map_err(|e| e.to_string())?;
            let mut host = HostSnapshot::new(open_tabs);
            let mut activator = QueuedActivator::new();
            let outcome = a
                .dispatcher
                .dispatch(&trigger, &mut host, &mut activator)
                .map_err(|e| e.to_string())?;
            Ok(json!({
                "outcome": serde_json::to_value(&outcome).map_err(|e| e.to_string())?,
                "create": host.created(),
                "activate": activation_json(&activator.drain())?,
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
