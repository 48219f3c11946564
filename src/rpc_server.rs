//! TabFinder RPC Server: JSON-RPC over stdin/stdout for the extension host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"query.set", "params":{"query":"git"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::{error, info};

use tabfinder::app::App;
use tabfinder::logging::init_logging;
use tabfinder::rpc_handler::handle_method;
use tabfinder::services::settings_engine::SettingsEngineTrait;

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    let settings_path = std::env::var("TABFINDER_SETTINGS").ok();
    let app = match App::new(settings_path) {
        Ok(app) => app,
        Err(e) => {
            init_logging("info");
            error!(error = %e, "failed to initialize TabFinder");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&app.settings_engine.get_settings().logging.filter);
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if send(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")})).is_err() {
        return ExitCode::FAILURE;
    }
    info!("rpc server ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        error!(method, error = %err, "rpc call failed");
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if send(&mut out, &response).is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
