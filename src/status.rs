//! Analysis status probes
//!
//! Analysis pipelines record completion flags in small JSON status
//! files. The probe here answers "is this entry truthy" and treats
//! every failure mode as "no": callers poll it in loops and must never
//! have to handle a read error.

use std::path::Path;

use serde_json::Value;
use tracing::error;

/// Check a status entry recorded in an analysis JSON file.
///
/// Returns `true` only when the file exists, parses as JSON, and holds
/// a truthy value under `status_entry_name`. A missing file, a decode
/// or IO failure, or a missing entry all return `false`; failures are
/// logged, never raised.
pub fn load_analysis_status(status_json_path: &Path, status_entry_name: &str) -> bool {
    if !status_json_path.exists() {
        return false;
    }

    let contents = match std::fs::read(status_json_path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(
                "IO error occurred when reading status file {}: {}",
                status_json_path.display(),
                e
            );
            return false;
        }
    };

    let status: Value = match serde_json::from_slice(&contents) {
        Ok(status) => status,
        Err(e) => {
            error!(
                "Error decoding JSON from file {}: {}",
                status_json_path.display(),
                e
            );
            return false;
        }
    };

    status
        .get(status_entry_name)
        .map(is_truthy)
        .unwrap_or(false)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
