use scantarget_lib::config::AppConfig;
use scantarget_lib::record::UserRecord;
use std::fmt::Write as _;

/// Render the configuration settings
///
/// The format is validated before dispatch, so only "json" and "text"
/// reach this point.
#[must_use]
pub fn render_config(config: &AppConfig, format: &str) -> String {
    match format {
        "json" => serde_json::json!({ "config": config.as_map() }).to_string(),
        "text" => {
            let mut out = String::new();
            let _ = writeln!(out, "debug: {}", config.debug);
            let _ = writeln!(out, "log_level: {}", config.log_level);
            let _ = writeln!(out, "max_connections: {}", config.max_connections);
            let _ = write!(out, "timeout: {}", config.timeout);
            out
        }
        _ => unreachable!(),
    }
}

/// Render a fetched user record
#[must_use]
pub fn render_record(record: &UserRecord, format: &str) -> String {
    match format {
        "json" => serde_json::json!({ "user": record }).to_string(),
        "text" => format!("User: {record}"),
        _ => unreachable!(),
    }
}

/// Render a score total for the given inputs
#[must_use]
pub fn render_score(items: &[f64], total: f64, format: &str) -> String {
    match format {
        "json" => serde_json::json!({
            "items": items.len(),
            "total": total,
        })
        .to_string(),
        "text" => total.to_string(),
        _ => unreachable!(),
    }
}

/// Render an evaluated expression result
#[must_use]
pub fn render_eval(expr: &str, value: f64, format: &str) -> String {
    match format {
        "json" => serde_json::json!({
            "expression": expr,
            "result": value,
        })
        .to_string(),
        "text" => value.to_string(),
        _ => unreachable!(),
    }
}
