use crate::calc::calculator::DisplayResult;
use crate::calc::error::CalcError;
use crate::locale::Labels;
use serde_json::{json, Value};

/// Text for the result area in the active language
pub fn render_result(result: &Result<DisplayResult, CalcError>, labels: &Labels) -> String {
    match result {
        Ok(DisplayResult::AlreadyReached) => labels.already.to_string(),
        Ok(DisplayResult::Remaining(hms)) => format!("{}: {}", labels.time, hms),
        Err(e) => format!("Error: {}", e),
    }
}

/// Machine-readable form of a calculation result
pub fn result_to_json(result: &Result<DisplayResult, CalcError>) -> Value {
    match result {
        Ok(display) => {
            let mut value = json!(display);
            if let Value::Object(ref mut map) = value {
                map.insert("total_seconds".to_string(), json!(display.total_seconds()));
            }
            value
        }
        Err(e) => json!({
            "status": "error",
            "message": e.to_string(),
        }),
    }
}
