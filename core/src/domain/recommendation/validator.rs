use std::collections::HashSet;

use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, truncate_chars},
    recommendation::{
        entities::Pick,
        value_objects::{MAX_PICKS, MAX_REASON_CHARS, RAW_EXCERPT_CHARS},
    },
};

/// Turns raw ranker output into at most [`MAX_PICKS`] picks whose ids are
/// unique and belong to `candidate_ids`. Picks keep the ranker's order.
pub fn validate_picks(raw: &str, candidate_ids: &HashSet<i64>) -> Result<Vec<Pick>, CoreError> {
    let invalid = || CoreError::InvalidRankerOutput(truncate_chars(raw, RAW_EXCERPT_CHARS));

    let data: Value = serde_json::from_str(raw).map_err(|_| invalid())?;
    let picks = data
        .as_object()
        .and_then(|object| object.get("picks"))
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(MAX_PICKS);

    for pick in picks.iter().filter_map(Value::as_object) {
        let Some(id) = pick.get("id").and_then(coerce_id) else {
            continue;
        };

        if !candidate_ids.contains(&id) || !seen.insert(id) {
            continue;
        }

        accepted.push(Pick {
            id,
            reason: truncate_chars(&reason_text(pick.get("reason")), MAX_REASON_CHARS),
        });

        if accepted.len() == MAX_PICKS {
            break;
        }
    }

    Ok(accepted)
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn reason_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
