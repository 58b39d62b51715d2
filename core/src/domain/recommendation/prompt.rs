use serde::Serialize;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::entities::{CandidateItem, ConstraintSet},
};

const RANKING_INSTRUCTIONS: &str = "You are a restaurant menu recommender.\n\
Rules:\n\
- Only recommend from the provided menu items.\n\
- The menu was already filtered for allergies and protein preference. Do not violate constraints.\n\
- Return UP TO 3 DIFFERENT items (unique IDs). If fewer items exist, return fewer.\n\
- IDs must be UNIQUE. Never repeat the same id.\n\
- Return STRICT JSON ONLY with this exact shape:\n  \
{\"picks\":[{\"id\":<int>,\"reason\":\"<short>\"}]}\n\
- No extra text, no markdown.\n";

#[derive(Serialize)]
struct RankingPayload<'a> {
    preferences: &'a ConstraintSet,
    menu: &'a [CandidateItem],
}

pub fn build_ranking_prompt(
    constraints: &ConstraintSet,
    candidates: &[CandidateItem],
) -> Result<String, CoreError> {
    let payload = serde_json::to_string(&RankingPayload {
        preferences: constraints,
        menu: candidates,
    })
    .map_err(|e| {
        error!("Failed to serialize ranking payload: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(format!("{}\nDATA:\n{}", RANKING_INSTRUCTIONS, payload))
}
