use menuart_core::domain::recommendation::entities::ConstraintSet;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendValidator {
    #[serde(default)]
    #[validate(length(max = 100, message = "diet is too long"))]
    pub diet: Option<String>,

    /// Allergy tags such as `lactose` or `gluten`.
    #[serde(default)]
    #[validate(length(max = 20, message = "too many allergies"))]
    pub allergies: Option<Vec<String>>,

    /// `chicken`, `beef` or `seafood` restrict the candidates; anything else
    /// is only a hint for the ranker.
    #[serde(default)]
    #[validate(length(max = 100, message = "preference is too long"))]
    pub preference: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "mood is too long"))]
    pub mood: Option<String>,

    /// Passed to the ranker as a hint; never filters candidates.
    #[serde(default)]
    pub budget: Option<f64>,
}

impl From<RecommendValidator> for ConstraintSet {
    fn from(payload: RecommendValidator) -> Self {
        ConstraintSet {
            diet: payload.diet,
            allergies: payload.allergies,
            preference: payload.preference,
            mood: payload.mood,
            budget: payload.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_a_valid_request() {
        let payload: RecommendValidator = serde_json::from_str("{}").unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(ConstraintSet::from(payload), ConstraintSet::default());
    }

    #[test]
    fn test_budget_is_forwarded_untouched() {
        let payload = RecommendValidator {
            budget: Some(-5.0),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
        assert_eq!(ConstraintSet::from(payload).budget, Some(-5.0));
    }
}
