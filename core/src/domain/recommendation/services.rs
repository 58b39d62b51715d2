use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::{
    admin::ports::AdminRepository,
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    media::ports::MediaStoragePort,
    menu_item::{entities::MenuItem, ports::MenuItemRepository},
    recommendation::{
        entities::{CandidateItem, ConstraintSet, KeywordTable, Recommendation},
        filters::filter_candidates,
        ports::{LLMClient, RecommendationService},
        prompt::build_ranking_prompt,
        validator::validate_picks,
        value_objects::RecommendInput,
    },
    restaurant::ports::RestaurantRepository,
};

impl<R, CA, MI, A, H, T, MS, LLM, HC> RecommendationService
    for Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    R: RestaurantRepository,
    CA: CategoryRepository,
    MI: MenuItemRepository,
    A: AdminRepository,
    H: HasherRepository,
    T: TokenRepository,
    MS: MediaStoragePort,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn recommend(&self, input: RecommendInput) -> Result<Recommendation, CoreError> {
        let restaurant = self.restaurant_by_slug(&input.restaurant_slug).await?;

        let items = self
            .menu_item_repository
            .list_by_restaurant(restaurant.id, true)
            .await?;

        let recommendation = rank_items(
            &self.llm_client,
            &self.keyword_table,
            items,
            &input.constraints,
        )
        .await?;

        info!(
            slug = %restaurant.slug,
            picks = recommendation.picks.len(),
            "recommendation served"
        );

        Ok(recommendation)
    }
}

/// Filters `items` against the hard constraints, asks the ranker to choose
/// among the survivors and validates its answer. The ranker is not called
/// when nothing survives filtering.
pub async fn rank_items<L: LLMClient>(
    llm: &L,
    table: &KeywordTable,
    items: Vec<MenuItem>,
    constraints: &ConstraintSet,
) -> Result<Recommendation, CoreError> {
    let total = items.len();
    let candidates = filter_candidates(items, constraints, table);
    debug!(total, candidates = candidates.len(), "hard filters applied");

    if candidates.is_empty() {
        return Ok(Recommendation::default());
    }

    let projected: Vec<CandidateItem> = candidates.iter().map(CandidateItem::from).collect();
    let candidate_ids: HashSet<i64> = projected.iter().map(|c| c.id).collect();

    let prompt = build_ranking_prompt(constraints, &projected)?;
    let text = llm.generate_text(prompt).await?;
    let text = text.trim();

    if text.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "AI returned empty response text.".to_string(),
        ));
    }

    let picks = validate_picks(text, &candidate_ids)?;

    Ok(Recommendation { picks })
}
