use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::Recommendation, value_objects::RecommendInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}

/// Text-generation backend used to rank candidates.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}
