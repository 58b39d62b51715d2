use crate::domain::recommendation::entities::KeywordTable;

/// Aggregates every port the use cases depend on. Each domain module adds its
/// own service trait implementation for this type.
#[derive(Clone)]
pub struct Service<R, CA, MI, A, H, T, MS, LLM, HC> {
    pub(crate) restaurant_repository: R,
    pub(crate) category_repository: CA,
    pub(crate) menu_item_repository: MI,
    pub(crate) admin_repository: A,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) media_storage: MS,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
    pub(crate) keyword_table: KeywordTable,
}

#[allow(clippy::too_many_arguments)]
impl<R, CA, MI, A, H, T, MS, LLM, HC> Service<R, CA, MI, A, H, T, MS, LLM, HC> {
    pub fn new(
        restaurant_repository: R,
        category_repository: CA,
        menu_item_repository: MI,
        admin_repository: A,
        hasher_repository: H,
        token_repository: T,
        media_storage: MS,
        llm_client: LLM,
        health_check_repository: HC,
        keyword_table: KeywordTable,
    ) -> Self {
        Self {
            restaurant_repository,
            category_repository,
            menu_item_repository,
            admin_repository,
            hasher_repository,
            token_repository,
            media_storage,
            llm_client,
            health_check_repository,
            keyword_table,
        }
    }
}
