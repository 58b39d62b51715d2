use crate::domain::recommendation::entities::ConstraintSet;

pub const MAX_PICKS: usize = 3;
pub const MAX_REASON_CHARS: usize = 160;
pub const RAW_EXCERPT_CHARS: usize = 400;

pub struct RecommendInput {
    pub restaurant_slug: String,
    pub constraints: ConstraintSet,
}
