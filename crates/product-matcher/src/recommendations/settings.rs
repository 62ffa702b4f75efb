use serde::{Deserialize, Serialize};

/// Presentation knobs applied on top of the ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSettings {
    /// Number of products shown under the "All Products" tab.
    pub top_picks: usize,
}

impl RecommendationSettings {
    pub const DEFAULT_TOP_PICKS: usize = 6;
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_picks: Self::DEFAULT_TOP_PICKS,
        }
    }
}
