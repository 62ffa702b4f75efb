//! Profile-to-product matching: catalogs, conditional scoring, ranking, and dashboard views.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod ranking;
pub mod router;
pub mod scoring;
mod settings;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{select_banking_products, select_credit_cards, BankingTier, CATALOG_VERSION};
pub use domain::{
    CreditScoreBracket, EmploymentStatus, FinancialProduct, IncomeBracket, MatchBand, MatchScore,
    ProductType, UserProfile,
};
pub use export::{write_csv, ExportError};
pub use ranking::{describe_categories, rank, CategoryDescriptor};
pub use router::recommendation_router;
pub use scoring::{score_auto_loan, score_mortgage, score_personal_loan};
pub use settings::RecommendationSettings;
pub use views::{
    filter_by_type, top_picks, DashboardTab, ProfileCompleteness, ProfileSummary, ProductView,
    TabView,
};

use serde::Serialize;

/// Stateless facade that ranks a profile and shapes the dashboard payload.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    settings: RecommendationSettings,
}

impl RecommendationEngine {
    pub fn new(settings: RecommendationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RecommendationSettings {
        &self.settings
    }

    pub fn recommend(&self, profile: &UserProfile, tab: &DashboardTab) -> RecommendationReport {
        let ranked = rank(profile);
        let view = TabView::build(tab, &ranked, self.settings.top_picks);

        RecommendationReport {
            catalog_version: CATALOG_VERSION,
            summary: ProfileSummary::from_profile(profile),
            completeness: ProfileCompleteness::assess(profile),
            banking_tier: BankingTier::for_income(profile.income),
            view,
            ranked: ranked.into_iter().map(ProductView::from).collect(),
        }
    }
}

/// Everything the dashboard renders for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub catalog_version: &'static str,
    pub summary: ProfileSummary,
    pub completeness: ProfileCompleteness,
    pub banking_tier: BankingTier,
    pub view: TabView,
    pub ranked: Vec<ProductView>,
}

impl RecommendationReport {
    pub fn ranked_products(&self) -> Vec<FinancialProduct> {
        self.ranked.iter().map(|view| view.product.clone()).collect()
    }
}
