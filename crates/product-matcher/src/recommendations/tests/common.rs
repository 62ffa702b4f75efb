use std::sync::Arc;

use crate::recommendations::domain::{
    CreditScoreBracket, EmploymentStatus, FinancialProduct, IncomeBracket, UserProfile,
};
use crate::recommendations::{RecommendationEngine, RecommendationSettings};

pub(super) fn profile(
    income: Option<IncomeBracket>,
    credit_score: CreditScoreBracket,
) -> UserProfile {
    UserProfile {
        income,
        credit_score: Some(credit_score),
        employment_status: Some(EmploymentStatus::FullTime),
        address: "742 Evergreen Terrace, Springfield, OR 97403".to_string(),
    }
}

pub(super) fn empty_profile() -> UserProfile {
    UserProfile::from_raw("", "", "", "")
}

/// Every income option including a missing one.
pub(super) fn income_options() -> Vec<Option<IncomeBracket>> {
    IncomeBracket::ordered()
        .into_iter()
        .map(Some)
        .chain([None])
        .collect()
}

/// Every combination of income and credit bracket the onboarding form can produce.
pub(super) fn all_profiles() -> Vec<UserProfile> {
    income_options()
        .into_iter()
        .flat_map(|income| {
            CreditScoreBracket::ordered()
                .into_iter()
                .map(move |credit_score| profile(income, credit_score))
        })
        .collect()
}

pub(super) fn ids(products: &[FinancialProduct]) -> Vec<&str> {
    products.iter().map(|product| product.id.as_str()).collect()
}

pub(super) fn scores(products: &[FinancialProduct]) -> Vec<u8> {
    products
        .iter()
        .map(|product| product.match_score.value())
        .collect()
}

pub(super) fn engine() -> Arc<RecommendationEngine> {
    Arc::new(RecommendationEngine::new(RecommendationSettings::default()))
}
