use super::domain::{FinancialProduct, MatchBand, ProductType, UserProfile};
use serde::{Deserialize, Serialize};

/// Order-preserving subsequence of `ranked` restricted to one product type.
pub fn filter_by_type(
    ranked: &[FinancialProduct],
    product_type: ProductType,
) -> Vec<FinancialProduct> {
    ranked
        .iter()
        .filter(|product| product.product_type == product_type)
        .cloned()
        .collect()
}

/// Leading `limit` entries of an already ranked list.
pub fn top_picks(ranked: &[FinancialProduct], limit: usize) -> Vec<FinancialProduct> {
    ranked.iter().take(limit).cloned().collect()
}

/// Dashboard tab selector. Parsing never fails; unrecognised identifiers select an empty tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DashboardTab {
    #[default]
    All,
    Category(ProductType),
    Unknown(String),
}

impl DashboardTab {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "all" {
            return Self::All;
        }
        match ProductType::parse(raw) {
            Some(product_type) => Self::Category(product_type),
            None => Self::Unknown(raw.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(product_type) => product_type.key(),
            Self::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Products",
            Self::Category(product_type) => product_type.label(),
            Self::Unknown(raw) => raw,
        }
    }

    /// Products shown under this tab for a ranked list.
    pub fn select(
        &self,
        ranked: &[FinancialProduct],
        top_pick_limit: usize,
    ) -> Vec<FinancialProduct> {
        match self {
            Self::All => top_picks(ranked, top_pick_limit),
            Self::Category(product_type) => filter_by_type(ranked, *product_type),
            Self::Unknown(_) => Vec::new(),
        }
    }
}

impl From<String> for DashboardTab {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DashboardTab> for String {
    fn from(tab: DashboardTab) -> Self {
        tab.key().to_string()
    }
}

/// Product card payload with its badge band.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: FinancialProduct,
    pub match_band: MatchBand,
}

impl From<FinancialProduct> for ProductView {
    fn from(product: FinancialProduct) -> Self {
        let match_band = product.band();
        Self {
            product,
            match_band,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub tab: String,
    pub label: String,
    pub products: Vec<ProductView>,
}

impl TabView {
    pub fn build(tab: &DashboardTab, ranked: &[FinancialProduct], top_pick_limit: usize) -> Self {
        Self {
            tab: tab.key().to_string(),
            label: tab.label().to_string(),
            products: tab
                .select(ranked, top_pick_limit)
                .into_iter()
                .map(ProductView::from)
                .collect(),
        }
    }
}

/// Display labels for the profile header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub income: Option<&'static str>,
    pub credit_score: &'static str,
    pub employment: Option<String>,
    pub location: Option<String>,
}

impl ProfileSummary {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            income: profile.income.map(|income| income.label()),
            credit_score: profile.credit_bracket().label(),
            employment: profile
                .employment_status
                .as_ref()
                .map(|status| status.label().to_string()),
            location: location_from_address(&profile.address),
        }
    }
}

/// City and state/zip portion of a free-form address: its last two comma separated segments.
pub fn location_from_address(address: &str) -> Option<String> {
    let segments: Vec<&str> = address
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.is_empty() {
        return None;
    }
    let start = segments.len().saturating_sub(2);
    Some(segments[start..].join(", "))
}

/// Onboarding fields still missing from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Income,
    EmploymentStatus,
    Address,
    CreditScore,
}

impl ProfileField {
    pub const fn onboarding_step(self) -> u8 {
        match self {
            Self::Income | Self::EmploymentStatus => 1,
            Self::Address => 2,
            Self::CreditScore => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCompleteness {
    pub complete: bool,
    pub missing: Vec<ProfileField>,
}

impl ProfileCompleteness {
    /// Informational only; ranking accepts incomplete profiles and ranks a skipped credit
    /// score as `unsure`.
    pub fn assess(profile: &UserProfile) -> Self {
        let mut missing = Vec::new();
        if profile.income.is_none() {
            missing.push(ProfileField::Income);
        }
        if profile.employment_status.is_none() {
            missing.push(ProfileField::EmploymentStatus);
        }
        if profile.address.trim().is_empty() {
            missing.push(ProfileField::Address);
        }
        if profile.credit_score.is_none() {
            missing.push(ProfileField::CreditScore);
        }

        Self {
            complete: missing.is_empty(),
            missing,
        }
    }
}
