use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Annual income bracket captured during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "under-25k")]
    Under25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-75k")]
    From50kTo75k,
    #[serde(rename = "75k-100k")]
    From75kTo100k,
    #[serde(rename = "100k-150k")]
    From100kTo150k,
    #[serde(rename = "over-150k")]
    Over150k,
}

impl IncomeBracket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Under25k,
            Self::From25kTo50k,
            Self::From50kTo75k,
            Self::From75kTo100k,
            Self::From100kTo150k,
            Self::Over150k,
        ]
    }

    /// Resolves a raw bracket key. Unknown and empty keys resolve to `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "under-25k" => Some(Self::Under25k),
            "25k-50k" => Some(Self::From25kTo50k),
            "50k-75k" => Some(Self::From50kTo75k),
            "75k-100k" => Some(Self::From75kTo100k),
            "100k-150k" => Some(Self::From100kTo150k),
            "over-150k" => Some(Self::Over150k),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Under25k => "under-25k",
            Self::From25kTo50k => "25k-50k",
            Self::From50kTo75k => "50k-75k",
            Self::From75kTo100k => "75k-100k",
            Self::From100kTo150k => "100k-150k",
            Self::Over150k => "over-150k",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under25k => "Under $25,000",
            Self::From25kTo50k => "$25,000 - $50,000",
            Self::From50kTo75k => "$50,000 - $75,000",
            Self::From75kTo100k => "$75,000 - $100,000",
            Self::From100kTo150k => "$100,000 - $150,000",
            Self::Over150k => "Over $150,000",
        }
    }
}

/// Self-reported credit score bracket. `Unsure` doubles as the fallback for unknown answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditScoreBracket {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
    #[default]
    Unsure,
}

impl CreditScoreBracket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Poor,
            Self::Fair,
            Self::Good,
            Self::VeryGood,
            Self::Excellent,
            Self::Unsure,
        ]
    }

    /// Total mapping from a raw key; anything unrecognised is `Unsure`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "poor" => Self::Poor,
            "fair" => Self::Fair,
            "good" => Self::Good,
            "very-good" => Self::VeryGood,
            "excellent" => Self::Excellent,
            _ => Self::Unsure,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::VeryGood => "very-good",
            Self::Excellent => "excellent",
            Self::Unsure => "unsure",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor (300-579)",
            Self::Fair => "Fair (580-669)",
            Self::Good => "Good (670-739)",
            Self::VeryGood => "Very Good (740-799)",
            Self::Excellent => "Excellent (800-850)",
            Self::Unsure => "I'm not sure",
        }
    }
}

/// Employment status is carried through to the profile summary only. Values outside the
/// known keys are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
    Other(String),
}

impl EmploymentStatus {
    /// Empty input resolves to `None`; anything else resolves to a status.
    pub fn parse(raw: &str) -> Option<Self> {
        let status = match raw.trim() {
            "" => return None,
            "full-time" => Self::FullTime,
            "part-time" => Self::PartTime,
            "self-employed" => Self::SelfEmployed,
            "unemployed" => Self::Unemployed,
            "retired" => Self::Retired,
            "student" => Self::Student,
            other => Self::Other(other.to_string()),
        };
        Some(status)
    }

    pub fn key(&self) -> &str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::SelfEmployed => "self-employed",
            Self::Unemployed => "unemployed",
            Self::Retired => "retired",
            Self::Student => "student",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::FullTime => "Full-time Employee",
            Self::PartTime => "Part-time Employee",
            Self::SelfEmployed => "Self-employed",
            Self::Unemployed => "Unemployed",
            Self::Retired => "Retired",
            Self::Student => "Student",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for EmploymentStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<EmploymentStatus> for String {
    fn from(status: EmploymentStatus) -> Self {
        status.key().to_string()
    }
}

/// Financial profile supplied by onboarding. Deserialization goes through
/// [`UserProfile::from_raw`], so a profile is never rejected because of an unexpected, empty
/// or non-string field value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProfile")]
pub struct UserProfile {
    pub income: Option<IncomeBracket>,
    /// `None` when the onboarding step was skipped. Ranking reads it through
    /// [`UserProfile::credit_bracket`].
    pub credit_score: Option<CreditScoreBracket>,
    pub employment_status: Option<EmploymentStatus>,
    pub address: String,
}

impl UserProfile {
    /// Builds a profile from raw onboarding keys. Unknown income is dropped, an unknown credit
    /// score answer counts as `unsure`, and blank input leaves a field unset.
    pub fn from_raw(
        income: &str,
        credit_score: &str,
        employment_status: &str,
        address: &str,
    ) -> Self {
        let credit_score = match credit_score.trim() {
            "" => None,
            answer => Some(CreditScoreBracket::parse(answer)),
        };

        Self {
            income: IncomeBracket::parse(income),
            credit_score,
            employment_status: EmploymentStatus::parse(employment_status),
            address: address.trim().to_string(),
        }
    }

    /// Bracket used for card selection and loan scoring; a skipped answer ranks as `unsure`.
    pub fn credit_bracket(&self) -> CreditScoreBracket {
        self.credit_score.unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProfile {
    income: Value,
    credit_score: Value,
    employment_status: Value,
    address: Value,
}

impl From<RawProfile> for UserProfile {
    fn from(raw: RawProfile) -> Self {
        fn text(value: &Value) -> &str {
            value.as_str().unwrap_or("")
        }

        UserProfile::from_raw(
            text(&raw.income),
            text(&raw.credit_score),
            text(&raw.employment_status),
            text(&raw.address),
        )
    }
}

/// Product categories offered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    CreditCard,
    Mortgage,
    AutoLoan,
    PersonalLoan,
    Checking,
}

impl ProductType {
    /// Tab order used by the dashboard.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CreditCard,
            Self::Mortgage,
            Self::AutoLoan,
            Self::PersonalLoan,
            Self::Checking,
        ]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "credit-card" => Some(Self::CreditCard),
            "mortgage" => Some(Self::Mortgage),
            "auto-loan" => Some(Self::AutoLoan),
            "personal-loan" => Some(Self::PersonalLoan),
            "checking" => Some(Self::Checking),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::Mortgage => "mortgage",
            Self::AutoLoan => "auto-loan",
            Self::PersonalLoan => "personal-loan",
            Self::Checking => "checking",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Cards",
            Self::Mortgage => "Mortgages",
            Self::AutoLoan => "Auto Loans",
            Self::PersonalLoan => "Personal Loans",
            Self::Checking => "Banking",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Relative suitability on a 0-100 scale. Construction clamps to the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn band(self) -> MatchBand {
        MatchBand::for_score(self)
    }
}

impl From<u8> for MatchScore {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% Match", self.0)
    }
}

/// Badge grouping for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchBand {
    pub const fn for_score(score: MatchScore) -> Self {
        let value = score.value();
        if value >= 90 {
            Self::Strong
        } else if value >= 80 {
            Self::Good
        } else if value >= 70 {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Weak => "weak",
        }
    }
}

/// Authored catalog entry. Turned into an owned [`FinancialProduct`] on every ranking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub product_type: ProductType,
    pub apr: &'static str,
    pub features: Vec<&'static str>,
    pub match_score: MatchScore,
    pub description: &'static str,
}

impl ProductTemplate {
    pub fn to_product(&self) -> FinancialProduct {
        self.to_product_with_score(self.match_score)
    }

    pub fn to_product_with_score(&self, match_score: MatchScore) -> FinancialProduct {
        FinancialProduct {
            id: self.id.to_string(),
            name: self.name.to_string(),
            provider: self.provider.to_string(),
            product_type: self.product_type,
            apr: self.apr.to_string(),
            features: self.features.iter().map(|feature| feature.to_string()).collect(),
            match_score,
            description: self.description.to_string(),
        }
    }
}

/// Recommended product as rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProduct {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub apr: String,
    pub features: Vec<String>,
    pub match_score: MatchScore,
    pub description: String,
}

impl FinancialProduct {
    pub fn band(&self) -> MatchBand {
        self.match_score.band()
    }
}
