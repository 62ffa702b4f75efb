use super::catalog::{select_banking_products, select_credit_cards, BankingTier};
use super::domain::{FinancialProduct, ProductType, UserProfile};
use super::scoring::{score_auto_loan, score_mortgage, score_personal_loan};
use serde::Serialize;
use tracing::debug;

/// How a category turns a profile into candidates.
#[derive(Clone, Copy)]
pub enum CategorySource {
    /// Pre-scored shelf chosen by a profile bracket.
    Catalog {
        keyed_by: &'static str,
        select: fn(&UserProfile) -> Vec<FinancialProduct>,
    },
    /// Single fixed product whose score depends on the profile.
    Scored {
        scored_by: &'static str,
        score: fn(&UserProfile) -> FinancialProduct,
    },
}

impl CategorySource {
    fn extend(&self, profile: &UserProfile, products: &mut Vec<FinancialProduct>) {
        match self {
            CategorySource::Catalog { select, .. } => products.extend(select(profile)),
            CategorySource::Scored { score, .. } => products.push(score(profile)),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            CategorySource::Catalog { .. } => "catalog",
            CategorySource::Scored { .. } => "scored",
        }
    }

    pub const fn driver(&self) -> &'static str {
        match self {
            CategorySource::Catalog { keyed_by, .. } => *keyed_by,
            CategorySource::Scored { scored_by, .. } => *scored_by,
        }
    }
}

#[derive(Clone, Copy)]
pub struct CategoryEntry {
    pub product_type: ProductType,
    pub source: CategorySource,
}

/// Lookup table in concatenation order. Ties in the ranked list keep this order.
pub static CATEGORY_TABLE: [CategoryEntry; 5] = [
    CategoryEntry {
        product_type: ProductType::CreditCard,
        source: CategorySource::Catalog {
            keyed_by: "credit_score",
            select: credit_cards_for,
        },
    },
    CategoryEntry {
        product_type: ProductType::Checking,
        source: CategorySource::Catalog {
            keyed_by: "income",
            select: banking_products_for,
        },
    },
    CategoryEntry {
        product_type: ProductType::Mortgage,
        source: CategorySource::Scored {
            scored_by: "income",
            score: score_mortgage,
        },
    },
    CategoryEntry {
        product_type: ProductType::AutoLoan,
        source: CategorySource::Scored {
            scored_by: "credit_score",
            score: score_auto_loan,
        },
    },
    CategoryEntry {
        product_type: ProductType::PersonalLoan,
        source: CategorySource::Scored {
            scored_by: "credit_score",
            score: score_personal_loan,
        },
    },
];

fn credit_cards_for(profile: &UserProfile) -> Vec<FinancialProduct> {
    select_credit_cards(profile.credit_bracket())
}

fn banking_products_for(profile: &UserProfile) -> Vec<FinancialProduct> {
    select_banking_products(profile.income)
}

pub fn category_entry(product_type: ProductType) -> Option<&'static CategoryEntry> {
    CATEGORY_TABLE
        .iter()
        .find(|entry| entry.product_type == product_type)
}

/// Every category's candidates, unsorted, in table order.
pub fn collect_candidates(profile: &UserProfile) -> Vec<FinancialProduct> {
    let mut products = Vec::new();
    for entry in CATEGORY_TABLE.iter() {
        entry.source.extend(profile, &mut products);
    }
    products
}

/// Ranks every candidate by descending match score. The sort is stable, so equal scores
/// retain the concatenation order of [`CATEGORY_TABLE`].
pub fn rank(profile: &UserProfile) -> Vec<FinancialProduct> {
    let mut products = collect_candidates(profile);
    products.sort_by(|left, right| right.match_score.cmp(&left.match_score));

    debug!(
        credit_score = profile.credit_bracket().key(),
        income = profile.income.map(|income| income.key()).unwrap_or("unset"),
        banking_tier = ?BankingTier::for_income(profile.income),
        products = products.len(),
        "ranked product recommendations"
    );

    products
}

/// Serializable view of one table row for catalog introspection.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDescriptor {
    pub product_type: ProductType,
    pub label: &'static str,
    pub source: &'static str,
    pub driven_by: &'static str,
}

pub fn describe_categories() -> Vec<CategoryDescriptor> {
    CATEGORY_TABLE
        .iter()
        .map(|entry| CategoryDescriptor {
            product_type: entry.product_type,
            label: entry.product_type.label(),
            source: entry.source.kind(),
            driven_by: entry.source.driver(),
        })
        .collect()
}
