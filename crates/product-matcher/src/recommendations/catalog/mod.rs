//! Static product catalogs keyed by profile bracket.
//!
//! Credit cards are keyed by credit-score bracket and banking products by income tier. Every
//! input resolves to a list, so lookups have no failure path.

mod banking;
mod credit_cards;

use super::domain::{CreditScoreBracket, FinancialProduct, IncomeBracket, ProductTemplate};
use serde::{Deserialize, Serialize};

/// Version label of the authored tables. Bump whenever an entry, score, or order changes.
pub const CATALOG_VERSION: &str = "2025.06";

/// Collapsed income grouping that selects the banking shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankingTier {
    Premium,
    HighYield,
    Entry,
}

impl BankingTier {
    /// Three-way partition of the six income brackets. Everything outside the top four
    /// brackets, including a missing income, shares the entry tier.
    pub const fn for_income(income: Option<IncomeBracket>) -> Self {
        match income {
            Some(IncomeBracket::Over150k) | Some(IncomeBracket::From100kTo150k) => Self::Premium,
            Some(IncomeBracket::From75kTo100k) | Some(IncomeBracket::From50kTo75k) => {
                Self::HighYield
            }
            Some(IncomeBracket::From25kTo50k) | Some(IncomeBracket::Under25k) | None => {
                Self::Entry
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Premium => "Premium banking",
            Self::HighYield => "High-yield savings",
            Self::Entry => "No-credit-check & second-chance banking",
        }
    }
}

pub fn credit_card_templates(credit_score: CreditScoreBracket) -> Vec<ProductTemplate> {
    match credit_score {
        CreditScoreBracket::Poor => credit_cards::poor_credit_cards(),
        CreditScoreBracket::Fair => credit_cards::fair_credit_cards(),
        CreditScoreBracket::Good => credit_cards::good_credit_cards(),
        CreditScoreBracket::VeryGood | CreditScoreBracket::Excellent => {
            credit_cards::premium_credit_cards()
        }
        CreditScoreBracket::Unsure => credit_cards::fallback_credit_cards(),
    }
}

pub fn banking_templates(tier: BankingTier) -> Vec<ProductTemplate> {
    match tier {
        BankingTier::Premium => banking::premium_accounts(),
        BankingTier::HighYield => banking::high_yield_accounts(),
        BankingTier::Entry => banking::entry_accounts(),
    }
}

/// Credit cards for a bracket in authored order.
pub fn select_credit_cards(credit_score: CreditScoreBracket) -> Vec<FinancialProduct> {
    credit_card_templates(credit_score)
        .iter()
        .map(ProductTemplate::to_product)
        .collect()
}

/// Banking products for the tier the income collapses into, in authored order.
pub fn select_banking_products(income: Option<IncomeBracket>) -> Vec<FinancialProduct> {
    banking_templates(BankingTier::for_income(income))
        .iter()
        .map(ProductTemplate::to_product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::domain::ProductType;
    use std::collections::HashSet;

    #[test]
    fn every_shelf_is_non_empty_and_well_formed() {
        let shelves = CreditScoreBracket::ordered()
            .into_iter()
            .map(credit_card_templates)
            .chain(
                [BankingTier::Premium, BankingTier::HighYield, BankingTier::Entry]
                    .into_iter()
                    .map(banking_templates),
            );

        for shelf in shelves {
            assert!(!shelf.is_empty());
            let ids: HashSet<_> = shelf.iter().map(|template| template.id).collect();
            assert_eq!(ids.len(), shelf.len(), "ids unique within a shelf");
            for template in &shelf {
                assert!(!template.features.is_empty(), "{} has features", template.id);
                assert!(template.match_score.value() <= 100);
            }
        }
    }

    #[test]
    fn shelves_are_authored_in_strictly_descending_score_order() {
        let shelves = CreditScoreBracket::ordered()
            .into_iter()
            .map(credit_card_templates)
            .chain(
                [BankingTier::Premium, BankingTier::HighYield, BankingTier::Entry]
                    .into_iter()
                    .map(banking_templates),
            );

        for shelf in shelves {
            assert!(shelf
                .windows(2)
                .all(|pair| pair[0].match_score > pair[1].match_score));
        }
    }

    #[test]
    fn banking_shelves_only_contain_checking_products() {
        for income in IncomeBracket::ordered().map(Some).into_iter().chain([None]) {
            assert!(select_banking_products(income)
                .iter()
                .all(|product| product.product_type == ProductType::Checking));
        }
    }

    #[test]
    fn very_good_and_excellent_share_the_premium_card_shelf() {
        assert_eq!(
            select_credit_cards(CreditScoreBracket::VeryGood),
            select_credit_cards(CreditScoreBracket::Excellent)
        );
    }
}
