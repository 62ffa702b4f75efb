use super::common::*;
use crate::recommendations::catalog::{select_banking_products, select_credit_cards, BankingTier};
use crate::recommendations::domain::{CreditScoreBracket, IncomeBracket, ProductType};

#[test]
fn credit_cards_resolve_for_known_unknown_and_empty_brackets() {
    let raw_brackets = [
        "poor",
        "fair",
        "good",
        "very-good",
        "excellent",
        "unsure",
        "",
        "platinum-plus",
    ];

    for raw in raw_brackets {
        let cards = select_credit_cards(CreditScoreBracket::parse(raw));
        assert!(!cards.is_empty(), "{raw:?} resolves to a shelf");
        for card in &cards {
            assert_eq!(card.product_type, ProductType::CreditCard);
            assert!(card.match_score.value() <= 100);
            assert!(!card.features.is_empty());
        }
    }
}

#[test]
fn poor_credit_leads_with_the_secured_discover_card() {
    let cards = select_credit_cards(CreditScoreBracket::Poor);

    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].id, "cc-discover-secured");
    assert_eq!(cards[0].match_score.value(), 95);
    assert_eq!(
        ids(&cards),
        vec!["cc-discover-secured", "cc-capital-secured", "cc-opensky", "cc-chime"]
    );
}

#[test]
fn shelf_sizes_match_each_bracket() {
    assert_eq!(select_credit_cards(CreditScoreBracket::Fair).len(), 3);
    assert_eq!(select_credit_cards(CreditScoreBracket::Good).len(), 4);
    assert_eq!(select_credit_cards(CreditScoreBracket::VeryGood).len(), 4);
    assert_eq!(select_credit_cards(CreditScoreBracket::Excellent).len(), 4);
}

#[test]
fn unknown_credit_falls_back_to_two_low_barrier_cards() {
    let unsure = select_credit_cards(CreditScoreBracket::Unsure);
    let garbage = select_credit_cards(CreditScoreBracket::parse("???"));

    assert_eq!(unsure, garbage);
    assert_eq!(ids(&unsure), vec!["cc-freedom-unlimited", "cc-discover-secured"]);
    assert_eq!(scores(&unsure), vec![85, 80]);
}

#[test]
fn top_income_brackets_get_premium_banking() {
    let accounts = select_banking_products(Some(IncomeBracket::Over150k));

    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[0].id, "chase-private");
    assert_eq!(accounts[0].match_score.value(), 95);
    assert_eq!(
        accounts,
        select_banking_products(Some(IncomeBracket::From100kTo150k))
    );
}

#[test]
fn income_collapses_into_three_tiers() {
    let expected = [
        (Some(IncomeBracket::Over150k), BankingTier::Premium, 3),
        (Some(IncomeBracket::From100kTo150k), BankingTier::Premium, 3),
        (Some(IncomeBracket::From75kTo100k), BankingTier::HighYield, 3),
        (Some(IncomeBracket::From50kTo75k), BankingTier::HighYield, 3),
        (Some(IncomeBracket::From25kTo50k), BankingTier::Entry, 4),
        (Some(IncomeBracket::Under25k), BankingTier::Entry, 4),
        (None, BankingTier::Entry, 4),
    ];

    for (income, tier, count) in expected {
        assert_eq!(BankingTier::for_income(income), tier, "{income:?}");
        assert_eq!(select_banking_products(income).len(), count, "{income:?}");
    }
}

#[test]
fn mid_tier_is_the_high_yield_savings_shelf() {
    let accounts = select_banking_products(Some(IncomeBracket::From50kTo75k));
    assert_eq!(
        ids(&accounts),
        vec!["axos-savings", "bread-savings", "newtek-savings"]
    );
}

#[test]
fn entry_tier_lists_second_chance_accounts() {
    let accounts = select_banking_products(IncomeBracket::parse("25k-50k"));
    assert_eq!(
        ids(&accounts),
        vec!["chime-checking", "varo-savings", "current-debit", "wells-clear"]
    );
    assert_eq!(accounts, select_banking_products(IncomeBracket::parse("")));
}
