use super::common::*;
use crate::recommendations::catalog::{select_banking_products, select_credit_cards};
use crate::recommendations::domain::{CreditScoreBracket, IncomeBracket, ProductType};
use crate::recommendations::ranking::{
    category_entry, collect_candidates, describe_categories, rank, CATEGORY_TABLE,
};
use std::collections::HashSet;

#[test]
fn ranked_length_is_cards_plus_banking_plus_three() {
    for profile in all_profiles() {
        let expected = select_credit_cards(profile.credit_bracket()).len()
            + select_banking_products(profile.income).len()
            + 3;
        assert_eq!(rank(&profile).len(), expected, "{profile:?}");
    }
}

#[test]
fn ranked_ids_are_unique_and_scores_bounded() {
    for profile in all_profiles() {
        let ranked = rank(&profile);
        let unique: HashSet<_> = ranked.iter().map(|product| &product.id).collect();
        assert_eq!(unique.len(), ranked.len(), "{profile:?}");
        assert!(ranked
            .iter()
            .all(|product| product.match_score.value() <= 100 && !product.features.is_empty()));
    }
}

#[test]
fn ranked_list_is_non_increasing_and_ties_keep_concatenation_order() {
    for profile in all_profiles() {
        let candidates = collect_candidates(&profile);
        let ranked = rank(&profile);
        let position = |id: &str| {
            candidates
                .iter()
                .position(|candidate| candidate.id == id)
                .expect("ranked product comes from the candidates")
        };

        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
            if pair[0].match_score == pair[1].match_score {
                assert!(
                    position(pair[0].id.as_str()) < position(pair[1].id.as_str()),
                    "tie between {} and {} reordered",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }
}

#[test]
fn affluent_excellent_profile_ranking() {
    let ranked = rank(&profile(
        Some(IncomeBracket::Over150k),
        CreditScoreBracket::Excellent,
    ));

    assert_eq!(
        ids(&ranked),
        vec![
            "cc-sapphire-preferred",
            "chase-private",
            "cc-venture-rewards",
            "auto-1",
            "cc-amex-gold",
            "hsbc-premier",
            "cc-custom-cash",
            "amex-savings",
            "mortgage-1",
            "personal-1",
        ]
    );
}

#[test]
fn modest_fair_profile_ranking() {
    let ranked = rank(&profile(
        Some(IncomeBracket::From25kTo50k),
        CreditScoreBracket::Fair,
    ));

    assert_eq!(
        ids(&ranked),
        vec![
            "chime-checking",
            "cc-quicksilver",
            "varo-savings",
            "cc-petal",
            "current-debit",
            "cc-mission-lane",
            "wells-clear",
            "auto-1",
            "mortgage-1",
            "personal-1",
        ]
    );
    assert_eq!(scores(&ranked), vec![95, 92, 92, 88, 88, 85, 85, 70, 65, 65]);
}

#[test]
fn empty_profile_ranks_without_panicking() {
    let ranked = rank(&empty_profile());

    assert_eq!(ranked.len(), 2 + 4 + 3);
    assert_eq!(
        ids(&ranked),
        vec![
            "chime-checking",
            "varo-savings",
            "current-debit",
            "cc-freedom-unlimited",
            "wells-clear",
            "cc-discover-secured",
            "auto-1",
            "mortgage-1",
            "personal-1",
        ]
    );
}

#[test]
fn ranking_is_repeatable() {
    for profile in all_profiles() {
        assert_eq!(rank(&profile), rank(&profile));
    }
}

#[test]
fn category_table_covers_every_type_once_in_concatenation_order() {
    let order: Vec<ProductType> = CATEGORY_TABLE
        .iter()
        .map(|entry| entry.product_type)
        .collect();
    assert_eq!(
        order,
        vec![
            ProductType::CreditCard,
            ProductType::Checking,
            ProductType::Mortgage,
            ProductType::AutoLoan,
            ProductType::PersonalLoan,
        ]
    );

    for product_type in ProductType::ordered() {
        let entry = category_entry(product_type).expect("every type has an entry");
        assert_eq!(entry.product_type, product_type);
    }
}

#[test]
fn category_descriptors_name_the_driving_field() {
    let descriptors = describe_categories();
    let mortgage = descriptors
        .iter()
        .find(|descriptor| descriptor.product_type == ProductType::Mortgage)
        .expect("mortgage described");

    assert_eq!(mortgage.source, "scored");
    assert_eq!(mortgage.driven_by, "income");
    assert_eq!(descriptors[0].source, "catalog");
    assert_eq!(descriptors[0].driven_by, "credit_score");
}
