use super::common::*;
use crate::recommendations::domain::{CreditScoreBracket, IncomeBracket, ProductType};
use crate::recommendations::scoring::{score_auto_loan, score_mortgage, score_personal_loan};

#[test]
fn affluent_excellent_profile_scores_high_across_loans() {
    let profile = profile(Some(IncomeBracket::Over150k), CreditScoreBracket::Excellent);

    assert_eq!(score_mortgage(&profile).match_score.value(), 88);
    assert_eq!(score_auto_loan(&profile).match_score.value(), 92);
    assert_eq!(score_personal_loan(&profile).match_score.value(), 87);
}

#[test]
fn modest_fair_profile_gets_baseline_loan_scores() {
    let profile = profile(Some(IncomeBracket::From25kTo50k), CreditScoreBracket::Fair);

    assert_eq!(score_mortgage(&profile).match_score.value(), 65);
    assert_eq!(score_auto_loan(&profile).match_score.value(), 70);
    assert_eq!(score_personal_loan(&profile).match_score.value(), 65);
}

#[test]
fn mortgage_bonus_tracks_the_premium_income_brackets_only() {
    for income in income_options() {
        let expected = match income {
            Some(IncomeBracket::Over150k) | Some(IncomeBracket::From100kTo150k) => 88,
            _ => 65,
        };
        let mortgage = score_mortgage(&profile(income, CreditScoreBracket::Good));
        assert_eq!(mortgage.match_score.value(), expected, "{income:?}");
    }
}

#[test]
fn auto_loan_chain_flattens_everything_below_very_good() {
    let expected = [
        (CreditScoreBracket::Excellent, 92),
        (CreditScoreBracket::VeryGood, 85),
        (CreditScoreBracket::Good, 70),
        (CreditScoreBracket::Fair, 70),
        (CreditScoreBracket::Poor, 70),
        (CreditScoreBracket::Unsure, 70),
    ];

    for (credit_score, score) in expected {
        let loan = score_auto_loan(&profile(None, credit_score));
        assert_eq!(loan.match_score.value(), score, "{credit_score:?}");
    }
}

#[test]
fn personal_loan_rewards_the_top_two_credit_brackets() {
    for credit_score in CreditScoreBracket::ordered() {
        let expected = match credit_score {
            CreditScoreBracket::Excellent | CreditScoreBracket::VeryGood => 87,
            _ => 65,
        };
        let loan = score_personal_loan(&profile(None, credit_score));
        assert_eq!(loan.match_score.value(), expected, "{credit_score:?}");
    }
}

#[test]
fn scored_templates_are_fixed_apart_from_the_score() {
    let low = score_auto_loan(&empty_profile());
    let high = score_auto_loan(&profile(None, CreditScoreBracket::Excellent));

    assert_eq!(low.id, "auto-1");
    assert_eq!(low.product_type, ProductType::AutoLoan);
    assert_eq!(low.name, high.name);
    assert_eq!(low.apr, high.apr);
    assert_eq!(low.features, high.features);
    assert_ne!(low.match_score, high.match_score);
}
