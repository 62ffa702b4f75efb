use super::domain::{
    CreditScoreBracket, FinancialProduct, IncomeBracket, MatchScore, ProductTemplate, ProductType,
    UserProfile,
};

pub(crate) fn mortgage_template() -> ProductTemplate {
    ProductTemplate {
        id: "mortgage-1",
        name: "30-Year Fixed Mortgage",
        provider: "Wells Fargo",
        product_type: ProductType::Mortgage,
        apr: "6.89%",
        features: vec![
            "Fixed rate for 30 years",
            "No PMI with 20% down",
            "First-time buyer programs",
        ],
        match_score: MatchScore::new(65),
        description: "Stable monthly payments with competitive rates",
    }
}

pub(crate) fn auto_loan_template() -> ProductTemplate {
    ProductTemplate {
        id: "auto-1",
        name: "New Car Loan",
        provider: "Bank of America",
        product_type: ProductType::AutoLoan,
        apr: "5.99% - 8.99%",
        features: vec![
            "Up to 72 months",
            "No prepayment penalty",
            "Online pre-approval",
        ],
        match_score: MatchScore::new(70),
        description: "Competitive rates for new vehicle purchases",
    }
}

pub(crate) fn personal_loan_template() -> ProductTemplate {
    ProductTemplate {
        id: "personal-1",
        name: "Personal Loan",
        provider: "SoFi",
        product_type: ProductType::PersonalLoan,
        apr: "7.99% - 19.99%",
        features: vec![
            "No fees",
            "Unemployment protection",
            "Rate discount with autopay",
        ],
        match_score: MatchScore::new(65),
        description: "Consolidate debt or fund major purchases",
    }
}

pub fn mortgage_score(profile: &UserProfile) -> MatchScore {
    match profile.income {
        Some(IncomeBracket::Over150k) | Some(IncomeBracket::From100kTo150k) => MatchScore::new(88),
        _ => MatchScore::new(65),
    }
}

/// Only the top two credit brackets earn a bonus; every other bracket scores 70.
pub fn auto_loan_score(profile: &UserProfile) -> MatchScore {
    let credit_score = profile.credit_bracket();
    if credit_score == CreditScoreBracket::Excellent {
        MatchScore::new(92)
    } else if credit_score == CreditScoreBracket::VeryGood {
        MatchScore::new(85)
    } else {
        MatchScore::new(70)
    }
}

pub fn personal_loan_score(profile: &UserProfile) -> MatchScore {
    match profile.credit_bracket() {
        CreditScoreBracket::Excellent | CreditScoreBracket::VeryGood => MatchScore::new(87),
        _ => MatchScore::new(65),
    }
}

pub fn score_mortgage(profile: &UserProfile) -> FinancialProduct {
    mortgage_template().to_product_with_score(mortgage_score(profile))
}

pub fn score_auto_loan(profile: &UserProfile) -> FinancialProduct {
    auto_loan_template().to_product_with_score(auto_loan_score(profile))
}

pub fn score_personal_loan(profile: &UserProfile) -> FinancialProduct {
    personal_loan_template().to_product_with_score(personal_loan_score(profile))
}
