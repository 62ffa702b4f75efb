use super::super::domain::{MatchScore, ProductTemplate, ProductType};

pub(super) fn premium_accounts() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "chase-private",
            name: "Chase Private Client Checking",
            provider: "Chase",
            product_type: ProductType::Checking,
            apr: "0.01% APY",
            features: vec![
                "🔹 Dedicated advisor",
                "🔹 ATM reimbursement",
                "🔹 Lending perks",
                "🔹 Fee waived with ≥$150K",
            ],
            match_score: MatchScore::new(95),
            description: "🟢 Premium banking for high-net-worth clients",
        },
        ProductTemplate {
            id: "hsbc-premier",
            name: "HSBC Premier Checking",
            provider: "HSBC",
            product_type: ProductType::Checking,
            apr: "0% APY",
            features: vec![
                "🔹 Global banking",
                "🔹 Fee waivers",
                "🔹 Mortgage discounts",
                "🔹 Fee waived with ≥$75K",
            ],
            match_score: MatchScore::new(90),
            description: "🟢 International banking with premium perks",
        },
        ProductTemplate {
            id: "amex-savings",
            name: "American Express High-Yield Savings",
            provider: "American Express",
            product_type: ProductType::Checking,
            apr: "4.25% APY",
            features: vec![
                "🔹 No minimums",
                "🔹 $0 fees",
                "🔹 Trusted brand",
                "🔹 Easy access",
            ],
            match_score: MatchScore::new(88),
            description: "🟢 High-yield savings with premium brand trust",
        },
    ]
}

pub(super) fn high_yield_accounts() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "axos-savings",
            name: "Axos Bank High-Yield Savings",
            provider: "Axos Bank",
            product_type: ProductType::Checking,
            apr: "4.66% APY",
            features: vec![
                "🔹 No minimums",
                "🔹 Mobile deposits",
                "🔹 FDIC-insured",
                "🔹 No fees",
            ],
            match_score: MatchScore::new(95),
            description: "🟠 Top-tier savings rates with no requirements",
        },
        ProductTemplate {
            id: "bread-savings",
            name: "Bread Savings High-Yield Account",
            provider: "Bread Savings",
            product_type: ProductType::Checking,
            apr: "4.30% APY",
            features: vec![
                "🔹 Competitive rates",
                "🔹 No monthly fees",
                "🔹 $100 min deposit",
                "🔹 FDIC-insured",
            ],
            match_score: MatchScore::new(90),
            description: "🟠 Solid high-yield option with low minimums",
        },
        ProductTemplate {
            id: "newtek-savings",
            name: "Newtek Bank High-Yield Savings",
            provider: "Newtek Bank",
            product_type: ProductType::Checking,
            apr: "4.35% APY",
            features: vec![
                "🔹 FDIC-insured",
                "🔹 Strong digital tools",
                "🔹 No fees",
                "🔹 No minimums",
            ],
            match_score: MatchScore::new(88),
            description: "🟠 Great technology with competitive rates",
        },
    ]
}

/// No-credit-check and second-chance accounts.
pub(super) fn entry_accounts() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "chime-checking",
            name: "Chime Checking + Savings",
            provider: "Chime",
            product_type: ProductType::Checking,
            apr: "4.00% APY",
            features: vec![
                "🔹 No credit check",
                "🔹 Early direct deposit",
                "🔹 $0 overdraft (SpotMe up to $200)",
                "🔹 Fee-free ATMs",
            ],
            match_score: MatchScore::new(95),
            description: "🔴 Perfect for building financial foundation",
        },
        ProductTemplate {
            id: "varo-savings",
            name: "Varo Bank High-Yield Savings",
            provider: "Varo Bank",
            product_type: ProductType::Checking,
            apr: "5.00% APY",
            features: vec![
                "🔹 No ChexSystems",
                "🔹 Early-pay features",
                "🔹 $0 monthly fees",
                "🔹 No minimum balance",
            ],
            match_score: MatchScore::new(92),
            description: "🔴 Highest APY with no requirements",
        },
        ProductTemplate {
            id: "current-debit",
            name: "Current Safe Debit Account",
            provider: "Current",
            product_type: ProductType::Checking,
            apr: "4.00% APY",
            features: vec![
                "🔹 Earned wage access",
                "🔹 Built-in debit card",
                "🔹 Credit-builder card",
                "🔹 No credit check",
            ],
            match_score: MatchScore::new(88),
            description: "🔴 Modern banking with wage access",
        },
        ProductTemplate {
            id: "wells-clear",
            name: "Wells Fargo Clear Access Banking",
            provider: "Wells Fargo",
            product_type: ProductType::Checking,
            apr: "0% APY",
            features: vec![
                "🔹 No overdraft fees",
                "🔹 No ChexSystems",
                "🔹 FDIC-insured",
                "🔹 $0 monthly fees",
            ],
            match_score: MatchScore::new(85),
            description: "🔴 Traditional bank with second-chance banking",
        },
    ]
}
