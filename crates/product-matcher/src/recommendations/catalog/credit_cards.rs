use super::super::domain::{MatchScore, ProductTemplate, ProductType};

pub(super) fn poor_credit_cards() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "cc-discover-secured",
            name: "Discover it® Secured",
            provider: "Discover",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 2% cash back (gas & dining)",
                "🔹 1% on everything else",
                "🔹 Matches all cashback Year 1",
                "🔹 Can upgrade to unsecured",
            ],
            match_score: MatchScore::new(95),
            description: "🔴 Best for poor/no credit - Build credit while earning rewards",
        },
        ProductTemplate {
            id: "cc-capital-secured",
            name: "Capital One Platinum Secured",
            provider: "Capital One",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 Starts with $49–$200 refundable deposit",
                "🔹 No foreign transaction fees",
                "🔹 Credit line increase review in 6 months",
            ],
            match_score: MatchScore::new(90),
            description: "🔴 Flexible deposit options for building credit",
        },
        ProductTemplate {
            id: "cc-opensky",
            name: "OpenSky® Secured Visa",
            provider: "OpenSky",
            product_type: ProductType::CreditCard,
            apr: "$35 Annual Fee",
            features: vec![
                "🔹 No credit check to apply",
                "🔹 Reports to all 3 bureaus",
                "🔹 Build credit with on-time payments",
            ],
            match_score: MatchScore::new(85),
            description: "🔴 No credit check required - Perfect for rebuilding",
        },
        ProductTemplate {
            id: "cc-chime",
            name: "Chime Credit Builder Visa®",
            provider: "Chime",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 No interest, no annual fee",
                "🔹 Can't overspend",
                "🔹 Instant reporting + auto-pay tools",
            ],
            match_score: MatchScore::new(80),
            description: "🔴 Unique no-interest credit building option",
        },
    ]
}

pub(super) fn fair_credit_cards() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "cc-quicksilver",
            name: "Capital One QuicksilverOne",
            provider: "Capital One",
            product_type: ProductType::CreditCard,
            apr: "$39 Annual Fee",
            features: vec![
                "🔹 1.5% cash back on everything",
                "🔹 Limit increases with good history",
                "🔹 No foreign transaction fees",
            ],
            match_score: MatchScore::new(92),
            description: "🟠 Simple cash back for rebuilding credit",
        },
        ProductTemplate {
            id: "cc-petal",
            name: "Petal® 1 Visa",
            provider: "Petal",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 Based on income, not just credit score",
                "🔹 Up to 10% back at select merchants",
                "🔹 No late, annual, or foreign fees",
            ],
            match_score: MatchScore::new(88),
            description: "🟠 Innovative underwriting for fair credit",
        },
        ProductTemplate {
            id: "cc-mission-lane",
            name: "Mission Lane® Visa",
            provider: "Mission Lane",
            product_type: ProductType::CreditCard,
            apr: "Varies ($0–$59)",
            features: vec![
                "🔹 Easy to get with fair credit",
                "🔹 Reports to all 3 bureaus",
                "🔹 Limit increases with good payment history",
            ],
            match_score: MatchScore::new(85),
            description: "🟠 Focused on credit rebuilding",
        },
    ]
}

pub(super) fn good_credit_cards() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "cc-freedom-unlimited",
            name: "Chase Freedom Unlimited®",
            provider: "Chase",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 3% back on dining/drugstores",
                "🔹 1.5% everywhere else",
                "🔹 $200 bonus",
                "🔹 0% APR 15 months",
                "🔹 Can be paired with Sapphire for travel boosts",
            ],
            match_score: MatchScore::new(95),
            description: "🟡 Excellent all-around cash back card",
        },
        ProductTemplate {
            id: "cc-double-cash",
            name: "Citi® Double Cash",
            provider: "Citi",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 2% total cash back (1% buy + 1% pay)",
                "🔹 Can convert to ThankYou® points",
                "🔹 18-month balance transfer offer",
            ],
            match_score: MatchScore::new(93),
            description: "🟡 Simple 2% cash back on everything",
        },
        ProductTemplate {
            id: "cc-wells-active",
            name: "Wells Fargo Active Cash®",
            provider: "Wells Fargo",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 2% flat cash back",
                "🔹 $200 welcome bonus",
                "🔹 Cell phone protection",
                "🔹 15 months 0% APR",
            ],
            match_score: MatchScore::new(90),
            description: "🟡 Flat 2% rewards with welcome bonus",
        },
        ProductTemplate {
            id: "cc-discover-cashback",
            name: "Discover it® Cash Back",
            provider: "Discover",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 5% back on rotating categories (e.g., groceries, gas)",
                "🔹 1% everywhere else",
                "🔹 Cashback match in Year 1",
                "🔹 Free FICO score & ID monitoring",
            ],
            match_score: MatchScore::new(87),
            description: "🟡 Rotating categories with first-year match",
        },
    ]
}

/// Shared by the very-good and excellent brackets.
pub(super) fn premium_credit_cards() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "cc-sapphire-preferred",
            name: "Chase Sapphire Preferred®",
            provider: "Chase",
            product_type: ProductType::CreditCard,
            apr: "$95 Annual Fee",
            features: vec![
                "🔹 2x on dining & travel",
                "🔹 5x on Chase travel",
                "🔹 60K points (~$750 travel)",
                "🔹 Travel insurance & point transfer",
            ],
            match_score: MatchScore::new(95),
            description: "🟢 Premium travel rewards with excellent benefits",
        },
        ProductTemplate {
            id: "cc-venture-rewards",
            name: "Capital One Venture Rewards",
            provider: "Capital One",
            product_type: ProductType::CreditCard,
            apr: "$95 Annual Fee",
            features: vec![
                "🔹 2x miles on all purchases",
                "🔹 75K miles bonus",
                "🔹 Can \"erase\" travel purchases",
                "🔹 No foreign transaction fees",
            ],
            match_score: MatchScore::new(93),
            description: "🟢 Simple travel rewards with huge bonus",
        },
        ProductTemplate {
            id: "cc-amex-gold",
            name: "Amex Gold Card",
            provider: "American Express",
            product_type: ProductType::CreditCard,
            apr: "$250 Annual Fee",
            features: vec![
                "🔹 4x points on dining/groceries",
                "🔹 $120 dining credit",
                "🔹 $120 Uber Cash",
                "🔹 Airport & concierge perks",
            ],
            match_score: MatchScore::new(90),
            description: "🟢 Premium dining and grocery rewards",
        },
        ProductTemplate {
            id: "cc-custom-cash",
            name: "Citi® Custom Cash℠",
            provider: "Citi",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 5% on your top category each month (e.g., gas, dining)",
                "🔹 1% on others",
                "🔹 No rotating or activation needed",
            ],
            match_score: MatchScore::new(88),
            description: "🟢 Automatic 5% in your top category",
        },
    ]
}

/// Low-barrier mix for profiles that did not report a credit bracket.
pub(super) fn fallback_credit_cards() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "cc-freedom-unlimited",
            name: "Chase Freedom Unlimited®",
            provider: "Chase",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 3% back on dining/drugstores",
                "🔹 1.5% everywhere else",
                "🔹 $200 bonus",
            ],
            match_score: MatchScore::new(85),
            description: "🟡 Good starter card with solid rewards",
        },
        ProductTemplate {
            id: "cc-discover-secured",
            name: "Discover it® Secured",
            provider: "Discover",
            product_type: ProductType::CreditCard,
            apr: "$0 Annual Fee",
            features: vec![
                "🔹 2% cash back (gas & dining)",
                "🔹 1% on everything else",
                "🔹 Matches all cashback Year 1",
            ],
            match_score: MatchScore::new(80),
            description: "🔴 Safe option for building credit",
        },
    ]
}
