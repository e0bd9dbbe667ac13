//! Standalone risk scorer.
//!
//! Tiered points from credit score and loan amount sum to a 0-35 risk
//! score. The `creditRisk`/`amountRisk` labels are informational only and
//! do not feed the numeric score.

use super::args::{ArgumentError, ToolArguments};
use super::domain::RiskLevel;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskProfileInput {
    pub customer_id: String,
    pub loan_amount: f64,
    pub credit_score: i64,
}

impl RiskProfileInput {
    pub fn from_args(args: &ToolArguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            customer_id: args.require_str("customerId")?,
            loan_amount: args.require_f64("loanAmount")?,
            credit_score: args.require_i64("creditScore")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub customer_id: String,
    pub risk_score: u32,
    pub overall_risk_level: RiskLevel,
    pub credit_risk: RiskLevel,
    pub amount_risk: RiskLevel,
    pub probability_of_default: f64,
    pub recommended_interest_rate: f64,
    pub positive_factors: Vec<String>,
    pub negative_factors: Vec<String>,
    pub mitigations: Vec<String>,
}

pub fn risk_profile(input: &RiskProfileInput) -> RiskProfile {
    let credit_points = credit_points(input.credit_score);
    let amount_points = amount_points(input.loan_amount);
    let risk_score = credit_points + amount_points;

    let overall_risk_level = if risk_score >= 30 {
        RiskLevel::Low
    } else if risk_score >= 20 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let (probability_of_default, recommended_interest_rate) = match overall_risk_level {
        RiskLevel::Low => (0.02, 0.035),
        RiskLevel::Medium => (0.08, 0.055),
        RiskLevel::High => (0.15, 0.085),
    };

    let credit_risk = if input.credit_score >= 750 {
        RiskLevel::Low
    } else if input.credit_score >= 650 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let amount_risk = if input.loan_amount <= 50_000.0 {
        RiskLevel::Low
    } else if input.loan_amount <= 80_000.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let mut positive_factors = Vec::new();
    let mut negative_factors = Vec::new();
    let mut mitigations = Vec::new();

    if input.credit_score >= 750 {
        positive_factors.push(format!(
            "Excellent credit score of {} signals strong repayment history",
            input.credit_score
        ));
    }
    if input.credit_score < 650 {
        negative_factors.push(format!(
            "Credit score of {} is below the preferred range",
            input.credit_score
        ));
    }
    if input.loan_amount > 80_000.0 {
        negative_factors.push(format!(
            "Requested amount of {:.2} is in the highest exposure band",
            input.loan_amount
        ));
        mitigations
            .push("Consider a larger down payment to reduce the financed amount".to_string());
    }

    RiskProfile {
        customer_id: input.customer_id.clone(),
        risk_score,
        overall_risk_level,
        credit_risk,
        amount_risk,
        probability_of_default,
        recommended_interest_rate,
        positive_factors,
        negative_factors,
        mitigations,
    }
}

fn credit_points(credit_score: i64) -> u32 {
    if credit_score >= 750 {
        20
    } else if credit_score >= 700 {
        15
    } else if credit_score >= 650 {
        10
    } else {
        5
    }
}

fn amount_points(loan_amount: f64) -> u32 {
    if loan_amount <= 30_000.0 {
        15
    } else if loan_amount <= 60_000.0 {
        10
    } else {
        5
    }
}
