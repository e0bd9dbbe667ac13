//! Final decision generator.
//!
//! A third independently weighted model. Points from four factors sum to an
//! approval score; the categorical decision falls out of fixed thresholds.
//! Approved outcomes get terms recomputed at a fixed 60-month horizon,
//! deliberately not the vehicle-specific default the standalone term
//! calculator uses.

use super::args::{ArgumentError, ToolArguments};
use super::domain::{DecisionCategory, VehicleType};
use super::reference;
use super::terms::{compute_terms, LoanTerms};
use serde::Serialize;

/// Term horizon used when pricing an approved decision.
const DECISION_TERM_MONTHS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionInput {
    pub application_id: String,
    pub customer_id: String,
    pub loan_amount: f64,
    pub credit_score: i64,
    pub vehicle_type: VehicleType,
    pub annual_income: f64,
}

impl DecisionInput {
    pub fn from_args(args: &ToolArguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            application_id: args.require_str("applicationId")?,
            customer_id: args.require_str("customerId")?,
            loan_amount: args.require_f64("loanAmount")?,
            credit_score: args.require_i64("creditScore")?,
            vehicle_type: VehicleType::parse_optional(args.optional_str("vehicleType")),
            annual_income: args.optional_f64("annualIncome")?.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDecision {
    pub application_id: String,
    pub customer_id: String,
    pub decision: DecisionCategory,
    pub approval_score: u32,
    pub decision_factors: Vec<String>,
    pub loan_terms: Option<LoanTerms>,
    pub conditions: Vec<String>,
    pub next_steps: Vec<String>,
}

pub fn decide(input: &DecisionInput) -> LoanDecision {
    let mut decision_factors = Vec::new();
    let mut approval_score = 0;

    let credit_points = credit_points(input.credit_score);
    approval_score += credit_points;
    decision_factors.push(format!(
        "Credit score {} contributes {} points",
        input.credit_score, credit_points
    ));

    if input.annual_income > 0.0 {
        let ratio = input.loan_amount / input.annual_income;
        let ratio_points = if ratio <= 3.0 {
            25
        } else if ratio <= 4.0 {
            15
        } else {
            0
        };
        approval_score += ratio_points;
        decision_factors.push(format!(
            "Loan-to-income ratio {ratio:.2} contributes {ratio_points} points"
        ));
    } else {
        decision_factors
            .push("Annual income not provided; loan-to-income factor skipped".to_string());
    }

    let amount_points = amount_points(input.loan_amount);
    approval_score += amount_points;
    decision_factors.push(format!(
        "Loan amount {:.2} contributes {} points",
        input.loan_amount, amount_points
    ));

    let vehicle_bonus = reference::decision_vehicle_bonus(input.vehicle_type);
    approval_score += vehicle_bonus;
    decision_factors.push(format!(
        "Vehicle type '{}' contributes {} points",
        input.vehicle_type.label(),
        vehicle_bonus
    ));

    let decision = if approval_score >= 80 {
        DecisionCategory::Approved
    } else if approval_score >= 60 {
        DecisionCategory::ApprovedWithConditions
    } else if approval_score >= 40 {
        DecisionCategory::PendingReview
    } else {
        DecisionCategory::Rejected
    };

    let loan_terms = decision.offers_financing().then(|| {
        compute_terms(
            input.loan_amount,
            input.credit_score,
            input.vehicle_type,
            DECISION_TERM_MONTHS,
        )
    });

    let (conditions, next_steps) = playbook(decision);

    LoanDecision {
        application_id: input.application_id.clone(),
        customer_id: input.customer_id.clone(),
        decision,
        approval_score,
        decision_factors,
        loan_terms,
        conditions,
        next_steps,
    }
}

fn credit_points(credit_score: i64) -> u32 {
    if credit_score >= 750 {
        40
    } else if credit_score >= 700 {
        30
    } else if credit_score >= 650 {
        20
    } else if credit_score >= 600 {
        10
    } else {
        0
    }
}

fn amount_points(loan_amount: f64) -> u32 {
    if loan_amount <= 30_000.0 {
        20
    } else if loan_amount <= 60_000.0 {
        15
    } else if loan_amount <= 100_000.0 {
        5
    } else {
        0
    }
}

/// Category-specific literals consumed verbatim by downstream systems.
fn playbook(decision: DecisionCategory) -> (Vec<String>, Vec<String>) {
    match decision {
        DecisionCategory::Approved => (
            Vec::new(),
            vec![
                "Loan documents will be prepared for signature".to_string(),
                "Provide proof of insurance before funding".to_string(),
            ],
        ),
        DecisionCategory::ApprovedWithConditions => (
            vec![
                "Income verification required".to_string(),
                "Vehicle appraisal required".to_string(),
                "Insurance coverage confirmation needed".to_string(),
            ],
            vec![
                "Submit required documentation".to_string(),
                "Schedule vehicle inspection".to_string(),
                "Finalize insurance coverage".to_string(),
            ],
        ),
        DecisionCategory::PendingReview => (
            Vec::new(),
            vec![
                "Application forwarded to human underwriter".to_string(),
                "Additional documentation may be requested".to_string(),
                "Decision expected within 2-3 business days".to_string(),
            ],
        ),
        DecisionCategory::Rejected => (
            Vec::new(),
            vec![
                "Consider reapplying after improving credit score".to_string(),
                "Explore co-signer options".to_string(),
                "Consider smaller loan amount".to_string(),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(
        loan_amount: f64,
        credit_score: i64,
        vehicle: VehicleType,
        annual_income: f64,
    ) -> DecisionInput {
        DecisionInput {
            application_id: "APP-100".to_string(),
            customer_id: "CUST-100".to_string(),
            loan_amount,
            credit_score,
            vehicle_type: vehicle,
            annual_income,
        }
    }

    #[test]
    fn strong_electric_application_is_approved_with_terms() {
        let decision = decide(&input(20000.0, 760, VehicleType::ElectricVehicle, 80000.0));
        // 40 credit + 25 ratio (0.25) + 20 amount + 10 vehicle = 95
        assert_eq!(decision.approval_score, 95);
        assert_eq!(decision.decision, DecisionCategory::Approved);
        assert!(decision
            .decision_factors
            .iter()
            .any(|factor| factor.contains("0.25")));
        assert!(decision.conditions.is_empty());

        let terms = decision.loan_terms.expect("approved decisions carry terms");
        assert_eq!(terms.loan_term_months, 60);
        assert_eq!(terms.interest_rate_percent, 3.25);
        assert_eq!(terms.monthly_payment, 361.60);
    }

    #[test]
    fn decision_term_ignores_the_vehicle_default() {
        // Electric vehicles default to 72 months in the term calculator,
        // but decision pricing always uses 60.
        let decision = decide(&input(20000.0, 760, VehicleType::ElectricVehicle, 80000.0));
        assert_eq!(
            decision.loan_terms.expect("terms present").loan_term_months,
            60
        );
    }

    #[test]
    fn conditional_approval_lists_the_exact_literals() {
        // 30 credit + 15 ratio (3.5) + 15 amount + 5 vehicle = 65
        let decision = decide(&input(45000.0, 710, VehicleType::Standard, 12857.0));
        assert_eq!(decision.decision, DecisionCategory::ApprovedWithConditions);
        assert_eq!(
            decision.conditions,
            vec![
                "Income verification required",
                "Vehicle appraisal required",
                "Insurance coverage confirmation needed",
            ]
        );
        assert_eq!(
            decision.next_steps,
            vec![
                "Submit required documentation",
                "Schedule vehicle inspection",
                "Finalize insurance coverage",
            ]
        );
        assert!(decision.loan_terms.is_some());
    }

    #[test]
    fn pending_review_carries_no_terms() {
        // 20 credit + 0 ratio (skipped) + 15 amount + 5 vehicle = 40
        let decision = decide(&input(45000.0, 660, VehicleType::Standard, 0.0));
        assert_eq!(decision.decision, DecisionCategory::PendingReview);
        assert!(decision.loan_terms.is_none());
        assert!(decision
            .decision_factors
            .iter()
            .any(|factor| factor.contains("loan-to-income factor skipped")));
        assert_eq!(
            decision.next_steps,
            vec![
                "Application forwarded to human underwriter",
                "Additional documentation may be requested",
                "Decision expected within 2-3 business days",
            ]
        );
    }

    #[test]
    fn weak_application_is_rejected_with_recovery_steps() {
        // 0 credit + 0 ratio (5.0) + 5 amount + 5 vehicle = 10
        let decision = decide(&input(90000.0, 580, VehicleType::Standard, 18000.0));
        assert_eq!(decision.decision, DecisionCategory::Rejected);
        assert_eq!(decision.approval_score, 10);
        assert!(decision.loan_terms.is_none());
        assert_eq!(
            decision.next_steps,
            vec![
                "Consider reapplying after improving credit score",
                "Explore co-signer options",
                "Consider smaller loan amount",
            ]
        );
    }

    #[test]
    fn annual_income_defaults_to_zero_when_absent() {
        let args = ToolArguments::from_value(json!({
            "applicationId": "APP-2",
            "customerId": "CUST-2",
            "loanAmount": 25000,
            "creditScore": 705,
        }))
        .expect("object args");
        let input = DecisionInput::from_args(&args).expect("parses");
        assert_eq!(input.annual_income, 0.0);
        assert_eq!(input.vehicle_type, VehicleType::Standard);
        // 30 credit + 20 amount + 5 vehicle = 55 -> pending review
        assert_eq!(decide(&input).decision, DecisionCategory::PendingReview);
    }
}
