//! Comprehensive risk evaluator.
//!
//! A second, independently weighted model: three factors (credit max 40,
//! amount max 35, vehicle max 25) sum to a 0-100 score mapped to a
//! recommendation band. Confidence is a fixed per-band constant, not a
//! function of the score's distance from a boundary.

use super::args::{ArgumentError, ToolArguments};
use super::domain::VehicleType;
use super::reference;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentInput {
    pub application_id: String,
    pub customer_id: String,
    pub loan_amount: f64,
    pub credit_score: i64,
    pub vehicle_type: VehicleType,
}

impl AssessmentInput {
    pub fn from_args(args: &ToolArguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            application_id: args.require_str("applicationId")?,
            customer_id: args.require_str("customerId")?,
            loan_amount: args.require_f64("loanAmount")?,
            credit_score: args.require_i64("creditScore")?,
            vehicle_type: VehicleType::parse_optional(args.optional_str("vehicleType")),
        })
    }
}

/// Risk band for the comprehensive score, one notch finer than
/// [`super::domain::RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentBand {
    Low,
    Medium,
    MediumHigh,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    ApproveWithConditions,
    ManualReview,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentFactors {
    pub credit_score_factor: u32,
    pub loan_amount_factor: u32,
    pub vehicle_type_factor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAssessment {
    pub application_id: String,
    pub customer_id: String,
    pub overall_score: u32,
    pub risk_level: AssessmentBand,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub factors: AssessmentFactors,
}

pub fn assess(input: &AssessmentInput) -> ComprehensiveAssessment {
    let factors = AssessmentFactors {
        credit_score_factor: credit_factor(input.credit_score),
        loan_amount_factor: amount_factor(input.loan_amount),
        vehicle_type_factor: reference::assessment_vehicle_factor(input.vehicle_type),
    };

    let overall_score =
        factors.credit_score_factor + factors.loan_amount_factor + factors.vehicle_type_factor;

    let (risk_level, recommendation, confidence) = if overall_score >= 80 {
        (AssessmentBand::Low, Recommendation::Approve, 0.95)
    } else if overall_score >= 60 {
        (
            AssessmentBand::Medium,
            Recommendation::ApproveWithConditions,
            0.80,
        )
    } else if overall_score >= 40 {
        (
            AssessmentBand::MediumHigh,
            Recommendation::ManualReview,
            0.60,
        )
    } else {
        (AssessmentBand::High, Recommendation::Reject, 0.85)
    };

    ComprehensiveAssessment {
        application_id: input.application_id.clone(),
        customer_id: input.customer_id.clone(),
        overall_score,
        risk_level,
        recommendation,
        confidence,
        factors,
    }
}

fn credit_factor(credit_score: i64) -> u32 {
    if credit_score >= 750 {
        40
    } else if credit_score >= 700 {
        30
    } else if credit_score >= 650 {
        20
    } else {
        10
    }
}

fn amount_factor(loan_amount: f64) -> u32 {
    if loan_amount <= 25_000.0 {
        35
    } else if loan_amount <= 50_000.0 {
        25
    } else if loan_amount <= 75_000.0 {
        15
    } else {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(loan_amount: f64, credit_score: i64, vehicle: VehicleType) -> AssessmentInput {
        AssessmentInput {
            application_id: "APP-42".to_string(),
            customer_id: "CUST-42".to_string(),
            loan_amount,
            credit_score,
            vehicle_type: vehicle,
        }
    }

    #[test]
    fn strong_application_approves_with_fixed_confidence() {
        let result = assess(&input(20000.0, 780, VehicleType::NewCar));
        assert_eq!(result.factors.credit_score_factor, 40);
        assert_eq!(result.factors.loan_amount_factor, 35);
        assert_eq!(result.factors.vehicle_type_factor, 25);
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.risk_level, AssessmentBand::Low);
        assert_eq!(result.recommendation, Recommendation::Approve);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn confidence_is_per_band_not_monotonic() {
        // A score of 39 (reject) carries more confidence than 45
        // (manual review). That is the documented table, not a bug.
        let reject = assess(&input(90000.0, 500, VehicleType::ClassicVehicle));
        assert!(reject.overall_score < 40);
        assert_eq!(reject.recommendation, Recommendation::Reject);
        assert_eq!(reject.confidence, 0.85);

        let review = assess(&input(70000.0, 640, VehicleType::UsedCar));
        assert!((40..60).contains(&review.overall_score));
        assert_eq!(review.recommendation, Recommendation::ManualReview);
        assert_eq!(review.confidence, 0.60);
        assert!(review.confidence < reject.confidence);
    }

    #[test]
    fn unknown_vehicle_contributes_the_default_factor() {
        let args = ToolArguments::from_value(json!({
            "applicationId": "APP-7",
            "customerId": "CUST-7",
            "loanAmount": 30000,
            "creditScore": 710,
            "vehicleType": "spaceship",
        }))
        .expect("object args");
        let input = AssessmentInput::from_args(&args).expect("required fields present");
        assert_eq!(input.vehicle_type, VehicleType::Standard);
        assert_eq!(assess(&input).factors.vehicle_type_factor, 18);
    }

    #[test]
    fn vehicle_type_is_optional() {
        let args = ToolArguments::from_value(json!({
            "applicationId": "APP-8",
            "customerId": "CUST-8",
            "loanAmount": 48000,
            "creditScore": 665,
        }))
        .expect("object args");
        let result = assess(&AssessmentInput::from_args(&args).expect("parses"));
        // 20 + 25 + 18
        assert_eq!(result.overall_score, 63);
        assert_eq!(result.recommendation, Recommendation::ApproveWithConditions);
        assert_eq!(result.confidence, 0.80);
    }

    #[test]
    fn application_id_is_required() {
        let args = ToolArguments::from_value(json!({
            "customerId": "CUST-9",
            "loanAmount": 1000,
            "creditScore": 700,
        }))
        .expect("object args");
        assert_eq!(
            AssessmentInput::from_args(&args),
            Err(ArgumentError::MissingField("applicationId"))
        );
    }
}
