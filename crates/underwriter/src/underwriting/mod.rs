//! The underwriting pipeline.
//!
//! Five independently invocable tools plus read-only vehicle reference
//! data. Three of the tools are distinct weighted scoring models over
//! overlapping inputs; they are intentionally separate contracts and must
//! not be unified behind one threshold table.

pub mod args;
pub mod assessment;
pub mod batch;
pub mod decision;
pub mod domain;
pub mod reference;
pub mod risk;
pub mod router;
pub mod terms;
pub mod validation;

pub use args::{ArgumentError, ToolArguments};
pub use assessment::{assess, AssessmentInput, ComprehensiveAssessment};
pub use batch::{underwrite_batch, BatchImportError, BatchSummary};
pub use decision::{decide, DecisionInput, LoanDecision};
pub use domain::{DecisionCategory, RiskLevel, VehicleType};
pub use reference::{vehicle_profile, VehicleProfile};
pub use risk::{risk_profile, RiskProfile, RiskProfileInput};
pub use router::underwriting_router;
pub use terms::{loan_terms, LoanTerms, TermsInput};
pub use validation::{validate_application, ValidationReport};

use serde::Serialize;

/// Stateless facade over the pipeline components.
///
/// Each method is a pure function of its argument map; the facade exists so
/// the HTTP router, CLI, and batch runner share one entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnderwritingService;

impl UnderwritingService {
    pub fn new() -> Self {
        Self
    }

    /// Validation never fails; problems are reported inside the result.
    pub fn validate(&self, args: &ToolArguments) -> ValidationReport {
        validation::validate_application(args)
    }

    pub fn risk_profile(&self, args: &ToolArguments) -> Result<RiskProfile, ArgumentError> {
        Ok(risk::risk_profile(&RiskProfileInput::from_args(args)?))
    }

    pub fn assessment(
        &self,
        args: &ToolArguments,
    ) -> Result<ComprehensiveAssessment, ArgumentError> {
        Ok(assessment::assess(&AssessmentInput::from_args(args)?))
    }

    pub fn loan_terms(&self, args: &ToolArguments) -> Result<LoanTerms, ArgumentError> {
        Ok(terms::loan_terms(&TermsInput::from_args(args)?))
    }

    pub fn decision(&self, args: &ToolArguments) -> Result<LoanDecision, ArgumentError> {
        Ok(decision::decide(&DecisionInput::from_args(args)?))
    }

    /// Total lookup; unrecognized strings resolve to the standard profile.
    pub fn vehicle_profile(&self, raw_vehicle_type: &str) -> VehicleProfile {
        reference::vehicle_profile(VehicleType::parse(raw_vehicle_type))
    }

    /// Run the whole pipeline over one argument map. Used by the CLI demo;
    /// the individual tools stay independently callable.
    pub fn underwrite(&self, args: &ToolArguments) -> Result<UnderwritingReport, ArgumentError> {
        let validation = validation::validate_application(args);
        let decision_input = DecisionInput::from_args(args)?;

        let risk_profile = risk::risk_profile(&RiskProfileInput {
            customer_id: decision_input.customer_id.clone(),
            loan_amount: decision_input.loan_amount,
            credit_score: decision_input.credit_score,
        });
        let assessment = assessment::assess(&AssessmentInput {
            application_id: decision_input.application_id.clone(),
            customer_id: decision_input.customer_id.clone(),
            loan_amount: decision_input.loan_amount,
            credit_score: decision_input.credit_score,
            vehicle_type: decision_input.vehicle_type,
        });
        let loan_terms = terms::loan_terms(&TermsInput {
            loan_amount: decision_input.loan_amount,
            credit_score: decision_input.credit_score,
            vehicle_type: decision_input.vehicle_type,
        });
        let decision = decision::decide(&decision_input);

        Ok(UnderwritingReport {
            validation,
            risk_profile,
            assessment,
            loan_terms,
            decision,
        })
    }
}

/// Composite output of the full validate → score → decide run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderwritingReport {
    pub validation: ValidationReport,
    pub risk_profile: RiskProfile,
    pub assessment: ComprehensiveAssessment,
    pub loan_terms: LoanTerms,
    pub decision: LoanDecision,
}
