//! Financing term calculator.
//!
//! Final rate is the credit-tier base plus the vehicle adjustment; the term
//! comes from the per-vehicle table. Payments use the standard amortization
//! formula with an explicit zero-rate branch.

use super::args::{ArgumentError, ToolArguments};
use super::domain::{round_currency, round_rate, VehicleType};
use super::reference;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct TermsInput {
    pub loan_amount: f64,
    pub credit_score: i64,
    pub vehicle_type: VehicleType,
}

impl TermsInput {
    pub fn from_args(args: &ToolArguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            loan_amount: args.require_f64("loanAmount")?,
            credit_score: args.require_i64("creditScore")?,
            vehicle_type: VehicleType::parse_optional(args.optional_str("vehicleType")),
        })
    }
}

/// Rate audit trail: base vs. vehicle adjustment vs. final, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateBreakdown {
    pub base_rate_percent: f64,
    pub vehicle_adjustment_percent: f64,
    pub final_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub interest_rate_percent: f64,
    pub loan_term_months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub rate_breakdown: RateBreakdown,
}

pub fn loan_terms(input: &TermsInput) -> LoanTerms {
    let months = reference::default_term_months(input.vehicle_type);
    compute_terms(input.loan_amount, input.credit_score, input.vehicle_type, months)
}

/// Shared with the decision generator, which fixes the term at 60 months
/// instead of using the vehicle default.
pub(crate) fn compute_terms(
    loan_amount: f64,
    credit_score: i64,
    vehicle_type: VehicleType,
    loan_term_months: u32,
) -> LoanTerms {
    let base = reference::base_rate(credit_score);
    let adjustment = reference::rate_adjustment(vehicle_type);
    let annual_rate = base + adjustment;

    let monthly_payment = round_currency(amortized_payment(
        loan_amount,
        annual_rate,
        loan_term_months,
    ));
    let total_payment = round_currency(monthly_payment * loan_term_months as f64);
    let total_interest = round_currency(total_payment - loan_amount);

    LoanTerms {
        interest_rate_percent: round_rate(annual_rate * 100.0),
        loan_term_months,
        monthly_payment,
        total_payment,
        total_interest,
        rate_breakdown: RateBreakdown {
            base_rate_percent: round_rate(base * 100.0),
            vehicle_adjustment_percent: round_rate(adjustment * 100.0),
            final_rate_percent: round_rate(annual_rate * 100.0),
        },
    }
}

/// Level payment `M = P·r(1+r)^n / ((1+r)^n − 1)` with `r` the monthly
/// rate. Degenerates to straight division when the rate is zero.
fn amortized_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}
