//! Completeness and business-rule validation for raw loan applications.
//!
//! Validation never fails as a call: every problem is reported inside the
//! result. Missing numeric fields count as `0` for the derived
//! debt-to-income rule while still being reported as missing by the
//! completeness check.

use super::args::ToolArguments;
use serde::Serialize;

pub const REQUIRED_FIELDS: [&str; 7] = [
    "applicationId",
    "customerId",
    "loanAmount",
    "vehicleType",
    "creditScore",
    "annualIncome",
    "employmentYears",
];

const MAX_TYPICAL_LOAN: f64 = 100_000.0;
const ESTIMATED_PAYMENT_FACTOR: f64 = 0.02;
const MAX_DEBT_TO_INCOME: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub summary: ValidationSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub required_fields_complete: bool,
    pub business_rules_passed: bool,
    pub ready_for_processing: bool,
}

pub fn validate_application(args: &ToolArguments) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let required_fields_complete = check_completeness(args, &mut errors);
    let rule_errors_before = errors.len();

    // Range rules run on whatever parses, independent of completeness.
    // A present-but-non-numeric value is a malformed-input error.
    let loan_amount = numeric_rule(args, "loanAmount", &mut errors);
    let credit_score = numeric_rule(args, "creditScore", &mut errors);
    let annual_income = numeric_rule(args, "annualIncome", &mut errors);
    let employment_years = numeric_rule(args, "employmentYears", &mut errors);

    if let Some(amount) = loan_amount {
        if amount <= 0.0 {
            errors.push("loanAmount must be greater than 0".to_string());
        } else if amount > MAX_TYPICAL_LOAN {
            warnings.push("loanAmount exceeds typical lending limits".to_string());
        }
    }

    if let Some(score) = credit_score {
        if !(300.0..=850.0).contains(&score) {
            errors.push("creditScore must be between 300 and 850".to_string());
        } else if score < 600.0 {
            warnings.push("creditScore below 600 may limit financing options".to_string());
        }
    }

    if let Some(income) = annual_income {
        if income <= 0.0 {
            errors.push("annualIncome must be greater than 0".to_string());
        } else if income < 30_000.0 {
            warnings.push("annualIncome below 30000 may require a co-signer".to_string());
        }
    }

    if let Some(years) = employment_years {
        if years < 0.0 {
            errors.push("employmentYears cannot be negative".to_string());
        } else if years < 2.0 {
            warnings.push(
                "employmentYears below 2 may require additional verification".to_string(),
            );
        }
    }

    // Derived rule: absent numerics count as zero here even though the
    // completeness check reported them missing above.
    let amount_for_ratio = loan_amount.unwrap_or(0.0);
    let income_for_ratio = annual_income.unwrap_or(0.0);
    if income_for_ratio > 0.0 {
        let estimated_monthly = amount_for_ratio * ESTIMATED_PAYMENT_FACTOR;
        let ratio = (estimated_monthly * 12.0) / income_for_ratio;
        if ratio > MAX_DEBT_TO_INCOME {
            warnings.push(format!(
                "Estimated debt-to-income ratio {:.1}% exceeds the recommended {:.0}%",
                ratio * 100.0,
                MAX_DEBT_TO_INCOME * 100.0
            ));
        }
    }

    let business_rules_passed = errors.len() == rule_errors_before;
    let is_valid = errors.is_empty();

    ValidationReport {
        is_valid,
        warnings,
        summary: ValidationSummary {
            required_fields_complete,
            business_rules_passed,
            ready_for_processing: is_valid && errors.is_empty(),
        },
        errors,
    }
}

fn check_completeness(args: &ToolArguments, errors: &mut Vec<String>) -> bool {
    let mut complete = true;
    for field in REQUIRED_FIELDS {
        if !args.is_present(field) {
            errors.push(format!("Missing required field: {field}"));
            complete = false;
        }
    }
    complete
}

fn numeric_rule(args: &ToolArguments, field: &'static str, errors: &mut Vec<String>) -> Option<f64> {
    match args.optional_f64(field) {
        Ok(value) => value,
        Err(err) => {
            errors.push(err.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> ToolArguments {
        ToolArguments::from_value(value).expect("object args")
    }

    fn complete_application() -> ToolArguments {
        args(json!({
            "applicationId": "APP-1001",
            "customerId": "CUST-88",
            "loanAmount": 28000,
            "vehicleType": "used_car",
            "creditScore": 705,
            "annualIncome": 64000,
            "employmentYears": 4.5,
        }))
    }

    #[test]
    fn clean_application_is_ready_for_processing() {
        let report = validate_application(&complete_application());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.summary.required_fields_complete);
        assert!(report.summary.business_rules_passed);
        assert!(report.summary.ready_for_processing);
    }

    #[test]
    fn every_missing_field_is_reported_by_name() {
        let report = validate_application(&args(json!({})));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            assert!(
                report
                    .errors
                    .iter()
                    .any(|error| error == &format!("Missing required field: {field}")),
                "no error for {field}"
            );
        }
        assert!(!report.summary.required_fields_complete);
        // No range rule fired, so business rules pass on an empty map.
        assert!(report.summary.business_rules_passed);
    }

    #[test]
    fn out_of_range_values_produce_all_four_hard_errors() {
        let report = validate_application(&args(json!({
            "applicationId": "APP-1002",
            "customerId": "CUST-12",
            "vehicleType": "new_car",
            "loanAmount": -5,
            "creditScore": 900,
            "annualIncome": 0,
            "employmentYears": -1,
        })));

        assert!(!report.is_valid);
        assert!(!report.summary.ready_for_processing);
        for expected in [
            "loanAmount must be greater than 0",
            "creditScore must be between 300 and 850",
            "annualIncome must be greater than 0",
            "employmentYears cannot be negative",
        ] {
            assert!(
                report.errors.iter().any(|error| error == expected),
                "missing error: {expected}"
            );
        }
    }

    #[test]
    fn debt_to_income_warning_formats_the_ratio_as_percent() {
        let report = validate_application(&args(json!({
            "applicationId": "APP-1003",
            "customerId": "CUST-9",
            "vehicleType": "new_car",
            "loanAmount": 80000,
            "creditScore": 720,
            "annualIncome": 40000,
            "employmentYears": 3,
        })));

        assert!(report.is_valid);
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning
                == "Estimated debt-to-income ratio 48.0% exceeds the recommended 40%"));
    }

    #[test]
    fn soft_limits_warn_without_invalidating() {
        let report = validate_application(&args(json!({
            "applicationId": "APP-1004",
            "customerId": "CUST-3",
            "vehicleType": "luxury_vehicle",
            "loanAmount": 120000,
            "creditScore": 590,
            "annualIncome": 28000,
            "employmentYears": 1,
        })));

        assert!(report.is_valid, "warnings must not invalidate: {:?}", report.errors);
        assert!(report.warnings.len() >= 4);
    }

    #[test]
    fn malformed_numeric_field_is_a_descriptive_error() {
        let report = validate_application(&args(json!({
            "applicationId": "APP-1005",
            "customerId": "CUST-4",
            "vehicleType": "new_car",
            "loanAmount": "plenty",
            "creditScore": 700,
            "annualIncome": 50000,
            "employmentYears": 2,
        })));

        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|error| error == "Field 'loanAmount' must be a number"));
    }

    #[test]
    fn missing_income_skips_the_derived_ratio() {
        let report = validate_application(&args(json!({
            "applicationId": "APP-1006",
            "customerId": "CUST-5",
            "vehicleType": "new_car",
            "loanAmount": 90000,
            "creditScore": 700,
            "employmentYears": 2,
        })));

        assert!(report
            .errors
            .iter()
            .any(|error| error == "Missing required field: annualIncome"));
        assert!(!report
            .warnings
            .iter()
            .any(|warning| warning.contains("debt-to-income")));
    }
}
