//! CSV batch intake.
//!
//! Back-office exports arrive as CSV; each row becomes an argument map and
//! runs through validation and, when the row is complete, the decision
//! generator. A bad row yields a per-row error entry instead of aborting
//! the batch.

use super::args::ToolArguments;
use super::decision::{decide, DecisionInput};
use super::domain::DecisionCategory;
use super::validation::validate_application;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read batch export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid batch CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(rename = "applicationId", default, deserialize_with = "empty_string_as_none")]
    application_id: Option<String>,
    #[serde(rename = "customerId", default, deserialize_with = "empty_string_as_none")]
    customer_id: Option<String>,
    #[serde(rename = "loanAmount", default, deserialize_with = "empty_string_as_none")]
    loan_amount: Option<String>,
    #[serde(rename = "vehicleType", default, deserialize_with = "empty_string_as_none")]
    vehicle_type: Option<String>,
    #[serde(rename = "creditScore", default, deserialize_with = "empty_string_as_none")]
    credit_score: Option<String>,
    #[serde(rename = "annualIncome", default, deserialize_with = "empty_string_as_none")]
    annual_income: Option<String>,
    #[serde(rename = "employmentYears", default, deserialize_with = "empty_string_as_none")]
    employment_years: Option<String>,
    #[serde(rename = "submittedAt", default, deserialize_with = "empty_string_as_none")]
    submitted_at: Option<String>,
}

impl BatchRow {
    fn into_arguments(self) -> (ToolArguments, Option<NaiveDate>) {
        let submitted_at = self
            .submitted_at
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok());

        let mut map = Map::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value));
            }
        };
        put("applicationId", self.application_id);
        put("customerId", self.customer_id);
        put("loanAmount", self.loan_amount);
        put("vehicleType", self.vehicle_type);
        put("creditScore", self.credit_score);
        put("annualIncome", self.annual_income);
        put("employmentYears", self.employment_years);

        (ToolArguments::new(map), submitted_at)
    }
}

/// Outcome for a single CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub row: usize,
    pub application_id: Option<String>,
    pub submitted_at: Option<NaiveDate>,
    pub ready_for_processing: bool,
    pub decision: Option<DecisionCategory>,
    pub approval_score: Option<u32>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_rows: usize,
    pub approved: usize,
    pub approved_with_conditions: usize,
    pub pending_review: usize,
    pub rejected: usize,
    pub failed_rows: usize,
    pub outcomes: Vec<BatchOutcome>,
}

pub fn underwrite_batch<R: Read>(reader: R) -> Result<BatchSummary, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = index + 1;
        match record {
            Ok(parsed) => outcomes.push(underwrite_row(row, parsed)),
            Err(err) => outcomes.push(BatchOutcome {
                row,
                application_id: None,
                submitted_at: None,
                ready_for_processing: false,
                decision: None,
                approval_score: None,
                errors: vec![format!("invalid batch CSV data: {err}")],
            }),
        }
    }

    let mut summary = BatchSummary {
        total_rows: outcomes.len(),
        approved: 0,
        approved_with_conditions: 0,
        pending_review: 0,
        rejected: 0,
        failed_rows: 0,
        outcomes,
    };
    for outcome in &summary.outcomes {
        match outcome.decision {
            Some(DecisionCategory::Approved) => summary.approved += 1,
            Some(DecisionCategory::ApprovedWithConditions) => {
                summary.approved_with_conditions += 1
            }
            Some(DecisionCategory::PendingReview) => summary.pending_review += 1,
            Some(DecisionCategory::Rejected) => summary.rejected += 1,
            None => summary.failed_rows += 1,
        }
    }

    Ok(summary)
}

fn underwrite_row(row: usize, parsed: BatchRow) -> BatchOutcome {
    let (args, submitted_at) = parsed.into_arguments();
    let application_id = args.optional_str("applicationId").map(str::to_string);

    let report = validate_application(&args);
    if !report.summary.ready_for_processing {
        return BatchOutcome {
            row,
            application_id,
            submitted_at,
            ready_for_processing: false,
            decision: None,
            approval_score: None,
            errors: report.errors,
        };
    }

    match DecisionInput::from_args(&args) {
        Ok(input) => {
            let decision = decide(&input);
            BatchOutcome {
                row,
                application_id,
                submitted_at,
                ready_for_processing: true,
                decision: Some(decision.decision),
                approval_score: Some(decision.approval_score),
                errors: Vec::new(),
            }
        }
        Err(err) => BatchOutcome {
            row,
            application_id,
            submitted_at,
            ready_for_processing: true,
            decision: None,
            approval_score: None,
            errors: vec![err.to_string()],
        },
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "applicationId,customerId,loanAmount,vehicleType,creditScore,annualIncome,employmentYears,submittedAt\n";

    fn run(rows: &str) -> BatchSummary {
        let csv = format!("{HEADER}{rows}");
        underwrite_batch(Cursor::new(csv.into_bytes())).expect("batch parses")
    }

    #[test]
    fn clean_rows_are_decided_and_tallied() {
        let summary = run(concat!(
            "APP-1,CUST-1,20000,electric_vehicle,760,80000,5,2026-08-01\n",
            "APP-2,CUST-2,90000,standard,580,18000,1,2026-08-02\n",
        ));
        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.approved, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.failed_rows, 0);
        assert_eq!(
            summary.outcomes[0].submitted_at,
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );
        assert_eq!(summary.outcomes[0].approval_score, Some(95));
    }

    #[test]
    fn incomplete_rows_surface_validation_errors_without_a_decision() {
        let summary = run("APP-3,,20000,new_car,760,80000,5,\n");
        assert_eq!(summary.total_rows, 1);
        assert_eq!(summary.failed_rows, 1);
        let outcome = &summary.outcomes[0];
        assert!(!outcome.ready_for_processing);
        assert!(outcome.decision.is_none());
        assert!(outcome
            .errors
            .iter()
            .any(|error| error == "Missing required field: customerId"));
    }

    #[test]
    fn non_numeric_amount_fails_the_row_not_the_batch() {
        let summary = run(concat!(
            "APP-4,CUST-4,lots,new_car,760,80000,5,2026-08-03\n",
            "APP-5,CUST-5,20000,new_car,760,80000,5,2026-08-03\n",
        ));
        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.failed_rows, 1);
        assert_eq!(summary.approved, 1);
        assert!(summary.outcomes[0]
            .errors
            .iter()
            .any(|error| error == "Field 'loanAmount' must be a number"));
    }
}
