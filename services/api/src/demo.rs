use clap::Args;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use underwriter::error::AppError;
use underwriter::underwriting::{underwrite_batch, ToolArguments, UnderwritingService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print compact JSON instead of pretty-printed reports
    #[arg(long)]
    pub(crate) compact: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one application per row
    pub(crate) file: PathBuf,
    /// Print compact JSON instead of a pretty-printed summary
    #[arg(long)]
    pub(crate) compact: bool,
}

/// Run three representative applications end to end and print each report.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = UnderwritingService::new();

    let samples = [
        (
            "prime electric-vehicle purchase",
            json!({
                "applicationId": "APP-DEMO-1",
                "customerId": "CUST-DEMO-1",
                "loanAmount": 20000,
                "vehicleType": "electric_vehicle",
                "creditScore": 760,
                "annualIncome": 80000,
                "employmentYears": 6,
            }),
        ),
        (
            "stretched mid-tier application",
            json!({
                "applicationId": "APP-DEMO-2",
                "customerId": "CUST-DEMO-2",
                "loanAmount": 45000,
                "vehicleType": "used_car",
                "creditScore": 705,
                "annualIncome": 13000,
                "employmentYears": 2,
            }),
        ),
        (
            "subprime jumbo request",
            json!({
                "applicationId": "APP-DEMO-3",
                "customerId": "CUST-DEMO-3",
                "loanAmount": 90000,
                "vehicleType": "luxury_vehicle",
                "creditScore": 580,
                "annualIncome": 18000,
                "employmentYears": 1,
            }),
        ),
    ];

    for (label, payload) in samples {
        let arguments = ToolArguments::from_value(payload)
            .map_err(|err| invalid_input(err.to_string()))?;
        let report = service
            .underwrite(&arguments)
            .map_err(|err| invalid_input(err.to_string()))?;

        println!("== {label} ==");
        println!(
            "decision: {} (score {})",
            report.decision.decision.label(),
            report.decision.approval_score
        );
        println!("{}", render(&report, args.compact)?);
    }

    Ok(())
}

/// Underwrite every row of a CSV export and print the tallied summary.
pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let file = File::open(&args.file)?;
    let summary = underwrite_batch(BufReader::new(file))?;

    println!(
        "rows: {} approved: {} conditional: {} review: {} rejected: {} failed: {}",
        summary.total_rows,
        summary.approved,
        summary.approved_with_conditions,
        summary.pending_review,
        summary.rejected,
        summary.failed_rows
    );
    println!("{}", render(&summary, args.compact)?);

    Ok(())
}

fn render<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, AppError> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|err| invalid_input(err.to_string()))
}

fn invalid_input(message: String) -> AppError {
    AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, message))
}
