// One run: load both datasets, gate on validation, build and write the report

use crate::core::config::Config;
use crate::core::error::RunError;
use crate::loader::dataset::load_json;
use crate::report::builder::build_sections;
use crate::report::render::render_report;
use crate::writer::output::write_report;
use std::path::PathBuf;
use tracing::{error, info};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub sections: usize,
    pub users_reported: usize,
}

pub fn run(config: &Config) -> Result<RunSummary, RunError> {
    let users_path = &config.input.users;
    let companies_path = &config.input.companies;

    let users = load_json(users_path)?.into_users(users_path)?;
    let companies = load_json(companies_path)?.into_companies(companies_path)?;

    // All-or-nothing: any rejected record in either dataset stops the run
    if !users.is_clean() || !companies.is_clean() {
        error!(
            user_errors = users.errors.len(),
            company_errors = companies.errors.len(),
            "Validation failed, no report generated"
        );
        return Err(RunError::Validation {
            user_errors: users.errors,
            company_errors: companies.errors,
        });
    }

    let sections = build_sections(&users.records, &companies.records);
    let users_reported = sections.iter().map(|s| s.user_count()).sum();
    let report = render_report(&sections);

    write_report(&report, &config.output.path)?;

    info!(
        output = %config.output.path.display(),
        sections = sections.len(),
        users_reported = users_reported,
        "Processing complete"
    );

    Ok(RunSummary {
        output_path: config.output.path.clone(),
        sections: sections.len(),
        users_reported,
    })
}

/// Lines printed to stdout when a run fails
pub fn failure_lines(err: &RunError) -> Vec<String> {
    match err {
        RunError::Validation {
            user_errors,
            company_errors,
        } => {
            let mut lines = Vec::with_capacity(user_errors.len() + company_errors.len() + 2);
            lines.push("Errors found:".to_string());
            lines.extend(user_errors.iter().map(|e| format!("User data: {}", e)));
            lines.extend(company_errors.iter().map(|e| format!("Company data: {}", e)));
            lines.push(format!("An error occurred: {}", err));
            lines
        }
        RunError::Write(write_err) => vec![write_err.to_string()],
        RunError::Load(load_err) => vec![format!("An error occurred: {}", load_err)],
    }
}

/// Line printed to stdout after a successful run
pub fn success_line(summary: &RunSummary) -> String {
    format!(
        "Processing complete. Please check {} for results.",
        summary.output_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{LoadError, WriteError};

    #[test]
    fn test_failure_lines_validation() {
        let err = RunError::Validation {
            user_errors: vec!["Error in user at index 0: Missing required field: id".to_string()],
            company_errors: vec![
                "Error in company at index 2: Invalid top_up: must be a positive integer".to_string(),
            ],
        };

        assert_eq!(
            failure_lines(&err),
            vec![
                "Errors found:",
                "User data: Error in user at index 0: Missing required field: id",
                "Company data: Error in company at index 2: Invalid top_up: must be a positive integer",
                "An error occurred: Cannot proceed due to validation errors",
            ]
        );
    }

    #[test]
    fn test_failure_lines_load() {
        let err = RunError::Load(LoadError::UnknownFileType(PathBuf::from("input/people.json")));
        assert_eq!(
            failure_lines(&err),
            vec!["An error occurred: Unknown file type: input/people.json"]
        );
    }

    #[test]
    fn test_failure_lines_write() {
        let err = RunError::Write(WriteError::Write {
            path: PathBuf::from("output/output.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "Write error"),
        });
        assert_eq!(
            failure_lines(&err),
            vec!["Error writing to output/output.txt: Write error"]
        );
    }

    #[test]
    fn test_success_line() {
        let summary = RunSummary {
            output_path: PathBuf::from("output/output.txt"),
            sections: 1,
            users_reported: 2,
        };
        assert_eq!(
            success_line(&summary),
            "Processing complete. Please check output/output.txt for results."
        );
    }
}
