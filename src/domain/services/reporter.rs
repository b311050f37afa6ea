// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scrub::{LeadClassification, ScrubLedgerRow, ScrubReport};
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

/// Standardized return reason attached to every exported DNC lead, as
/// expected by downstream dialer-exclusion ingestion.
pub const RETURN_REASON: &str = "User claims to not have opted in - DNC";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV encoding failed: {0}")]
    Csv(String),
    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a finished scrub ledger at the output boundary.
///
/// Two variants, by contract: the JSON report carries every visited
/// lead (all three classifications); the CSV export is restricted to
/// DNC-classified leads plus a second `return_reason` section.
pub struct ScrubReporter;

impl ScrubReporter {
    /// Full report as JSON: all classifications present in `leads`.
    pub fn to_json(report: &ScrubReport) -> Result<serde_json::Value, ReportError> {
        Ok(serde_json::to_value(report)?)
    }

    /// DNC-only CSV export.
    ///
    /// Starts with `#`-prefixed metadata lines, then a header row and
    /// one data row per DNC lead, then the `return_reason` section for
    /// dialer-exclusion ingestion. Every field is quoted; embedded
    /// quotes are doubled.
    pub fn to_csv(report: &ScrubReport) -> Result<String, ReportError> {
        let dnc_rows: Vec<&ScrubLedgerRow> = report
            .leads
            .iter()
            .filter(|row| row.classification == LeadClassification::Dnc)
            .collect();

        let mut out = String::new();
        out.push_str("# List DNC Scrub Report - DNC LEADS ONLY\n");
        out.push_str(&format!("# List ID: {}\n", report.list_id));
        out.push_str(&format!("# Date Range: {}\n", report.date_range));
        out.push_str(&format!("# Total Leads Processed: {}\n", report.total_leads));
        out.push_str(&format!("# DNC Leads (Exported): {}\n", report.dnc_leads));
        out.push_str(&format!(
            "# Clean Leads (Not Exported): {}\n",
            report.clean_leads
        ));
        out.push_str(&format!("# DNC Rate: {}\n", report.dnc_rate));
        out.push_str("#\n");

        let mut writer = quoted_writer();
        writer
            .write_record(["lead_id", "phone", "classification", "sources", "reasons"])
            .map_err(csv_err)?;
        for row in &dnc_rows {
            writer
                .write_record([
                    row.lead_id.to_string(),
                    row.phone.clone(),
                    row.classification.to_string(),
                    row.sources.join("; "),
                    row.reasons.join("; "),
                ])
                .map_err(csv_err)?;
        }
        out.push_str(&into_string(writer)?);

        out.push_str("\n\n");
        out.push_str("# RETURN REASON TAB\n");
        out.push_str("# All DNC leads with standardized return reason\n");

        let mut writer = quoted_writer();
        writer
            .write_record(["lead_id", "phone", "return_reason"])
            .map_err(csv_err)?;
        for row in &dnc_rows {
            writer
                .write_record([
                    row.lead_id.to_string(),
                    row.phone.clone(),
                    RETURN_REASON.to_string(),
                ])
                .map_err(csv_err)?;
        }
        out.push_str(&into_string(writer)?);

        Ok(out)
    }
}

fn quoted_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String, ReportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
}

fn csv_err(e: csv::Error) -> ReportError {
    ReportError::Csv(e.to_string())
}
