//! CLI handler for reports
//!
//! Fetches the budget once, builds the requested report and only then
//! writes it to stdout or the output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::ReportKind;
use crate::api::BudgetSource;
use crate::config::ReportSettings;
use crate::error::{PivotError, PivotResult};
use crate::models::Budget;
use crate::reports::{AccountSummaryReport, CategoryPivotReport};

/// A generated report, ready to be written
#[derive(Debug, Clone)]
pub enum Report {
    CategoryPivot(CategoryPivotReport),
    AccountSummary(AccountSummaryReport),
}

impl Report {
    /// Generate the report `kind` for the settings' year
    pub fn generate(
        budget: &Budget,
        settings: &ReportSettings,
        kind: ReportKind,
    ) -> PivotResult<Self> {
        info!(budget = %budget.name, year = settings.year, "generating report");

        Ok(match kind {
            ReportKind::CategoryPivot => {
                Self::CategoryPivot(CategoryPivotReport::generate(budget, settings.year)?)
            }
            ReportKind::AccountSummary => {
                Self::AccountSummary(AccountSummaryReport::generate(budget, settings.year)?)
            }
        })
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::CategoryPivot(report) => report.rows.len(),
            Self::AccountSummary(report) => report.rows.len(),
        }
    }

    /// Write the rows as tab-separated lines and flush
    pub fn export_tsv<W: Write>(&self, writer: &mut W, currency_symbol: &str) -> PivotResult<()> {
        match self {
            Self::CategoryPivot(report) => report.export_tsv(writer, currency_symbol)?,
            Self::AccountSummary(report) => report.export_tsv(writer, currency_symbol)?,
        }
        writer.flush()?;
        Ok(())
    }
}

/// Handle a report run, writing to the configured destination
pub fn handle_report_command(
    source: &dyn BudgetSource,
    settings: &ReportSettings,
    kind: ReportKind,
) -> PivotResult<()> {
    let budget = source.fetch_budget(&settings.budget_id)?;
    let report = Report::generate(&budget, settings, kind)?;

    // The output file is only touched once the report is complete
    match &settings.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            report.export_tsv(&mut writer, &settings.currency_symbol)?;
            info!(path = %path.display(), rows = report.row_count(), "report written");
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            report.export_tsv(&mut writer, &settings.currency_symbol)?;
            info!(rows = report.row_count(), "report written");
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> PivotResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PivotError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
