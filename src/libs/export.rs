//! Payroll draft export to CSV, JSON and Excel.
//!
//! Exports hand a draft to whoever pays it out: an accountant's spreadsheet,
//! a bank upload tool or an audit archive. The draft itself is never stored,
//! so an export is the only durable record of what a draft contained.
//!
//! ## Layout
//!
//! - **CSV**: one row per employee, a blank row, an `ADJUSTMENTS` section
//!   listing every addition and deduction, and a closing `Total Net Pay` row.
//!   Money columns use [`format_amount`], so thousands are comma-grouped and
//!   quoted by the CSV writer.
//! - **Excel**: the same sections on a single sheet, with numeric money cells
//!   so totals can be recomputed in the workbook.
//! - **JSON**: the complete [`PayrollEntry`] values, calculation stats
//!   included, wrapped with the payroll date and a generation timestamp.
//!
//! ## File Naming
//!
//! Without an explicit path the file is written to the working directory as
//! `payroll_draft_YYYYMMDD.<ext>`, named after the payroll date.
//!
//! ```rust,no_run
//! use paybook::libs::export::{ExportFormat, Exporter};
//! # let entries = Vec::new();
//! # let date = chrono::Local::now().date_naive();
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None, date);
//! exporter.export(&entries, date)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::{format_amount, FormattedEntry};
use crate::libs::payroll::{AdjustmentType, PayrollEntry};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output formats accepted by `paybook export --format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, readable by any spreadsheet or script.
    Csv,

    /// Pretty-printed JSON carrying every intermediate value of each entry.
    ///
    /// Suited to archiving and to tools that re-check the arithmetic.
    Json,

    /// An `.xlsx` workbook with bold headers, numeric money cells and
    /// auto-fitted columns.
    Excel,
}

impl ExportFormat {
    /// File extension used for default output names, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Column headers of the per-employee section, shared by CSV and Excel.
const HEADERS: [&str; 11] = [
    "Employee ID",
    "Name",
    "Wage Type",
    "Present Days",
    "Overtime Hours",
    "Base",
    "Additions",
    "Deductions",
    "Net Pay",
    "Payment Mode",
    "Status",
];

/// Top-level JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDraft<'a> {
    /// Payroll date in YYYY-MM-DD format
    date: String,
    /// Local time the file was written, YYYY-MM-DD HH:MM:SS
    generated_at: String,
    /// Sum of every entry's net pay
    total_net_pay: f64,
    /// Entries in draft order
    entries: &'a [PayrollEntry],
}

/// Writes a payroll draft to a file in one of the [`ExportFormat`]s.
///
/// The exporter is configured once with a format and destination and can
/// then be asked to write any draft. It does not read the stores itself: the
/// caller drafts first and hands over the entries, so what is exported is
/// exactly what was shown on screen.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter.
    ///
    /// # Arguments
    ///
    /// * `format` - Output format
    /// * `output_path` - Destination file; `None` picks
    ///   `payroll_draft_YYYYMMDD.<ext>` in the working directory
    /// * `date` - Payroll date, used for the default file name
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, date: NaiveDate) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("payroll_draft_{}.{}", date.format("%Y%m%d"), format.extension()))
        });
        Self { format, output_path }
    }

    /// The file the next [`export`](Self::export) call writes.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `entries` in the configured format, replacing any existing
    /// file at the output path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or written, or when
    /// the workbook cannot be saved.
    pub fn export(&self, entries: &[PayrollEntry], date: NaiveDate) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(entries),
            ExportFormat::Json => self.export_json(entries, date),
            ExportFormat::Excel => self.export_excel(entries, date),
        }
    }

    /// Writes the CSV layout. Every row is padded to the header width so the
    /// file stays rectangular for strict readers.
    fn export_csv(&self, entries: &[PayrollEntry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        let blank = [""; 11];

        wtr.write_record(HEADERS)?;
        for entry in entries {
            wtr.write_record(entry_cells(&FormattedEntry::from(entry)))?;
        }

        wtr.write_record(blank)?;
        wtr.write_record(pad(["ADJUSTMENTS", "", "", ""]))?;
        wtr.write_record(pad(["Employee ID", "Type", "Label", "Amount"]))?;
        for entry in entries {
            for adjustment in &entry.adjustments {
                wtr.write_record(pad([
                    entry.employee_id.as_str(),
                    kind_label(adjustment.kind),
                    adjustment.label.as_str(),
                    &format_amount(adjustment.amount),
                ]))?;
            }
        }

        wtr.write_record(blank)?;
        wtr.write_record(pad(["Total Net Pay", &format_amount(total_net_pay(entries)), "", ""]))?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, entries: &[PayrollEntry], date: NaiveDate) -> Result<()> {
        let draft = ExportDraft {
            date: date.format("%Y-%m-%d").to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total_net_pay: total_net_pay(entries),
            entries,
        };
        let json = serde_json::to_string_pretty(&draft)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Writes the workbook: a title row, the employee table from row 3, a
    /// total under the net pay column, then the adjustments table.
    fn export_excel(&self, entries: &[PayrollEntry], date: NaiveDate) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);
        let money_format = Format::new().set_num_format("#,##0.00");

        worksheet.write_string_with_format(0, 0, format!("Payroll Draft - {}", date.format("%d %b %Y")), &title_format)?;
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
        }

        let mut row = 3;
        for entry in entries {
            worksheet.write_string(row, 0, &entry.employee_id)?;
            worksheet.write_string(row, 1, &entry.employee_name)?;
            worksheet.write_string(row, 2, entry.wage_type.to_string())?;
            worksheet.write_number(row, 3, entry.stats.present_days)?;
            worksheet.write_number(row, 4, entry.stats.overtime_hours as f64)?;
            worksheet.write_number_with_format(row, 5, entry.base_amount, &money_format)?;
            worksheet.write_number_with_format(row, 6, entry.additions(), &money_format)?;
            worksheet.write_number_with_format(row, 7, entry.deductions(), &money_format)?;
            worksheet.write_number_with_format(row, 8, entry.net_pay, &money_format)?;
            worksheet.write_string(row, 9, entry.payment_mode.to_string())?;
            worksheet.write_string(row, 10, entry.status.to_string())?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 7, "Total", &header_format)?;
        worksheet.write_number_with_format(row, 8, total_net_pay(entries), &money_format)?;

        row += 2;
        worksheet.write_string_with_format(row, 0, "ADJUSTMENTS", &header_format)?;
        row += 1;
        for (col, header) in ["Employee ID", "Type", "Label", "Amount"].iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *header, &header_format)?;
        }
        row += 1;
        for entry in entries {
            for adjustment in &entry.adjustments {
                worksheet.write_string(row, 0, &entry.employee_id)?;
                worksheet.write_string(row, 1, kind_label(adjustment.kind))?;
                worksheet.write_string(row, 2, &adjustment.label)?;
                worksheet.write_number_with_format(row, 3, adjustment.amount, &money_format)?;
                row += 1;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn entry_cells(entry: &FormattedEntry) -> [&str; 11] {
    [
        &entry.employee_id,
        &entry.employee_name,
        &entry.wage_type,
        &entry.present_days,
        &entry.overtime_hours,
        &entry.base_amount,
        &entry.additions,
        &entry.deductions,
        &entry.net_pay,
        &entry.payment_mode,
        &entry.status,
    ]
}

/// Widens a short section row to the draft's column count.
fn pad<'a>(cells: [&'a str; 4]) -> [&'a str; 11] {
    let mut row = [""; 11];
    row[..4].copy_from_slice(&cells);
    row
}

fn kind_label(kind: AdjustmentType) -> &'static str {
    match kind {
        AdjustmentType::Addition => "Addition",
        AdjustmentType::Deduction => "Deduction",
    }
}

/// Sum of net pay across a draft.
pub fn total_net_pay(entries: &[PayrollEntry]) -> f64 {
    entries.iter().map(|e| e.net_pay).sum()
}
