//! Salary advances awaiting recovery.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceStatus {
    /// Approved and not yet recovered from any finalized payroll.
    #[default]
    Open,
    /// Recovered by a finalized payroll.
    Deducted,
}

impl fmt::Display for AdvanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdvanceStatus::Open => write!(f, "open"),
            AdvanceStatus::Deducted => write!(f, "deducted"),
        }
    }
}

impl FromStr for AdvanceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(AdvanceStatus::Open),
            "deducted" => Ok(AdvanceStatus::Deducted),
            other => Err(anyhow::anyhow!("unknown advance status `{}`", other)),
        }
    }
}

/// An approved cash advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedAdvance {
    /// Ledger id; `None` until the advance is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: String,
    pub amount: f64,
    #[serde(default)]
    pub status: AdvanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deducted_at: Option<NaiveDateTime>,
}

impl ApprovedAdvance {
    pub fn new(employee_id: &str, amount: f64, note: Option<String>) -> Self {
        ApprovedAdvance {
            id: None,
            employee_id: employee_id.to_string(),
            amount,
            status: AdvanceStatus::Open,
            note,
            approved_at: None,
            deducted_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == AdvanceStatus::Open
    }
}

/// Groups the open advances of a ledger by employee id.
///
/// Deducted advances are dropped, so the result is safe to hand to the
/// draft builder whatever the store returned.
pub fn open_by_employee(advances: Vec<ApprovedAdvance>) -> HashMap<String, Vec<ApprovedAdvance>> {
    let mut grouped: HashMap<String, Vec<ApprovedAdvance>> = HashMap::new();
    for advance in advances.into_iter().filter(ApprovedAdvance::is_open) {
        grouped.entry(advance.employee_id.clone()).or_default().push(advance);
    }
    grouped
}

/// Sum of the open advances in `advances`.
pub fn pending_total(advances: &[ApprovedAdvance]) -> f64 {
    advances.iter().filter(|a| a.is_open()).map(|a| a.amount).sum()
}
