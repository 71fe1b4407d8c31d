//! Employee records as supplied by the staff directory.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an employee's salary amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WageType {
    /// Salary is a monthly amount, prorated by present days.
    Monthly,
    /// Salary is a day rate, paid by regular hours worked today.
    Daily,
    /// Salary is passed through unchanged. Records without a wage type
    /// land here.
    #[default]
    Hourly,
}

impl fmt::Display for WageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WageType::Monthly => "Monthly",
            WageType::Daily => "Daily",
            WageType::Hourly => "Hourly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for WageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(WageType::Monthly),
            "daily" => Ok(WageType::Daily),
            "hourly" => Ok(WageType::Hourly),
            other => Err(anyhow::anyhow!("unknown wage type `{}`", other)),
        }
    }
}

/// Where an employee wants to be paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub explicit_cash_preference: bool,
}

impl PaymentDetails {
    pub fn upi(&self) -> Option<&str> {
        non_blank(&self.upi_id)
    }

    pub fn account(&self) -> Option<&str> {
        non_blank(&self.account_number)
    }

    /// True when at least one way of paying the employee is on file.
    pub fn has_any(&self) -> bool {
        self.explicit_cash_preference || self.upi().is_some() || self.account().is_some()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wage_type: WageType,
    /// Missing salaries are carried as zero.
    #[serde(default)]
    pub salary_amount: f64,
    /// Day names such as `"Sunday"`. Only Saturday and Sunday take effect.
    #[serde(default)]
    pub weekly_offs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
}

impl Employee {
    pub fn new(id: &str, name: &str, wage_type: WageType, salary_amount: f64) -> Self {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            wage_type,
            salary_amount,
            weekly_offs: Vec::new(),
            shift_id: None,
            payment_details: None,
        }
    }

    pub fn with_weekly_offs(mut self, days: &[&str]) -> Self {
        self.weekly_offs = days.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_shift(mut self, shift_id: &str) -> Self {
        self.shift_id = Some(shift_id.to_string());
        self
    }

    pub fn with_payment(mut self, details: PaymentDetails) -> Self {
        self.payment_details = Some(details);
        self
    }

    /// Whether `weekday` is one of this employee's weekly offs.
    ///
    /// Weekly offs are only honoured on weekends; a weekday name in the list
    /// never produces a week-off record.
    pub fn is_weekly_off(&self, weekday: Weekday) -> bool {
        let name = match weekday {
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
            _ => return false,
        };
        self.weekly_offs.iter().any(|day| day.trim().eq_ignore_ascii_case(name))
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
