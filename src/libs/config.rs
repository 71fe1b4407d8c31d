//! Configuration management for paybook.
//!
//! Settings live in a JSON file inside the platform data directory resolved by
//! [`DataStorage`]. A missing file is not an error: every setting has a
//! default matching the standard payroll rules, so a fresh installation can
//! draft payroll immediately.
//!
//! ## Payroll Settings
//!
//! - **Calculation method**: the divisor used to turn a monthly salary into a
//!   per-day amount
//! - **Grace minutes**: shortfall tolerated before a full day becomes a half day
//! - **Overtime multiplier**: factor applied to the derived hourly rate
//! - **Minimum overtime**: overtime below this many minutes is not paid
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paybook::libs::config::Config;
//!
//! let config = Config::read()?;
//! let payroll = config.payroll_or_default();
//! println!("Grace: {} minutes", payroll.grace_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// How a monthly salary is divided into a per-day amount.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CalculationMethod {
    /// Always divide by 30.
    #[default]
    #[serde(rename = "fixed_30_days")]
    Fixed30Days,
    /// Divide by the number of days in the month of the payroll date.
    #[serde(rename = "calendar_month")]
    CalendarMonth,
    /// Divide by the days of the attendance window that are not weekly offs.
    #[serde(rename = "exclude_weekly_offs")]
    ExcludeWeeklyOffs,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 3] = [
        CalculationMethod::Fixed30Days,
        CalculationMethod::CalendarMonth,
        CalculationMethod::ExcludeWeeklyOffs,
    ];

    /// Number of days a monthly salary is spread over.
    ///
    /// `window_days` is the length of the attendance window and
    /// `weekly_off_days` the week-off records inside it. The divisor is never
    /// below one.
    pub fn divisor(self, today: NaiveDate, window_days: u32, weekly_off_days: u32) -> u32 {
        let days = match self {
            CalculationMethod::Fixed30Days => 30,
            CalculationMethod::CalendarMonth => days_in_month(today),
            CalculationMethod::ExcludeWeeklyOffs => window_days.saturating_sub(weekly_off_days),
        };
        days.max(1)
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            CalculationMethod::Fixed30Days => "Fixed 30 days",
            CalculationMethod::CalendarMonth => "Calendar month",
            CalculationMethod::ExcludeWeeklyOffs => "Exclude weekly offs",
        };
        write!(f, "{}", label)
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(30, |last| last.day())
}

/// Rules applied while drafting payroll.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PayrollConfig {
    pub calculation_method: CalculationMethod,
    /// A day counts as full when worked minutes are within this many minutes
    /// of the shift's effective duration.
    pub grace_minutes: i64,
    /// Multiplier applied to the hourly rate for paid overtime hours.
    pub overtime_multiplier: f64,
    /// Overtime shorter than this is not paid.
    pub min_overtime_minutes: i64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        PayrollConfig {
            calculation_method: CalculationMethod::default(),
            grace_minutes: 15,
            overtime_multiplier: 1.5,
            min_overtime_minutes: 60,
        }
    }
}

/// Root configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<PayrollConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn payroll_or_default(&self) -> PayrollConfig {
        self.payroll.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.payroll_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModulePayroll);

        let labels: Vec<String> = CalculationMethod::ALL.iter().map(|m| m.to_string()).collect();
        let current = CalculationMethod::ALL
            .iter()
            .position(|m| *m == default.calculation_method)
            .unwrap_or(0);
        let method = Select::with_theme(&theme)
            .with_prompt(Message::PromptCalculationMethod.to_string())
            .items(&labels)
            .default(current)
            .interact()?;

        config.payroll = Some(PayrollConfig {
            calculation_method: CalculationMethod::ALL[method],
            grace_minutes: Input::with_theme(&theme)
                .with_prompt(Message::PromptGraceMinutes.to_string())
                .default(default.grace_minutes)
                .interact_text()?,
            overtime_multiplier: Input::with_theme(&theme)
                .with_prompt(Message::PromptOvertimeMultiplier.to_string())
                .default(default.overtime_multiplier)
                .interact_text()?,
            min_overtime_minutes: Input::with_theme(&theme)
                .with_prompt(Message::PromptMinOvertimeMinutes.to_string())
                .default(default.min_overtime_minutes)
                .interact_text()?,
        });

        Ok(config)
    }
}
