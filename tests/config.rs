#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paybook::libs::config::{CalculationMethod, Config, PayrollConfig};
    use parking_lot::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; tests touching it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test]
    fn test_payroll_defaults() {
        let payroll = PayrollConfig::default();
        assert_eq!(payroll.calculation_method, CalculationMethod::Fixed30Days);
        assert_eq!(payroll.grace_minutes, 15);
        assert_eq!(payroll.overtime_multiplier, 1.5);
        assert_eq!(payroll.min_overtime_minutes, 60);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.payroll.is_none());
        assert_eq!(config.payroll_or_default(), PayrollConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_and_delete(_ctx: &mut ConfigTestContext) {
        let config = Config {
            payroll: Some(PayrollConfig {
                calculation_method: CalculationMethod::ExcludeWeeklyOffs,
                grace_minutes: 10,
                overtime_multiplier: 2.0,
                min_overtime_minutes: 30,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.payroll, config.payroll);

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert!(Config::read().unwrap().payroll.is_none());
    }

    #[test]
    fn test_partial_payroll_section_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"payroll": {"calculation_method": "calendar_month"}}"#).unwrap();
        let payroll = config.payroll_or_default();

        assert_eq!(payroll.calculation_method, CalculationMethod::CalendarMonth);
        assert_eq!(payroll.grace_minutes, 15);
        assert_eq!(payroll.min_overtime_minutes, 60);
    }

    #[test]
    fn test_divisors() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(CalculationMethod::Fixed30Days.divisor(date(2025, 2, 1), 30, 8), 30);
        assert_eq!(CalculationMethod::CalendarMonth.divisor(date(2025, 2, 14), 30, 8), 28);
        assert_eq!(CalculationMethod::CalendarMonth.divisor(date(2024, 2, 14), 30, 8), 29);
        assert_eq!(CalculationMethod::CalendarMonth.divisor(date(2025, 12, 31), 30, 0), 31);
        assert_eq!(CalculationMethod::ExcludeWeeklyOffs.divisor(date(2025, 3, 14), 30, 8), 22);
        assert_eq!(CalculationMethod::ExcludeWeeklyOffs.divisor(date(2025, 3, 14), 1, 1), 1);
    }
}
