#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paybook::db::memory::MemoryStore;
    use paybook::libs::advance::ApprovedAdvance;
    use paybook::libs::config::PayrollConfig;
    use paybook::libs::employee::{Employee, PaymentDetails, WageType};
    use paybook::libs::export::{total_net_pay, ExportFormat, Exporter};
    use paybook::libs::payroll::{PayrollEntry, PayrollService};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        date: NaiveDate,
        draft: Vec<PayrollEntry>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let store = MemoryStore::new();
            store.add_employee(
                Employee::new("H1", "Farah", WageType::Hourly, 45000.0).with_payment(PaymentDetails {
                    upi_id: Some("farah@upi".to_string()),
                    ..PaymentDetails::default()
                }),
            );
            store.add_employee(Employee::new("E1", "Asha", WageType::Daily, 800.0));
            store.add_advance(ApprovedAdvance::new("H1", 5000.0, None));

            let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
            let draft = PayrollService::new(&store, &store, &store, PayrollConfig::default())
                .draft(date)
                .unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                date,
                draft,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("draft.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()), ctx.date);
        exporter.export(&ctx.draft, ctx.date).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("Employee ID,Name,Wage Type"));
        assert!(content.contains("H1,Farah,Hourly"));
        assert!(content.contains("\"40,000.00\""));
        assert!(content.contains("missing_details"));
        assert!(content.contains("ADJUSTMENTS"));
        assert!(content.contains("Less Advance"));
        assert!(content.contains("Overtime (2 hrs)"));
        assert!(content.contains("Total Net Pay"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("draft.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone()), ctx.date)
            .export(&ctx.draft, ctx.date)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(value["date"], "2025-03-14");
        assert_eq!(value["totalNetPay"], total_net_pay(&ctx.draft));

        let farah = &value["entries"][0];
        assert_eq!(farah["employeeId"], "H1");
        assert_eq!(farah["paymentMode"], "UPI");
        assert_eq!(farah["status"], "ready");
        assert_eq!(farah["adjustments"][0]["type"], "deduction");
        assert_eq!(farah["stats"]["pendingAdvance"], 5000.0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("draft.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone()), ctx.date)
            .export(&ctx.draft, ctx.date)
            .unwrap();

        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_output_name(ctx: &mut ExportTestContext) {
        let exporter = Exporter::new(ExportFormat::Excel, None, ctx.date);
        assert_eq!(exporter.output_path().to_str(), Some("payroll_draft_20250314.xlsx"));
    }
}
