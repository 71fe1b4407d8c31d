#[cfg(test)]
mod tests {
    use paybook::db::db::Db;
    use paybook::db::employees::Employees;
    use paybook::db::memory::MemoryStore;
    use paybook::db::repository::{AdvanceStore, EmployeeStore, ShiftStore};
    use paybook::db::shifts::Shifts;
    use paybook::db::{advances::Advances, staff};
    use paybook::libs::advance::AdvanceStatus;
    use paybook::libs::employee::WageType;
    use paybook::libs::staff::StaffFile;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const STAFF: &str = r#"{
        "shifts": [
            { "id": "S1", "name": "Day", "startTime": "9:00 AM", "endTime": "6:00 PM", "breakMinutes": 60 }
        ],
        "employees": [
            {
                "id": "E1",
                "name": "Asha",
                "wageType": "Monthly",
                "salaryAmount": 30000,
                "weeklyOffs": ["Sunday"],
                "shiftId": "S1",
                "paymentDetails": { "upiId": "asha@upi" }
            },
            { "id": "E2" }
        ],
        "advances": [
            { "employeeId": "E1", "amount": 500, "note": "rent" },
            { "employeeId": "E1", "amount": 0 },
            { "employeeId": "NOBODY", "amount": 100 }
        ]
    }"#;

    struct ImportTestContext {
        temp_dir: TempDir,
        store: MemoryStore,
    }

    impl TestContext for ImportTestContext {
        fn setup() -> Self {
            ImportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                store: MemoryStore::new(),
            }
        }
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_import_staff_file(ctx: &mut ImportTestContext) {
        let path = ctx.temp_dir.path().join("staff.json");
        std::fs::write(&path, STAFF).unwrap();

        let file = StaffFile::read(&path).unwrap();
        let summary = file.apply(&ctx.store, &ctx.store, &ctx.store).unwrap();

        assert_eq!(summary.shifts, 1);
        assert_eq!(summary.employees, 2);
        assert_eq!(summary.advances, 1);

        let asha = ctx.store.employee("E1").unwrap().unwrap();
        assert_eq!(asha.wage_type, WageType::Monthly);
        assert_eq!(asha.shift_id.as_deref(), Some("S1"));
        assert_eq!(asha.payment_details.unwrap().upi(), Some("asha@upi"));

        let bare = ctx.store.employee("E2").unwrap().unwrap();
        assert_eq!(bare.wage_type, WageType::Hourly);
        assert_eq!(bare.salary_amount, 0.0);
        assert_eq!(bare.display_name(), "E2");

        assert_eq!(ctx.store.shift("S1").unwrap().unwrap().break_minutes, 60);

        let open = ctx.store.open_advances().unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].note.as_deref(), Some("rent"));
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_empty_and_invalid_files(ctx: &mut ImportTestContext) {
        let empty = ctx.temp_dir.path().join("empty.json");
        std::fs::write(&empty, "{}").unwrap();
        let summary = StaffFile::read(&empty).unwrap().apply(&ctx.store, &ctx.store, &ctx.store).unwrap();
        assert!(summary.is_empty());

        let broken = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(StaffFile::read(&broken).is_err());

        assert!(StaffFile::read(&ctx.temp_dir.path().join("missing.json")).is_err());
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_deducted_advance_is_not_reopened(ctx: &mut ImportTestContext) {
        let file: StaffFile = serde_json::from_str(
            r#"{
                "employees": [{ "id": "E1", "name": "Asha", "wageType": "Monthly", "salaryAmount": 30000 }],
                "advances": [
                    { "employeeId": "E1", "amount": 5000, "status": "deducted" },
                    { "employeeId": "E1", "amount": 700 }
                ]
            }"#,
        )
        .unwrap();

        let summary = file.apply(&ctx.store, &ctx.store, &ctx.store).unwrap();
        assert_eq!(summary.advances, 1);

        let open = ctx.store.open_advances().unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].amount, 700.0);
        assert!(ctx.store.advances().unwrap().iter().all(|a| a.status == AdvanceStatus::Open));
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_reimport_skips_advances_already_in_ledger(ctx: &mut ImportTestContext) {
        let file: StaffFile = serde_json::from_str(
            r#"{
                "employees": [{ "id": "E1" }],
                "advances": [{ "id": 1, "employeeId": "E1", "amount": 500 }]
            }"#,
        )
        .unwrap();

        assert_eq!(file.apply(&ctx.store, &ctx.store, &ctx.store).unwrap().advances, 1);
        assert_eq!(file.apply(&ctx.store, &ctx.store, &ctx.store).unwrap().advances, 0);
        assert_eq!(ctx.store.advances().unwrap().len(), 1);
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_sqlite_import_writes_everything(ctx: &mut ImportTestContext) {
        let conn = Db::open(ctx.temp_dir.path().join("paybook.db")).unwrap().shared();
        let file: StaffFile = serde_json::from_str(STAFF).unwrap();

        let summary = staff::import(&conn, &file).unwrap();
        assert_eq!((summary.shifts, summary.employees, summary.advances), (1, 2, 1));

        assert_eq!(Shifts::with_connection(conn.clone()).shifts().unwrap().len(), 1);
        assert_eq!(Employees::with_connection(conn.clone()).employees().unwrap().len(), 2);
        let open = Advances::with_connection(conn).open_advances().unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].amount, 500.0);
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_sqlite_import_is_all_or_nothing(ctx: &mut ImportTestContext) {
        let conn = Db::open(ctx.temp_dir.path().join("paybook.db")).unwrap().shared();
        conn.lock()
            .execute_batch(
                "CREATE TRIGGER ledger_frozen BEFORE INSERT ON advances
                 BEGIN SELECT RAISE(ABORT, 'ledger frozen'); END;",
            )
            .unwrap();
        let file: StaffFile = serde_json::from_str(STAFF).unwrap();

        assert!(staff::import(&conn, &file).is_err());

        assert!(Shifts::with_connection(conn.clone()).shifts().unwrap().is_empty());
        assert!(Employees::with_connection(conn.clone()).employees().unwrap().is_empty());
        assert!(Advances::with_connection(conn).advances().unwrap().is_empty());
    }
}
