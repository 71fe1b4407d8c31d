#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModulePayroll,
    PromptCalculationMethod,
    PromptGraceMinutes,
    PromptOvertimeMultiplier,
    PromptMinOvertimeMinutes,

    // === DATABASE MESSAGES ===
    DatabaseUpToDate,
    DatabaseDeleted,
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    MigrationsCompleted,

    // === IMPORT MESSAGES ===
    ImportReading(String), // path
    ImportedShifts(usize),
    ImportedEmployees(usize),
    ImportedAdvances(usize),
    ImportEmpty,

    // === EMPLOYEE MESSAGES ===
    EmployeeNotFound(String),
    NoEmployees,
    ShiftNotFound(String, String), // employee, shift id

    // === ADVANCE MESSAGES ===
    AdvanceApproved(i64, String, String), // id, employee, amount
    AdvanceAmountInvalid(String),
    AdvancesHeader,
    NoAdvances,

    // === ATTENDANCE MESSAGES ===
    AttendanceHeader(String, String), // employee, date

    // === PAYROLL MESSAGES ===
    DraftHeader(String), // date
    DraftTotal(String),
    DraftMissingDetails(usize),
    ConfirmFinalize(usize), // advances to recover
    FinalizeCancelled,
    AdvancesRecovered(usize),
    NothingToRecover,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String),
    ExportNothing,

    // === GENERIC ===
    InvalidDate(String),
    StoreFailed(String),
}
