//! Employee directory kept in SQLite.
//!
//! Weekly offs are stored as a comma-separated list of day names and payment
//! details are flattened into nullable columns. An employee with no payment
//! columns set reads back with `payment_details: None`.

use crate::db::db::Db;
use crate::db::repository::{EmployeeStore, RepositoryError};
use crate::libs::employee::{Employee, PaymentDetails, WageType};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const SELECT_FIELDS: &str = "SELECT id, name, wage_type, salary_amount, weekly_offs, shift_id,
    upi_id, account_number, ifsc_code, cash_preference FROM employees";
const UPSERT: &str = "INSERT OR REPLACE INTO employees
    (id, name, wage_type, salary_amount, weekly_offs, shift_id, upi_id, account_number, ifsc_code, cash_preference)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

pub struct Employees {
    conn: Arc<Mutex<Connection>>,
}

impl Employees {
    pub fn new() -> Result<Self, RepositoryError> {
        Ok(Self::with_connection(Db::new()?.shared()))
    }

    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Employees { conn }
    }

    /// Saves every employee in one transaction.
    pub fn save_all(&self, employees: &[Employee]) -> Result<usize, RepositoryError> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        for employee in employees {
            insert(&tx, employee)?;
        }
        tx.commit()?;
        Ok(employees.len())
    }
}

pub(crate) fn insert(conn: &Connection, employee: &Employee) -> rusqlite::Result<usize> {
    let payment = employee.payment_details.clone().unwrap_or_default();
    conn.execute(
        UPSERT,
        params![
            employee.id,
            employee.name,
            employee.wage_type.to_string(),
            employee.salary_amount,
            employee.weekly_offs.join(","),
            employee.shift_id,
            payment.upi_id,
            payment.account_number,
            payment.ifsc_code,
            payment.explicit_cash_preference,
        ],
    )
}

fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
    let wage_type = row
        .get::<_, String>(2)?
        .parse::<WageType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;
    let weekly_offs = row
        .get::<_, String>(4)?
        .split(',')
        .map(str::trim)
        .filter(|day| !day.is_empty())
        .map(String::from)
        .collect();
    let payment = PaymentDetails {
        upi_id: row.get(6)?,
        account_number: row.get(7)?,
        ifsc_code: row.get(8)?,
        explicit_cash_preference: row.get(9)?,
    };
    let has_payment = payment.upi_id.is_some()
        || payment.account_number.is_some()
        || payment.ifsc_code.is_some()
        || payment.explicit_cash_preference;

    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        wage_type,
        salary_amount: row.get(3)?,
        weekly_offs,
        shift_id: row.get(5)?,
        payment_details: has_payment.then_some(payment),
    })
}

fn corrupt(e: rusqlite::Error) -> RepositoryError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(_, _, reason) => RepositoryError::Corrupt {
            table: "employees",
            reason: reason.to_string(),
        },
        other => RepositoryError::Database(other),
    }
}

impl EmployeeStore for Employees {
    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_FIELDS))?;
        let employees = stmt
            .query_map([], employee_from_row)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(corrupt)?;
        Ok(employees)
    }

    fn employee(&self, id: &str) -> Result<Option<Employee>, RepositoryError> {
        let conn = self.conn.lock();
        conn.query_row(&format!("{} WHERE id = ?1", SELECT_FIELDS), [id], employee_from_row)
            .optional()
            .map_err(corrupt)
    }

    fn save_employee(&self, employee: &Employee) -> Result<(), RepositoryError> {
        insert(&self.conn.lock(), employee)?;
        Ok(())
    }
}
