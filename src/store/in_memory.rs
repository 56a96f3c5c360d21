//! In-memory implementation of [`PayrollRepository`] for testing and development.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, EmployeeStatus, PayrollEntry, PayrollMonth};

use super::PayrollRepository;

/// In-memory payroll repository.
///
/// Uses `RwLock` for thread-safe access. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    employees: Arc<RwLock<HashMap<String, Employee>>>,
    attendance: Arc<RwLock<HashMap<String, Vec<AttendanceRecord>>>>,
    payroll: Arc<RwLock<Vec<PayrollEntry>>>,
}

fn lock_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::Storage {
        message: format!("Failed to acquire lock: {}", e),
    }
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee.
    pub fn upsert_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut employees = self.employees.write().map_err(lock_error)?;
        employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Records a day of attendance for an employee.
    ///
    /// A record for the same date replaces the existing one.
    pub fn record_attendance(
        &self,
        employee_id: &str,
        record: AttendanceRecord,
    ) -> EngineResult<()> {
        let mut attendance = self.attendance.write().map_err(lock_error)?;
        let records = attendance.entry(employee_id.to_string()).or_default();
        records.retain(|r| r.date != record.date);
        records.push(record);
        Ok(())
    }
}

#[async_trait]
impl PayrollRepository for InMemoryRepository {
    async fn get_employee(&self, id: &str) -> EngineResult<Option<Employee>> {
        let employees = self.employees.read().map_err(lock_error)?;
        Ok(employees.get(id).cloned())
    }

    async fn list_employees_by_status(
        &self,
        status: EmployeeStatus,
    ) -> EngineResult<Vec<Employee>> {
        let employees = self.employees.read().map_err(lock_error)?;
        let mut matching: Vec<Employee> = employees
            .values()
            .filter(|e| e.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.employee_number.cmp(&b.employee_number));
        Ok(matching)
    }

    async fn list_attendance(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let attendance = self.attendance.read().map_err(lock_error)?;
        let mut records: Vec<AttendanceRecord> = attendance
            .get(employee_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.date >= from && r.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn has_payroll_for_month(&self, month: PayrollMonth) -> EngineResult<bool> {
        let payroll = self.payroll.read().map_err(lock_error)?;
        Ok(payroll.iter().any(|entry| entry.month() == month))
    }

    async fn list_payroll(&self, month: PayrollMonth) -> EngineResult<Vec<PayrollEntry>> {
        let payroll = self.payroll.read().map_err(lock_error)?;
        let mut entries: Vec<PayrollEntry> = payroll
            .iter()
            .filter(|entry| entry.month() == month)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.employee_number.cmp(&b.employee_number));
        Ok(entries)
    }

    async fn save_payroll_batch(&self, entries: Vec<PayrollEntry>) -> EngineResult<()> {
        let mut payroll = self.payroll.write().map_err(lock_error)?;

        // Checked under the write lock so concurrent runs cannot both succeed.
        let mut seen: HashSet<(String, PayrollMonth)> = payroll
            .iter()
            .map(|entry| (entry.employee_id.clone(), entry.month()))
            .collect();
        for entry in &entries {
            if !seen.insert((entry.employee_id.clone(), entry.month())) {
                return Err(EngineError::PayrollAlreadyProcessed {
                    month: entry.month().to_string(),
                });
            }
        }

        payroll.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, PayrollRecord};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_employee(id: &str, number: &str, status: EmployeeStatus) -> Employee {
        Employee {
            id: id.to_string(),
            employee_number: number.to_string(),
            name: format!("Employee {}", id),
            status,
            base_salary: Decimal::new(50000, 0),
            allowances: Decimal::ZERO,
            join_date: make_date("2023-01-01"),
            probation_months: None,
        }
    }

    fn make_attendance(date: &str, hours: i64) -> AttendanceRecord {
        AttendanceRecord {
            date: make_date(date),
            status: AttendanceStatus::Present,
            hours_worked: Some(Decimal::new(hours, 0)),
            check_in: None,
            check_out: None,
        }
    }

    fn make_entry(employee: &Employee, month: &str) -> PayrollEntry {
        let month: PayrollMonth = month.parse().unwrap();
        PayrollEntry::processed(employee, PayrollRecord::zero(month), "admin", Utc::now())
    }

    #[tokio::test]
    async fn test_get_employee() {
        let repo = InMemoryRepository::new();
        repo.upsert_employee(make_employee("e1", "EMP-1", EmployeeStatus::Active))
            .unwrap();

        assert!(repo.get_employee("e1").await.unwrap().is_some());
        assert!(repo.get_employee("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_employees_by_status_is_sorted() {
        let repo = InMemoryRepository::new();
        repo.upsert_employee(make_employee("e2", "EMP-2", EmployeeStatus::Active))
            .unwrap();
        repo.upsert_employee(make_employee("e1", "EMP-1", EmployeeStatus::Active))
            .unwrap();
        repo.upsert_employee(make_employee("e3", "EMP-3", EmployeeStatus::Inactive))
            .unwrap();

        let active = repo
            .list_employees_by_status(EmployeeStatus::Active)
            .await
            .unwrap();
        let ids: Vec<&str> = active.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[tokio::test]
    async fn test_list_attendance_filters_by_inclusive_range() {
        let repo = InMemoryRepository::new();
        for date in ["2025-01-31", "2025-02-01", "2025-02-28", "2025-03-01"] {
            repo.record_attendance("e1", make_attendance(date, 8)).unwrap();
        }

        let records = repo
            .list_attendance("e1", make_date("2025-02-01"), make_date("2025-02-28"))
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![make_date("2025-02-01"), make_date("2025-02-28")]);
    }

    #[tokio::test]
    async fn test_record_attendance_replaces_same_date() {
        let repo = InMemoryRepository::new();
        repo.record_attendance("e1", make_attendance("2025-02-03", 8))
            .unwrap();
        repo.record_attendance("e1", make_attendance("2025-02-03", 10))
            .unwrap();

        let records = repo
            .list_attendance("e1", make_date("2025-02-01"), make_date("2025-02-28"))
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hours_worked, Some(Decimal::new(10, 0)));
    }

    #[tokio::test]
    async fn test_batch_is_all_or_nothing() {
        let repo = InMemoryRepository::new();
        let e1 = make_employee("e1", "EMP-1", EmployeeStatus::Active);
        let e2 = make_employee("e2", "EMP-2", EmployeeStatus::Active);

        repo.save_payroll_batch(vec![make_entry(&e1, "2025-02")])
            .await
            .unwrap();

        // e2 is new but e1 is a duplicate, so nothing from this batch lands.
        let result = repo
            .save_payroll_batch(vec![make_entry(&e2, "2025-02"), make_entry(&e1, "2025-02")])
            .await;
        assert!(matches!(
            result,
            Err(EngineError::PayrollAlreadyProcessed { .. })
        ));

        let month: PayrollMonth = "2025-02".parse().unwrap();
        let entries = repo.list_payroll(month).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].employee_id, "e1");
    }

    #[tokio::test]
    async fn test_has_payroll_for_month() {
        let repo = InMemoryRepository::new();
        let e1 = make_employee("e1", "EMP-1", EmployeeStatus::Active);
        repo.save_payroll_batch(vec![make_entry(&e1, "2025-02")])
            .await
            .unwrap();

        assert!(repo
            .has_payroll_for_month("2025-02".parse().unwrap())
            .await
            .unwrap());
        assert!(!repo
            .has_payroll_for_month("2025-03".parse().unwrap())
            .await
            .unwrap());
    }
}
