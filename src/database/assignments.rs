use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::Row;

use crate::database::Database;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::domain::ports::user_directory::UserDirectory;
use crate::models::assignment::AdvocateAssignment;
use crate::models::user::User;

impl Database {
    async fn hydrate_assignment(&self, row: &AnyRow) -> DomainResult<AdvocateAssignment> {
        let patient_username: String = row.try_get("patient_username")?;
        let advocate_username: String = row.try_get("advocate_username")?;

        let patient = self
            .find_by_username(&patient_username)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Assignment references unknown patient {}",
                    patient_username
                ))
            })?;
        let advocate = self
            .find_by_username(&advocate_username)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Assignment references unknown advocate {}",
                    advocate_username
                ))
            })?;

        Ok(AdvocateAssignment::hydrate(
            row.try_get("id")?,
            patient,
            advocate,
            row.try_get("office_visit_permission")?,
            row.try_get("billing_permission")?,
            row.try_get("prescription_permission")?,
        ))
    }

    async fn hydrate_assignments(
        &self,
        rows: Vec<AnyRow>,
    ) -> DomainResult<Vec<AdvocateAssignment>> {
        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(self.hydrate_assignment(&row).await?);
        }
        Ok(assignments)
    }
}

#[async_trait]
impl AssignmentRepository for Database {
    async fn save(&self, assignment: &AdvocateAssignment) -> DomainResult<()> {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        // Single statement: on an existing id the three grant columns are
        // rewritten together, never one at a time.
        sqlx::query(
            "INSERT INTO advocate_assignments
                 (id, patient_username, advocate_username,
                  office_visit_permission, billing_permission, prescription_permission,
                  created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 office_visit_permission = excluded.office_visit_permission,
                 billing_permission = excluded.billing_permission,
                 prescription_permission = excluded.prescription_permission",
        )
        .bind(assignment.id())
        .bind(&assignment.patient().username)
        .bind(&assignment.advocate().username)
        .bind(assignment.office_visit_permission())
        .bind(assignment.billing_permission())
        .bind(assignment.prescription_permission())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::info!("Assignment saved: {}", assignment);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<AdvocateAssignment>> {
        let row = sqlx::query(
            "SELECT id, patient_username, advocate_username,
                    office_visit_permission, billing_permission, prescription_permission
             FROM advocate_assignments
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate_assignment(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<AdvocateAssignment>> {
        let rows = sqlx::query(
            "SELECT id, patient_username, advocate_username,
                    office_visit_permission, billing_permission, prescription_permission
             FROM advocate_assignments
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_assignments(rows).await
    }

    async fn find_by_patient(&self, patient: &User) -> DomainResult<Vec<AdvocateAssignment>> {
        let rows = sqlx::query(
            "SELECT id, patient_username, advocate_username,
                    office_visit_permission, billing_permission, prescription_permission
             FROM advocate_assignments
             WHERE patient_username = ?
             ORDER BY rowid",
        )
        .bind(&patient.username)
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_assignments(rows).await
    }

    async fn find_by_advocate(&self, advocate: &User) -> DomainResult<Vec<AdvocateAssignment>> {
        let rows = sqlx::query(
            "SELECT id, patient_username, advocate_username,
                    office_visit_permission, billing_permission, prescription_permission
             FROM advocate_assignments
             WHERE advocate_username = ?
             ORDER BY rowid",
        )
        .bind(&advocate.username)
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_assignments(rows).await
    }

    async fn find_by_patient_and_advocate(
        &self,
        patient: &User,
        advocate: &User,
    ) -> DomainResult<Option<AdvocateAssignment>> {
        let row = sqlx::query(
            "SELECT id, patient_username, advocate_username,
                    office_visit_permission, billing_permission, prescription_permission
             FROM advocate_assignments
             WHERE patient_username = ? AND advocate_username = ?
             ORDER BY rowid
             LIMIT 1",
        )
        .bind(&patient.username)
        .bind(&advocate.username)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate_assignment(&row).await?)),
            None => Ok(None),
        }
    }

    async fn count(&self) -> DomainResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM advocate_assignments")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    async fn delete_all(&self) -> DomainResult<()> {
        sqlx::query("DELETE FROM advocate_assignments")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
