//! Student use-case service.
//!
//! Thin layer over [`StudentRepository`]: the only logic it owns is the
//! read-modify-write of `update`, which is not atomic. Two concurrent updates
//! of the same id race and the last write wins.

use crate::db::StudentRepository;
use crate::error::RollcallError;
use rollcall_schema::Student;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Persists `student`; storage assigns an id when none is given, otherwise
    /// the row with that id is overwritten.
    pub async fn save(&self, student: Student) -> Result<Student, RollcallError> {
        let saved = self.repo.save(student).await?;
        info!(id = ?saved.id, "student saved");
        Ok(saved)
    }

    pub async fn list_all(&self) -> Result<Vec<Student>, RollcallError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "students listed");
        Ok(all)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, RollcallError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrites name, email and branch of an existing record.
    ///
    /// Returns `None` without writing when `id` is unknown. The id carried by
    /// `new_data` is ignored.
    pub async fn update(
        &self,
        id: i64,
        new_data: Student,
    ) -> Result<Option<Student>, RollcallError> {
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            debug!(id, "update skipped, student not found");
            return Ok(None);
        };

        current.overwrite_from(&new_data);
        let updated = self.repo.save(current).await?;
        info!(id, "student updated");
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i64) -> Result<(), RollcallError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "student deleted");
        Ok(())
    }
}
