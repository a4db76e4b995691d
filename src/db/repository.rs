use crate::db::actor::DbActorHandle;
use crate::error::RollcallError;
use async_trait::async_trait;
use rollcall_schema::Student;

/// Raw persistence operations over the `student` table.
///
/// Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts when `id` is `None`, otherwise overwrites (or creates) the row with that id.
    async fn save(&self, student: Student) -> Result<Student, RollcallError>;

    async fn find_all(&self) -> Result<Vec<Student>, RollcallError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, RollcallError>;

    /// Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), RollcallError>;
}

#[async_trait]
impl StudentRepository for DbActorHandle {
    async fn save(&self, student: Student) -> Result<Student, RollcallError> {
        Ok(DbActorHandle::save(self, student).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<Student>, RollcallError> {
        let rows = self.list_all().await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, RollcallError> {
        Ok(self.get_by_id(id).await?.map(Student::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RollcallError> {
        self.delete(id).await.map(|_| ())
    }
}
