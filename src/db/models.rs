use chrono::{DateTime, Utc};
use rollcall_schema::Student;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbStudent {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub branch: Option<String>,
    /// Bookkeeping only; never sent over the wire.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbStudent> for Student {
    fn from(row: DbStudent) -> Self {
        Student {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            branch: row.branch,
        }
    }
}
