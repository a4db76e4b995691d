use crate::db::models::DbStudent;
use crate::db::schema::SQLITE_INIT;
use crate::error::RollcallError;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use rollcall_schema::Student;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert (no id) or upsert by id, returning the stored row.
    Save(Student, RpcReplyPort<Result<DbStudent, RollcallError>>),

    /// Full scan of the student table, ordered by id.
    ListAll(RpcReplyPort<Result<Vec<DbStudent>, RollcallError>>),

    /// Get a student by id; `None` when absent.
    GetById(i64, RpcReplyPort<Result<Option<DbStudent>, RollcallError>>),

    /// Delete a student by id, replying with the number of rows removed.
    Delete(i64, RpcReplyPort<Result<u64, RollcallError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn save(&self, student: Student) -> Result<DbStudent, RollcallError> {
        ractor::call!(self.actor, DbActorMessage::Save, student)
            .map_err(|e| RollcallError::RactorError(format!("DbActor Save RPC failed: {e}")))?
    }

    pub async fn list_all(&self) -> Result<Vec<DbStudent>, RollcallError> {
        ractor::call!(self.actor, DbActorMessage::ListAll)
            .map_err(|e| RollcallError::RactorError(format!("DbActor ListAll RPC failed: {e}")))?
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbStudent>, RollcallError> {
        ractor::call!(self.actor, DbActorMessage::GetById, id)
            .map_err(|e| RollcallError::RactorError(format!("DbActor GetById RPC failed: {e}")))?
    }

    pub async fn delete(&self, id: i64) -> Result<u64, RollcallError> {
        ractor::call!(self.actor, DbActorMessage::Delete, id)
            .map_err(|e| RollcallError::RactorError(format!("DbActor Delete RPC failed: {e}")))?
    }

    /// Stops the actor; the pool is dropped with its state.
    pub fn stop(&self) {
        self.actor.stop(Some("shutdown".to_string()));
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Save(student, reply) => {
                let res = self.save(&state.pool, student).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListAll(reply) => {
                let res = self.list_all(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetById(id, reply) => {
                let res = self.get_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Delete(id, reply) => {
                let res = self.delete(&state.pool, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn save(&self, pool: &SqlitePool, student: Student) -> Result<DbStudent, RollcallError> {
        let now = Utc::now();
        // A NULL id lets SQLite assign a rowid not held by any live row.
        let row = sqlx::query_as::<_, DbStudent>(
            r#"
        INSERT INTO student (id, name, email, branch, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email,
            branch = excluded.branch,
            updated_at = excluded.updated_at
        RETURNING id, name, email, branch, created_at, updated_at
        "#,
        )
        .bind(student.id)
        .bind(student.name)
        .bind(student.email)
        .bind(student.branch)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        debug!(id = row.id, "student row saved");
        Ok(row)
    }

    async fn list_all(&self, pool: &SqlitePool) -> Result<Vec<DbStudent>, RollcallError> {
        let rows = sqlx::query_as::<_, DbStudent>(
            r#"
        SELECT id, name, email, branch, created_at, updated_at
        FROM student
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbStudent>, RollcallError> {
        let row = sqlx::query_as::<_, DbStudent>(
            r#"
        SELECT id, name, email, branch, created_at, updated_at
        FROM student
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, pool: &SqlitePool, id: i64) -> Result<u64, RollcallError> {
        let affected = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();

        debug!(id, affected, "student row delete");
        Ok(affected)
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is unnamed so independent instances can coexist in one process.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, RollcallError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| RollcallError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), RollcallError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
