use crate::error::RollcallError;
use crate::server::router::RollcallState;
use crate::utils::logging::debug_payload;
use axum::{
    Json,
    extract::{Path, State},
};
use rollcall_schema::{DELETE_CONFIRMATION, Student};

/// POST /student
pub async fn create_student(
    State(state): State<RollcallState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, RollcallError> {
    debug_payload("POST /student", None, &student);
    let saved = state.students.save(student).await?;
    Ok(Json(saved))
}

/// GET /student
pub async fn list_students(
    State(state): State<RollcallState>,
) -> Result<Json<Vec<Student>>, RollcallError> {
    Ok(Json(state.students.list_all().await?))
}

/// GET /student/{id}
///
/// An unknown id is answered with `200` and a JSON `null` body.
pub async fn get_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Student>>, RollcallError> {
    Ok(Json(state.students.get_by_id(id).await?))
}

/// PUT /student/{id}
///
/// Same `null` convention as `get_student` when the id is unknown.
pub async fn update_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
    Json(student): Json<Student>,
) -> Result<Json<Option<Student>>, RollcallError> {
    debug_payload("PUT /student/{id}", Some(id), &student);
    Ok(Json(state.students.update(id, student).await?))
}

/// DELETE /student/{id}
pub async fn delete_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
) -> Result<&'static str, RollcallError> {
    state.students.delete(id).await?;
    Ok(DELETE_CONFIRMATION)
}
