use crate::server::router::RollcallState;
use axum::{Router, routing::get};

pub mod handlers;

pub fn router() -> Router<RollcallState> {
    Router::new()
        .route(
            "/student",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/student/{id}",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
}
