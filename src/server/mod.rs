pub mod router;
pub mod routes;

pub use router::{RollcallState, rollcall_router};
