mod rollcall;

pub use rollcall::{ApiErrorBody, ApiErrorObject, RollcallError};
