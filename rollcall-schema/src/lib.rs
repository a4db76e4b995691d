pub mod student;

pub use student::{DELETE_CONFIRMATION, Student};
