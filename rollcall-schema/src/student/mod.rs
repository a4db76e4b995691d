mod record;

pub use record::Student;

/// Body returned by `DELETE /student/{id}`, whether or not a row existed.
pub const DELETE_CONFIRMATION: &str = "Student Deleted Successfully!";
