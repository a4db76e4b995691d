use serde::{Deserialize, Serialize};

/// Student record as it travels over HTTP.
///
/// Every field is optional on input: there is no validation, and a missing
/// field is persisted as `NULL`. On output all four keys are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            branch: Some(branch.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Copies the mutable fields from `other`. `id` is never touched.
    pub fn overwrite_from(&mut self, other: &Student) {
        self.name.clone_from(&other.name);
        self.email.clone_from(&other.email);
        self.branch.clone_from(&other.branch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let s: Student = serde_json::from_value(json!({ "name": "A" })).unwrap();
        assert_eq!(s.id, None);
        assert_eq!(s.name.as_deref(), Some("A"));
        assert_eq!(s.email, None);
        assert_eq!(s.branch, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let s: Student =
            serde_json::from_value(json!({ "id": 4, "branch": "EE", "extra": true })).unwrap();
        assert_eq!(s.id, Some(4));
        assert_eq!(s.branch.as_deref(), Some("EE"));
    }

    #[test]
    fn serializes_nulls_for_absent_fields() {
        let s = Student {
            id: Some(1),
            name: Some("A".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({ "id": 1, "name": "A", "email": null, "branch": null })
        );
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut current = Student::new("A", "a@x.com", "CS").with_id(1);
        let incoming = Student::new("B", "b@x.com", "ME").with_id(99);
        current.overwrite_from(&incoming);

        assert_eq!(current, Student::new("B", "b@x.com", "ME").with_id(1));
    }

    #[test]
    fn overwrite_copies_nulls() {
        let mut current = Student::new("A", "a@x.com", "CS").with_id(7);
        current.overwrite_from(&Student::default());

        assert_eq!(current.id, Some(7));
        assert_eq!(current.name, None);
        assert_eq!(current.email, None);
        assert_eq!(current.branch, None);
    }
}
