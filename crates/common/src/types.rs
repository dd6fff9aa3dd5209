use serde::Serialize;

/// Liveness report returned by the health endpoint.
///
/// Serializes as a single-field object, e.g. `{"status":"UP"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    /// The only status this service ever reports while it is running.
    pub const UP: Self = Self { status: "UP" };
}

/// Fixed, ordered list of user names.
///
/// Serializes as a flat JSON array of strings; order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserList(&'static [&'static str]);

impl UserList {
    pub const DEFAULT: Self = Self(&["alice", "bob", "charlie"]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_to_single_field_object() {
        let json = serde_json::to_string(&HealthStatus::UP).unwrap();
        assert_eq!(json, r#"{"status":"UP"}"#);
    }

    #[test]
    fn user_list_serializes_to_flat_string_array() {
        let json = serde_json::to_string(&UserList::DEFAULT).unwrap();
        assert_eq!(json, r#"["alice","bob","charlie"]"#);
    }

    #[test]
    fn user_list_preserves_order() {
        let value = serde_json::to_value(UserList::DEFAULT).unwrap();
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(names, ["alice", "bob", "charlie"]);
    }

    #[test]
    fn serialization_is_stable_across_calls() {
        let first = serde_json::to_vec(&UserList::DEFAULT).unwrap();
        let second = serde_json::to_vec(&UserList::DEFAULT).unwrap();
        assert_eq!(first, second);
    }
}
