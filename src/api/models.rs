use serde::{Deserialize, Serialize};

/// A named health initiative clients can be enrolled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
}

/// A registered individual and the programs they are enrolled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub programs: Vec<Program>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProgram {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    /// Program ids to enroll the client in.
    pub programs: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_programs_field() {
        let client: Client =
            serde_json::from_str(r#"{"id": 3, "name": "Ann", "email": "ann@example.com"}"#)
                .unwrap();
        assert!(client.programs.is_empty());
    }

    #[test]
    fn test_new_client_body_shape() {
        let body = serde_json::to_value(NewClient {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            programs: vec![1, 4],
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ann", "email": "ann@example.com", "programs": [1, 4]})
        );
    }
}
