//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The email address is unique across the directory and serves as the
/// lookup key; the numeric id is assigned by the service on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "Ivan Ivanov")]
    pub name: String,
    /// User email address (unique)
    #[schema(example = "i.i.ivanov@mail.com")]
    pub email: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_exactly_three_fields() {
        let user = User::new(1, "Ivan Ivanov".into(), "i.i.ivanov@mail.com".into());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ivan Ivanov",
                "email": "i.i.ivanov@mail.com",
            })
        );
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
