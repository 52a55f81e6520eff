use serde::{Deserialize, Serialize};

/// The "current user" as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    /// Optional avatar location. Servers may send it as `avatarUrl`.
    #[serde(default, alias = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_payload() {
        let record: UserRecord =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(record, UserRecord::new("Ada", "ada@example.com"));
    }

    #[test]
    fn accepts_camel_case_avatar() {
        let record: UserRecord = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","avatarUrl":"https://x/a.png"}"#,
        )
        .unwrap();
        assert_eq!(record.avatar_url.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id":7,"name":"Bob","email":"bob@x.com"}"#).unwrap();
        assert_eq!(record.name, "Bob");
    }

    #[test]
    fn missing_email_is_an_error() {
        let result = serde_json::from_str::<UserRecord>(r#"{"name":"Bob"}"#);
        assert!(result.is_err());
    }
}
