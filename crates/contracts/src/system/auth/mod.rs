use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub is_admin: bool,
}

/// Identity of the signed-in user as mirrored by the navigation shell.
///
/// Every field except `uid` is optional; the shell substitutes placeholders
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<UserInfo> for Session {
    fn from(user: UserInfo) -> Self {
        let display_name = user
            .full_name
            .filter(|name| !name.trim().is_empty())
            .or(Some(user.username));
        Self {
            uid: user.id,
            display_name,
            email: user.email,
            photo_url: user.photo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            username: "jdoe".to_string(),
            full_name: full_name.map(str::to_string),
            email: Some("jdoe@example.com".to_string()),
            photo_url: None,
            is_admin: false,
        }
    }

    #[test]
    fn test_session_prefers_full_name() {
        let session = Session::from(user(Some("Jane Doe")));
        assert_eq!(session.uid, "u-1");
        assert_eq!(session.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(session.email.as_deref(), Some("jdoe@example.com"));
    }

    #[test]
    fn test_session_falls_back_to_username() {
        assert_eq!(
            Session::from(user(None)).display_name.as_deref(),
            Some("jdoe")
        );
        assert_eq!(
            Session::from(user(Some("  "))).display_name.as_deref(),
            Some("jdoe")
        );
    }

    #[test]
    fn test_user_info_without_photo_field() {
        let json = r#"{"id":"7","username":"ann","full_name":null,"email":null,"is_admin":true}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.photo_url, None);
        assert!(info.is_admin);
    }
}
