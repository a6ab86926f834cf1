use serde::{Deserialize, Serialize};

/// Body of `POST /auth/token/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access/refresh pair issued by the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(alias = "access_token")]
    pub access: String,
    #[serde(alias = "refresh_token")]
    pub refresh: String,
}

/// Body of `POST /auth/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(alias = "access_token")]
    pub access: String,
    /// present when the backend rotates refresh tokens
    #[serde(default, alias = "refresh_token")]
    pub refresh: Option<String>,
}

pub const LOGIN_PATH: &str = "/auth/token/";
pub const REFRESH_PATH: &str = "/auth/token/refresh/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_accepts_both_spellings() {
        let a: TokenPair = serde_json::from_str(r#"{"access": "a", "refresh": "r"}"#).unwrap();
        let b: TokenPair =
            serde_json::from_str(r#"{"access_token": "a", "refresh_token": "r"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_refresh_without_rotation() {
        let r: RefreshResponse = serde_json::from_str(r#"{"access": "new"}"#).unwrap();
        assert_eq!(r.access, "new");
        assert!(r.refresh.is_none());
    }
}
