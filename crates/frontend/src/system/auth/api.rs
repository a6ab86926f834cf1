use contracts::system::auth::{
    LoginRequest, RefreshRequest, RefreshResponse, TokenPair, LOGIN_PATH, REFRESH_PATH,
};

use crate::shared::api::{ApiError, AuthMode, HttpResourceClient};

/// Exchange credentials for a token pair. Sent without the auth header.
pub async fn login(username: String, password: String) -> Result<TokenPair, ApiError> {
    let request = LoginRequest { username, password };
    HttpResourceClient::from_env()
        .post_json(LOGIN_PATH, &request, AuthMode::Anonymous, "Login failed")
        .await
}

/// New access token from a refresh token
pub async fn refresh_token(refresh: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh };
    HttpResourceClient::from_env()
        .post_json(
            REFRESH_PATH,
            &request,
            AuthMode::Anonymous,
            "Session expired",
        )
        .await
}
