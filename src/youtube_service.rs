use serde_json::Value;
use url::Url;

use crate::config::{Config, GOOGLE_AUTH_URL};
use crate::errors::ApiError;
use crate::models::YoutubeCredentials;

const YOUTUBE_SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/youtube",
    "https://www.googleapis.com/auth/youtube.upload",
    "https://www.googleapis.com/auth/youtube.readonly",
];

/// Build the Google OAuth consent URL. The redirect URI is derived from the
/// configured public base URL and must match the one registered in the
/// Google API console.
pub fn generate_auth_url(config: &Config) -> String {
    let redirect_uri = config.redirect_uri();
    let scope = YOUTUBE_SCOPES.join(" ");
    let auth_url = Url::parse_with_params(
        GOOGLE_AUTH_URL,
        &[
            ("client_id", config.youtube_client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("response_type", "code"),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .expect("static auth endpoint must parse");
    auth_url.to_string()
}

/// Exchange an authorization code for tokens, then look up the account's
/// channel. Both HTTP calls must succeed and the account must own a channel.
pub async fn exchange_code_for_tokens(
    http: &reqwest::Client,
    config: &Config,
    code: &str,
) -> Result<YoutubeCredentials, ApiError> {
    let redirect_uri = config.redirect_uri();
    let params = [
        ("code", code),
        ("client_id", config.youtube_client_id.as_str()),
        ("client_secret", config.youtube_client_secret.as_str()),
        ("redirect_uri", redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
    ];

    let token_response = http
        .post(config.oauth_token_url.as_str())
        .form(&params)
        .send()
        .await
        .map_err(|e| ApiError::ExternalService(format!("Failed to reach token endpoint: {}", e)))?;

    if !token_response.status().is_success() {
        let status = token_response.status();
        let body = token_response.text().await.unwrap_or_default();
        return Err(ApiError::ExternalService(format!(
            "Failed to exchange code for token ({}): {}",
            status, body
        )));
    }

    let token_data: Value = token_response
        .json()
        .await
        .map_err(|e| ApiError::ExternalService(format!("Invalid token response: {}", e)))?;
    let access_token = token_data["access_token"].as_str().unwrap_or_default().to_string();
    let refresh_token = token_data["refresh_token"].as_str().unwrap_or_default().to_string();

    let channel_response = http
        .get(format!(
            "{}/channels?part=snippet&mine=true",
            config.youtube_api_base
        ))
        .bearer_auth(&access_token)
        .send()
        .await
        .map_err(|e| ApiError::ExternalService(format!("Failed to reach channel endpoint: {}", e)))?;

    if !channel_response.status().is_success() {
        let status = channel_response.status();
        let body = channel_response.text().await.unwrap_or_default();
        return Err(ApiError::ExternalService(format!(
            "Failed to get channel info ({}): {}",
            status, body
        )));
    }

    let channel_data: Value = channel_response
        .json()
        .await
        .map_err(|e| ApiError::ExternalService(format!("Invalid channel response: {}", e)))?;

    match channel_data["items"].as_array().and_then(|items| items.first()) {
        Some(item) => Ok(YoutubeCredentials {
            access_token,
            refresh_token,
            channel_id: item["id"].as_str().unwrap_or_default().to_string(),
            channel_name: item["snippet"]["title"].as_str().unwrap_or_default().to_string(),
        }),
        None => Err(ApiError::NotFound(
            "No YouTube channel found for this account".to_string(),
        )),
    }
}
