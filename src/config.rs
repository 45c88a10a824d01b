use std::env;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub youtube_client_id: String,
    pub youtube_client_secret: String,
    pub public_base_url: String,
    pub openai_api_base: String,
    pub oauth_token_url: String,
    pub youtube_api_base: String,
}

impl Config {
    pub fn from_env() -> Config {
        let openai_api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let youtube_client_id =
            env::var("YOUTUBE_CLIENT_ID").expect("YOUTUBE_CLIENT_ID must be set");
        let youtube_client_secret =
            env::var("YOUTUBE_CLIENT_SECRET").expect("YOUTUBE_CLIENT_SECRET must be set");

        // PUBLIC_DOMAINS is a comma-separated list of externally reachable
        // domains; the first entry anchors the OAuth redirect URI.
        let domains = env::var("PUBLIC_DOMAINS").expect("PUBLIC_DOMAINS must be set");
        let domain = domains
            .split(',')
            .map(str::trim)
            .find(|d| !d.is_empty())
            .expect("PUBLIC_DOMAINS must contain at least one domain")
            .to_string();

        Config {
            openai_api_key,
            youtube_client_id,
            youtube_client_secret,
            public_base_url: format!("https://{}", domain),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            oauth_token_url: env::var("OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_OAUTH_TOKEN_URL.to_string()),
            youtube_api_base: env::var("YOUTUBE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE.to_string()),
        }
    }

    pub fn redirect_uri(&self) -> String {
        format!("{}/youtube-callback", self.public_base_url)
    }
}
