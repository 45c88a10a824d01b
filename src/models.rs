use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    // bcrypt hash, never sent over the wire
    #[serde(skip_serializing)]
    pub password: String,
    pub youtube_access_token: Option<String>,
    pub youtube_refresh_token: Option<String>,
    pub youtube_channel_id: Option<String>,
    pub youtube_channel_name: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct YoutubeCredentials {
    pub access_token: String,
    pub refresh_token: String,
    pub channel_id: String,
    pub channel_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSettings {
    pub id: i32,
    pub user_id: i32,
    pub channel_name: String,
    pub channel_category: String,
    pub channel_description: String,
    pub content_types: Vec<String>,
    pub target_language: String,
    pub target_age_group: Option<String>,
    pub youtube_channel_link: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChannelSettings {
    pub user_id: i32,
    pub channel_name: String,
    pub channel_category: String,
    pub channel_description: String,
    pub content_types: Vec<String>,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default)]
    pub target_age_group: Option<String>,
    #[serde(default)]
    pub youtube_channel_link: Option<String>,
}

fn default_target_language() -> String {
    "vietnamese".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ChannelSettingsUpdate {
    pub channel_name: Option<String>,
    pub channel_category: Option<String>,
    pub channel_description: Option<String>,
    pub content_types: Option<Vec<String>>,
    pub target_language: Option<String>,
    pub target_age_group: Option<String>,
    pub youtube_channel_link: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Draft,
    Processing,
    Published,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub youtube_video_id: Option<String>,
    pub status: VideoStatus,
    pub category: String,
    pub trend_score: i32,
    pub published_at: Option<NaiveDateTime>,
    pub scheduled_for: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub status: VideoStatus,
    pub category: String,
    pub trend_score: i32,
    pub scheduled_for: Option<NaiveDateTime>,
}

// The render/upload job that would flip status to published or failed is
// not implemented; these fields exist for that future transition.
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub youtube_video_id: Option<String>,
    pub status: Option<VideoStatus>,
    pub category: Option<String>,
    pub trend_score: Option<i32>,
    pub published_at: Option<NaiveDateTime>,
    pub scheduled_for: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTopic {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub id: i32,
    pub category: String,
    pub keywords: Vec<String>,
    pub topics: Vec<TrendTopic>,
    pub score: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewTrend {
    pub category: String,
    pub keywords: Vec<String>,
    pub topics: Vec<TrendTopic>,
    pub score: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackRequest {
    pub code: Option<String>,
    pub user_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    pub user_id: Option<i32>,
    pub topic_id: Option<String>,
    pub category: Option<String>,
}
