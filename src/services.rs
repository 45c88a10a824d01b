use log::info;

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{NewTrend, NewVideo, Trend, TrendTopic, Video, VideoStatus};
use crate::openai_service;
use crate::store::MemStore;

// Newly generated trend rows carry the default aggregate score.
const NEW_TREND_SCORE: i32 = 100;

/// Return the stored trends for a category, generating and persisting one
/// trend row on first request. The analysis collaborator never errors, so
/// callers always receive usable trend data.
pub async fn get_or_create_trends(
    store: &MemStore,
    http: &reqwest::Client,
    config: &Config,
    category: &str,
) -> Vec<Trend> {
    let trends = store.get_trends(category);
    if !trends.is_empty() {
        return trends;
    }

    let analysis = openai_service::analyze_trends_for_category(http, config, category).await;
    let trend = store.create_trend(NewTrend {
        category: category.to_string(),
        keywords: analysis.keywords,
        topics: analysis.topics,
        score: NEW_TREND_SCORE,
    });
    info!("Created trend record {} for category {}", trend.id, category);
    vec![trend]
}

/// Start video generation for a user: resolve channel settings, trend and
/// topic, draft content, and persist a video in `processing` state. The
/// render/upload step is a future async job and is not performed here.
pub async fn generate_video(
    store: &MemStore,
    http: &reqwest::Client,
    config: &Config,
    user_id: i32,
    topic_id: &str,
    category: &str,
) -> Result<Video, ApiError> {
    let settings = store
        .get_channel_settings(user_id)
        .ok_or_else(|| ApiError::NotFound("Channel settings not found".to_string()))?;

    let trend = store
        .get_trends(category)
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound("Trend data not found".to_string()))?;

    let topic = find_topic(&trend.topics, topic_id)
        .ok_or_else(|| ApiError::NotFound("Selected topic not found".to_string()))?
        .clone();

    let content = openai_service::generate_video_content(
        http,
        config,
        &topic.title,
        category,
        &settings.channel_description,
    )
    .await;

    let video = store.create_video(NewVideo {
        user_id,
        title: content.title,
        description: content.description,
        tags: Some(content.tags),
        thumbnail_url: None,
        video_url: None,
        status: VideoStatus::Processing,
        category: category.to_string(),
        trend_score: topic.score,
        scheduled_for: None,
    });
    info!("Started generation of video {} for user {}", video.id, user_id);
    Ok(video)
}

// Clients identify a topic two ways: newer ones send the synthetic topic id,
// the current form sends the bare title. Both branches are load-bearing.
fn find_topic<'a>(topics: &'a [TrendTopic], wanted: &str) -> Option<&'a TrendTopic> {
    topics
        .iter()
        .find(|t| t.id.as_deref() == Some(wanted) || t.title == wanted)
}
