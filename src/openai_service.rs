use log::error;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;
use crate::models::TrendTopic;

const MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct TrendAnalysis {
    pub keywords: Vec<String>,
    pub topics: Vec<TrendTopic>,
}

#[derive(Debug, Clone)]
pub struct VideoContent {
    pub title: String,
    pub description: String,
    pub script: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Error)]
enum CompletionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("completion returned no content")]
    EmptyResponse,
}

/// Suggest trending keywords and topics for a category. Never fails: any
/// collaborator error degrades to a deterministic template payload.
pub async fn analyze_trends_for_category(
    http: &reqwest::Client,
    config: &Config,
    category: &str,
) -> TrendAnalysis {
    match request_trend_analysis(http, config, category).await {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Error analyzing trends for category {}: {:?}", category, e);
            fallback_trend_analysis(category)
        }
    }
}

/// Draft title, description, script, and tags for a video about a topic.
/// Never fails: any collaborator error degrades to template content.
pub async fn generate_video_content(
    http: &reqwest::Client,
    config: &Config,
    topic: &str,
    category: &str,
    channel_description: &str,
) -> VideoContent {
    match request_video_content(http, config, topic, category, channel_description).await {
        Ok(content) => content,
        Err(e) => {
            error!("Error generating video content for {}: {:?}", topic, e);
            fallback_video_content(topic, category)
        }
    }
}

#[derive(Debug, Deserialize)]
struct TrendAnalysisPayload {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    topics: Vec<TrendTopic>,
}

#[derive(Debug, Deserialize)]
struct VideoContentPayload {
    title: Option<String>,
    description: Option<String>,
    script: Option<String>,
    tags: Option<Vec<String>>,
}

async fn request_trend_analysis(
    http: &reqwest::Client,
    config: &Config,
    category: &str,
) -> Result<TrendAnalysis, CompletionError> {
    let prompt = format!(
        "Analyze current YouTube content trends for the \"{}\" category. \
         Respond with JSON of the form {{\"keywords\": [5-10 popular keywords for \
         this category], \"topics\": [{{\"title\": \"...\", \"description\": \"...\", \
         \"score\": popularity from 1-100}}, ... 5-10 entries]}}. \
         Suggestions must be realistic, filmable video ideas.",
        category
    );
    let content = request_completion(http, config, &prompt).await?;
    let payload: TrendAnalysisPayload = serde_json::from_str(&content)?;
    Ok(TrendAnalysis {
        keywords: payload.keywords,
        topics: payload.topics,
    })
}

async fn request_video_content(
    http: &reqwest::Client,
    config: &Config,
    topic: &str,
    category: &str,
    channel_description: &str,
) -> Result<VideoContent, CompletionError> {
    let prompt = format!(
        "Write YouTube video content for the topic \"{}\" in the \"{}\" category. \
         About the channel: \"{}\". \
         Respond with JSON of the form {{\"title\": \"catchy title under 100 \
         characters\", \"description\": \"300-500 word SEO description\", \
         \"script\": \"1000-1500 word script with greeting, main part and outro\", \
         \"tags\": [10-15 relevant tags]}}.",
        topic, category, channel_description
    );
    let content = request_completion(http, config, &prompt).await?;
    let payload: VideoContentPayload = serde_json::from_str(&content)?;
    // Per-field defaults mirror the collaborator contract: a parseable but
    // partial reply still yields usable content.
    Ok(VideoContent {
        title: payload
            .title
            .unwrap_or_else(|| format!("A video about {}", topic)),
        description: payload.description.unwrap_or_else(|| {
            format!("A video about {} in the {} category", topic, category)
        }),
        script: payload
            .script
            .unwrap_or_else(|| format!("A script for a video about {}", topic)),
        tags: payload
            .tags
            .unwrap_or_else(|| fallback_tags(topic, category)),
    })
}

async fn request_completion(
    http: &reqwest::Client,
    config: &Config,
    prompt: &str,
) -> Result<String, CompletionError> {
    let body = json!({
        "model": MODEL,
        "messages": [{ "role": "user", "content": prompt }],
        "response_format": { "type": "json_object" },
    });

    let response = http
        .post(format!("{}/chat/completions", config.openai_api_base))
        .bearer_auth(&config.openai_api_key)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    let payload: Value = response.json().await?;
    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or(CompletionError::EmptyResponse)
}

fn fallback_trend_analysis(category: &str) -> TrendAnalysis {
    TrendAnalysis {
        keywords: vec![
            format!("{} trends", category),
            format!("{} tips", category),
            format!("best {} ideas", category),
        ],
        topics: vec![
            TrendTopic {
                id: None,
                title: format!("Hottest {} trends right now", category),
                description: Some(format!(
                    "A roundup of the {} trends everyone is talking about",
                    category
                )),
                score: 95,
            },
            TrendTopic {
                id: None,
                title: format!("Top 10 {} picks viewers love", category),
                description: Some(format!(
                    "A countdown of ten {} favorites with wide appeal",
                    category
                )),
                score: 87,
            },
            TrendTopic {
                id: None,
                title: format!("Secrets to getting ahead in {}", category),
                description: Some(format!(
                    "Practical advice for anyone starting out in {}",
                    category
                )),
                score: 82,
            },
        ],
    }
}

fn fallback_video_content(topic: &str, category: &str) -> VideoContent {
    VideoContent {
        title: format!("A video about {}", topic),
        description: format!("A video about {} in the {} category", topic, category),
        script: format!(
            "Hello everyone, today we are looking at {}.\n\n\
             It is one of the most interesting subjects in {} right now.\n\n\
             Subscribe for more videos like this one!",
            topic, category
        ),
        tags: fallback_tags(topic, category),
    }
}

fn fallback_tags(topic: &str, category: &str) -> Vec<String> {
    vec![
        category.to_string(),
        topic.to_string(),
        "YouTube".to_string(),
        "video".to_string(),
        "content".to_string(),
        "viral".to_string(),
        "trending".to_string(),
    ]
}
