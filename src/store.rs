use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::{
    ChannelSettings, ChannelSettingsUpdate, NewChannelSettings, NewTrend, NewUser, NewVideo,
    Trend, User, Video, VideoUpdate, YoutubeCredentials,
};

/// In-memory record store. One collection per entity type, each keyed by an
/// auto-increment id starting at 1; ids are never reused after deletion.
/// Everything is gone on process restart.
///
/// The mutex is only ever held for the duration of a single operation,
/// never across an await point.
pub struct MemStore {
    inner: Mutex<Inner>,
}

struct Inner {
    users: HashMap<i32, User>,
    channel_settings: HashMap<i32, ChannelSettings>,
    videos: HashMap<i32, Video>,
    trends: HashMap<i32, Trend>,
    next_user_id: i32,
    next_channel_settings_id: i32,
    next_video_id: i32,
    next_trend_id: i32,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            inner: Mutex::new(Inner {
                users: HashMap::new(),
                channel_settings: HashMap::new(),
                videos: HashMap::new(),
                trends: HashMap::new(),
                next_user_id: 1,
                next_channel_settings_id: 1,
                next_video_id: 1,
                next_trend_id: 1,
            }),
        }
    }

    // User methods

    pub fn get_user(&self, id: i32) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id).cloned()
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.values().find(|u| u.username == username).cloned()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.values().find(|u| u.email == email).cloned()
    }

    pub fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
            youtube_access_token: None,
            youtube_refresh_token: None,
            youtube_channel_id: None,
            youtube_channel_name: None,
            created_at: Utc::now().naive_utc(),
        };
        inner.users.insert(id, user.clone());
        user
    }

    pub fn update_user_youtube_credentials(
        &self,
        id: i32,
        creds: YoutubeCredentials,
    ) -> Option<User> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner.users.get_mut(&id)?;
        user.youtube_access_token = Some(creds.access_token);
        user.youtube_refresh_token = Some(creds.refresh_token);
        user.youtube_channel_id = Some(creds.channel_id);
        user.youtube_channel_name = Some(creds.channel_name);
        Some(user.clone())
    }

    // Channel settings methods

    /// First row for the user wins; nothing prevents a user from having
    /// several settings rows.
    pub fn get_channel_settings(&self, user_id: i32) -> Option<ChannelSettings> {
        let inner = self.inner.lock().unwrap();
        inner
            .channel_settings
            .values()
            .filter(|s| s.user_id == user_id)
            .min_by_key(|s| s.id)
            .cloned()
    }

    pub fn create_channel_settings(&self, new: NewChannelSettings) -> ChannelSettings {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_channel_settings_id;
        inner.next_channel_settings_id += 1;
        let settings = ChannelSettings {
            id,
            user_id: new.user_id,
            channel_name: new.channel_name,
            channel_category: new.channel_category,
            channel_description: new.channel_description,
            content_types: new.content_types,
            target_language: new.target_language,
            target_age_group: new.target_age_group,
            youtube_channel_link: new.youtube_channel_link,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        };
        inner.channel_settings.insert(id, settings.clone());
        settings
    }

    pub fn update_channel_settings(
        &self,
        id: i32,
        update: ChannelSettingsUpdate,
    ) -> Option<ChannelSettings> {
        let mut inner = self.inner.lock().unwrap();
        let settings = inner.channel_settings.get_mut(&id)?;
        if let Some(v) = update.channel_name {
            settings.channel_name = v;
        }
        if let Some(v) = update.channel_category {
            settings.channel_category = v;
        }
        if let Some(v) = update.channel_description {
            settings.channel_description = v;
        }
        if let Some(v) = update.content_types {
            settings.content_types = v;
        }
        if let Some(v) = update.target_language {
            settings.target_language = v;
        }
        if let Some(v) = update.target_age_group {
            settings.target_age_group = Some(v);
        }
        if let Some(v) = update.youtube_channel_link {
            settings.youtube_channel_link = Some(v);
        }
        if let Some(v) = update.is_active {
            settings.is_active = v;
        }
        Some(settings.clone())
    }

    // Video methods

    pub fn get_videos(&self, user_id: i32) -> Vec<Video> {
        let inner = self.inner.lock().unwrap();
        let mut videos: Vec<Video> = inner
            .videos
            .values()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();
        // newest first; id breaks ties between same-instant creations
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        videos
    }

    pub fn get_video(&self, id: i32) -> Option<Video> {
        self.inner.lock().unwrap().videos.get(&id).cloned()
    }

    pub fn create_video(&self, new: NewVideo) -> Video {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_video_id;
        inner.next_video_id += 1;
        let video = Video {
            id,
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            tags: new.tags,
            thumbnail_url: new.thumbnail_url,
            video_url: new.video_url,
            youtube_video_id: None,
            status: new.status,
            category: new.category,
            trend_score: new.trend_score,
            published_at: None,
            scheduled_for: new.scheduled_for,
            created_at: Utc::now().naive_utc(),
        };
        inner.videos.insert(id, video.clone());
        video
    }

    pub fn update_video(&self, id: i32, update: VideoUpdate) -> Option<Video> {
        let mut inner = self.inner.lock().unwrap();
        let video = inner.videos.get_mut(&id)?;
        if let Some(v) = update.title {
            video.title = v;
        }
        if let Some(v) = update.description {
            video.description = v;
        }
        if let Some(v) = update.tags {
            video.tags = Some(v);
        }
        if let Some(v) = update.thumbnail_url {
            video.thumbnail_url = Some(v);
        }
        if let Some(v) = update.video_url {
            video.video_url = Some(v);
        }
        if let Some(v) = update.youtube_video_id {
            video.youtube_video_id = Some(v);
        }
        if let Some(v) = update.status {
            video.status = v;
        }
        if let Some(v) = update.category {
            video.category = v;
        }
        if let Some(v) = update.trend_score {
            video.trend_score = v;
        }
        if let Some(v) = update.published_at {
            video.published_at = Some(v);
        }
        if let Some(v) = update.scheduled_for {
            video.scheduled_for = Some(v);
        }
        Some(video.clone())
    }

    pub fn delete_video(&self, id: i32) -> bool {
        self.inner.lock().unwrap().videos.remove(&id).is_some()
    }

    // Trend methods

    pub fn get_trends(&self, category: &str) -> Vec<Trend> {
        let inner = self.inner.lock().unwrap();
        let mut trends: Vec<Trend> = inner
            .trends
            .values()
            .filter(|t| t.category == category)
            .cloned()
            .collect();
        trends.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        trends
    }

    pub fn create_trend(&self, new: NewTrend) -> Trend {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_trend_id;
        inner.next_trend_id += 1;
        let trend = Trend {
            id,
            category: new.category,
            keywords: new.keywords,
            topics: new.topics,
            score: new.score,
            created_at: Utc::now().naive_utc(),
        };
        inner.trends.insert(id, trend.clone());
        trend
    }
}

impl Default for MemStore {
    fn default() -> MemStore {
        MemStore::new()
    }
}
