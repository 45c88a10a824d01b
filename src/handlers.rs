use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::models::{
    AuthCallbackRequest, GenerateVideoRequest, LoginRequest, NewChannelSettings, NewUser,
    RegisterRequest,
};
use crate::services;
use crate::youtube_service;
use crate::AppState;

// The redirect-style callback carries no session; it binds the demo's first
// registered user.
const DEMO_USER_ID: i32 = 1;

#[get("/api/youtube/auth-url")]
async fn youtube_auth_url(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let auth_url = youtube_service::generate_auth_url(&state.config);
    Ok(HttpResponse::Ok().json(json!({ "authUrl": auth_url })))
}

#[post("/api/youtube/auth-callback")]
async fn youtube_auth_callback(
    req: web::Json<AuthCallbackRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let (code, user_id) = match (req.code, req.user_id) {
        (Some(code), Some(user_id)) if !code.is_empty() => (code, user_id),
        _ => return Err(ApiError::Validation("Missing code or userId".to_string())),
    };

    let creds =
        youtube_service::exchange_code_for_tokens(&state.http_client, &state.config, &code).await?;

    let user = state
        .store
        .update_user_youtube_credentials(user_id, creds)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "channelName": user.youtube_channel_name
    })))
}

#[derive(Debug, Deserialize)]
struct OauthRedirectQuery {
    code: Option<String>,
}

#[get("/youtube-callback")]
async fn youtube_auth_redirect(
    query: web::Query<OauthRedirectQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => return redirect_to("/?error=missing_code"),
    };

    let result =
        youtube_service::exchange_code_for_tokens(&state.http_client, &state.config, code).await;
    let outcome = result.and_then(|creds| {
        state
            .store
            .update_user_youtube_credentials(DEMO_USER_ID, creds)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    });

    match outcome {
        Ok(_) => redirect_to("/?youtube_connected=true"),
        Err(e) => {
            error!("Error in YouTube auth callback redirect: {:?}", e);
            redirect_to(&format!("/?error={}", urlencoding::encode(&e.to_string())))
        }
    }
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, location))
        .finish()
}

#[post("/api/channel-settings")]
async fn create_channel_settings(
    req: web::Json<NewChannelSettings>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if req.content_types.is_empty() {
        return Err(ApiError::Validation(
            "contentTypes must not be empty".to_string(),
        ));
    }
    let settings = state.store.create_channel_settings(req);
    Ok(HttpResponse::Created().json(settings))
}

#[get("/api/channel-settings/{user_id}")]
async fn get_channel_settings(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let settings = state
        .store
        .get_channel_settings(user_id)
        .ok_or_else(|| ApiError::NotFound("Channel settings not found".to_string()))?;
    Ok(HttpResponse::Ok().json(settings))
}

#[get("/api/trends/{category}")]
async fn get_trends(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let category = path.into_inner();
    let trends =
        services::get_or_create_trends(&state.store, &state.http_client, &state.config, &category)
            .await;
    Ok(HttpResponse::Ok().json(trends))
}

#[post("/api/videos/generate")]
async fn generate_video(
    req: web::Json<GenerateVideoRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let (user_id, topic_id, category) = match (req.user_id, req.topic_id, req.category) {
        (Some(user_id), Some(topic_id), Some(category))
            if !topic_id.is_empty() && !category.is_empty() =>
        {
            (user_id, topic_id, category)
        }
        _ => {
            return Err(ApiError::Validation(
                "Missing required parameters".to_string(),
            ))
        }
    };

    let video = services::generate_video(
        &state.store,
        &state.http_client,
        &state.config,
        user_id,
        &topic_id,
        &category,
    )
    .await?;

    Ok(HttpResponse::Created().json(json!({
        "id": video.id,
        "title": video.title,
        "status": video.status,
        "message": "Video generation started"
    })))
}

#[get("/api/videos/{user_id}")]
async fn get_videos(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    Ok(HttpResponse::Ok().json(state.store.get_videos(user_id)))
}

#[post("/api/users")]
async fn register_user(
    req: web::Json<RegisterRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation("Invalid user data".to_string()));
    }
    if state.store.get_user_by_email(&req.email).is_some() {
        return Err(ApiError::Conflict("Email already in use".to_string()));
    }
    if state.store.get_user_by_username(&req.username).is_some() {
        return Err(ApiError::Conflict("Username already in use".to_string()));
    }

    let hashed_password = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST).unwrap();
    let user = state.store.create_user(NewUser {
        username: req.username,
        email: req.email,
        password: hashed_password,
    });

    Ok(HttpResponse::Created().json(json!({
        "id": user.id,
        "username": user.username,
        "email": user.email
    })))
}

#[post("/api/login")]
async fn login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Missing username or password".to_string(),
        ));
    }

    let user = state
        .store
        .get_user_by_username(&req.username)
        .ok_or_else(|| ApiError::Authentication("Invalid username or password".to_string()))?;

    if !bcrypt::verify(&req.password, &user.password).unwrap_or(false) {
        return Err(ApiError::Authentication(
            "Invalid username or password".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "youtubeChannelName": user.youtube_channel_name
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(youtube_auth_url)
        .service(youtube_auth_callback)
        .service(youtube_auth_redirect)
        .service(create_channel_settings)
        .service(get_channel_settings)
        .service(get_trends)
        .service(generate_video)
        .service(get_videos)
        .service(register_user)
        .service(login);
}
