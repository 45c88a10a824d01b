use actix_web::http::header;
use actix_web::{test, web, App};
use serde_json::json;

use video_generation_backend::config::Config;
use video_generation_backend::handlers;
use video_generation_backend::models::{LoginRequest, RegisterRequest};
use video_generation_backend::store::MemStore;
use video_generation_backend::AppState;

fn test_config() -> Config {
    Config {
        openai_api_key: "test-key".to_string(),
        youtube_client_id: "test-client-id".to_string(),
        youtube_client_secret: "test-client-secret".to_string(),
        public_base_url: "https://demo.example.com".to_string(),
        openai_api_base: "http://127.0.0.1:9".to_string(),
        // Unroutable token endpoint: every exchange fails deterministically
        oauth_token_url: "http://127.0.0.1:9/token".to_string(),
        youtube_api_base: "http://127.0.0.1:9/youtube".to_string(),
    }
}

async fn setup_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let state = web::Data::new(AppState {
        store: MemStore::new(),
        config: test_config(),
        http_client: reqwest::Client::new(),
    });

    test::init_service(
        App::new()
            .app_data(state)
            .configure(handlers::configure_routes),
    )
    .await
}

#[actix_web::test]
async fn test_auth_url_contains_configured_parts() {
    let app = setup_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/youtube/auth-url")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let auth_url = body_json["authUrl"].as_str().unwrap();

    assert!(auth_url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
    assert!(auth_url.contains("client_id=test-client-id"));
    // redirect URI is derived from the configured public base URL
    assert!(auth_url.contains("demo.example.com"));
    assert!(auth_url.contains("youtube-callback"));
    assert!(auth_url.contains("youtube.upload"));
    assert!(auth_url.contains("response_type=code"));
    assert!(auth_url.contains("access_type=offline"));
}

#[actix_web::test]
async fn test_auth_callback_missing_params() {
    let app = setup_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/youtube/auth-callback")
        .set_json(&json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["message"].as_str().unwrap(), "Missing code or userId");
}

#[actix_web::test]
async fn test_auth_callback_exchange_failure_leaves_credentials_unset() {
    let app = setup_test_app().await;

    let register_req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&RegisterRequest {
            username: "oauthuser".to_string(),
            email: "oauthuser@example.com".to_string(),
            password: "password123".to_string(),
        })
        .to_request();
    let register_resp = test::call_service(&app, register_req).await;
    assert_eq!(register_resp.status(), 201);

    let callback_req = test::TestRequest::post()
        .uri("/api/youtube/auth-callback")
        .set_json(&json!({ "code": "bogus-code", "userId": 1 }))
        .to_request();
    let callback_resp = test::call_service(&app, callback_req).await;

    assert_eq!(callback_resp.status(), 500);

    // The user's credential fields are untouched by the failed exchange
    let login_req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "oauthuser".to_string(),
            password: "password123".to_string(),
        })
        .to_request();
    let login_resp = test::call_service(&app, login_req).await;
    assert_eq!(login_resp.status(), 200);

    let login_body = test::read_body(login_resp).await;
    let login_json: serde_json::Value = serde_json::from_slice(&login_body).unwrap();
    assert!(login_json["youtubeChannelName"].is_null());
}

#[actix_web::test]
async fn test_redirect_callback_missing_code() {
    let app = setup_test_app().await;

    let req = test::TestRequest::get().uri("/youtube-callback").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/?error=missing_code");
}

#[actix_web::test]
async fn test_redirect_callback_exchange_failure() {
    let app = setup_test_app().await;

    let req = test::TestRequest::get()
        .uri("/youtube-callback?code=bogus-code")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("/?error="));
    assert_ne!(location, "/?error=missing_code");
}
