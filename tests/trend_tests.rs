use actix_web::{test, web, App};

use video_generation_backend::config::Config;
use video_generation_backend::handlers;
use video_generation_backend::store::MemStore;
use video_generation_backend::AppState;

fn test_config() -> Config {
    Config {
        openai_api_key: "test-key".to_string(),
        youtube_client_id: "test-client-id".to_string(),
        youtube_client_secret: "test-client-secret".to_string(),
        public_base_url: "https://demo.example.com".to_string(),
        // Unroutable: every analysis call fails over to the fallback payload
        openai_api_base: "http://127.0.0.1:9".to_string(),
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

async fn fetch_trends(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    category: &str,
) -> Vec<serde_json::Value> {
    let req = test::TestRequest::get()
        .uri(&format!("/api/trends/{}", category))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}

#[actix_web::test]
async fn test_trends_usable_when_collaborator_fails() {
    let app = setup_test_app().await;

    let trends = fetch_trends(&app, "gaming").await;

    assert_eq!(trends.len(), 1);
    let trend = &trends[0];
    assert_eq!(trend["category"].as_str().unwrap(), "gaming");
    assert_eq!(trend["score"].as_i64().unwrap(), 100);

    let keywords = trend["keywords"].as_array().unwrap();
    assert!(!keywords.is_empty());

    let topics = trend["topics"].as_array().unwrap();
    assert!(!topics.is_empty());
    for topic in topics {
        let score = topic["score"].as_i64().unwrap();
        assert!((1..=100).contains(&score), "topic score {} out of range", score);
        assert!(!topic["title"].as_str().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn test_trends_created_once_per_category() {
    let app = setup_test_app().await;

    let first = fetch_trends(&app, "cooking").await;
    assert_eq!(first.len(), 1);
    let first_id = first[0]["id"].as_i64().unwrap();

    // Second call returns the stored record, no duplicate generation
    let second = fetch_trends(&app, "cooking").await;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0]["id"].as_i64().unwrap(), first_id);
}

#[actix_web::test]
async fn test_trends_are_per_category() {
    let app = setup_test_app().await;

    let gaming = fetch_trends(&app, "gaming").await;
    let fitness = fetch_trends(&app, "fitness").await;

    assert_eq!(gaming.len(), 1);
    assert_eq!(fitness.len(), 1);
    assert_ne!(
        gaming[0]["id"].as_i64().unwrap(),
        fitness[0]["id"].as_i64().unwrap()
    );
    assert_eq!(fitness[0]["category"].as_str().unwrap(), "fitness");
}
