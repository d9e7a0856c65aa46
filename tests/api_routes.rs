use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokenomics_be::api::{create_router, AppState};
use tokenomics_be::clients::ai::ProviderError;
use tokenomics_be::clients::CompletionProvider;
use tokenomics_be::services::TokenomicsService;
use tower::ServiceExt;

enum Reply {
    Text(String),
    Fail,
}

struct FakeProvider(Reply);

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
        match &self.0 {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(ProviderError::Status {
                status: 401,
                body: "invalid x-api-key".to_string(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

fn app(reply: Reply) -> Router {
    let state = Arc::new(AppState {
        tokenomics: Arc::new(TokenomicsService::new(Arc::new(FakeProvider(reply)))),
    });
    create_router().with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn generate_body(level: &str) -> Value {
    json!({
        "input": {
            "projectName": "Foo",
            "projectConcept": "Cross-chain payments",
            "projectStage": "Testnet",
            "totalSupply": 100000000,
            "blockchainPlatform": "Ethereum",
            "targetAudience": ["Merchants"],
            "projectGoals": ["Adoption"],
            "competitorAnalysis": ["Bar"],
            "regulatoryConsiderations": ["KYC"]
        },
        "experienceLevel": level
    })
}

const SCENARIO: &str = r#"Here is the scenario you asked for:
{
  "name": "Steady Launch",
  "tokenDistribution": [{"category": "Community", "percentage": 50}],
  "initialTokenPrice": 0.05,
  "vestingSchedule": {"team": "3 years", "advisors": "1 year"},
  "projections": {
    "circulatingSupply": [{"date": "2025-Q1", "amount": 10000000}],
    "price": [{"date": "2025-Q1", "price": 0.05}],
    "marketCap": [{"date": "2025-Q1", "marketCap": 500000}]
  },
  "tokenUtilization": [{"useCase": "Fees", "description": "Settlement fees"}],
  "riskAssessment": [{"factor": "Competition", "level": 6}],
  "analysis": "Conservative launch."
}
Let me know if you need anything else."#;

#[tokio::test]
async fn generate_returns_scenario() {
    let (status, body) = send(
        app(Reply::Text(SCENARIO.to_string())),
        post_json("/api/tokenomics/generate", &generate_body("intermediate")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Steady Launch");
    assert_eq!(body["projectName"], "Foo");
    assert_eq!(body["blockchainPlatform"], "Ethereum");
    assert!(body.get("competitiveAnalysis").is_none());
}

#[tokio::test]
async fn generate_failure_is_generic_500() {
    let (status, body) = send(
        app(Reply::Text("Sorry, I can't do that.".to_string())),
        post_json("/api/tokenomics/generate", &generate_body("beginner")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate tokenomics scenarios");
}

#[tokio::test]
async fn generate_rejects_malformed_body_with_json_error() {
    let (status, body) = send(
        app(Reply::Text(SCENARIO.to_string())),
        post_json("/api/tokenomics/generate", &json!({"input": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn market_data_overlays_request_fields() {
    let reply = json!({
        "marketSentiment": "bullish",
        "ecosystemCondition": "Growing",
        "avgNewTokenVolume": 120000,
        "avgNewTokenMarketCap": 2500000,
        "estimatedPriceRange": {"min": 0.001, "max": 0.01},
        "timestamp": "2025-03-01T12:00:00Z"
    });
    let (status, body) = send(
        app(Reply::Text(reply.to_string())),
        get("/api/market-data/Foo?blockchainPlatform=Solana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectName"], "Foo");
    assert_eq!(body["blockchainPlatform"], "Solana");
    assert_eq!(body["marketSentiment"], "bullish");
}

#[tokio::test]
async fn market_data_without_platform_is_400() {
    let (status, body) = send(
        app(Reply::Text("{}".to_string())),
        get("/api/market-data/Foo"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Blockchain platform is required as a query parameter"
    );
}

#[tokio::test]
async fn market_data_with_empty_platform_is_400() {
    let (status, _) = send(
        app(Reply::Text("{}".to_string())),
        get("/api/market-data/Foo?blockchainPlatform="),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn provider_failure_does_not_leak_details() {
    let (status, body) = send(
        app(Reply::Fail),
        get("/api/market-data/Foo?blockchainPlatform=Solana"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch market data");
    assert!(!body.to_string().contains("x-api-key"));
}

#[tokio::test]
async fn competitive_analysis_returns_comparison() {
    let reply = json!({
        "projectData": {"name": "Foo", "marketCap": 0, "price": 0, "volume": 0},
        "competitors": [
            {"name": "Bar", "marketCap": 1000000, "price": 1.2, "volume": 50000},
            {"name": "Baz", "marketCap": 2000000, "price": 0.4, "volume": 80000}
        ]
    });
    let (status, body) = send(
        app(Reply::Text(reply.to_string())),
        post_json(
            "/api/competitive-analysis",
            &json!({"projectName": "Foo", "competitors": ["Bar", "Baz"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["competitors"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["projectData"]["name"], "Foo");
}

#[tokio::test]
async fn competitive_analysis_failure_is_500() {
    let (status, body) = send(
        app(Reply::Fail),
        post_json(
            "/api/competitive-analysis",
            &json!({"projectName": "Foo", "competitors": ["Bar"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch competitive analysis");
}

#[tokio::test]
async fn market_data_with_undecodable_project_name_is_json_400() {
    let (status, body) = send(
        app(Reply::Text("{}".to_string())),
        get("/api/market-data/%FF?blockchainPlatform=Solana"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn market_data_with_repeated_platform_is_400() {
    let (status, body) = send(
        app(Reply::Text("{}".to_string())),
        get("/api/market-data/Foo?blockchainPlatform=a&blockchainPlatform=b"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Blockchain platform is required as a query parameter"
    );
}
