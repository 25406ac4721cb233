use referent::config::Config;
use referent::gateway::run_gateway_with_listener;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    _workspace: TempDir,
}

impl GatewayTestServer {
    async fn start(llm: &MockServer, api_key: Option<&str>) -> Self {
        let workspace = TempDir::new().expect("temp workspace should be created");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let mut config = Config {
            config_path: workspace.path().join("config.toml"),
            api_key: api_key.map(str::to_string),
            locale: "ru".into(),
            ..Config::default()
        };
        config.llm.base_url = format!("{}/api/v1", llm.uri());
        config.fetch.timeout_secs = 5;

        let host = "127.0.0.1".to_string();
        let handle =
            tokio::spawn(async move { run_gateway_with_listener(&host, listener, config).await });

        wait_until_gateway_ready(port).await;

        Self {
            port,
            handle,
            _workspace: workspace,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}

async fn post_json(url: String, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("gateway request should complete");
    let status = response.status();
    let body = response.json().await.expect("gateway should answer json");
    (status, body)
}

fn article_html() -> String {
    let paragraph = "Borrow checking keeps shared state honest across threads. ".repeat(5);
    format!(
        r#"<html><head><title>Blog</title>
        <meta property="article:published_time" content="2024-02-10"></head>
        <body><nav>Home | About</nav><h1>Fearless concurrency</h1>
        <div class="post-content"><p>{paragraph}</p></div>
        <footer>(c) blog</footer></body></html>"#
    )
}

fn chat_reply(content: &str) -> Value {
    json!({
        "model": "openai/gpt-4o-mini",
        "choices": [{"message": {"role": "assistant", "content": content}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 100, "completion_tokens": 20}
    })
}

#[tokio::test]
async fn parse_extracts_article_fields() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_html()))
        .mount(&site)
        .await;
    let llm = MockServer::start().await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(
        server.url("/api/parse"),
        json!({"url": format!("{}/posts/1", site.uri())}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Fearless concurrency");
    assert_eq!(body["date"], "2024-02-10");
    let content = body["content"].as_str().unwrap();
    assert!(content.starts_with("Borrow checking keeps shared state honest"));
    assert!(!content.contains("Home | About"));
}

#[tokio::test]
async fn parse_forbidden_site_mirrors_status_with_blocked_message() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&site)
        .await;
    let llm = MockServer::start().await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(server.url("/api/parse"), json!({"url": site.uri()})).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["errorName"], "FetchFailed");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Сайт блокирует запросы")
    );
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn parse_rejects_missing_and_malformed_input() {
    let llm = MockServer::start().await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(server.url("/api/parse"), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorName"], "MissingFields");

    let (status, body) = post_json(server.url("/api/parse"), json!({"url": "not a url"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorName"], "InvalidUrl");

    let response = reqwest::Client::new()
        .post(server.url("/api/parse"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_validates_before_contacting_the_model() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("unused")))
        .expect(0)
        .mount(&llm)
        .await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "Title", "content": "", "action": "about"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorName"], "MissingFields");

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "T", "content": "C", "action": "bogus"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorName"], "InvalidAction");

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "T", "content": "Не найдено", "action": "thesis"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorName"], "ExtractionEmpty");
}

#[tokio::test]
async fn generate_calls_model_with_action_settings() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-or-test"))
        .and(header("X-Title", "Referent App"))
        .and(wiremock::matchers::body_partial_json(json!({
            "model": "deepseek/deepseek-chat",
            "max_tokens": 4000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("Перевод статьи")))
        .expect(1)
        .mount(&llm)
        .await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "Hello", "content": "Some article text", "action": "translate"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "Перевод статьи"}));
}

#[tokio::test]
async fn generate_without_credential_is_500_and_offline() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("unused")))
        .expect(0)
        .mount(&llm)
        .await;
    let server = GatewayTestServer::start(&llm, None).await;

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "T", "content": "C", "action": "about"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorName"], "MissingCredential");
}

#[tokio::test]
async fn generate_proxies_upstream_status() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":{"message":"rate limited"}}"#),
        )
        .mount(&llm)
        .await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": "T", "content": "C", "action": "telegram"}),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["errorName"], "GenerationFailed");
    assert!(!body["error"].as_str().unwrap().contains("rate limited"));
}

#[tokio::test]
async fn parse_output_feeds_generate() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_html()))
        .mount(&site)
        .await;
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("• тезис")))
        .expect(1)
        .mount(&llm)
        .await;
    let server = GatewayTestServer::start(&llm, Some("sk-or-test")).await;

    let (status, article) = post_json(server.url("/api/parse"), json!({"url": site.uri()})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        server.url("/api/generate"),
        json!({"title": article["title"], "content": article["content"], "action": "thesis"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "• тезис");
}
