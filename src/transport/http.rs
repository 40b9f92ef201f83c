// src/transport/http.rs

//! `reqwest`-backed HTTP client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{AppError, PipelineError, PipelineResult, Result};
use crate::models::GithubConfig;
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Create a configured asynchronous HTTP client.
///
/// Timeouts are applied per request, so none is set on the client itself.
pub fn create_async_client(config: &GithubConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    if let Some(token) = config.token.as_deref().filter(|t| !t.trim().is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|e| AppError::config(format!("Invalid github.token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// [`HttpClient`] over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the underlying client from configuration.
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, request: HttpRequest) -> PipelineResult<HttpResponse> {
        let mut builder = self.client.get(request.url).timeout(request.timeout);
        if let Some((name, value)) = &request.query {
            builder = builder.query(&[(name, value)]);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let mut converted = HttpResponse::new(status, String::new());
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                converted.insert_header(name.as_str(), value);
            }
        }
        converted.body = response.text().await.map_err(map_reqwest_error)?;

        Ok(converted)
    }
}

fn map_reqwest_error(error: reqwest::Error) -> PipelineError {
    if error.is_timeout() {
        PipelineError::Timeout
    } else {
        PipelineError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use url::Url;

    use super::*;

    /// Accept one connection, answer with `response` and return the request head.
    async fn serve_once(response: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).into_owned()
        });
        let url = Url::parse(&format!("http://{addr}/search/users")).unwrap();
        (url, handle)
    }

    fn client() -> ReqwestClient {
        ReqwestClient::from_config(&GithubConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_returns_status_headers_and_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 403 Forbidden\r\n\
             X-RateLimit-Limit: 60\r\n\
             X-RateLimit-Remaining: 0\r\n\
             Content-Length: 2\r\n\
             Connection: close\r\n\r\n{}",
        )
        .await;

        let response = client()
            .get(HttpRequest::new(url, Duration::from_secs(5)))
            .await
            .unwrap();
        server.await.unwrap();

        assert_eq!(response.status, 403);
        assert_eq!(response.header("X-RateLimit-Limit"), Some("60"));
        assert_eq!(response.header("x-ratelimit-remaining"), Some("0"));
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn test_query_survives_encoding() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\n{\"items\": []}",
        )
        .await;
        let query = "a+b%20c#d type:user in:login language:c++";

        let request = HttpRequest::new(url, Duration::from_secs(5)).with_query("q", query);
        client().get(request).await.unwrap();
        let head = server.await.unwrap();

        let target = head.split_whitespace().nth(1).unwrap();
        let sent = Url::parse(&format!("http://localhost{target}")).unwrap();
        assert_eq!(sent.path(), "/search/users");
        let q = sent
            .query_pairs()
            .find(|(name, _)| name == "q")
            .map(|(_, value)| value.into_owned());
        assert_eq!(q.as_deref(), Some(query));
    }

    #[tokio::test]
    async fn test_sends_github_headers() {
        let (url, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}")
                .await;
        let config = GithubConfig {
            token: Some("abc123".into()),
            ..GithubConfig::default()
        };

        let client = ReqwestClient::from_config(&config).unwrap();
        client
            .get(HttpRequest::new(url, Duration::from_secs(5)))
            .await
            .unwrap();
        let head = server.await.unwrap().to_ascii_lowercase();

        assert!(head.contains("accept: application/vnd.github.v3+json"));
        assert!(head.contains("authorization: bearer abc123"));
        assert!(head.contains("user-agent: user-finder/"));
    }

    #[tokio::test]
    async fn test_stalled_server_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let url = Url::parse(&format!("http://{addr}/users/slow")).unwrap();
        let result = client()
            .get(HttpRequest::new(url, Duration::from_millis(100)))
            .await;
        server.abort();

        assert_eq!(result, Err(PipelineError::Timeout));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/users/gone")).unwrap();
        let result = client()
            .get(HttpRequest::new(url, Duration::from_secs(5)))
            .await;

        assert!(matches!(result, Err(PipelineError::Transport(_))));
    }

    #[test]
    fn test_rejects_unprintable_token() {
        let config = GithubConfig {
            token: Some("bad\ntoken".into()),
            ..GithubConfig::default()
        };
        assert!(matches!(
            create_async_client(&config),
            Err(AppError::Config(_))
        ));
    }
}
