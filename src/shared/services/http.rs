//! Outbound HTTP seam.
//!
//! gloo-net (`fetch`) in the browser, reqwest on native. Callers only see
//! status + body text so tests can swap in a scripted transport.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::shared::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse>;

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;

        let mut request = Request::get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;

        let response = Request::post(url)
            .json(body)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        // GitHub rejects requests without a User-Agent; browsers send one on their own.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                crate::shared::logging::log_http_client_fallback(&err.to_string());
                reqwest::Client::default()
            });
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        use crate::shared::errors::AppError;

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        use crate::shared::errors::AppError;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport for service tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::shared::errors::AppError;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
    }

    /// Replies are consumed in order; an `Err` reply simulates a transport failure.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<std::result::Result<HttpResponse, String>>>>,
        pub requests: Rc<RefCell<Vec<RecordedRequest>>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.replies.borrow_mut().push_back(Err(message.to_string()));
            self
        }

        fn next(&self) -> Result<HttpResponse> {
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted reply".to_string()))
                .map_err(AppError::Network)
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                body: None,
            });
            self.next()
        }

        async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                headers: Vec::new(),
                body: Some(body.clone()),
            });
            self.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = HttpResponse { status: 204, body: String::new() };
        let redirect = HttpResponse { status: 304, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[test]
    fn test_json_decode_error_is_mapped() {
        let response = HttpResponse { status: 200, body: "not json".to_string() };
        assert!(response.json::<serde_json::Value>().is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_native_requests_carry_user_agent() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/users/x/repos", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]")
                .await
                .unwrap();
            String::from_utf8_lossy(&raw).to_lowercase()
        });

        let response = ReqwestTransport::new().get(&url, &[]).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(response.status, 200);
        assert!(request.contains(&format!("user-agent: {}", USER_AGENT.to_lowercase())));
    }
}
