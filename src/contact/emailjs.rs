use std::time::Duration;

use serde::Serialize;

use super::{ContactError, ContactMessage, EmailSender};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Only needed when the EmailJS account enforces private-key access.
    pub private_key: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            private_key: None,
        }
    }
}

impl EmailJsConfig {
    /// Placeholder credentials mean sends are certain to be rejected.
    pub fn is_placeholder(&self) -> bool {
        self.service_id.starts_with("YOUR_")
            || self.template_id.starts_with("YOUR_")
            || self.public_key.starts_with("YOUR_")
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, ContactError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            config,
            endpoint: EMAILJS_SEND_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_body<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
            access_token: self.config.private_key.as_deref(),
        }
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        if self.config.is_placeholder() {
            tracing::warn!("EmailJS credentials are placeholders, send will be rejected");
        }
        let res = self
            .http
            .post(&self.endpoint)
            .json(&self.request_body(message))
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(%status, body, "EmailJS rejected message");
            return Err(ContactError::Status(status.as_u16()));
        }
        tracing::info!(from = %message.from_email, "contact message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;

    use super::*;
    use crate::contact::ContactDraft;

    /// Local stand-in for the EmailJS endpoint. Records every body it
    /// receives and answers with `status`.
    async fn stub_endpoint(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/send",
                post(
                    move |State(received): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                        received.lock().unwrap().push(body);
                        status
                    },
                ),
            )
            .with_state(received.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        (format!("http://{addr}/send"), received)
    }

    fn message() -> ContactMessage {
        ContactMessage::new(
            ContactDraft {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
            },
            "owner@example.com",
        )
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailJsClient::new(EmailJsConfig {
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pub".to_string(),
            private_key: None,
        })
        .unwrap();
        let msg = message();
        let json = serde_json::to_value(client.request_body(&msg)).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "pub");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["to_email"], "owner@example.com");
        assert!(json.get("accessToken").is_none());
    }

    #[test]
    fn test_private_key_becomes_access_token() {
        let client = EmailJsClient::new(EmailJsConfig {
            private_key: Some("secret".to_string()),
            ..EmailJsConfig::default()
        })
        .unwrap();
        let msg = message();
        let json = serde_json::to_value(client.request_body(&msg)).unwrap();
        assert_eq!(json["accessToken"], "secret");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(EmailJsConfig::default().is_placeholder());
        let real = EmailJsConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_abc".to_string(),
            public_key: "abc123".to_string(),
            private_key: None,
        };
        assert!(!real.is_placeholder());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = EmailJsClient::new(EmailJsConfig::default())
            .unwrap()
            .with_endpoint("http://127.0.0.1:9/send");
        let err = client.send(&message()).await.expect_err("send should fail");
        assert!(matches!(err, ContactError::Request(_)));
        // the transport error stays reachable
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_rejected_send_is_status_error() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::INTERNAL_SERVER_ERROR] {
            let (endpoint, received) = stub_endpoint(status).await;
            let client = EmailJsClient::new(EmailJsConfig::default())
                .unwrap()
                .with_endpoint(endpoint);
            let res = client.send(&message()).await;
            assert!(matches!(res, Err(ContactError::Status(code)) if code == status.as_u16()));
            assert_eq!(received.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_accepted_send_posts_template_params() {
        let (endpoint, received) = stub_endpoint(StatusCode::OK).await;
        let client = EmailJsClient::new(EmailJsConfig::default())
            .unwrap()
            .with_endpoint(endpoint);
        client.send(&message()).await.expect("send should succeed");

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["service_id"], "YOUR_SERVICE_ID");
        assert_eq!(received[0]["template_params"]["from_email"], "ada@example.com");
    }
}
