//! Hydra introspection stand-in

use resource_gateway::config::HydraConfig;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct HydraStub {
    pub server: MockServer,
}

impl HydraStub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> HydraConfig {
        HydraConfig {
            admin_url: self.server.uri(),
            ..HydraConfig::default()
        }
    }

    /// Introspect `token` as an active token for `username`
    pub async fn active_token(&self, token: &str, username: &str) {
        Mock::given(method("POST"))
            .and(path("/admin/oauth2/introspect"))
            .and(body_string_contains(format!("token={}", token)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "active": true,
                "sub": format!("subject-{}", username),
                "username": username,
                "scope": "openid offline",
                "exp": 4_102_444_800_i64,
            })))
            .mount(&self.server)
            .await;
    }

    /// Anything not matched by an earlier mock is an inactive token
    pub async fn inactive_by_default(&self) {
        Mock::given(method("POST"))
            .and(path("/admin/oauth2/introspect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "active": false })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }
}
