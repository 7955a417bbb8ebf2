//! Keto read API stand-in

use resource_gateway::auth::PermissionResolver;
use resource_gateway::config::KetoConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NAMESPACE: &str = "test-namespace";

/// One wire tuple in the test namespace
pub fn tuple(object: &str, relation: &str, subject_id: &str) -> Value {
    json!({
        "namespace": NAMESPACE,
        "object": object,
        "relation": relation,
        "subject_id": subject_id,
    })
}

fn tuples_body(tuples: Vec<Value>) -> Value {
    json!({ "relation_tuples": tuples, "next_page_token": "" })
}

pub struct KetoStub {
    pub server: MockServer,
}

impl KetoStub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> KetoConfig {
        KetoConfig {
            read_url: self.server.uri(),
            namespace: NAMESPACE.to_string(),
            timeout_secs: 2,
            ..KetoConfig::default()
        }
    }

    pub fn resolver(&self) -> PermissionResolver {
        PermissionResolver::from_config(&self.config()).expect("resolver")
    }

    /// Answer the unfiltered per-user listing used for permission resolution
    pub async fn user_tuples(&self, username: &str, tuples: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/relation-tuples"))
            .and(query_param("namespace", NAMESPACE))
            .and(query_param("subject_id", username))
            .and(query_param_is_missing("relation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tuples_body(tuples)))
            .mount(&self.server)
            .await;
    }

    /// Answer the `member` listing used for role lookup
    pub async fn user_memberships(&self, username: &str, tuples: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/relation-tuples"))
            .and(query_param("subject_id", username))
            .and(query_param("relation", "member"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tuples_body(tuples)))
            .mount(&self.server)
            .await;
    }

    /// Answer a role's `granted` listing; each permission is a tuple subject.
    /// The stub expects to be hit exactly `times` times.
    pub async fn role_grants(&self, role: &str, permissions: &[&str], times: u64) {
        let tuples = permissions
            .iter()
            .map(|permission| tuple(&format!("role:{}", role), "granted", permission))
            .collect();

        Mock::given(method("GET"))
            .and(path("/relation-tuples"))
            .and(query_param("object", format!("role:{}", role)))
            .and(query_param("relation", "granted"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tuples_body(tuples)))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Fail a role's `granted` listing with a status
    pub async fn role_grants_status(&self, role: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path("/relation-tuples"))
            .and(query_param("object", format!("role:{}", role)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer a point check with a status and body
    pub async fn check(&self, object: &str, subject_id: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/relation-tuples/check"))
            .and(query_param("namespace", NAMESPACE))
            .and(query_param("object", object))
            .and(query_param("relation", "granted"))
            .and(query_param("subject_id", subject_id))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn allow(&self, object: &str, subject_id: &str, allowed: bool) {
        self.check(
            object,
            subject_id,
            ResponseTemplate::new(200).set_body_json(json!({ "allowed": allowed })),
        )
        .await;
    }
}

/// A Keto config pointing at a port nothing listens on
pub fn unreachable_config() -> KetoConfig {
    KetoConfig {
        read_url: "http://127.0.0.1:1".to_string(),
        namespace: NAMESPACE.to_string(),
        timeout_secs: 2,
        ..KetoConfig::default()
    }
}
