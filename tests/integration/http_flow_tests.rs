//! The HTTP surface end to end: Hydra introspection, Keto point checks and
//! the SQLite entity store behind a real actix app

#[cfg(test)]
mod tests {
    use crate::common::{HydraStub, KetoStub, TestDatabase, tuple};
    use resource_gateway::auth::AuthSystem;
    use resource_gateway::config::{AuthConfig, Config};
    use resource_gateway::core::data::{InboundChannel, inbound_factory};
    use resource_gateway::server::{AppState, HttpServer};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use wiremock::ResponseTemplate;

    const ALICE: (&str, &str) = ("Authorization", "Bearer alice-token");

    struct Backends {
        keto: KetoStub,
        hydra: HydraStub,
        db: TestDatabase,
    }

    impl Backends {
        async fn start() -> Self {
            let hydra = HydraStub::start().await;
            hydra.active_token("alice-token", "alice").await;
            hydra.inactive_by_default().await;

            Self {
                keto: KetoStub::start().await,
                hydra,
                db: TestDatabase::new().await,
            }
        }

        fn state(&self) -> AppState {
            let mut config = Config::default();
            config.gateway.auth = AuthConfig {
                enabled: true,
                keto: self.keto.config(),
                hydra: self.hydra.config(),
            };

            let auth = AuthSystem::new(&config.gateway.auth).expect("auth system");
            let data = inbound_factory(InboundChannel::Rest, self.db.repository());
            AppState::new(config, auth, data)
        }
    }

    macro_rules! app {
        ($backends:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new($backends.state()))).await
        };
    }

    #[actix_web::test]
    async fn test_health_needs_no_backends() {
        let backends = Backends::start().await;
        let app = app!(backends);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_inactive_token_is_rejected() {
        let backends = Backends::start().await;
        let app = app!(backends);

        let req = test::TestRequest::get()
            .uri("/teams")
            .insert_header(("Authorization", "Bearer stolen-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_granted_user_can_create_and_read() {
        let backends = Backends::start().await;
        backends.keto.allow("data:write", "alice", true).await;
        backends.keto.allow("data:read", "alice", true).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/teams")
            .insert_header(ALICE)
            .set_json(json!({"name": "research"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/teams")
            .insert_header(ALICE)
            .set_json(json!({"name": "research"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/teams/research")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "research");
    }

    #[actix_web::test]
    async fn test_denied_check_is_forbidden() {
        let backends = Backends::start().await;
        backends.keto.allow("data:delete", "alice", false).await;
        let app = app!(backends);

        let req = test::TestRequest::delete()
            .uri("/teams/research")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_failing_keto_check_is_forbidden() {
        let backends = Backends::start().await;
        backends
            .keto
            .check("data:read", "alice", ResponseTemplate::new(500))
            .await;
        let app = app!(backends);

        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_malformed_input_gets_json_error() {
        let backends = Backends::start().await;
        backends.keto.allow("data:write", "alice", true).await;
        backends.keto.allow("data:read", "alice", true).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/teams")
            .insert_header(ALICE)
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");

        let req = test::TestRequest::get()
            .uri("/teams?order=sideways")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_me_endpoints_expand_roles() {
        let backends = Backends::start().await;
        backends
            .keto
            .user_tuples(
                "alice",
                vec![
                    tuple("data:read", "granted", "alice"),
                    tuple("role:admin", "member", "alice"),
                ],
            )
            .await;
        backends
            .keto
            .role_grants("admin", &["data:write", "data:delete"], 1)
            .await;
        backends
            .keto
            .user_memberships("alice", vec![tuple("role:admin", "member", "alice")])
            .await;
        let app = app!(backends);

        let req = test::TestRequest::get()
            .uri("/auth/me/permissions")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["permissions"],
            json!(["data:delete", "data:read", "data:write"])
        );

        let req = test::TestRequest::get()
            .uri("/auth/me/roles")
            .insert_header(ALICE)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["roles"], json!(["admin"]));
    }
}
