//! Data management over the SQLite entity store

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::{assert_err, assert_ok};
    use resource_gateway::GatewayError;
    use resource_gateway::core::data::{
        DataManager, DataRequest, DataResponse, InboundChannel, PublicCrud, inbound_factory,
    };
    use resource_gateway::core::models::{
        EntityKind, EntityRecord, NewRecord, NewTeam, NewUser, OperationKind, Pagination,
        RecordKey,
    };
    use serde_json::json;

    fn record(response: DataResponse) -> EntityRecord {
        match response {
            DataResponse::Record(record) => record,
            other => panic!("expected a single record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_team_manager_resolved_by_email() {
        let db = TestDatabase::new().await;
        let manager = inbound_factory(InboundChannel::Internal, db.repository());

        let lead = record(assert_ok!(
            manager
                .process(DataRequest::create(NewRecord::User(NewUser::new(
                    "grace",
                    "grace@example.com"
                ))))
                .await
        ));

        let attributes = json!({"name": "compilers", "manager_email": "grace@example.com"});
        let team = NewRecord::from_json(EntityKind::Teams, attributes).unwrap();
        let team = record(assert_ok!(manager.process(DataRequest::create(team)).await));

        match team {
            EntityRecord::Team(team) => assert_eq!(team.manager_id, Some(lead.id())),
            other => panic!("expected a team, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_manager_email_is_validation_error() {
        let db = TestDatabase::new().await;
        let manager = inbound_factory(InboundChannel::Internal, db.repository());

        let team = NewRecord::Team(NewTeam {
            manager_email: Some("ghost@example.com".to_string()),
            ..NewTeam::new("phantoms")
        });
        let err = assert_err!(manager.process(DataRequest::create(team)).await);

        assert!(
            matches!(err, GatewayError::Validation(ref m) if m == "User with email 'ghost@example.com' does not exist.")
        );
    }

    #[tokio::test]
    async fn test_user_joins_team_by_name_and_lists() {
        let db = TestDatabase::new().await;
        let manager = inbound_factory(InboundChannel::Internal, db.repository());

        let team = record(assert_ok!(
            manager
                .process(DataRequest::create(NewRecord::Team(NewTeam::new("kernel"))))
                .await
        ));
        let user = NewRecord::User(NewUser {
            team_name: Some("kernel".to_string()),
            ..NewUser::new("linus", "linus@example.com")
        });
        let user = record(assert_ok!(manager.process(DataRequest::create(user)).await));
        assert!(matches!(&user, EntityRecord::User(u) if u.team_id == Some(team.id())));

        let listed = assert_ok!(
            manager
                .process(DataRequest::list(EntityKind::Users, Pagination::default()))
                .await
        );
        assert!(matches!(listed, DataResponse::Records(ref records) if records.len() == 1));

        let deleted = assert_ok!(
            manager
                .process(DataRequest::delete(
                    EntityKind::Users,
                    RecordKey::Name("linus".to_string())
                ))
                .await
        );
        assert_eq!(deleted, DataResponse::deleted());
    }

    #[tokio::test]
    async fn test_read_only_public_crud() {
        let db = TestDatabase::new().await;
        let internal = inbound_factory(InboundChannel::Internal, db.repository());
        assert_ok!(
            internal
                .process(DataRequest::create(NewRecord::Team(NewTeam::new("docs"))))
                .await
        );

        let public = PublicCrud::with_allow_lists(
            internal,
            [EntityKind::Teams],
            [OperationKind::Read],
        );

        let read = public
            .process(DataRequest::read(
                EntityKind::Teams,
                RecordKey::Name("docs".to_string()),
            ))
            .await;
        assert!(read.is_ok());

        let delete = public
            .process(DataRequest::delete(
                EntityKind::Teams,
                RecordKey::Name("docs".to_string()),
            ))
            .await;
        assert!(matches!(delete, Err(GatewayError::Forbidden(_))));

        let users = public
            .process(DataRequest::list(EntityKind::Users, Pagination::default()))
            .await;
        assert!(matches!(users, Err(GatewayError::Forbidden(_))));

        // The rejected delete never reached the store
        let still_there = db
            .repository()
            .read_record(EntityKind::Teams, &RecordKey::Name("docs".to_string()))
            .await;
        assert!(still_there.is_ok());
    }
}
