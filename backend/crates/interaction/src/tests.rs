//! Unit tests for the interaction crate

#[cfg(test)]
mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{Value, json};
    use user::{MemoryUserRepository, User};

    pub const OFFICE_IP: &str = "177.230.219.9";

    pub struct Directory {
        pub repo: MemoryUserRepository,
        pub ana: User,
        pub beto: User,
        pub carla: User,
    }

    pub fn directory() -> Directory {
        let ana = User::new("Ana", "Diaz", "ana@example.com");
        let beto = User::new("Beto", "Ramos", "beto@example.com");
        let carla = User::new("Carla", "Nunez", "carla@example.com");
        let repo = MemoryUserRepository::with_users([ana.clone(), beto.clone(), carla.clone()]);
        Directory {
            repo,
            ana,
            beto,
            carla,
        }
    }

    /// 12:00 in Mexico City on 2024-06-10
    pub fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap()
    }

    pub fn payload(acting: &User, client_ip: &str, interactions: &[(&User, &str)]) -> Value {
        json!({
            "user": { "id": acting.user_id.to_string(), "name": acting.name },
            "clientIP": client_ip,
            "interactions": interactions
                .iter()
                .map(|(other, kind)| json!({
                    "interactionType": kind,
                    "interacting_with_user": { "id": other.user_id.to_string() },
                }))
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod record_tests {
    use super::fixtures::*;
    use crate::application::config::InteractionConfig;
    use crate::application::list_interactions::ListInteractionsUseCase;
    use crate::application::record_interactions::RecordInteractionsUseCase;
    use crate::domain::validation::ValidationError;
    use crate::domain::value_objects::Score;
    use crate::error::InteractionError;
    use crate::infra::memory::MemoryInteractionRepository;
    use platform::clock::ManualClock;
    use serde_json::json;
    use std::sync::Arc;
    use user::MemoryUserRepository;

    fn use_case(
        store: &MemoryInteractionRepository,
        users: &MemoryUserRepository,
    ) -> RecordInteractionsUseCase<MemoryInteractionRepository, MemoryUserRepository> {
        RecordInteractionsUseCase::new(
            Arc::new(store.clone()),
            Arc::new(users.clone()),
            Arc::new(ManualClock::new(noon())),
            Arc::new(InteractionConfig::default()),
        )
    }

    async fn single_score(interaction_type: &str, client_ip: &str) -> Score {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let body = payload(&dir.ana, client_ip, &[(&dir.beto, interaction_type)]);

        use_case(&store, &dir.repo)
            .execute(&dir.ana.user_id.to_string(), &body)
            .await
            .unwrap();

        let listed = ListInteractionsUseCase::new(Arc::new(store))
            .execute(&dir.ana.user_id.to_string(), "2024-06-10")
            .await
            .unwrap();
        assert_eq!(listed.interactions.len(), 1);
        listed.interactions[0].score
    }

    #[tokio::test]
    async fn test_scores_are_fixed_at_write() {
        assert_eq!(single_score("Office", OFFICE_IP).await, Score::Credit);
        assert_eq!(single_score("Office", "10.0.0.5").await, Score::Penalty);
        assert_eq!(single_score("Remote", "10.0.0.5").await, Score::Neutral);
        assert_eq!(single_score("Remote", OFFICE_IP).await, Score::Neutral);
        assert_eq!(single_score("Coffee", OFFICE_IP).await, Score::Neutral);
    }

    #[tokio::test]
    async fn test_batch_round_trip_in_order() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let body = payload(
            &dir.ana,
            OFFICE_IP,
            &[
                (&dir.beto, "Office"),
                (&dir.carla, "Remote"),
                (&dir.beto, "Lunch"),
            ],
        );

        let created = use_case(&store, &dir.repo)
            .execute(&dir.ana.user_id.to_string(), &body)
            .await
            .unwrap();

        assert_eq!(created.len(), 3);
        assert_eq!(created[0].interacting_with_user.name, "Beto");
        assert_eq!(created[1].interacting_with_user.name, "Carla");
        assert_eq!(created[2].interacting_with_user.name, "Beto");

        let listed = ListInteractionsUseCase::new(Arc::new(store))
            .execute(&dir.ana.user_id.to_string(), "2024-06-10")
            .await
            .unwrap();

        let ids: Vec<_> = listed.interactions.iter().map(|i| i.id).collect();
        let created_ids: Vec<_> = created.iter().map(|r| r.id).collect();
        assert_eq!(ids, created_ids);
        assert!(listed.interactions.iter().all(|i| i.user.name == "Ana"));
        assert!(
            listed
                .interactions
                .iter()
                .all(|i| i.client_ip.as_str() == OFFICE_IP)
        );
    }

    #[tokio::test]
    async fn test_validation_failures_persist_nothing() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let acting = dir.ana.user_id.to_string();

        let mut missing_ip = payload(&dir.ana, OFFICE_IP, &[(&dir.beto, "Office")]);
        missing_ip.as_object_mut().unwrap().remove("clientIP");
        let err = use_case(&store, &dir.repo)
            .execute(&acting, &missing_ip)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InteractionError::Validation(ValidationError::MissingClientIp)
        ));

        let mut empty = payload(&dir.ana, OFFICE_IP, &[]);
        empty["interactions"] = json!([]);
        let err = use_case(&store, &dir.repo)
            .execute(&acting, &empty)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InteractionError::Validation(ValidationError::EmptyInteractions)
        ));

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_counterpart_persists_nothing() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let stranger = user::User::new("Eve", "Unknown", "eve@example.com");
        let body = payload(
            &dir.ana,
            OFFICE_IP,
            &[(&dir.beto, "Office"), (&stranger, "Office")],
        );

        let err = use_case(&store, &dir.repo)
            .execute(&dir.ana.user_id.to_string(), &body)
            .await
            .unwrap_err();

        assert!(matches!(err, InteractionError::CounterpartNotFound(id) if id == stranger.user_id));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_acting_user() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let stranger = user::User::new("Eve", "Unknown", "eve@example.com");
        let body = payload(&stranger, OFFICE_IP, &[(&dir.beto, "Office")]);

        let err = use_case(&store, &dir.repo)
            .execute(&stranger.user_id.to_string(), &body)
            .await
            .unwrap_err();

        assert!(matches!(err, InteractionError::UserNotFound(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_path_user_must_match_payload_user() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let body = payload(&dir.ana, OFFICE_IP, &[(&dir.beto, "Office")]);

        for path_user in [dir.beto.user_id.to_string(), "not-a-uuid".to_string()] {
            let err = use_case(&store, &dir.repo)
                .execute(&path_user, &body)
                .await
                .unwrap_err();
            assert!(matches!(err, InteractionError::UserMismatch));
        }
        assert!(store.is_empty());
    }
}

#[cfg(test)]
mod list_tests {
    use super::fixtures::*;
    use crate::application::config::InteractionConfig;
    use crate::application::list_interactions::ListInteractionsUseCase;
    use crate::application::record_interactions::RecordInteractionsUseCase;
    use crate::error::InteractionError;
    use crate::infra::memory::MemoryInteractionRepository;
    use chrono::{Duration, NaiveDate};
    use platform::clock::ManualClock;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_is_scoped_to_user_and_day() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let clock = Arc::new(ManualClock::new(noon()));
        let record = RecordInteractionsUseCase::new(
            Arc::new(store.clone()),
            Arc::new(dir.repo.clone()),
            clock.clone(),
            Arc::new(InteractionConfig::default()),
        );

        record
            .execute(
                &dir.ana.user_id.to_string(),
                &payload(&dir.ana, OFFICE_IP, &[(&dir.beto, "Office")]),
            )
            .await
            .unwrap();
        record
            .execute(
                &dir.beto.user_id.to_string(),
                &payload(&dir.beto, OFFICE_IP, &[(&dir.ana, "Office")]),
            )
            .await
            .unwrap();
        clock.advance(Duration::days(1));
        record
            .execute(
                &dir.ana.user_id.to_string(),
                &payload(&dir.ana, OFFICE_IP, &[(&dir.carla, "Remote")]),
            )
            .await
            .unwrap();

        let list = ListInteractionsUseCase::new(Arc::new(store));

        let day_one = list
            .execute(&dir.ana.user_id.to_string(), "2024-06-10")
            .await
            .unwrap();
        assert_eq!(day_one.interactions.len(), 1);
        assert_eq!(day_one.interactions[0].interacting_user.name, "Beto");
        assert_eq!(day_one.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());

        let day_two = list
            .execute(&dir.ana.user_id.to_string(), "2024-06-11")
            .await
            .unwrap();
        assert_eq!(day_two.interactions.len(), 1);
        assert_eq!(day_two.interactions[0].interacting_user.name, "Carla");

        let empty = list
            .execute(&dir.carla.user_id.to_string(), "2024-06-10")
            .await
            .unwrap();
        assert!(empty.interactions.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date_is_rejected() {
        let list = ListInteractionsUseCase::new(Arc::new(MemoryInteractionRepository::new()));

        for date in ["2024-13-01", "2024-6-1x", "10-06-2024", "today"] {
            let err = list.execute("anyone", date).await.unwrap_err();
            assert!(matches!(err, InteractionError::InvalidDate(_)), "{date}");
        }
    }

    #[tokio::test]
    async fn test_unknown_user_id_lists_nothing() {
        let list = ListInteractionsUseCase::new(Arc::new(MemoryInteractionRepository::new()));

        let daily = list.execute("64b7f0c2e1", "2024-06-10").await.unwrap();
        assert_eq!(daily.user_id, "64b7f0c2e1");
        assert!(daily.interactions.is_empty());
    }
}

#[cfg(test)]
mod delete_tests {
    use super::fixtures::*;
    use crate::application::config::InteractionConfig;
    use crate::application::delete_interaction::DeleteInteractionUseCase;
    use crate::application::record_interactions::RecordInteractionsUseCase;
    use crate::error::InteractionError;
    use crate::infra::memory::MemoryInteractionRepository;
    use chrono::{TimeZone, Utc};
    use kernel::id::InteractionId;
    use platform::clock::ManualClock;
    use std::sync::Arc;

    struct Harness {
        store: MemoryInteractionRepository,
        clock: Arc<ManualClock>,
        delete: DeleteInteractionUseCase<MemoryInteractionRepository>,
        created: Vec<InteractionId>,
    }

    async fn harness(count: usize) -> Harness {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let clock = Arc::new(ManualClock::new(noon()));
        let config = Arc::new(InteractionConfig::default());

        let record = RecordInteractionsUseCase::new(
            Arc::new(store.clone()),
            Arc::new(dir.repo.clone()),
            clock.clone(),
            config.clone(),
        );
        let others = vec![(&dir.beto, "Office"); count];
        let created = record
            .execute(
                &dir.ana.user_id.to_string(),
                &payload(&dir.ana, OFFICE_IP, &others),
            )
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();

        let delete = DeleteInteractionUseCase::new(Arc::new(store.clone()), clock.clone(), config);

        Harness {
            store,
            clock,
            delete,
            created,
        }
    }

    #[tokio::test]
    async fn test_same_day_delete_then_not_found() {
        let h = harness(1).await;
        let id = h.created[0].to_string();

        h.delete.execute(&id).await.unwrap();
        assert!(h.store.is_empty());

        let err = h.delete.execute(&id).await.unwrap_err();
        assert!(matches!(err, InteractionError::InteractionNotFound));
    }

    #[tokio::test]
    async fn test_local_midnight_locks_records() {
        let h = harness(2).await;

        // 23:00 local on the creation day
        h.clock.set(Utc.with_ymd_and_hms(2024, 6, 11, 5, 0, 0).unwrap());
        h.delete.execute(&h.created[0].to_string()).await.unwrap();

        // 00:30 local the next day
        h.clock.set(Utc.with_ymd_and_hms(2024, 6, 11, 6, 30, 0).unwrap());
        let err = h
            .delete
            .execute(&h.created[1].to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, InteractionError::NotSameDay { .. }));
        assert_eq!(h.store.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_id_is_not_found() {
        let h = harness(1).await;

        for id in [InteractionId::new().to_string(), "64b7f0c2e1".to_string()] {
            let err = h.delete.execute(&id).await.unwrap_err();
            assert!(matches!(err, InteractionError::InteractionNotFound));
        }
        assert_eq!(h.store.len(), 1);
    }
}

#[cfg(test)]
mod router_tests {
    use super::fixtures::*;
    use crate::application::config::InteractionConfig;
    use crate::infra::memory::MemoryInteractionRepository;
    use crate::presentation::router::interaction_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use platform::clock::ManualClock;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(dir: &Directory, store: &MemoryInteractionRepository) -> Router {
        interaction_router_generic(
            store.clone(),
            dir.repo.clone(),
            Arc::new(ManualClock::new(noon())),
            InteractionConfig::default(),
        )
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_save_list_delete_flow() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let user_id = dir.ana.user_id.to_string();

        let body = payload(
            &dir.ana,
            OFFICE_IP,
            &[(&dir.beto, "Office"), (&dir.carla, "Remote")],
        );
        let response = app(&dir, &store)
            .oneshot(post_json(&format!("/users/{user_id}/interactions"), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let saved = json_body(response).await;
        assert_eq!(saved["message"], "Interactions saved successfully.");
        let records = saved["created_records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["interacting_with_user"]["name"], "Beto");
        assert_eq!(records[1]["interacting_with_user"]["email"], "carla@example.com");

        let response = app(&dir, &store)
            .oneshot(
                Request::get(format!("/users/{user_id}/interactions/2024-06-10"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = json_body(response).await;
        assert_eq!(listed["user_id"], user_id);
        assert_eq!(listed["date"], "2024-06-10");
        let items = listed["interactions"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["interactionType"], "Office");
        assert_eq!(items[0]["clientIP"], OFFICE_IP);
        assert_eq!(items[0]["score"], 1);
        assert_eq!(items[0]["interacting_user"]["last_name"], "Ramos");
        assert_eq!(items[1]["score"], 0);
        assert_eq!(items[0]["id"], records[0]["id"]);

        let first = records[0]["id"].as_str().unwrap();
        let response = app(&dir, &store)
            .oneshot(
                Request::delete(format!("/users/{user_id}/interactions/{first}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["message"],
            "Interaction deleted successfully."
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_date_is_400() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();

        let response = app(&dir, &store)
            .oneshot(
                Request::get("/users/someone/interactions/2024-13-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let problem = json_body(response).await;
        assert_eq!(problem["status"], 400);
        assert_eq!(problem["action"], "Use 'YYYY-MM-DD'.");
    }

    #[tokio::test]
    async fn test_validation_error_is_400_with_rule() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let user_id = dir.ana.user_id.to_string();

        let mut body = payload(&dir.ana, OFFICE_IP, &[(&dir.beto, "Office")]);
        body["interactions"][0]["interactionType"] = json!("");

        let response = app(&dir, &store)
            .oneshot(post_json(&format!("/users/{user_id}/interactions"), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = json_body(response).await;
        assert!(
            problem["detail"]
                .as_str()
                .unwrap()
                .contains("interactions[0]")
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();

        let response = app(&dir, &store)
            .oneshot(
                Request::post("/users/someone/interactions")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_counterpart_is_404() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();
        let user_id = dir.ana.user_id.to_string();
        let stranger = user::User::new("Eve", "Unknown", "eve@example.com");

        let body = payload(&dir.ana, OFFICE_IP, &[(&stranger, "Office")]);
        let response = app(&dir, &store)
            .oneshot(post_json(&format!("/users/{user_id}/interactions"), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_is_404() {
        let dir = directory();
        let store = MemoryInteractionRepository::new();

        let response = app(&dir, &store)
            .oneshot(
                Request::delete("/users/someone/interactions/not-an-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::validation::ValidationError;
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use kernel::error::kind::ErrorKind;
    use kernel::id::UserId;

    #[test]
    fn test_error_status_codes() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let cases: Vec<(InteractionError, StatusCode)> = vec![
            (
                InteractionError::Validation(ValidationError::MissingUser),
                StatusCode::BAD_REQUEST,
            ),
            (InteractionError::UserMismatch, StatusCode::BAD_REQUEST),
            (
                InteractionError::InvalidDate("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                InteractionError::UserNotFound(UserId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                InteractionError::CounterpartNotFound(UserId::new()),
                StatusCode::NOT_FOUND,
            ),
            (InteractionError::InteractionNotFound, StatusCode::NOT_FOUND),
            (
                InteractionError::NotSameDay {
                    created_on: day,
                    today: day.succ_opt().unwrap(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                InteractionError::UserDirectory(user::UserError::Database(
                    sqlx::Error::PoolTimedOut,
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InteractionError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InteractionError::CorruptRecord("score 7".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let app_err =
            InteractionError::Validation(ValidationError::MissingClientIp).into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
        assert_eq!(app_err.message(), "Payload is missing 'clientIP' field.");
    }

    #[test]
    fn test_locked_and_missing_keep_their_messages() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let app_err = InteractionError::NotSameDay {
            created_on: day,
            today: day.succ_opt().unwrap(),
        }
        .into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::Forbidden);
        assert_eq!(
            app_err.message(),
            "Interaction can only be deleted on the day it was created."
        );

        let app_err = InteractionError::InteractionNotFound.into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
        assert_eq!(app_err.message(), "Interaction not found.");
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let app_err = InteractionError::CorruptRecord("score 7".to_string()).into_app_error();
        assert!(!app_err.message().contains('7'));

        let app_err = InteractionError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
    }
}
