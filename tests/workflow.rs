//! Workflow operations: moving stories between phases.
//!
//! Uses wiremock to serve the story and the project's phases.

use kaizen::{KaizenError, PaginationParams, PhaseFields, ZenApi, ZenClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ZenApi {
    ZenApi::new(ZenClient::new("fake_key", &format!("{}/api/v1", server.uri())).unwrap())
}

async fn mount_phases(server: &MockServer) {
    let phases = serde_json::json!({
        "items": [{"id": 1, "name": "phase_name"}, {"id": 42, "name": "other_phase"}]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/phases/"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&phases))
        .mount(server)
        .await;
}

async fn mount_story(server: &MockServer, phase: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/stories/345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 345,
            "text": "Move me",
            "phase": phase
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_move_story_to_next_phase() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;
    mount_story(&mock_server, serde_json::json!({"id": 1, "name": "phase_name"})).await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/12/stories/345"))
        .and(body_json(serde_json::json!({"phase": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 345,
            "text": "Move me",
            "phase": {"id": 42, "name": "other_phase"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let moved = api(&mock_server).move_story_to_next_phase(12, 345).await.unwrap();
    assert_eq!(moved["phase"]["id"], 42);
}

#[tokio::test]
async fn test_move_story_in_last_phase_fails() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;
    mount_story(&mock_server, serde_json::json!({"id": 42, "name": "other_phase"})).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = api(&mock_server)
        .move_story_to_next_phase(12, 345)
        .await
        .unwrap_err();
    assert!(matches!(err, KaizenError::LastPhase(ref name) if name == "other_phase"));
}

#[tokio::test]
async fn test_move_story_in_unknown_phase_fails() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;
    mount_story(&mock_server, serde_json::json!({"id": 7, "name": "stale_phase"})).await;

    let err = api(&mock_server)
        .move_story_to_next_phase(12, 345)
        .await
        .unwrap_err();
    assert!(matches!(err, KaizenError::UnknownPhase(ref name) if name == "stale_phase"));
}

#[tokio::test]
async fn test_move_story_to_named_phase() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/12/stories/345"))
        .and(body_json(serde_json::json!({"phase": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 345})))
        .expect(1)
        .mount(&mock_server)
        .await;

    api(&mock_server)
        .move_story_to_phase(12, 345, "other_phase")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_phase_stories_uses_nested_path() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/phases/1/stories/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [{"id": 5, "text": "todo"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let stories = api(&mock_server)
        .list_phase_stories(12, "phase_name")
        .await
        .unwrap();
    assert_eq!(stories["items"][0]["id"], 5);
}

#[tokio::test]
async fn test_list_phase_stories_unknown_phase() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;

    let err = api(&mock_server)
        .list_phase_stories(12, "Ready")
        .await
        .unwrap_err();
    assert!(err.is_domain());
}

#[tokio::test]
async fn test_list_stories_with_enrichments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/stories/"))
        .and(query_param("with", "tasks,tags"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    api(&mock_server)
        .list_stories(12, &["tasks", "tags"], PaginationParams::for_page(2, 10))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_phase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects/12/phases/"))
        .and(body_json(serde_json::json!({
            "name": "Review",
            "description": "Waiting for review",
            "index": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 77,
            "name": "Review"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fields = PhaseFields {
        index: Some(2),
        ..PhaseFields::new("Review", "Waiting for review")
    };
    let phase = api(&mock_server).add_phase(12, &fields).await.unwrap();
    assert_eq!(phase["id"], 77);
}

#[tokio::test]
async fn test_list_projects_without_enrichments_sends_no_with() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/"))
        .and(query_param("with", "phases"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    api(&mock_server).list_projects(&[]).await.unwrap();
}

#[tokio::test]
async fn test_pop_next_moves_top_story_to_working() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/phases/1/stories/"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [{"id": 5, "text": "next up"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/12/stories/5"))
        .and(body_json(serde_json::json!({"phase": 42, "owner": "jdoe"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5,
            "text": "next up",
            "phase": {"id": 42, "name": "other_phase"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let moved = api(&mock_server)
        .pop_next(12, "phase_name", "other_phase", Some("jdoe"))
        .await
        .unwrap();
    assert_eq!(moved["phase"]["id"], 42);
}

#[tokio::test]
async fn test_pop_next_from_empty_phase_fails() {
    let mock_server = MockServer::start().await;
    mount_phases(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/12/phases/1/stories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = api(&mock_server)
        .pop_next(12, "phase_name", "other_phase", None)
        .await
        .unwrap_err();
    assert!(matches!(err, KaizenError::EmptyPhase(ref name) if name == "phase_name"));
}
