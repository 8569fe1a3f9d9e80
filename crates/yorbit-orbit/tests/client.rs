//! Integration tests for `OrbitClient` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yorbit_orbit::{MemberIdentity, NewActivity, OrbitClient, OrbitError};

fn test_client(base_url: &str) -> OrbitClient {
    OrbitClient::with_base_url("my-workspace", "test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn activity(key: &str) -> NewActivity {
    NewActivity {
        activity_type: "youtube:comment".to_owned(),
        key: key.to_owned(),
        title: "Commented on a YouTube video".to_owned(),
        description: Some("nice video".to_owned()),
        link: None,
        link_text: None,
        occurred_at: None,
        member: MemberIdentity {
            name: Some("someone".to_owned()),
            youtube: None,
        },
    }
}

#[tokio::test]
async fn create_activity_posts_wrapped_body_with_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "activity": {
                "activity_type": "youtube:comment",
                "key": "youtube-comment-c1",
                "title": "Commented on a YouTube video"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activity": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .create_activity(&activity("youtube-comment-c1"))
        .await
        .expect("should create the activity");
}

#[tokio::test]
async fn key_conflict_is_a_duplicate_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "errors": { "key": ["has already been taken"] } })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.create_activity(&activity("youtube-comment-c1")).await;

    assert!(
        matches!(result, Err(OrbitError::Duplicate { ref key }) if key == "youtube-comment-c1"),
        "expected Duplicate, got: {result:?}"
    );
}

#[tokio::test]
async fn other_rejections_carry_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "errors": { "activity_type": ["can't be blank"] } })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.create_activity(&activity("k1")).await;

    match result {
        Err(OrbitError::Status { status, ref body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("activity_type"), "body: {body}");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn add_activities_tallies_every_item_without_aborting() {
    let server = MockServer::start().await;

    // k-added-* succeed, k-dup-* collide on key, k-err fails hard.
    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(body_partial_json(json!({ "activity": { "key": "k-added-1" } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activity": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(body_partial_json(json!({ "activity": { "key": "k-added-2" } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activity": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(body_partial_json(json!({ "activity": { "key": "k-dup-1" } })))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "errors": { "key": ["has already been taken"] } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(body_partial_json(json!({ "activity": { "key": "k-err" } })))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/my-workspace/activities"))
        .and(body_partial_json(json!({ "activity": { "key": "k-added-3" } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activity": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let batch = vec![
        activity("k-added-1"),
        activity("k-dup-1"),
        activity("k-err"),
        activity("k-added-2"),
        activity("k-added-3"),
    ];

    let client = test_client(&server.uri());
    let outcome = client.add_activities(&batch).await;

    assert_eq!(outcome.added, 3);
    assert_eq!(outcome.duplicates, 1);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].key, "k-err");
    assert!(
        matches!(outcome.errors[0].source, OrbitError::Status { status: 500, .. }),
        "expected the 500 to be recorded, got: {:?}",
        outcome.errors[0].source
    );
    assert_eq!(
        outcome.added + outcome.duplicates + outcome.errors.len(),
        batch.len()
    );
}

#[tokio::test]
async fn empty_batch_yields_an_empty_tally() {
    let server = MockServer::start().await;

    let client = test_client(&server.uri());
    let outcome = client.add_activities(&[]).await;

    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.duplicates, 0);
    assert!(outcome.errors.is_empty());
}
