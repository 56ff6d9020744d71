//! The topic lifecycle over HTTP.

use super::common::{desk, request_count, TOKEN};
use desk_api::Params;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_topic_lifecycle() {
    let (server, desk) = desk().await;
    let bearer = format!("Bearer {TOKEN}");

    Mock::given(method("POST"))
        .and(path("/api/v1/topics.json"))
        .and(header("authorization", bearer.as_str()))
        .and(body_json(json!({"name": "abcd", "show_in_portal": true, "description": "efgh"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "results": {"topic": {"id": 1234, "name": "abcd", "description": "efgh", "show_in_portal": true}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/topics/1234.json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topic": {"id": 1234, "name": "abcd", "description": "efgh", "show_in_portal": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/topics/1234.json"))
        .and(body_json(json!({"language": "de", "name": "newName"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": {"topic": {"id": 1234, "name": "newName", "description": "efgh", "show_in_portal": true}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/topics/1234.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let topics = desk.topics();
    let id = topics.create("abcd", "efgh", true).await.expect("create");
    assert_eq!(id, 1234u64);

    let topic = topics.retrieve(id).await.expect("retrieve");
    assert_eq!(topic.name, "abcd");
    assert!(topic.show_in_portal);

    let translated = topics
        .update_translation(id, "de", "newName")
        .await
        .expect("update_translation");
    assert_eq!(translated.name, "newName");

    topics.destroy(id).await.expect("destroy");
}

#[tokio::test]
async fn test_retrieve_all_sends_query() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/topics.json"))
        .and(query_param("count", "1"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "topic": {
                    "id": 2,
                    "name": "Canned Responses",
                    "description": "Internal responses to common questions",
                    "show_in_portal": false,
                    "position": 2
                }
            }],
            "page": 2,
            "count": 1,
            "total": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = desk.topics().retrieve_all(1, 2).await.expect("retrieve_all");

    assert_eq!(page.len(), 1);
    assert_eq!(page.total, Some(3));
    assert!(page.has_more());
}

#[tokio::test]
async fn test_update_round_trip_body() {
    let (server, desk) = desk().await;
    let topic = json!({"id": 77, "name": "Returns", "description": "Sending items back", "show_in_portal": true});

    Mock::given(method("GET"))
        .and(path("/api/v1/topics/77.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"topic": topic.clone()})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/topics/77.json"))
        .and(body_json(json!({"name": "Returns", "description": "Sending items back", "show_in_portal": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": {"topic": topic}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = desk.topics().retrieve(77).await.expect("retrieve");
    let updated = desk
        .topics()
        .update(fetched.id, fetched.to_update_params())
        .await
        .expect("update");

    assert_eq!(updated, fetched);
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_the_server() {
    let (server, desk) = desk().await;

    assert!(desk.topics().create("", "", false).await.unwrap_err().is_invalid_argument());
    assert!(desk.topics().retrieve("foobar").await.unwrap_err().is_invalid_argument());
    assert!(desk.topics().destroy("barbaz").await.unwrap_err().is_invalid_argument());
    assert!(desk
        .topics()
        .update(4567, Params::new())
        .await
        .unwrap_err()
        .is_invalid_argument());

    assert_eq!(request_count(&server).await, 0);
}
