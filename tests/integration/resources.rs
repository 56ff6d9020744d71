//! The other resource handles over HTTP.

use super::common::desk;
use desk_api::resources::ResourceType;
use desk_api::Params;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_article_created_under_topic() {
    let (server, desk) = desk().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/topics/2/articles.json"))
        .and(body_json(json!({
            "subject": "Resetting your password",
            "show_in_portal": true,
            "main_content": "<p>Use the link.</p>"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "results": {"article": {"id": 31, "subject": "Resetting your password", "show_in_portal": true}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = desk
        .articles()
        .create(2, "Resetting your password", "<p>Use the link.</p>", true)
        .await
        .expect("create article");
    assert_eq!(id, 31u64);
}

#[tokio::test]
async fn test_case_update() {
    let (server, desk) = desk().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/cases/88.json"))
        .and(body_json(json!({"case_status_type": "resolved", "priority": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": {"case": {
                "id": 88,
                "priority": 2,
                "case_status_type": "resolved",
                "updated_at": "2012-05-02T09:00:00Z"
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let case = desk
        .cases()
        .update(88, Params::new().with("case_status_type", "resolved").with("priority", 2))
        .await
        .expect("update case");

    assert_eq!(case.priority, Some(2));
    assert!(case.updated_at.is_some());
}

#[tokio::test]
async fn test_interaction_create() {
    let (server, desk) = desk().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/interactions.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "results": {"interaction": {"id": 4242}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = desk
        .interactions()
        .create("ada@example.com", "Printer on fire", "Smoke everywhere")
        .await
        .expect("create interaction");
    assert_eq!(id, 4242u64);
}

#[tokio::test]
async fn test_user_groups_listing() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path(ResourceType::UserGroups.collection_path()))
        .and(query_param("count", "10"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"user_group": {"id": 3, "name": "Tier 2"}}],
            "page": 1,
            "count": 10,
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = desk.user_groups().retrieve_all(10, 1).await.expect("list groups");
    let names: Vec<_> = page.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["Tier 2"]);
    assert!(!page.has_more());
}
