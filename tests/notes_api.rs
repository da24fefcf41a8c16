mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::common::TestApp;

fn note_ids(list_json: &Value) -> Vec<String> {
    list_json
        .get("notes")
        .and_then(Value::as_array)
        .expect("list response misses notes array")
        .iter()
        .map(|n| {
            n.get("id")
                .and_then(Value::as_str)
                .expect("note misses id")
                .to_string()
        })
        .collect()
}

#[tokio::test]
async fn created_note_is_listed_exactly_once() {
    let app = TestApp::new();
    let user = app.signup_and_login().await;

    let (status, created) = app
        .post_json(
            "/notes",
            json!({
                "title": "Groceries",
                "description": "milk, eggs"
            }),
            Some(&user.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("message").and_then(Value::as_str),
        Some("Note Created")
    );
    let note_id = created
        .pointer("/note/id")
        .and_then(Value::as_str)
        .expect("create response misses note id")
        .to_string();

    let (status, list_json) = app.get_json("/notes", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note_ids(&list_json), vec![note_id]);

    let listed = &list_json["notes"][0];
    assert_eq!(listed["title"], "Groceries");
    assert_eq!(listed["description"], "milk, eggs");
    assert!(listed.get("createdAt").and_then(Value::as_str).is_some());
    assert!(listed.get("updatedAt").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn missing_fields_are_stored_as_empty_strings() {
    let app = TestApp::new();
    let user = app.signup_and_login().await;

    let (status, created) = app
        .post_json("/notes", json!({}), Some(&user.token))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["note"]["title"], "");
    assert_eq!(created["note"]["description"], "");
}

#[tokio::test]
async fn get_update_and_delete_flow() {
    let app = TestApp::new();
    let user = app.signup_and_login().await;
    let note_id = app
        .create_note("Draft", "first words", Some(&user.token))
        .await;
    let path = format!("/notes/{note_id}");

    let (status, before) = app.get_json(&path, Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before["note"]["title"], "Draft");

    let (status, body) = app
        .put_json(
            &path,
            json!({
                "newTitle": "Final",
                "newDescription": "last words"
            }),
            Some(&user.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Note updated successfully")
    );

    let (status, after) = app.get_json(&path, Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["note"]["id"], before["note"]["id"]);
    assert_eq!(after["note"]["createdAt"], before["note"]["createdAt"]);
    assert_eq!(after["note"]["title"], "Final");
    assert_eq!(after["note"]["description"], "last words");

    let (status, body) = app.delete_json(&path, Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Note Deleted")
    );

    let (status, body) = app.get_json(&path, Some(&user.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("note").is_none());

    // deleting again still answers success
    let (status, _) = app.delete_json(&path, Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, list_json) = app.get_json("/notes", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(note_ids(&list_json).is_empty());
}

#[tokio::test]
async fn update_of_missing_note_is_not_found() {
    let app = TestApp::new();
    let user = app.signup_and_login().await;

    let (status, body) = app
        .put_json(
            &format!("/notes/{}", Uuid::new_v4()),
            json!({
                "newTitle": "x",
                "newDescription": "y"
            }),
            Some(&user.token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("NOT_FOUND")
    );
}

#[tokio::test]
async fn notes_are_scoped_to_their_owner() {
    let app = TestApp::new();
    let alice = app.signup_and_login().await;
    let bob = app.signup_and_login().await;

    let alice_note = app
        .create_note("alice's", "private", Some(&alice.token))
        .await;
    let bob_note = app.create_note("bob's", "private", Some(&bob.token)).await;

    let (_, alice_list) = app.get_json("/notes", Some(&alice.token)).await;
    assert_eq!(note_ids(&alice_list), vec![alice_note.clone()]);

    let (_, bob_list) = app.get_json("/notes", Some(&bob.token)).await;
    assert_eq!(note_ids(&bob_list), vec![bob_note]);

    let path = format!("/notes/{alice_note}");
    let (status, _) = app.get_json(&path, Some(&bob.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .put_json(
            &path,
            json!({
                "newTitle": "hijacked",
                "newDescription": ""
            }),
            Some(&bob.token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // bob's delete is a no-op for alice's note
    let (status, _) = app.delete_json(&path, Some(&bob.token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, still_there) = app.get_json(&path, Some(&alice.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(still_there["note"]["title"], "alice's");
}

#[tokio::test]
async fn malformed_note_id_is_bad_request() {
    let app = TestApp::new();
    let user = app.signup_and_login().await;

    let (status, _) = app.get_text("/notes/not-a-uuid", Some(&user.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn open_mode_shares_notes_without_auth() {
    let app = TestApp::open();

    let first = app.create_note("one", "1", None).await;
    let second = app.create_note("two", "2", None).await;

    let (status, list_json) = app.get_json("/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids = note_ids(&list_json);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first));
    assert!(ids.contains(&second));

    let (status, _) = app.delete_json(&format!("/notes/{first}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list_json) = app.get_json("/notes", None).await;
    assert_eq!(note_ids(&list_json), vec![second]);
}

#[tokio::test]
async fn open_mode_has_no_auth_routes() {
    let app = TestApp::open();

    let (status, _) = app
        .post_json(
            "/signup",
            json!({
                "username": "nobody",
                "password": "pw"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
