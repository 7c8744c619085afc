use serde_json::{Value, json};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::any};

use crate::helpers::{TestApp, credentials, error_message, random_username};

#[tokio::test]
async fn login_returns_a_token_for_the_registered_identity() {
    let app = TestApp::new().await;
    let username = random_username();

    let registered: Value = app
        .post_register(&credentials(&username, "s3cret"))
        .await
        .json()
        .await
        .unwrap();

    let response = app.post_login(&credentials(&username, "s3cret")).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], registered["user"]["id"]);
    assert_eq!(body["user"]["username"], username.as_str());
    assert!(body["user"].get("password").is_none());

    let token = body["token"].as_str().expect("Missing token");
    let claims = app.token_issuer.decode(token).expect("Token does not decode");
    assert_eq!(json!(claims.id), registered["user"]["id"]);
    assert_eq!(claims.username, username);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_differ_only_in_message() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_register(&credentials(&username, "s3cret")).await;

    let unknown = app
        .post_login(&credentials(&random_username(), "s3cret"))
        .await;
    let wrong = app.post_login(&credentials(&username, "wrong")).await;

    assert_eq!(unknown.status().as_u16(), 400);
    assert_eq!(wrong.status().as_u16(), 400);
    assert_eq!(error_message(unknown).await, "User not found");
    assert_eq!(error_message(wrong).await, "Invalid password");
}

#[tokio::test]
async fn login_with_missing_credentials_is_a_bad_request() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({}),
        json!({ "username": "alice" }),
        json!({ "password": "s3cret" }),
    ];

    for test_case in test_cases {
        let response = app.post_login(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
    }
}

#[tokio::test]
async fn store_failure_during_lookup_is_an_opaque_internal_error() {
    let store = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "database is down"
        })))
        .expect(1)
        .mount(&store)
        .await;
    let app = TestApp::with_mock_store(&store).await;

    let response = app.post_login(&credentials("alice", "s3cret")).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_message(response).await, "Internal server error");
}

#[tokio::test]
async fn empty_lookup_result_is_user_not_found() {
    let store = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&store)
        .await;
    let app = TestApp::with_mock_store(&store).await;

    let response = app.post_login(&credentials("alice", "s3cret")).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "User not found");
}

#[tokio::test]
async fn users_with_legacy_bcrypt_digests_can_log_in() {
    let store = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 12,
            "username": "legacy",
            "password": "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW"
        }])))
        .mount(&store)
        .await;
    let app = TestApp::with_mock_store(&store).await;

    let response = app.post_login(&credentials("legacy", "U*U")).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], 12);

    let wrong = app.post_login(&credentials("legacy", "s3cret")).await;
    assert_eq!(wrong.status().as_u16(), 400);
    assert_eq!(error_message(wrong).await, "Invalid password");
}
