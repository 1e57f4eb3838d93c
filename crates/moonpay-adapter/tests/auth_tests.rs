/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for auth flow
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or flow changes
*/

mod common;

use common::{client_for, customer_json, mock_jwt_token, setup_mock_server, TEST_API_KEY};
use moonpay_adapter::{EmailLogin, LoginState, MoonpayClient};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_login_starts_unauthenticated() {
    let client = assert_ok!(MoonpayClient::new(TEST_API_KEY));
    let login = EmailLogin::new(client);

    assert_eq!(login.state(), &LoginState::Unauthenticated);
    assert!(login.customer().is_none());
}

#[tokio::test]
async fn test_login_then_use_and_refresh_session() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/customers/email_login"))
        .and(query_param("apiKey", TEST_API_KEY))
        .and(body_json(serde_json::json!({"email": "test@example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"preAuthenticated": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/customers/email_login"))
        .and(query_param("apiKey", TEST_API_KEY))
        .and(body_json(serde_json::json!({
            "email": "test@example.com",
            "securityCode": "424242",
            "externalCustomerId": "some-test-id"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "csrfToken": "csrf-1",
            "token": mock_jwt_token(),
            "customer": customer_json("test@example.com")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/customers/refresh_token"))
        .and(header("authorization", format!("Bearer {}", mock_jwt_token()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "csrfToken": "csrf-2",
            "token": "jwt-refreshed",
            "customer": customer_json("test@example.com")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/customers/me"))
        .and(header("authorization", "Bearer jwt-refreshed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("test@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let mut login = EmailLogin::new(client_for(&server));

    let pre_authenticated = assert_ok!(login.send_code("test@example.com").await);
    assert!(!pre_authenticated);

    let auth = assert_ok!(login.confirm(Some("424242"), "some-test-id").await);
    assert!(!auth.token.is_empty());

    let customer = login.customer().expect("authenticated customer").clone();
    let refreshed = assert_ok!(customer.refresh_token().await);
    assert_eq!(refreshed.token, "jwt-refreshed");

    // The flow's handle shares the refreshed session
    assert_eq!(
        login.customer().map(|customer| customer.token()),
        Some("jwt-refreshed".to_string())
    );

    let me = assert_ok!(customer.info().await);
    assert_eq!(me.email.as_deref(), Some("test@example.com"));
}
