//! Mock authentication service
//!
//! A wiremock server answering the three endpoints the crate calls:
//! `get-session`, `update-user` and `change-email`.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_COOKIE: &str = "better-auth.session_token=valid";

pub struct MockAuthService {
    server: MockServer,
}

impl MockAuthService {
    /// Start the server; any request without the session cookie is anonymous.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/get-session"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .with_priority(10)
            .mount(&server)
            .await;
        Self { server }
    }

    /// Start a server whose session endpoint always fails with `status`
    pub async fn failing(status: u16) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/get-session"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests carrying [`SESSION_COOKIE`] belong to Jeanne Dupont.
    pub async fn mock_signed_in(&self) {
        Mock::given(method("GET"))
            .and(path("/api/auth/get-session"))
            .and(header_regex("cookie", "better-auth\\.session_token=valid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json()))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if the session endpoint is called at all.
    pub async fn expect_no_session_lookup(&self) {
        Mock::given(method("GET"))
            .and(path("/api/auth/get-session"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .with_priority(1)
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn expect_update_user(&self, name: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/auth/update-user"))
            .and(body_json(json!({ "name": name })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn expect_change_email(&self, new_email: &str, callback_url: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/auth/change-email"))
            .and(body_json(json!({ "newEmail": new_email, "callbackURL": callback_url })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn reject_change_email(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/change-email"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }
}

pub fn session_json() -> Value {
    json!({
        "session": {
            "id": "sess_1",
            "userId": "user_1",
            "expiresAt": "2030-01-01T00:00:00.000Z",
            "token": "valid"
        },
        "user": {
            "id": "user_1",
            "name": "Jeanne Dupont",
            "email": "jeanne@example.com",
            "emailVerified": true,
            "image": null
        }
    })
}
