//! CRM transport tests against a mocked contacts endpoint

#![cfg(feature = "server")]

use rejuvana::lead::crm::CrmClient;
use rejuvana::lead::{LeadForm, LeadSubmission, SubmissionState, SubmitError};
use rejuvana::utils::config::LeadConfig;
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LeadConfig {
    LeadConfig {
        endpoint: format!("{}/api/reach/v1/contacts", server.uri()),
        timeout_secs: 2,
        ..LeadConfig::default()
    }
}

fn filled_submission(config: LeadConfig) -> LeadSubmission {
    let mut submission = LeadSubmission::new(config);
    *submission.form_mut() = LeadForm::new("Jane Doe", "jane@example.com", "Morning routines");
    submission
}

#[tokio::test]
async fn test_accepted_contact_clears_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reach/v1/contacts"))
        .and(bearer_token("crm-token"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "name": "Jane",
            "surname": "Doe",
            "note": "[Website Lead] Morning routines"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = CrmClient::new(&config, "crm-token".to_string()).unwrap();
    let mut submission = filled_submission(config);

    assert!(submission.submit(&client).await.unwrap());
    assert_eq!(submission.state(), &SubmissionState::Success);
    assert_eq!(submission.form(), &LeadForm::default());
}

#[tokio::test]
async fn test_single_name_uses_placeholder_surname() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "email": "solo@example.com",
            "name": "Solo",
            "surname": "-",
            "note": "[Website Lead] Hi"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = CrmClient::new(&config, "t".to_string()).unwrap();
    let mut submission = LeadSubmission::new(config);
    *submission.form_mut() = LeadForm::new("Solo", "solo@example.com", "Hi");

    submission.submit(&client).await.unwrap();
    assert_eq!(submission.state(), &SubmissionState::Success);
}

#[tokio::test]
async fn test_rejected_contact_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "errors": { "email": ["invalid"] } })),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = CrmClient::new(&config, "t".to_string()).unwrap();
    let mut submission = filled_submission(config);

    submission.submit(&client).await.unwrap();
    assert_eq!(
        submission.error_message(),
        Some(SubmitError::Rejected(422).user_message())
    );
    assert_eq!(submission.form().name(), "Jane Doe");
}

#[tokio::test]
async fn test_server_error_is_connection_issue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = CrmClient::new(&config, "t".to_string()).unwrap();
    let mut submission = filled_submission(config);

    submission.submit(&client).await.unwrap();
    assert!(matches!(submission.state(), SubmissionState::Error(_)));
    assert_eq!(
        submission.error_message(),
        Some(SubmitError::Unavailable(String::new()).user_message())
    );
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let config = LeadConfig {
        endpoint: "http://127.0.0.1:9/contacts".to_string(),
        timeout_secs: 1,
        ..LeadConfig::default()
    };
    let client = CrmClient::new(&config, "t".to_string()).unwrap();
    let mut submission = filled_submission(config);

    submission.submit(&client).await.unwrap();
    assert!(submission.error_message().is_some());
    assert_eq!(submission.form().email(), "jane@example.com");
}
