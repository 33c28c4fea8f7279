use assert_matches::assert_matches;
use serde_json::json;
use uuid::Uuid;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param};

use patient_cell::models::{CreatePatientRequest, PatientError};
use patient_cell::services::PatientService;
use shared_utils::test_utils::{TestConfig, MockSupabaseResponses};

fn service_for(mock_server: &MockServer) -> PatientService {
    PatientService::new(&TestConfig::with_url(&mock_server.uri()).to_app_config())
}

fn create_request(email: &str) -> CreatePatientRequest {
    CreatePatientRequest {
        first_name: "Aoife".to_string(),
        last_name: "Byrne".to_string(),
        email: email.to_string(),
        phone_number: "0871234567".to_string(),
    }
}

#[tokio::test]
async fn create_patient_persists_and_returns_record() {
    let mock_server = MockServer::start().await;
    let patient_id = Uuid::new_v4().to_string();

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .and(query_param("email", "eq.aoife.byrne@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockSupabaseResponses::patient_response(&patient_id, "aoife.byrne@example.com")
        ])))
        .mount(&mock_server)
        .await;

    let patient = service_for(&mock_server)
        .create_patient(create_request("aoife.byrne@example.com"))
        .await
        .unwrap();

    assert_eq!(patient.id.to_string(), patient_id);
    assert_eq!(patient.email, "aoife.byrne@example.com");
}

#[tokio::test]
async fn create_patient_lowercases_email_before_lookup() {
    let mock_server = MockServer::start().await;
    let patient_id = Uuid::new_v4().to_string();

    // The uniqueness probe must hit the lowercased address.
    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .and(query_param("email", "eq.aoife.byrne@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockSupabaseResponses::patient_response(&patient_id, "aoife.byrne@example.com")
        ])))
        .mount(&mock_server)
        .await;

    let patient = service_for(&mock_server)
        .create_patient(create_request("Aoife.Byrne@Example.COM"))
        .await
        .unwrap();

    assert_eq!(patient.email, "aoife.byrne@example.com");
}

#[tokio::test]
async fn create_patient_rejects_duplicate_email() {
    let mock_server = MockServer::start().await;
    let existing_id = Uuid::new_v4().to_string();

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::patient_response(&existing_id, "aoife.byrne@example.com")
        ])))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server)
        .create_patient(create_request("aoife.byrne@example.com"))
        .await
        .unwrap_err();

    assert_matches!(err, PatientError::EmailAlreadyExists { .. });
}

#[tokio::test]
async fn create_patient_rejects_malformed_fields_without_touching_storage() {
    let mock_server = MockServer::start().await;

    // No mocks mounted: a storage round-trip would fail the test.
    let err = service_for(&mock_server)
        .create_patient(create_request("not-an-email"))
        .await
        .unwrap_err();

    assert_matches!(err, PatientError::ValidationError(_));
}

#[tokio::test]
async fn get_patient_returns_none_for_unknown_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let found = service_for(&mock_server)
        .get_patient(Uuid::new_v4())
        .await
        .unwrap();

    assert!(found.is_none());
}
