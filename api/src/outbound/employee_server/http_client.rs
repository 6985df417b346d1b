//! Reqwest-backed adapter for the upstream employee service.
//!
//! This adapter owns transport details only: endpoint construction, timeout
//! configuration, envelope decoding, and classification of HTTP/transport
//! failures into [`EmployeeDirectoryError`] variants.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{CreateEmployeeRequestDto, DeleteEmployeeRequestDto, EmployeeRecordDto,
    EnvelopeDto};
use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::domain::{CreateEmployeeInput, Employee};

/// Failures constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeServerClientError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The configured base URL cannot address the employee endpoints.
    #[error("invalid upstream base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Upstream client issuing HTTP calls against one base URL.
pub struct EmployeeServerClient {
    client: Client,
    collection_url: Url,
}

impl EmployeeServerClient {
    /// Build a client with explicit connect and read timeouts.
    ///
    /// The base URL should end with a trailing slash so the employee
    /// endpoints resolve underneath it.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL does not join with the employee path.
    pub fn new(
        base_url: &Url,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, EmployeeServerClientError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()?;
        let collection_url = base_url.join("employee")?;
        Ok(Self {
            client,
            collection_url,
        })
    }

    fn item_url(&self, id: uuid::Uuid) -> String {
        format!("{}/{id}", self.collection_url)
    }
}

#[async_trait]
impl EmployeeDirectory for EmployeeServerClient {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        let response = self
            .client
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_employee_list(body.as_ref())
    }

    async fn find_by_id(
        &self,
        id: uuid::Uuid,
    ) -> Result<Option<Employee>, EmployeeDirectoryError> {
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        // A 404 on the item endpoint is the upstream's "not found" signal,
        // a normal outcome rather than a failure.
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_employee_record(body.as_ref())
    }

    async fn create(
        &self,
        input: &CreateEmployeeInput,
    ) -> Result<Employee, EmployeeDirectoryError> {
        let response = self
            .client
            .post(self.collection_url.clone())
            .json(&CreateEmployeeRequestDto::from(input))
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_created_employee(body.as_ref())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeDirectoryError> {
        // The upstream requires a JSON body on DELETE; `.json` also sets the
        // content type it insists on.
        let response = self
            .client
            .delete(self.collection_url.clone())
            .json(&DeleteEmployeeRequestDto { name })
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_deletion_confirmed(body.as_ref())
    }
}

fn parse_employee_list(body: &[u8]) -> Result<Vec<Employee>, EmployeeDirectoryError> {
    let envelope: EnvelopeDto<Vec<EmployeeRecordDto>> = decode_envelope(body)?;
    envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|record| record.into_employee().map_err(EmployeeDirectoryError::decode))
        .collect()
}

fn parse_employee_record(body: &[u8]) -> Result<Option<Employee>, EmployeeDirectoryError> {
    let envelope: EnvelopeDto<EmployeeRecordDto> = decode_envelope(body)?;
    envelope
        .data
        .map(|record| record.into_employee().map_err(EmployeeDirectoryError::decode))
        .transpose()
}

fn parse_created_employee(body: &[u8]) -> Result<Employee, EmployeeDirectoryError> {
    parse_employee_record(body)?.ok_or_else(|| {
        EmployeeDirectoryError::decode("create response envelope missing data")
    })
}

fn parse_deletion_confirmed(body: &[u8]) -> Result<bool, EmployeeDirectoryError> {
    let envelope: EnvelopeDto<bool> = decode_envelope(body)?;
    Ok(envelope.data == Some(true))
}

fn decode_envelope<T>(body: &[u8]) -> Result<EnvelopeDto<T>, EmployeeDirectoryError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        EmployeeDirectoryError::decode(format!("invalid upstream JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> EmployeeDirectoryError {
    if error.is_timeout() {
        EmployeeDirectoryError::timeout(error.to_string())
    } else {
        EmployeeDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeDirectoryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    if status == StatusCode::TOO_MANY_REQUESTS {
        EmployeeDirectoryError::rate_limited(message)
    } else if status.is_client_error() {
        EmployeeDirectoryError::ClientStatus {
            status: status.as_u16(),
            message,
        }
    } else {
        EmployeeDirectoryError::ServerStatus {
            status: status.as_u16(),
            message,
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network decoding and classification helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS)]
    #[case::bad_request(StatusCode::BAD_REQUEST)]
    #[case::conflict(StatusCode::CONFLICT)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY)]
    fn maps_http_statuses_to_expected_classifications(#[case] status: StatusCode) {
        let error = map_status_error(status, b"{\"status\":\"error\"}");
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                assert!(matches!(error, EmployeeDirectoryError::RateLimited { .. }));
            }
            s if s.is_client_error() => {
                assert!(matches!(
                    error,
                    EmployeeDirectoryError::ClientStatus { status, .. } if status == s.as_u16()
                ));
            }
            s => {
                assert!(matches!(
                    error,
                    EmployeeDirectoryError::ServerStatus { status, .. } if status == s.as_u16()
                ));
            }
        }
    }

    #[test]
    fn decodes_wire_records_into_employees() {
        let body = r#"{
            "data": [
                {
                    "id": "5a2f4b6e-9c1d-4f33-8a6b-2f1f0c9d7e21",
                    "employee_name": "Alice",
                    "employee_salary": 100,
                    "employee_age": 30,
                    "employee_title": "Engineer",
                    "employee_email": "alice@example.com"
                },
                {
                    "id": "7c8d9e0f-1a2b-4c3d-9e5f-6a7b8c9d0e1f",
                    "employee_name": "Bob",
                    "employee_salary": 200,
                    "employee_age": 41,
                    "employee_title": "Manager"
                }
            ],
            "status": "Successfully processed request."
        }"#;

        let employees = parse_employee_list(body.as_bytes()).expect("list decodes");
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Alice");
        assert_eq!(employees[0].salary, Some(100));
        assert_eq!(employees[0].email.as_deref(), Some("alice@example.com"));
        assert_eq!(employees[1].id, "7c8d9e0f-1a2b-4c3d-9e5f-6a7b8c9d0e1f");
        assert_eq!(employees[1].email, None);
    }

    #[test]
    fn absent_or_null_collection_data_is_an_empty_list() {
        for body in [r#"{"status":"ok"}"#, r#"{"data":null,"status":"ok"}"#] {
            let employees = parse_employee_list(body.as_bytes()).expect("list decodes");
            assert!(employees.is_empty(), "body {body} should yield no employees");
        }
    }

    #[test]
    fn record_without_id_is_a_decode_failure() {
        let body = r#"{"data":[{"employee_name":"Ghost"}]}"#;
        let error = parse_employee_list(body.as_bytes()).expect_err("decode fails");
        assert!(matches!(error, EmployeeDirectoryError::Decode { .. }));
    }

    #[test]
    fn record_with_absent_salary_maps_to_unranked() {
        let body = r#"{
            "data": {
                "id": "5a2f4b6e-9c1d-4f33-8a6b-2f1f0c9d7e21",
                "employee_name": "Alice",
                "employee_title": "Engineer"
            }
        }"#;
        let employee = parse_employee_record(body.as_bytes())
            .expect("record decodes")
            .expect("record present");
        assert_eq!(employee.salary, None);
    }

    #[test]
    fn missing_create_response_data_is_a_decode_failure() {
        let error =
            parse_created_employee(br#"{"data":null,"status":"error"}"#).expect_err("no data");
        assert!(matches!(error, EmployeeDirectoryError::Decode { .. }));
    }

    #[rstest]
    #[case::confirmed(r#"{"data":true}"#, true)]
    #[case::declined(r#"{"data":false}"#, false)]
    #[case::absent(r#"{"data":null}"#, false)]
    fn deletion_is_confirmed_only_by_an_explicit_true(
        #[case] body: &str,
        #[case] expected: bool,
    ) {
        let confirmed = parse_deletion_confirmed(body.as_bytes()).expect("flag decodes");
        assert_eq!(confirmed, expected);
    }

    #[test]
    fn malformed_payload_is_a_decode_failure() {
        let error = parse_employee_list(b"<html>oops</html>").expect_err("decode fails");
        assert!(matches!(error, EmployeeDirectoryError::Decode { .. }));
    }

    #[test]
    fn create_request_uses_plain_field_names() {
        let input = CreateEmployeeInput {
            name: "Grace".to_owned(),
            salary: 120_000,
            age: 45,
            title: "Admiral".to_owned(),
        };
        let body = serde_json::to_value(CreateEmployeeRequestDto::from(&input))
            .expect("serializes");
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Grace",
                "salary": 120_000,
                "age": 45,
                "title": "Admiral",
            })
        );
    }

    #[test]
    fn item_urls_extend_the_configured_base() {
        let base = Url::parse("http://localhost:8112/api/v1/").expect("valid base");
        let client = EmployeeServerClient::new(
            &base,
            Duration::from_secs(3),
            Duration::from_secs(5),
        )
        .expect("client builds");
        let id = uuid::Uuid::nil();
        assert_eq!(
            client.item_url(id),
            "http://localhost:8112/api/v1/employee/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn long_error_bodies_are_previewed_not_echoed() {
        let body = "x".repeat(500);
        let error = map_status_error(StatusCode::BAD_GATEWAY, body.as_bytes());
        let EmployeeDirectoryError::ServerStatus { message, .. } = error else {
            panic!("expected server status classification");
        };
        assert!(message.len() < 200, "preview should truncate: {message}");
        assert!(message.ends_with("..."));
    }
}
