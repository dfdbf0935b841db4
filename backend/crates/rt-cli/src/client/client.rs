use crate::{CliClientResult, ClientError};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, header::AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

/// Object keys some backends wrap the login credential in.
const LOGIN_CREDENTIAL_KEYS: [&str; 3] = ["token", "accessToken", "jwt"];

/// HTTP client for the research tracker REST API
pub struct Client {
    pub base_url: String,
    authorization: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a client whose requests give up after `timeout`.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8080/api")
    /// * `authorization` - Optional `Authorization` header value ("Bearer ...")
    pub fn with_timeout(
        base_url: &str,
        authorization: Option<String>,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::from_parts(base_url, authorization, client))
    }

    fn from_parts(base_url: &str, authorization: Option<String>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
            client,
        }
    }

    /// Build a request with the optional bearer header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref authorization) = self.authorization {
            req = req.header(AUTHORIZATION, authorization.as_str());
        }

        req
    }

    /// Execute request and handle errors
    ///
    /// Empty bodies come back as `Value::Null` and non-JSON bodies as
    /// `Value::String`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            debug!("Request failed with {status}");
            return Err(api_error(status, &body));
        }

        Ok(body)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange username and password for a credential.
    ///
    /// The credential is returned as-is; callers decide whether it decodes.
    pub async fn login(&self, username: &str, password: &str) -> CliClientResult<String> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { username, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        let response = self.execute(req).await?;
        credential_from_login(&response)
    }

    /// Create an account. Signing up does not log in.
    pub async fn signup(
        &self,
        full_name: &str,
        username: &str,
        password: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SignupRequest<'a> {
            full_name: &'a str,
            username: &'a str,
            password: &'a str,
        }

        let body = SignupRequest {
            full_name,
            username,
            password,
        };
        let req = self.request(Method::POST, "/auth/signup").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Create a project; the backend assigns the acting user as its PI
    pub async fn create_project(
        &self,
        title: &str,
        description: Option<&str>,
        start_date: &str,
        end_date: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateProjectRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            start_date: &'a str,
            end_date: &'a str,
        }

        let body = CreateProjectRequest {
            title,
            description,
            start_date,
            end_date,
        };
        let req = self.request(Method::POST, "/projects").json(&body);
        self.execute(req).await
    }

    /// Move a project to a new lifecycle status (wire form, e.g. "ACTIVE")
    pub async fn update_project_status(&self, id: &str, status: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct StatusRequest<'a> {
            status: &'a str,
        }

        let req = self
            .request(Method::PUT, &format!("/projects/{}/status", id))
            .json(&StatusRequest { status });
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Milestone Operations
    // =========================================================================

    /// List all milestones
    pub async fn list_milestones(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/milestones");
        self.execute(req).await
    }

    /// Create a milestone in a project on behalf of `user_id`
    pub async fn create_milestone(
        &self,
        project_id: &str,
        user_id: &str,
        title: &str,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateMilestoneRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            due_date: Option<&'a str>,
        }

        let body = CreateMilestoneRequest {
            title,
            description,
            due_date,
        };
        let req = self
            .request(
                Method::POST,
                &format!("/milestones/{}/create/{}", project_id, user_id),
            )
            .json(&body);
        self.execute(req).await
    }

    /// Mark a milestone completed
    pub async fn complete_milestone(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PUT, &format!("/milestones/{}/complete", id));
        self.execute(req).await
    }

    /// Delete a milestone
    pub async fn delete_milestone(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/milestones/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Document Operations
    // =========================================================================

    /// List all documents
    pub async fn list_documents(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/documents");
        self.execute(req).await
    }

    /// Register a document link in a project on behalf of `user_id`
    pub async fn upload_document(
        &self,
        project_id: &str,
        user_id: &str,
        title: &str,
        description: Option<&str>,
        url_or_path: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UploadDocumentRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            url_or_path: &'a str,
        }

        let body = UploadDocumentRequest {
            title,
            description,
            url_or_path,
        };
        let req = self
            .request(
                Method::POST,
                &format!("/documents/{}/upload/{}", project_id, user_id),
            )
            .json(&body);
        self.execute(req).await
    }

    /// Delete a document
    pub async fn delete_document(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/documents/{}", id));
        self.execute(req).await
    }
}

pub(crate) fn parse_body(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// Map a failed response to `ClientError::Api`.
///
/// Understands `{"error": {"code", "message"}}` envelopes and the flat
/// `{"status", "error", "message"}` shape; anything else is keyed by the
/// HTTP status code.
#[track_caller]
pub(crate) fn api_error(status: StatusCode, body: &Value) -> ClientError {
    if let Some(error) = body.get("error").filter(|e| e.is_object()) {
        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN");
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return ClientError::api_error(code, message);
    }

    let message = body
        .get("message")
        .and_then(|v| v.as_str())
        .filter(|m| !m.is_empty())
        .or_else(|| body.get("error").and_then(|v| v.as_str()))
        .or_else(|| body.as_str())
        .or_else(|| status.canonical_reason())
        .unwrap_or("Unknown error");

    ClientError::api_error(status.as_u16().to_string(), message)
}

#[track_caller]
pub(crate) fn credential_from_login(body: &Value) -> CliClientResult<String> {
    let credential = match body {
        Value::String(raw) => Some(raw.as_str()),
        Value::Object(fields) => LOGIN_CREDENTIAL_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str)),
        _ => None,
    };

    credential
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .ok_or_else(|| {
            ClientError::api_error(
                "INVALID_LOGIN_RESPONSE",
                "Login response did not contain a credential",
            )
        })
}
