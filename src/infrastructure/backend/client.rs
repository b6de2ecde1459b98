//! Test generator backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    ErrorResponse, FilesResponse, GreetingResponse, PullRequestBody, PullRequestResponse,
    SummariesResponse, SummaryBody, TestCodeBody, TestCodeResponse,
};
use crate::domain::entities::RepoRef;
use crate::domain::errors::BackendError;
use crate::domain::ports::{BackendPort, PullRequestRequest, SummaryRequest, TestCodeRequest};

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "https://react-test-case-generator-app.onrender.com/";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the test generator backend.
pub struct HttpBackendClient {
    client: Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Creates client for `base_url`.
    ///
    /// Without a timeout requests wait as long as the runtime allows.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| BackendError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse backend response");
            BackendError::transport(format!("failed to parse response: {e}"))
        })
    }

    /// Rejects non-2xx answers of endpoints without an error contract.
    fn ensure_success(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(status = %status, url = %response.url(), "Backend request failed");
            Err(BackendError::transport(format!("HTTP {}", status.as_u16())))
        }
    }

    async fn rejection(status: StatusCode, response: Response) -> BackendError {
        let detail = match response.json::<ErrorResponse>().await {
            Ok(error) => error.detail,
            Err(_) => format!("HTTP {}", status.as_u16()),
        };

        BackendError::application(status.as_u16(), detail)
    }
}

fn map_send_error(e: &reqwest::Error) -> BackendError {
    warn!(error = %e, "Failed to reach backend");
    if e.is_timeout() {
        BackendError::transport("request timed out")
    } else if e.is_connect() {
        BackendError::transport("failed to connect to backend")
    } else {
        BackendError::transport(e.to_string())
    }
}

#[async_trait]
impl BackendPort for HttpBackendClient {
    async fn greeting(&self) -> Result<String, BackendError> {
        let url = self.endpoint("");
        debug!(url = %url, "Fetching greeting");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;
        let greeting: GreetingResponse = Self::decode(Self::ensure_success(response)?).await?;

        Ok(greeting.message)
    }

    async fn list_files(&self, repo: &RepoRef) -> Result<Vec<String>, BackendError> {
        let url = self.endpoint("list-files");
        debug!(repo = %repo, "Listing repository files");

        let response = self
            .client
            .get(&url)
            .query(&[("owner", repo.owner()), ("repo", repo.repo())])
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;
        let listing: FilesResponse = Self::decode(Self::ensure_success(response)?).await?;

        Ok(files_from_response(listing))
    }

    async fn generate_summaries(
        &self,
        request: &SummaryRequest,
    ) -> Result<Vec<String>, BackendError> {
        let url = self.endpoint("generate-test-summaries");
        debug!(
            repo_url = %request.repo_url,
            files = request.selected_files.len(),
            "Requesting summaries"
        );

        let response = self
            .client
            .post(&url)
            .json(&SummaryBody::from(request))
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;
        let summaries: SummariesResponse = Self::decode(Self::ensure_success(response)?).await?;

        Ok(summaries.summaries)
    }

    async fn generate_test_code(
        &self,
        request: &TestCodeRequest,
    ) -> Result<Option<String>, BackendError> {
        let url = self.endpoint("generate-test-code");
        debug!(file = %request.file_path, "Requesting test code");

        let response = self
            .client
            .post(&url)
            .json(&TestCodeBody::from(request))
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;
        let code: TestCodeResponse = Self::decode(Self::ensure_success(response)?).await?;

        Ok(code.test_code)
    }

    async fn create_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> Result<String, BackendError> {
        let url = self.endpoint("create-pr/");
        debug!(file = %request.file_name, "Creating pull request");

        let response = self
            .client
            .post(&url)
            .json(&PullRequestBody::from(request))
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let created: PullRequestResponse = Self::decode(response).await?;
        Ok(created.pr_url)
    }
}

/// A listing without `files` is an empty listing. Upstream failure details are
/// only logged.
fn files_from_response(listing: FilesResponse) -> Vec<String> {
    if let Some(details) = listing.details.as_deref().or(listing.error.as_deref()) {
        warn!(details = %details, "Backend reported a listing failure");
    }
    listing.files
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::application::use_cases::{
        CODE_GENERATION_FAILED, GenerateTestCodeUseCase, NO_CODE_GENERATED,
    };

    fn client(base_url: &str) -> HttpBackendClient {
        HttpBackendClient::new(base_url, None).unwrap()
    }

    #[test]
    fn test_endpoint_joins_trailing_slash_base() {
        let client = client(DEFAULT_BACKEND_URL);

        assert_eq!(
            client.endpoint("list-files"),
            "https://react-test-case-generator-app.onrender.com/list-files"
        );
        assert_eq!(
            client.endpoint("create-pr/"),
            "https://react-test-case-generator-app.onrender.com/create-pr/"
        );
        assert_eq!(
            client.endpoint(""),
            "https://react-test-case-generator-app.onrender.com/"
        );
    }

    #[test]
    fn test_endpoint_joins_bare_base() {
        let client = client("http://localhost:8000");

        assert_eq!(
            client.endpoint("generate-test-code"),
            "http://localhost:8000/generate-test-code"
        );
    }

    /// Answers a single request with a canned response.
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}")
    }

    fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    fn repo() -> RepoRef {
        RepoRef::parse("octocat/Hello-World").unwrap()
    }

    fn test_code_request() -> TestCodeRequest {
        TestCodeRequest::new(&repo(), "a.js", "**a.js**: renders")
    }

    #[tokio::test]
    async fn test_listing_with_error_body_is_empty() {
        let url = serve_once(
            "200 OK",
            r#"{"error":"Failed to fetch files","details":"Not Found"}"#,
        );

        let files = client(&url).list_files(&repo()).await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_listing_returns_files() {
        let url = serve_once("200 OK", r#"{"files":["src/App.js","src/index.js"]}"#);

        let files = client(&url).list_files(&repo()).await.unwrap();

        assert_eq!(files, ["src/App.js", "src/index.js"]);
    }

    #[tokio::test]
    async fn test_code_error_body_means_no_code() {
        let url = serve_once("200 OK", r#"{"error":"Missing required fields"}"#);
        let backend = Arc::new(client(&url));

        let code = GenerateTestCodeUseCase::new(backend)
            .execute(test_code_request())
            .await;

        assert_eq!(code, NO_CODE_GENERATED);
    }

    #[tokio::test]
    async fn test_code_non_json_body_is_a_failure() {
        let url = serve_once("200 OK", "<html>gateway</html>");
        let backend = Arc::new(client(&url));

        let err = backend
            .generate_test_code(&test_code_request())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Transport { .. }));

        let url = serve_once("200 OK", "<html>gateway</html>");
        let code = GenerateTestCodeUseCase::new(Arc::new(client(&url)))
            .execute(test_code_request())
            .await;
        assert_eq!(code, CODE_GENERATION_FAILED);
    }

    #[tokio::test]
    async fn test_summaries_server_error_is_transport() {
        let url = serve_once("500 Internal Server Error", "");
        let repo = repo();
        let request = SummaryRequest::new(&repo, vec!["a.js".to_string()]);

        let err = client(&url).generate_summaries(&request).await.unwrap_err();

        assert_eq!(err, BackendError::transport("HTTP 500"));
    }

    #[tokio::test]
    async fn test_pull_request_rejection_uses_detail() {
        let url = serve_once("400 Bad Request", r#"{"detail":"bad file"}"#);
        let request = PullRequestRequest::new("test()", "a.js");

        let err = client(&url).create_pull_request(&request).await.unwrap_err();

        assert_eq!(err, BackendError::application(400, "bad file"));
    }

    #[tokio::test]
    async fn test_pull_request_rejection_without_body() {
        let url = serve_once("400 Bad Request", "");
        let request = PullRequestRequest::new("test()", "a.js");

        let err = client(&url).create_pull_request(&request).await.unwrap_err();

        assert_eq!(err, BackendError::application(400, "HTTP 400"));
    }

    #[tokio::test]
    async fn test_pull_request_created() {
        let url = serve_once("200 OK", r#"{"pr_url":"https://github.com/o/r/pull/1"}"#);
        let request = PullRequestRequest::new("test()", "a.js");

        let pr_url = client(&url).create_pull_request(&request).await.unwrap();

        assert_eq!(pr_url, "https://github.com/o/r/pull/1");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let err = client(&format!("http://{addr}"))
            .greeting()
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Transport { .. }));
    }
}
