use serde::{Deserialize, Serialize};

use crate::domain::ports::{PullRequestRequest, SummaryRequest, TestCodeRequest};

/// Greeting returned by the backend root.
#[derive(Debug, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// File listing. `files` defaults to empty; `error` and `details` are only
/// kept for logging.
#[derive(Debug, Default, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Vec<String>,
    pub error: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBody<'a> {
    pub repo_url: &'a str,
    pub selected_files: &'a [String],
}

impl<'a> From<&'a SummaryRequest> for SummaryBody<'a> {
    fn from(request: &'a SummaryRequest) -> Self {
        Self {
            repo_url: &request.repo_url,
            selected_files: &request.selected_files,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SummariesResponse {
    #[serde(default)]
    pub summaries: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCodeBody<'a> {
    pub repo_url: &'a str,
    pub file_path: &'a str,
    pub summary: &'a str,
}

impl<'a> From<&'a TestCodeRequest> for TestCodeBody<'a> {
    fn from(request: &'a TestCodeRequest) -> Self {
        Self {
            repo_url: &request.repo_url,
            file_path: &request.file_path,
            summary: &request.summary,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TestCodeResponse {
    #[serde(rename = "testCode")]
    pub test_code: Option<String>,
}

/// Pull request body. The backend expects snake case here.
#[derive(Debug, Serialize)]
pub struct PullRequestBody<'a> {
    pub code_content: &'a str,
    pub file_name: &'a str,
}

impl<'a> From<&'a PullRequestRequest> for PullRequestBody<'a> {
    fn from(request: &'a PullRequestRequest) -> Self {
        Self {
            code_content: &request.code_content,
            file_name: &request.file_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PullRequestResponse {
    pub pr_url: String,
}

/// Error body of a rejected request.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RepoRef;
    use serde_json::json;

    #[test]
    fn test_summary_body_uses_camel_case() {
        let repo = RepoRef::parse("octocat/Hello-World").unwrap();
        let request = SummaryRequest::new(&repo, vec!["a.js".to_string()]);

        let value = serde_json::to_value(SummaryBody::from(&request)).unwrap();

        assert_eq!(
            value,
            json!({
                "repoUrl": "https://github.com/octocat/Hello-World",
                "selectedFiles": ["a.js"],
            })
        );
    }

    #[test]
    fn test_test_code_body_uses_camel_case() {
        let repo = RepoRef::parse("o/r").unwrap();
        let request = TestCodeRequest::new(&repo, "a.js", "**a.js**: x");

        let value = serde_json::to_value(TestCodeBody::from(&request)).unwrap();

        assert_eq!(value["filePath"], "a.js");
        assert_eq!(value["summary"], "**a.js**: x");
        assert_eq!(value["repoUrl"], "https://github.com/o/r");
    }

    #[test]
    fn test_pull_request_body_keeps_snake_case() {
        let request = PullRequestRequest::new("test()", "a.js");

        let value = serde_json::to_value(PullRequestBody::from(&request)).unwrap();

        assert_eq!(value, json!({"code_content": "test()", "file_name": "a.js"}));
    }

    #[test]
    fn test_missing_fields_default() {
        let files: FilesResponse = serde_json::from_str("{}").unwrap();
        assert!(files.files.is_empty());
        assert!(files.error.is_none());

        let summaries: SummariesResponse = serde_json::from_str("{}").unwrap();
        assert!(summaries.summaries.is_empty());

        let code: TestCodeResponse = serde_json::from_str(r#"{"testCode":"it()"}"#).unwrap();
        assert_eq!(code.test_code.as_deref(), Some("it()"));

        let code: TestCodeResponse =
            serde_json::from_str(r#"{"error":"Missing required fields"}"#).unwrap();
        assert!(code.test_code.is_none());
    }

    #[test]
    fn test_files_error_body_has_no_files() {
        let files: FilesResponse =
            serde_json::from_str(r#"{"error":"Failed to fetch files","details":"Not Found"}"#)
                .unwrap();

        assert!(files.files.is_empty());
        assert_eq!(files.details.as_deref(), Some("Not Found"));
    }
}
