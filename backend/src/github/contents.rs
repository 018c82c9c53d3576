//! GitHub Contents API client.
//!
//! - `GET /repos/{owner}/{name}/contents/{path}?ref={branch}` returns the file
//!   as base64 (wrapped with newlines) plus its blob `sha`.
//! - `PUT /repos/{owner}/{name}/contents/{path}` commits new content. The
//!   `sha` is required to replace an existing file and GitHub rejects the
//!   write with `409` when it no longer matches, which is how lost updates
//!   are detected. Nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

use super::store::{FileWrite, RepositoryStore, StoreError, StoredFile};
use crate::config::RepositoryTarget;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("dealership-backend/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ContentsClient {
    client: Client,
    api_url: String,
    raw_url: String,
}

#[derive(Deserialize)]
struct ContentsFile {
    content: String,
    sha: String,
}

#[derive(Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: &'a str,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

impl ContentsClient {
    pub fn new(api_url: &str, raw_url: &str) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            raw_url: raw_url.trim_end_matches('/').to_string(),
        })
    }

    fn contents_url(&self, target: &RepositoryTarget, path: &str) -> Result<Url, StoreError> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push("repos")
            .extend(target.repo.split('/'))
            .push("contents")
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

/// Turns a non-success response into a `StoreError::Status`, keeping its body.
async fn rejection(operation: &'static str, response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    StoreError::Status {
        operation,
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    }
}

#[async_trait]
impl RepositoryStore for ContentsClient {
    async fn read_file(
        &self,
        target: &RepositoryTarget,
        path: &str,
    ) -> Result<StoredFile, StoreError> {
        let url = self.contents_url(target, path)?;
        debug!("GET {} (ref {})", url, target.branch);

        let response = self
            .client
            .get(url)
            .query(&[("ref", target.branch.as_str())])
            .bearer_auth(&target.token)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection("GET", response).await);
        }

        let file: ContentsFile = response.json().await?;
        let encoded: String = file.content.chars().filter(|c| !c.is_whitespace()).collect();
        let content = BASE64
            .decode(encoded)
            .map_err(|e| StoreError::Content(e.to_string()))?;

        Ok(StoredFile {
            content,
            sha: file.sha,
        })
    }

    async fn write_file(
        &self,
        target: &RepositoryTarget,
        write: FileWrite<'_>,
    ) -> Result<(), StoreError> {
        let url = self.contents_url(target, write.path)?;
        debug!("PUT {} ({})", url, write.message);

        let body = PutContents {
            message: &write.message,
            content: &write.content_base64,
            branch: &target.branch,
            sha: write.sha.as_deref(),
        };
        let response = self
            .client
            .put(url)
            .bearer_auth(&target.token)
            .header(ACCEPT, GITHUB_JSON)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection("PUT", response).await);
        }
        Ok(())
    }

    fn raw_url(&self, target: &RepositoryTarget, path: &str) -> String {
        format!("{}/{}/{}/{}", self.raw_url, target.repo, target.branch, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    const CONTENTS_ROUTE: &str = "/repos/{owner}/{name}/contents/{path:.*}";
    const FILE_JSON: &[u8] = br#"[{"znacka":"bmw","model":"X5"}]"#;

    /// Stands in for the Contents API: serves one file and records writes.
    #[derive(Default)]
    struct FakeGithub {
        puts: Mutex<Vec<(String, Value)>>,
    }

    async fn fake_get(
        req: HttpRequest,
        path: web::Path<(String, String, String)>,
        query: web::Query<HashMap<String, String>>,
    ) -> HttpResponse {
        let (owner, name, file) = path.into_inner();
        let authorized = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|v| v == "Bearer secret")
            .unwrap_or(false);
        if !authorized || owner != "dealer" || name != "site" {
            return HttpResponse::Unauthorized().json(json!({"message": "Bad credentials"}));
        }
        if file != "data/auta.json" || query.get("ref").map(String::as_str) != Some("main") {
            return HttpResponse::NotFound().json(json!({"message": "Not Found"}));
        }

        let encoded = BASE64.encode(FILE_JSON);
        let (head, tail) = encoded.split_at(12);
        HttpResponse::Ok().json(json!({
            "sha": "abc123",
            "encoding": "base64",
            "content": format!("{}\n{}\n", head, tail),
        }))
    }

    async fn fake_put(
        fake: web::Data<FakeGithub>,
        path: web::Path<(String, String, String)>,
        body: web::Json<Value>,
    ) -> HttpResponse {
        let (_, _, file) = path.into_inner();
        if body.get("sha").and_then(Value::as_str) == Some("stale") {
            return HttpResponse::Conflict()
                .json(json!({"message": "data/auta.json does not match stale"}));
        }
        fake.puts.lock().unwrap().push((file, body.into_inner()));
        HttpResponse::Created().json(json!({"content": {}}))
    }

    async fn start_fake() -> (String, web::Data<FakeGithub>) {
        let fake = web::Data::new(FakeGithub::default());
        let data = fake.clone();
        let server = HttpServer::new(move || {
            App::new().app_data(data.clone()).service(
                web::resource(CONTENTS_ROUTE)
                    .route(web::get().to(fake_get))
                    .route(web::put().to(fake_put)),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        (format!("http://{}", addr), fake)
    }

    fn target() -> RepositoryTarget {
        RepositoryTarget {
            token: "secret".to_string(),
            repo: "dealer/site".to_string(),
            branch: "main".to_string(),
        }
    }

    #[actix_web::test]
    async fn reads_and_decodes_wrapped_content() {
        let (base, _) = start_fake().await;
        let client = ContentsClient::new(&base, "https://raw.example").unwrap();

        let file = client.read_file(&target(), "data/auta.json").await.unwrap();

        assert_eq!(file.sha, "abc123");
        assert_eq!(file.content, FILE_JSON);
    }

    #[actix_web::test]
    async fn missing_file_surfaces_upstream_status() {
        let (base, _) = start_fake().await;
        let client = ContentsClient::new(&base, "https://raw.example").unwrap();

        match client.read_file(&target(), "data/other.json").await {
            Err(StoreError::Status {
                operation, status, ..
            }) => {
                assert_eq!(operation, "GET");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn writes_message_branch_and_sha() {
        let (base, fake) = start_fake().await;
        let client = ContentsClient::new(&base, "https://raw.example").unwrap();

        client
            .write_file(
                &target(),
                FileWrite {
                    path: "data/auta.json",
                    content_base64: "W10=".to_string(),
                    message: "chore(admin): delete car #1".to_string(),
                    sha: Some("abc123".to_string()),
                },
            )
            .await
            .unwrap();

        let puts = fake.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        let (path, body) = &puts[0];
        assert_eq!(path, "data/auta.json");
        assert_eq!(
            body,
            &json!({
                "message": "chore(admin): delete car #1",
                "content": "W10=",
                "branch": "main",
                "sha": "abc123",
            })
        );
    }

    #[actix_web::test]
    async fn new_file_is_written_without_sha() {
        let (base, fake) = start_fake().await;
        let client = ContentsClient::new(&base, "https://raw.example").unwrap();

        client
            .write_file(
                &target(),
                FileWrite {
                    path: "uploads/1-a.png",
                    content_base64: "iVBORw0KGgo=".to_string(),
                    message: "chore(admin): upload image a.png".to_string(),
                    sha: None,
                },
            )
            .await
            .unwrap();

        let puts = fake.puts.lock().unwrap();
        assert_eq!(puts[0].0, "uploads/1-a.png");
        assert!(puts[0].1.get("sha").is_none());
    }

    #[actix_web::test]
    async fn stale_sha_is_rejected() {
        let (base, fake) = start_fake().await;
        let client = ContentsClient::new(&base, "https://raw.example").unwrap();

        let result = client
            .write_file(
                &target(),
                FileWrite {
                    path: "data/auta.json",
                    content_base64: "W10=".to_string(),
                    message: "chore(admin): add car  ".to_string(),
                    sha: Some("stale".to_string()),
                },
            )
            .await;

        match result {
            Err(StoreError::Status { status, body, .. }) => {
                assert_eq!(status, 409);
                assert!(body.contains("does not match"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(fake.puts.lock().unwrap().is_empty());
    }

    #[test]
    fn raw_url_points_at_branch() {
        let client = ContentsClient::new("https://api.github.com", "https://raw.example/").unwrap();
        assert_eq!(
            client.raw_url(&target(), "uploads/17-a.png"),
            "https://raw.example/dealer/site/main/uploads/17-a.png"
        );
    }

    #[test]
    fn contents_url_keeps_path_segments() {
        let client = ContentsClient::new("https://api.github.com/", "https://raw.example").unwrap();
        let url = client.contents_url(&target(), "data/auta vozidla.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/dealer/site/contents/data/auta%20vozidla.json"
        );
    }
}
