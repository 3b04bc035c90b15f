use crate::domain::model::{Dimension, ServerSettings, StatEntry, User, Workset};
use crate::domain::ports::{ConfigProvider, PythiaApi};
use crate::utils::error::{PythiaError, Result};
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;
use uuid::Uuid;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// reqwest-backed implementation of the Pythia API port.
///
/// All requests pass through one semaphore, so at most
/// `max_concurrent_requests` are in flight and the rest queue FIFO. The
/// cookie jar is shared with the client; session-mutating POSTs echo the
/// CSRF cookie back as a header.
pub struct HttpApi {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
    limiter: Arc<Semaphore>,
}

impl HttpApi {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let base_url =
            Url::parse(config.base_url()).map_err(|e| PythiaError::ConfigError {
                message: format!("invalid base URL '{}': {}", config.base_url(), e),
            })?;
        let jar = Arc::new(Jar::default());
        let client = Client::builder().cookie_provider(jar.clone()).build()?;
        let limiter = Arc::new(Semaphore::new(config.max_concurrent_requests().max(1)));
        Ok(Self {
            client,
            base_url,
            jar,
            limiter,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PythiaError::ConfigError {
                message: format!("invalid endpoint path '{}': {}", path, e),
            })
    }

    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(PythiaError::StatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    fn csrf_token(&self) -> Option<String> {
        let header = CookieStore::cookies(self.jar.as_ref(), &self.base_url)?;
        let cookies = header.to_str().ok()?;
        let prefix = format!("{}=", CSRF_COOKIE);
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .map(str::to_string)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let _permit = self.limiter.acquire().await.ok();
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        let url = self.endpoint(path)?;
        let _permit = self.limiter.acquire().await.ok();
        tracing::debug!("POST {}", url);
        let mut request = self.client.post(url).json(body);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());
        Self::check_status(response)
    }
}

#[async_trait]
impl PythiaApi for HttpApi {
    async fn fetch_worksets(&self) -> Result<Vec<Workset>> {
        self.get_json("/api/bookrank/workset/").await
    }

    async fn fetch_dimension_stats(
        &self,
        workset: Uuid,
        dimension: Dimension,
    ) -> Result<Vec<StatEntry>> {
        let path = format!(
            "/api/hits/workhit/stats/{}/{}",
            workset,
            dimension.path_segment()
        );
        self.get_json(&path).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = self.endpoint("/api/rest-auth/login/")?;
        let _permit = self.limiter.acquire().await.ok();
        let body = serde_json::json!({ "email": email, "password": password });
        let mut request = self.client.post(url).json(&body);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // DRF puts form-wide validation errors into `non_field_errors`;
        // surface the first one when present.
        let url = response.url().to_string();
        if let Ok(data) = response.json::<serde_json::Value>().await {
            if let Some(message) = data
                .get("non_field_errors")
                .and_then(|errors| errors.get(0))
                .and_then(|msg| msg.as_str())
            {
                return Err(PythiaError::LoginError {
                    message: message.to_string(),
                });
            }
        }
        Err(PythiaError::StatusError {
            status: status.as_u16(),
            url,
        })
    }

    async fn logout(&self) -> Result<()> {
        self.post_json("/api/rest-auth/logout/", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<()> {
        self.post_json(
            "/api/rest-auth/password/reset/",
            &serde_json::json!({ "email": email }),
        )
        .await?;
        Ok(())
    }

    async fn change_password(&self, new_password: &str) -> Result<()> {
        self.post_json(
            "/api/rest-auth/password/change/",
            &serde_json::json!({
                "new_password1": new_password,
                "new_password2": new_password,
            }),
        )
        .await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        self.get_json("/api/rest-auth/user/").await
    }

    async fn server_settings(&self) -> Result<ServerSettings> {
        self.get_json("/api/info/").await
    }
}
