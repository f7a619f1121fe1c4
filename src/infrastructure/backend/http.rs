use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::DomainError;

/// Shared HTTP plumbing for the backend clients.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: trim_trailing_slash(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DomainError::backend(path, format!("Request failed: {}", e)))?;

        Self::decode(path, response).await
    }

    pub async fn get_json_bearer<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, DomainError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DomainError::backend(path, format!("Request failed: {}", e)))?;

        Self::decode(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::backend(path, format!("Request failed: {}", e)))?;

        Self::decode(path, response).await
    }

    /// POST where the backend replies with an empty body on success.
    pub async fn post_json_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::backend(path, format!("Request failed: {}", e)))?;

        Self::check_status(path, response).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| DomainError::backend(path, format!("Request failed: {}", e)))?;

        Self::check_status(path, response).await.map(|_| ())
    }

    async fn check_status(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::backend(
                path,
                format!("HTTP {}: {}", status, body),
            ));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        let response = Self::check_status(path, response).await?;
        response.json().await.map_err(|e| {
            DomainError::backend(path, format!("Failed to parse response: {}", e))
        })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
