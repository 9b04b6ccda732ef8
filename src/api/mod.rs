use crate::config::ApiConfig;
use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Thin client for the log API: password login for a bearer token, then
/// authorized requests.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn authenticate(&self) -> Result<String> {
        let response = self
            .http
            .post(&self.config.login_url)
            .json(&LoginRequest {
                username: &self.config.username,
                password: &self.config.password,
            })
            .send()
            .await
            .context("Login request failed")?
            .error_for_status()
            .context("Login rejected by API server")?;

        let body: serde_json::Value = response.json().await.context("Invalid login response")?;
        body.get("token")
            .and_then(|token| token.as_str())
            .map(str::to_owned)
            .context("Login response did not contain a token")
    }

    pub async fn submit_log(&self, token: &str) -> Result<()> {
        self.http
            .get(format!("{}/security/users", self.config.api_url))
            .bearer_auth(token)
            .send()
            .await
            .context("Log submission request failed")?
            .error_for_status()
            .context("Log submission rejected by API server")?;

        Ok(())
    }
}

pub async fn submit_hot_xml_log(config: &ApiConfig) -> Result<()> {
    let client = ApiClient::new(config.clone());
    let token = client.authenticate().await?;
    client.submit_log(&token).await?;
    info!("Authorized successfully against {}", config.api_url);
    Ok(())
}
