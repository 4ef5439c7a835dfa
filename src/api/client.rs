use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::response::{decode_body, RegisterAck, StateAck};
use crate::config::HubConfig;
use crate::error::AppError;
use crate::models::light::{Light, LightSummary};
use crate::models::light_update::LightUpdate;
use crate::models::user_info::UserInfo;

/// Client for one Hue hub on the local network.
///
/// Holds the connection parameters fixed at construction and no other state;
/// each operation is an independent request/response exchange.
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    device_type: String,
    verbose: bool,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()?)
}

impl HubClient {
    pub fn new(config: &HubConfig, verbose: bool) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: format!("http://{}", config.ip),
            username: config.username.clone(),
            device_type: config.device_type.clone(),
            verbose,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    async fn decode_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(AppError::Status {
                status: response.status(),
            });
        }

        let body = response.text().await?;
        if self.verbose {
            eprintln!("Response: {}", body);
        }
        decode_body(&body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        if self.verbose {
            eprintln!("GET {}", url);
        }
        let response = self.client.get(&url).send().await?;
        self.decode_response(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let body_json = serde_json::to_string(body)?;
        if self.verbose {
            eprintln!("POST {}", url);
            eprintln!("Body: {}", body_json);
        }
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body_json)
            .send()
            .await?;
        self.decode_response(response).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let body_json = serde_json::to_string(body)?;
        if self.verbose {
            eprintln!("PUT {}", url);
            eprintln!("Body: {}", body_json);
        }
        let response = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .body(body_json)
            .send()
            .await?;
        self.decode_response(response).await
    }

    /// Register the configured username with the hub and return the username
    /// the hub confirmed. Fails with hub error 101 until the hub's physical
    /// link button has been pressed.
    pub async fn register_user(&self) -> Result<String, AppError> {
        let body = json!({
            "username": self.username,
            "devicetype": self.device_type,
        });
        let acks: Vec<RegisterAck> = self.post("/api", &body).await?;
        Ok(acks
            .into_iter()
            .next()
            .map(|ack| ack.success.username)
            .unwrap_or_default())
    }

    /// Fetch the full per-user root resource: lights, groups, config,
    /// schedules and scenes.
    pub async fn get_user_info(&self) -> Result<UserInfo, AppError> {
        self.get(&format!("/api/{}", self.username)).await
    }

    /// List all lights known to the hub, by identifier.
    pub async fn list_lights(&self) -> Result<HashMap<String, LightSummary>, AppError> {
        self.get(&format!("/api/{}/lights", self.username)).await
    }

    /// Fetch the full record for a single light.
    pub async fn get_light(&self, id: &str) -> Result<Light, AppError> {
        self.get(&format!("/api/{}/lights/{}", self.username, id))
            .await
    }

    /// Apply a partial state change to one light. Only the fields set in
    /// `update` are sent. The returned per-field acks can usually be ignored.
    pub async fn set_light_state(
        &self,
        id: &str,
        update: &LightUpdate,
    ) -> Result<Vec<StateAck>, AppError> {
        self.put(
            &format!("/api/{}/lights/{}/state", self.username, id),
            update,
        )
        .await
    }
}
