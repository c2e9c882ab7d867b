use async_trait::async_trait;
use chrono::Utc;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::modules::media::application::ports::outgoing::{AssetStore, AssetStoreError};
use crate::modules::media::domain::{AssetFolder, ImageUpload, StoredAsset};
use crate::shared::config::{optional_or, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl CloudinaryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
            api_url: optional_or("CLOUDINARY_API_URL", "https://api.cloudinary.com")
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: parse_or("CLOUDINARY_TIMEOUT_SECS", 30u64)?,
        })
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct CloudinaryAssetStore {
    client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryAssetStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, AssetStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssetStoreError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{}",
            self.config.api_url, self.config.cloud_name, action
        )
    }

    /// Adds the credential fields every signed call carries.
    fn signed_form(&self, params: &[(&str, String)]) -> Form {
        let signature = sign(params, &self.config.api_secret);

        let form = params
            .iter()
            .fold(Form::new(), |form, (key, value)| {
                form.text(key.to_string(), value.clone())
            });

        form.text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }

    async fn post(&self, action: &str, form: Form) -> Result<reqwest::Response, AssetStoreError> {
        let response = self
            .client
            .post(self.endpoint(action))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssetStoreError::Request(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => "no error message".to_string(),
        };
        Err(AssetStoreError::Rejected { status, message })
    }
}

#[async_trait]
impl AssetStore for CloudinaryAssetStore {
    async fn upload(
        &self,
        image: ImageUpload,
        folder: AssetFolder,
    ) -> Result<StoredAsset, AssetStoreError> {
        let timestamp = Utc::now().timestamp().to_string();
        let params = [
            ("folder", folder.name().to_string()),
            ("timestamp", timestamp),
        ];

        let file = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| AssetStoreError::Request(e.to_string()))?;

        let form = self.signed_form(&params).part("file", file);

        let body: UploadResponse = self
            .post("upload", form)
            .await?
            .json()
            .await
            .map_err(|e| AssetStoreError::InvalidResponse(e.to_string()))?;

        Ok(StoredAsset {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), AssetStoreError> {
        let timestamp = Utc::now().timestamp().to_string();
        let params = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp),
        ];

        let body: DestroyResponse = self
            .post("destroy", self.signed_form(&params))
            .await?
            .json()
            .await
            .map_err(|e| AssetStoreError::InvalidResponse(e.to_string()))?;

        match body.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(AssetStoreError::InvalidResponse(format!(
                "destroy returned '{}'",
                other
            ))),
        }
    }
}

/// Request signature: parameters sorted by name, joined as `k=v&k=v`,
/// the API secret appended, then SHA-256 hex.
fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
