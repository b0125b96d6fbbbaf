//! Object-store adapter for [`BlobUploader`].

use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ClientOptions, ObjectStore, PutOptions, PutPayload};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::json;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::domain::gateways::BlobUploader;
use crate::error::AppError;

/// Writes blobs to an [`ObjectStore`] and returns URLs under a public base.
pub struct ObjectStoreUploader {
    store: Arc<dyn ObjectStore>,
    public_base_url: String,
}

impl ObjectStoreUploader {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds an S3-backed uploader whose URLs use the virtual-hosted style
    /// `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
    ///
    /// Objects are written with a `public-read` canned ACL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the S3 client cannot be built.
    pub fn s3(config: &StorageConfig) -> Result<Self, AppError> {
        let store = s3_builder(config)
            .build()
            .map_err(|e| {
                AppError::configuration(
                    "Failed to build object store client",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self::new(
            Arc::new(store),
            format!("https://{}.s3.{}.amazonaws.com", config.bucket, config.region),
        ))
    }
}

fn s3_builder(config: &StorageConfig) -> AmazonS3Builder {
    AmazonS3Builder::new()
        .with_region(&config.region)
        .with_bucket_name(&config.bucket)
        .with_access_key_id(&config.access_key_id)
        .with_secret_access_key(&config.secret_access_key)
        .with_client_options(ClientOptions::new().with_default_headers(public_read_headers()))
}

fn public_read_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-amz-acl"),
        HeaderValue::from_static("public-read"),
    );
    headers
}

#[async_trait]
impl BlobUploader for ObjectStoreUploader {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        key: &str,
    ) -> Result<String, AppError> {
        let path = Path::parse(key).map_err(|e| {
            AppError::internal(
                "Invalid object key",
                json!({ "key": key, "reason": e.to_string() }),
            )
        })?;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&path, PutPayload::from(bytes), options)
            .await
            .map_err(|e| {
                AppError::upstream(
                    "Failed to upload object",
                    json!({ "key": key, "reason": e.to_string() }),
                )
            })?;

        Ok(format!("{}/{}", self.public_base_url, path))
    }
}
