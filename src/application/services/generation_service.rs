//! Company generation pipeline.
//!
//! One run asks the content generator for a company, tries to replace the
//! suggested cover image with a self-hosted screenshot, and stores the record:
//!
//! 1. Generate (mandatory, fails the run)
//! 2. Normalize appeal markup and derive the slug
//! 3. Cover image chain: configured? → capture → upload (best effort)
//! 4. Insert the sparse field set (mandatory, fails the run)
//!
//! Every failure in step 3 is logged and the generator's cover image URL is
//! used instead. Cancellation is the only step-3 error that propagates.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::application::prompt::{PROMPT_VERSION, STARTUP_OF_THE_DAY_PROMPT};
use crate::domain::entities::{Company, GeneratedCompany, NewCompany};
use crate::domain::gateways::{BlobUploader, ContentGenerator, ScreenshotCapturer};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;
use crate::utils::cancel::cancellable;
use crate::utils::markup::{count_list_items, strip_list_wrapper};
use crate::utils::slug::{slugify, strip_protocol};

/// Number of appeal items the prompt asks for.
pub const EXPECTED_APPEAL_ITEMS: usize = 5;

const SCREENSHOT_CONTENT_TYPE: &str = "image/png";

/// Collaborators for the self-hosted cover image.
///
/// Only constructed when the renderer key and every storage setting are
/// present, so its absence means the capability is not configured.
#[derive(Clone)]
pub struct CoverImageAssets {
    pub capturer: Arc<dyn ScreenshotCapturer>,
    pub uploader: Arc<dyn BlobUploader>,
}

/// Orchestrates generation, cover image fallback and persistence.
pub struct GenerationService {
    generator: Arc<dyn ContentGenerator>,
    repository: Arc<dyn CompanyRepository>,
    cover_assets: Option<CoverImageAssets>,
}

impl GenerationService {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        repository: Arc<dyn CompanyRepository>,
        cover_assets: Option<CoverImageAssets>,
    ) -> Self {
        Self {
            generator,
            repository,
            cover_assets,
        }
    }

    /// Whether screenshots can replace generated cover images.
    pub fn screenshots_enabled(&self) -> bool {
        self.cover_assets.is_some()
    }

    /// Generates one company and persists it.
    ///
    /// # Errors
    ///
    /// - [`AppError::Upstream`] / [`AppError::Configuration`] if generation fails
    /// - [`AppError::Persistence`] if the insert fails
    /// - [`AppError::Cancelled`] if `cancel` fires before the insert completes
    pub async fn generate_and_store(&self, cancel: &CancellationToken) -> Result<Company, AppError> {
        if cancel.is_cancelled() {
            return Err(AppError::cancelled("Generation cancelled before start"));
        }

        info!(prompt_version = PROMPT_VERSION, "Generating company");

        let mut generated =
            cancellable(cancel, self.generator.generate(STARTUP_OF_THE_DAY_PROMPT)).await?;

        generated.appeal = strip_list_wrapper(&generated.appeal);
        let items = count_list_items(&generated.appeal);
        if items != EXPECTED_APPEAL_ITEMS {
            warn!(
                name = %generated.name,
                items,
                "Generated appeal does not have {EXPECTED_APPEAL_ITEMS} items"
            );
        }

        let slug = derive_slug(&generated.name, Utc::now());
        let cover_image = self.resolve_cover_image(&generated, &slug, cancel).await?;
        let new_company = build_new_company(generated, slug, cover_image);

        let company = cancellable(cancel, self.repository.insert(new_company)).await?;

        info!(id = %company.id, slug = %company.slug, "Stored company");
        Ok(company)
    }

    /// Returns the self-hosted screenshot URL, or the generated cover image
    /// when any step of the chain fails.
    async fn resolve_cover_image(
        &self,
        generated: &GeneratedCompany,
        slug: &str,
        cancel: &CancellationToken,
    ) -> Result<String, AppError> {
        match self.self_hosted_cover(generated, slug, cancel).await {
            Ok(url) => {
                info!(url = %url, "Captured and uploaded screenshot");
                Ok(url)
            }
            Err(e) if e.is_cancelled() => Err(e),
            Err(AppError::Configuration { message, .. }) => {
                warn!(reason = %message, "Using generated cover image");
                Ok(generated.cover_image.clone())
            }
            Err(e) => {
                error!(error = %e, "Screenshot step failed, using generated cover image");
                Ok(generated.cover_image.clone())
            }
        }
    }

    async fn self_hosted_cover(
        &self,
        generated: &GeneratedCompany,
        slug: &str,
        cancel: &CancellationToken,
    ) -> Result<String, AppError> {
        let assets = self.cover_assets.as_ref().ok_or_else(|| {
            AppError::configuration("Screenshot or storage not fully configured", json!({}))
        })?;

        let website = generated.website.trim();
        if website.is_empty() {
            return Err(AppError::configuration(
                "Generated company has no website",
                json!({ "name": generated.name }),
            ));
        }

        let png = cancellable(cancel, assets.capturer.capture(website)).await?;
        let key = screenshot_key(slug, Utc::now());

        cancellable(
            cancel,
            assets.uploader.upload(png, SCREENSHOT_CONTENT_TYPE, &key),
        )
        .await
    }
}

/// Object key for a company screenshot taken at `at`.
pub fn screenshot_key(slug: &str, at: DateTime<Utc>) -> String {
    format!("startup-screenshots/{slug}-{}.png", at.timestamp())
}

/// Slug for `name`, falling back to a timestamped slug when the name has no
/// ASCII alphanumerics.
fn derive_slug(name: &str, now: DateTime<Utc>) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        format!("startup-{}", now.timestamp())
    } else {
        slug
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn build_new_company(generated: GeneratedCompany, slug: String, cover_image: String) -> NewCompany {
    NewCompany {
        website: strip_protocol(&generated.website).to_string(),
        name: generated.name,
        slug,
        cover_image,
        description: generated.description,
        appeal: generated.appeal,
        twitter: non_empty(generated.twitter),
        linkedin: non_empty(generated.linkedin),
        facebook: non_empty(generated.facebook),
        instagram: non_empty(generated.instagram),
    }
}
