#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use startup_dose::application::services::{
    CompanyService, GenerationService, MediaPublisher, PollPolicy,
};
use startup_dose::domain::entities::{Company, ContainerStatus, GeneratedCompany, NewCompany};
use startup_dose::domain::gateways::{ContentGenerator, MediaPlatform};
use startup_dose::domain::repositories::CompanyRepository;
use startup_dose::error::AppError;
use startup_dose::state::AppState;

pub const API_KEY: &str = "test-api-key";

/// Company store backed by a vector; newest company is the last element.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<Vec<Company>>,
    unavailable: bool,
}

impl InMemoryCompanyRepository {
    pub fn unavailable() -> Self {
        Self {
            companies: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::persistence(
                "Database error",
                json!({ "reason": "connection refused" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, new_company: NewCompany) -> Result<Company, AppError> {
        self.check()?;
        let mut companies = self.companies.lock().unwrap();

        // Keep creation times strictly increasing.
        let created_at = Utc::now() + ChronoDuration::milliseconds(companies.len() as i64);
        let company = Company {
            id: Uuid::from_u128(companies.len() as u128 + 1),
            name: new_company.name,
            slug: new_company.slug,
            description: new_company.description,
            appeal: new_company.appeal,
            website: new_company.website,
            cover_image: new_company.cover_image,
            twitter: new_company.twitter,
            linkedin: new_company.linkedin,
            facebook: new_company.facebook,
            instagram: new_company.instagram,
            published_at: None,
            created_at,
            updated_at: created_at,
        };
        companies.push(company.clone());
        Ok(company)
    }

    async fn get_latest(&self) -> Result<Company, AppError> {
        self.check()?;
        self.companies
            .lock()
            .unwrap()
            .last()
            .cloned()
            .ok_or_else(|| AppError::not_found("No companies found", json!({})))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, AppError> {
        self.check()?;
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Generator that returns a fixed payload, or fails with an upstream error.
pub struct StaticGenerator {
    pub company: Option<GeneratedCompany>,
}

#[async_trait]
impl ContentGenerator for StaticGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedCompany, AppError> {
        self.company.clone().ok_or_else(|| {
            AppError::upstream(
                "Completion API returned status 500",
                json!({ "status": 500 }),
            )
        })
    }
}

/// Media platform whose containers are ready on the first poll.
#[derive(Default)]
pub struct InstantPlatform {
    pub captions: Mutex<Vec<String>>,
}

#[async_trait]
impl MediaPlatform for InstantPlatform {
    async fn create_container(&self, _image_url: &str, caption: &str) -> Result<String, AppError> {
        self.captions.lock().unwrap().push(caption.to_string());
        Ok("container-1".to_string())
    }

    async fn container_status(&self, _container_id: &str) -> Result<ContainerStatus, AppError> {
        Ok(ContainerStatus::Finished)
    }

    async fn publish_container(&self, _container_id: &str) -> Result<String, AppError> {
        Ok("media-1".to_string())
    }
}

pub fn generated_company(name: &str) -> GeneratedCompany {
    GeneratedCompany {
        name: name.to_string(),
        website: "https://acme.ai".to_string(),
        cover_image: "https://acme.ai/og.png".to_string(),
        description: "Acme builds autonomous agents for back offices.".to_string(),
        appeal: "<ul><li>Fast</li><li>Cheap</li><li>Private</li><li>Open</li><li>Fun</li></ul>"
            .to_string(),
        linkedin: Some("https://linkedin.com/company/acme".to_string()),
        instagram: None,
        facebook: None,
        twitter: None,
    }
}

pub fn new_company(name: &str, slug: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        slug: slug.to_string(),
        website: "acme.ai".to_string(),
        cover_image: "https://acme.ai/og.png".to_string(),
        description: "Acme builds agents.".to_string(),
        appeal: "<li>Fast</li>".to_string(),
        twitter: None,
        linkedin: None,
        facebook: None,
        instagram: None,
    }
}

/// Builder for [`AppState`] wired to in-memory collaborators.
pub struct TestStateBuilder {
    pub repository: Arc<InMemoryCompanyRepository>,
    pub generator: Option<GeneratedCompany>,
    pub platform: Option<Arc<InstantPlatform>>,
    pub api_key: Option<&'static str>,
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self {
            repository: Arc::new(InMemoryCompanyRepository::default()),
            generator: Some(generated_company("Acme AI")),
            platform: None,
            api_key: Some(API_KEY),
        }
    }
}

impl TestStateBuilder {
    pub fn build(self) -> AppState {
        let repository: Arc<dyn CompanyRepository> = self.repository;

        let media_publisher = match self.platform {
            Some(platform) => MediaPublisher::new(
                platform,
                PollPolicy {
                    max_attempts: 3,
                    interval: Duration::from_millis(1),
                },
            ),
            None => MediaPublisher::disabled(),
        };

        AppState {
            company_service: Arc::new(CompanyService::new(repository.clone())),
            generation_service: Arc::new(GenerationService::new(
                Arc::new(StaticGenerator {
                    company: self.generator,
                }),
                repository,
                None,
            )),
            media_publisher: Arc::new(media_publisher),
            api_key: self.api_key.map(Arc::from),
        }
    }
}

pub fn create_test_state() -> AppState {
    TestStateBuilder::default().build()
}
