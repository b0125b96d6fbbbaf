//! Media publishing state machine.
//!
//! ```text
//! Created ──create──▶ Polling ──FINISHED──▶ Ready ──publish──▶ Published
//!    │                  │ ▲
//!    │                  │ └── IN_PROGRESS / unknown (next attempt)
//!    ▼                  ▼
//!  Failed ◀── ERROR / EXPIRED / attempts exhausted / cancelled
//! ```
//!
//! Publishing is a best-effort side channel: every failure is flattened into a
//! [`PublishOutcome`] with `posted: false` instead of being returned as an error.

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::domain::entities::{ContainerStatus, MediaPublishJob, PublishOutcome};
use crate::domain::gateways::MediaPlatform;
use crate::error::AppError;
use crate::utils::cancel::{cancellable, sleep_or_cancel};
use crate::utils::caption::truncate_caption;

/// Bounds on container status polling.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub max_attempts: u32,
    /// Delay before every status request.
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 15,
            interval: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum PublishFailure {
    #[error("media platform not configured")]
    NotConfigured,

    #[error("failed to create media container: {0}")]
    Create(AppError),

    #[error("container not ready: failed to check status: {0}")]
    StatusCheck(AppError),

    #[error("container not ready: container processing failed")]
    ProcessingFailed,

    #[error("container not ready: container expired")]
    Expired,

    #[error("container not ready after {0} attempts")]
    Abandoned(u32),

    #[error("publish cancelled")]
    Cancelled,

    #[error("failed to publish: {0}")]
    Publish(AppError),
}

enum PublishState {
    Created,
    Polling(MediaPublishJob),
    Ready(MediaPublishJob),
    Published(MediaPublishJob),
    Failed(PublishFailure),
}

/// Publishes an already-hosted image with a caption.
pub struct MediaPublisher {
    platform: Option<Arc<dyn MediaPlatform>>,
    policy: PollPolicy,
}

impl MediaPublisher {
    pub fn new(platform: Arc<dyn MediaPlatform>, policy: PollPolicy) -> Self {
        Self {
            platform: Some(platform),
            policy,
        }
    }

    /// A publisher without credentials; every call reports `posted: false`.
    pub fn disabled() -> Self {
        Self {
            platform: None,
            policy: PollPolicy::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.platform.is_some()
    }

    /// Creates a container, polls it until finished, then publishes it.
    ///
    /// Never fails: transport errors, API errors, processing failures,
    /// attempt exhaustion and cancellation all yield `posted: false` with a
    /// description in `error`.
    pub async fn publish(
        &self,
        image_url: &str,
        caption: &str,
        cancel: &CancellationToken,
    ) -> PublishOutcome {
        match self.run(image_url, caption, cancel).await {
            Ok(job) => {
                let media_id = job.media_id.unwrap_or_default();
                info!(
                    media_id = %media_id,
                    attempts = job.attempts,
                    "Published media post"
                );
                PublishOutcome::posted(media_id)
            }
            Err(failure) => {
                warn!(error = %failure, "Media post not published");
                PublishOutcome::failed(failure.to_string())
            }
        }
    }

    async fn run(
        &self,
        image_url: &str,
        caption: &str,
        cancel: &CancellationToken,
    ) -> Result<MediaPublishJob, PublishFailure> {
        let platform = self
            .platform
            .as_deref()
            .ok_or(PublishFailure::NotConfigured)?;

        let mut state = PublishState::Created;
        loop {
            state = match state {
                PublishState::Created => self.create(platform, image_url, caption, cancel).await,
                PublishState::Polling(job) => self.poll(platform, job, cancel).await,
                PublishState::Ready(job) => self.finalize(platform, job, cancel).await,
                PublishState::Published(job) => return Ok(job),
                PublishState::Failed(failure) => return Err(failure),
            };
        }
    }

    async fn create(
        &self,
        platform: &dyn MediaPlatform,
        image_url: &str,
        caption: &str,
        cancel: &CancellationToken,
    ) -> PublishState {
        if cancel.is_cancelled() {
            return PublishState::Failed(PublishFailure::Cancelled);
        }

        let caption = truncate_caption(caption);
        match cancellable(cancel, platform.create_container(image_url, &caption)).await {
            Ok(container_id) => {
                info!(container_id = %container_id, "Created media container");
                PublishState::Polling(MediaPublishJob::new(container_id))
            }
            Err(e) if e.is_cancelled() => PublishState::Failed(PublishFailure::Cancelled),
            Err(e) => PublishState::Failed(PublishFailure::Create(e)),
        }
    }

    /// Runs one poll attempt, preceded by the policy delay.
    async fn poll(
        &self,
        platform: &dyn MediaPlatform,
        mut job: MediaPublishJob,
        cancel: &CancellationToken,
    ) -> PublishState {
        if job.attempts >= self.policy.max_attempts {
            return PublishState::Failed(PublishFailure::Abandoned(job.attempts));
        }

        if !sleep_or_cancel(cancel, self.policy.interval).await || cancel.is_cancelled() {
            return PublishState::Failed(PublishFailure::Cancelled);
        }

        let status =
            match cancellable(cancel, platform.container_status(&job.container_id)).await {
                Ok(status) => status,
                Err(e) if e.is_cancelled() => {
                    return PublishState::Failed(PublishFailure::Cancelled);
                }
                Err(e) => return PublishState::Failed(PublishFailure::StatusCheck(e)),
            };

        job.record_poll(status.clone());

        match status {
            ContainerStatus::Finished => {
                info!(container_id = %job.container_id, attempts = job.attempts, "Container ready");
                PublishState::Ready(job)
            }
            ContainerStatus::Error => PublishState::Failed(PublishFailure::ProcessingFailed),
            ContainerStatus::Expired => PublishState::Failed(PublishFailure::Expired),
            ContainerStatus::InProgress | ContainerStatus::Created => {
                info!(
                    "Container status: {} (attempt {}/{})",
                    job.status, job.attempts, self.policy.max_attempts
                );
                PublishState::Polling(job)
            }
            ContainerStatus::Unknown(raw) => {
                warn!(
                    status = %raw,
                    "Unrecognized container status (attempt {}/{})",
                    job.attempts,
                    self.policy.max_attempts
                );
                PublishState::Polling(job)
            }
        }
    }

    async fn finalize(
        &self,
        platform: &dyn MediaPlatform,
        mut job: MediaPublishJob,
        cancel: &CancellationToken,
    ) -> PublishState {
        match cancellable(cancel, platform.publish_container(&job.container_id)).await {
            Ok(media_id) => {
                job.media_id = Some(media_id);
                PublishState::Published(job)
            }
            Err(e) if e.is_cancelled() => PublishState::Failed(PublishFailure::Cancelled),
            Err(e) => PublishState::Failed(PublishFailure::Publish(e)),
        }
    }
}
