//! Gateway traits for the remote services the pipelines depend on.
//!
//! Each trait is the contract the application layer relies on; the concrete
//! HTTP and object-store adapters live in `crate::infrastructure`.
//!
//! - [`ContentGenerator`] - Chat-completion API producing one company
//! - [`ScreenshotCapturer`] - Website rendering service
//! - [`BlobUploader`] - Durable object store with public URLs
//! - [`MediaPlatform`] - Social media container/publish API

pub mod blob_uploader;
pub mod content_generator;
pub mod media_platform;
pub mod screenshot_capturer;

pub use blob_uploader::BlobUploader;
pub use content_generator::ContentGenerator;
pub use media_platform::MediaPlatform;
pub use screenshot_capturer::ScreenshotCapturer;

#[cfg(test)]
pub use blob_uploader::MockBlobUploader;
#[cfg(test)]
pub use content_generator::MockContentGenerator;
#[cfg(test)]
pub use media_platform::MockMediaPlatform;
#[cfg(test)]
pub use screenshot_capturer::MockScreenshotCapturer;
