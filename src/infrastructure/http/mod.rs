//! Outbound HTTP adapters for the remote gateways.
//!
//! Every adapter shares one [`reqwest::Client`] built by [`build_client`] at
//! the composition root, and sets its own per-request timeout.

pub mod client;
pub mod instagram_client;
pub mod openai_client;
pub mod screenshot_client;

pub use client::build_client;
pub use instagram_client::InstagramClient;
pub use openai_client::OpenAiGenerator;
pub use screenshot_client::ScreenshotOneClient;
