//! Company entity representing one curated startup.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A persisted startup record.
///
/// Identifier and timestamps are assigned by the store. Social links are
/// `None` when the generator did not know them.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// HTML list items (`<li>...</li>`), nominally five.
    pub appeal: String,
    /// Website without protocol prefix.
    pub website: String,
    pub cover_image: String,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse field set for inserting a company.
///
/// Only populated columns are sent to the store, so absent social links are
/// never written as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub slug: String,
    pub website: String,
    pub cover_image: String,
    pub description: String,
    pub appeal: String,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl NewCompany {
    /// Column/value pairs in insertion order, optional columns only when set.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("slug", self.slug.clone()),
            ("website", self.website.clone()),
            ("cover_image", self.cover_image.clone()),
            ("description", self.description.clone()),
            ("appeal", self.appeal.clone()),
        ];

        let socials = [
            ("twitter", &self.twitter),
            ("linkedin", &self.linkedin),
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
        ];
        for (column, value) in socials {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                fields.push((column, value.to_string()));
            }
        }

        fields
    }
}

/// Company description as returned by the content generator.
///
/// Social links are optional in the payload. Models report unknown links as a
/// missing key, `null`, or an empty string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratedCompany {
    pub name: String,
    pub website: String,
    pub cover_image: String,
    pub description: String,
    pub appeal: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}
