//! Tag records returned by the Quay Tag API.

use crate::error::{QuayError, Result};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::cmp::Reverse;


/// One tag as reported by the registry.
///
/// Records are forwarded verbatim: fields the registry omits stay omitted,
/// and fields not modelled here are kept in `extra`. So are modelled fields
/// the registry sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Tag {
    /// Tag name (e.g. "latest")
    pub name: String,

    /// Whether the tag was created by reverting to an earlier image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversion: Option<bool>,

    /// When the tag started pointing at its image, Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    /// RFC 1123 date, e.g. "Tue, 06 Apr 2021 13:46:29 -0000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_digest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_manifest_list: Option<bool>,

    /// Image size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    /// Creates a tag with only a name and start timestamp set.
    pub fn new<S: Into<String>>(name: S, start_ts: i64) -> Self {
        Self {
            name: name.into(),
            reversion: None,
            start_ts: Some(start_ts),
            end_ts: None,
            image_id: None,
            last_modified: None,
            expiration: None,
            manifest_digest: None,
            docker_image_id: None,
            is_manifest_list: None,
            size: None,
            extra: Map::new(),
        }
    }

    /// Start timestamp as a UTC datetime.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_ts.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Parses `last_modified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::tag::Tag;
    ///
    /// let mut tag = Tag::new("latest", 1617711989);
    /// tag.last_modified = Some("Tue, 06 Apr 2021 13:46:29 -0000".to_string());
    /// let modified = tag.last_modified_at().unwrap();
    /// assert_eq!(modified.timestamp(), 1617716789);
    /// ```
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_modified.as_deref()?;
        DateTime::parse_from_rfc2822(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Optional fields with a typed slot on [`Tag`].
const MODELLED_FIELDS: &[&str] = &[
    "reversion",
    "start_ts",
    "end_ts",
    "image_id",
    "last_modified",
    "expiration",
    "manifest_digest",
    "docker_image_id",
    "is_manifest_list",
    "size",
];

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let nulls: Vec<String> = MODELLED_FIELDS
            .iter()
            .filter(|key| fields.get(**key).is_some_and(Value::is_null))
            .map(|key| key.to_string())
            .collect();
        for key in &nulls {
            fields.remove(key);
        }

        let mut tag = Tag::deserialize(Value::Object(fields))
            .map_err(<D::Error as de::Error>::custom)?;
        for key in nulls {
            tag.extra.insert(key, Value::Null);
        }
        Ok(tag)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Tag::serialize(self, serializer)
    }
}

/// Response envelope of `GET repository/{repository}/tag/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagPage {
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub page: Option<u64>,

    #[serde(default)]
    pub has_additional: Option<bool>,
}

impl TagPage {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| QuayError::validation_with_source("Failed to parse tag list response", e))
    }
}

/// Error payload the registry sends with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiError {
    /// Extracts the most specific message from an error body, if any.
    pub fn message_from(body: &str) -> Option<String> {
        let err: ApiError = serde_json::from_str(body).ok()?;
        err.detail
            .or(err.error_message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Orders tags newest first by `start_ts`. Ties keep registry order and
/// tags without a timestamp go last.
pub fn sort_newest_first(tags: &mut [Tag]) {
    tags.sort_by_key(|tag| Reverse(tag.start_ts));
}
