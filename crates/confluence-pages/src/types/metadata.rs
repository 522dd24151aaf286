//! Read-mostly metadata mirrored from server responses.

use serde::{Deserialize, Serialize};

use super::is_unset;

/// User reference (version author, page creator).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct By {
    /// User kind, e.g. "known" or "anonymous".
    #[serde(rename = "type", default, skip_serializing_if = "is_unset")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub user_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<ProfilePicture>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub display_name: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
}

/// User avatar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    /// Server-relative image path.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub is_default: Option<bool>,
}

/// Content history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Whether this is the latest version.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub latest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<By>,
}

/// Hypermedia links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Links {
    /// Site base URL.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub collection: Option<String>,
    /// API self link.
    #[serde(rename = "self", default, skip_serializing_if = "is_unset")]
    pub self_link: Option<String>,
    /// Short link.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub tinyui: Option<String>,
    /// Web UI link, relative to `base`.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub webui: Option<String>,
}

/// Expansion hints: each present field names a REST path that can be
/// requested via `expand=`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expandable {
    #[serde(default, skip_serializing_if = "is_unset")]
    pub ancestors: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub children: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub space: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub previous_version: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub contributors: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub next_version: Option<String>,
}
