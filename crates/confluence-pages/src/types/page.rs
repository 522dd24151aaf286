//! Confluence page types.

use serde::{Deserialize, Serialize};

use super::is_unset;
use super::metadata::{By, Expandable, History, Links};

/// Content type tag for pages.
pub const PAGE_TYPE: &str = "page";

/// Representation tag for Confluence storage format markup.
pub const STORAGE_REPRESENTATION: &str = "storage";

/// Confluence page.
///
/// Used both as request payload and as response. Unset, empty and zero
/// fields are omitted from serialized JSON; unknown response fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Page {
    /// Fields the server can expand on request.
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
    /// Hypermedia links.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Page ID (assigned by the server on creation).
    #[serde(default, skip_serializing_if = "is_unset")]
    pub id: Option<String>,
    /// Page title.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub title: Option<String>,
    /// Content type (always "page").
    #[serde(rename = "type", default, skip_serializing_if = "is_unset")]
    pub content_type: Option<String>,
    /// Page body content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// Content status, e.g. "current".
    #[serde(default, skip_serializing_if = "is_unset")]
    pub status: Option<String>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,
    /// Version information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Parent chain, root first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<Ancestor>,
    /// Creation history (only with `expand=history`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
}

impl Page {
    /// Storage format markup, if the body was expanded.
    pub fn storage_value(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .storage
            .as_ref()?
            .value
            .as_deref()
    }

    /// Current version number.
    pub fn version_number(&self) -> Option<u32> {
        self.version.as_ref()?.number
    }

    /// Version number to send with the next update of this page.
    pub fn next_version(&self) -> u32 {
        self.version_number().map_or(1, |n| n.saturating_add(1))
    }

    /// Web UI URL of the page.
    ///
    /// Uses `_links.base` when the server supplied it, `site_root` otherwise.
    pub fn web_url(&self, site_root: &str) -> Option<String> {
        let links = self.links.as_ref()?;
        let webui = links.webui.as_deref()?;
        let base = links.base.as_deref().unwrap_or(site_root);
        Some(format!("{}{}", base.trim_end_matches('/'), webui))
    }
}

/// Page body content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Body {
    /// Editor format placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<BodyPart>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub representation: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub value: Option<String>,
    /// Storage format content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
}

impl Body {
    /// Body holding `value` in storage representation.
    pub fn storage(value: &str) -> Self {
        Self {
            storage: Some(Storage {
                representation: Some(STORAGE_REPRESENTATION.to_owned()),
                value: Some(value.to_owned()),
                expandable: None,
            }),
            ..Self::default()
        }
    }
}

/// Body representation that was not expanded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BodyPart {
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
}

/// Storage format representation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Storage {
    /// Content representation (always "storage").
    #[serde(default, skip_serializing_if = "is_unset")]
    pub representation: Option<String>,
    /// XHTML content in Confluence storage format.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub value: Option<String>,
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
}

/// Space a page belongs to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Space {
    #[serde(default, skip_serializing_if = "is_unset")]
    pub id: Option<u64>,
    /// Short space key, e.g. "TST".
    #[serde(default, skip_serializing_if = "is_unset")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Space type, e.g. "global" or "personal".
    #[serde(rename = "type", default, skip_serializing_if = "is_unset")]
    pub space_type: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
}

impl Space {
    /// Space reference by key.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(key.to_owned()),
            ..Self::default()
        }
    }
}

/// Page version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Author of this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<By>,
    /// Timestamp as returned by the server.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub when: Option<String>,
    /// Version message/comment.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub message: Option<String>,
    /// Version number.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub minor_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub hidden: Option<bool>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(rename = "_expandable", default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<Expandable>,
}

impl Version {
    /// Version reference by number.
    pub fn with_number(number: u32) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }
}

/// Parent page reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Ancestor {
    #[serde(default, skip_serializing_if = "is_unset")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_page_serializes_to_empty_object() {
        let json = serde_json::to_value(Page::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_unset_fields_omitted() {
        let page = Page {
            title: Some("Runbook".to_owned()),
            space: Some(Space::with_key("OPS")),
            version: Some(Version::with_number(3)),
            ..Page::default()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "Runbook",
                "space": {"key": "OPS"},
                "version": {"number": 3}
            })
        );
    }

    #[test]
    fn test_body_storage() {
        let json = serde_json::to_value(Body::storage("<p>Hi</p>")).unwrap();
        assert_eq!(
            json,
            json!({"storage": {"representation": "storage", "value": "<p>Hi</p>"}})
        );
    }

    #[test]
    fn test_version_camel_case_fields() {
        let version = Version {
            number: Some(2),
            minor_edit: Some(true),
            hidden: Some(false),
            ..Version::default()
        };
        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json, json!({"number": 2, "minorEdit": true}));
    }

    #[test]
    fn test_empty_and_zero_fields_omitted() {
        let page = Page {
            id: Some(String::new()),
            title: Some(String::new()),
            space: Some(Space::with_key("")),
            version: Some(Version {
                number: Some(0),
                minor_edit: Some(false),
                ..Version::default()
            }),
            ancestors: vec![Ancestor { id: Some(String::new()) }],
            ..Page::default()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            json!({"space": {}, "version": {}, "ancestors": [{}]})
        );
    }

    #[test]
    fn test_minor_edit_false_not_echoed_back() {
        let page: Page =
            serde_json::from_str(r#"{"id":"1","version":{"number":3,"minorEdit":false}}"#).unwrap();
        assert_eq!(page.version.as_ref().unwrap().minor_edit, Some(false));
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"id": "1", "version": {"number": 3}})
        );
    }

    #[test]
    fn test_deserialize_server_response() {
        let body = r#"{
            "id": "3604482",
            "type": "page",
            "status": "current",
            "title": "new page",
            "space": {"id": 98305, "key": "TST", "name": "Test", "type": "global"},
            "version": {
                "by": {"type": "known", "username": "admin", "displayName": "Admin"},
                "when": "2024-03-01T10:15:30.000+01:00",
                "number": 2,
                "minorEdit": false,
                "hidden": false
            },
            "body": {
                "storage": {"value": "<p>text</p>", "representation": "storage"},
                "_expandable": {"editor": "", "view": ""}
            },
            "_links": {
                "base": "https://wiki.example.com",
                "webui": "/display/TST/new+page",
                "self": "https://wiki.example.com/rest/api/content/3604482"
            },
            "_expandable": {"children": "/rest/api/content/3604482/child"},
            "extensions": {"position": "none"}
        }"#;

        let page: Page = serde_json::from_str(body).unwrap();
        assert_eq!(page.id.as_deref(), Some("3604482"));
        assert_eq!(page.content_type.as_deref(), Some(PAGE_TYPE));
        assert_eq!(page.storage_value(), Some("<p>text</p>"));
        assert_eq!(page.version_number(), Some(2));
        assert_eq!(page.next_version(), 3);
        assert_eq!(page.space.as_ref().unwrap().id, Some(98305));
        let by = page.version.as_ref().unwrap().by.as_ref().unwrap();
        assert_eq!(by.display_name.as_deref(), Some("Admin"));
        assert_eq!(
            page.links.as_ref().unwrap().self_link.as_deref(),
            Some("https://wiki.example.com/rest/api/content/3604482")
        );
        assert_eq!(
            page.expandable.as_ref().unwrap().children.as_deref(),
            Some("/rest/api/content/3604482/child")
        );
    }

    #[test]
    fn test_next_version_without_version() {
        assert_eq!(Page::default().next_version(), 1);
    }

    #[test]
    fn test_next_version_saturates() {
        let page = Page {
            version: Some(Version::with_number(u32::MAX)),
            ..Page::default()
        };
        assert_eq!(page.next_version(), u32::MAX);
    }

    #[test]
    fn test_web_url_prefers_links_base() {
        let page = Page {
            links: Some(Links {
                base: Some("https://wiki.example.com/confluence".to_owned()),
                webui: Some("/display/TST/Home".to_owned()),
                ..Links::default()
            }),
            ..Page::default()
        };
        assert_eq!(
            page.web_url("https://other.example.com").as_deref(),
            Some("https://wiki.example.com/confluence/display/TST/Home")
        );
    }

    #[test]
    fn test_web_url_falls_back_to_site_root() {
        let page = Page {
            links: Some(Links {
                webui: Some("/display/TST/Home".to_owned()),
                ..Links::default()
            }),
            ..Page::default()
        };
        assert_eq!(
            page.web_url("https://wiki.example.com/").as_deref(),
            Some("https://wiki.example.com/display/TST/Home")
        );
        assert_eq!(Page::default().web_url("https://wiki.example.com"), None);
    }
}
