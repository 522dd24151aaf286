//! Typed mirror of the Confluence content JSON.

mod metadata;
mod page;

pub use metadata::{By, Expandable, History, Links, ProfilePicture};
pub use page::{
    Ancestor, Body, BodyPart, PAGE_TYPE, Page, STORAGE_REPRESENTATION, Space, Storage, Version,
};

/// Whether a scalar field is absent or holds its zero value (`""`, `0`, `false`).
///
/// Such fields are left out of serialized JSON.
#[allow(clippy::ref_option)]
pub(crate) fn is_unset<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(|v| *v == T::default())
}
