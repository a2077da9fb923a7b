//! Static route enumeration and slug resolution.

use crate::{content::Project, store::ContentStore};

/// Pages that exist regardless of content.
pub const FIXED_ROUTES: [&str; 5] = ["/", "/about", "/contact", "/projects", "/writing"];

/// Result of resolving a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
}

impl<T> Resolution<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// URL path of a project detail page.
pub fn project_path(slug: &str) -> String {
    format!("/projects/{slug}")
}

/// Every route to pre-render: fixed pages, then one per project slug.
pub fn static_routes(store: &ContentStore) -> Vec<String> {
    FIXED_ROUTES
        .iter()
        .map(|route| (*route).to_string())
        .chain(store.all_project_slugs().into_iter().map(project_path))
        .collect()
}

/// Resolve `/projects/{slug}`. Unknown slugs are `NotFound`, not errors.
pub fn resolve_project<'a>(store: &'a ContentStore, slug: &str) -> Resolution<&'a Project> {
    store.get_project_by_slug(slug).into()
}
