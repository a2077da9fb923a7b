//! The content store: validated, ordered, read-only content.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    config::{ContentConfig, Environment},
    content::{Project, WritingPost},
    error::{CoreError, Result},
    validate::{Validate, ValidationError},
};

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Project,
    Post,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Project => "project",
            Self::Post => "post",
        })
    }
}

/// What happens to a record that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Keep the record and emit a diagnostic.
    #[default]
    #[serde(rename = "permissive")]
    PermissiveWithWarnings,

    /// Leave the record out of the store.
    #[serde(rename = "strict")]
    Strict,
}

/// A record that failed validation while the store was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub kind: RecordKind,
    pub slug: String,
    pub error: ValidationError,

    /// Whether the record is still served (permissive mode).
    pub retained: bool,
}

/// A slug served more than once in the same collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub kind: RecordKind,
    pub slug: String,
}

/// Outcome of validating the content at build time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub rejections: Vec<Rejection>,
    pub duplicates: Vec<DuplicateSlug>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty() && self.duplicates.is_empty()
    }
}

/// A content record the store can hold.
pub trait Record: Validate {
    const KIND: RecordKind;

    fn slug(&self) -> &str;
}

impl Record for Project {
    const KIND: RecordKind = RecordKind::Project;

    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Record for WritingPost {
    const KIND: RecordKind = RecordKind::Post;

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Immutable snapshot of all portfolio content.
///
/// Built once at startup, then only read. Holds plain owned data, so it can
/// be shared across threads behind a reference or `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    projects: Vec<Project>,
    posts: Vec<WritingPost>,
    report: LoadReport,
}

/// Build the store from the built-in catalog with default settings.
pub fn build_content_store() -> ContentStore {
    build_content_store_with(&ContentConfig::default())
}

/// Build the store from the built-in catalog.
pub fn build_content_store_with(config: &ContentConfig) -> ContentStore {
    ContentStore::build(catalog::projects(), catalog::writing_posts(), config)
}

impl ContentStore {
    /// A store with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate `projects` and `posts` and freeze them in declaration order.
    pub fn build(projects: Vec<Project>, posts: Vec<WritingPost>, config: &ContentConfig) -> Self {
        let mut report = LoadReport::default();
        let projects = admit(projects, config, &mut report);
        let posts = admit(posts, config, &mut report);

        tracing::debug!(
            projects = projects.len(),
            posts = posts.len(),
            rejected = report.rejections.len(),
            mode = ?config.validation,
            "Content store built"
        );

        Self {
            projects,
            posts,
            report,
        }
    }

    /// Every project, in declaration order.
    pub fn load_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Every writing post, in declaration order.
    pub fn load_writing_posts(&self) -> &[WritingPost] {
        &self.posts
    }

    /// First project with `slug`, if any.
    pub fn get_project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Project slugs in load order; one static route each.
    pub fn all_project_slugs(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.slug.as_str()).collect()
    }

    pub fn get_post_by_slug(&self, slug: &str) -> Option<&WritingPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn all_post_slugs(&self) -> Vec<&str> {
        self.posts.iter().map(|p| p.slug.as_str()).collect()
    }

    /// Projects flagged as featured, in declaration order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Fail with the first validation failure recorded at build time.
    pub fn ensure_valid(&self) -> Result<()> {
        match self.report.rejections.first() {
            Some(rejection) => Err(CoreError::validation(
                rejection.kind,
                rejection.slug.clone(),
                rejection.error.clone(),
            )),
            None => Ok(()),
        }
    }
}

fn admit<T: Record>(records: Vec<T>, config: &ContentConfig, report: &mut LoadReport) -> Vec<T> {
    let diagnostics = config.environment != Environment::Production;
    let mut seen = HashSet::new();
    let mut admitted = Vec::with_capacity(records.len());

    for record in records {
        let retained = match record.validate() {
            Ok(()) => true,
            Err(error) => {
                let retained = config.validation == ValidationMode::PermissiveWithWarnings;
                if diagnostics {
                    tracing::error!(
                        target: "folio::content",
                        kind = %T::KIND,
                        slug = record.slug(),
                        retained,
                        %error,
                        "Schema validation failed"
                    );
                }
                report.rejections.push(Rejection {
                    kind: T::KIND,
                    slug: record.slug().to_string(),
                    error,
                    retained,
                });
                retained
            }
        };

        if !retained {
            continue;
        }

        // Only served records can shadow one another.
        if !seen.insert(record.slug().to_string()) {
            if diagnostics {
                tracing::warn!(
                    target: "folio::content",
                    kind = %T::KIND,
                    slug = record.slug(),
                    "Duplicate slug; lookups return the first served declaration"
                );
            }
            report.duplicates.push(DuplicateSlug {
                kind: T::KIND,
                slug: record.slug().to_string(),
            });
        }
        admitted.push(record);
    }

    admitted
}
