//! Folio Core Library
//!
//! Content model, schema validation, the read-only content store and the
//! view mappers behind the Folio portfolio.

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod mapper;
pub mod routes;
pub mod seo;
pub mod store;
pub mod validate;

pub use config::{Config, ContentConfig, Environment, SiteConfig};
pub use content::{ExternalLink, Project, ReelAsset, ReelSource, ThreeAsset, WritingPost};
pub use error::{CoreError, Result};
pub use mapper::{
    CarouselItem, CoverFlow, PostListItem, ProjectDetail, VisibleItem, to_carousel_item,
    to_post_list_item,
};
pub use routes::{Resolution, resolve_project, static_routes};
pub use store::{
    ContentStore, LoadReport, RecordKind, ValidationMode, build_content_store,
    build_content_store_with,
};
pub use validate::{FieldIssue, Validate, ValidationError};
