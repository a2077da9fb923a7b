//! JSON-LD structured data for the site.

use serde_json::{Value, json};

use crate::config::SiteConfig;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `Person` schema for the portfolio owner.
pub fn person_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "name": site.author,
        "url": site.base_url,
        "sameAs": site.same_as,
    })
}

/// `WebSite` schema for the site itself.
pub fn website_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": site.base_url,
        "description": site.description,
    })
}

/// All documents emitted into the page head, in order.
pub fn json_ld_documents(site: &SiteConfig) -> Vec<Value> {
    vec![person_schema(site), website_schema(site)]
}
