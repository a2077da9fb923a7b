//! Schema checks for content records.
//!
//! Validation is kept apart from construction: records are plain data and
//! [`Validate::validate`] reports every rule they break, so the caller picks
//! between strict and permissive handling.

use std::fmt;

use url::Url;

use crate::content::{ExternalLink, Project, ReelAsset, ReelSource, ThreeAsset, WritingPost, parse_date};

/// A single rule violation at a field path such as `reel.sources[0].src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All issues found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Whether any issue is reported at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collects issues while walking a record.
#[derive(Debug, Default)]
pub struct Checker {
    scope: Vec<String>,
    issues: Vec<FieldIssue>,
}

impl Checker {
    /// Run `f` with `segment` appended to the current path.
    pub fn scoped(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self)) {
        self.scope.push(segment.into());
        f(self);
        self.scope.pop();
    }

    fn path(&self, field: &str) -> String {
        if self.scope.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.scope.join("."))
        }
    }

    pub fn issue(&mut self, field: &str, message: impl Into<String>) {
        let path = self.path(field);
        self.issues.push(FieldIssue::new(path, message));
    }

    pub fn non_empty(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.issue(field, "must not be empty");
        }
    }

    pub fn slug(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.issue(field, "must not be empty");
        } else if let Some(c) = value.chars().find(|c| !is_slug_char(*c)) {
            self.issue(field, format!("contains character {c:?} that is not URL-safe"));
        }
    }

    pub fn positive(&mut self, field: &str, value: u32) {
        if value == 0 {
            self.issue(field, "must be positive");
        }
    }

    pub fn positive_finite(&mut self, field: &str, value: f64) {
        if !value.is_finite() || value <= 0.0 {
            self.issue(field, "must be a positive number");
        }
    }

    pub fn absolute_url(&mut self, field: &str, value: &str) {
        if let Err(e) = Url::parse(value) {
            self.issue(field, format!("invalid URL: {e}"));
        }
    }

    pub fn date(&mut self, field: &str, value: &str) {
        if parse_date(value).is_none() {
            self.issue(field, "invalid ISO date");
        }
    }

    pub fn non_empty_list<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.issue(field, "must contain at least one entry");
        }
    }

    /// Check each item under `field[i]`.
    pub fn each<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            self.scoped(format!("{field}[{i}]"), |c| item.check(c));
        }
    }

    /// Check an optional nested record under `field`.
    pub fn nested<T: Validate>(&mut self, field: &str, item: Option<&T>) {
        if let Some(item) = item {
            self.scoped(field, |c| item.check(c));
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.issues))
        }
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

/// Structural conformance check for a content record.
pub trait Validate {
    /// Record every violation into `checker`.
    fn check(&self, checker: &mut Checker);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut checker = Checker::default();
        self.check(&mut checker);
        checker.finish()
    }
}

impl Validate for ReelSource {
    fn check(&self, c: &mut Checker) {
        c.non_empty("src", &self.src);
        c.non_empty("type", &self.mime_type);
    }
}

impl Validate for ReelAsset {
    fn check(&self, c: &mut Checker) {
        c.non_empty("poster", &self.poster);
        c.non_empty_list("sources", &self.sources);
        c.each("sources", &self.sources);
        c.positive("width", self.width);
        c.positive("height", self.height);
        if let Some(duration) = self.duration_sec {
            c.positive_finite("durationSec", duration);
        }
    }
}

impl Validate for ThreeAsset {
    fn check(&self, c: &mut Checker) {
        c.non_empty("model", &self.model);
        c.non_empty("fallbackImage", &self.fallback_image);
        c.positive("width", self.width);
        c.positive("height", self.height);
        c.non_empty("alt", &self.alt);
    }
}

impl Validate for ExternalLink {
    fn check(&self, c: &mut Checker) {
        c.non_empty("label", &self.label);
        c.absolute_url("url", &self.url);
    }
}

impl Validate for Project {
    fn check(&self, c: &mut Checker) {
        c.slug("slug", &self.slug);
        c.non_empty("title", &self.title);
        c.non_empty("role", &self.role);
        c.non_empty("timeframe", &self.timeframe);
        c.non_empty("problem", &self.problem);
        c.non_empty("approach", &self.approach);
        c.non_empty("outcomes", &self.outcomes);
        c.non_empty("impact", &self.impact);
        c.nested("reel", self.reel.as_ref());
        c.nested("three", self.three.as_ref());
        c.each("links", &self.links);
    }
}

impl Validate for WritingPost {
    fn check(&self, c: &mut Checker) {
        c.slug("slug", &self.slug);
        c.non_empty("title", &self.title);
        c.non_empty("excerpt", &self.excerpt);
        c.date("dateISO", &self.date_iso);
        c.absolute_url("url", &self.url);
    }
}
