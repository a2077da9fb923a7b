//! Check command - validate configuration and content

use color_eyre::eyre::{Result, bail};
use folio_core::{Config, ContentStore, Environment};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and every built-in content record.
pub fn run(config: &Config, strict: bool) -> Result<()> {
    tracing::info!(strict, "Checking configuration and content");

    let store = crate::open_store(config);
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    check_config_values(config, &mut result);

    println!("\nChecking content...");
    check_store(&store, &mut result);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Turn the store's load report into errors and warnings.
pub fn check_store(store: &ContentStore, result: &mut ValidationResult) {
    let report = store.report();

    for rejection in &report.rejections {
        let handling = if rejection.retained {
            "still served"
        } else {
            "excluded"
        };
        for issue in rejection.error.issues() {
            result.add_error(format!(
                "{} '{}' ({handling}): {issue}",
                rejection.kind, rejection.slug
            ));
        }
    }

    for duplicate in &report.duplicates {
        result.add_warning(format!(
            "Duplicate {} slug '{}': only the first served declaration is reachable",
            duplicate.kind, duplicate.slug
        ));
    }

    let projects = store.load_projects().len();
    let posts = store.load_writing_posts().len();
    if report.rejections.is_empty() {
        println!("  ✓ All {projects} projects and {posts} posts valid");
    } else {
        println!(
            "  ✗ {} record(s) failed validation ({projects} projects, {posts} posts served)",
            report.rejections.len()
        );
    }

    if store.featured_projects().next().is_none() {
        result.add_warning("No project is marked as featured");
    }
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if let Err(e) = config.validate() {
        result.add_error(e.to_string());
    }

    if config.content.environment == Environment::Production
        && config.site.base_url.contains("localhost")
    {
        result.add_warning("site.base_url points at localhost in a production environment");
    }

    if config.site.same_as.is_empty() {
        result.add_warning("site.same_as is empty; the person schema will list no profiles");
    }

    println!("  ✓ Configuration values checked");
}
