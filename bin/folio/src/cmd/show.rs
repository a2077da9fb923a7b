//! Show command - print a project case study or a post entry

use color_eyre::eyre::{Result, bail};
use folio_core::{
    Config, ContentStore, ProjectDetail, Resolution, WritingPost, resolve_project,
    to_post_list_item,
};

/// Run the show command.
///
/// Projects are looked up first, then posts; an unknown slug is reported as
/// not found.
pub fn run(config: &Config, slug: &str) -> Result<()> {
    let store = crate::open_store(config);
    match render(&store, slug) {
        Some(text) => {
            print!("{text}");
            Ok(())
        }
        None => bail!("Not found: no project or post with slug '{slug}'"),
    }
}

pub fn render(store: &ContentStore, slug: &str) -> Option<String> {
    if let Resolution::Found(project) = resolve_project(store, slug) {
        return Some(render_project(&ProjectDetail::new(project)));
    }
    store.get_post_by_slug(slug).map(render_post)
}

fn render_project(detail: &ProjectDetail<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", detail.title));
    out.push_str(&format!("{}\n", "=".repeat(detail.title.chars().count())));
    out.push_str(&format!("Role:      {}\n", detail.role));
    out.push_str(&format!("Timeframe: {}\n", detail.timeframe));
    out.push_str(&format!("Stack:     {}\n", detail.stack_label));

    for (section, text) in &detail.sections {
        out.push_str(&format!("\n{}\n  {text}\n", section.heading()));
    }

    out.push_str(&format!("\nMedia\n  {}\n", detail.media_caption()));

    if !detail.links.is_empty() {
        out.push_str("\nLinks\n");
        for link in detail.links {
            out.push_str(&format!("  {}: {}\n", link.label, link.url));
        }
    }

    out
}

fn render_post(post: &WritingPost) -> String {
    let item = to_post_list_item(post);
    let mut out = String::new();
    out.push_str(&format!("{}\n", item.title));
    out.push_str(&format!("Date: {}\n", item.date.as_deref().unwrap_or(&post.date_iso)));
    if !item.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", item.tags.join(", ")));
    }
    out.push_str(&format!("\n{}\n\nRead at {}\n", item.excerpt, item.url));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_project() {
        let store = folio_core::build_content_store();
        let text = render(&store, "alpha").expect("alpha exists");

        assert!(text.starts_with("Design Tokens Pipeline\n"));
        assert!(text.contains("Stack:     TypeScript, Next.js, Zod"));
        assert!(text.contains("Outcomes\n  Single source of truth for tokens with CI checks."));
        assert!(text.contains("No reel or 3D asset available yet."));
        assert!(text.contains("Repository: https://github.com/example/tokens-pipeline"));
    }

    #[test]
    fn test_render_post() {
        let store = folio_core::build_content_store();
        let text = render(&store, "post-a11y").expect("post exists");
        assert!(text.contains("Date: 2025-11-04"));
        assert!(text.contains("Tags: accessibility, motion"));
    }

    #[test]
    fn test_render_post_layout() {
        let post = WritingPost {
            slug: "undated".into(),
            title: "Undated".into(),
            excerpt: "No date yet.".into(),
            date_iso: "soon".into(),
            tags: vec![],
            url: "https://example.com/undated".into(),
        };
        assert_eq!(
            render_post(&post),
            "Undated\nDate: soon\n\nNo date yet.\n\nRead at https://example.com/undated\n"
        );
    }

    #[test]
    fn test_unknown_slug() {
        let store = folio_core::build_content_store();
        assert!(render(&store, "does-not-exist").is_none());
        assert!(run(&Config::default(), "does-not-exist").is_err());
    }
}
