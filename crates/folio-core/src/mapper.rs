//! View models derived from content records.
//!
//! Everything here is a pure projection: no state, no I/O, recomputed on
//! each call.

use serde::{Deserialize, Serialize};

use crate::content::{ExternalLink, Project, WritingPost};

/// Card shape consumed by the carousel and showcase widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub slug: String,
    pub title: String,
    pub role: String,
    pub timeframe: String,
    pub stack: Vec<String>,

    /// Taken from `Project::outcomes`, not `impact` or `approach`.
    pub summary: String,
}

/// Map a project to a carousel item.
pub fn to_carousel_item(p: &Project) -> CarouselItem {
    CarouselItem {
        slug: p.slug.clone(),
        title: p.title.clone(),
        role: p.role.clone(),
        timeframe: p.timeframe.clone(),
        stack: p.stack.clone(),
        summary: p.outcomes.clone(),
    }
}

/// Entry in the writing index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListItem {
    pub slug: String,
    pub title: String,
    pub excerpt: String,

    /// `YYYY-MM-DD`, absent when the source date does not parse.
    pub date: Option<String>,

    pub tags: Vec<String>,
    pub url: String,
}

pub fn to_post_list_item(p: &WritingPost) -> PostListItem {
    PostListItem {
        slug: p.slug.clone(),
        title: p.title.clone(),
        excerpt: p.excerpt.clone(),
        date: p
            .published_at()
            .map(|dt| dt.format("%Y-%m-%d").to_string()),
        tags: p.tags.clone(),
        url: p.url.clone(),
    }
}

/// Narrative sections of a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Problem,
    Approach,
    Outcomes,
    Impact,
}

impl Section {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Problem => "Problem",
            Self::Approach => "Approach",
            Self::Outcomes => "Outcomes",
            Self::Impact => "Impact",
        }
    }
}

/// Project detail page view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail<'a> {
    pub title: &'a str,
    pub role: &'a str,
    pub timeframe: &'a str,
    pub stack_label: String,
    pub sections: [(Section, &'a str); 4],
    pub has_media: bool,
    pub links: &'a [ExternalLink],
}

impl<'a> ProjectDetail<'a> {
    pub fn new(p: &'a Project) -> Self {
        Self {
            title: &p.title,
            role: &p.role,
            timeframe: &p.timeframe,
            stack_label: p.stack_label(),
            sections: [
                (Section::Problem, p.problem.as_str()),
                (Section::Approach, p.approach.as_str()),
                (Section::Outcomes, p.outcomes.as_str()),
                (Section::Impact, p.impact.as_str()),
            ],
            has_media: p.has_media(),
            links: &p.links,
        }
    }

    pub fn media_caption(&self) -> &'static str {
        if self.has_media {
            "A reel or 3D asset is available for this project."
        } else {
            "No reel or 3D asset available yet."
        }
    }
}

/// How many neighbours the cover flow shows on each side.
const COVER_FLOW_RADIUS: usize = 2;

/// An item placed in the cover flow, `offset` positions from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleItem<'a> {
    pub item: &'a CarouselItem,
    pub offset: i32,
    pub index: usize,
}

/// Wrap-around cursor over carousel items.
#[derive(Debug, Clone)]
pub struct CoverFlow<'a> {
    items: &'a [CarouselItem],
    current: usize,
}

impl<'a> CoverFlow<'a> {
    pub fn new(items: &'a [CarouselItem]) -> Self {
        Self { items, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&'a CarouselItem> {
        self.items.get(self.current)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + self.items.len() - 1) % self.items.len();
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = index;
        }
    }

    /// Centre the cursor on the item with `slug`. Returns `false` and leaves
    /// the cursor alone when no item matches.
    pub fn center_on(&mut self, slug: &str) -> bool {
        match self.items.iter().position(|item| item.slug == slug) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    /// The centre item and two neighbours on each side, left to right.
    ///
    /// Always five slots; with fewer than five items the window wraps and
    /// items repeat.
    pub fn visible(&self) -> Vec<VisibleItem<'a>> {
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }

        (0..=2 * COVER_FLOW_RADIUS)
            .map(|step| {
                let offset = step as i32 - COVER_FLOW_RADIUS as i32;
                let index =
                    (self.current + len * COVER_FLOW_RADIUS - COVER_FLOW_RADIUS + step) % len;
                VisibleItem {
                    item: &self.items[index],
                    offset,
                    index,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ThreeAsset;

    fn alpha() -> Project {
        Project {
            slug: "alpha".into(),
            title: "Design Tokens Pipeline".into(),
            role: "Lead Engineer".into(),
            timeframe: "2024".into(),
            stack: vec!["TypeScript".into(), "Next.js".into(), "Zod".into()],
            problem: "Teams themed products independently.".into(),
            approach: "Introduced a schema-validated token source.".into(),
            outcomes: "Single source of truth for tokens with CI checks.".into(),
            impact: "Reduced theme regressions.".into(),
            reel: None,
            three: None,
            links: vec![],
            featured: true,
        }
    }

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| {
                let mut p = alpha();
                p.slug = format!("p{i}");
                to_carousel_item(&p)
            })
            .collect()
    }

    fn offsets_and_indices(flow: &CoverFlow<'_>) -> Vec<(i32, usize)> {
        flow.visible().iter().map(|v| (v.offset, v.index)).collect()
    }

    #[test]
    fn test_carousel_item_from_alpha() {
        let item = to_carousel_item(&alpha());
        assert_eq!(
            item,
            CarouselItem {
                slug: "alpha".into(),
                title: "Design Tokens Pipeline".into(),
                role: "Lead Engineer".into(),
                timeframe: "2024".into(),
                stack: vec!["TypeScript".into(), "Next.js".into(), "Zod".into()],
                summary: "Single source of truth for tokens with CI checks.".into(),
            }
        );
    }

    #[test]
    fn test_carousel_item_is_deterministic() {
        let p = alpha();
        assert_eq!(to_carousel_item(&p), to_carousel_item(&p));
    }

    #[test]
    fn test_post_list_item_dates() {
        let mut post = WritingPost {
            slug: "post-a11y".into(),
            title: "Accessible motion defaults".into(),
            excerpt: "Respect reduced-motion.".into(),
            date_iso: "2025-11-04T00:00:00.000Z".into(),
            tags: vec!["motion".into()],
            url: "https://example.com/writing/accessible-motion".into(),
        };
        assert_eq!(to_post_list_item(&post).date.as_deref(), Some("2025-11-04"));

        post.date_iso = "not-a-date".into();
        let item = to_post_list_item(&post);
        assert!(item.date.is_none());
        assert_eq!(item.slug, "post-a11y");
    }

    #[test]
    fn test_project_detail() {
        let mut p = alpha();
        let detail = ProjectDetail::new(&p);
        assert_eq!(detail.stack_label, "TypeScript, Next.js, Zod");
        assert_eq!(detail.sections[2], (Section::Outcomes, p.outcomes.as_str()));
        assert_eq!(detail.media_caption(), "No reel or 3D asset available yet.");

        p.three = Some(ThreeAsset {
            model: "/models/tokens.glb".into(),
            draco: None,
            fallback_image: "/img/tokens.png".into(),
            width: 640,
            height: 480,
            alt: "Token graph".into(),
        });
        assert!(ProjectDetail::new(&p).has_media);
    }

    #[test]
    fn test_cover_flow_wraps() {
        let items = items(3);
        let mut flow = CoverFlow::new(&items);
        flow.prev();
        assert_eq!(flow.current_index(), 2);
        flow.next();
        flow.next();
        assert_eq!(flow.current_index(), 1);
        flow.select(7);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn test_cover_flow_window_full() {
        let items = items(6);
        let flow = CoverFlow::new(&items);
        assert_eq!(
            offsets_and_indices(&flow),
            [(-2, 4), (-1, 5), (0, 0), (1, 1), (2, 2)]
        );
    }

    #[test]
    fn test_cover_flow_small_sets_repeat_to_fill_window() {
        let one = items(1);
        assert_eq!(
            offsets_and_indices(&CoverFlow::new(&one)),
            [(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)]
        );

        let two = items(2);
        assert_eq!(
            offsets_and_indices(&CoverFlow::new(&two)),
            [(-2, 0), (-1, 1), (0, 0), (1, 1), (2, 0)]
        );

        let four = items(4);
        let mut flow = CoverFlow::new(&four);
        flow.select(3);
        assert_eq!(
            offsets_and_indices(&flow),
            [(-2, 1), (-1, 2), (0, 3), (1, 0), (2, 1)]
        );
    }

    #[test]
    fn test_cover_flow_center_on_slug() {
        let items = items(6);
        let mut flow = CoverFlow::new(&items);
        assert!(flow.center_on("p5"));
        assert_eq!(flow.current().map(|c| c.slug.as_str()), Some("p5"));
        assert_eq!(
            offsets_and_indices(&flow),
            [(-2, 3), (-1, 4), (0, 5), (1, 0), (2, 1)]
        );

        assert!(!flow.center_on("missing"));
        assert_eq!(flow.current_index(), 5);
    }

    #[test]
    fn test_cover_flow_empty() {
        let mut flow = CoverFlow::new(&[]);
        flow.next();
        assert!(flow.current().is_none());
        assert!(flow.visible().is_empty());
    }
}
