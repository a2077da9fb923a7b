//! Export commands - carousel items, static routes and JSON-LD

use color_eyre::eyre::{Result, bail};
use folio_core::{
    CarouselItem, Config, ContentStore, CoverFlow, VisibleItem, seo, static_routes,
    to_carousel_item,
};

/// Carousel items for every project, in load order.
pub fn carousel_items(store: &ContentStore) -> Vec<CarouselItem> {
    store.load_projects().iter().map(to_carousel_item).collect()
}

/// The cover flow window centred on `slug`.
pub fn cover_flow_window<'a>(
    items: &'a [CarouselItem],
    slug: &str,
) -> Result<Vec<VisibleItem<'a>>> {
    let mut flow = CoverFlow::new(items);
    if !flow.center_on(slug) {
        bail!("No carousel item with slug '{}'", slug);
    }
    Ok(flow.visible())
}

/// Print carousel items as pretty JSON, or the cover flow window around
/// `center` when given.
pub fn carousel(config: &Config, featured: bool, center: Option<&str>) -> Result<()> {
    let store = crate::open_store(config);
    let mut items = carousel_items(&store);
    if featured {
        items.retain(|item| {
            store
                .get_project_by_slug(&item.slug)
                .is_some_and(|p| p.featured)
        });
    }

    match center {
        Some(slug) => {
            let window = cover_flow_window(&items, slug)?;
            println!("{}", serde_json::to_string_pretty(&window)?);
        }
        None => println!("{}", serde_json::to_string_pretty(&items)?),
    }
    Ok(())
}

/// Print every static route, one per line.
pub fn routes(config: &Config) -> Result<()> {
    let store = crate::open_store(config);
    for route in static_routes(&store) {
        println!("{route}");
    }
    Ok(())
}

/// Print the JSON-LD documents for the page head.
pub fn json_ld(config: &Config) -> Result<()> {
    for doc in seo::json_ld_documents(&config.site) {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_items_follow_projects() {
        let store = folio_core::build_content_store();
        let items = carousel_items(&store);

        assert_eq!(items.len(), store.load_projects().len());
        for (item, project) in items.iter().zip(store.load_projects()) {
            assert_eq!(item.slug, project.slug);
            assert_eq!(item.summary, project.outcomes);
        }
    }

    #[test]
    fn test_carousel_json_shape() {
        let store = folio_core::build_content_store();
        let json = serde_json::to_value(carousel_items(&store)).expect("serialize");
        let first = &json[0];
        assert_eq!(first["slug"], "skin-disease-detection");
        assert!(first["summary"].as_str().is_some_and(|s| s.starts_with("Achieved 89%")));
        assert!(first.get("outcomes").is_none());
    }

    #[test]
    fn test_cover_flow_window_centres_on_slug() {
        let store = folio_core::build_content_store();
        let items = carousel_items(&store);
        let window = cover_flow_window(&items, "robot-fish").expect("known slug");

        let slugs: Vec<&str> = window.iter().map(|v| v.item.slug.as_str()).collect();
        assert_eq!(
            slugs,
            [
                "skin-disease-detection",
                "environmental-data-analysis",
                "robot-fish",
                "alpha",
                "beta"
            ]
        );

        let json = serde_json::to_value(&window).expect("serialize");
        assert_eq!(json[2]["offset"], 0);
        assert_eq!(json[2]["index"], 2);
        assert_eq!(json[2]["item"]["slug"], "robot-fish");
    }

    #[test]
    fn test_cover_flow_window_repeats_in_small_sets() {
        let store = folio_core::build_content_store();
        let items: Vec<CarouselItem> = carousel_items(&store).into_iter().take(2).collect();
        let window = cover_flow_window(&items, "skin-disease-detection").expect("known slug");
        let indices: Vec<usize> = window.iter().map(|v| v.index).collect();
        assert_eq!(indices, [0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_cover_flow_window_unknown_slug() {
        let store = folio_core::build_content_store();
        let items = carousel_items(&store);
        let err = cover_flow_window(&items, "does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
