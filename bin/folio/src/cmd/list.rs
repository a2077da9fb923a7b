//! List command - print projects or posts in load order

use color_eyre::eyre::Result;
use folio_core::{Config, ContentStore, to_post_list_item};

/// Which collection to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Collection {
    Projects,
    Posts,
}

/// Run the list command.
pub fn run(config: &Config, collection: Collection, featured: bool) -> Result<()> {
    let store = crate::open_store(config);
    print!("{}", render(&store, collection, featured));
    Ok(())
}

/// One line per record: slug, title and a short descriptor.
pub fn render(store: &ContentStore, collection: Collection, featured: bool) -> String {
    let mut out = String::new();

    match collection {
        Collection::Projects => {
            for p in store.load_projects() {
                if featured && !p.featured {
                    continue;
                }
                let star = if p.featured { "*" } else { " " };
                out.push_str(&format!(
                    "{star} {:<30} {} ({}, {})\n",
                    p.slug, p.title, p.role, p.timeframe
                ));
            }
        }
        Collection::Posts => {
            for post in store.load_writing_posts() {
                let item = to_post_list_item(post);
                let date = item.date.as_deref().unwrap_or("????-??-??");
                out.push_str(&format!("  {date} {:<24} {}\n", item.slug, item.title));
            }
        }
    }

    out
}
