//! Static site export
//!
//! Writes one HTML file per page of every view: the "All" view at the site
//! root and each category under `category/<slug>/`. A search string, if given,
//! is baked into every view. Keyword links resolve to the target's page in the
//! current view, then in the "All" view; targets hidden from both render as text.

use super::html::{self, CategoryButton, PageContext};
use super::build_page;
use crate::pipeline::filter::{CategorySelector, FilterCriteria};
use crate::pipeline::BrowseState;
use crate::thoughts::ThoughtId;
use anyhow::{Context, Result};
use chrono::Datelike;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Page title used for every exported file
pub const SITE_TITLE: &str = "Thoughts";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub search: String,
    pub page_url: Option<String>,
}

/// What was written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub views: usize,
    pub files: usize,
}

struct View {
    selector: CategorySelector,
    slug: Option<String>,
}

/// Write the whole site for `state`'s collection
pub fn export_site(state: &BrowseState, options: &ExportOptions) -> Result<ExportSummary> {
    let year = chrono::Local::now().year();
    let views = plan_views(state.categories());

    let mut all = state.clone();
    all.set_filters(FilterCriteria::new(options.search.clone(), CategorySelector::All));
    let all_pages: HashMap<ThoughtId, usize> = all
        .filtered()
        .iter()
        .filter_map(|id| all.page_containing(*id).map(|page| (*id, page)))
        .collect();

    let mut summary = ExportSummary::default();
    for view in &views {
        let mut current = state.clone();
        current.set_filters(FilterCriteria::new(
            options.search.clone(),
            view.selector.clone(),
        ));
        let slug = view.slug.as_deref();
        let prefix = html::root_prefix(slug);

        let buttons: Vec<CategoryButton> = views
            .iter()
            .map(|other| CategoryButton {
                label: other.selector.label().to_string(),
                href: format!("{}{}", prefix, html::view_path(other.slug.as_deref(), 1)),
                active: other.selector == view.selector,
            })
            .collect();

        let page_count = current.page_count();
        for page in 1..=page_count {
            current.go_to_page(page);
            let blocks = build_page(&current.visible(), current.keywords());

            let page_href = |p: usize| html::view_path(None, p);
            let link_href = |id: ThoughtId| {
                if let Some(p) = current.page_containing(id) {
                    Some(format!("{}#{}", html::view_path(None, p), id.anchor()))
                } else {
                    all_pages
                        .get(&id)
                        .map(|p| format!("{}{}#{}", prefix, html::view_path(None, *p), id.anchor()))
                }
            };

            let document = html::render_page(&PageContext {
                title: SITE_TITLE,
                blocks: &blocks,
                categories: &buttons,
                current_page: page,
                page_count,
                search: &options.search,
                page_url: options.page_url.as_deref(),
                year,
                page_href: &page_href,
                link_href: &link_href,
            });

            let path = options.out_dir.join(html::view_path(slug, page));
            write_file(&path, &document)?;
            summary.files += 1;
        }
        summary.views += 1;
        tracing::debug!(
            category = %view.selector,
            pages = page_count,
            "Exported view"
        );
    }

    tracing::info!(
        "Exported {} views ({} files) to {}",
        summary.views,
        summary.files,
        options.out_dir.display()
    );
    Ok(summary)
}

/// One view per roster entry; colliding slugs get a numeric suffix
fn plan_views(roster: &[String]) -> Vec<View> {
    let mut used = HashSet::new();
    roster
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let selector = CategorySelector::from(name.as_str());
            let slug = match selector {
                CategorySelector::All => None,
                CategorySelector::Named(_) => {
                    let base = html::slug(name);
                    let mut slug = base.clone();
                    let mut suffix = index;
                    while used.contains(&slug) {
                        slug = format!("{}-{}", base, suffix);
                        suffix += 1;
                    }
                    used.insert(slug.clone());
                    Some(slug)
                }
            };
            View { selector, slug }
        })
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thoughts::{sample, Thought};
    use tempfile::TempDir;

    fn collection() -> Vec<Thought> {
        let mut thoughts: Vec<Thought> = (0..7)
            .map(|i| {
                let category = if i < 5 { "Life" } else { "Science" };
                sample(i, &format!("Quote {}", i + 1), Some(category))
            })
            .collect();
        thoughts[6].keywords = vec!["entropy".to_string()];
        thoughts[0].explanation = "Mind the entropy.".to_string();
        thoughts
    }

    fn options(dir: &TempDir, search: &str) -> ExportOptions {
        ExportOptions {
            out_dir: dir.path().to_path_buf(),
            search: search.to_string(),
            page_url: None,
        }
    }

    #[test]
    fn writes_every_page_of_every_view() {
        let dir = TempDir::new().unwrap();
        let state = BrowseState::new(collection());
        let summary = export_site(&state, &options(&dir, "")).unwrap();

        // All: 2 pages, Life: 1, Science: 1
        assert_eq!(summary, ExportSummary { views: 3, files: 4 });
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("page-2.html").exists());
        assert!(dir.path().join("category/life/index.html").exists());
        assert!(dir.path().join("category/science/index.html").exists());
    }

    #[test]
    fn keyword_links_cross_pages_and_views() {
        let dir = TempDir::new().unwrap();
        let state = BrowseState::new(collection());
        export_site(&state, &options(&dir, "")).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"href="page-2.html#thought-6" class="keyword-link""#));

        // Target is a Science thought, so the Life view links back to All
        let life = fs::read_to_string(dir.path().join("category/life/index.html")).unwrap();
        assert!(life.contains(r#"href="../../page-2.html#thought-6""#));
        assert!(life.contains(r#"<a class="category-btn active" href="../../category/life/index.html">Life</a>"#));
    }

    #[test]
    fn search_is_baked_into_views() {
        let dir = TempDir::new().unwrap();
        let state = BrowseState::new(collection());
        let summary = export_site(&state, &options(&dir, "quote 7")).unwrap();

        // Every view collapses to a single page
        assert_eq!(summary.files, 3);
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"id="thought-6""#));
        assert!(!index.contains(r#"id="thought-0""#));
        let life = fs::read_to_string(dir.path().join("category/life/index.html")).unwrap();
        assert!(life.contains("No thoughts match"));
    }

    #[test]
    fn colliding_slugs_are_disambiguated() {
        let views = plan_views(&[
            "All".to_string(),
            "Self Help".to_string(),
            "self-help".to_string(),
        ]);
        assert_eq!(views[0].slug, None);
        assert_eq!(views[1].slug.as_deref(), Some("self-help"));
        assert_eq!(views[2].slug.as_deref(), Some("self-help-2"));
    }

    #[test]
    fn suffixed_slug_skips_existing_category() {
        let roster: Vec<String> = ["All", "x", "x-3", "X"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let slugs: Vec<_> = plan_views(&roster)
            .into_iter()
            .filter_map(|view| view.slug)
            .collect();
        assert_eq!(slugs, vec!["x", "x-3", "x-4"]);
    }
}
