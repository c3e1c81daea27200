//! Browse pipeline: filter → paginate over an immutable collection
//!
//! `BrowseState` is the one place the loaded collection, the filtered view,
//! the current filters and the current page live. Every mutation goes through
//! a recompute method that resets the dependent pieces together, so the
//! renderers only ever read a consistent snapshot.
//!
//! ```text
//! set_search / set_category ─► refilter ─► page = 1
//! go_to_page ───────────────► clamp ─► visible()
//! reveal(id) ───────────────► (clear filters if hidden) ─► page_of(id)
//! ```

pub mod debounce;
pub mod filter;
pub mod keywords;
pub mod paginate;

use crate::thoughts::{Thought, ThoughtId};
use filter::{category_roster, CategorySelector, FilterCriteria};
use keywords::KeywordIndex;

/// Application state for the filter-paginate-render pipeline
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Full collection, read-only after load; index == id
    thoughts: Vec<Thought>,
    /// Ids matching `criteria`, collection order
    filtered: Vec<ThoughtId>,
    criteria: FilterCriteria,
    /// 1-based, always within `[1, page_count()]`
    current_page: usize,
    categories: Vec<String>,
    keywords: KeywordIndex,
}

impl BrowseState {
    pub fn new(thoughts: Vec<Thought>) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = criteria.apply(&thoughts);
        let categories = category_roster(&thoughts);
        let keywords = KeywordIndex::build(&thoughts);

        Self {
            thoughts,
            filtered,
            criteria,
            current_page: 1,
            categories,
            keywords,
        }
    }

    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn get(&self, id: ThoughtId) -> Option<&Thought> {
        self.thoughts.get(id.0)
    }

    pub fn filtered(&self) -> &[ThoughtId] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// "All" plus each distinct category, first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        paginate::page_count(self.filtered.len())
    }

    /// Records on the current page
    pub fn visible(&self) -> Vec<&Thought> {
        self.page(self.current_page)
    }

    /// Records on an arbitrary page of the filtered view
    pub fn page(&self, page: usize) -> Vec<&Thought> {
        self.filtered[paginate::page_range(self.filtered.len(), page)]
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Replace the search string; resets to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.refilter();
    }

    /// Replace the category selector; resets to page 1
    pub fn set_category(&mut self, category: impl Into<CategorySelector>) {
        self.criteria.category = category.into();
        self.refilter();
    }

    /// Replace both filters at once; resets to page 1
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Switch pages; out-of-range requests are clamped. Returns the new page.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = paginate::clamp_page(page, self.filtered.len());
        self.current_page
    }

    pub fn next_page(&mut self) -> bool {
        let before = self.current_page;
        self.go_to_page(before + 1) != before
    }

    pub fn prev_page(&mut self) -> bool {
        let before = self.current_page;
        self.go_to_page(before.saturating_sub(1)) != before
    }

    /// Position of `id` within the filtered view
    pub fn position_of(&self, id: ThoughtId) -> Option<usize> {
        self.filtered.iter().position(|candidate| *candidate == id)
    }

    /// Page of the filtered view holding `id`
    pub fn page_containing(&self, id: ThoughtId) -> Option<usize> {
        self.position_of(id).map(paginate::page_of)
    }

    /// Make `id` visible: switch to its page, clearing filters first if they
    /// hide it. Returns false for unknown ids.
    pub fn reveal(&mut self, id: ThoughtId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if self.position_of(id).is_none() {
            tracing::debug!("Thought {} hidden by filters, clearing them", id);
            self.set_filters(FilterCriteria::default());
        }
        match self.page_containing(id) {
            Some(page) => {
                self.go_to_page(page);
                true
            }
            None => false,
        }
    }

    fn refilter(&mut self) {
        self.filtered = self.criteria.apply(&self.thoughts);
        self.current_page = 1;
        tracing::debug!(
            search = %self.criteria.search,
            category = %self.criteria.category,
            matches = self.filtered.len(),
            "Filters applied"
        );
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
