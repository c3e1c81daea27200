// App state for the TUI
//
// Everything the viewer shows lives here: the browse pipeline, selection and
// link focus within the current page, the search field with its debouncer,
// the jump highlight, the modal and the toast. Methods are plain state
// transitions; terminal I/O and clipboard/browser side effects stay in the
// event loop, which receives a `ShareRequest` whenever one is due.

use super::components::toast::Toast;
use super::hit::{HitMap, HitTarget};
use super::modal::{Modal, ModalAction};
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pipeline::debounce::Debouncer;
use crate::pipeline::filter::CategorySelector;
use crate::pipeline::BrowseState;
use crate::render::share::ShareAction;
use crate::render::ThoughtBlock;
use crate::thoughts::loader::{LoadError, LOAD_FAILED_MESSAGE};
use crate::thoughts::{Thought, ThoughtId};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Rows a wheel notch or PageUp/PageDown moves the detail modal
const MODAL_PAGE: i32 = 10;

/// Where the initial load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Thought flashed after a cross-reference jump
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub id: ThoughtId,
    until: Instant,
}

/// A copy or share the event loop should carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub action: ShareAction,
    pub quote: String,
    pub page_url: Option<String>,
}

/// Search field text plus the pending (debounced) value
#[derive(Debug)]
pub struct SearchInput {
    pub text: String,
    pub editing: bool,
    debouncer: Debouncer<String>,
}

impl SearchInput {
    fn new(delay: Duration) -> Self {
        Self {
            text: String::new(),
            editing: false,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

pub struct App {
    pub browse: BrowseState,
    pub status: LoadStatus,

    /// `None` is the hidden state
    pub modal: Option<Modal>,
    /// Screen area of the open modal, for click-outside-to-close
    pub modal_area: Option<Rect>,

    /// Index into the current page
    pub selected: usize,
    /// Index into the selected thought's keyword links
    pub focused_link: Option<usize>,
    /// First rendered row of the thought list
    pub list_scroll: usize,

    pub search: SearchInput,
    pub highlight: Option<Highlight>,
    pub toast: Option<Toast>,

    pub theme: Theme,
    pub log_buffer: LogBuffer,
    /// Clickable regions from the last frame
    pub hits: HitMap,

    pub page_url: Option<String>,
    highlight_duration: Duration,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            browse: BrowseState::default(),
            status: LoadStatus::Loading,
            modal: None,
            modal_area: None,
            selected: 0,
            focused_link: None,
            list_scroll: 0,
            search: SearchInput::new(config.search_debounce()),
            highlight: None,
            toast: None,
            theme: Theme::from_choice(config.theme),
            log_buffer,
            hits: HitMap::default(),
            page_url: config.page_url.clone(),
            highlight_duration: config.highlight_duration(),
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────

    pub fn on_loaded(&mut self, result: Result<Vec<Thought>, LoadError>) {
        match result {
            Ok(thoughts) => {
                tracing::info!("Loaded {} thoughts", thoughts.len());
                self.browse = BrowseState::new(thoughts);
                // Search typed while loading still applies
                let pending = self
                    .search
                    .debouncer
                    .flush()
                    .unwrap_or_else(|| self.search.text.clone());
                if !pending.is_empty() {
                    self.browse.set_search(pending);
                }
                self.status = LoadStatus::Ready;
                self.reset_selection();
            }
            Err(e) => {
                tracing::error!("{} ({})", LOAD_FAILED_MESSAGE, e);
                self.status = LoadStatus::Failed;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection and paging
    // ─────────────────────────────────────────────────────────────────────

    pub fn visible_ids(&self) -> Vec<ThoughtId> {
        self.browse.visible().iter().map(|t| t.id).collect()
    }

    pub fn selected_id(&self) -> Option<ThoughtId> {
        self.visible_ids().get(self.selected).copied()
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.focused_link = None;
        self.list_scroll = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.browse.visible().len() {
            self.selected += 1;
            self.focused_link = None;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.focused_link = None;
        }
    }

    /// Select a thought on the current page
    pub fn select(&mut self, id: ThoughtId) -> bool {
        match self.visible_ids().iter().position(|v| *v == id) {
            Some(index) => {
                if index != self.selected {
                    self.selected = index;
                    self.focused_link = None;
                }
                true
            }
            None => false,
        }
    }

    pub fn next_page(&mut self) {
        if self.browse.next_page() {
            self.reset_selection();
        }
    }

    pub fn prev_page(&mut self) {
        if self.browse.prev_page() {
            self.reset_selection();
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        let before = self.browse.current_page();
        if self.browse.go_to_page(page) != before {
            self.reset_selection();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Category
    // ─────────────────────────────────────────────────────────────────────

    /// Roster index of the active category
    pub fn category_index(&self) -> usize {
        let active = &self.browse.criteria().category;
        self.browse
            .categories()
            .iter()
            .position(|name| CategorySelector::from(name.as_str()) == *active)
            .unwrap_or(0)
    }

    pub fn select_category(&mut self, index: usize) {
        let Some(name) = self.browse.categories().get(index).cloned() else {
            return;
        };
        if index != self.category_index() {
            self.browse.set_category(name.as_str());
            self.reset_selection();
        }
    }

    pub fn next_category(&mut self) {
        let count = self.browse.categories().len().max(1);
        self.select_category((self.category_index() + 1) % count);
    }

    pub fn prev_category(&mut self) {
        let count = self.browse.categories().len().max(1);
        self.select_category((self.category_index() + count - 1) % count);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────

    pub fn start_search(&mut self) {
        self.search.editing = true;
    }

    pub fn search_push(&mut self, ch: char, now: Instant) {
        self.search.text.push(ch);
        self.search.debouncer.schedule(self.search.text.clone(), now);
    }

    pub fn search_pop(&mut self, now: Instant) {
        if self.search.text.pop().is_some() {
            self.search.debouncer.schedule(self.search.text.clone(), now);
        }
    }

    /// Apply the typed search now and leave the field
    pub fn submit_search(&mut self) {
        self.search.editing = false;
        if let Some(value) = self.search.debouncer.flush() {
            self.apply_search(value);
        }
    }

    /// Empty the field and drop the search restriction immediately
    pub fn clear_search(&mut self) {
        self.search.editing = false;
        self.search.debouncer.cancel();
        self.search.text.clear();
        self.apply_search(String::new());
    }

    fn apply_search(&mut self, value: String) {
        if self.status != LoadStatus::Ready {
            return;
        }
        if self.browse.criteria().search != value {
            self.browse.set_search(value);
            self.reset_selection();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────────────────

    /// Fire the debounced search and expire the highlight and toast
    pub fn tick(&mut self, now: Instant) {
        if let Some(value) = self.search.debouncer.poll(now) {
            self.apply_search(value);
        }
        if self.highlight.is_some_and(|h| now >= h.until) {
            self.highlight = None;
        }
        self.clear_expired_toast();
    }

    pub fn is_highlighted(&self, id: ThoughtId) -> bool {
        self.highlight.is_some_and(|h| h.id == id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Keyword links
    // ─────────────────────────────────────────────────────────────────────

    /// Link targets of the selected thought, reading order
    pub fn selected_links(&self) -> Vec<ThoughtId> {
        let visible = self.browse.visible();
        let Some(thought) = visible.get(self.selected) else {
            return Vec::new();
        };
        ThoughtBlock::build(thought, self.browse.keywords())
            .links()
            .into_iter()
            .map(|(_, target)| target)
            .collect()
    }

    pub fn cycle_link(&mut self, forward: bool) {
        let count = self.selected_links().len();
        if count == 0 {
            self.focused_link = None;
            return;
        }
        self.focused_link = Some(match (self.focused_link, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    pub fn focused_link_target(&self) -> Option<ThoughtId> {
        self.focused_link
            .and_then(|i| self.selected_links().get(i).copied())
    }

    /// Jump to `target`: its page, selected and highlighted
    ///
    /// Filters that hide the target are reset first.
    pub fn follow_link(&mut self, target: ThoughtId, now: Instant) -> bool {
        self.close_modal();
        if !self.browse.reveal(target) {
            tracing::warn!("Keyword link to unknown thought {}", target);
            return false;
        }

        // reveal() may have cleared the search
        self.search.debouncer.cancel();
        self.search.editing = false;
        self.search.text = self.browse.criteria().search.clone();

        self.selected = self
            .visible_ids()
            .iter()
            .position(|id| *id == target)
            .unwrap_or(0);
        self.focused_link = None;
        self.highlight = Some(Highlight {
            id: target,
            until: now + self.highlight_duration,
        });
        tracing::debug!("Jumped to thought {} on page {}", target, self.browse.current_page());
        true
    }

    /// Enter: follow the focused link, otherwise open the detail modal
    pub fn activate(&mut self, now: Instant) {
        match self.focused_link_target() {
            Some(target) => {
                self.follow_link(target, now);
            }
            None => self.open_detail(),
        }
    }

    /// Esc outside modals: drop link focus and highlight
    pub fn escape(&mut self) {
        self.focused_link = None;
        self.highlight = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Modal
    // ─────────────────────────────────────────────────────────────────────

    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_id() {
            self.modal = Some(Modal::detail(id));
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.modal_area = None;
    }

    pub fn apply_modal_action(&mut self, action: ModalAction) -> Option<ShareRequest> {
        let modal = self.modal.as_mut()?;
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.close_modal(),
            ModalAction::ScrollUp => modal.scroll_by(-1),
            ModalAction::ScrollDown => modal.scroll_by(1),
            ModalAction::PageUp => modal.scroll_by(-MODAL_PAGE),
            ModalAction::PageDown => modal.scroll_by(MODAL_PAGE),
            ModalAction::ScrollTop => modal.scroll_to_top(),
            ModalAction::Share(share) => {
                let id = modal.thought()?;
                return self.share_request(share, id);
            }
        }
        None
    }

    // ─────────────────────────────────────────────────────────────────────
    // Share and copy
    // ─────────────────────────────────────────────────────────────────────

    pub fn share_request(&self, action: ShareAction, id: ThoughtId) -> Option<ShareRequest> {
        let thought = self.browse.get(id)?;
        Some(ShareRequest {
            action,
            quote: thought.quote.clone(),
            page_url: self.page_url.clone(),
        })
    }

    pub fn share_selected(&self, action: ShareAction) -> Option<ShareRequest> {
        self.share_request(action, self.selected_id()?)
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────

    /// Left click at a screen cell
    pub fn click(&mut self, column: u16, row: u16, now: Instant) -> Option<ShareRequest> {
        if self.modal.is_some() {
            let inside = self
                .modal_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
            if !inside {
                self.close_modal();
                return None;
            }
            // Only the modal's own regions are registered while it is open
            return match self.hits.at(column, row) {
                Some(HitTarget::CloseModal) => {
                    self.close_modal();
                    None
                }
                Some(HitTarget::Share(id, action)) => self.share_request(action, id),
                Some(HitTarget::Link(target)) => {
                    self.follow_link(target, now);
                    None
                }
                _ => None,
            };
        }

        match self.hits.at(column, row)? {
            HitTarget::Page(page) => self.go_to_page(page),
            HitTarget::Category(index) => self.select_category(index),
            HitTarget::Thought(id) => {
                if self.selected_id() == Some(id) {
                    self.open_detail();
                } else {
                    self.select(id);
                }
            }
            HitTarget::Link(target) => {
                self.follow_link(target, now);
            }
            HitTarget::Share(id, action) => {
                self.select(id);
                return self.share_request(action, id);
            }
            HitTarget::Search => self.start_search(),
            HitTarget::CloseModal => self.close_modal(),
        }
        None
    }

    pub fn scroll(&mut self, down: bool) {
        match self.modal.as_mut() {
            Some(modal) => modal.scroll_by(if down { 3 } else { -3 }),
            None if down => self.select_next(),
            None => self.select_prev(),
        }
    }
}
