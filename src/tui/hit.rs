// Clickable regions, rebuilt every frame
//
// Components register the rectangles they draw interactive things into while
// rendering. A mouse click resolves against the most recently registered
// region containing the point, so finer targets (links) registered after their
// container (the whole thought) win.

use crate::render::share::ShareAction;
use crate::thoughts::ThoughtId;
use ratatui::layout::{Position, Rect};

/// What a click on a region does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 1-based page button
    Page(usize),
    /// Index into the category roster
    Category(usize),
    /// A thought block (select, or open when already selected)
    Thought(ThoughtId),
    /// Keyword cross-reference
    Link(ThoughtId),
    /// Share button on a thought
    Share(ThoughtId, ShareAction),
    /// Search field
    Search,
    /// Modal close control
    CloseModal,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Drop last frame's regions
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the point
    pub fn at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }
}
