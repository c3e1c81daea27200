// Components module - reusable UI building blocks
//
// Rendered top to bottom:
// - Title bar: app name, match count, category buttons
// - Search bar: the debounced search field
// - Thought list: the current page
// - Pager bar: page buttons
// - Status bar: key hints or the latest warning/error
//
// Components that draw clickable things register hit regions on the App.

pub mod category_bar;
pub mod pager_bar;
pub mod search_bar;
pub mod status_bar;
pub mod thought_list;
pub mod title_bar;
pub mod toast;
