//! HTML rendering for the static site export
//!
//! Mirrors the browser markup (`#thoughts-container`, `#pagination-container`,
//! `.share-buttons`, a modal per thought) without needing a script to build it.
//! Every piece of record text goes through [`escape`], attributes included.

use super::ThoughtBlock;
use crate::pipeline::keywords::Segment;
use crate::thoughts::ThoughtId;

/// Escape text for element content and quoted attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Directory-safe name for a category view
pub fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "category".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Path of a view page relative to the site root
///
/// `category_slug` is `None` for the "All" view.
pub fn view_path(category_slug: Option<&str>, page: usize) -> String {
    let file = if page <= 1 {
        "index.html".to_string()
    } else {
        format!("page-{}.html", page)
    };
    match category_slug {
        None => file,
        Some(slug) => format!("category/{}/{}", slug, file),
    }
}

/// Prefix that walks from a view page back to the site root
pub fn root_prefix(category_slug: Option<&str>) -> &'static str {
    if category_slug.is_some() {
        "../../"
    } else {
        ""
    }
}

/// One category button
#[derive(Debug, Clone)]
pub struct CategoryButton {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Inputs for one complete page
pub struct PageContext<'a> {
    pub title: &'a str,
    pub blocks: &'a [ThoughtBlock],
    pub categories: &'a [CategoryButton],
    pub current_page: usize,
    pub page_count: usize,
    /// Search baked into this export, shown as a notice
    pub search: &'a str,
    pub page_url: Option<&'a str>,
    pub year: i32,
    /// Href for a page number of the current view
    pub page_href: &'a dyn Fn(usize) -> String,
    /// Href for a cross-reference target, `None` renders plain text
    pub link_href: &'a dyn Fn(ThoughtId) -> Option<String>,
}

/// Render a full HTML document for one page of one view
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let thoughts = if ctx.blocks.is_empty() {
        "        <p class=\"empty\">No thoughts match the current filters.</p>\n".to_string()
    } else {
        ctx.blocks
            .iter()
            .map(|block| render_thought(block, ctx.page_url, ctx.link_href))
            .collect()
    };
    let modals: String = ctx.blocks.iter().map(render_modal).collect();

    let search_notice = if ctx.search.is_empty() {
        String::new()
    } else {
        format!(
            "        <p class=\"search-notice\">Showing results for \"{}\"</p>\n",
            escape(ctx.search)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <header>
        <h1>{title}</h1>
{search_notice}        <nav id="category-filter-container">
{categories}        </nav>
    </header>
    <main id="thoughts-container">
{thoughts}    </main>
    <nav id="pagination-container">
{pagination}    </nav>
{modals}    <footer>
        <p>&copy; <span id="current-year">{year}</span></p>
    </footer>
    <script>{script}</script>
</body>
</html>
"#,
        title = escape(ctx.title),
        css = CSS,
        search_notice = search_notice,
        categories = render_categories(ctx.categories),
        thoughts = thoughts,
        pagination = render_pagination(ctx.current_page, ctx.page_count, ctx.page_href),
        modals = modals,
        year = ctx.year,
        script = COPY_SCRIPT,
    )
}

/// Markup for one thought block
pub fn render_thought(
    block: &ThoughtBlock,
    page_url: Option<&str>,
    link_href: &dyn Fn(ThoughtId) -> Option<String>,
) -> String {
    let category = block
        .category
        .as_deref()
        .map(|c| format!("\n                <span class=\"category\">{}</span>", escape(c)))
        .unwrap_or_default();

    let quote_attr = escape(&block.quote);
    let buttons: String = block
        .actions
        .iter()
        .map(|action| match action.url(&block.quote, page_url) {
            Some(url) => format!(
                "                <a class=\"share-btn {}\" href=\"{}\" target=\"_blank\" rel=\"noopener\" data-quote=\"{}\">{}</a>\n",
                action.css_class(),
                escape(&url),
                quote_attr,
                action.label()
            ),
            None => format!(
                "                <button class=\"share-btn {}\" data-quote=\"{}\">{}</button>\n",
                action.css_class(),
                quote_attr,
                action.label()
            ),
        })
        .collect();

    format!(
        r##"        <section class="thought" id="{anchor}">
            <div class="thought-header">
                <span class="date">{date}</span>{category}
            </div>
            <div class="text-block">
                <blockquote>"{quote}"</blockquote>
                <p class="author">- {author}</p>
            </div>
            <div class="explanation">
                <p>{explanation}</p>
                <a href="#modal-{id}" class="read-more" data-thought-id="{id}">Read more</a>
            </div>
            <div class="share-buttons">
{buttons}            </div>
        </section>
"##,
        anchor = block.id.anchor(),
        date = escape(&block.date),
        category = category,
        quote = escape(&block.quote),
        author = escape(&block.author),
        explanation = render_explanation(&block.explanation, link_href),
        id = block.id,
        buttons = buttons,
    )
}

/// Explanation text with keyword links as anchors
pub fn render_explanation(
    segments: &[Segment],
    link_href: &dyn Fn(ThoughtId) -> Option<String>,
) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => escape(text),
            Segment::Link { text, target } => match link_href(*target) {
                Some(href) => format!(
                    "<a href=\"{}\" class=\"keyword-link\" data-thought-id=\"{}\">{}</a>",
                    escape(&href),
                    target,
                    escape(text)
                ),
                None => escape(text),
            },
        })
        .collect()
}

/// Detail overlay for one thought, shown while `#modal-{id}` is targeted
pub fn render_modal(block: &ThoughtBlock) -> String {
    format!(
        r##"    <div class="modal" id="modal-{id}">
        <a class="modal-backdrop" href="#{anchor}"></a>
        <div class="modal-content">
            <a class="close-button" href="#{anchor}">&times;</a>
            <div class="modal-body">
                <h2>{quote}</h2>
                <p class="author">- {author}</p>
                <p>{explanation}</p>
            </div>
        </div>
    </div>
"##,
        id = block.id,
        anchor = block.id.anchor(),
        quote = escape(&block.quote),
        author = escape(&block.author),
        explanation = escape(&block.explanation_text()),
    )
}

/// Page buttons, current page marked active
pub fn render_pagination(current: usize, count: usize, page_href: &dyn Fn(usize) -> String) -> String {
    (1..=count.max(1))
        .map(|page| {
            let class = if page == current { " class=\"active\"" } else { "" };
            format!(
                "        <a{} href=\"{}\">{}</a>\n",
                class,
                escape(&page_href(page)),
                page
            )
        })
        .collect()
}

/// Category buttons, selected one marked active
pub fn render_categories(buttons: &[CategoryButton]) -> String {
    buttons
        .iter()
        .map(|button| {
            let class = if button.active {
                "category-btn active"
            } else {
                "category-btn"
            };
            format!(
                "            <a class=\"{}\" href=\"{}\">{}</a>\n",
                class,
                escape(&button.href),
                escape(&button.label)
            )
        })
        .collect()
}

/// Structural styles only: modal visibility and the jump highlight
pub const CSS: &str = r#"
.modal { display: none; position: fixed; inset: 0; }
.modal:target { display: block; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); }
.modal-content { position: relative; margin: 10% auto; max-width: 40em; background: #fff; padding: 1em; }
.close-button { float: right; text-decoration: none; }
#pagination-container a.active, .category-btn.active { font-weight: bold; }
section.thought:target { animation: highlight 2s; }
@keyframes highlight { from { background: #fff3b0; } to { background: transparent; } }
"#;

/// Clipboard wiring for the copy buttons
pub const COPY_SCRIPT: &str = r#"
document.querySelectorAll('.copy-quote').forEach(function (button) {
    button.addEventListener('click', function () {
        var quote = this.getAttribute('data-quote');
        navigator.clipboard.writeText(quote).then(function () {
            alert('Quote copied to clipboard!');
        }).catch(function (err) {
            console.error('Failed to copy: ', err);
        });
    });
});
"#;
