// Share actions for a single quote
//
// Each network gets a percent-encoded share URL; "copy" puts the literal quote
// on the clipboard. Opening and copying are fire-and-forget: failures are
// logged and surfaced as a short toast, never as an error the caller must handle.

use anyhow::{Context, Result};

/// The four share actions attached to every rendered thought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAction {
    X,
    LinkedIn,
    Facebook,
    CopyQuote,
}

impl ShareAction {
    pub fn all() -> &'static [ShareAction] {
        &[
            ShareAction::X,
            ShareAction::LinkedIn,
            ShareAction::Facebook,
            ShareAction::CopyQuote,
        ]
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ShareAction::X => "Share on X",
            ShareAction::LinkedIn => "Share on LinkedIn",
            ShareAction::Facebook => "Share on Facebook",
            ShareAction::CopyQuote => "Copy Quote",
        }
    }

    /// CSS class used by the HTML export
    pub fn css_class(&self) -> &'static str {
        match self {
            ShareAction::X => "twitter-share",
            ShareAction::LinkedIn => "linkedin-share",
            ShareAction::Facebook => "facebook-share",
            ShareAction::CopyQuote => "copy-quote",
        }
    }

    /// Key bound to this action in the TUI
    pub fn key(&self) -> char {
        match self {
            ShareAction::X => 'x',
            ShareAction::LinkedIn => 'i',
            ShareAction::Facebook => 'f',
            ShareAction::CopyQuote => 'y',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::all().iter().copied().find(|action| action.key() == key)
    }

    /// Share URL for network actions; `None` for copy
    ///
    /// `page_url` is the page being shared alongside the quote. When absent the
    /// parameter is dropped rather than sent empty.
    pub fn url(&self, quote: &str, page_url: Option<&str>) -> Option<String> {
        let text = urlencoding::encode(quote);
        let page = page_url.map(urlencoding::encode);
        match self {
            ShareAction::X => Some(match page {
                Some(page) => format!("https://twitter.com/intent/tweet?text={}&url={}", text, page),
                None => format!("https://twitter.com/intent/tweet?text={}", text),
            }),
            ShareAction::LinkedIn => Some(match page {
                Some(page) => format!(
                    "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                    page, text
                ),
                None => format!("https://www.linkedin.com/shareArticle?mini=true&title={}", text),
            }),
            ShareAction::Facebook => Some(match page {
                Some(page) => format!(
                    "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                    page, text
                ),
                None => format!("https://www.facebook.com/sharer/sharer.php?quote={}", text),
            }),
            ShareAction::CopyQuote => None,
        }
    }
}

/// Open a share URL in the system browser
pub fn open_in_browser(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}
