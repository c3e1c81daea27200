// Carrying out share requests from the TUI
//
// Copy goes to the system clipboard through `arboard`, created fresh each time
// so nothing is held between copies. Network shares open in the browser.
// Either way the outcome is a toast; failures are also logged.

use super::app::ShareRequest;
use super::components::toast::Toast;
use crate::render::share::{self, ShareAction};
use anyhow::{Context, Result};
use arboard::Clipboard;

pub const COPIED_MESSAGE: &str = "Quote copied to clipboard!";

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux) or when access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Execute a request, returning the toast to show
pub fn perform(request: &ShareRequest) -> Toast {
    perform_with(request, copy_to_clipboard, share::open_in_browser)
}

fn perform_with(
    request: &ShareRequest,
    copy: impl FnOnce(&str) -> Result<()>,
    open: impl FnOnce(&str) -> Result<()>,
) -> Toast {
    let Some(url) = request
        .action
        .url(&request.quote, request.page_url.as_deref())
    else {
        return match copy(&request.quote) {
            Ok(()) => Toast::new(COPIED_MESSAGE),
            Err(e) => {
                tracing::error!("Clipboard error: {:#}", e);
                Toast::error("Could not copy quote")
            }
        };
    };

    match open(&url) {
        Ok(()) => {
            tracing::debug!("Opened share URL {}", url);
            Toast::new(format!("Opened {}", network_name(request.action)))
        }
        Err(e) => {
            tracing::error!("Browser error: {:#}", e);
            Toast::error("Could not open browser")
        }
    }
}

fn network_name(action: ShareAction) -> &'static str {
    match action {
        ShareAction::X => "X",
        ShareAction::LinkedIn => "LinkedIn",
        ShareAction::Facebook => "Facebook",
        ShareAction::CopyQuote => "clipboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::toast::ToastKind;
    use anyhow::anyhow;
    use std::cell::RefCell;

    fn request(action: ShareAction) -> ShareRequest {
        ShareRequest {
            action,
            quote: "Stay hungry".to_string(),
            page_url: None,
        }
    }

    #[test]
    fn copy_puts_literal_quote_on_clipboard() {
        let copied = RefCell::new(String::new());
        let toast = perform_with(
            &request(ShareAction::CopyQuote),
            |text| {
                *copied.borrow_mut() = text.to_string();
                Ok(())
            },
            |_| panic!("copy must not open a browser"),
        );
        assert_eq!(toast.message, COPIED_MESSAGE);
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(*copied.borrow(), "Stay hungry");
    }

    #[test]
    fn share_opens_encoded_url() {
        let opened = RefCell::new(String::new());
        let toast = perform_with(
            &request(ShareAction::X),
            |_| panic!("share must not touch the clipboard"),
            |url| {
                *opened.borrow_mut() = url.to_string();
                Ok(())
            },
        );
        assert_eq!(toast.message, "Opened X");
        assert_eq!(
            *opened.borrow(),
            "https://twitter.com/intent/tweet?text=Stay%20hungry"
        );
    }

    #[test]
    fn failures_become_toasts() {
        let toast = perform_with(
            &request(ShareAction::CopyQuote),
            |_| Err(anyhow!("no display")),
            |_| Ok(()),
        );
        assert_eq!(toast.message, "Could not copy quote");
        assert_eq!(toast.kind, ToastKind::Error);

        let toast = perform_with(
            &request(ShareAction::Facebook),
            |_| Ok(()),
            |_| Err(anyhow!("no browser")),
        );
        assert_eq!(toast.message, "Could not open browser");
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
