//! Opening links in the system browser.

/// Shown when no application could take the URL.
pub const NO_OPENER_MESSAGE: &str = "No application can open this URL";

/// Something that can hand a URL to another application.
pub trait UrlOpener {
    /// Returns `false` if nothing accepted the URL.
    fn open_url(&self, url: &str) -> bool;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &str) -> bool {
        match open::that(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(%url, error = %e, "No URL handler");
                false
            }
        }
    }
}

/// Open `url`, or describe what the user has to do instead.
#[must_use]
pub fn open_or_print(opener: &dyn UrlOpener, url: &str) -> String {
    if opener.open_url(url) {
        format!("Opened {url}")
    } else {
        format!("{NO_OPENER_MESSAGE}: {url}")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingOpener {
        accepts: bool,
        opened: RefCell<Vec<String>>,
    }

    impl RecordingOpener {
        fn new(accepts: bool) -> Self {
            Self {
                accepts,
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl UrlOpener for RecordingOpener {
        fn open_url(&self, url: &str) -> bool {
            self.opened.borrow_mut().push(url.to_string());
            self.accepts
        }
    }

    #[test]
    fn opened_url_is_reported() {
        let opener = RecordingOpener::new(true);
        let message = open_or_print(&opener, "https://www.gamespot.com/articles/1/");

        assert_eq!(message, "Opened https://www.gamespot.com/articles/1/");
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn missing_handler_falls_back_to_printing() {
        let opener = RecordingOpener::new(false);
        let message = open_or_print(&opener, "https://thewitcher.com");

        assert_eq!(
            message,
            "No application can open this URL: https://thewitcher.com"
        );
    }
}
