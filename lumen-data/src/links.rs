//! Bridge for opening license links outside the app window.

use anyhow::Context;

use crate::catalog::License;

/// Opens a URL in a separate window or browser.
pub trait LinkOpener {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Opens links with the OS default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        open::that(url).with_context(|| format!("opening {}", url))
    }
}

/// Opens every license link. A failing link is logged and skipped.
///
/// Returns how many links were opened.
pub fn open_licenses(opener: &dyn LinkOpener, licenses: &[License]) -> usize {
    let mut opened = 0;
    for license in licenses {
        match opener.open(&license.link) {
            Ok(()) => opened += 1,
            Err(e) => log::warn!("Failed to open license link: {:#}", e),
        }
    }
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> anyhow::Result<()> {
            if self.fail_on == Some(url) {
                anyhow::bail!("no handler for {}", url);
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn licenses(links: &[&str]) -> Vec<License> {
        links.iter().map(|l| License { link: l.to_string() }).collect()
    }

    #[test]
    fn test_opens_every_link_in_order() {
        let opener = RecordingOpener::default();
        let count = open_licenses(&opener, &licenses(&["https://a", "https://b"]));
        assert_eq!(count, 2);
        assert_eq!(*opener.opened.borrow(), ["https://a", "https://b"]);
    }

    #[test]
    fn test_failure_does_not_stop_remaining_links() {
        let opener = RecordingOpener {
            fail_on: Some("https://a"),
            ..Default::default()
        };
        let count = open_licenses(&opener, &licenses(&["https://a", "https://b"]));
        assert_eq!(count, 1);
        assert_eq!(*opener.opened.borrow(), ["https://b"]);
    }

    #[test]
    fn test_no_licenses_is_noop() {
        let opener = RecordingOpener::default();
        assert_eq!(open_licenses(&opener, &[]), 0);
    }
}
