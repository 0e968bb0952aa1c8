//! In-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id an in-page anchor scrolls to.
///
/// `None` for a bare `#`, and for hrefs that are not fragments at all.
pub fn scroll_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
