//! Navigation: mobile menu and in-page anchors

/// Class toggled on the menu panel and its overlay while open
pub const MENU_OPEN_CLASS: &str = "active";

/// Class toggled on the body to stop background scrolling while open
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Mobile menu open/closed state
///
/// The toggle button, close button and overlay all flip the same state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Without a toggle button the page has no mobile menu at all
    pub fn attach(has_toggle_button: bool) -> Option<Self> {
        has_toggle_button.then(Self::default)
    }

    /// Flip the menu; returns whether it is now open
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::trace!(open = self.open, "mobile menu toggled");
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }
}

/// Fragment id an in-page link should smooth-scroll to
///
/// A bare `#` is left to the browser. Links that are not fragments are not
/// handled here.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_needs_toggle_button() {
        assert!(MobileMenu::attach(false).is_none());
        assert!(!MobileMenu::attach(true).unwrap().is_open());
    }

    #[test]
    fn toggle_locks_scroll_while_open() {
        let mut menu = MobileMenu::attach(true).unwrap();
        assert!(menu.toggle());
        assert!(menu.body_scroll_locked());
        assert!(!menu.toggle());
        assert!(!menu.body_scroll_locked());
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#dan-toc"), Some("dan-toc"));
        assert_eq!(anchor_target("/about"), None);
    }
}
