//! Page shell: navigation anchors, mobile menu and header scroll state.

use serde::Serialize;

/// Vertical scroll offset (px) past which the header turns opaque
pub const SCROLL_THRESHOLD: u32 = 50;

/// One navigation entry, targeting an in-page anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Element id the anchor scrolls to
    pub fn target_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Navigation entries in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Experience",
        href: "#experience",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Skills",
        href: "#skills",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

/// Header view state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    menu_open: bool,
    scrolled: bool,
}

impl HeaderState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Track the page scroll offset
    pub fn on_scroll(&mut self, offset: u32) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// CSS class of the header bar
    pub fn css_class(&self) -> &'static str {
        if self.scrolled {
            "header header-scrolled"
        } else {
            "header"
        }
    }

    /// CSS class of the mobile menu list
    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

/// Outbound URI builders
pub mod links {
    /// `mailto:` URI for an address
    pub fn mailto(email: &str) -> String {
        format!("mailto:{}", email)
    }

    /// `tel:` URI for a phone number, visual separators kept as written
    pub fn tel(phone: &str) -> String {
        format!("tel:{}", phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut header = HeaderState::default();
        header.on_scroll(SCROLL_THRESHOLD);
        assert!(!header.scrolled());

        header.on_scroll(SCROLL_THRESHOLD + 1);
        assert!(header.scrolled());
        assert_eq!(header.css_class(), "header header-scrolled");

        header.on_scroll(0);
        assert!(!header.scrolled());
    }

    #[test]
    fn test_toggle_menu() {
        let mut header = HeaderState::default();
        assert_eq!(header.menu_class(), "mobile-menu");

        header.toggle_menu();
        assert!(header.menu_open());
        assert_eq!(header.menu_class(), "mobile-menu open");

        header.toggle_menu();
        assert!(!header.menu_open());
    }

    #[test]
    fn test_nav_targets() {
        let targets: Vec<&str> = NAV_ITEMS.iter().map(NavItem::target_id).collect();
        assert_eq!(
            targets,
            vec!["about", "experience", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(links::mailto("a@b.c"), "mailto:a@b.c");
        assert_eq!(links::tel("(+91)7674042832"), "tel:(+91)7674042832");
    }
}
