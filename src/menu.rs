//! Navigation menu builder.
//!
//! The sidebar menu is rebuilt from a static item list whenever the language
//! changes, with the entry matching the current location marked active.

use crate::i18n::Language;

/// Default landing page used when the path is empty.
pub const LANDING_PAGE: &str = "index.html";

/// A static menu item with parallel-language labels.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub en: &'static str,
    pub mr: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

impl MenuItem {
    /// Page-path portion of the target (fragment stripped).
    fn path(&self) -> &'static str {
        self.link.split('#').next().unwrap_or(self.link)
    }

    /// Fragment portion of the target, if it is a fragment-style link.
    fn fragment(&self) -> Option<&'static str> {
        let mut parts = self.link.splitn(2, '#');
        parts.next();
        parts.next()
    }

    fn label(&self, language: Language) -> &'static str {
        if language == Language::MARATHI {
            self.mr
        } else {
            self.en
        }
    }
}

/// The sidebar menu, in display order. Fixed and immutable at runtime.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        en: "Home",
        mr: "होम",
        icon: "fas fa-home",
        link: "index.html",
    },
    MenuItem {
        en: "Create Agreement",
        mr: "करार तयार करा",
        icon: "fas fa-file-contract",
        link: "booking.html",
    },
    MenuItem {
        en: "Calculate Charges",
        mr: "शुल्क मोजा",
        icon: "fas fa-calculator",
        link: "index.html#calculator",
    },
    MenuItem {
        en: "Track Status",
        mr: "स्थिती तपासा",
        icon: "fas fa-search",
        link: "track.html",
    },
    MenuItem {
        en: "FAQ",
        mr: "वारंवार विचारले प्रश्न",
        icon: "fas fa-question-circle",
        link: "index.html#faq",
    },
    MenuItem {
        en: "Contact",
        mr: "संपर्क",
        icon: "fas fa-phone",
        link: "tel:8830402939",
    },
];

/// A rendered menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    pub active: bool,
}

/// Build the rendered menu for the current language and location.
///
/// At most one entry is active. Selection order: an exact page-path match
/// wins; a fragment-style target matching the current URL fragment is
/// secondary; the home entry is the fallback on the landing page when
/// nothing else matched. Identical inputs always produce identical output,
/// so the menu can be rebuilt on every language change.
///
/// # Arguments
/// * `language` - Language to label entries in
/// * `current_path` - Current page path (empty means the landing page)
/// * `current_fragment` - Current URL fragment, with or without a leading `#`
pub fn build_menu(
    language: Language,
    current_path: &str,
    current_fragment: &str,
) -> Vec<MenuEntry> {
    let path = if current_path.is_empty() {
        LANDING_PAGE
    } else {
        current_path
    };
    let fragment = current_fragment.strip_prefix('#').unwrap_or(current_fragment);

    let active_index = select_active(path, fragment);

    MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| MenuEntry {
            label: item.label(language),
            icon: item.icon,
            link: item.link,
            active: Some(i) == active_index,
        })
        .collect()
}

/// Pick the single active entry, if any.
fn select_active(path: &str, fragment: &str) -> Option<usize> {
    // Exact page match (fragment-style and tel: targets excluded, home is
    // handled as the landing-page fallback below)
    if let Some(i) = MENU_ITEMS.iter().position(|item| {
        item.fragment().is_none() && item.link != LANDING_PAGE && item.link == path
    }) {
        return Some(i);
    }

    // Fragment match
    if !fragment.is_empty() {
        if let Some(i) = MENU_ITEMS
            .iter()
            .position(|item| item.path() == path && item.fragment() == Some(fragment))
        {
            return Some(i);
        }
    }

    // Landing page defaults to the home entry
    if path == LANDING_PAGE {
        return MENU_ITEMS.iter().position(|item| item.link == LANDING_PAGE);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(entries: &[MenuEntry]) -> Vec<&'static str> {
        entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.label)
            .collect()
    }

    #[test]
    fn test_track_page_activates_only_track_status() {
        let entries = build_menu(Language::ENGLISH, "track.html", "");
        assert_eq!(active_labels(&entries), vec!["Track Status"]);
    }

    #[test]
    fn test_booking_page_activates_create_agreement() {
        let entries = build_menu(Language::ENGLISH, "booking.html", "");
        assert_eq!(active_labels(&entries), vec!["Create Agreement"]);
    }

    #[test]
    fn test_landing_page_defaults_to_home() {
        let entries = build_menu(Language::ENGLISH, "index.html", "");
        assert_eq!(active_labels(&entries), vec!["Home"]);
    }

    #[test]
    fn test_empty_path_means_landing_page() {
        let entries = build_menu(Language::ENGLISH, "", "");
        assert_eq!(active_labels(&entries), vec!["Home"]);
    }

    #[test]
    fn test_fragment_beats_home_fallback() {
        let entries = build_menu(Language::ENGLISH, "index.html", "#calculator");
        assert_eq!(active_labels(&entries), vec!["Calculate Charges"]);
    }

    #[test]
    fn test_fragment_accepted_without_hash_prefix() {
        let entries = build_menu(Language::ENGLISH, "index.html", "faq");
        assert_eq!(active_labels(&entries), vec!["FAQ"]);
    }

    #[test]
    fn test_exact_path_wins_over_fragment() {
        // A stale fragment must not steal the active state from a real page
        let entries = build_menu(Language::ENGLISH, "track.html", "#faq");
        assert_eq!(active_labels(&entries), vec!["Track Status"]);
    }

    #[test]
    fn test_unknown_page_has_no_active_entry() {
        let entries = build_menu(Language::ENGLISH, "about.html", "");
        assert!(active_labels(&entries).is_empty());
    }

    #[test]
    fn test_marathi_labels() {
        let entries = build_menu(Language::MARATHI, "track.html", "");
        assert_eq!(entries[0].label, "होम");
        assert_eq!(entries[3].label, "स्थिती तपासा");
        assert!(entries[3].active);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let first = build_menu(Language::MARATHI, "index.html", "#calculator");
        let second = build_menu(Language::MARATHI, "index.html", "#calculator");
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_and_links_are_stable() {
        let entries = build_menu(Language::ENGLISH, "", "");
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].link, "index.html");
        assert_eq!(entries[5].link, "tel:8830402939");
        assert_eq!(entries[2].icon, "fas fa-calculator");
    }
}
