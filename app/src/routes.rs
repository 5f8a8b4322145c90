//! The fixed table of top-level pages and their paths.
//!
//! The router in `lib.rs`, the navigation bar and the document titles all
//! read from [`Page`] so the three never disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Events,
    Gallery,
    Membership,
    Contact,
}

pub const SITE_NAME: &str = "Creators Guild";

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Events,
        Self::Gallery,
        Self::Membership,
        Self::Contact,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Events => "/events",
            Self::Gallery => "/gallery",
            Self::Membership => "/membership",
            Self::Contact => "/contact",
        }
    }

    /// Path segment used by the router; empty for the home page.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "about",
            Self::Services => "services",
            Self::Events => "events",
            Self::Gallery => "gallery",
            Self::Membership => "membership",
            Self::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Events => "Events",
            Self::Gallery => "Gallery",
            Self::Membership => "Membership",
            Self::Contact => "Contact",
        }
    }

    /// Document title shown in the browser tab.
    pub fn title(self) -> String {
        match self {
            Self::Home => format!("{SITE_NAME} \u{2013} Community for Content Creators"),
            page => format!("{} \u{2013} {SITE_NAME}", page.label()),
        }
    }

    /// Looks up the page a browser path points at.
    ///
    /// Query strings, fragments and a trailing slash are ignored. Nested
    /// paths (like an event detail page) resolve to nothing here.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }

    /// Whether `path` is this page or nested below it.
    pub fn is_active(self, path: &str) -> bool {
        match self {
            Self::Home => Self::from_path(path) == Some(Self::Home),
            page => {
                let base = page.path();
                path == base
                    || path
                        .strip_prefix(base)
                        .is_some_and(|rest| rest.starts_with(['/', '?', '#']))
            }
        }
    }
}

/// Path of the detail page for the event with `slug`.
pub fn event_path(slug: &str) -> String {
    format!("{}/{slug}", Page::Events.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn test_segment_matches_path() {
        for page in Page::ALL {
            assert_eq!(format!("/{}", page.segment()), page.path());
        }
    }

    #[test]
    fn test_from_path_round_trips_every_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path("/contact?ref=nav"), Some(Page::Contact));
        assert_eq!(Page::from_path("/gallery#top"), Some(Page::Gallery));
        assert_eq!(Page::from_path("/?utm=x"), Some(Page::Home));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(Page::from_path("/blog"), None);
        assert_eq!(Page::from_path("/events/creator-summit"), None);
        assert_eq!(Page::from_path("/About"), None);
    }

    #[test]
    fn test_is_active() {
        assert!(Page::Events.is_active("/events"));
        assert!(Page::Events.is_active("/events/creator-summit"));
        assert!(!Page::Events.is_active("/eventsx"));
        assert!(Page::Home.is_active("/"));
        assert!(!Page::Home.is_active("/about"));
    }

    #[test]
    fn test_titles() {
        assert!(Page::Home.title().starts_with(SITE_NAME));
        assert_eq!(Page::Gallery.title(), "Gallery \u{2013} Creators Guild");
    }

    #[test]
    fn test_event_path() {
        assert_eq!(event_path("summit"), "/events/summit");
    }
}
