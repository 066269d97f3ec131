use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::Home, Self::About, Self::Portfolio, Self::Contact];

    /// The `id` attribute of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "Sobre",
            Self::Portfolio => "Portfólio",
            Self::Contact => "Contato",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// The parts of a rendered document navigation needs.
pub trait AnchorDocument {
    type Anchor;

    fn find_anchor(&self, id: &str) -> Option<Self::Anchor>;
    fn scroll_into_view(&self, anchor: &Self::Anchor);
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct SectionNavigator<D> {
    document: D,
}

impl<D: AnchorDocument> SectionNavigator<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// Smooth-scrolls to the element with id `anchor`. Returns whether one was found.
    pub fn go_to(&self, anchor: &str) -> bool {
        match self.document.find_anchor(anchor) {
            Some(el) => {
                self.document.scroll_into_view(&el);
                true
            }
            None => {
                log::debug!("navigation: no anchor #{anchor}");
                false
            }
        }
    }

    pub fn go_to_section(&self, section: SectionId) -> bool {
        self.go_to(section.anchor())
    }

    /// Navigates and closes the menu, whether or not the anchor exists.
    pub fn go_to_from_menu(&self, section: SectionId, menu: &mut MobileMenu) -> bool {
        let found = self.go_to_section(section);
        menu.close();
        found
    }

    pub fn back_to_top(&self) {
        self.document.scroll_to_top();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingDocument {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
        top: RefCell<usize>,
    }

    impl RecordingDocument {
        fn with_sections() -> Self {
            Self {
                anchors: SectionId::ALL.iter().map(|s| s.anchor()).collect(),
                ..Default::default()
            }
        }
    }

    impl AnchorDocument for &RecordingDocument {
        type Anchor = String;

        fn find_anchor(&self, id: &str) -> Option<String> {
            self.anchors
                .iter()
                .find(|a| **a == id)
                .map(|a| a.to_string())
        }

        fn scroll_into_view(&self, anchor: &String) {
            self.scrolled.borrow_mut().push(anchor.clone());
        }

        fn scroll_to_top(&self) {
            *self.top.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_known_sections_scroll_once_per_call() {
        let doc = RecordingDocument::with_sections();
        let nav = SectionNavigator::new(&doc);
        for section in SectionId::ALL {
            assert!(nav.go_to_section(section));
        }
        assert!(nav.go_to("about"));
        assert_eq!(
            *doc.scrolled.borrow(),
            vec!["home", "about", "portfolio", "contact", "about"]
        );
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let doc = RecordingDocument::with_sections();
        let nav = SectionNavigator::new(&doc);
        assert!(!nav.go_to("nonexistent"));

        let empty = RecordingDocument::default();
        let nav = SectionNavigator::new(&empty);
        assert!(!nav.go_to_section(SectionId::Home));
        assert!(doc.scrolled.borrow().is_empty());
        assert!(empty.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let doc = RecordingDocument::default();
        let nav = SectionNavigator::new(&doc);
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        // closes even though the anchor is missing
        assert!(!nav.go_to_from_menu(SectionId::Contact, &mut menu));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_back_to_top() {
        let doc = RecordingDocument::default();
        SectionNavigator::new(&doc).back_to_top();
        assert_eq!(*doc.top.borrow(), 1);
    }

    #[test]
    fn test_section_id_parsing() {
        for section in SectionId::ALL {
            assert_eq!(section.anchor().parse::<SectionId>(), Ok(section));
            assert_eq!(section.to_string(), section.anchor());
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(ParseSectionError("blog".to_string()))
        );
    }
}
