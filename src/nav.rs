use crate::error::SiteError;

pub const TOP: &str = "top";
pub const ABOUT: &str = "about";
pub const BUILD: &str = "build";
pub const PROJECTS: &str = "projects";
pub const EXPERIENCE: &str = "experience";
pub const WRITING: &str = "writing";
pub const CONTACT: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub section: &'static str,
    pub highlight: bool,
}

impl MenuItem {
    const fn new(label: &'static str, section: &'static str) -> Self {
        Self {
            label,
            section,
            highlight: false,
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        highlight: true,
        ..MenuItem::new("HOME", TOP)
    },
    MenuItem::new("ABOUT", ABOUT),
    MenuItem::new("WHAT I BUILD", BUILD),
    MenuItem::new("PROJECTS", PROJECTS),
    MenuItem::new("EXPERIENCE", EXPERIENCE),
    MenuItem::new("WRITING", WRITING),
    MenuItem::new("CONTACT", CONTACT),
];

/// Resolve a section by id through `lookup`.
///
/// A missing section is reported as an error for the caller to log, never a
/// panic.
pub fn find_section<T>(id: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Result<T, SiteError> {
    lookup(id).ok_or_else(|| SiteError::MissingSection(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items() {
        assert_eq!(MENU_ITEMS.len(), 7);
        assert_eq!(MENU_ITEMS.iter().filter(|m| m.highlight).count(), 1);
        assert_eq!(MENU_ITEMS[0].href(), "#top");
        assert_eq!(MENU_ITEMS[3].href(), "#projects");
    }

    #[test]
    fn test_find_section_present() {
        let page = [ABOUT, PROJECTS, CONTACT];
        let found = find_section(PROJECTS, |id| page.iter().position(|s| *s == id));
        assert_eq!(found.ok(), Some(1));
    }

    #[test]
    fn test_find_section_missing() {
        let found = find_section(PROJECTS, |_| None::<()>);
        assert!(matches!(found, Err(SiteError::MissingSection(ref id)) if id == "projects"));
    }
}
