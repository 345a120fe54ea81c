//! Page sections and the ephemeral navigation state.
//!
//! [`NavigationState`] is the only mutable state the page keeps: which
//! section is highlighted and whether the small-screen menu is open. Both
//! reset on reload.

mod highlight;

pub use highlight::{SectionExtent, active_section_at};

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::PortfolioError;
use crate::host::DocumentHost;

/// A vertically stacked region of the page, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Page order. Highlighting walks this and the first hit wins.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Nav link text.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavigationState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Smooth-scrolls to `section` if the host has it, then closes the menu.
    ///
    /// The active section is left alone: the scroll events that follow
    /// update it through [`NavigationState::highlight`].
    /// Returns whether a scroll was started.
    pub fn navigate(&mut self, host: &impl DocumentHost, section: Section) -> bool {
        let scrolled = match host.scroll_into_view(section) {
            Ok(found) => found,
            Err(err) => {
                warn!(%section, "scroll into view failed: {err}");
                false
            }
        };
        if !scrolled {
            debug!(%section, "no element for section, navigation skipped");
        }
        self.menu_open = false;
        scrolled
    }

    /// Re-evaluates the active section for the host's current scroll offset.
    ///
    /// Leaves the state untouched when no section contains the probe point.
    /// Returns whether the active section changed.
    pub fn highlight(&mut self, host: &impl DocumentHost, lookahead: f64) -> bool {
        let offset = match host.scroll_offset() {
            Ok(offset) => offset,
            Err(err) => {
                warn!("reading scroll offset failed: {err}");
                return false;
            }
        };
        let Some(section) = active_section_at(offset + lookahead, |s| host.section_extent(s))
        else {
            return false;
        };
        if section == self.active {
            return false;
        }
        debug!(from = %self.active, to = %section, offset, "active section changed");
        self.active = section;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().ok(), Some(section));
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownSection(ref s) if s == "blog"));
    }

    #[test]
    fn default_state_is_home_with_menu_closed() {
        let state = NavigationState::default();
        assert_eq!(state.active, Section::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn toggle_flips_menu() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }
}
