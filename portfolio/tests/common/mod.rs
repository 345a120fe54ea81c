//! In-memory host fakes.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use portfolio::host::{DocumentHost, Notifier};
use portfolio::navigation::{Section, SectionExtent};
use portfolio::{PortfolioError, Result};

/// A document with sections laid out at fixed extents.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub extents: HashMap<Section, SectionExtent>,
    pub scroll_y: Cell<f64>,
    pub scrolled_to: RefCell<Vec<Section>>,
    pub broken: bool,
}

impl FakeDocument {
    /// Every section stacked top to bottom, `height` px each.
    pub fn stacked(height: f64) -> Self {
        let extents = Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, section)| (section, SectionExtent::new(i as f64 * height, height)))
            .collect();
        Self {
            extents,
            ..Self::default()
        }
    }

    pub fn without(mut self, section: Section) -> Self {
        self.extents.remove(&section);
        self
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
    }
}

impl DocumentHost for FakeDocument {
    fn section_extent(&self, section: Section) -> Option<SectionExtent> {
        self.extents.get(&section).copied()
    }

    fn scroll_offset(&self) -> Result<f64> {
        if self.broken {
            return Err(PortfolioError::NoWindow);
        }
        Ok(self.scroll_y.get())
    }

    fn scroll_into_view(&self, section: Section) -> Result<bool> {
        if self.broken {
            return Err(PortfolioError::NoDocument);
        }
        if !self.extents.contains_key(&section) {
            return Ok(false);
        }
        self.scrolled_to.borrow_mut().push(section);
        Ok(true)
    }
}

/// Records every acknowledgement instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<String>>,
    pub broken: bool,
}

impl Notifier for RecordingNotifier {
    fn acknowledge(&self, message: &str) -> Result<()> {
        self.shown.borrow_mut().push(message.to_owned());
        if self.broken {
            return Err(PortfolioError::Js("alert blocked".to_owned()));
        }
        Ok(())
    }
}
