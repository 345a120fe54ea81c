//! The DOM seam.
//!
//! Page logic talks to the browser only through [`DocumentHost`] and
//! [`Notifier`], so it runs (and is tested) natively against fakes.
//! [`BrowserHost`] is the `web-sys` implementation used by the mounted app.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::{PortfolioError, Result};
use crate::navigation::{Section, SectionExtent};

pub trait DocumentHost {
    /// Extent of the section's element, `None` when the document lacks it.
    fn section_extent(&self, section: Section) -> Option<SectionExtent>;

    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> Result<f64>;

    /// Smooth-scrolls the section's element into view.
    /// `Ok(false)` when there is no such element.
    fn scroll_into_view(&self, section: Section) -> Result<bool>;
}

/// Shows a blocking acknowledgement to the visitor.
pub trait Notifier {
    fn acknowledge(&self, message: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
        let document = window.document().ok_or(PortfolioError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn section_element(&self, section: Section) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(section.id())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl DocumentHost for BrowserHost {
    fn section_extent(&self, section: Section) -> Option<SectionExtent> {
        let el = self.section_element(section)?;
        Some(SectionExtent::new(
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn scroll_offset(&self) -> Result<f64> {
        Ok(self.window.scroll_y()?)
    }

    fn scroll_into_view(&self, section: Section) -> Result<bool> {
        let Some(el) = self.section_element(section) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}

impl Notifier for BrowserHost {
    fn acknowledge(&self, message: &str) -> Result<()> {
        Ok(self.window.alert_with_message(message)?)
    }
}
