//! Access to the browser environment behind a trait, so calculators and
//! navigation can run against a headless stand-in when there is no `window`.

use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::animation::progress::page_progress;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EnvError {
    fn from(value: JsValue) -> Self {
        EnvError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// One reading of the page scroll state. All zero until the first read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
}

impl ScrollSample {
    /// Page progress in percent, see [`page_progress`].
    pub fn progress(&self) -> f64 {
        page_progress(self.scroll_y, self.document_height, self.viewport_height)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    fn scroll_sample(&self) -> ScrollSample;
    fn scroll_into_view(&self, id: &str) -> Result<(), EnvError>;
}

/// Reads straight from `web_sys::window()`, falling back to neutral values.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

/// Used when rendering outside a browser: nothing is scrolled, nothing exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessViewport;

pub fn window() -> Result<Window, EnvError> {
    web_sys::window().ok_or(EnvError::NoWindow)
}

pub fn document() -> Result<Document, EnvError> {
    window()?.document().ok_or(EnvError::NoDocument)
}

fn read_scroll(window: &Window) -> Result<ScrollSample, EnvError> {
    let scroll_y = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let viewport_width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    Ok(ScrollSample { scroll_y, document_height, viewport_height, viewport_width })
}

impl Viewport for BrowserViewport {
    fn scroll_sample(&self) -> ScrollSample {
        match window().and_then(|w| read_scroll(&w)) {
            Ok(sample) => sample,
            Err(err) => {
                debug!("scroll read degraded to neutral: {}", err);
                ScrollSample::default()
            }
        }
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), EnvError> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| EnvError::MissingElement(id.to_string()))?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

impl Viewport for HeadlessViewport {
    fn scroll_sample(&self) -> ScrollSample {
        ScrollSample::default()
    }

    fn scroll_into_view(&self, _id: &str) -> Result<(), EnvError> {
        Err(EnvError::NoWindow)
    }
}

/// Smooth-scroll to the section with the given id.
///
/// Returns `false` and does nothing when the target (or the whole DOM) is missing.
pub fn scroll_to_section(viewport: &dyn Viewport, id: &str) -> bool {
    match viewport.scroll_into_view(id) {
        Ok(()) => true,
        Err(err) => {
            debug!("not scrolling to #{}: {}", id, err);
            false
        }
    }
}

/// [`scroll_to_section`] against the live browser.
pub fn scroll_to(id: &str) -> bool {
    scroll_to_section(&BrowserViewport, id)
}

/// `href="#contact"` -> `Some("contact")`.
pub fn section_anchor(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Toggle a class on `<body>`; silently skipped without a document.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = document().ok().and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        debug!("body class `{}` not updated: {}", class, EnvError::from(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn missing_section_is_a_quiet_no_op() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_scroll_into_view()
            .with(eq("nowhere"))
            .times(1)
            .returning(|id| Err(EnvError::MissingElement(id.to_string())));
        assert!(!scroll_to_section(&viewport, "nowhere"));
    }

    #[test]
    fn existing_section_scrolls_once() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_scroll_into_view()
            .with(eq("contact"))
            .times(1)
            .returning(|_| Ok(()));
        assert!(scroll_to_section(&viewport, "contact"));
    }

    #[test]
    fn headless_viewport_is_neutral() {
        let viewport = HeadlessViewport;
        let sample = viewport.scroll_sample();
        assert_eq!(sample, ScrollSample::default());
        assert_eq!(sample.progress(), 0.0);
        assert!(!scroll_to_section(&viewport, "home"));
    }

    #[test]
    fn sample_progress_uses_scrollable_height() {
        let sample = ScrollSample { scroll_y: 1200.0, document_height: 2000.0, viewport_height: 800.0, viewport_width: 1280.0 };
        assert_eq!(sample.progress(), 100.0);
    }

    #[test]
    fn anchors() {
        assert_eq!(section_anchor("#contact"), Some("contact"));
        assert_eq!(section_anchor("#"), None);
        assert_eq!(section_anchor("https://example.com"), None);
    }
}
