//! Storefront renderer
//!
//! Server-side renderer for the Transaction App storefront: a layout shell
//! (header, content slot, footer) wrapping a responsive grid of product
//! cards. Output is plain HTML built with [maud](https://maud.lambda.xyz/).
//!
//! # Example
//!
//! ```
//! use storefront::{Catalog, FixedClock, RenderConfig};
//!
//! let html = storefront::render_document(
//!     &RenderConfig::default(),
//!     &Catalog::builtin(),
//!     &FixedClock(2024),
//! );
//! assert!(html.contains("Digital Product"));
//! assert!(html.contains("© 2024 Transaction App"));
//! ```

use log::debug;
use maud::{html, Markup};

pub mod error;
pub use error::{Error, Result};

pub mod catalog;
pub use catalog::{Catalog, DisplayItem};

pub mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

pub mod components;
pub use components::{Card, MainLayout, ProductGrid, PurchaseAction};

// Text extraction over rendered HTML (CLI `--text`, tests)
pub mod snapshot;
pub use snapshot::{CardSnapshot, TextSnapshot};

/// Configuration for rendering
///
/// Defaults reproduce the stock page:
/// - `app_name` is "Transaction App" and appears in header and footer
/// - `page_title` falls back to `app_name` when unset
/// - no stylesheet link is emitted
///
/// # Examples
///
/// ```
/// let cfg = storefront::RenderConfig::default();
/// assert_eq!(cfg.page_title(), "Transaction App");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Application name shown in the header and footer
    pub app_name: String,
    /// Value of the document's `lang` attribute
    pub lang: String,
    /// Document `<title>`; `None` uses `app_name`
    pub title: Option<String>,
    /// Optional stylesheet href linked from the document head
    pub stylesheet: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            app_name: "Transaction App".to_string(),
            lang: "en".to_string(),
            title: None,
            stylesheet: None,
        }
    }
}

impl RenderConfig {
    /// Document title: `title` when set, otherwise `app_name`
    pub fn page_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.app_name)
    }

    /// Reject a blank app name or language
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(Error::ConfigError("app name must not be empty".into()));
        }
        if self.lang.trim().is_empty() {
            return Err(Error::ConfigError("lang must not be empty".into()));
        }
        Ok(())
    }
}

/// Render the product grid inside the layout shell, without the surrounding
/// document.
pub fn render_page(config: &RenderConfig, catalog: &Catalog, clock: &dyn Clock) -> Markup {
    debug!("rendering page with {} card(s)", catalog.len());
    let grid = ProductGrid::new(catalog);
    MainLayout::new(config, clock).wrap(&grid)
}

/// Render the full HTML document for the storefront page.
pub fn render_document(config: &RenderConfig, catalog: &Catalog, clock: &dyn Clock) -> String {
    let page = render_page(config, catalog, clock);
    components::document(config, &page).into_string()
}

/// Render the layout shell around arbitrary content.
pub fn render_shell(config: &RenderConfig, clock: &dyn Clock, content: Option<Markup>) -> Markup {
    let content = content.unwrap_or_else(|| html! {});
    MainLayout::new(config, clock).wrap(&content)
}
