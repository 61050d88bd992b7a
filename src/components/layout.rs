//! Page chrome shared by every page: header, content slot and footer.

use crate::clock::Clock;
use crate::RenderConfig;
use log::debug;
use maud::{html, Markup, Render, DOCTYPE};

const FOOTER_CLASS: &str = "container mx-auto px-4 py-4 text-center text-sm text-muted-foreground";

/// Footer line for a given year, e.g. `© 2024 Transaction App. All rights reserved.`
pub fn footer_text(year: i32, app_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, app_name)
}

/// The layout shell. Holds no state of its own; the year is read from the
/// clock every time `wrap` runs.
pub struct MainLayout<'a> {
    config: &'a RenderConfig,
    clock: &'a dyn Clock,
}

impl<'a> MainLayout<'a> {
    pub fn new(config: &'a RenderConfig, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    /// Place `content` verbatim inside `<main>`, between header and footer.
    /// An empty `Markup` yields an empty content region.
    pub fn wrap<R: Render + ?Sized>(&self, content: &R) -> Markup {
        let year = self.clock.current_year();
        debug!("rendering layout shell for {} ({})", self.config.app_name, year);

        html! {
            div class="min-h-screen bg-background" {
                header class="border-b" {
                    div class="container mx-auto px-4 py-4" {
                        h1 class="text-2xl font-bold" { (self.config.app_name) }
                    }
                }
                main class="container mx-auto px-4 py-8" {
                    (content)
                }
                footer class="border-t" {
                    div class=(FOOTER_CLASS) {
                        (footer_text(year, &self.config.app_name))
                    }
                }
            }
        }
    }
}

/// Wrap a rendered fragment into a standalone HTML5 document.
pub fn document<R: Render + ?Sized>(config: &RenderConfig, body: &R) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.page_title()) }
                @if let Some(href) = &config.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn footer_text_includes_year_and_name() {
        assert_eq!(
            footer_text(2031, "Shop"),
            "© 2031 Shop. All rights reserved."
        );
    }

    #[test]
    fn content_lands_between_header_and_footer() {
        let cfg = RenderConfig::default();
        let clock = FixedClock(2020);
        let out = MainLayout::new(&cfg, &clock)
            .wrap(&html! { p id="marker" { "slot" } })
            .into_string();

        let header = out.find("<header").unwrap();
        let main = out.find("<main").unwrap();
        let marker = out.find("id=\"marker\"").unwrap();
        let footer = out.find("<footer").unwrap();
        assert!(header < main && main < marker && marker < footer);
        assert!(out.contains("2020 Transaction App"));
    }

    #[test]
    fn empty_content_renders_empty_main() {
        let cfg = RenderConfig::default();
        let out = MainLayout::new(&cfg, &FixedClock(2020))
            .wrap(&html! {})
            .into_string();
        assert!(out.contains(r#"<main class="container mx-auto px-4 py-8"></main>"#));
    }

    #[test]
    fn document_links_stylesheet_when_configured() {
        let cfg = RenderConfig {
            stylesheet: Some("/app.css".to_string()),
            ..Default::default()
        };
        let out = document(&cfg, &html! { p { "x" } }).into_string();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains(r#"<link rel="stylesheet" href="/app.css">"#));
        assert!(out.contains("<title>Transaction App</title>"));

        let bare = document(&RenderConfig::default(), &html! {}).into_string();
        assert!(!bare.contains("<link"));
    }
}
