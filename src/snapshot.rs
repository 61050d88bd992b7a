//! Plain-text view of a rendered page.
//!
//! Parses the HTML produced by the renderer and pulls out the header title,
//! each card's text and the footer line, with runs of whitespace collapsed.
//! Handy for quick inspection from the CLI and for assertions in tests.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Text extracted from one product card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardSnapshot {
    pub title: String,
    pub description: String,
    pub price: String,
    pub body: String,
    /// Label of the purchase button
    pub action: String,
}

/// Text extracted from a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSnapshot {
    /// Document `<title>`, empty for fragments
    pub title: String,
    /// Application name shown in the header
    pub header: String,
    pub cards: Vec<CardSnapshot>,
    pub footer: String,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| Error::SnapshotError(format!("bad selector {:?}: {:?}", css, e)))
}

fn collapse(text: String) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .next()
        .map(|n| collapse(n.text().collect::<String>()))
        .unwrap_or_default()
}

impl TextSnapshot {
    /// Build a snapshot from a full document or a bare shell fragment.
    pub fn from_html(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let title_sel = selector("head > title")?;
        let header_sel = selector("header h1")?;
        let footer_sel = selector("footer")?;
        let card_sel = selector(r#"main [data-slot="card"]"#)?;
        let card_title = selector(r#"[data-slot="card-title"]"#)?;
        let card_desc = selector(r#"[data-slot="card-description"]"#)?;
        let card_price = selector(r#"[data-slot="card-price"]"#)?;
        let card_body = selector(r#"[data-slot="card-body"]"#)?;
        let card_action = selector(r#"button[data-action="purchase"]"#)?;

        let cards = root
            .select(&card_sel)
            .map(|card| CardSnapshot {
                title: first_text(card, &card_title),
                description: first_text(card, &card_desc),
                price: first_text(card, &card_price),
                body: first_text(card, &card_body),
                action: first_text(card, &card_action),
            })
            .collect();

        Ok(TextSnapshot {
            title: first_text(root, &title_sel),
            header: first_text(root, &header_sel),
            cards,
            footer: first_text(root, &footer_sel),
        })
    }
}

impl fmt::Display for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.title.is_empty() {
            writeln!(f, "Title: {}", self.title)?;
        }
        writeln!(f, "# {}", self.header)?;
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "## {}", card.title)?;
            writeln!(f, "{}", card.description)?;
            writeln!(f, "{}", card.price)?;
            writeln!(f, "{}", card.body)?;
            writeln!(f, "[{}]", card.action)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}
