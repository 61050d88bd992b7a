//! The storefront page: a responsive grid of product cards.

use super::card::Card;
use crate::catalog::Catalog;
use maud::{html, Markup, Render};

/// One column on narrow screens, two from `md`, three from `lg`.
pub const GRID_CLASS: &str = "grid gap-6 md:grid-cols-2 lg:grid-cols-3";

/// Grid of cards, one per catalog item, in catalog order
pub struct ProductGrid<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProductGrid<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Cards in render order
    pub fn cards(&self) -> impl Iterator<Item = Card<'a>> + 'a {
        self.catalog.iter().map(Card::new)
    }
}

impl Render for ProductGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class=(GRID_CLASS) {
                @for card in self.cards() {
                    (card)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_renders_empty_grid() {
        let out = ProductGrid::new(&Catalog::empty()).render().into_string();
        assert_eq!(out, format!(r#"<div class="{}"></div>"#, GRID_CLASS));
    }

    #[test]
    fn one_card_per_item() {
        let mut catalog = Catalog::builtin();
        catalog.items.push(catalog.items[0].clone());
        let grid = ProductGrid::new(&catalog);
        assert_eq!(grid.cards().count(), 2);
        let out = grid.render().into_string();
        assert_eq!(out.matches(r#"data-slot="card""#).count(), 2);
    }
}
