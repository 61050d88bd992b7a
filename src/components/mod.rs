//! Markup components

pub mod card;
pub mod layout;
pub mod page;

pub use card::{Card, PurchaseAction};
pub use layout::{document, footer_text, MainLayout};
pub use page::ProductGrid;
