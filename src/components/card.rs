//! Product card and its purchase control

use crate::catalog::DisplayItem;
use crate::Result;
use log::debug;
use maud::{html, Markup, Render};

const BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md text-sm \
    font-medium h-10 px-4 py-2 bg-primary text-primary-foreground w-full";

/// Behaviour attached to a card's purchase button.
///
/// Only `Unwired` exists today: the button renders without any handler and
/// invoking it does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PurchaseAction {
    #[default]
    Unwired,
}

impl PurchaseAction {
    /// Whether activating the control does anything
    pub fn is_wired(&self) -> bool {
        match self {
            PurchaseAction::Unwired => false,
        }
    }

    /// Activate the control. No-op for `Unwired`.
    pub fn invoke(&self, item: &DisplayItem) -> Result<()> {
        match self {
            PurchaseAction::Unwired => {
                debug!("purchase of {:?} requested; no handler attached", item.title);
                Ok(())
            }
        }
    }
}

/// A single product card with its purchase control
pub struct Card<'a> {
    item: &'a DisplayItem,
    action: PurchaseAction,
}

impl<'a> Card<'a> {
    pub fn new(item: &'a DisplayItem) -> Self {
        Self {
            item,
            action: PurchaseAction::default(),
        }
    }

    pub fn item(&self) -> &DisplayItem {
        self.item
    }

    pub fn action(&self) -> PurchaseAction {
        self.action
    }
}

impl Render for Card<'_> {
    fn render(&self) -> Markup {
        let item = self.item;
        html! {
            div class="rounded-lg border bg-card text-card-foreground shadow-sm" data-slot="card" {
                div class="flex flex-col space-y-1.5 p-6" data-slot="card-header" {
                    h3 class="text-2xl font-semibold leading-none tracking-tight"
                        data-slot="card-title" {
                        (item.title)
                    }
                    p class="text-sm text-muted-foreground" data-slot="card-description" {
                        (item.description)
                    }
                }
                div class="p-6 pt-0" data-slot="card-content" {
                    p class="text-2xl font-bold" data-slot="card-price" { (item.price) }
                    p class="text-sm text-muted-foreground" data-slot="card-body" { (item.body) }
                }
                div class="flex items-center p-6 pt-0" data-slot="card-footer" {
                    button type="button" class=(BUTTON_CLASS) data-action="purchase" {
                        (item.purchase_label)
                    }
                }
            }
        }
    }
}
