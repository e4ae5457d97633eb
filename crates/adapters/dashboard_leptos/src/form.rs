//! Signal-backed implementations of the form ports.
//!
//! The resolver writes into reactive signals; the view reads them to set
//! the section's `display` style and the price input's `min`/`max`.

use leptos::prelude::*;
use printbill_app::ports::{PriceInputConstraints, SectionVisibility};
use printbill_domain::form::Visibility;

/// Visibility of the variable price section.
#[derive(Debug, Clone, Copy)]
pub struct SignalSection(pub RwSignal<Visibility>);

impl SignalSection {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(Visibility::Hidden))
    }

    /// CSS `display` value for the section.
    pub fn display(self) -> &'static str {
        if self.0.get().is_shown() {
            "block"
        } else {
            "none"
        }
    }
}

impl Default for SignalSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionVisibility for SignalSection {
    fn show(&self) {
        self.0.set(Visibility::Shown);
    }

    fn hide(&self) {
        self.0.set(Visibility::Hidden);
    }
}

/// `min`/`max` attributes of the price input. `None` leaves the attribute off.
#[derive(Debug, Clone, Copy)]
pub struct SignalPriceInput {
    pub min: RwSignal<Option<f64>>,
    pub max: RwSignal<Option<f64>>,
}

impl SignalPriceInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: RwSignal::new(None),
            max: RwSignal::new(None),
        }
    }
}

impl Default for SignalPriceInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceInputConstraints for SignalPriceInput {
    fn set_min(&self, min: f64) {
        self.min.set(Some(min));
    }

    fn set_max(&self, max: f64) {
        self.max.set(Some(max));
    }
}
