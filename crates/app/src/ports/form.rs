//! Form ports: the transaction form widgets driven by the resolver.
//!
//! Implementations wrap whatever the UI layer uses (reactive signals, DOM
//! elements, test doubles). Methods take `&self`: the widgets are shared
//! with the UI and mutated through interior mutability.

use std::sync::Arc;

/// The container holding the variable price input.
pub trait SectionVisibility {
    /// Display the section.
    fn show(&self);

    /// Hide the section.
    fn hide(&self);
}

/// The numeric price input whose accepted range follows the selected service.
pub trait PriceInputConstraints {
    /// Set the lowest accepted price.
    fn set_min(&self, min: f64);

    /// Set the highest accepted price.
    fn set_max(&self, max: f64);
}

impl<T: SectionVisibility + ?Sized> SectionVisibility for &T {
    fn show(&self) {
        (**self).show();
    }

    fn hide(&self) {
        (**self).hide();
    }
}

impl<T: SectionVisibility + ?Sized> SectionVisibility for Arc<T> {
    fn show(&self) {
        (**self).show();
    }

    fn hide(&self) {
        (**self).hide();
    }
}

impl<T: PriceInputConstraints + ?Sized> PriceInputConstraints for &T {
    fn set_min(&self, min: f64) {
        (**self).set_min(min);
    }

    fn set_max(&self, max: f64) {
        (**self).set_max(max);
    }
}

impl<T: PriceInputConstraints + ?Sized> PriceInputConstraints for Arc<T> {
    fn set_min(&self, min: f64) {
        (**self).set_min(min);
    }

    fn set_max(&self, max: f64) {
        (**self).set_max(max);
    }
}
