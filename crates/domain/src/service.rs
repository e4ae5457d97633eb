//! Service: a billable print service offered by the shop.
//!
//! Some services have a fixed price; others use *variable pricing*, where
//! the operator types the price into the transaction form, optionally
//! within a `[min_price, max_price]` range.

use serde::{Deserialize, Serialize};

use crate::error::{PrintBillError, ValidationError};
use crate::id::ServiceId;

/// A service held in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub variable_pricing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::Validation`] when `name` is empty, when a
    /// bound is negative or not finite, or when `min_price > max_price`.
    pub fn validate(&self) -> Result<(), PrintBillError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        check_price("min_price", self.min_price)?;
        check_price("max_price", self.max_price)?;
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ValidationError::InvertedBounds { min, max }.into());
            }
        }
        Ok(())
    }

    /// Project the pricing hints a transaction form needs.
    #[must_use]
    pub fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            variable_pricing: self.variable_pricing,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

fn check_price(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(price) if !price.is_finite() || price < 0.0 => {
            Err(ValidationError::InvalidPrice { field })
        }
        _ => Ok(()),
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<String>,
    name: Option<String>,
    variable_pricing: bool,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn variable_pricing(mut self, variable_pricing: bool) -> Self {
        self.variable_pricing = variable_pricing;
        self
    }

    #[must_use]
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    #[must_use]
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::Validation`] if `id` or `name` is missing
    /// or empty, or if the price bounds are invalid.
    pub fn build(self) -> Result<Service, PrintBillError> {
        let service = Service {
            id: ServiceId::new(self.id.unwrap_or_default())?,
            name: self.name.unwrap_or_default(),
            variable_pricing: self.variable_pricing,
            min_price: self.min_price,
            max_price: self.max_price,
        };
        service.validate()?;
        Ok(service)
    }
}

/// Pricing hints served by `GET /api/service/{id}`.
///
/// Wire shape: `{ "variable_pricing": bool, "min_price"?: number, "max_price"?: number }`.
/// A `null` bound reads as absent, and a missing `variable_pricing` reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceMetadata {
    #[serde(default)]
    pub variable_pricing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}
