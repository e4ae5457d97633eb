//! Transaction form state driven by service metadata.

use crate::service::ServiceMetadata;

/// Whether the variable price section of the form is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// The changes a metadata record asks the form to make.
///
/// Bounds are only requested when pricing is variable; an absent bound
/// means "leave the input's current constraint alone", not "clear it".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormPatch {
    pub visibility: Visibility,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl From<ServiceMetadata> for FormPatch {
    fn from(metadata: ServiceMetadata) -> Self {
        if metadata.variable_pricing {
            Self {
                visibility: Visibility::Shown,
                min_price: metadata.min_price,
                max_price: metadata.max_price,
            }
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::default().is_shown());
    }

    #[test]
    fn should_show_section_and_carry_bounds_when_pricing_is_variable() {
        let patch = FormPatch::from(ServiceMetadata {
            variable_pricing: true,
            min_price: Some(5.0),
            max_price: None,
        });
        assert_eq!(patch.visibility, Visibility::Shown);
        assert_eq!(patch.min_price, Some(5.0));
        assert!(patch.max_price.is_none());
    }

    #[test]
    fn should_hide_section_and_drop_bounds_when_pricing_is_fixed() {
        let patch = FormPatch::from(ServiceMetadata {
            variable_pricing: false,
            min_price: Some(5.0),
            max_price: Some(10.0),
        });
        assert_eq!(patch, FormPatch::default());
    }

    #[test]
    fn should_keep_zero_as_a_real_bound() {
        let patch = FormPatch::from(ServiceMetadata {
            variable_pricing: true,
            min_price: Some(0.0),
            max_price: None,
        });
        assert_eq!(patch.min_price, Some(0.0));
    }
}
