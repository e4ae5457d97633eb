//! Service identifier.
//!
//! Service ids are opaque to printbill: the catalog may key services by
//! SKU-like strings (`"poster-a2"`) or by plain numbers (`42`). Both forms
//! are accepted on the wire and stored as text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Identifier of a [`Service`](crate::service::Service). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Wrap a non-empty identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Interpret the raw value of a selection control.
    ///
    /// An absent or empty selection yields `None`, meaning "nothing selected".
    #[must_use]
    pub fn from_selection(selection: Option<&str>) -> Option<Self> {
        selection.and_then(|value| Self::new(value).ok())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        };
        Self::new(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_identifier() {
        assert_eq!(ServiceId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_treat_absent_and_empty_selection_as_nothing_selected() {
        assert!(ServiceId::from_selection(None).is_none());
        assert!(ServiceId::from_selection(Some("")).is_none());
    }

    #[test]
    fn should_keep_selection_text_verbatim() {
        let id = ServiceId::from_selection(Some("42")).unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_deserialize_from_string_or_number() {
        let from_text: ServiceId = serde_json::from_str("\"poster-a2\"").unwrap();
        let from_number: ServiceId = serde_json::from_str("42").unwrap();
        assert_eq!(from_text.as_str(), "poster-a2");
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn should_fail_to_deserialize_empty_string() {
        let result: Result<ServiceId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn should_convert_into_owned_text() {
        let id: ServiceId = serde_json::from_str("101").unwrap();
        assert_eq!(String::from(id), "101");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = ServiceId::new("7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }
}
