//! The allowed-property table.
//!
//! Declarations may only use properties listed here, and the value must have
//! one of the types listed for that property.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::values::ValueType, errors::errors::ErrorImpl};

lazy_static! {
    static ref DEFAULT_PROPERTIES: PropertyTable = PropertyTable::new([
        ("color", vec![ValueType::Color]),
        ("background-color", vec![ValueType::Color]),
        ("width", vec![ValueType::Pixel, ValueType::Percentage]),
        ("height", vec![ValueType::Pixel, ValueType::Percentage]),
    ]);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    allowed: HashMap<String, Vec<ValueType>>,
}

impl PropertyTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<ValueType>)>,
        S: Into<String>,
    {
        PropertyTable {
            allowed: entries
                .into_iter()
                .map(|(property, types)| (property.into().to_ascii_lowercase(), types))
                .collect(),
        }
    }

    /// The narrower table that only knows `color`.
    pub fn color_only() -> Self {
        PropertyTable::new([("color", vec![ValueType::Color])])
    }

    pub fn accepted_types(&self, property: &str) -> Option<&[ValueType]> {
        self.allowed
            .get(&property.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.accepted_types(property).is_some()
    }

    /// Checks one declaration's property name and value type.
    pub fn check(&self, property: &str, received: ValueType) -> Result<(), ErrorImpl> {
        let Some(accepted) = self.accepted_types(property) else {
            return Err(ErrorImpl::UnknownProperty {
                property: property.to_string(),
            });
        };

        if accepted.contains(&received) {
            Ok(())
        } else {
            Err(ErrorImpl::PropertyTypeMismatch {
                property: property.to_string(),
                expected: describe_types(accepted),
                received,
            })
        }
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        DEFAULT_PROPERTIES.clone()
    }
}

/// `pixel or percentage`
fn describe_types(types: &[ValueType]) -> String {
    types
        .iter()
        .map(ValueType::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}
