use serde::de::{
    self,
    Deserialize,
    Error as _
};
use thiserror::Error;

use crate::math::scalar::Scalar;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("'{name}': {field} must be positive, got {value}")]
    InvalidParameter {
        name: String,
        field: &'static str,
        value: String
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn json_missing_field(field: &'static str) -> ManagerError {
        ManagerError::JsonParseError(serde_json::Error::missing_field(field))
    }

    pub fn json_invalid_type(unexp: de::Unexpected, exp: &dyn de::Expected) -> ManagerError {
        ManagerError::JsonParseError(serde_json::Error::invalid_type(unexp, exp))
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    /// Step sizes and tolerances must be strictly positive; NaN is rejected too.
    pub fn require_positive<T>(name: &str, field: &'static str, value: T) -> Result<T, ManagerError>
        where T: Scalar {
        if value > T::zero() {
            Ok(value)
        } else {
            Err(ManagerError::InvalidParameter {
                name: name.to_owned(),
                field,
                value: format!("{:?}", value)
            })
        }
    }
}
