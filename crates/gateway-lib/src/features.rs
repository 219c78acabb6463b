//! Feature vector validation
//!
//! Incoming request bodies are validated before any network activity:
//! the `features` field must be a non-empty array of numbers. Anything
//! else is rejected without contacting the upstream service.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The field every validation rule applies to
pub const FEATURES_FIELD: &str = "features";

/// Validated, non-empty numeric feature vector
///
/// Serializes as `{"features":[...]}`, the exact payload forwarded to
/// the upstream service. Only constructible through [`validate`], so a
/// value of this type always upholds the non-empty invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    features: Vec<f64>,
}

impl FeatureVector {
    /// The feature values in request order
    pub fn values(&self) -> &[f64] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Why a request body failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the features field is required")]
    MissingField,

    #[error("features must be an array")]
    NotAnArray,

    #[error("features must contain at least one element")]
    EmptyArray,

    #[error("features[{index}] must be numeric")]
    NonNumericElement { index: usize },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        FEATURES_FIELD
    }
}

/// Validate a raw JSON request body into a [`FeatureVector`]
///
/// Pure function over the body; performs no I/O. Returns the first
/// violated rule: presence, array shape, non-emptiness, then
/// element-wise numeric type in order.
pub fn validate(body: &Value) -> Result<FeatureVector, ValidationError> {
    let raw = body
        .get(FEATURES_FIELD)
        .ok_or(ValidationError::MissingField)?;

    let elements = raw.as_array().ok_or(ValidationError::NotAnArray)?;

    if elements.is_empty() {
        return Err(ValidationError::EmptyArray);
    }

    let mut features = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let value = element
            .as_f64()
            .ok_or(ValidationError::NonNumericElement { index })?;
        features.push(value);
    }

    Ok(FeatureVector { features })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_body_produces_feature_vector() {
        let body = json!({"features": [1.0, 2.5, -3.0]});
        let vector = validate(&body).unwrap();

        assert_eq!(vector.values(), &[1.0, 2.5, -3.0]);
        assert_eq!(vector.len(), 3);
        assert!(!vector.is_empty());
    }

    #[test]
    fn test_integers_are_accepted_as_numeric() {
        let body = json!({"features": [1, 2, 3]});
        let vector = validate(&body).unwrap();

        assert_eq!(vector.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = json!({"inputs": [1.0]});

        assert_eq!(validate(&body), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_non_array_field_is_rejected() {
        let body = json!({"features": "1,2,3"});

        assert_eq!(validate(&body), Err(ValidationError::NotAnArray));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let body = json!({"features": []});

        assert_eq!(validate(&body), Err(ValidationError::EmptyArray));
    }

    #[test]
    fn test_non_numeric_element_is_rejected_with_index() {
        let body = json!({"features": [1.0, "two", 3.0]});

        assert_eq!(
            validate(&body),
            Err(ValidationError::NonNumericElement { index: 1 })
        );
    }

    #[test]
    fn test_null_element_is_rejected() {
        let body = json!({"features": [null]});

        assert_eq!(
            validate(&body),
            Err(ValidationError::NonNumericElement { index: 0 })
        );
    }

    #[test]
    fn test_error_names_the_features_field() {
        let err = validate(&json!({})).unwrap_err();

        assert_eq!(err.field(), "features");
    }

    #[test]
    fn test_feature_vector_serializes_as_forwarded_payload() {
        let vector = validate(&json!({"features": [1.0, 2.0]})).unwrap();
        let serialized = serde_json::to_value(&vector).unwrap();

        assert_eq!(serialized, json!({"features": [1.0, 2.0]}));
    }
}
