//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Unknown travel profile identifier
    #[error("Invalid travel profile: {0}")]
    InvalidTravelProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_message_is_forwarded() {
        let err = DomainError::from(InvalidCoordinates);
        assert!(err.to_string().starts_with("Invalid coordinates"));
    }

    #[test]
    fn invalid_travel_profile_message() {
        let err = DomainError::InvalidTravelProfile("boat".to_string());
        assert_eq!(err.to_string(), "Invalid travel profile: boat");
    }
}
