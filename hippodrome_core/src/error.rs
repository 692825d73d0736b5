//! Error types for race construction.

use thiserror::Error;

/// Reasons a horse or a hippodrome refuses to be built.
///
/// The `Display` text of each variant is user-facing and is surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    /// Horse name was absent
    #[error("Name cannot be null.")]
    NullName,

    /// Horse name was empty or whitespace only
    #[error("Name cannot be blank.")]
    BlankName,

    #[error("Speed cannot be negative.")]
    NegativeSpeed,

    #[error("Distance cannot be negative.")]
    NegativeDistance,

    /// Speed was NaN or infinite
    #[error("Speed must be a finite number.")]
    NonFiniteSpeed,

    /// Distance was NaN or infinite
    #[error("Distance must be a finite number.")]
    NonFiniteDistance,

    /// Field of horses was absent
    #[error("Horses cannot be null.")]
    NullHorses,

    #[error("Horses cannot be empty.")]
    EmptyHorses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(RaceError::NullName.to_string(), "Name cannot be null.");
        assert_eq!(RaceError::BlankName.to_string(), "Name cannot be blank.");
        assert_eq!(RaceError::NegativeSpeed.to_string(), "Speed cannot be negative.");
        assert_eq!(RaceError::NegativeDistance.to_string(), "Distance cannot be negative.");
        assert_eq!(RaceError::NullHorses.to_string(), "Horses cannot be null.");
        assert_eq!(RaceError::EmptyHorses.to_string(), "Horses cannot be empty.");
    }
}
