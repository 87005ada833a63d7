//! Availability values and recorded entries.

use serde::{Deserialize, Serialize};

use crate::api::{CandidateId, UserId};

/// One user's attendance for one candidate slot.
///
/// Serialized as a bare integer (0 / 1 / 2), the format the frontend
/// sends and renders; any other integer fails deserialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Availability {
    Unavailable,
    Maybe,
    Available,
}

/// Error for integers outside the {0, 1, 2} enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("availability value out of range: {0} (expected 0, 1, or 2)")]
pub struct InvalidAvailability(pub u8);

impl Availability {
    pub fn as_u8(&self) -> u8 {
        match self {
            Availability::Unavailable => 0,
            Availability::Maybe => 1,
            Availability::Available => 2,
        }
    }
}

impl Default for Availability {
    /// Missing entries count as unavailable.
    fn default() -> Self {
        Availability::Unavailable
    }
}

impl TryFrom<u8> for Availability {
    type Error = InvalidAvailability;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Availability::Unavailable),
            1 => Ok(Availability::Maybe),
            2 => Ok(Availability::Available),
            other => Err(InvalidAvailability(other)),
        }
    }
}

impl Serialize for Availability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Availability::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A recorded availability entry, annotated with the owning user.
///
/// Stores return these with the user's current display name joined in, so
/// the matrix builder never has to look users up itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub user_id: UserId,
    pub username: String,
    pub candidate_id: CandidateId,
    pub availability: Availability,
}

impl AvailabilityEntry {
    pub fn new(
        user_id: UserId,
        username: impl Into<String>,
        candidate_id: CandidateId,
        availability: Availability,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            candidate_id,
            availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_valid_values() {
        assert_eq!(Availability::try_from(0), Ok(Availability::Unavailable));
        assert_eq!(Availability::try_from(1), Ok(Availability::Maybe));
        assert_eq!(Availability::try_from(2), Ok(Availability::Available));
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(Availability::try_from(3), Err(InvalidAvailability(3)));
        assert_eq!(Availability::try_from(255), Err(InvalidAvailability(255)));
    }

    #[test]
    fn test_default_is_unavailable() {
        assert_eq!(Availability::default(), Availability::Unavailable);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Availability::Available).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_deserializes_from_integer() {
        let value: Availability = serde_json::from_str("1").unwrap();
        assert_eq!(value, Availability::Maybe);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Availability>("3").is_err());
        assert!(serde_json::from_str::<Availability>("-1").is_err());
        assert!(serde_json::from_str::<Availability>("\"2\"").is_err());
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = AvailabilityEntry::new(
            UserId::new(10),
            "alice",
            CandidateId::new(1),
            Availability::Available,
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: AvailabilityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
