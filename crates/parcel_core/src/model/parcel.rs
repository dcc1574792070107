//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical shipment record persisted by the parcel store.
//! - Own the closed status vocabulary and its textual tokens.
//!
//! # Invariants
//! - `number == 0` means "not yet persisted"; persisted parcels have `number > 0`.
//! - `status` is always one of `registered|sent|delivered`.
//! - `created_at` is an RFC3339 UTC string and never changes after creation.
//! - Only `registered` parcels may change address or be deleted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Opaque identifier of the client owning a parcel.
pub type ClientId = i64;

/// Shipment lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted by the tracker, not yet handed to a carrier.
    Registered,
    /// In transit.
    Sent,
    /// Handed to the recipient.
    Delivered,
}

impl ParcelStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ParcelStatus; 3] = [Self::Registered, Self::Sent, Self::Delivered];

    /// Returns the token stored in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Returns the following lifecycle stage, or `None` for `delivered`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Whether address changes and deletion are permitted in this stage.
    pub fn allows_mutation(self) -> bool {
        self == Self::Registered
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelStatusParseError(pub String);

impl Display for ParcelStatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for ParcelStatusParseError {}

impl FromStr for ParcelStatus {
    type Err = ParcelStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParcelStatusParseError(value.to_string()))
    }
}

/// Validation failures for parcels about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    NegativeNumber(ParcelNumber),
    InvalidCreatedAt(String),
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeNumber(number) => {
                write!(f, "parcel number must not be negative, got {number}")
            }
            Self::InvalidCreatedAt(value) => {
                write!(f, "created_at `{value}` is not an RFC3339 timestamp")
            }
        }
    }
}

impl Error for ParcelValidationError {}

/// Shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by the store on insert; `0` until then.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    /// Free-text delivery address.
    pub address: String,
    /// RFC3339 UTC, second precision.
    pub created_at: String,
}

impl Parcel {
    /// Builds an unsaved `registered` parcel stamped with the current time.
    pub fn new(client: ClientId, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Checks field-level invariants that SQL constraints do not cover.
    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        if self.number < 0 {
            return Err(ParcelValidationError::NegativeNumber(self.number));
        }
        if DateTime::parse_from_rfc3339(&self.created_at).is_err() {
            return Err(ParcelValidationError::InvalidCreatedAt(
                self.created_at.clone(),
            ));
        }
        Ok(())
    }

    pub fn is_persisted(&self) -> bool {
        self.number > 0
    }
}

/// Current UTC time in the `created_at` storage format.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::{now_rfc3339, Parcel, ParcelStatus, ParcelValidationError};

    #[test]
    fn status_tokens_parse_back() {
        for status in ParcelStatus::ALL {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
        }
        assert!("lost".parse::<ParcelStatus>().is_err());
        assert!("Registered".parse::<ParcelStatus>().is_err());
    }

    #[test]
    fn next_walks_lifecycle_and_stops_at_delivered() {
        assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
        assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
        assert_eq!(ParcelStatus::Delivered.next(), None);
        assert!(ParcelStatus::Delivered.is_terminal());
    }

    #[test]
    fn only_registered_allows_mutation() {
        assert!(ParcelStatus::Registered.allows_mutation());
        assert!(!ParcelStatus::Sent.allows_mutation());
        assert!(!ParcelStatus::Delivered.allows_mutation());
    }

    #[test]
    fn timestamp_is_utc_with_z_suffix() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'), "unexpected timestamp: {stamp}");
        assert_eq!(stamp.len(), "2024-01-01T00:00:00Z".len());
    }

    #[test]
    fn validate_rejects_garbage_timestamp() {
        let mut parcel = Parcel::new(1, "somewhere");
        parcel.created_at = "yesterday".to_string();
        assert_eq!(
            parcel.validate(),
            Err(ParcelValidationError::InvalidCreatedAt("yesterday".to_string()))
        );
    }
}
