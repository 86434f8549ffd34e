//! Airport code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportCode;
///
/// let sfo = AirportCode::parse("SFO").unwrap();
/// assert_eq!(sfo.as_str(), "SFO");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("sfo").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("SF").is_err());
/// assert!(AirportCode::parse("SFOX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirportCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("SFO").is_ok());
        assert!(AirportCode::parse("EWR").is_ok());
        assert!(AirportCode::parse("JFK").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("sfo").is_err());
        assert!(AirportCode::parse("aTL").is_err());
        assert!(AirportCode::parse("ATl").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("A").is_err());
        assert!(AirportCode::parse("AT").is_err());
        assert!(AirportCode::parse("GSOX").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("G3O").is_err());
        assert!(AirportCode::parse("G-O").is_err());
        assert!(AirportCode::parse("G O").is_err());
        assert!(AirportCode::parse("GÖO").is_err());
    }

    #[test]
    fn reason_in_message() {
        let err = AirportCode::parse("G3O").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid airport code: must be uppercase ASCII letters A-Z"
        );

        let err = AirportCode::parse("GSOX").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid airport code: must be exactly 3 characters"
        );
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("ATL").unwrap();
        assert_eq!(format!("{}", code), "ATL");
        assert_eq!(format!("{:?}", code), "AirportCode(ATL)");
    }

    #[test]
    fn serializes_as_string() {
        let code = AirportCode::parse("LAX").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"LAX\"");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AirportCode::parse("JFK").unwrap());
        assert!(set.contains(&AirportCode::parse("JFK").unwrap()));
        assert!(!set.contains(&AirportCode::parse("LAX").unwrap()));
    }
}
