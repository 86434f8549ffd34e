//! Flight segment and reduced path types.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{AirportCode, InvalidAirportCode};

/// Error returned when a flight segment cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSegment {
    /// One of the endpoints is not a valid airport code
    #[error(transparent)]
    Code(#[from] InvalidAirportCode),

    /// Source and destination are the same airport
    #[error("source and destination are both {0}")]
    SameEndpoints(AirportCode),
}

/// One directed flight leg from `source` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Departure airport
    pub source: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
}

impl Segment {
    /// Creates a segment from already-validated codes.
    ///
    /// No check is made that the endpoints differ.
    pub fn new(source: AirportCode, destination: AirportCode) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Parses both endpoints and rejects a segment that starts and ends at
    /// the same airport.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::Segment;
    ///
    /// let seg = Segment::parse("SFO", "ATL").unwrap();
    /// assert_eq!(seg.to_string(), "[SFO, ATL]");
    ///
    /// assert!(Segment::parse("SFO", "SFO").is_err());
    /// assert!(Segment::parse("SFO", "atl").is_err());
    /// ```
    pub fn parse(source: &str, destination: &str) -> Result<Self, InvalidSegment> {
        let source = AirportCode::parse(source)?;
        let destination = AirportCode::parse(destination)?;
        if source == destination {
            return Err(InvalidSegment::SameEndpoints(source));
        }
        Ok(Self::new(source, destination))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.source, self.destination)
    }
}

/// The overall trip implied by a set of chained segments.
///
/// Serializes as a two-element array, e.g. `["SFO","EWR"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReducedPath {
    /// Where the whole trip starts
    pub source: AirportCode,
    /// Where the whole trip ends
    pub destination: AirportCode,
}

impl ReducedPath {
    /// Creates a reduced path.
    pub fn new(source: AirportCode, destination: AirportCode) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for ReducedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

impl Serialize for ReducedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.source, &self.destination).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_segment() {
        let seg = Segment::parse("JFK", "LAX").unwrap();
        assert_eq!(seg.source, code("JFK"));
        assert_eq!(seg.destination, code("LAX"));
    }

    #[test]
    fn parse_rejects_same_endpoints() {
        let err = Segment::parse("IND", "IND").unwrap_err();
        assert_eq!(err, InvalidSegment::SameEndpoints(code("IND")));
        assert_eq!(err.to_string(), "source and destination are both IND");
    }

    #[test]
    fn parse_rejects_bad_codes() {
        assert!(matches!(
            Segment::parse("G3O", "IND"),
            Err(InvalidSegment::Code(_))
        ));
        assert!(matches!(
            Segment::parse("ATL", "GSOX"),
            Err(InvalidSegment::Code(_))
        ));
    }

    #[test]
    fn new_does_not_validate() {
        let seg = Segment::new(code("ATL"), code("ATL"));
        assert_eq!(seg.source, seg.destination);
    }

    #[test]
    fn display() {
        let seg = Segment::parse("ATL", "LAX").unwrap();
        assert_eq!(seg.to_string(), "[ATL, LAX]");

        let path = ReducedPath::new(code("SFO"), code("EWR"));
        assert_eq!(path.to_string(), "SFO -> EWR");
    }

    #[test]
    fn reduced_path_serializes_as_pair() {
        let path = ReducedPath::new(code("SFO"), code("EWR"));
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"["SFO","EWR"]"#);
    }
}
