//! Syntactic checks on the raw flight list.
//!
//! The reducer trusts that every segment has two distinct, well-formed
//! airport codes. This module turns the untyped request body into
//! [`Segment`]s, rejecting the first flight that breaks one of those rules.

use crate::domain::{InvalidSegment, Segment};

/// Why a request's flight list was rejected before reduction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A flight did not have exactly two elements
    #[error(
        "Bad flight input {}: Flights must be represented as a JSON string of size 2",
        show(.0)
    )]
    WrongSize(Vec<String>),

    /// A flight element is not three uppercase letters
    #[error(
        "Bad flight input {}: Flight elements must consist of 3 uppercase [A-Z] characters",
        show(.0)
    )]
    BadCode(Vec<String>),

    /// A flight starts and ends at the same airport
    #[error("Bad flight input {}: Flight elements cannot be the same", show(.0))]
    SameCodes(Vec<String>),

    /// More flights than the server accepts
    #[error("Too many flights: {count} exceeds limit of {limit}")]
    TooMany { count: usize, limit: usize },
}

/// Render a raw flight as `[IND EWR]`.
fn show(flight: &[String]) -> String {
    format!("[{}]", flight.join(" "))
}

/// Validate every flight in order and convert to segments.
pub fn validate_flights(
    flights: &[Vec<String>],
    max_segments: usize,
) -> Result<Vec<Segment>, ValidationError> {
    if flights.len() > max_segments {
        return Err(ValidationError::TooMany {
            count: flights.len(),
            limit: max_segments,
        });
    }

    flights.iter().map(|f| validate_flight(f)).collect()
}

fn validate_flight(flight: &[String]) -> Result<Segment, ValidationError> {
    let [source, destination] = flight else {
        return Err(ValidationError::WrongSize(flight.to_vec()));
    };

    Segment::parse(source, destination).map_err(|e| match e {
        InvalidSegment::Code(_) => ValidationError::BadCode(flight.to_vec()),
        InvalidSegment::SameEndpoints(_) => ValidationError::SameCodes(flight.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirportCode;

    fn flights(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|f| f.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn valid_flights_become_segments() {
        let segs = validate_flights(&flights(&[&["IND", "EWR"], &["SFO", "ATL"]]), 10).unwrap();

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].source, AirportCode::parse("IND").unwrap());
        assert_eq!(segs[1].destination, AirportCode::parse("ATL").unwrap());
    }

    #[test]
    fn empty_list_passes_validation() {
        assert_eq!(validate_flights(&[], 10), Ok(vec![]));
    }

    #[test]
    fn too_many_codes() {
        let err = validate_flights(&flights(&[&["IND", "EWR", "DEN"], &["SFO", "ATL"]]), 10)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad flight input [IND EWR DEN]: Flights must be represented as a JSON string of size 2"
        );
    }

    #[test]
    fn too_few_codes() {
        let err = validate_flights(&flights(&[&["SFO", "ATL"], &["IND"]]), 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad flight input [IND]: Flights must be represented as a JSON string of size 2"
        );
    }

    #[test]
    fn bad_codes() {
        let cases: &[(&[&str], &str)] = &[
            (&["SFO", "aTL"], "[SFO aTL]"),
            (&["G3O", "IND"], "[G3O IND]"),
            (&["ATL", "GSOX"], "[ATL GSOX]"),
        ];
        for (flight, shown) in cases {
            let err = validate_flights(&flights(&[*flight]), 10).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "Bad flight input {shown}: Flight elements must consist of 3 uppercase [A-Z] characters"
                )
            );
        }
    }

    #[test]
    fn same_codes() {
        let err = validate_flights(&flights(&[&["IND", "EWR"], &["IND", "IND"]]), 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad flight input [IND IND]: Flight elements cannot be the same"
        );
    }

    #[test]
    fn first_bad_flight_wins() {
        let err =
            validate_flights(&flights(&[&["IND", "IND"], &["G3O", "IND"]]), 10).unwrap_err();
        assert!(matches!(err, ValidationError::SameCodes(_)));
    }

    #[test]
    fn limit_enforced() {
        let err = validate_flights(&flights(&[&["IND", "EWR"], &["SFO", "ATL"]]), 1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooMany {
                count: 2,
                limit: 1
            }
        );
        assert_eq!(err.to_string(), "Too many flights: 2 exceeds limit of 1");
    }
}
