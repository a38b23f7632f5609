//! Input guards shared by requests, configs and the range calculation.
//!
//! Each guard is a pure check that either passes or reports the first
//! violated bound as an [`InvalidRequest`].

use serde_json::Value;

use crate::error::{InvalidRequest, Result};
use crate::marker::Marker;

/// Smallest budget that fits both edges, two markers and three pages of
/// context, e.g. `[1][..][11][12][13][..][20]`.
pub const MINIMUM_MAXIMUM_VISIBLE: u64 = 7;

fn reject<T>(err: InvalidRequest) -> Result<T> {
    tracing::trace!(error = %err, "pagination input rejected");
    Err(err)
}

pub fn guard_total_pages(total: u64) -> Result<()> {
    if total < 1 {
        return reject(InvalidRequest::TotalPagesTooLow { total });
    }
    Ok(())
}

pub fn guard_current_page(current: u64) -> Result<()> {
    if current < 1 {
        return reject(InvalidRequest::CurrentPageTooLow { current });
    }
    Ok(())
}

pub fn guard_current_within_total(total: u64, current: u64) -> Result<()> {
    if current > total {
        return reject(InvalidRequest::CurrentPageExceedsTotal { current, total });
    }
    Ok(())
}

pub fn guard_maximum_visible(maximum: u64) -> Result<()> {
    if maximum < MINIMUM_MAXIMUM_VISIBLE {
        return reject(InvalidRequest::MaximumVisibleTooLow { maximum });
    }
    Ok(())
}

/// Accepts integers and strings, converting them into a [`Marker`].
pub fn guard_marker_type(value: &Value) -> Result<Marker> {
    let found = match value {
        Value::String(text) => return Ok(Marker::Text(text.clone())),
        Value::Number(number) => match number.as_i64() {
            Some(int) => return Ok(Marker::Int(int)),
            None if number.is_f64() => "float",
            None => "out of range int",
        },
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    reject(InvalidRequest::MarkerWrongType { found })
}

/// An int marker inside `1..=total` would read as a real page.
pub fn guard_marker_not_a_page_number(marker: &Marker, total: u64) -> Result<()> {
    if let Marker::Int(int) = *marker {
        if u64::try_from(int).is_ok_and(|page| (1..=total).contains(&page)) {
            return reject(InvalidRequest::MarkerCollidesWithPageNumber { marker: int, total });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_total_pages_minimum() {
        assert_eq!(guard_total_pages(0), Err(InvalidRequest::TotalPagesTooLow { total: 0 }));
        assert!(guard_total_pages(1).is_ok());
    }

    #[test]
    fn test_current_page_minimum() {
        assert_eq!(
            guard_current_page(0),
            Err(InvalidRequest::CurrentPageTooLow { current: 0 })
        );
        assert!(guard_current_page(1).is_ok());
    }

    #[test]
    fn test_current_within_total() {
        let err = guard_current_within_total(10, 11).unwrap_err();
        assert_eq!(
            err.to_string(),
            "current page (11) should not be higher than total number of pages (10)"
        );
        assert!(guard_current_within_total(10, 10).is_ok());
    }

    #[test]
    fn test_maximum_visible_minimum() {
        let err = guard_maximum_visible(6).unwrap_err();
        assert_eq!(err, InvalidRequest::MaximumVisibleTooLow { maximum: 6 });
        assert_eq!(err.to_string(), "maximum number of visible pages (6) should be at least 7");
        assert!(guard_maximum_visible(MINIMUM_MAXIMUM_VISIBLE).is_ok());
    }

    #[test]
    fn test_marker_type() {
        assert_eq!(guard_marker_type(&json!(-1)), Ok(Marker::Int(-1)));
        assert_eq!(guard_marker_type(&json!("...")), Ok(Marker::Text("...".into())));

        for (value, found) in [
            (json!(null), "null"),
            (json!(true), "bool"),
            (json!(1.5), "float"),
            (json!([1]), "array"),
            (json!({ "a": 1 }), "object"),
            (json!(u64::MAX), "out of range int"),
        ] {
            assert_eq!(
                guard_marker_type(&value),
                Err(InvalidRequest::MarkerWrongType { found })
            );
        }
    }

    #[test]
    fn test_marker_not_a_page_number() {
        let err = guard_marker_not_a_page_number(&Marker::Int(5), 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "omitted chunk marker (5) should not be between 1 and total number of pages (10)"
        );

        assert!(guard_marker_not_a_page_number(&Marker::Int(1), 1).is_err());
        assert!(guard_marker_not_a_page_number(&Marker::Int(11), 10).is_ok());
        assert!(guard_marker_not_a_page_number(&Marker::Int(0), 10).is_ok());
        assert!(guard_marker_not_a_page_number(&Marker::Int(-1), 10).is_ok());
        assert!(guard_marker_not_a_page_number(&Marker::Text("5".into()), 10).is_ok());
    }
}
