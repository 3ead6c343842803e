//! Local CSV preview parsing.
//!
//! Best-effort extraction of `(time, flux)` samples from an uploaded CSV so a
//! preview chart can render before any server round-trip. The format
//! assumptions are fixed: the first line is a header and is skipped without
//! validation, fields are comma-separated with no quoting support, column 0
//! is time and column 1 is flux.
//!
//! Parsing never rejects the dataset itself. A malformed row is silently
//! dropped, and an empty result is a recoverable "cannot preview" condition
//! handled by the session, not an error.

use crate::api::CurvePoint;

/// Parse preview samples from raw CSV text.
pub fn parse_preview(text: &str) -> Vec<CurvePoint> {
    text.lines().skip(1).filter_map(parse_row).collect()
}

/// A row is kept only if its first two fields both parse as finite floats.
fn parse_row(line: &str) -> Option<CurvePoint> {
    let mut fields = line.split(',');
    let time = parse_finite(fields.next()?)?;
    let flux = parse_finite(fields.next()?)?;
    Some(CurvePoint { time, flux })
}

/// Strict float parsing: surrounding whitespace is tolerated, any other
/// trailing garbage invalidates the field, and non-finite values are dropped.
fn parse_finite(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_header_skipped_and_malformed_row_dropped() {
        let preview = parse_preview("h1,h2\n1,2\nX,3\n3,4");
        assert_eq!(
            preview,
            vec![
                CurvePoint { time: 1.0, flux: 2.0 },
                CurvePoint { time: 3.0, flux: 4.0 },
            ]
        );
    }

    #[test]
    fn test_header_never_validated() {
        // Even a numeric first line is discarded unconditionally.
        let preview = parse_preview("10,20\n1,2");
        assert_eq!(preview, vec![CurvePoint { time: 1.0, flux: 2.0 }]);
    }

    #[test]
    fn test_empty_and_header_only_inputs() {
        assert!(parse_preview("").is_empty());
        assert!(parse_preview("time,flux").is_empty());
        assert!(parse_preview("time,flux\n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let preview = parse_preview("time,flux\r\n1.5,2.5\r\n");
        assert_eq!(preview, vec![CurvePoint { time: 1.5, flux: 2.5 }]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let preview = parse_preview("t,f,extra\n1,2,junk");
        assert_eq!(preview, vec![CurvePoint { time: 1.0, flux: 2.0 }]);
    }

    #[test]
    fn test_missing_flux_column_drops_row() {
        assert!(parse_preview("t,f\n1").is_empty());
    }

    #[test]
    fn test_trailing_garbage_invalidates_field() {
        assert!(parse_preview("t,f\n1.0abc,2").is_empty());
        assert!(parse_preview("t,f\n1,2.0e").is_empty());
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let preview = parse_preview("t,f\n1e-3,2.5E2");
        assert_eq!(
            preview,
            vec![CurvePoint {
                time: 0.001,
                flux: 250.0
            }]
        );
    }

    #[test]
    fn test_non_finite_values_dropped() {
        assert!(parse_preview("t,f\ninf,1").is_empty());
        assert!(parse_preview("t,f\n1,NaN").is_empty());
    }

    proptest! {
        #[test]
        fn prop_parse_preview_is_idempotent(text in "\\PC{0,200}") {
            prop_assert_eq!(parse_preview(&text), parse_preview(&text));
        }

        #[test]
        fn prop_well_formed_rows_all_kept(rows in prop::collection::vec((-1e9f64..1e9, -1e9f64..1e9), 0..50)) {
            let mut text = String::from("time,flux\n");
            for (time, flux) in &rows {
                text.push_str(&format!("{time},{flux}\n"));
            }
            let preview = parse_preview(&text);
            prop_assert_eq!(preview.len(), rows.len());
        }
    }
}
