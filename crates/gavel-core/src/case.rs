//! Case-number parsing and portal case-identifier construction.
//!
//! A raw auction case number looks like `2022타경3944`: a year prefix, the
//! literal case-type marker `타경`, and a sequence number. The portal wants
//! the composite form `<prefix>0130<sequence zero-padded to 6>`, e.g.
//! `2022타경3944` → `202201300003944`. The `0130` infix is a portal
//! convention for the auction division; treat it as opaque.

use crate::error::QueryError;

/// Case-type marker separating year prefix from sequence number.
pub const CASE_DELIMITER: &str = "타경";

const DIVISION_INFIX: &str = "0130";
const SEQUENCE_WIDTH: usize = 6;

/// Build the portal case identifier from a raw case number.
///
/// The input must contain `타경` exactly once, with a non-empty prefix and a
/// 1–6 digit sequence number. A sequence longer than six digits is rejected
/// rather than truncated.
pub fn case_identifier(raw: &str) -> Result<String, QueryError> {
    let mut parts = raw.split(CASE_DELIMITER);
    // split always yields at least one item
    let prefix = parts.next().unwrap_or_default();
    let Some(sequence) = parts.next() else {
        return Err(QueryError::malformed(raw, "missing 타경 delimiter"));
    };
    if parts.next().is_some() {
        return Err(QueryError::malformed(raw, "more than one 타경 delimiter"));
    }
    if prefix.is_empty() {
        return Err(QueryError::malformed(raw, "empty year prefix"));
    }
    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::malformed(raw, "sequence number is not numeric"));
    }
    if sequence.len() > SEQUENCE_WIDTH {
        return Err(QueryError::malformed(
            raw,
            format!("sequence number longer than {SEQUENCE_WIDTH} digits"),
        ));
    }

    Ok(format!("{prefix}{DIVISION_INFIX}{sequence:0>SEQUENCE_WIDTH$}"))
}
