//! Common validation utilities.

/// Member id used when the raw value cannot be interpreted.
///
/// No member row carries this id, so lookups with it match nothing.
pub const UNKNOWN_MEMBER_ID: i64 = 0;

/// Coerces a raw member identifier into a non-negative integer.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. Anything
/// that is not a base-10 integer, and every negative value, yields
/// [`UNKNOWN_MEMBER_ID`].
pub fn coerce_member_id(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => id,
        _ => UNKNOWN_MEMBER_ID,
    }
}

/// Returns true when the id can refer to an existing member.
pub fn is_valid_member_id(id: i64) -> bool {
    id > UNKNOWN_MEMBER_ID
}
