// Decimal value conversion

use std::num::ParseIntError;

/// Parses the decimal text captured by the matcher. Only range overflow can
/// fail here since the pattern already admits nothing but ASCII digits.
pub fn parse_value(digits: &str) -> Result<u32, ParseIntError> {
    digits.parse::<u32>()
}
