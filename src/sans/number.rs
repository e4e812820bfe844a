//! Decoding of fixed-width numeric fields.

use thiserror::Error;

/// An error decoding a numeric field.
#[derive(Debug, Error)]
pub enum NumberError {
    /// The field held no digits.
    #[error("Empty field.")]
    Empty,
    /// A byte outside the digit range for the base.
    #[error("Invalid digit ({0:#04x}).")]
    InvalidDigit(u8),
    /// The value does not fit in a machine word.
    #[error("Value does not fit in a machine word.")]
    Overflow,
}

/// The base of a numeric field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Base {
    Decimal,
    Octal,
}

/// Decode a run of ASCII digits into an unsigned magnitude.
///
/// Leading zeros are permitted and carry no meaning. Archive size fields are
/// [`Base::Octal`]; the decoder is not otherwise tied to the archive format.
pub fn decode_unsigned(r: &[u8], base: Base) -> Result<usize, NumberError> {
    if r.is_empty() {
        Err(NumberError::Empty)?;
    }

    let (radix, top) = match base {
        Base::Decimal => (10, b'9'),
        Base::Octal => (8, b'7'),
    };

    let mut value: usize = 0;
    for &digit in r {
        if !(b'0'..=top).contains(&digit) {
            Err(NumberError::InvalidDigit(digit))?;
        }

        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(usize::from(digit - b'0')))
            .ok_or(NumberError::Overflow)?;
    }

    Ok(value)
}
