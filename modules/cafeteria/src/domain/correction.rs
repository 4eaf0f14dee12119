//! Field correction rules for partial updates
//!
//! A supplied value replaces the current one unless it is the type's blank
//! value (empty string, zero price). Blank and absent are treated the same:
//! the current value is kept.

use rust_decimal::Decimal;

/// Types with a "blank" value that never overwrites a stored one
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Decimal {
    fn is_blank(&self) -> bool {
        self.is_zero()
    }
}

/// Resolve the value a field takes after a correction
pub fn corrected<T: Blank>(current: T, supplied: Option<T>) -> T {
    match supplied {
        Some(value) if !value.is_blank() => value,
        _ => current,
    }
}
