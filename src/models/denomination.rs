//! Denomination model
//!
//! A denomination is a supported face value of currency together with the
//! number of notes or coins of that value currently in the drawer.

use std::fmt;

use crate::error::{CashError, CashResult};

/// A currency face value and its held count
///
/// The face value is the identity of a denomination and never changes after
/// construction; only the count is mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    face_value: i64,
    count: i64,
}

impl Denomination {
    /// Create a new denomination
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `face_value` is not positive, `count` is
    /// negative, or their product does not fit in an `i64`.
    pub fn new(face_value: i64, count: i64) -> CashResult<Self> {
        if face_value <= 0 {
            return Err(CashError::InvalidArgument(format!(
                "denomination value must be greater than zero, got {}",
                face_value
            )));
        }
        if count < 0 {
            return Err(CashError::InvalidArgument(format!(
                "denomination count cannot be negative, got {}",
                count
            )));
        }
        if face_value.checked_mul(count).is_none() {
            return Err(CashError::InvalidArgument(format!(
                "count {} of {} is too large",
                count, face_value
            )));
        }

        Ok(Self { face_value, count })
    }

    /// Create an empty denomination (count zero)
    pub fn empty(face_value: i64) -> CashResult<Self> {
        Self::new(face_value, 0)
    }

    /// Zero-count denomination for a face value known to be positive
    pub(crate) const fn zeroed(face_value: i64) -> Self {
        Self {
            face_value,
            count: 0,
        }
    }

    /// The face value in currency units
    pub const fn face_value(&self) -> i64 {
        self.face_value
    }

    /// The number of units held
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Face value multiplied by count; always fits, see [`Denomination::new`]
    pub const fn line_total(&self) -> i64 {
        self.face_value * self.count
    }

    pub(crate) fn reset(&mut self) {
        self.count = 0;
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.face_value, self.count)
    }
}
