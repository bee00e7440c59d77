//! Layout parameters for precomputed tables.
//!
//! This module defines the shape of a fixed-base table and validates it
//! before any point arithmetic is done.

use std::fmt;

/// Doublings between consecutive groups of the standard table.
pub const WINDOW: u32 = 6;

/// Number of groups (rows) in the standard table.
pub const GROUPS: usize = 43;

/// Number of multiples (columns) per group in the standard table.
pub const MULTIPLES: usize = 32;

/// Encoded size of one table cell: affine x then y, 4 limbs each.
pub const RECORD_SIZE: usize = 64;

/// Encoded size of the standard table, in bytes.
pub const TABLE_SIZE: usize = GROUPS * MULTIPLES * RECORD_SIZE;

/// Largest window accepted by [`TableParams::validate`].
pub const MAX_WINDOW: u32 = 16;

/// Shape of a precomputed table.
///
/// Cell `(i, j)` of a table built with these parameters holds
/// `2^(window·i) · (j+1) · G`.
///
/// # Standard layout
///
/// The default is `window = 6`, `groups = 43`, `multiples = 32`. The groups
/// then span `6 × 43 = 258` bits, enough for any 256-bit scalar, and the 32
/// multiples per group match a signed 6-bit digit recoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableParams {
    /// Doublings between consecutive groups (1..=16).
    pub window: u32,
    /// Number of groups (minimum 1).
    pub groups: usize,
    /// Multiples per group (1..=2^window).
    pub multiples: usize,
}

/// Errors that can occur during parameter validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TableParamError {
    /// Window must be at least 1.
    ZeroWindow,
    /// Window must not exceed [`MAX_WINDOW`].
    WindowTooLarge,
    /// At least one group is required.
    ZeroGroups,
    /// At least one multiple per group is required.
    ZeroMultiples,
    /// A group cannot hold more than `2^window` multiples.
    TooManyMultiples,
    /// The encoded table would not fit in memory (`> isize::MAX` bytes).
    TooLarge,
}

impl TableParams {
    /// Checks that the parameters describe a buildable table.
    pub fn validate(&self) -> Result<(), TableParamError> {
        if self.window == 0 {
            return Err(TableParamError::ZeroWindow);
        }

        if self.window > MAX_WINDOW {
            return Err(TableParamError::WindowTooLarge);
        }

        if self.groups == 0 {
            return Err(TableParamError::ZeroGroups);
        }

        if self.multiples == 0 {
            return Err(TableParamError::ZeroMultiples);
        }

        if self.multiples > 1usize << self.window {
            return Err(TableParamError::TooManyMultiples);
        }

        let len = self
            .groups
            .checked_mul(self.multiples)
            .and_then(|cells| cells.checked_mul(RECORD_SIZE));

        match len {
            Some(len) if len <= isize::MAX as usize => Ok(()),
            _ => Err(TableParamError::TooLarge),
        }
    }

    /// Number of cells in the table.
    ///
    /// Saturates at `usize::MAX` for parameters that fail validation.
    pub fn cells(&self) -> usize {
        self.groups.saturating_mul(self.multiples)
    }

    /// Size of the encoded table, in bytes. Saturating, like [`cells`](Self::cells).
    pub fn encoded_len(&self) -> usize {
        self.cells().saturating_mul(RECORD_SIZE)
    }

    /// Number of scalar bits the groups span (`window × groups`).
    pub fn covered_bits(&self) -> usize {
        (self.window as usize).saturating_mul(self.groups)
    }
}

impl Default for TableParams {
    /// Standard layout: window 6, 43 groups, 32 multiples.
    fn default() -> Self {
        Self {
            window: WINDOW,
            groups: GROUPS,
            multiples: MULTIPLES,
        }
    }
}

impl fmt::Display for TableParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableParamError::ZeroWindow => write!(f, "window must be at least 1"),
            TableParamError::WindowTooLarge => {
                write!(f, "window must be at most {}", MAX_WINDOW)
            }
            TableParamError::ZeroGroups => write!(f, "table needs at least one group"),
            TableParamError::ZeroMultiples => write!(f, "table needs at least one multiple"),
            TableParamError::TooManyMultiples => {
                write!(f, "a group cannot hold more than 2^window multiples")
            }
            TableParamError::TooLarge => write!(f, "encoded table size overflows"),
        }
    }
}

impl std::error::Error for TableParamError {}
