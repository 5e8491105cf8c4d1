//! Output format dialect selector.

use cdl_diagnostic::{Diagnostic, ErrorCode};

/// The output format dialect ("kind").
///
/// Selected by the driver from the four literal codes 1..=4; the dialect
/// decides which unlimited-dimension placement rule a dimension set must
/// satisfy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(i32)]
pub enum Kind {
    /// Classic netCDF-3 format.
    Classic = 1,
    /// Classic format with 64-bit offsets.
    Offset64 = 2,
    /// netCDF-4 (HDF5-based) format.
    NetCdf4 = 3,
    /// netCDF-4 restricted to the classic data model.
    NetCdf4Classic = 4,
}

impl Kind {
    /// The standard format name.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Classic => "classic",
            Kind::Offset64 => "64-bit offset",
            Kind::NetCdf4 => "netCDF-4",
            Kind::NetCdf4Classic => "netCDF-4 classic model",
        }
    }

    /// The literal dialect code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Decode a dialect code, reporting a diagnostic for any other value.
    pub fn from_code(code: i32) -> Result<Self, Diagnostic> {
        match code {
            1 => Ok(Kind::Classic),
            2 => Ok(Kind::Offset64),
            3 => Ok(Kind::NetCdf4),
            4 => Ok(Kind::NetCdf4Classic),
            other => Err(Diagnostic::error(ErrorCode::E2003)
                .with_message(format!("Unknown format index: {other}"))),
        }
    }

    /// True for the two legacy (netCDF-3) dialects.
    pub const fn is_legacy(self) -> bool {
        matches!(self, Kind::Classic | Kind::Offset64)
    }

    /// True when any subset of dimension positions may be unlimited.
    ///
    /// The legacy dialects allow at most one unlimited dimension, and only
    /// at index 0.
    pub const fn supports_multiple_unlimited(self) -> bool {
        !self.is_legacy()
    }
}
