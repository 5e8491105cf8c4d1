//! Storage-library status translation.
//!
//! The binary writer backend talks to the netCDF storage library, which
//! reports `int` status codes. Any non-success status is unrecoverable for
//! the compilation: it is translated into a [`FatalError`] value carrying a
//! formatted one-line message and the call-site location, and propagated to
//! the driver. The core never terminates the process itself.

use std::borrow::Cow;
use std::fmt;

/// The component name used in fatal diagnostics.
pub const COMPONENT: &str = "cdlc";

/// Success status of the storage library (`NC_NOERR`).
pub const STATUS_OK: i32 = 0;

/// Source location metadata for a fatal diagnostic trailer.
///
/// Captured at the call site with [`location!`](crate::location).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceLocation {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        SourceLocation {
            file,
            function,
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}:{})", self.file, self.function, self.line)
    }
}

/// Capture the current source location for a fatal diagnostic trailer.
///
/// The enclosing module path stands in for the function name.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(file!(), module_path!(), line!())
    };
}

/// An unrecoverable storage failure.
///
/// Formats as `"<component>: <message>"` followed by a
/// `(file:function:line)` trailer on its own indented line. The driver
/// alone decides whether this terminates the process.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("cdlc: {message}\n\t{location}")]
pub struct FatalError {
    /// Raw storage status code that triggered the failure.
    pub status: i32,
    /// Formatted message, including the CDL line when one was known.
    pub message: String,
    /// Call site that observed the status.
    pub location: SourceLocation,
}

/// Translate a storage status into the success/fatal split.
///
/// Returns `Ok(())` exactly when `status` is [`STATUS_OK`]. Otherwise the
/// status text is looked up (total, see [`status_message`]), prefixed with
/// the CDL line when one is available, and wrapped in a [`FatalError`].
pub fn check_status(
    status: i32,
    cdl_line: Option<u32>,
    location: SourceLocation,
) -> Result<(), FatalError> {
    if status == STATUS_OK {
        return Ok(());
    }
    let text = status_message(status);
    let message = match cdl_line {
        Some(line) => format!("cdl line {line}; {text}"),
        None => text.into_owned(),
    };
    Err(FatalError {
        status,
        message,
        location,
    })
}

/// Human-readable text for a storage status code.
///
/// Total over the whole code space: known codes map to the storage
/// library's literal messages, anything else formats a synthetic one.
pub fn status_message(status: i32) -> Cow<'static, str> {
    let text = match status {
        0 => "No error",
        -33 => "NetCDF: Not a valid ID",
        -34 => "NetCDF: Too many files open",
        -35 => "NetCDF: File exists && NC_NOCLOBBER",
        -36 => "NetCDF: Invalid argument",
        -37 => "NetCDF: Write to read only",
        -38 => "NetCDF: Operation not allowed in data mode",
        -39 => "NetCDF: Operation not allowed in define mode",
        -40 => "NetCDF: Index exceeds dimension bound",
        -41 => "NetCDF: NC_MAX_DIMS exceeded",
        -42 => "NetCDF: String match to name in use",
        -43 => "NetCDF: Attribute not found",
        -44 => "NetCDF: NC_MAX_ATTRS exceeded",
        -45 => "NetCDF: Not a valid data type or _FillValue type mismatch",
        -46 => "NetCDF: Invalid dimension ID or name",
        -47 => "NetCDF: NC_UNLIMITED in the wrong index",
        -48 => "NetCDF: NC_MAX_VARS exceeded",
        -49 => "NetCDF: Variable not found",
        -50 => "NetCDF: Action prohibited on NC_GLOBAL varid",
        -51 => "NetCDF: Unknown file format",
        -53 => "NetCDF: NC_MAX_NAME exceeded",
        -54 => "NetCDF: NC_UNLIMITED size already in use",
        -55 => "NetCDF: nc_rec op when there are no record vars",
        -56 => "NetCDF: Attempt to convert between text & numbers",
        -57 => "NetCDF: Start+count exceeds dimension bound",
        -58 => "NetCDF: Illegal stride",
        -59 => "NetCDF: Name contains illegal characters",
        -60 => "NetCDF: Numeric conversion not representable",
        -61 => "NetCDF: Memory allocation (malloc) failure",
        -62 => "NetCDF: One or more variable sizes violate format constraints",
        -63 => "NetCDF: Invalid dimension size",
        -64 => "NetCDF: File likely truncated or possibly corrupted",
        _ => return Cow::Owned(format!("Unknown Error: status = {status}")),
    };
    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ok_status_is_ok() {
        assert!(check_status(STATUS_OK, None, location!()).is_ok());
        assert!(check_status(STATUS_OK, Some(7), location!()).is_ok());
    }

    #[test]
    fn failure_formats_component_message_and_trailer() {
        let loc = SourceLocation::new("genbin.rs", "cdl_diagnostic::tests", 42);
        let err = match check_status(-33, None, loc) {
            Err(e) => e,
            Ok(()) => panic!("status -33 must be fatal"),
        };
        assert_eq!(err.status, -33);
        assert_eq!(
            err.to_string(),
            "cdlc: NetCDF: Not a valid ID\n\t(genbin.rs:cdl_diagnostic::tests:42)"
        );
    }

    #[test]
    fn failure_includes_cdl_line_when_known() {
        let loc = SourceLocation::new("f.rs", "m", 1);
        let err = match check_status(-61, Some(12), loc) {
            Err(e) => e,
            Ok(()) => panic!("status -61 must be fatal"),
        };
        assert_eq!(
            err.message,
            "cdl line 12; NetCDF: Memory allocation (malloc) failure"
        );
    }

    #[test]
    fn unknown_status_formats_synthetic_message() {
        assert_eq!(status_message(-9999), "Unknown Error: status = -9999");
        assert_eq!(status_message(17), "Unknown Error: status = 17");
    }

    #[test]
    fn location_macro_captures_this_file() {
        let loc = location!();
        assert!(loc.file.ends_with("status.rs"));
        assert!(loc.line > 0);
    }
}
