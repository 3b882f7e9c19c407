// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an `Error`
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Wraps a diagnostic into `Err(Error)`
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

/// Returns early with `Err(Error)` built from the diagnostic
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}

/// Creates an internal error diagnostic with automatic source location
/// capture
#[macro_export]
macro_rules! internal {
    ($reason:expr) => {
        $crate::error::diagnostic::internal::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            module_path!()
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostic::internal::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            module_path!()
        )
    };
}

/// Returns early with an internal error
#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::error::Error($crate::internal!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error($crate::internal!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
	use crate::{Error, Result, error::diagnostic::query::column_not_found, fragment::Fragment};

	#[test]
	fn test_return_error() {
		fn fails() -> Result<()> {
			return_error!(column_not_found(Fragment::testing("c")));
		}

		let err = fails().unwrap_err();
		assert_eq!(err.code, "QUERY_001");
	}

	#[test]
	fn test_err() {
		let result: Result<()> = err!(column_not_found(Fragment::None));
		assert!(result.is_err());
	}

	#[test]
	fn test_internal_with_format() {
		let diagnostic = internal!("Invalid value: {:#04x}", 255);
		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("Invalid value: 0xff"));
		assert!(diagnostic.label.as_ref().unwrap().contains("macro.rs"));
	}

	#[test]
	fn test_return_internal_error() {
		fn fails() -> std::result::Result<(), Error> {
			return_internal_error!("function error");
		}

		let err = fails().unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");
		assert!(err.message.contains("function error"));
	}
}
