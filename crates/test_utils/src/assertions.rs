// Path: crates/test_utils/src/assertions.rs
//! Assertion macros shared by the shim's test suites.

/// Unwraps an `Ok` value or fails the test with the error.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("expected Ok, got Err: {err:?}"),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("expected Ok, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Unwraps an `Err` value or fails the test with the unexpected success.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("expected Err, got Ok: {val:?}"),
            Err(err) => err,
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => panic!("expected Err, got Ok: {:?} ({})", val, format!($($arg)+)),
            Err(err) => err,
        }
    };
}

/// Unwraps an `Err` value and checks its stable error code.
///
/// Returns the error so callers can keep asserting on it.
#[macro_export]
macro_rules! assert_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => panic!("expected an error with code {}, got Ok: {val:?}", $code),
            Err(err) => {
                assert_eq!($crate::ErrorCode::code(&err), $code, "error was: {err:?}");
                err
            }
        }
    };
}

/// Compares two byte-slice views for equality.
#[macro_export]
macro_rules! assert_bytes_eq {
    ($left:expr, $right:expr) => {
        assert_eq!($left.as_ref(), $right.as_ref());
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        assert_eq!($left.as_ref(), $right.as_ref(), $($arg)+);
    };
}
