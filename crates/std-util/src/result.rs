/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra arguments
/// are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?})", v),
        }
    };
    ($e:expr, $($arg:tt)+) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!(
                "expected `Err`; actual=Ok({:?}), {}",
                v,
                format_args!($($arg)+)
            ),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's `Display` output otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error=`{}`", e),
        }
    };
}
