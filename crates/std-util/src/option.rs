/// Asserts that an option is `None`, panicking with the `Some` value
/// otherwise.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        if let Some(v) = &$e {
            panic!("expected `None`; actual=Some({:?})", v);
        }
    };
}

/// Unwraps a `Some`, panicking with the unwrapped expression otherwise.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None ({})", stringify!($e)),
        }
    };
}
