/// Generate one `#[test]` per type, calling the generic function `$test::<T>()`.
///
/// The types must be in scope as plain identifiers (`use cts_harness::ir::f16;`), and every
/// generated test is named `<test>_<type>`.
///
/// ```ignore
/// fn sum_is_commutative<T: Scalar>() { /* ... */ }
///
/// cts_harness::testgen_for_all_types!(sum_is_commutative, [i32, f32, f16]);
/// ```
#[macro_export]
macro_rules! testgen_for_all_types {
    ($test:ident, [$($ty:ident),* $(,)?]) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$test _ $ty>]() {
                    $test::<$ty>();
                }
            }
        )*
    };
}

/// Generate one `#[test]` per pair of types, calling `$test::<L, R>()`.
///
/// Tests are named `<test>_<lhs>_<rhs>`.
#[macro_export]
macro_rules! testgen_for_all_combinations {
    ($test:ident, [$($lhs:ident),* $(,)?], $rhs:tt) => {
        $(
            $crate::__testgen_pair!($test, $lhs, $rhs);
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __testgen_pair {
    ($test:ident, $lhs:ident, [$($rhs:ident),* $(,)?]) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$test _ $lhs _ $rhs>]() {
                    $test::<$lhs, $rhs>();
                }
            }
        )*
    };
}
