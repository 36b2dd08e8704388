#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ENGINE_ASSERT_LEVEL_DEFINITION: u8 = ENGINE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const ENGINE_ASSERT_LEVEL_DEFINITION: u8 = ENGINE_ASSERT_MODERATE;

pub const ENGINE_ASSERT_SIMPLE: u8 = 1;
pub const ENGINE_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! engine_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ENGINE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ENGINE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! engine_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::ENGINE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ENGINE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
