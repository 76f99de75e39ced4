use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// The error returned when a dynamically typed value cannot be turned into a
/// source.
///
/// This is only produced by [`try_from_any`][crate::try_from_any];
/// statically typed construction through [`from`][crate::from] rejects
/// non-iterable values at compile time instead.
///
/// Example:
/// ```
/// let err = lazy_iter::try_from_any::<u8>(Box::new("not a sequence")).unwrap_err();
/// assert_eq!(err.item_type(), "u8");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct InvalidSource {
    item: &'static str,
}

impl InvalidSource {
    #[cfg_attr(not(feature = "alloc"), allow(dead_code))]
    pub(crate) fn new<T>() -> Self {
        Self {
            item: core::any::type_name::<T>(),
        }
    }

    /// The name of the item type the source was expected to yield.
    pub fn item_type(&self) -> &'static str {
        self.item
    }
}

impl fmt::Debug for InvalidSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidSource")
            .field("item", &self.item)
            .finish()
    }
}

impl fmt::Display for InvalidSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value is not an iterable source of `{}` items",
            self.item
        )
    }
}

#[cfg(feature = "std")]
impl Error for InvalidSource {}
