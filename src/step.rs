/// The result of advancing a [`LazyIter`][crate::LazyIter] by one step.
///
/// Once a node has returned [`Step::Exhausted`] it keeps returning it on every
/// further call to [`advance`][crate::LazyIter::advance].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a step may hold a produced value"]
pub enum Step<T> {
    /// No further values will be produced.
    Exhausted,
    /// The next value in the sequence.
    Produced(T),
}

impl<T> Step<T> {
    /// Returns `true` if this is [`Step::Exhausted`].
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    /// Returns `true` if this is [`Step::Produced`].
    #[inline]
    pub fn is_produced(&self) -> bool {
        matches!(self, Step::Produced(_))
    }

    /// Maps the produced value, leaving exhaustion untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Produced(value) => Step::Produced(f(value)),
            Step::Exhausted => Step::Exhausted,
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Produced(value) => Step::Produced(value),
            Step::Exhausted => Step::Exhausted,
        }
    }

    /// Converts the step into an `Option`, `None` meaning exhaustion.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Produced(value) => Some(value),
            Step::Exhausted => None,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Produced(value),
            None => Step::Exhausted,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}
