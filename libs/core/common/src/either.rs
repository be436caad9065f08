use std::fmt;

/// Two-outcome value carrying either an error or a success payload.
///
/// Exactly one side is populated. The only ways to build one are
/// [`Either::from_success`], [`Either::from_error`] and the `From<Result<S, E>>`
/// conversion, so there is no empty or default state.
///
/// Borrowing the wrong side through [`Either::success`] or [`Either::error`] is a
/// caller bug and panics with a message naming the side that was populated.
/// Use [`Either::ok`], [`Either::err`] or [`Either::into_result`] when the side
/// is not known in advance.
#[derive(Clone, PartialEq, Eq)]
#[must_use = "an Either may carry an error that should be handled"]
pub struct Either<E, S> {
    inner: Side<E, S>,
}

#[derive(Clone, PartialEq, Eq)]
enum Side<E, S> {
    Error(E),
    Success(S),
}

impl<E, S> Either<E, S> {
    pub fn from_success(value: S) -> Self {
        Self {
            inner: Side::Success(value),
        }
    }

    pub fn from_error(error: E) -> Self {
        Self {
            inner: Side::Error(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.inner, Side::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.inner, Side::Error(_))
    }

    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics when called on an error outcome.
    #[track_caller]
    pub fn success(&self) -> &S {
        match &self.inner {
            Side::Success(value) => value,
            Side::Error(_) => panic!("called `Either::success()` on an error outcome"),
        }
    }

    /// Borrow the error payload.
    ///
    /// # Panics
    ///
    /// Panics when called on a success outcome.
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.inner {
            Side::Error(error) => error,
            Side::Success(_) => panic!("called `Either::error()` on a success outcome"),
        }
    }

    /// # Panics
    ///
    /// Panics when called on an error outcome.
    #[track_caller]
    pub fn into_success(self) -> S {
        match self.inner {
            Side::Success(value) => value,
            Side::Error(_) => panic!("called `Either::into_success()` on an error outcome"),
        }
    }

    /// # Panics
    ///
    /// Panics when called on a success outcome.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.inner {
            Side::Error(error) => error,
            Side::Success(_) => panic!("called `Either::into_error()` on a success outcome"),
        }
    }

    pub fn ok(&self) -> Option<&S> {
        match &self.inner {
            Side::Success(value) => Some(value),
            Side::Error(_) => None,
        }
    }

    pub fn err(&self) -> Option<&E> {
        match &self.inner {
            Side::Error(error) => Some(error),
            Side::Success(_) => None,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Either<E, T> {
        match self.inner {
            Side::Success(value) => Either::from_success(f(value)),
            Side::Error(error) => Either::from_error(error),
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Either<F, S> {
        match self.inner {
            Side::Success(value) => Either::from_success(value),
            Side::Error(error) => Either::from_error(f(error)),
        }
    }

    pub fn and_then<T>(self, f: impl FnOnce(S) -> Either<E, T>) -> Either<E, T> {
        match self.inner {
            Side::Success(value) => f(value),
            Side::Error(error) => Either::from_error(error),
        }
    }

    pub fn into_result(self) -> Result<S, E> {
        match self.inner {
            Side::Success(value) => Ok(value),
            Side::Error(error) => Err(error),
        }
    }
}

impl<E, S> From<Result<S, E>> for Either<E, S> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::from_success(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<E, S> From<Either<E, S>> for Result<S, E> {
    fn from(either: Either<E, S>) -> Self {
        either.into_result()
    }
}

impl<E: fmt::Debug, S: fmt::Debug> fmt::Debug for Either<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Side::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Side::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}
