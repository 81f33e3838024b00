use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A counterpart to [`Result::unwrap`] for types implementing [`Error`], which panics with
    /// the message of the error itself rather than wrapping it in unwrap boilerplate.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
