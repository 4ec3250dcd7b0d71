use crate::input::{IStr, IStrError};

/// Used in macros to associate the input path with an error.
///
/// Parse errors already carry their own position, so they're passed through
/// as-is.
#[doc(hidden)]
pub fn error_context<E>(input: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    if error.downcast_ref::<IStrError>().is_some() {
        return error;
    }

    error.context(input.path())
}
