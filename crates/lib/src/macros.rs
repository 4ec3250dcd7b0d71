/// Helper macro to implement [FromInput][crate::input::FromInput] by
/// converting from another parseable value.
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let index = p.index();

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::input::ErrorKind> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(kind) => Err(p.error(index, kind)),
                }
            }
        }
    };
}

/// Load an input file from the `inputs` directory of the calling crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::input::read(
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        )
    };
}

/// Path to an answers file in the `answers` directory of the calling crate.
#[macro_export]
macro_rules! answers {
    ($path:literal) => {
        (
            concat!("answers/", $path),
            ::std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/answers/", $path)),
        )
    };
}
