//! Procedural macros for puzzle solutions.

use proc_macro::TokenStream;

mod entry;

/// Turn a solution function into the `main` of a puzzle binary.
///
/// ```ignore
/// #[entry(input = "d01.txt", answers = "d01.txt", labels = ["Part 1:", "Part 2:"], expect = (11, 31))]
/// fn main(input: IStr) -> Result<(u64, u64)> {
///     /* .. */
/// }
/// ```
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
