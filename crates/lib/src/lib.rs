pub mod cli;
pub mod input;
mod macros;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, Nl, Ws};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use ::macros::entry;
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}
