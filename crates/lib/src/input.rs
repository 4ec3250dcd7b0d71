//! Input parser.

mod error;
mod iter;
#[cfg(test)]
mod tests;

use core::fmt;
use core::mem;
use core::ops;
use std::fs::File;
use std::io::Read;
use std::str::from_utf8;

use anyhow::{anyhow, Context};
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError, LineCol};
pub use self::iter::{Iter, Lines};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// The full contents of an input file.
pub struct Source {
    path: &'static str,
    data: &'static [u8],
}

impl Source {
    /// Path the source was loaded from, relative to the crate.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Resolve a byte offset into a line and column.
    pub fn pos(&self, index: usize) -> LineCol {
        let Some(d) = self.data.get(..index) else {
            return LineCol::EMPTY;
        };

        let (line, start) = memchr::memrchr(NL, d)
            .map(|n| (memchr::memchr_iter(NL, d).count(), n + 1))
            .unwrap_or_default();

        LineCol::new(line, index - start)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("path", &self.path)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Read the input file at `read_path`, reporting it as `path`.
///
/// The loaded data is leaked, since it's much easier to deal with than
/// lifetimes and memory for it will be freed once the process exits *anyway*.
pub fn read(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    return inner(path, read_path).with_context(|| anyhow!("{path}"));

    fn inner(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(IStr::new(path, Box::leak(buf.into_boxed_slice())))
    }
}

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The source this string is a view into.
    source: &'static Source,
    /// Remaining data.
    data: &'static [u8],
    /// Index of `data` in the source.
    index: usize,
}

impl IStr {
    /// Construct a new input processor over the whole of `data`.
    pub fn new(path: &'static str, data: &'static [u8]) -> Self {
        let source = Box::leak(Box::new(Source { path, data }));

        Self {
            source,
            data,
            index: 0,
        }
    }

    /// The source being parsed.
    #[inline]
    pub fn source(&self) -> &'static Source {
        self.source
    }

    /// Path of the source being parsed.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.source.path
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Line and column the input string is currently at.
    #[inline]
    pub fn pos(&self) -> LineCol {
        self.source.pos(self.index)
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if input only contains whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over values in the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Construct an iterator over the lines of the current input.
    #[inline]
    pub fn lines(&mut self) -> Lines<'_> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors if there are no more lines.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(self.error(index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there are no more
    /// lines or the line contains nothing which can be parsed.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.next_line() else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Split off the next line, not including the newline.
    #[inline]
    pub fn next_line(&mut self) -> Option<IStr> {
        self.split_once(NL)
    }

    /// Shorthand for using [Ws] to scan newlines.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Consume `bytes` if the input starts with them.
    #[inline]
    pub fn eat(&mut self, bytes: &[u8]) -> bool {
        if !self.data.starts_with(bytes) {
            return false;
        }

        self.advance(bytes.len());
        true
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(s);
            return Ok(None);
        }

        let Some(mut word) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut word)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some(value))
    }

    /// Construct an error starting at `index` and spanning up until the
    /// current position.
    #[inline]
    pub fn error(&self, index: usize, kind: ErrorKind) -> IStrError {
        IStrError::new(self.source, index..self.index.max(index), kind)
    }

    /// Split once at the given byte or until the end of string.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            let data = mem::take(&mut self.data);
            self.index += data.len();
            return Some(self.with(data, index));
        };

        let head = self.slice(0..at)?;
        self.advance(at + 1);
        Some(head)
    }

    /// Find the first index from `n` matching the predicate, or the length of
    /// the input.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index += n;
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;
        Some(self.with(self.data.get(range)?, index))
    }

    #[inline]
    fn with(&self, data: &'static [u8], index: usize) -> IStr {
        IStr {
            source: self.source,
            data,
            index,
        }
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when the value is missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returns `Ok(None)` if there is nothing left to
    /// parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(p.error(index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn error_kind() -> ErrorKind {
                    ErrorKind::ExpectedInteger
                }

                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let start = p.index + p.find(0, |b| !b.is_ascii_whitespace());

                    let Some(word) = p.try_next_word::<&str>()? else {
                        return Ok(None);
                    };

                    match str::parse(word) {
                        Ok(n) => Ok(Some(n)),
                        Err(..) => Err(p.error(start, ErrorKind::NotInteger(word))),
                    }
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let this = *p;
        p.advance(p.len());
        Ok(Some(this))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(p.error(index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl FromInput for &'static BStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

/// Parse a value out of a single line.
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut line) = p.next_line() else {
            return Ok(None);
        };

        Ok(Some(Self(line.next()?)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());
        let lines = memchr::memchr_iter(NL, &p.data[..n]).count();
        p.advance(n);
        Ok(Some(Self(lines)))
    }
}

impl<T, const N: usize> FromInput for arrayvec::ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = arrayvec::ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(p.error(index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}
