use core::fmt;
use core::ops::Range;

use crate::input::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedInteger,
    ExpectedLine,
    ExpectedTuple(usize),
    UnexpectedEof,
    ArrayCapacity(usize),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedInteger => write!(f, "expected integer"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A zero-based line and column combination, displayed one-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Zero-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    source: &'static Source,
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub(crate) fn new(source: &'static Source, span: Range<usize>, kind: ErrorKind) -> Self {
        Self { source, span, kind }
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte span of the error in the input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Line and column where the error starts.
    #[inline]
    pub fn pos(&self) -> LineCol {
        self.source.pos(self.span.start)
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{path}:{pos}: {kind}",
            path = self.source.path(),
            pos = self.pos(),
            kind = self.kind
        )
    }
}

impl std::error::Error for IStrError {}
