use core::error;
use core::fmt;

use crate::Fraction;

/// Error raised by the checked fraction operations.
#[non_exhaustive]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Create a new `Error` with the specified kind.
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of error.
    #[inline]
    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum ErrorKind {
    Overflow { lhs: Fraction, rhs: Fraction },
    ZeroDenominator { fraction: Fraction },
}

#[cfg(test)]
impl PartialEq<ErrorKind> for &ErrorKind {
    #[inline]
    fn eq(&self, other: &ErrorKind) -> bool {
        **self == *other
    }
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Overflow { lhs, rhs } => write!(
                f,
                "Multiplying {}/{} by {}/{} overflows",
                lhs.num, lhs.den, rhs.num, rhs.den
            ),
            ErrorKind::ZeroDenominator { fraction } => write!(
                f,
                "Inverting {}/{} produces a zero denominator",
                fraction.num, fraction.den
            ),
        }
    }
}
