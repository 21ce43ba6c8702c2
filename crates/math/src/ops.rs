use crate::Fraction;
use crate::error::{Error, ErrorKind};

/// Construct the fraction `1/2`.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// assert_eq!(math::create_half(), Fraction::new(1, 2));
/// ```
#[inline]
pub const fn create_half() -> Fraction {
    Fraction::new(1, 2)
}

/// Multiply two fractions.
///
/// Numerators and denominators are multiplied separately and the result is
/// not reduced. Products which do not fit in an `i32` wrap around, use
/// [`checked_mult`] to detect this.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// let a = Fraction::new(2, 3);
/// let b = Fraction::new(3, 4);
/// assert_eq!(math::mult(a, b), Fraction::new(6, 12));
/// ```
#[inline]
pub const fn mult(f1: Fraction, f2: Fraction) -> Fraction {
    Fraction::new(f1.num.wrapping_mul(f2.num), f1.den.wrapping_mul(f2.den))
}

/// Invert a fraction by swapping its numerator and denominator.
///
/// Inverting a fraction with a zero numerator produces a zero denominator,
/// use [`checked_invert`] to reject it instead.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// assert_eq!(math::invert(Fraction::new(1, 2)), Fraction::new(2, 1));
/// assert_eq!(math::invert(Fraction::new(0, 5)), Fraction::new(5, 0));
/// ```
#[inline]
pub const fn invert(f: Fraction) -> Fraction {
    Fraction::new(f.den, f.num)
}

/// Multiply two fractions, failing if either product overflows.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// let a = Fraction::new(2, 3);
/// let b = Fraction::new(5, 7);
/// assert_eq!(math::checked_mult(a, b)?, Fraction::new(10, 21));
///
/// let big = Fraction::new(i32::MAX, 1);
/// assert!(math::checked_mult(big, Fraction::new(2, 1)).is_err());
/// # Ok::<_, math::Error>(())
/// ```
pub fn checked_mult(f1: Fraction, f2: Fraction) -> Result<Fraction, Error> {
    let (Some(num), Some(den)) = (f1.num.checked_mul(f2.num), f1.den.checked_mul(f2.den)) else {
        tracing::trace!(?f1, ?f2, "Multiplication overflowed");
        return Err(Error::from(ErrorKind::Overflow { lhs: f1, rhs: f2 }));
    };

    Ok(Fraction::new(num, den))
}

/// Invert a fraction, failing if the result would have a zero denominator.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// assert_eq!(math::checked_invert(Fraction::new(1, 2))?, Fraction::new(2, 1));
/// assert!(math::checked_invert(Fraction::new(0, 5)).is_err());
/// # Ok::<_, math::Error>(())
/// ```
pub fn checked_invert(f: Fraction) -> Result<Fraction, Error> {
    if f.num == 0 {
        tracing::trace!(?f, "Inverting zero numerator");
        return Err(Error::from(ErrorKind::ZeroDenominator { fraction: f }));
    }

    Ok(invert(f))
}
