use core::ops::Mul;

/// A fraction defined by its numerator and denominator.
///
/// Fractions are never reduced and the denominator is not validated, so a
/// zero denominator is representable.
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// let a = Fraction::new(6, 12);
/// let b = Fraction::new(1, 2);
/// assert_eq!(a, a);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Fraction {
    pub num: i32,
    pub den: i32,
}

impl Fraction {
    /// Construct a new fraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use math::Fraction;
    ///
    /// let f = Fraction::new(3, 0);
    /// assert_eq!(f.num, 3);
    /// assert_eq!(f.den, 0);
    /// ```
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }
}

/// Multiplication through [`mult`][crate::mult].
///
/// # Examples
///
/// ```
/// use math::Fraction;
///
/// assert_eq!(Fraction::new(2, 3) * Fraction::new(3, 4), Fraction::new(6, 12));
/// ```
impl Mul for Fraction {
    type Output = Fraction;

    #[inline]
    fn mul(self, rhs: Fraction) -> Self::Output {
        crate::mult(self, rhs)
    }
}
