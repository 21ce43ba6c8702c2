use alloc::format;

use crate::error::ErrorKind;
use crate::{Error, Fraction, checked_invert, checked_mult, invert, mult};

#[test]
fn checked_mult_matches() -> Result<(), Error> {
    let a = Fraction::new(2, 3);
    let b = Fraction::new(5, 7);
    assert_eq!(checked_mult(a, b)?, mult(a, b));
    assert_eq!(checked_mult(a, b)?, Fraction::new(10, 21));
    Ok(())
}

#[test]
fn checked_mult_zero_denominator() -> Result<(), Error> {
    let a = Fraction::new(1, 0);
    let b = Fraction::new(3, 4);
    assert_eq!(checked_mult(a, b)?, Fraction::new(3, 0));
    Ok(())
}

#[test]
fn checked_mult_overflow() {
    let lhs = Fraction::new(i32::MAX, 1);
    let rhs = Fraction::new(2, 1);

    let Err(e) = checked_mult(lhs, rhs) else {
        panic!("expected overflow");
    };

    assert_eq!(e.kind(), ErrorKind::Overflow { lhs, rhs });
}

#[test]
fn checked_mult_denominator_overflow() {
    let lhs = Fraction::new(1, i32::MIN);
    let rhs = Fraction::new(1, -1);

    let Err(e) = checked_mult(lhs, rhs) else {
        panic!("expected overflow");
    };

    assert_eq!(e.kind(), ErrorKind::Overflow { lhs, rhs });
}

#[test]
fn checked_invert_matches() -> Result<(), Error> {
    let f = Fraction::new(-3, 8);
    assert_eq!(checked_invert(f)?, invert(f));
    assert_eq!(checked_invert(f)?, Fraction::new(8, -3));
    Ok(())
}

#[test]
fn checked_invert_zero_numerator() {
    let fraction = Fraction::new(0, 5);

    let Err(e) = checked_invert(fraction) else {
        panic!("expected zero denominator");
    };

    assert_eq!(e.kind(), ErrorKind::ZeroDenominator { fraction });
}

#[test]
fn display() {
    let Err(e) = checked_invert(Fraction::new(0, 5)) else {
        panic!("expected zero denominator");
    };

    assert_eq!(format!("{e}"), "Inverting 0/5 produces a zero denominator");

    let Err(e) = checked_mult(Fraction::new(i32::MAX, 1), Fraction::new(2, 3)) else {
        panic!("expected overflow");
    };

    assert_eq!(
        format!("{e}"),
        format!("Multiplying {}/1 by 2/3 overflows", i32::MAX)
    );
}
