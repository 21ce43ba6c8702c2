#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;


mod error;
pub use self::error::Error;

mod fraction;
pub use self::fraction::Fraction;

mod ops;
pub use self::ops::{checked_invert, checked_mult, create_half, invert, mult};
