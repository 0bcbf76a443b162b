use dashu::{
    base::{BitTest, UnsignedAbs},
    integer::IBig,
};

/// Largest magnitude, in bits, an integer result may reach.
///
/// Past this the number could never be shown in full nor converted to a
/// real, and building it would only cost time and memory.
pub const MAX_INTEGER_BITS: usize = 1 << 16;

/// Converts an integer to the nearest `f64`.
///
/// ## Returns
/// - `Some(f64)`: The correctly rounded value.
/// - `None`: If the integer is too large for a finite `f64`.
///
/// ## Example
/// ```
/// use calctk::util::num::ibig_to_f64;
/// use dashu::integer::IBig;
///
/// assert_eq!(ibig_to_f64(&IBig::from(42)), Some(42.0));
/// assert_eq!(ibig_to_f64(&IBig::from(10).pow(400)), None);
/// ```
#[must_use]
pub fn ibig_to_f64(value: &IBig) -> Option<f64> {
    if magnitude_bits(value) > 1024 {
        return None;
    }
    let real = value.to_f64().value();
    real.is_finite().then_some(real)
}

/// Number of bits in the magnitude of an integer; zero for `0`.
///
/// ## Example
/// ```
/// use calctk::util::num::magnitude_bits;
/// use dashu::integer::IBig;
///
/// assert_eq!(magnitude_bits(&IBig::from(0)), 0);
/// assert_eq!(magnitude_bits(&IBig::from(-255)), 8);
/// ```
#[must_use]
pub fn magnitude_bits(value: &IBig) -> usize {
    value.clone().unsigned_abs().bit_len()
}

/// Converts a non-negative integer exponent to `usize` for `pow`.
///
/// ## Example
/// ```
/// use calctk::util::num::ibig_to_usize;
/// use dashu::integer::IBig;
///
/// assert_eq!(ibig_to_usize(&IBig::from(10)), Some(10));
/// assert_eq!(ibig_to_usize(&IBig::from(-1)), None);
/// ```
#[must_use]
pub fn ibig_to_usize(value: &IBig) -> Option<usize> {
    value.clone().try_into().ok()
}

/// Whether an integer is divisible by two.
#[must_use]
pub fn is_even(value: &IBig) -> bool {
    value % IBig::from(2) == IBig::ZERO
}
