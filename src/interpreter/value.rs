/// The core value type.
///
/// Declares the `Value` enum: exact integers and reals, with the conversion
/// from one to the other.
pub mod core;
