/// Numeric conversion helpers.
///
/// This module provides the conversions between exact integers and `f64`
/// used by the evaluator when integer arithmetic meets a real operand, plus
/// the size bound on exact integer results.
pub mod num;
