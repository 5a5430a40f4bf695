//! Error type.

use crate::Group;

/// Result type with the `ecmath` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Arithmetic errors.
///
/// Every operation is deterministic, so none of these are transient: retrying
/// with the same operands fails the same way.
#[derive(thiserror::Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An operand lacks the private scalar or public point the operation
    /// needs, or carries a value outside its group.
    #[error("operand is missing a required component or is out of range")]
    InvalidOperand,

    /// Two operands belong to different curves.
    #[error("operands belong to different groups: {left} and {right}")]
    GroupMismatch {
        /// Group of the left-hand operand.
        left: Group,
        /// Group of the right-hand operand.
        right: Group,
    },

    /// Raw scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The scalar has no inverse modulo the group order.
    #[error("scalar is not invertible modulo the group order")]
    NotInvertible,

    /// The point does not lie on the curve, or its encoding is malformed.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// Re-deriving a public point from an in-range scalar failed.
    ///
    /// This is an internal invariant violation rather than bad input.
    #[error("failed to derive public point from scalar")]
    DerivationError,

    /// The curve name, alias or OID is not recognized, or support for that
    /// curve is not compiled in.
    #[error("unknown or unsupported curve")]
    UnknownCurve,
}
