//! Sealed trait marker for Transport implementations.

pub(crate) mod private {
    /// Sealed trait marker.
    ///
    /// Cannot be implemented outside this crate.
    pub trait Sealed {}
}
