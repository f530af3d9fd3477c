//! Sealed marker for [`Transport`](super::Transport) implementations.

pub(crate) mod private {
    /// Cannot be named outside this crate, so `Transport` cannot be
    /// implemented there either.
    pub trait Sealed {}
}
