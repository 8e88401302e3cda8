//! Unsigned magnitude arithmetic on decimal limb buffers.

pub(crate) mod limb;
pub(crate) mod newton;
pub(crate) mod ntt;
