//! Public models.
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule. The public module re-exports the types callers
//! need and provides a thin [`twine_core::Model`] adapter over the core.

pub mod cooling;
