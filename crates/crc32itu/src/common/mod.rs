//! Shared building blocks: table generation, kernels, combine math, reference.

pub mod combine;
pub(crate) mod portable;
pub mod reference;
pub mod tables;
