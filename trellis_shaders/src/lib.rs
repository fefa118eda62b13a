// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementations of the Trellis tessellation control stage.
//!
//! The stage exists in two forms:
//!
//! - [`cpu`] kernels, which run the stage over byte buffers exactly as a GPU dispatch would, and
//!   expose the per-patch function the kernels are built from.
//! - WGSL compute kernels under `shader/`, one permutation per factor policy and control point
//!   width. WebGPU has no tessellation control stage, so these run as a compute pass with one
//!   workgroup per patch. The [`compile`] module preprocesses, validates and reflects them.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs, reason = "We have many as-yet undocumented items.")]

mod types;

#[cfg(feature = "compile")]
pub mod compile;
#[cfg(feature = "cpu")]
pub mod cpu;

pub use types::{BindType, BindingInfo};

/// Name of the WGSL entry point of every kernel.
pub const ENTRY_POINT: &str = "main";

/// Workgroup size of the WGSL kernels: one invocation per output control point.
pub const WORKGROUP_SIZE: [u32; 3] = [3, 1, 1];
