// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GPU-visible data layouts shared by the Trellis tessellation control stage.
//!
//! Every type in this crate is `#[repr(C)]` and [`bytemuck::Pod`], so the same values can be
//! bound to the CPU kernels in `trellis_shaders::cpu` and uploaded unchanged to the WGSL kernels.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod config;
mod levels;
mod point;

pub use config::{ConfigUniform, FactorUniform, IntFactorUniform};
pub use levels::{TessLevels, FIXED_INNER_LEVEL, FIXED_OUTER_LEVEL};
pub use point::{ControlPoint, Patch, Position3, Position4, PATCH_VERTICES};
