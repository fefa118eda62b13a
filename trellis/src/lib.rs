// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis is a tessellation control stage for triangular patches.
//!
//! For every patch of three control points it forwards the control points unchanged and emits
//! one set of tessellation levels (one inner level, three outer levels) for the fixed-function
//! tessellator. Where the levels come from is a [`FactorPolicy`], chosen once when the stage is
//! built:
//!
//! - [`FactorPolicy::ParametricFloat`]: `f32` uniforms supplied by the host for each draw.
//! - [`FactorPolicy::Hardcoded`]: inner level 3, outer level 2, no uniforms.
//! - [`FactorPolicy::ParametricInt`]: `i32` uniforms supplied by the host for each draw.
//!
//! The control point width (3 or 4 components) is the stage's type parameter and never affects
//! the levels.
//!
//! ```
//! use trellis::{TessControlStage, Uniforms};
//!
//! let stage = TessControlStage::parametric();
//! let bound = stage.bind(&Uniforms::with_factors(5.0_f32, 4.0_f32))?;
//! let out = bound.process_patch(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
//! assert_eq!(out.levels.inner, 5.0);
//! assert_eq!(out.levels.outer, [4.0; 3]);
//! # Ok::<(), trellis::Error>(())
//! ```

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

mod assembly;
mod pipeline;
mod policy;
mod stage;
mod uniforms;

use thiserror::Error;

pub use assembly::PatchList;
pub use pipeline::{Draw, DrawOutput, Pipeline, PipelineOptions};
pub use policy::FactorPolicy;
pub use stage::{BoundStage, StageOutput, TessControlStage};
pub use uniforms::{UniformKind, UniformValue, Uniforms, INNER_FACTOR, OUTER_FACTOR};

pub use trellis_encoding::{
    ControlPoint, Patch, Position3, Position4, TessLevels, PATCH_VERTICES,
};
pub use trellis_shaders::cpu::PatchOutput;

/// Errors that can occur in Trellis.
///
/// None of these can happen while a patch is processed; they come from binding uniforms,
/// assembling patches or looking up shaders.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A parametric policy needs a uniform the host did not set.
    #[error("uniform `{0}` is not set")]
    MissingUniform(&'static str),
    /// A uniform holds a value of the wrong type for the stage's policy.
    #[error("uniform `{name}` holds an {found} value but the {policy:?} policy needs {expected}")]
    UniformTypeMismatch {
        name: &'static str,
        policy: FactorPolicy,
        expected: UniformKind,
        found: UniformKind,
    },
    /// An index buffer entry points past the end of the vertex buffer.
    #[error("index {index} at position {position} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        index: u32,
        position: usize,
        vertex_count: usize,
    },
    /// The patch count does not fit in a dispatch.
    #[error("{0} patches exceed the maximum dispatch size")]
    TooManyPatches(usize),
    /// There is no WGSL permutation for this policy and control point width.
    #[error("no WGSL permutation for {policy:?} with {components} component control points")]
    NoPermutation {
        policy: FactorPolicy,
        components: u32,
    },
    /// Preprocessing or validating a WGSL permutation failed.
    #[cfg(feature = "wgsl")]
    #[error("shader compilation failed: {0}")]
    Shader(#[from] trellis_shaders::compile::Error),
}
