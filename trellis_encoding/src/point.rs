// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bytemuck::Pod;

/// Number of control points in every patch (`layout(vertices = 3)`).
pub const PATCH_VERTICES: usize = 3;

/// A three component position.
pub type Position3 = [f32; 3];

/// A four component (homogeneous) position.
pub type Position4 = [f32; 4];

/// The control points of one triangular patch, in submission order.
pub type Patch<P> = [P; PATCH_VERTICES];

/// A control point position the stage can carry through unchanged.
///
/// The stage never looks inside a control point; it only copies it. Implementors must therefore
/// be plain data so that a copy is bit-identical to its source.
pub trait ControlPoint: Pod + PartialEq + core::fmt::Debug + Send + Sync {
    /// Number of `f32` components, as written into [`crate::ConfigUniform`].
    const COMPONENTS: u32;
}

impl ControlPoint for Position3 {
    const COMPONENTS: u32 = 3;
}

impl ControlPoint for Position4 {
    const COMPONENTS: u32 = 4;
}

// Must match the WGSL `Position` struct/alias strides.
const _: [(); 12] = [(); core::mem::size_of::<Position3>()];
const _: [(); 16] = [(); core::mem::size_of::<Position4>()];
