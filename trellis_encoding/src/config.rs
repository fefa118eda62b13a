// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bytemuck::{Pod, Zeroable};

use crate::TessLevels;

/// Per-dispatch configuration shared by every control stage kernel.
///
/// This must be kept in sync with the struct in `shader/shared/config.wgsl`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct ConfigUniform {
    /// Number of patches to process.
    pub n_patches: u32,
    /// Width of one control point, in `f32` components (3 or 4).
    pub position_components: u32,
    pub _pad0: u32,
    pub _pad1: u32,
}

impl ConfigUniform {
    pub fn new(n_patches: u32, position_components: u32) -> Self {
        Self {
            n_patches,
            position_components,
            ..Default::default()
        }
    }
}

/// Host supplied floating point tessellation factors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct FactorUniform {
    pub inner: f32,
    pub outer: f32,
    pub _pad0: u32,
    pub _pad1: u32,
}

impl FactorUniform {
    pub fn new(inner: f32, outer: f32) -> Self {
        Self {
            inner,
            outer,
            ..Default::default()
        }
    }

    pub fn levels(&self) -> TessLevels {
        TessLevels::isotropic(self.inner, self.outer)
    }
}

/// Host supplied integer tessellation factors.
///
/// The integers are the factors themselves; they are converted to `f32` without scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct IntFactorUniform {
    pub inner: i32,
    pub outer: i32,
    pub _pad0: u32,
    pub _pad1: u32,
}

impl IntFactorUniform {
    pub fn new(inner: i32, outer: i32) -> Self {
        Self {
            inner,
            outer,
            ..Default::default()
        }
    }

    // Same rounding as the shader's `f32(i32)` conversion.
    pub fn levels(&self) -> TessLevels {
        TessLevels::isotropic(self.inner as f32, self.outer as f32)
    }
}

// Compile-time layout validation (matches WGSL).
const _: [(); 16] = [(); core::mem::size_of::<ConfigUniform>()];
const _: [(); 16] = [(); core::mem::size_of::<FactorUniform>()];
const _: [(); 16] = [(); core::mem::size_of::<IntFactorUniform>()];

#[cfg(test)]
mod tests {
    use super::{FactorUniform, IntFactorUniform};

    #[test]
    fn int_and_float_factors_agree() {
        let from_int = IntFactorUniform::new(6, 3).levels();
        let from_float = FactorUniform::new(6.0, 3.0).levels();
        assert_eq!(from_int, from_float);
    }

    #[test]
    fn negative_int_factor_is_not_clamped() {
        let levels = IntFactorUniform::new(-2, 0).levels();
        assert_eq!(levels.inner, -2.0);
        assert_eq!(levels.outer, [0.0; 3]);
    }
}
