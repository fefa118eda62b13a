// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bytemuck::{Pod, Zeroable};

/// Inner level written by the hardcoded policy.
pub const FIXED_INNER_LEVEL: f32 = 3.0;

/// Outer level written by the hardcoded policy, on every edge.
pub const FIXED_OUTER_LEVEL: f32 = 2.0;

/// Tessellation levels of one triangular patch.
///
/// `outer[i]` controls subdivision of the edge opposite control point `i`, `inner` controls the
/// interior. Values are handed to the fixed-function tessellator as is; clamping and rounding
/// happen there.
///
/// This must be kept in sync with the struct in `shader/shared/levels.wgsl`
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct TessLevels {
    pub outer: [f32; 3],
    pub inner: f32,
}

impl TessLevels {
    /// Levels of the hardcoded policy.
    pub const FIXED: Self = Self::isotropic(FIXED_INNER_LEVEL, FIXED_OUTER_LEVEL);

    /// Broadcasts `outer` to all three edges.
    pub const fn isotropic(inner: f32, outer: f32) -> Self {
        Self {
            outer: [outer; 3],
            inner,
        }
    }

    /// Returns true if all three outer levels are bit-identical.
    ///
    /// Compares bits rather than values so a broadcast NaN still counts as isotropic.
    pub fn is_isotropic(&self) -> bool {
        let [a, b, c] = self.outer.map(f32::to_bits);
        a == b && b == c
    }
}

const _: [(); 16] = [(); core::mem::size_of::<TessLevels>()];
const _: [(); 4] = [(); core::mem::align_of::<TessLevels>()];

#[cfg(test)]
mod tests {
    use super::TessLevels;

    #[test]
    fn fixed_levels() {
        assert_eq!(TessLevels::FIXED.inner, 3.0);
        assert_eq!(TessLevels::FIXED.outer, [2.0; 3]);
    }

    #[test]
    fn isotropic_broadcasts_outer() {
        let levels = TessLevels::isotropic(5.0, 4.0);
        assert_eq!(levels.inner, 5.0);
        assert_eq!(levels.outer, [4.0, 4.0, 4.0]);
        assert!(levels.is_isotropic());
    }

    #[test]
    fn nan_broadcast_is_isotropic() {
        let levels = TessLevels::isotropic(1.0, f32::NAN);
        assert!(levels.is_isotropic());
    }

    #[test]
    fn uneven_outer_is_not_isotropic() {
        let levels = TessLevels {
            outer: [1.0, 10.0, 10.0],
            inner: 10.0,
        };
        assert!(!levels.is_isotropic());
    }
}
