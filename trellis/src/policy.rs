// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_encoding::ControlPoint;
use trellis_shaders::cpu::{tess_control_fixed, tess_control_float, tess_control_int, CpuKernel};

use crate::UniformKind;

/// Where a stage's tessellation levels come from.
///
/// Chosen once when a [`TessControlStage`](crate::TessControlStage) is built. Every policy
/// broadcasts one outer level to all three edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FactorPolicy {
    /// Inner and outer levels are `f32` uniforms set by the host for each draw.
    #[default]
    ParametricFloat,
    /// Inner level 3 and outer level 2, with no uniforms.
    ///
    /// Mostly useful as a fixed reference when debugging the parametric policies.
    Hardcoded,
    /// Inner and outer levels are `i32` uniforms set by the host for each draw, converted to
    /// `f32` unscaled.
    ParametricInt,
}

impl FactorPolicy {
    /// Scalar type of the factor uniforms, or `None` if the policy reads no uniforms.
    pub fn uniform_kind(self) -> Option<UniformKind> {
        match self {
            Self::ParametricFloat => Some(UniformKind::Float),
            Self::Hardcoded => None,
            Self::ParametricInt => Some(UniformKind::Int),
        }
    }

    /// Name of the WGSL permutation implementing this policy for `components` wide control
    /// points.
    pub fn permutation_name(self, components: u32) -> Option<&'static str> {
        let name = match (self, components) {
            (Self::ParametricFloat, 3) => "tess_control_float3",
            (Self::ParametricFloat, 4) => "tess_control_float4",
            (Self::Hardcoded, 3) => "tess_control_fixed3",
            (Self::Hardcoded, 4) => "tess_control_fixed4",
            (Self::ParametricInt, 3) => "tess_control_int3",
            (Self::ParametricInt, 4) => "tess_control_int4",
            _ => return None,
        };
        Some(name)
    }

    pub(crate) fn cpu_kernel<P: ControlPoint>(self) -> CpuKernel {
        match self {
            Self::ParametricFloat => tess_control_float::<P>,
            Self::Hardcoded => tess_control_fixed::<P>,
            Self::ParametricInt => tess_control_int::<P>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FactorPolicy;
    use crate::UniformKind;

    #[test]
    fn permutation_names() {
        assert_eq!(
            FactorPolicy::ParametricInt.permutation_name(4),
            Some("tess_control_int4")
        );
        assert_eq!(
            FactorPolicy::Hardcoded.permutation_name(3),
            Some("tess_control_fixed3")
        );
        assert_eq!(FactorPolicy::ParametricFloat.permutation_name(2), None);
    }

    #[test]
    fn hardcoded_reads_no_uniforms() {
        assert_eq!(FactorPolicy::Hardcoded.uniform_kind(), None);
        assert_eq!(
            FactorPolicy::ParametricFloat.uniform_kind(),
            Some(UniformKind::Float)
        );
    }
}
