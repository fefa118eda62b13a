// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::marker::PhantomData;

use trellis_encoding::{
    ConfigUniform, ControlPoint, FactorUniform, IntFactorUniform, Patch, Position3, Position4,
    TessLevels, PATCH_VERTICES,
};
use trellis_shaders::cpu::{tess_control_patch, CpuBinding, PatchOutput};

use crate::{
    Error, FactorPolicy, PatchList, UniformKind, Uniforms, INNER_FACTOR, OUTER_FACTOR,
};

/// A tessellation control stage for patches of three `P` control points.
///
/// The factor policy is fixed at construction. Binding the stage to a draw's [`Uniforms`]
/// resolves the levels once, and every patch processed by the resulting [`BoundStage`] gets
/// exactly those levels.
#[derive(Clone, Copy, Debug)]
pub struct TessControlStage<P> {
    policy: FactorPolicy,
    _point: PhantomData<P>,
}

impl TessControlStage<Position3> {
    /// Parametric `f32` factors, 3 component control points.
    pub fn parametric() -> Self {
        Self::new(FactorPolicy::ParametricFloat)
    }

    /// Inner level 3 and outer level 2, 3 component control points.
    pub fn hardcoded() -> Self {
        Self::new(FactorPolicy::Hardcoded)
    }
}

impl TessControlStage<Position4> {
    /// Parametric `i32` factors, 4 component control points.
    pub fn parametric_int() -> Self {
        Self::new(FactorPolicy::ParametricInt)
    }
}

impl<P: ControlPoint> TessControlStage<P> {
    pub fn new(policy: FactorPolicy) -> Self {
        log::debug!(
            "Creating tessellation control stage: {policy:?}, {} component control points",
            P::COMPONENTS
        );
        Self {
            policy,
            _point: PhantomData,
        }
    }

    pub fn policy(&self) -> FactorPolicy {
        self.policy
    }

    /// Resolves this draw's tessellation levels.
    ///
    /// The hardcoded policy ignores `uniforms` entirely. The parametric policies fail if either
    /// factor is unset or holds the wrong scalar type.
    pub fn bind(&self, uniforms: &Uniforms) -> Result<BoundStage<P>, Error> {
        let factors = match self.policy.uniform_kind() {
            Some(UniformKind::Float) => FactorBinding::Float(FactorUniform::new(
                uniforms.float(INNER_FACTOR, self.policy)?,
                uniforms.float(OUTER_FACTOR, self.policy)?,
            )),
            Some(UniformKind::Int) => FactorBinding::Int(IntFactorUniform::new(
                uniforms.int(INNER_FACTOR, self.policy)?,
                uniforms.int(OUTER_FACTOR, self.policy)?,
            )),
            None => FactorBinding::Fixed,
        };
        let levels = factors.levels();
        log::debug!(
            "Bound {:?} stage: inner {}, outer {}",
            self.policy,
            levels.inner,
            levels.outer[0]
        );
        Ok(BoundStage {
            policy: self.policy,
            factors,
            levels,
            _point: PhantomData,
        })
    }

    /// Builds and validates the WGSL permutation implementing this stage.
    #[cfg(feature = "wgsl")]
    pub fn shader(&self) -> Result<trellis_shaders::compile::ShaderInfo, Error> {
        let no_permutation = || Error::NoPermutation {
            policy: self.policy,
            components: P::COMPONENTS,
        };
        let name = self
            .policy
            .permutation_name(P::COMPONENTS)
            .ok_or_else(no_permutation)?;
        let mut shaders = trellis_shaders::compile::ShaderInfo::from_default()?;
        shaders.remove(name).ok_or_else(no_permutation)
    }
}

/// Factor uniform contents, as bound to the kernel.
#[derive(Clone, Copy, Debug)]
enum FactorBinding {
    Float(FactorUniform),
    Int(IntFactorUniform),
    Fixed,
}

impl FactorBinding {
    fn levels(&self) -> TessLevels {
        match self {
            Self::Float(factors) => factors.levels(),
            Self::Int(factors) => factors.levels(),
            Self::Fixed => TessLevels::FIXED,
        }
    }

    /// `None` when the kernel has no factor binding.
    fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Float(factors) => Some(bytemuck::bytes_of(factors)),
            Self::Int(factors) => Some(bytemuck::bytes_of(factors)),
            Self::Fixed => None,
        }
    }
}

/// A stage with its levels resolved for one draw.
#[derive(Clone, Copy, Debug)]
pub struct BoundStage<P> {
    policy: FactorPolicy,
    factors: FactorBinding,
    levels: TessLevels,
    _point: PhantomData<P>,
}

impl<P: ControlPoint> BoundStage<P> {
    /// The levels every patch of this draw receives.
    pub fn levels(&self) -> TessLevels {
        self.levels
    }

    /// Processes one patch: each control point is forwarded to the same slot and the levels are
    /// written once.
    pub fn process_patch(&self, input: &Patch<P>) -> PatchOutput<P> {
        tess_control_patch(input, &self.levels)
    }

    /// Processes every patch of `patches` through the policy's CPU kernel, with the same buffer
    /// bindings as the WGSL permutation.
    pub fn dispatch(&self, patches: &PatchList<P>) -> Result<StageOutput<P>, Error> {
        let n_patches = patches.len();
        let n_wg = u32::try_from(n_patches).map_err(|_| Error::TooManyPatches(n_patches))?;
        if n_patches == 0 {
            return Ok(StageOutput::default());
        }
        log::trace!("Dispatching {:?} stage over {n_patches} patches", self.policy);

        let config = ConfigUniform::new(n_wg, P::COMPONENTS);
        let control_points = RefCell::new(vec![0_u8; n_patches * PATCH_VERTICES * size_of::<P>()]);
        let levels = RefCell::new(
            bytemuck::cast_slice::<TessLevels, u8>(&vec![TessLevels::default(); n_patches])
                .to_vec(),
        );

        let mut bindings = vec![CpuBinding::Buffer(bytemuck::bytes_of(&config))];
        if let Some(factors) = self.factors.bytes() {
            bindings.push(CpuBinding::Buffer(factors));
        }
        bindings.extend([
            CpuBinding::Buffer(bytemuck::cast_slice(patches.points())),
            CpuBinding::BufferRW(&control_points),
            CpuBinding::BufferRW(&levels),
        ]);
        (self.policy.cpu_kernel::<P>())(n_wg, &bindings);

        Ok(StageOutput {
            control_points: bytemuck::pod_collect_to_vec::<u8, P>(&control_points.into_inner()),
            levels: bytemuck::pod_collect_to_vec::<u8, TessLevels>(&levels.into_inner()),
        })
    }
}

/// Output of a dispatch: control points patch after patch, and one set of levels per patch.
#[derive(Clone, Debug, PartialEq)]
pub struct StageOutput<P> {
    pub control_points: Vec<P>,
    pub levels: Vec<TessLevels>,
}

impl<P> Default for StageOutput<P> {
    fn default() -> Self {
        Self {
            control_points: Vec::new(),
            levels: Vec::new(),
        }
    }
}

impl<P: ControlPoint> StageOutput<P> {
    /// Number of patches.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn patch(&self, ix: usize) -> Option<PatchOutput<P>> {
        let levels = *self.levels.get(ix)?;
        let base = ix * PATCH_VERTICES;
        let points = self.control_points.get(base..base + PATCH_VERTICES)?;
        Some(PatchOutput {
            control_points: core::array::from_fn(|i| points[i]),
            levels,
        })
    }
}
