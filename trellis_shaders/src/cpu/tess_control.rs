// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_encoding::{
    ConfigUniform, ControlPoint, FactorUniform, IntFactorUniform, Patch, TessLevels,
    PATCH_VERTICES,
};

use super::CpuBinding;

/// Everything one patch produces: its control points and its levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchOutput<P> {
    pub control_points: Patch<P>,
    pub levels: TessLevels,
}

/// Control point phase of a single invocation.
pub fn control_point_main<P: Copy>(invocation: usize, input: &Patch<P>) -> P {
    input[invocation]
}

/// Runs all invocations of one patch.
///
/// The GPU kernel guards the level write with `invocation == 0`; here that write is hoisted out of
/// the per-invocation loop so it happens exactly once per patch.
pub fn tess_control_patch<P: Copy>(input: &Patch<P>, levels: &TessLevels) -> PatchOutput<P> {
    let control_points = core::array::from_fn(|invocation| control_point_main(invocation, input));
    PatchOutput {
        control_points,
        levels: *levels,
    }
}

pub fn tess_control_main<P: ControlPoint>(
    config: &ConfigUniform,
    levels: &TessLevels,
    input: &[P],
    control_points: &mut [P],
    patch_levels: &mut [TessLevels],
) {
    debug_assert_eq!(
        config.position_components,
        P::COMPONENTS,
        "control point width does not match config"
    );
    for patch_ix in 0..config.n_patches as usize {
        let base = patch_ix * PATCH_VERTICES;
        let patch: Patch<P> = core::array::from_fn(|i| input[base + i]);
        let out = tess_control_patch(&patch, levels);
        control_points[base..base + PATCH_VERTICES].copy_from_slice(&out.control_points);
        patch_levels[patch_ix] = out.levels;
    }
}

/// Parametric policy with floating point factors.
///
/// Resources: config, factors, positions, control points, levels.
pub fn tess_control_float<P: ControlPoint>(_n_wg: u32, resources: &[CpuBinding<'_>]) {
    let config = resources[0].as_typed::<ConfigUniform>();
    let levels = resources[1].as_typed::<FactorUniform>().levels();
    let input = resources[2].as_slice::<P>();
    let mut control_points = resources[3].as_slice_mut::<P>();
    let mut patch_levels = resources[4].as_slice_mut::<TessLevels>();
    tess_control_main::<P>(
        &config,
        &levels,
        &input,
        &mut control_points,
        &mut patch_levels,
    );
}

/// Hardcoded policy. There is no factor binding.
///
/// Resources: config, positions, control points, levels.
pub fn tess_control_fixed<P: ControlPoint>(_n_wg: u32, resources: &[CpuBinding<'_>]) {
    let config = resources[0].as_typed::<ConfigUniform>();
    let input = resources[1].as_slice::<P>();
    let mut control_points = resources[2].as_slice_mut::<P>();
    let mut patch_levels = resources[3].as_slice_mut::<TessLevels>();
    tess_control_main::<P>(
        &config,
        &TessLevels::FIXED,
        &input,
        &mut control_points,
        &mut patch_levels,
    );
}

/// Parametric policy with integer factors.
///
/// Resources: config, factors, positions, control points, levels.
pub fn tess_control_int<P: ControlPoint>(_n_wg: u32, resources: &[CpuBinding<'_>]) {
    let config = resources[0].as_typed::<ConfigUniform>();
    let levels = resources[1].as_typed::<IntFactorUniform>().levels();
    let input = resources[2].as_slice::<P>();
    let mut control_points = resources[3].as_slice_mut::<P>();
    let mut patch_levels = resources[4].as_slice_mut::<TessLevels>();
    tess_control_main::<P>(
        &config,
        &levels,
        &input,
        &mut control_points,
        &mut patch_levels,
    );
}
