// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WGSL permutations selected by configured stages.

#![cfg(feature = "wgsl")]

use trellis::{FactorPolicy, Position3, Position4, TessControlStage};

#[test]
fn every_stage_has_a_valid_permutation() {
    for policy in [
        FactorPolicy::ParametricFloat,
        FactorPolicy::Hardcoded,
        FactorPolicy::ParametricInt,
    ] {
        let narrow = TessControlStage::<Position3>::new(policy).shader().unwrap();
        let wide = TessControlStage::<Position4>::new(policy).shader().unwrap();
        assert_eq!(narrow.workgroup_size, trellis_shaders::WORKGROUP_SIZE);
        assert_eq!(wide.workgroup_size, trellis_shaders::WORKGROUP_SIZE);
    }
}

#[test]
fn hardcoded_shader_binds_no_factors() {
    let shader = TessControlStage::hardcoded().shader().unwrap();
    assert_eq!(shader.bindings.len(), 4);
    assert!(shader.source.contains("3.0"));

    let shader = TessControlStage::parametric_int().shader().unwrap();
    assert_eq!(shader.bindings.len(), 5);
    assert!(shader.source.contains("vec4<f32>"));
}
