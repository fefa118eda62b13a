// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checks that every WGSL permutation parses, validates and reflects the expected bindings.

#![cfg(feature = "compile")]

use std::fs;
use std::path::PathBuf;

use trellis_shaders::compile::{shader_dir, Error, ShaderInfo};
use trellis_shaders::{BindType, WORKGROUP_SIZE};

const PERMUTATIONS: [&str; 6] = [
    "tess_control_float3",
    "tess_control_float4",
    "tess_control_fixed3",
    "tess_control_fixed4",
    "tess_control_int3",
    "tess_control_int4",
];

#[test]
fn all_permutations_validate() {
    let shaders = ShaderInfo::from_default().unwrap();
    assert_eq!(shaders.len(), PERMUTATIONS.len());
    for name in PERMUTATIONS {
        let info = &shaders[name];
        assert_eq!(info.workgroup_size, WORKGROUP_SIZE, "{name}");
    }
}

#[test]
fn parametric_permutations_bind_factors() {
    let shaders = ShaderInfo::from_default().unwrap();
    for name in ["tess_control_float3", "tess_control_int4"] {
        let bindings = &shaders[name].bindings;
        let tys = bindings.iter().map(|b| b.ty).collect::<Vec<_>>();
        assert_eq!(
            tys,
            [
                BindType::Uniform,
                BindType::Uniform,
                BindType::BufReadOnly,
                BindType::Buffer,
                BindType::Buffer,
            ],
            "{name}"
        );
        let slots = bindings.iter().map(|b| b.location.1).collect::<Vec<_>>();
        assert_eq!(slots, [0, 1, 2, 3, 4], "{name}");
    }
}

#[test]
fn fixed_permutations_have_no_factor_binding() {
    let shaders = ShaderInfo::from_default().unwrap();
    for name in ["tess_control_fixed3", "tess_control_fixed4"] {
        let info = &shaders[name];
        let slots = info.bindings.iter().map(|b| b.location.1).collect::<Vec<_>>();
        assert_eq!(slots, [0, 2, 3, 4], "{name}");
        assert!(info.source.contains("3.0"));
        assert!(!info.source.contains("var<uniform> factors"));
    }
}

#[test]
fn width_only_changes_position_type() {
    let shaders = ShaderInfo::from_default().unwrap();
    assert!(shaders["tess_control_int4"]
        .source
        .contains("alias Position = vec4<f32>;"));
    assert!(!shaders["tess_control_int3"].source.contains("vec4<f32>"));
    assert!(shaders["tess_control_int3"].source.contains("f32(factors.inner)"));
}

#[test]
fn shader_dir_matches_built_in_sources() {
    let from_disk = ShaderInfo::from_dir(shader_dir()).unwrap();
    let built_in = ShaderInfo::from_default().unwrap();
    assert_eq!(from_disk.len(), built_in.len());
    for (name, info) in &built_in {
        assert_eq!(from_disk[name].source, info.source, "{name}");
    }
}

/// Copies the shader sources to a fresh directory, without the permutations file.
fn scratch_shader_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trellis_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("shared")).unwrap();
    let src = shader_dir();
    fs::copy(src.join("tess_control.wgsl"), dir.join("tess_control.wgsl")).unwrap();
    for import in ["config", "levels"] {
        let file = format!("shared/{import}.wgsl");
        fs::copy(src.join(&file), dir.join(&file)).unwrap();
    }
    dir
}

#[test]
fn missing_permutations_file_builds_plain_shader() {
    let dir = scratch_shader_dir("no_permutations");
    let shaders = ShaderInfo::from_dir(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();
    assert_eq!(shaders.len(), 1);
    assert_eq!(shaders["tess_control"].bindings.len(), 5);
}

#[test]
fn unreadable_permutations_file_is_an_error() {
    let dir = scratch_shader_dir("bad_permutations");
    // A directory where the file should be fails to read with something other than NotFound.
    fs::create_dir(dir.join("permutations")).unwrap();
    let result = ShaderInfo::from_dir(&dir);
    fs::remove_dir_all(&dir).unwrap();
    assert!(matches!(result, Err(Error::Io(_))));
}
