// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws through a full pipeline.

use trellis::{
    Draw, DrawOutput, Error, FactorPolicy, Pipeline, PipelineOptions, Position3, Position4,
    TessLevels, Uniforms,
};

const QUAD: [Position3; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];

#[test]
fn indexed_draw_produces_levels_per_patch() {
    let pipeline = Pipeline::<Position3>::new(PipelineOptions::default());
    let draw = Draw::Indexed {
        vertices: &QUAD,
        indices: &[0, 1, 2, 0, 2, 3],
    };
    let out = pipeline
        .draw(&draw, &Uniforms::with_factors(5.0_f32, 4.0_f32))
        .unwrap();
    let DrawOutput::Patches(out) = out else {
        panic!("expected patches, got {out:?}");
    };
    assert_eq!(out.len(), 2);
    assert_eq!(out.patch(1).unwrap().control_points, [QUAD[0], QUAD[2], QUAD[3]]);
    assert_eq!(out.levels, vec![TessLevels::isotropic(5.0, 4.0); 2]);
}

#[test]
fn arrays_draw_drops_incomplete_patch() {
    let pipeline = Pipeline::<Position3>::new(PipelineOptions {
        policy: FactorPolicy::Hardcoded,
        ..Default::default()
    });
    let out = pipeline
        .draw(&Draw::Arrays { vertices: &QUAD }, &Uniforms::new())
        .unwrap();
    let DrawOutput::Patches(out) = out else {
        panic!("expected patches, got {out:?}");
    };
    assert_eq!(out.len(), 1);
    assert_eq!(out.control_points, QUAD[..3]);
    assert_eq!(out.levels, [TessLevels::FIXED]);
}

#[test]
fn toggling_tessellation_off_passes_triangles() {
    let mut pipeline = Pipeline::<Position4>::new(PipelineOptions {
        policy: FactorPolicy::ParametricInt,
        ..Default::default()
    });
    let vertices = QUAD.map(|[x, y, z]| [x, y, z, 1.0]);
    let draw = Draw::Arrays {
        vertices: &vertices[..3],
    };
    let uniforms = Uniforms::with_factors(2, 2);

    pipeline.set_tessellation(false);
    assert!(!pipeline.options().tessellation);
    let DrawOutput::Triangles(triangles) = pipeline.draw(&draw, &uniforms).unwrap() else {
        panic!("expected triangles");
    };
    assert_eq!(triangles.points(), &vertices[..3]);

    pipeline.set_tessellation(true);
    let out = pipeline.draw(&draw, &uniforms).unwrap();
    assert!(matches!(out, DrawOutput::Patches(ref p) if p.levels == [TessLevels::isotropic(2.0, 2.0)]));
}

#[test]
fn missing_factor_fails_the_draw() {
    let pipeline = Pipeline::<Position3>::new(PipelineOptions::default());
    let err = pipeline
        .draw(&Draw::Arrays { vertices: &QUAD }, &Uniforms::new())
        .unwrap_err();
    assert!(matches!(err, Error::MissingUniform(_)));
}

#[test]
fn bad_index_fails_before_binding() {
    let pipeline = Pipeline::<Position3>::new(PipelineOptions::default());
    let draw = Draw::Indexed {
        vertices: &QUAD,
        indices: &[0, 1, 4],
    };
    let err = pipeline.draw(&draw, &Uniforms::new()).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 4, .. }));
}

#[test]
fn empty_draw_yields_no_patches() {
    let pipeline = Pipeline::<Position3>::new(PipelineOptions::default());
    let out = pipeline
        .draw(
            &Draw::Arrays { vertices: &[] },
            &Uniforms::with_factors(1.0_f32, 1.0_f32),
        )
        .unwrap();
    assert!(matches!(out, DrawOutput::Patches(ref p) if p.is_empty()));
}
