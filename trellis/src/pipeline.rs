// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_encoding::ControlPoint;

use crate::{Error, FactorPolicy, PatchList, StageOutput, TessControlStage, Uniforms};

/// Options for creating a [`Pipeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Run patches through the control stage. When off, each patch is passed on as a plain
    /// triangle and no levels are produced.
    pub tessellation: bool,
    pub policy: FactorPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            tessellation: true,
            policy: FactorPolicy::default(),
        }
    }
}

/// One draw call's vertex input.
#[derive(Clone, Copy, Debug)]
pub enum Draw<'a, P> {
    Arrays { vertices: &'a [P] },
    Indexed { vertices: &'a [P], indices: &'a [u32] },
}

impl<P: ControlPoint> Draw<'_, P> {
    fn assemble(&self) -> Result<PatchList<P>, Error> {
        match *self {
            Self::Arrays { vertices } => Ok(PatchList::from_vertices(vertices)),
            Self::Indexed { vertices, indices } => PatchList::from_indexed(vertices, indices),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOutput<P> {
    /// Tessellation was on: control points and levels for every patch.
    Patches(StageOutput<P>),
    /// Tessellation was off: the assembled patches as triangles.
    Triangles(PatchList<P>),
}

/// Patch assembly followed by the tessellation control stage.
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<P> {
    options: PipelineOptions,
    stage: TessControlStage<P>,
}

impl<P: ControlPoint> Pipeline<P> {
    pub fn new(options: PipelineOptions) -> Self {
        log::debug!("Creating pipeline: {options:?}");
        Self {
            options,
            stage: TessControlStage::new(options.policy),
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn stage(&self) -> &TessControlStage<P> {
        &self.stage
    }

    pub fn set_tessellation(&mut self, enabled: bool) {
        self.options.tessellation = enabled;
    }

    /// Assembles `draw` into patches and, if tessellation is on, runs the control stage over them
    /// with the levels resolved from `uniforms`.
    pub fn draw(&self, draw: &Draw<'_, P>, uniforms: &Uniforms) -> Result<DrawOutput<P>, Error> {
        let patches = draw.assemble()?;
        if !self.options.tessellation {
            return Ok(DrawOutput::Triangles(patches));
        }
        let bound = self.stage.bind(uniforms)?;
        Ok(DrawOutput::Patches(bound.dispatch(&patches)?))
    }
}
