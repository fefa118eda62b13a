// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_encoding::{ControlPoint, Patch, PATCH_VERTICES};

use crate::Error;

/// Control points grouped into triangular patches.
///
/// Stored flat, patch after patch, which is the layout the stage kernels bind.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchList<P> {
    points: Vec<P>,
}

impl<P> Default for PatchList<P> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<P: ControlPoint> PatchList<P> {
    /// Groups consecutive vertices into patches, like a non-indexed patch draw.
    ///
    /// Trailing vertices that don't fill a patch are dropped.
    pub fn from_vertices(vertices: &[P]) -> Self {
        let full = vertices.len() - vertices.len() % PATCH_VERTICES;
        warn_incomplete("vertices", vertices.len());
        Self {
            points: vertices[..full].to_vec(),
        }
    }

    /// Gathers vertices by index, three indices per patch, like an indexed patch draw.
    ///
    /// Trailing indices that don't fill a patch are dropped.
    pub fn from_indexed(vertices: &[P], indices: &[u32]) -> Result<Self, Error> {
        let full = indices.len() - indices.len() % PATCH_VERTICES;
        warn_incomplete("indices", indices.len());
        let points = indices[..full]
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                vertices
                    .get(index as usize)
                    .copied()
                    .ok_or(Error::IndexOutOfBounds {
                        index,
                        position,
                        vertex_count: vertices.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn from_patches(patches: impl IntoIterator<Item = Patch<P>>) -> Self {
        Self {
            points: patches.into_iter().flatten().collect(),
        }
    }

    /// Number of patches.
    pub fn len(&self) -> usize {
        self.points.len() / PATCH_VERTICES
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All control points, patch after patch.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn patch(&self, ix: usize) -> Option<Patch<P>> {
        let base = ix.checked_mul(PATCH_VERTICES)?;
        let end = base.checked_add(PATCH_VERTICES)?;
        let points = self.points.get(base..end)?;
        Some(core::array::from_fn(|i| points[i]))
    }

    pub fn iter(&self) -> impl Iterator<Item = Patch<P>> + '_ {
        self.points
            .chunks_exact(PATCH_VERTICES)
            .map(|points| core::array::from_fn(|i| points[i]))
    }
}

fn warn_incomplete(what: &str, count: usize) {
    let leftover = count % PATCH_VERTICES;
    if leftover != 0 {
        log::warn!(
            "Patch draw with {count} {what} leaves an incomplete patch; dropping the last {leftover}"
        );
    }
}
