// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;
use std::fmt;

use crate::{Error, FactorPolicy};

/// Name of the inner factor uniform.
pub const INNER_FACTOR: &str = "innerFactor";

/// Name of the outer factor uniform, broadcast to all three edges.
pub const OUTER_FACTOR: &str = "outerFactor";

/// Scalar type of a uniform value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniformKind {
    Float,
    Int,
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => f.write_str("f32"),
            Self::Int => f.write_str("i32"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
}

impl UniformValue {
    pub fn kind(self) -> UniformKind {
        match self {
            Self::Float(_) => UniformKind::Float,
            Self::Int(_) => UniformKind::Int,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// Uniform values set by the host for one draw, by name.
///
/// Values are checked against the stage's policy when the stage is bound, not when they are set.
#[derive(Clone, Debug, Default)]
pub struct Uniforms {
    values: HashMap<String, UniformValue>,
}

impl Uniforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`INNER_FACTOR`] and [`OUTER_FACTOR`].
    pub fn with_factors(inner: impl Into<UniformValue>, outer: impl Into<UniformValue>) -> Self {
        let mut uniforms = Self::new();
        uniforms.set(INNER_FACTOR, inner).set(OUTER_FACTOR, outer);
        uniforms
    }

    /// Sets `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    fn mismatch(
        name: &'static str,
        policy: FactorPolicy,
        expected: UniformKind,
        found: UniformValue,
    ) -> Error {
        Error::UniformTypeMismatch {
            name,
            policy,
            expected,
            found: found.kind(),
        }
    }

    pub(crate) fn float(&self, name: &'static str, policy: FactorPolicy) -> Result<f32, Error> {
        match self.get(name) {
            Some(UniformValue::Float(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, policy, UniformKind::Float, other)),
            None => Err(Error::MissingUniform(name)),
        }
    }

    pub(crate) fn int(&self, name: &'static str, policy: FactorPolicy) -> Result<i32, Error> {
        match self.get(name) {
            Some(UniformValue::Int(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, policy, UniformKind::Int, other)),
            None => Err(Error::MissingUniform(name)),
        }
    }
}
