// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding metadata reflected from the WGSL kernels.

/// The type of resource that will be bound to a slot in a shader.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BindType {
    /// A storage buffer with read/write access.
    Buffer,
    /// A storage buffer with read only access.
    BufReadOnly,
    /// A small buffer bound as uniforms.
    Uniform,
}

#[derive(Clone, Debug)]
pub struct BindingInfo {
    pub name: Option<String>,
    /// `(group, binding)`.
    pub location: (u32, u32),
    pub ty: BindType,
}
