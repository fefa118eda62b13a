// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime preprocessing, validation and reflection of the WGSL kernels.

use naga::{
    front::wgsl,
    valid::{Capabilities, ModuleInfo, ValidationError, ValidationFlags},
    AddressSpace, Module, StorageAccess, WithSpan,
};

use std::{
    collections::{HashMap, HashSet},
    fs, io,
    path::{Path, PathBuf},
};

pub mod permutations;
pub mod preprocess;

use crate::types::{BindType, BindingInfo};

/// Shader sources built into the crate, keyed by name.
const SOURCES: &[(&str, &str)] = &[(
    "tess_control",
    include_str!("../../shader/tess_control.wgsl"),
)];

/// Importable snippets built into the crate, keyed by name.
const IMPORTS: &[(&str, &str)] = &[
    ("config", include_str!("../../shader/shared/config.wgsl")),
    ("levels", include_str!("../../shader/shared/levels.wgsl")),
];

const PERMUTATIONS: &str = include_str!("../../shader/permutations");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse WGSL: {0}")]
    Parse(#[from] wgsl::ParseError),
    #[error("WGSL validation failed: {0}")]
    Validate(#[from] WithSpan<ValidationError>),
    #[error("entry point not found")]
    EntryPointNotFound,
    #[error("failed to read shader sources: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct ShaderInfo {
    pub source: String,
    pub module: Module,
    pub module_info: ModuleInfo,
    pub workgroup_size: [u32; 3],
    pub bindings: Vec<BindingInfo>,
}

/// Directory holding the WGSL sources, for hot reloading with [`ShaderInfo::from_dir`].
pub fn shader_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("shader")
}

impl ShaderInfo {
    pub fn new(source: String, entry_point: &str) -> Result<Self, Error> {
        let module = wgsl::parse_str(&source)?;
        let module_info = naga::valid::Validator::new(
            ValidationFlags::all() & !ValidationFlags::CONTROL_FLOW_UNIFORMITY,
            Capabilities::all(),
        )
        .validate(&module)?;
        let (entry_index, entry) = module
            .entry_points
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name.as_str() == entry_point)
            .ok_or(Error::EntryPointNotFound)?;
        let mut bindings = vec![];
        let entry_info = module_info.get_entry_point(entry_index);
        for (var_handle, var) in module.global_variables.iter() {
            if entry_info[var_handle].is_empty() {
                continue;
            }
            let Some(binding) = &var.binding else {
                continue;
            };
            let ty = match var.space {
                AddressSpace::Uniform => BindType::Uniform,
                AddressSpace::Storage { access } if access.contains(StorageAccess::STORE) => {
                    BindType::Buffer
                }
                _ => BindType::BufReadOnly,
            };
            bindings.push(BindingInfo {
                name: var.name.clone(),
                location: (binding.group, binding.binding),
                ty,
            });
        }
        bindings.sort_by_key(|res| res.location);
        let workgroup_size = entry.workgroup_size;
        Ok(Self {
            source,
            module,
            module_info,
            workgroup_size,
            bindings,
        })
    }

    /// Builds every permutation of the sources compiled into the crate.
    pub fn from_default() -> Result<HashMap<String, Self>, Error> {
        let imports = IMPORTS
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()))
            .collect();
        let sources = SOURCES
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()));
        Self::build(sources, PERMUTATIONS, &imports)
    }

    /// Builds every permutation of the sources in `shader_dir`, read at runtime.
    pub fn from_dir(shader_dir: impl AsRef<Path>) -> Result<HashMap<String, Self>, Error> {
        let shader_dir = shader_dir.as_ref();
        let permutations = match fs::read_to_string(shader_dir.join("permutations")) {
            Ok(permutations) => permutations,
            // Without a permutations file every shader builds once, with no defines.
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let imports = preprocess::get_imports(shader_dir)?;
        let mut sources = vec![];
        for entry in shader_dir.read_dir()? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "wgsl") {
                continue;
            }
            if let Some(shader_name) = path.file_stem().and_then(|s| s.to_str()) {
                sources.push((shader_name.to_string(), fs::read_to_string(&path)?));
            }
        }
        Self::build(sources, &permutations, &imports)
    }

    fn build(
        sources: impl IntoIterator<Item = (String, String)>,
        permutations: &str,
        imports: &HashMap<String, String>,
    ) -> Result<HashMap<String, Self>, Error> {
        let permutation_map = permutations::parse(permutations);
        let mut info = HashMap::default();
        for (shader_name, contents) in sources {
            if let Some(permutations) = permutation_map.get(&shader_name) {
                for permutation in permutations {
                    let defines: HashSet<String> = permutation.defines.iter().cloned().collect();
                    let source =
                        preprocess::preprocess(&contents, &permutation.name, &defines, imports);
                    let shader_info = Self::new(source, crate::ENTRY_POINT)?;
                    info.insert(permutation.name.clone(), shader_info);
                }
            } else {
                let source =
                    preprocess::preprocess(&contents, &shader_name, &HashSet::new(), imports);
                let shader_info = Self::new(source, crate::ENTRY_POINT)?;
                info.insert(shader_name, shader_info);
            }
        }
        Ok(info)
    }
}
