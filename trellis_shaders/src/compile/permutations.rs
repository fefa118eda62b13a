// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

#[derive(Debug)]
pub struct Permutation {
    /// The new name for the permutation
    pub name: String,
    /// Set of defines to apply for the permutation
    pub defines: Vec<String>,
}

/// Parses a `permutations` file.
///
/// A bare line names a shader source; each following `+ name : define define` line adds one
/// permutation of it. Lines starting with `#` are comments.
pub fn parse(source: &str) -> HashMap<String, Vec<Permutation>> {
    let mut map: HashMap<String, Vec<Permutation>> = HashMap::default();
    let mut current_source: Option<&str> = None;
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(line) = line.strip_prefix('+') {
            let Some(current_source) = current_source else {
                log::warn!("Permutation `{line}` has no shader source, ignoring");
                continue;
            };
            let mut parts = line.split(':').map(|s| s.trim());
            let Some(name) = parts.next().filter(|name| !name.is_empty()) else {
                continue;
            };
            let defines = parts
                .next()
                .map(|list| list.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            map.entry(current_source.to_string())
                .or_default()
                .push(Permutation {
                    name: name.to_string(),
                    defines,
                });
        } else {
            current_source = Some(line);
        }
    }
    map
}
