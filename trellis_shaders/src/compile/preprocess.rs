// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

/// Reads every `shared/*.wgsl` file under `shader_dir`, keyed by file stem.
pub fn get_imports(shader_dir: &Path) -> io::Result<HashMap<String, String>> {
    let mut imports = HashMap::new();
    let imports_dir = shader_dir.join("shared");
    for entry in imports_dir.read_dir()? {
        let path = entry?.path();
        if path.extension().is_none_or(|e| e != "wgsl") {
            continue;
        }
        if let Some(import_name) = path.file_stem().and_then(|s| s.to_str()) {
            imports.insert(import_name.to_owned(), fs::read_to_string(&path)?);
        }
    }
    Ok(imports)
}

struct StackItem {
    active: bool,
    else_passed: bool,
}

/// Resolves `#ifdef`, `#ifndef`, `#else`, `#endif` and `#import` directives.
///
/// Directives must be the first non-whitespace item on their line. Problems are logged and the
/// offending directive is ignored.
pub fn preprocess(
    input: &str,
    shader_name: &str,
    defines: &HashSet<String>,
    imports: &HashMap<String, String>,
) -> String {
    let mut output = String::with_capacity(input.len());
    let mut stack: Vec<StackItem> = vec![];
    for (line_number, line) in input.lines().enumerate() {
        let line_number = line_number + 1;
        let trimmed = line.trim_start();
        let Some(directive_start) = trimmed.strip_prefix('#') else {
            if stack.iter().all(|item| item.active) {
                output.push_str(line);
                output.push('\n');
            }
            continue;
        };
        let directive_len = directive_start
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(directive_start.len());
        let (directive, argument) = directive_start.split_at(directive_len);
        let argument = argument.trim();
        match directive {
            def_test @ ("ifdef" | "ifndef") => {
                let exists = defines.contains(argument);
                let mode = def_test == "ifdef";
                stack.push(StackItem {
                    active: mode == exists,
                    else_passed: false,
                });
            }
            "else" => {
                if let Some(item) = stack.last_mut() {
                    if item.else_passed {
                        log::warn!(
                            "Second else for same ifdef/ifndef (line {line_number} of {shader_name}.wgsl); \
                             ignoring second else"
                        );
                    } else {
                        item.else_passed = true;
                        item.active = !item.active;
                    }
                }
                if !argument.is_empty() {
                    log::warn!(
                        "#else directives don't take an argument. `{argument}` will not \
                         be in output (line {line_number} of {shader_name}.wgsl)"
                    );
                }
            }
            "endif" => {
                if stack.pop().is_none() {
                    log::warn!("Mismatched endif (line {line_number} of {shader_name}.wgsl)");
                }
                if !argument.is_empty() && !argument.starts_with("//") {
                    log::warn!(
                        "#endif directives don't take an argument. `{argument}` will \
                         not be in output (line {line_number} of {shader_name}.wgsl)"
                    );
                }
            }
            "import" => {
                if !stack.iter().all(|item| item.active) {
                    continue;
                }
                let import_name = argument
                    .split(|c: char| !(c == '_' || c.is_alphanumeric()))
                    .next()
                    .unwrap_or_default();
                if import_name.is_empty() {
                    log::warn!(
                        "#import needs a non_whitespace argument (line {line_number} of {shader_name}.wgsl)"
                    );
                } else if let Some(import) = imports.get(import_name) {
                    output.push_str(&preprocess(import, shader_name, defines, imports));
                } else {
                    log::warn!(
                        "Unknown import `{import_name}` (line {line_number} of {shader_name}.wgsl)"
                    );
                }
            }
            val => {
                log::warn!(
                    "Unknown preprocessor directive `{val}` (line {line_number} of {shader_name}.wgsl)"
                );
            }
        }
    }
    if !stack.is_empty() {
        log::warn!("Unterminated ifdef/ifndef in {shader_name}.wgsl");
    }
    output
}
