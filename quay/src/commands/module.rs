//! Ansible binary module entry point.
//!
//! Ansible runs a binary module with the path of a JSON args file and reads
//! one JSON object from stdout. Nothing else may be written to stdout.

use crate::context::AppContext;
use libquay::{ErrorLog, ModuleKind, ModuleParams, Outcome, QuayError, run_module};
use std::fs;
use std::path::Path;

/// Handle `quay module <NAME> <ARGS_FILE>`, returning the process exit code.
pub async fn handle_module(ctx: &AppContext, name: &str, args_file: &Path) -> i32 {
    let outcome = match prepare(name, args_file) {
        Ok((kind, params)) => run_module(kind, &params, &ctx.config).await,
        Err(e) => Outcome::failure(e.to_string(), ErrorLog::new(), None),
    };

    println!("{}", render(&outcome));
    outcome.exit_code()
}

/// Resolves the module and parses its args file before any network call.
pub fn prepare(name: &str, args_file: &Path) -> libquay::Result<(ModuleKind, ModuleParams)> {
    let kind: ModuleKind = name.parse()?;
    let raw = fs::read_to_string(args_file).map_err(|e| {
        QuayError::params(format!(
            "cannot read args file {}: {}",
            args_file.display(),
            e
        ))
    })?;
    let params = ModuleParams::from_json(&raw)?;
    params.tag_query().validate()?;

    Ok((kind, params))
}

/// Serializes an outcome as the single-line JSON Ansible expects.
pub fn render(outcome: &Outcome) -> String {
    serde_json::to_string(outcome).unwrap_or_else(|e| {
        serde_json::json!({
            "failed": true,
            "changed": false,
            "msg": format!("Failed to serialize module result: {}", e),
        })
        .to_string()
    })
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
