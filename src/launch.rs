// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::LauncherError;
use crate::resolve::{ExecutableKind, ResolvedExecutable};
use log::info;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Interpreter used for source-form targets.
pub const PYTHON: &str = "python3";

/// Spawn the resolved target and block until it exits, returning the
/// child's exit code. This is a pass-through supervisor: stdio is
/// inherited, nothing is captured, and a non-zero exit is data for the
/// caller, not an error. The child's environment is replaced wholesale by
/// `env` (the sanitized map), never inherited raw. One spawn-and-wait
/// cycle is the entire contract: no retry, no restart, no timeout.
pub fn run_target<I, S>(
    resolved: &ResolvedExecutable,
    args: I,
    env: &HashMap<String, String>,
) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = match resolved.kind {
        ExecutableKind::InterpretedScript => {
            // The interpreter starts fine and exits 2 when the script is
            // gone, which would masquerade as a child exit; fail the spawn
            // up front instead.
            if !resolved.path.is_file() {
                return Err(LauncherError::SpawnFailure {
                    path: resolved.path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "script not found"),
                });
            }
            let mut cmd = Command::new(PYTHON);
            cmd.arg(&resolved.path);
            cmd
        }
        ExecutableKind::NativeBinary => Command::new(&resolved.path),
    };
    cmd.args(args).env_clear().envs(env);

    // Attribute a spawn refusal to the program actually exec'd: the
    // interpreter for scripts, the binary itself otherwise.
    let program = PathBuf::from(cmd.get_program());
    let mut child = cmd.spawn().map_err(|source| LauncherError::SpawnFailure {
        path: program,
        source,
    })?;
    info!(
        "spawned (pid={}, cmd={})",
        child.id(),
        resolved.path.display()
    );

    let status = child.wait().map_err(|source| LauncherError::WaitFailure {
        path: resolved.path.clone(),
        source,
    })?;
    info!("[{}] exited with {status}", resolved.path.display());

    // Signal-terminated children carry no exit code; surface plain failure.
    Ok(status.code().unwrap_or(1))
}
