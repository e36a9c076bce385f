// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::env;
use crate::error::LauncherError;
use crate::resolve;
use crate::role::{ServerConfig, ServerRole};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt;

/// A blocking server: given a bind configuration, runs until shutdown and
/// reports failure through the result. This is the only seam to the
/// application layer; anything satisfying it can be swapped in.
pub trait RunnableServer {
    fn run(&mut self, config: &ServerConfig) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Clean,
    Crash,
}

/// One-way lifecycle of a shim invocation. No transition retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimState {
    Initializing,
    /// Working directory fixed, sanitized environment installed.
    EnvironmentPrepared,
    ServerConstructed,
    Running,
    Terminated(Termination),
}

impl ShimState {
    pub(crate) fn can_transition_to(self, next: ShimState) -> bool {
        use ShimState::*;
        matches!(
            (self, next),
            (Initializing, EnvironmentPrepared)
                | (EnvironmentPrepared, ServerConstructed)
                | (ServerConstructed, Running)
                | (Running, Terminated(Termination::Clean))
                // A failure terminates from whichever setup state it hit.
                | (
                    Initializing | EnvironmentPrepared | ServerConstructed | Running,
                    Terminated(Termination::Crash),
                )
        )
    }
}

impl fmt::Display for ShimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimState::Initializing => write!(f, "initializing"),
            ShimState::EnvironmentPrepared => write!(f, "environment-prepared"),
            ShimState::ServerConstructed => write!(f, "server-constructed"),
            ShimState::Running => write!(f, "running"),
            ShimState::Terminated(Termination::Clean) => write!(f, "terminated(clean)"),
            ShimState::Terminated(Termination::Crash) => write!(f, "terminated(crash)"),
        }
    }
}

fn advance(state: &mut ShimState, next: ShimState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid shim transition {state} -> {next}"
    );
    debug!("shim state: {state} -> {next}");
    *state = next;
}

/// Bootstrap and run one server role: fix the working directory to the
/// deployment base, install the sanitized environment (single mutation
/// boundary, before any thread exists), construct the server through
/// `factory`, then block on its `run` with the role's fixed config.
///
/// Unrecovered-fatal policy: any failure along the way comes back as
/// `ServerStartup` and the caller is expected to exit non-zero.
pub fn run_server<S, F>(role: ServerRole, factory: F) -> Result<(), LauncherError>
where
    S: RunnableServer,
    F: FnOnce() -> Result<S>,
{
    let mut state = ShimState::Initializing;
    match bootstrap(role, factory, &mut state) {
        Ok(()) => {
            advance(&mut state, ShimState::Terminated(Termination::Clean));
            Ok(())
        }
        Err(source) => {
            advance(&mut state, ShimState::Terminated(Termination::Crash));
            Err(LauncherError::ServerStartup {
                role: role.name(),
                source,
            })
        }
    }
}

fn bootstrap<S, F>(role: ServerRole, factory: F, state: &mut ShimState) -> Result<()>
where
    S: RunnableServer,
    F: FnOnce() -> Result<S>,
{
    let base = resolve::base_dir();
    std::env::set_current_dir(&base)
        .with_context(|| format!("changing working directory to {}", base.display()))?;

    let mut env_map = env::sanitized_process_env();
    // The application package lives one level above the deployment dir;
    // make sure the interpreter can import it from anywhere.
    if let Some(parent) = base.parent() {
        let entry = parent.to_string_lossy();
        let value = match env_map.get("PYTHONPATH") {
            Some(existing) if !existing.is_empty() => format!("{entry}:{existing}"),
            _ => entry.into_owned(),
        };
        env_map.insert("PYTHONPATH".to_string(), value);
    }
    env::apply(&env_map);
    advance(state, ShimState::EnvironmentPrepared);
    info!("[{role}] environment prepared (base {})", base.display());

    let mut server = factory().context("constructing server")?;
    advance(state, ShimState::ServerConstructed);

    let config = role.config();
    info!("[{role}] listening on {}:{}", config.host, config.port);
    advance(state, ShimState::Running);
    server.run(&config).context("running server")?;
    Ok(())
}
