// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the launcher layer itself. A child that runs and exits
/// non-zero is not an error here; its exit code is surfaced as data.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Every candidate layout was probed under `base` and none existed.
    #[error("no {target} executable found under {}", .base.display())]
    TargetNotFound { target: &'static str, base: PathBuf },

    /// The OS refused to create the child process.
    #[error("failed to spawn {}: {source}", .path.display())]
    SpawnFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The child was spawned but waiting on it failed.
    #[error("failed to wait on {}: {source}", .path.display())]
    WaitFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The shim failed while preparing, constructing or running a server.
    #[error("{role} server startup failed")]
    ServerStartup {
        role: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
