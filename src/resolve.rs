// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::LauncherError;
use log::debug;
use std::path::{Path, PathBuf};

/// Overrides the deployment base directory (tests, packaging).
pub const BASE_DIR_VAR: &str = "WIFIMGR_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableKind {
    /// A `.py` source script, run under the bundled interpreter.
    InterpretedScript,
    /// Anything else: a frozen distribution or installed binary.
    NativeBinary,
}

/// A logical thing to launch: name, candidate layouts, fixed arguments.
/// Built fresh for every launch attempt and discarded after the child exits.
#[derive(Debug, Clone, Copy)]
pub struct LaunchTarget {
    pub name: &'static str,
    /// Relative to the base directory, in priority order.
    pub candidates: &'static [&'static str],
    pub args: &'static [&'static str],
}

impl LaunchTarget {
    /// The main application, forced into service-manager mode.
    pub const fn service_manager() -> Self {
        Self {
            name: "wifi-manager",
            candidates: &[
                "wifi_manager.py",
                "dist/wifi-manager/wifi-manager",
                "bin/wifi-manager",
            ],
            args: &["--service-manager-only"],
        }
    }

    /// Backend of the primary web API.
    pub const fn api_server() -> Self {
        Self {
            name: "api-server",
            candidates: &[
                "api_server.py",
                "dist/api-server/api-server",
                "bin/api-server",
            ],
            args: &[],
        }
    }

    /// Backend of the vendor API.
    pub const fn vendor_api_server() -> Self {
        Self {
            name: "vendor-api-server",
            candidates: &[
                "vendor_api_server.py",
                "dist/vendor-api-server/vendor-api-server",
                "bin/vendor-api-server",
            ],
            args: &[],
        }
    }
}

#[derive(Debug)]
pub struct ResolvedExecutable {
    pub path: PathBuf,
    pub kind: ExecutableKind,
}

/// Deployment base directory: `WIFIMGR_HOME` when set, otherwise the
/// directory holding the running executable, otherwise the current dir.
pub fn base_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(BASE_DIR_VAR) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Probe the target's candidate layouts under `base` in priority order:
/// source checkout first, then bundled distribution, then installed
/// location. The ordering is a contract callers rely on; a checkout wins
/// over a stale installed copy. Existence is checked only at resolution
/// time; the spawn itself is the real test (TOCTOU accepted).
pub fn resolve(
    base: &Path,
    target: &LaunchTarget,
) -> Result<ResolvedExecutable, LauncherError> {
    for rel in target.candidates {
        let path = base.join(rel);
        if path.is_file() {
            debug!("[{}] resolved to {}", target.name, path.display());
            return Ok(ResolvedExecutable {
                kind: kind_of(&path),
                path,
            });
        }
        debug!("[{}] candidate missing: {}", target.name, path.display());
    }
    Err(LauncherError::TargetNotFound {
        target: target.name,
        base: base.to_path_buf(),
    })
}

fn kind_of(path: &Path) -> ExecutableKind {
    if path.extension().is_some_and(|ext| ext == "py") {
        ExecutableKind::InterpretedScript
    } else {
        ExecutableKind::NativeBinary
    }
}
