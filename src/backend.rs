// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::env;
use crate::launch;
use crate::resolve::{self, ResolvedExecutable};
use crate::role::{ServerConfig, ServerRole};
use crate::shim::RunnableServer;
use anyhow::{Result, bail};
use log::info;

/// Production [`RunnableServer`]: the role's application backend run as a
/// child process, with the bind configuration forwarded on its command
/// line. Resolution happens at construction time so a missing backend
/// surfaces as a construction failure, not mid-run.
#[derive(Debug)]
pub struct BackendApp {
    role: ServerRole,
    resolved: ResolvedExecutable,
}

impl BackendApp {
    pub fn new(role: ServerRole) -> Result<Self> {
        let base = resolve::base_dir();
        let resolved = resolve::resolve(&base, &role.launch_target())?;
        Ok(Self { role, resolved })
    }
}

impl RunnableServer for BackendApp {
    fn run(&mut self, config: &ServerConfig) -> Result<()> {
        let target = self.role.launch_target();
        let mut args: Vec<String> = target.args.iter().map(|s| (*s).to_string()).collect();
        args.extend([
            "--host".to_string(),
            config.host.to_string(),
            "--port".to_string(),
            config.port.to_string(),
        ]);
        if config.threaded {
            args.push("--threaded".to_string());
        }
        if !config.use_reloader {
            args.push("--no-reload".to_string());
        }
        // Debug mode travels via FLASK_DEBUG in the sanitized environment.

        let code = launch::run_target(&self.resolved, &args, &env::sanitized_process_env())?;
        if code != 0 {
            bail!("{} backend exited with status {code}", self.role);
        }
        info!("[{}] backend exited cleanly", self.role);
        Ok(())
    }
}
