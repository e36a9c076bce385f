// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Launches the main application in service-manager mode and blocks on it.
//! The child's exit code is this process's exit code; resolution or spawn
//! failure exits 1.

use log::{Level, error, info};
use wifimgr_launcher::resolve::{self, LaunchTarget};
use wifimgr_launcher::{env, launch};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if let Err(e) = simple_logger::init_with_level(Level::Info) {
        eprintln!("wifimgr-launcher: failed to init logging: {e}");
        return 1;
    }
    info!(
        "wifimgr-launcher starting (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let base = resolve::base_dir();
    let target = LaunchTarget::service_manager();
    let outcome = resolve::resolve(&base, &target)
        .and_then(|resolved| launch::run_target(&resolved, target.args, &env::sanitized_process_env()));

    match outcome {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}
