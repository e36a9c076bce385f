// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Entrypoint shim for the vendor API: same bootstrap as the primary API
//! shim, bound to 0.0.0.0:5001.

use log::{Level, error, info};
use wifimgr_launcher::backend::BackendApp;
use wifimgr_launcher::role::ServerRole;
use wifimgr_launcher::shim;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if let Err(e) = simple_logger::init_with_level(Level::Info) {
        eprintln!("wifimgr-vendor-api-server: failed to init logging: {e}");
        return 1;
    }
    info!(
        "wifimgr-vendor-api-server starting (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let role = ServerRole::VendorApi;
    match shim::run_server(role, || BackendApp::new(role)) {
        Ok(()) => {
            info!("[{role}] server shut down cleanly");
            0
        }
        Err(e) => {
            error!("{:#}", anyhow::Error::from(e));
            1
        }
    }
}
