// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::resolve::LaunchTarget;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// The fixed server identities. Each owns a port and a backend target;
/// neither is configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerRole {
    PrimaryApi,
    VendorApi,
}

impl ServerRole {
    pub const fn name(self) -> &'static str {
        match self {
            ServerRole::PrimaryApi => "api",
            ServerRole::VendorApi => "vendor-api",
        }
    }

    pub const fn launch_target(self) -> LaunchTarget {
        match self {
            ServerRole::PrimaryApi => LaunchTarget::api_server(),
            ServerRole::VendorApi => LaunchTarget::vendor_api_server(),
        }
    }

    /// Per-role bind configuration. Constructed once at startup, never
    /// mutated; the ports are deployment contract.
    pub const fn config(self) -> ServerConfig {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: match self {
                ServerRole::PrimaryApi => 5000,
                ServerRole::VendorApi => 5001,
            },
            debug: false,
            use_reloader: false,
            threaded: true,
        }
    }
}

impl fmt::Display for ServerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a runnable server is told about its bind and concurrency mode.
/// `threaded` is a capability flag passed through to the server, not
/// something this layer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub use_reloader: bool,
    pub threaded: bool,
}
