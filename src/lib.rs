// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Launcher layer for the Wi-Fi manager.
//!
//! Three binaries share this library: the main-application launcher
//! (spawn-and-wait supervisor) and the two API server shims. The pieces are
//! deliberately stateless; each binary performs a single resolve, sanitize,
//! run cycle and exits.

pub mod backend;
pub mod env;
pub mod error;
pub mod launch;
pub mod resolve;
pub mod role;
pub mod shim;
