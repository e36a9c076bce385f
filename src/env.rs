// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashMap;

/// Namespace used by the web framework's auto-reloader to mark its
/// re-executed child (`WERKZEUG_RUN_MAIN`, `WERKZEUG_SERVER_FD`, ...).
/// A server that inherits any of these believes it is the reloader's second
/// process and skips its own socket setup, so the whole namespace is
/// scrubbed. Prefix match, not substring: the namespace is framework-owned,
/// unrelated configuration cannot collide with it.
pub const RELOADER_PREFIX: &str = "WERKZEUG_";

/// Keys overwritten with deployment-mandated values regardless of what the
/// parent environment carried.
pub const FORCED_VARS: &[(&str, &str)] = &[
    // Child processes are Python; pin their text I/O to UTF-8.
    ("PYTHONIOENCODING", "utf-8"),
    // Debug mode stays off in every deployment layout.
    ("FLASK_DEBUG", "0"),
];

/// Produce a sanitized copy of `env`: reloader-marker keys removed, forced
/// keys overwritten. Pure and idempotent; the real process environment is
/// only touched by [`apply`].
pub fn sanitize(env: &HashMap<String, String>) -> HashMap<String, String> {
    let mut out: HashMap<String, String> = env
        .iter()
        .filter(|(k, _)| !k.starts_with(RELOADER_PREFIX))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (k, v) in FORCED_VARS {
        out.insert((*k).to_string(), (*v).to_string());
    }
    out
}

/// Snapshot of the current process environment, sanitized.
pub fn sanitized_process_env() -> HashMap<String, String> {
    sanitize(&std::env::vars().collect())
}

/// Install `env` as the process environment: keys absent from the map are
/// removed, the rest are set. This is the single mutation boundary; callers
/// must invoke it before spawning any threads.
pub fn apply(env: &HashMap<String, String>) {
    let current: Vec<String> = std::env::vars().map(|(k, _)| k).collect();
    for key in current {
        if !env.contains_key(&key) {
            // SAFETY: called from single-threaded startup code, before any
            // other thread can read the environment concurrently.
            unsafe { std::env::remove_var(&key) };
        }
    }
    for (key, value) in env {
        // SAFETY: same single-threaded startup context as above.
        unsafe { std::env::set_var(key, value) };
    }
}
