// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Manifest read when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "Starkdeploy.toml";

/// Seconds between receipt polls.
pub const DEFAULT_POLL_INTERVAL_SECS: &str = "1";

/// Seconds to wait for a transaction before giving up.
pub const DEFAULT_TIMEOUT_SECS: &str = "300";
