//! Integration test support for Frontino.
//!
//! The actual tests live in `tests/` and talk to a running server over HTTP.
//! They are `#[ignore]`d by default because they need:
//!
//! - A migrated and seeded database:
//!   `cargo run -p frontino-cli -- migrate && cargo run -p frontino-cli -- seed`
//! - The server running: `cargo run -p frontino-server`
//!
//! Run with: `cargo test -p frontino-integration-tests -- --ignored`

#![cfg_attr(not(test), forbid(unsafe_code))]
