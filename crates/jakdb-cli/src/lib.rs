//! jakdb-cli
//! ==========
//!
//! Command-line interface for the `jakdb-core` facility directory.
//!
//! This crate primarily provides a binary (`jakdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install jakdb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! jakdb-cli --help
//! jakdb-cli stats
//! jakdb-cli find --district kollam
//! jakdb-cli nearby 8.8932 76.6141 --radius 25
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`jakdb-core`] crate directly.
//!
//! [`jakdb-core`]: https://docs.rs/jakdb-core

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
