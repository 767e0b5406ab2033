//! aqdash-cli
//! ==========
//!
//! Command-line interface for the `aqdash-core` air-quality data.
//!
//! This crate primarily provides a binary (`aqdash`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! aqdash --help
//! aqdash classify 87
//! aqdash cities --search california
//! aqdash city fresno
//! aqdash --json pollutants
//! aqdash -i ./my-cities.csv stats
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`aqdash-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
