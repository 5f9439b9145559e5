//! Decoding single DNS name labels from wire-format messages.
//!
//! This crate provides the leaf-level building blocks a DNS message parser
//! needs when it walks a domain name: decoding one length-prefixed label
//! and resolving one compression pointer. Assembling complete names from
//! these steps is left to the caller, as is everything else about a
//! message such as its header or its records.
//!
//! All operations work on a borrowed, read-only message buffer and an
//! offset into it. They never read past the end of the buffer and they
//! never allocate. Decoded labels are returned as [`HostLabel`] values
//! that are guaranteed to satisfy conservative hostname syntax: ASCII
//! letters, digits and interior hyphens only, and not all digits.
//!
//! Compression pointers are only ever followed for a single hop and only
//! backwards. A pointer whose target label would reach into the pointer
//! itself is rejected. Together these rules make a caller’s name assembly
//! loop terminate on any input.
//!
//! ```
//! use domain_label::base::name::{decode_label, decode_pointer};
//!
//! let msg = b"\x06domain\xc0\x00";
//! let (label, len) = decode_label(msg, 0).unwrap();
//! assert_eq!(label.as_str(), "domain");
//! assert_eq!(len, 7);
//!
//! let (label, len) = decode_pointer(msg, 7).unwrap();
//! assert_eq!(label.as_str(), "domain");
//! assert_eq!(len, 2);
//! ```
//!
//!
//! # Reference of Feature Flags
//!
//! * `logging`: Provides [`logging::init_logging`][crate::logging] which
//!   sets up a [tracing-subscriber](https://docs.rs/tracing-subscriber)
//!   subscriber for the diagnostic events emitted by this crate.
//! * `serde`: Enables serialization and deserialization of [`HostLabel`]
//!   via [serde](https://serde.rs/).
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//!
//! [`HostLabel`]: base::name::HostLabel

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod base;

#[cfg(any(test, feature = "logging"))]
pub mod logging;
