//! Field-name-driven masking for structured data.
//!
//! This crate separates:
//! - **Policy**: which field names are sensitive, and how much.
//! - **Transforms**: how each sensitivity tier rewrites a string.
//! - **Traversal**: a shape-preserving walk over arbitrarily nested values.
//!
//! Classification is attached to *field names*, not types: `password` is
//! fully redacted, `mobileNO` keeps its last two digits behind a fixed
//! shape, `email` keeps its domain, `username` keeps a short prefix and
//! suffix. Everything else recurses until a sensitive name turns up.
//!
//! Key rules:
//! - Masking never changes the shape of a value, only string scalars inside it.
//! - A classified field holding a non-string value passes through unchanged;
//!   nothing a caller feeds in can make a mask call fail.
//! - A policy is immutable once built and safe to share across threads.
//!
//! Payloads enter the engine through the [`ToValue`] adapter boundary:
//! derive [`Maskable`] on your structs, or enable the `json` feature to mask
//! `serde_json::Value` trees directly. The `slog` feature adds structured
//! logging of masked payloads.
//!
//! What this crate does not do:
//! - perform I/O or logging of its own
//! - persist policies or read them from configuration files
//! - mask numeric or binary values

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::from_over_into
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use fieldmask_derive::Maskable;

// Module declarations
#[cfg(feature = "json")]
mod json;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;
mod value;

// Re-exports
#[cfg(feature = "json")]
pub use json::mask_json;
pub use masking::{
    is_email, mask, mask_with_report, EmailMask, FallbackMask, FixedMask, MaskNote, MaskPolicy,
    MaskPolicyBuilder, MiddleMask, SensitivityLevel, ShapeMask, MASK_TOKEN,
};
pub use value::{Maskable, Scalar, ToValue, Value, ValueKind};
