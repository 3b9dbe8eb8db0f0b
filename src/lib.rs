//! Core library for the `fakehdrs` CLI.
//!
//! `fakehdrs` emits bulk synthetic HTTP/2 requests for exercising header
//! compression and header-handling code. The library holds the request
//! generator, the output driver, CLI argument types, and the error types;
//! the binary wires them to standard output.
pub mod args;
pub mod error;
pub mod generator;
pub mod output;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
