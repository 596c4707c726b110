//! DCPU-16 Core - Pure Rust DCPU-16 emulator library
//!
//! This crate provides the core emulation logic for the DCPU-16, the
//! 16-bit word-addressable virtual processor specified for 0x10c.
//! It is free of file I/O, CLI parsing and signal handling, which live
//! in the `dcpu16-emu` and `dcpu16-dis` binary crates.

#![forbid(unsafe_code)]

/// CPU state, operand resolution, instruction decode and the
/// fetch-decode-execute loop.
pub mod cpu;
/// A structurally parallel decoder that formats instructions instead
/// of executing them.
pub mod disasm;
