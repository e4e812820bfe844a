#![no_std]

//! A streaming extractor for ustar tape archives.
//!
//! Macadam decodes an archive delivered in arbitrarily sized chunks,
//! publishing each file's metadata and content as they are uncovered. The
//! extractor holds a single 512-byte block of state, never an entire file or
//! archive, making it suited to unpacking from sockets and other incremental
//! sources (including on embedded systems).
//!
//! Most users should begin with the functions and receiver trait in the
//! [`avec`] module. These are suited to extracting files from data slices,
//! readers, and hand-rolled chunk loops. If these prove insufficient,
//! consider implementing an extractor as described in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based extractor (default).

pub mod avec;
pub mod sans;
