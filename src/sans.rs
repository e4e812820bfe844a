//! Internal finite-state machine for implementing extractors.
//!
//! This module is intended for advanced applications that need fine control
//! over extractor internals. See [`crate::avec`] for implementations covering
//! common extraction patterns.
//!
//! # Architecture
//!
//! An archive is interpreted one 512-byte block at a time, regardless of how
//! its bytes arrive. The [`block::Accumulator`] restages arbitrarily sized
//! chunks into whole blocks, holding the only buffer in the crate.
//!
//! All states are represented by a non-copy token. Once a whole block is
//! ready, transition to another state by calling the token's `advance`
//! method. This will return a successor state token, along with any
//! extracted data. A block without the ustar format markers leaves the
//! header state unchanged, letting filler and padding between archive
//! members pass through harmlessly.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can
//! be constructed.
//!
//! This architecture enables the compiler and type system to guide
//! applications toward a correct implementation. However, some areas of the
//! extraction process are not represented in the finite-state machine and
//! must be carefully written:
//!
//! - Staging bytes into whole blocks before advancing, with an
//! [`block::Accumulator`] or otherwise.
//!
//! - Copying out any content slice that must outlive the block it was
//! returned from.
//!
//! Implementers are recommended to begin by studying and modifying the
//! extractor in the [`crate::avec`] module.

pub mod block;
pub mod content;
pub mod header;
pub mod number;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::FileHeader;
