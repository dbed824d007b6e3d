// src/specs/mod.rs
//! # Import "specs" module
//!
//! This module hosts the **header-matching specifications** for supplier
//! price exports. Each spec encodes *where the ground truth lives in an
//! inconsistent CSV header row* and *how to find it robustly*.
//!
//! ## What lives here
//! - **Pure header matching** against normalized (trimmed, lowercased)
//!   header strings.
//! - **Pattern choice & precedence**: one ordered list of word-boundary
//!   regex alternatives per semantic field; first pattern with a hit wins.
//! - **The recognized retailer set**: a fixed, ordered table of canonical
//!   retailer labels with spelling-tolerant patterns ("Hi-Fi Corp",
//!   "HIFI CORP" and "HiFi Corp" are all one retailer).
//!
//! ## What does **not** live here
//! - **Tokenizing** raw CSV text — that's `crate::csv`.
//! - **Record construction** — `crate::import` owns cell extraction and
//!   numeric coercion.
//! - **Display/export concerns** — the report view reads canonical records
//!   and formats them elsewhere.
//!
//! ## Conventions & invariants
//! - Matching is **case-insensitive** via prior normalization; patterns are
//!   compiled once and shared.
//! - Tables are **data-driven** (one table per concern), so a new supplier
//!   variant means one added pattern line, not a new conditional.
//! - Pattern order is part of the contract: it decides ties deterministically.
//!
//! In short: **`specs` knows how to read supplier headers.** Other layers
//! decide when to parse, what to keep, and how to present/export.
pub mod fields;
pub mod retailers;
