//! Color constants for the card.
//!
//! Soft paper-and-blush palette. The particle heart colors live in
//! `lovenote_core::particles` next to the drawing logic that picks them.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#fdfbf7";
pub const PAPER_WARM: &str = "#fff5f5";

// === BLUSH (Primary accents, seals, buttons) ===
pub const BLUSH: &str = "#d4a5a5";
pub const BLUSH_DEEP: &str = "#c29191";
pub const BLUSH_MUTED: &str = "#9e8c8c";

// === ENVELOPE ===
pub const ENVELOPE_BODY: &str = "#e8d5d5";
pub const ENVELOPE_FLAP: &str = "#e2caca";
pub const ENVELOPE_FLAP_BOTTOM: &str = "#dcb8b8";
pub const WAX_RED: &str = "#b54e4e";

// === TEXT ===
pub const INK: &str = "#5d5555";

// === SEMANTIC ===
pub const ACCENT: &str = "#ff8fa3";
pub const GOLD: &str = "#d4af37";
