// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An exact-rational numeric input core.
//!
//! `rational_input` is the logic behind a number field that accepts
//! free-form text (integers, decimals, fractions, mixed numbers like
//! `1 1/3`), keeps the value as an exact fraction, enforces optional
//! minimum/maximum bounds, and decides *when* a typed candidate becomes
//! a committed value: immediately on blur/enter/stepper, or after a
//! quiet interval for live keystrokes.
//!
//! Rendering, focus handling, and accessibility belong to the embedding
//! UI shell. The shell forwards events here and applies the committed
//! values this crate hands back.
//!
//! ## Example
//!
//! ```rust
//! use rational_input::{NumberInput, Rational};
//!
//! let mut input = NumberInput::new(Rational::from(10));
//! input.set_maximum(Some(Rational::from(100)));
//!
//! // Enter commits immediately and simplifies the buffer.
//! let committed = input.on_enter("1 1/3", 0);
//! assert_eq!(committed, Some("4/3".parse().unwrap()));
//! assert_eq!(input.buffer(), "4/3");
//!
//! // Live edits settle one quiet interval after the last keystroke.
//! input.on_edit("5/4", 1000);
//! assert_eq!(input.poll(1200), None);
//! assert_eq!(input.poll(1300), Some("5/4".parse().unwrap()));
//!
//! // Out-of-bounds and garbage candidates never commit.
//! assert_eq!(input.on_enter("101", 2000), None);
//! assert_eq!(input.on_enter("asdf", 2000), None);
//! ```

pub mod control;
pub mod parsing;
pub mod types;

pub use crate::control::{NumberInput, Trigger, DEBOUNCE_INTERVAL};
pub use crate::parsing::ParseRationalError;
pub use crate::types::{BigInt, Rational};
