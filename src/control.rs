// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The input commit pipeline.
//!
//! [`NumberInput`] sits between a raw text buffer and a consumer of
//! committed [`Rational`] values. Every event validates its candidate
//! text against the grammar and the current bounds; valid candidates
//! commit immediately (blur, enter, steppers) or after a quiet interval
//! (live edits), and invalid candidates cancel whatever was queued.
//!
//! The control owns no timer. A pending live-edit commit is just a
//! deadline; the host's event loop supplies a monotonic tick to
//! [`NumberInput::on_edit`] and drains the slot with
//! [`NumberInput::poll`] once the tick reaches
//! [`NumberInput::deadline`]. Dropping the control abandons the slot,
//! so nothing can emit after teardown.

use serde_derive::{Deserialize, Serialize};

use crate::types::Rational;

/// Quiet interval after the last live edit before a valid candidate
/// commits, in host ticks (milliseconds on real hosts).
pub const DEBOUNCE_INTERVAL: u64 = 300;

/// What caused a candidate text to be evaluated.
///
/// `Blur` and `Enter` are distinct so hosts can tell them apart, but
/// they commit and simplify identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// A keystroke; commits after [`DEBOUNCE_INTERVAL`].
    Edit,
    /// Focus left the field; commits immediately.
    Blur,
    /// Explicit confirmation; commits immediately.
    Enter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Pending {
    value: Rational,
    deadline: u64,
}

/// Per-instance control state.
///
/// The committed value and both bounds are externally owned: the host
/// may overwrite them at any time and each event re-reads them, so an
/// update takes effect on the next evaluation without re-validating
/// anything retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberInput {
    value: Rational,
    minimum: Option<Rational>,
    maximum: Option<Rational>,
    buffer: String,
    pending: Option<Pending>,
}

impl NumberInput {
    /// Creates an unbounded control. The buffer starts as the canonical
    /// rendering of `value`.
    pub fn new(value: Rational) -> NumberInput {
        let buffer = value.to_string();
        NumberInput {
            value,
            minimum: None,
            maximum: None,
            buffer,
            pending: None,
        }
    }

    pub fn value(&self) -> &Rational {
        &self.value
    }

    pub fn minimum(&self) -> Option<&Rational> {
        self.minimum.as_ref()
    }

    pub fn maximum(&self) -> Option<&Rational> {
        self.maximum.as_ref()
    }

    /// The raw text buffer. Canonical after a non-live commit or an
    /// external value update, literal while the user is typing.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// External value update. Resets the buffer to canonical text,
    /// overwriting any transiently invalid user input. A queued
    /// live-edit commit stays queued; the commit stream is independent
    /// of the value binding.
    pub fn set_value(&mut self, value: Rational) {
        self.buffer = value.to_string();
        self.value = value;
    }

    pub fn set_minimum(&mut self, minimum: Option<Rational>) {
        self.minimum = minimum;
    }

    pub fn set_maximum(&mut self, maximum: Option<Rational>) {
        self.maximum = maximum;
    }

    /// True iff a minimum is present and the value is at or below it.
    /// Total: an absent bound is false, never an error.
    pub fn is_minimum(&self) -> bool {
        match self.minimum {
            Some(ref minimum) => self.value.lte(minimum),
            None => false,
        }
    }

    /// True iff a maximum is present and the value is at or above it.
    pub fn is_maximum(&self) -> bool {
        match self.maximum {
            Some(ref maximum) => self.value.gte(maximum),
            None => false,
        }
    }

    /// A live keystroke. A valid in-bounds candidate replaces the
    /// pending slot with a commit due [`DEBOUNCE_INTERVAL`] ticks from
    /// `now`; anything else cancels the slot. Never emits directly.
    pub fn on_edit(&mut self, text: &str, now: u64) {
        self.change(text, Trigger::Edit, now);
    }

    /// Focus loss. Commits a valid candidate immediately and rewrites
    /// the buffer to canonical form.
    pub fn on_blur(&mut self, text: &str, now: u64) -> Option<Rational> {
        self.change(text, Trigger::Blur, now)
    }

    /// Explicit confirmation. Same semantics as [`NumberInput::on_blur`].
    pub fn on_enter(&mut self, text: &str, now: u64) -> Option<Rational> {
        self.change(text, Trigger::Enter, now)
    }

    /// The transition algorithm shared by all three triggers. Returns
    /// the committed value for immediate (non-edit) commits.
    pub fn change(&mut self, text: &str, trigger: Trigger, now: u64) -> Option<Rational> {
        let value = match self.validate(text) {
            Some(value) => value,
            None => {
                // Invalid candidate: no emission for this burst.
                self.pending = None;
                return None;
            }
        };
        match trigger {
            Trigger::Edit => {
                self.buffer = text.to_owned();
                self.pending = Some(Pending {
                    value,
                    deadline: now + DEBOUNCE_INTERVAL,
                });
                None
            }
            Trigger::Blur | Trigger::Enter => {
                // Simplify once the user is finished.
                self.buffer = value.to_string();
                self.pending = None;
                Some(value)
            }
        }
    }

    /// Drains the pending slot once `now` has reached its deadline.
    /// Returns the committed value exactly once per queued edit burst.
    pub fn poll(&mut self, now: u64) -> Option<Rational> {
        let due = match self.pending {
            Some(ref pending) => now >= pending.deadline,
            None => false,
        };
        if due {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    /// Deadline of the queued commit, if any, so hosts can schedule a
    /// wake-up instead of polling every tick.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Steps the value up: integers add one, fractions snap to their
    /// ceiling. Returns the stepped value unless it would exceed the
    /// maximum; clamping is silent. The stored value is untouched, the
    /// consumer feeds the emission back through
    /// [`NumberInput::set_value`].
    pub fn increase(&self) -> Option<Rational> {
        let stepped = if self.value.is_integer() {
            &self.value + &Rational::one()
        } else {
            self.value.ceil()
        };
        match self.maximum {
            Some(ref maximum) if !stepped.lte(maximum) => None,
            _ => Some(stepped),
        }
    }

    /// Steps the value down: integers subtract one, fractions snap to
    /// their floor. Clamped silently at the minimum.
    pub fn decrease(&self) -> Option<Rational> {
        let stepped = if self.value.is_integer() {
            &self.value - &Rational::one()
        } else {
            self.value.floor()
        };
        match self.minimum {
            Some(ref minimum) if !stepped.gte(minimum) => None,
            _ => Some(stepped),
        }
    }

    /// Parse plus bounds check. `None` covers both failure modes:
    /// unparseable text and an out-of-bounds value.
    fn validate(&self, text: &str) -> Option<Rational> {
        let value: Rational = text.parse().ok()?;
        let above = match self.minimum {
            Some(ref minimum) => value.gte(minimum),
            None => true,
        };
        let below = match self.maximum {
            Some(ref maximum) => value.lte(maximum),
            None => true,
        };
        if above && below {
            Some(value)
        } else {
            None
        }
    }
}
