// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Structured dispense reports.
//!
//! The chain does not print; it returns a [`Receipt`] holding the ordered
//! [`DispenseEvent`] records for one request. Callers decide how to render
//! them — the CLI prints the `Display` lines, the demo server returns JSON.

use crate::base::{Amount, Denomination};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One report record produced while a request walks the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DispenseEvent {
    /// A handler paid out `count` bills of its denomination.
    ///
    /// `count` is always positive; handlers that contribute nothing emit no
    /// event.
    Dispensed { denomination: Denomination, count: u64 },

    /// Leftover smaller than the smallest denomination.
    ///
    /// At most one per receipt, always last. This is the chain's
    /// partial-success terminal state, not a failure.
    Undispensable { remainder: Amount },
}

impl fmt::Display for DispenseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispensed {
                denomination,
                count,
            } => {
                write!(f, "Dispensing {} {} bills", count, denomination)
            }
            Self::Undispensable { remainder } => {
                write!(f, "Cannot dispense remaining amount: {}", remainder)
            }
        }
    }
}

/// The ordered outcome of one dispense request.
///
/// # Invariants
///
/// - Events appear in chain order (strictly descending denominations).
/// - `dispensed_total() + remainder() == requested()` — every unit of the
///   request is accounted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    requested: Amount,
    events: Vec<DispenseEvent>,
}

impl Receipt {
    pub(crate) fn new(requested: Amount, events: Vec<DispenseEvent>) -> Self {
        let receipt = Receipt { requested, events };
        receipt.assert_conservation();
        receipt
    }

    fn assert_conservation(&self) {
        debug_assert!(
            self.dispensed_total().0 + self.remainder().0 == self.requested.0,
            "Invariant violated: receipt does not conserve the requested amount {}",
            self.requested
        );
    }

    /// The amount the client asked for.
    pub fn requested(&self) -> Amount {
        self.requested
    }

    /// All report records, in chain order.
    pub fn events(&self) -> &[DispenseEvent] {
        &self.events
    }

    /// The `(denomination, count)` pairs that were paid out.
    pub fn bills(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.events.iter().filter_map(|event| match event {
            DispenseEvent::Dispensed {
                denomination,
                count,
            } => Some((*denomination, *count)),
            DispenseEvent::Undispensable { .. } => None,
        })
    }

    /// Sum of `count * denomination` over all dispensed bills.
    pub fn dispensed_total(&self) -> Amount {
        Amount(
            self.bills()
                .map(|(denomination, count)| denomination.0 * count)
                .sum(),
        )
    }

    /// The undispensable leftover, or zero when the request was satisfied.
    pub fn remainder(&self) -> Amount {
        self.events
            .iter()
            .find_map(|event| match event {
                DispenseEvent::Undispensable { remainder } => Some(*remainder),
                DispenseEvent::Dispensed { .. } => None,
            })
            .unwrap_or(Amount::ZERO)
    }

    /// Whether the full requested amount was paid out in bills.
    pub fn is_exact(&self) -> bool {
        self.remainder().is_zero()
    }
}
