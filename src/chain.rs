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

//! The denomination chain.
//!
//! The [`DispenserChain`] is the central component: an ordered sequence of
//! per-denomination [`Handler`]s through which a requested amount is
//! threaded until it reaches zero or the chain is exhausted.
//!
//! # Request Processing
//!
//! - Each handler pays out the maximal whole-bill count of its denomination
//!   and forwards the remainder.
//! - Traversal stops as soon as the remaining amount reaches zero.
//! - A nonzero leftover after the last handler is reported on the receipt,
//!   not raised as an error.
//!
//! # Thread Safety
//!
//! The chain is wired once at assembly and never mutated afterwards;
//! [`dispense`](DispenserChain::dispense) takes `&self` and keeps no
//! per-call state, so one chain instance can serve concurrent requests
//! without locking.

use crate::base::{Amount, Denomination};
use crate::handler::Handler;
use crate::receipt::{DispenseEvent, Receipt};
use crate::DispenseError;

/// An ordered cash-dispensing chain over strictly descending denominations.
///
/// # Invariants
///
/// - Denominations are positive and strictly descending (no duplicates).
/// - Topology is fixed at assembly; the chain is stateless across calls.
/// - Every receipt conserves the requested amount: dispensed + remainder
///   equals the request.
#[derive(Debug, Clone)]
pub struct DispenserChain {
    handlers: Vec<Handler>,
}

impl DispenserChain {
    /// The standard denomination set: 1000, 500, 100, 20.
    pub const STANDARD_DENOMINATIONS: [u64; 4] = [1000, 500, 100, 20];

    /// Assembles a chain from denominations given highest first.
    ///
    /// # Errors
    ///
    /// - [`DispenseError::EmptyChain`] - No denominations were supplied.
    /// - [`DispenseError::ZeroDenomination`] - A denomination was zero.
    /// - [`DispenseError::NotDescending`] - Order was not strictly
    ///   descending (this also rejects duplicates).
    pub fn new<I>(denominations: I) -> Result<Self, DispenseError>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut handlers = Vec::new();

        for value in denominations {
            if value == 0 {
                return Err(DispenseError::ZeroDenomination);
            }
            if let Some(previous) = handlers.last().map(Handler::denomination) {
                if previous.0 <= value {
                    return Err(DispenseError::NotDescending);
                }
            }
            handlers.push(Handler::new(Denomination(value)));
        }

        if handlers.is_empty() {
            return Err(DispenseError::EmptyChain);
        }

        Ok(DispenserChain { handlers })
    }

    /// Assembles the standard 1000 → 500 → 100 → 20 chain.
    pub fn standard() -> Self {
        DispenserChain {
            handlers: Self::STANDARD_DENOMINATIONS
                .iter()
                .map(|&value| Handler::new(Denomination(value)))
                .collect(),
        }
    }

    /// The chain's denominations, highest first.
    pub fn denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.handlers.iter().map(Handler::denomination)
    }

    /// The smallest denomination, the terminal handler's bill value.
    pub fn smallest_denomination(&self) -> Denomination {
        // Assembly guarantees at least one handler.
        self.handlers[self.handlers.len() - 1].denomination()
    }

    /// Breaks `amount` into bills, threading the remainder down the chain.
    ///
    /// Returns a [`Receipt`] with one [`DispenseEvent::Dispensed`] record
    /// per handler that paid out at least one bill, in chain order, followed
    /// by at most one [`DispenseEvent::Undispensable`] record when a nonzero
    /// leftover survives the terminal handler. A zero amount yields an empty
    /// receipt.
    pub fn dispense(&self, amount: Amount) -> Receipt {
        let mut events = Vec::new();
        let mut remaining = amount;

        for handler in &self.handlers {
            if remaining.is_zero() {
                break;
            }
            let split = handler.dispense(remaining);
            if split.count > 0 {
                events.push(DispenseEvent::Dispensed {
                    denomination: handler.denomination(),
                    count: split.count,
                });
            }
            remaining = split.remainder;
        }

        if !remaining.is_zero() {
            events.push(DispenseEvent::Undispensable {
                remainder: remaining,
            });
        }

        Receipt::new(amount, events)
    }
}

impl Default for DispenserChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Client-side pre-check performed before a request enters the chain.
///
/// The requested amount must land on the configured granularity step (e.g.
/// multiples of 10); non-conforming requests are rejected here and never
/// dispatched.
///
/// # Errors
///
/// - [`DispenseError::ZeroGranularity`] - The step was zero.
/// - [`DispenseError::GranularityMismatch`] - The amount is not a multiple
///   of the step.
pub fn check_granularity(amount: Amount, granularity: u64) -> Result<(), DispenseError> {
    if granularity == 0 {
        return Err(DispenseError::ZeroGranularity);
    }
    if amount.0 % granularity != 0 {
        return Err(DispenseError::GranularityMismatch {
            amount,
            granularity,
        });
    }
    Ok(())
}
