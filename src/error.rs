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

//! Error types for chain assembly and request validation.
//!
//! A leftover the chain cannot break into bills is NOT an error: it is a
//! normal terminal outcome carried inside the
//! [`Receipt`](crate::Receipt) as an
//! [`Undispensable`](crate::DispenseEvent::Undispensable) event.

use crate::base::Amount;
use thiserror::Error;

/// Dispense request and chain assembly errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispenseError {
    /// Chain was assembled without any denominations
    #[error("dispenser chain requires at least one denomination")]
    EmptyChain,

    /// A denomination of zero was supplied at assembly
    #[error("denomination must be positive")]
    ZeroDenomination,

    /// Denominations were not supplied in strictly descending order
    #[error("denominations must be strictly descending")]
    NotDescending,

    /// Granularity step of zero was configured
    #[error("granularity step must be positive")]
    ZeroGranularity,

    /// Requested amount does not land on the configured granularity step
    #[error("amount {amount} is not a multiple of {granularity}")]
    GranularityMismatch { amount: Amount, granularity: u64 },
}
