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

//! # Dispenser Demo
//!
//! This library provides an ATM-style cash dispenser that breaks a requested
//! amount into bills of fixed denominations by threading the remaining
//! amount through an ordered chain of per-denomination handlers.
//!
//! ## Core Components
//!
//! - [`DispenserChain`]: Ordered handler sequence that processes requests
//! - [`Handler`]: Single-denomination dispense step
//! - [`Receipt`]: Structured, ordered report records for one request
//! - [`DispenseError`]: Assembly and request-validation failures
//!
//! ## Example
//!
//! ```
//! use dispenser_demo_rs::{Amount, DispenserChain};
//!
//! let chain = DispenserChain::new([1000, 500, 100]).unwrap();
//! let receipt = chain.dispense(Amount(2970));
//!
//! // 2 x 1000 + 1 x 500 + 4 x 100, with 70 left undispensable
//! assert_eq!(receipt.dispensed_total(), Amount(2900));
//! assert_eq!(receipt.remainder(), Amount(70));
//! ```
//!
//! ## Thread Safety
//!
//! A chain is wired once at assembly and immutable afterwards. Dispensing
//! keeps no per-call state, so a single chain instance can serve concurrent
//! requests without synchronization.

mod base;
pub mod chain;
pub mod error;
mod handler;
mod receipt;

pub use base::{Amount, Denomination};
pub use chain::{DispenserChain, check_granularity};
pub use error::DispenseError;
pub use handler::{Handler, Split};
pub use receipt::{DispenseEvent, Receipt};
