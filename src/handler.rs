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

//! Per-denomination dispense step.
//!
//! A [`Handler`] is a pure, stateless transformation: given an incoming
//! amount it answers how many of its bills fit and what is left over. It
//! holds no link to a successor; ordering is owned by the
//! [`DispenserChain`](crate::DispenserChain).

use crate::base::{Amount, Denomination};

/// Chain link bound to exactly one bill denomination.
///
/// Constructed once at chain assembly and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    denomination: Denomination,
}

/// Outcome of one handler pass over an incoming amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Maximal whole-bill count of the handler's denomination.
    pub count: u64,
    /// What is left for the rest of the chain.
    pub remainder: Amount,
}

impl Handler {
    pub fn new(denomination: Denomination) -> Self {
        Handler { denomination }
    }

    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Splits `amount` into the maximal bill count and the leftover.
    ///
    /// `count = amount / denomination`, `remainder = amount % denomination`.
    /// When the amount is below the denomination the count is zero and the
    /// whole unmodified amount carries forward.
    pub fn dispense(&self, amount: Amount) -> Split {
        Split {
            count: amount.0 / self.denomination.0,
            remainder: Amount(amount.0 % self.denomination.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_exact_multiple() {
        let handler = Handler::new(Denomination(20));
        let split = handler.dispense(Amount(320));

        assert_eq!(split.count, 16);
        assert_eq!(split.remainder, Amount::ZERO);
    }

    #[test]
    fn splits_with_leftover() {
        let handler = Handler::new(Denomination(20));
        let split = handler.dispense(Amount(310));

        assert_eq!(split.count, 15);
        assert_eq!(split.remainder, Amount(10));
    }

    #[test]
    fn amount_below_denomination_passes_through_unchanged() {
        let handler = Handler::new(Denomination(1000));
        let split = handler.dispense(Amount(970));

        assert_eq!(split.count, 0);
        assert_eq!(split.remainder, Amount(970));
    }

    #[test]
    fn zero_amount_splits_to_nothing() {
        let handler = Handler::new(Denomination(100));
        let split = handler.dispense(Amount::ZERO);

        assert_eq!(split.count, 0);
        assert_eq!(split.remainder, Amount::ZERO);
    }
}
