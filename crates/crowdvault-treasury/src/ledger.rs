//! Investment position ledger.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crowdvault_types::{AccountId, Asset, Units};
use tracing::debug;

use crate::error::TreasuryError;

type PositionKey = (AccountId, AccountId);

/// Cumulative principal per (investor, founder) pair.
///
/// A position doubles as the investor's voting weight; it only ever grows
/// through [`increase`](Self::increase) and disappears in one piece when the
/// investor redeems or converts.
pub struct InvestmentLedger<F: Asset> {
    positions: RwLock<HashMap<PositionKey, Units<F>>>,
}

impl<F: Asset> InvestmentLedger<F> {
    pub fn new() -> Self {
        Self {
            positions: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<PositionKey, Units<F>>>, TreasuryError> {
        self.positions
            .read()
            .map_err(|_| TreasuryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<PositionKey, Units<F>>>, TreasuryError> {
        self.positions
            .write()
            .map_err(|_| TreasuryError::LockPoisoned)
    }

    /// Grow the (investor, founder) position by `amount`, creating it if
    /// absent.
    pub fn increase(
        &self,
        investor: &AccountId,
        founder: &AccountId,
        amount: Units<F>,
    ) -> Result<(), TreasuryError> {
        let mut positions = self.write()?;
        let key = (investor.clone(), founder.clone());
        let current = positions.get(&key).copied().unwrap_or_else(Units::zero);
        let grown = current.checked_add(amount).ok_or(TreasuryError::Overflow {
            context: "growing an investment position",
        })?;
        positions.insert(key, grown);

        debug!(
            investor = %investor,
            founder = %founder,
            amount = %amount,
            position = %grown,
            "investment position increased"
        );
        Ok(())
    }

    /// Current position, or `None` when the investor holds nothing with this
    /// founder.
    pub fn weight(
        &self,
        investor: &AccountId,
        founder: &AccountId,
    ) -> Result<Option<Units<F>>, TreasuryError> {
        let positions = self.read()?;
        Ok(positions
            .get(&(investor.clone(), founder.clone()))
            .copied())
    }

    /// Delete the position outright, returning what it held.
    pub fn remove_all(
        &self,
        investor: &AccountId,
        founder: &AccountId,
    ) -> Result<Option<Units<F>>, TreasuryError> {
        let mut positions = self.write()?;
        Ok(positions.remove(&(investor.clone(), founder.clone())))
    }

    /// Sum of all positions held against `founder`.
    pub fn total_for_founder(&self, founder: &AccountId) -> Result<Units<F>, TreasuryError> {
        let positions = self.read()?;
        let mut total = Units::zero();
        for ((_, f), units) in positions.iter() {
            if f == founder {
                total = total.checked_add(*units).ok_or(TreasuryError::Overflow {
                    context: "summing investment positions",
                })?;
            }
        }
        Ok(total)
    }
}

impl<F: Asset> Default for InvestmentLedger<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct Fnd;
    impl Asset for Fnd {
        const SYMBOL: &'static str = "FND";
    }

    fn ids() -> (AccountId, AccountId) {
        (AccountId::new("investor"), AccountId::new("founder"))
    }

    #[test]
    fn positions_accumulate() {
        let ledger = InvestmentLedger::<Fnd>::new();
        let (investor, founder) = ids();

        assert_eq!(ledger.weight(&investor, &founder).unwrap(), None);
        ledger.increase(&investor, &founder, Units::new(10)).unwrap();
        ledger.increase(&investor, &founder, Units::new(5)).unwrap();
        assert_eq!(
            ledger.weight(&investor, &founder).unwrap(),
            Some(Units::new(15))
        );
    }

    #[test]
    fn removal_is_total() {
        let ledger = InvestmentLedger::<Fnd>::new();
        let (investor, founder) = ids();

        ledger.increase(&investor, &founder, Units::new(10)).unwrap();
        assert_eq!(
            ledger.remove_all(&investor, &founder).unwrap(),
            Some(Units::new(10))
        );
        assert_eq!(ledger.weight(&investor, &founder).unwrap(), None);
        assert_eq!(ledger.remove_all(&investor, &founder).unwrap(), None);
    }

    #[test]
    fn totals_are_scoped_per_founder() {
        let ledger = InvestmentLedger::<Fnd>::new();
        let a = AccountId::new("a");
        let b = AccountId::new("b");
        let founder = AccountId::new("founder");
        let other = AccountId::new("other");

        ledger.increase(&a, &founder, Units::new(20)).unwrap();
        ledger.increase(&b, &founder, Units::new(10)).unwrap();
        ledger.increase(&a, &other, Units::new(7)).unwrap();

        assert_eq!(ledger.total_for_founder(&founder).unwrap(), Units::new(30));
        assert_eq!(ledger.total_for_founder(&other).unwrap(), Units::new(7));
    }
}
