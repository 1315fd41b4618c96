//! The balance book: per-account fungible balances for one asset type.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crowdvault_types::{AccountId, Asset, Units};
use tracing::{debug, warn};

use crate::error::AssetError;

/// Exact-amount fungible balances for a single asset type `A`.
///
/// Unknown accounts read as zero. Accounts are created lazily on first
/// credit, or explicitly via [`AssetBook::open_account`] when a zero-balance
/// registration is part of a larger protocol step.
pub struct AssetBook<A: Asset> {
    accounts: RwLock<HashMap<AccountId, Units<A>>>,
}

impl<A: Asset> AssetBook<A> {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<AccountId, Units<A>>>, AssetError> {
        self.accounts.read().map_err(|_| AssetError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<AccountId, Units<A>>>, AssetError> {
        self.accounts.write().map_err(|_| AssetError::LockPoisoned)
    }

    /// Register `account` with a zero balance. Idempotent: an existing
    /// account keeps its balance.
    pub fn open_account(&self, account: &AccountId) -> Result<(), AssetError> {
        let mut accounts = self.write()?;
        accounts.entry(account.clone()).or_insert_with(Units::zero);
        Ok(())
    }

    /// Current balance of `account`; zero for unknown accounts.
    pub fn balance(&self, account: &AccountId) -> Result<Units<A>, AssetError> {
        Ok(self
            .read()?
            .get(account)
            .copied()
            .unwrap_or_else(Units::zero))
    }

    /// Add exactly `amount` to `account`, creating it if absent.
    pub fn credit(&self, account: &AccountId, amount: Units<A>) -> Result<(), AssetError> {
        let mut accounts = self.write()?;
        let balance = accounts.entry(account.clone()).or_insert_with(Units::zero);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| AssetError::BalanceOverflow {
                account: account.to_string(),
            })?;

        debug!(account = %account, amount = %amount, "credited");
        Ok(())
    }

    /// Remove exactly `amount` from `account`.
    ///
    /// Aborts with [`AssetError::InsufficientFunds`] if the account (or an
    /// unknown account, which reads as zero) cannot cover the amount.
    pub fn debit(&self, account: &AccountId, amount: Units<A>) -> Result<(), AssetError> {
        let mut accounts = self.write()?;
        let available = accounts
            .get(account)
            .copied()
            .unwrap_or_else(Units::zero);

        let remaining = available.checked_sub(amount).ok_or_else(|| {
            warn!(
                account = %account,
                required = amount.raw(),
                available = available.raw(),
                "debit rejected"
            );
            AssetError::InsufficientFunds {
                required: amount.raw(),
                available: available.raw(),
            }
        })?;

        accounts.insert(account.clone(), remaining);
        debug!(account = %account, amount = %amount, "debited");
        Ok(())
    }

    /// Move exactly `amount` from one account to another under a single
    /// write lock; either both legs apply or neither does.
    pub fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Units<A>,
    ) -> Result<(), AssetError> {
        let mut accounts = self.write()?;

        let available = accounts.get(from).copied().unwrap_or_else(Units::zero);
        let remaining = available
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientFunds {
                required: amount.raw(),
                available: available.raw(),
            })?;

        let target = accounts.get(to).copied().unwrap_or_else(Units::zero);
        let credited = target
            .checked_add(amount)
            .ok_or_else(|| AssetError::BalanceOverflow {
                account: to.to_string(),
            })?;

        accounts.insert(from.clone(), remaining);
        accounts.insert(to.clone(), credited);
        debug!(from = %from, to = %to, amount = %amount, "transferred");
        Ok(())
    }
}

impl<A: Asset> Default for AssetBook<A> {
    fn default() -> Self {
        Self::new()
    }
}
