//! Asset markers and typed amounts.
//!
//! Every treasury instance works with two independent asset types: the
//! funding asset investors contribute, and the vault asset the founder seeds
//! into the vault. Keeping them as distinct type parameters means an amount
//! of one can never be credited as the other.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Marker trait for a fungible asset type.
///
/// Implementors are zero-sized tags:
///
/// ```
/// use crowdvault_types::Asset;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// struct Fnd;
///
/// impl Asset for Fnd {
///     const SYMBOL: &'static str = "FND";
/// }
/// ```
pub trait Asset: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Short symbol used in logs and display output.
    const SYMBOL: &'static str;
}

/// An exact amount of asset `A`, in indivisible units.
///
/// Arithmetic is checked everywhere; no operation wraps silently.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Units<A: Asset> {
    raw: u64,
    #[serde(skip)]
    _asset: PhantomData<A>,
}

impl<A: Asset> Units<A> {
    pub const fn new(raw: u64) -> Self {
        Self {
            raw,
            _asset: PhantomData,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0)
    }

    pub fn raw(self) -> u64 {
        self.raw
    }

    pub fn is_zero(self) -> bool {
        self.raw == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.raw.checked_add(other.raw).map(Self::new)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.raw.checked_sub(other.raw).map(Self::new)
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.raw.min(other.raw))
    }
}

impl<A: Asset> Clone for Units<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Asset> Copy for Units<A> {}

impl<A: Asset> PartialEq for Units<A> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<A: Asset> Eq for Units<A> {}

impl<A: Asset> PartialOrd for Units<A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Asset> Ord for Units<A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<A: Asset> Hash for Units<A> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<A: Asset> fmt::Debug for Units<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.raw, A::SYMBOL)
    }
}

impl<A: Asset> fmt::Display for Units<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.raw, A::SYMBOL)
    }
}
