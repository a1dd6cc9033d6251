//! In-memory token ledger.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::domain::{Address, Amount};
use crate::error::TransferError;
use crate::traits::TokenTransfer;

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<(Address, Address), u128>,
    frozen: HashSet<Address>,
}

/// A [`TokenTransfer`] implementation holding balances in memory.
///
/// Useful for simulations and tests.  Allowances are not modelled:
/// `transfer_from` succeeds whenever `owner` holds enough.  Individual
/// tokens can be frozen, after which every transfer of that token is
/// rejected.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Amount};
/// use pair_amm::host::MemoryLedger;
/// use pair_amm::traits::TokenTransfer;
///
/// let token = Address::from_low_u64(1);
/// let alice = Address::from_low_u64(2);
/// let bob = Address::from_low_u64(3);
///
/// let ledger = MemoryLedger::new();
/// ledger.mint(&token, &alice, Amount::new(100));
/// ledger.transfer_from(&token, &alice, &bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(&token, &bob), Amount::new(40));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: Mutex<LedgerState>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `token` to `account` out of thin air.
    ///
    /// Saturates at `u128::MAX`.
    pub fn mint(&self, token: &Address, account: &Address, amount: Amount) {
        let mut state = self.state.lock();
        let balance = state.balances.entry((*token, *account)).or_default();
        *balance = balance.saturating_add(amount.get());
    }

    /// Balance of `account` in `token`.
    pub fn balance_of(&self, token: &Address, account: &Address) -> Amount {
        let state = self.state.lock();
        Amount::new(
            state
                .balances
                .get(&(*token, *account))
                .copied()
                .unwrap_or_default(),
        )
    }

    /// Rejects every later transfer of `token`.
    pub fn freeze(&self, token: &Address) {
        self.state.lock().frozen.insert(*token);
    }

    /// Lifts a [`freeze`](Self::freeze).
    pub fn unfreeze(&self, token: &Address) {
        self.state.lock().frozen.remove(token);
    }

    fn move_balance(
        &self,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut state = self.state.lock();
        if state.frozen.contains(token) {
            return Err(TransferError::Rejected("token is frozen"));
        }
        let value = amount.get();
        let available = state
            .balances
            .get(&(*token, *from))
            .copied()
            .unwrap_or_default();
        let debited = available
            .checked_sub(value)
            .ok_or(TransferError::InsufficientBalance {
                requested: value,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let current = state
            .balances
            .get(&(*token, *to))
            .copied()
            .unwrap_or_default();
        let credited = current.checked_add(value).ok_or(TransferError::Overflow)?;

        state.balances.insert((*token, *from), debited);
        state.balances.insert((*token, *to), credited);
        Ok(())
    }
}

impl TokenTransfer for MemoryLedger {
    fn transfer_from(
        &self,
        token: &Address,
        owner: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.move_balance(token, owner, recipient, amount)
    }

    fn transfer(
        &self,
        token: &Address,
        custody: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.move_balance(token, custody, recipient, amount)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn token() -> Address {
        Address::from_low_u64(1)
    }

    fn alice() -> Address {
        Address::from_low_u64(10)
    }

    fn bob() -> Address {
        Address::from_low_u64(11)
    }

    #[test]
    fn moves_balance() {
        let ledger = MemoryLedger::new();
        ledger.mint(&token(), &alice(), Amount::new(50));
        let Ok(()) = ledger.transfer(&token(), &alice(), &bob(), Amount::new(20)) else {
            panic!("transfer");
        };
        assert_eq!(ledger.balance_of(&token(), &alice()), Amount::new(30));
        assert_eq!(ledger.balance_of(&token(), &bob()), Amount::new(20));
    }

    #[test]
    fn insufficient_balance_moves_nothing() {
        let ledger = MemoryLedger::new();
        ledger.mint(&token(), &alice(), Amount::new(5));
        let err = ledger.transfer_from(&token(), &alice(), &bob(), Amount::new(6));
        assert_eq!(
            err,
            Err(TransferError::InsufficientBalance {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(ledger.balance_of(&token(), &alice()), Amount::new(5));
        assert_eq!(ledger.balance_of(&token(), &bob()), Amount::ZERO);
    }

    #[test]
    fn frozen_token_rejects() {
        let ledger = MemoryLedger::new();
        ledger.mint(&token(), &alice(), Amount::new(5));
        ledger.freeze(&token());
        assert!(ledger
            .transfer_from(&token(), &alice(), &bob(), Amount::new(1))
            .is_err());
        ledger.unfreeze(&token());
        assert!(ledger
            .transfer_from(&token(), &alice(), &bob(), Amount::new(1))
            .is_ok());
    }

    #[test]
    fn self_transfer_is_noop() {
        let ledger = MemoryLedger::new();
        ledger.mint(&token(), &alice(), Amount::new(5));
        let Ok(()) = ledger.transfer(&token(), &alice(), &alice(), Amount::new(5)) else {
            panic!("transfer");
        };
        assert_eq!(ledger.balance_of(&token(), &alice()), Amount::new(5));
    }
}
