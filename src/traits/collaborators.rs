//! Host collaborators consumed by the engine.
//!
//! The engine owns no token balances, wall clock or event transport.  It
//! reaches all three through the traits in this module, which a host
//! implements against its own ledger, time source and log pipeline.
//!
//! All methods take `&self`: one engine instance is shared by concurrent
//! callers, so implementations use interior mutability where they need
//! state.

use std::sync::Arc;

use crate::domain::{Address, Amount, PoolEvent, Timestamp};
use crate::error::TransferError;

/// Token ledger capability: moves value between accounts.
///
/// A returned `Err` aborts the calling engine operation; the engine
/// discards everything it staged and reports
/// [`AmmError::ExternalTransferFailed`](crate::error::AmmError::ExternalTransferFailed).
/// If an earlier transfer of the same call already succeeded, the engine
/// issues the opposite transfer first: a pull is returned with
/// [`transfer`](Self::transfer) and a payout is recovered with
/// [`transfer_from`](Self::transfer_from).
pub trait TokenTransfer {
    /// Moves `amount` of `token` from `owner` to `recipient` on behalf of
    /// the engine (an allowance-style pull).
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] means no value moved.
    fn transfer_from(
        &self,
        token: &Address,
        owner: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `token` out of the engine's `custody` account to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] means no value moved.
    fn transfer(
        &self,
        token: &Address,
        custody: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

/// Externally supplied current time, compared once against each deadline.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Destination for committed [`PoolEvent`]s.
pub trait EventSink {
    /// Receives one event. Called only after the emitting call committed.
    fn emit(&self, event: &PoolEvent);
}

impl<T: TokenTransfer + ?Sized> TokenTransfer for Arc<T> {
    fn transfer_from(
        &self,
        token: &Address,
        owner: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer_from(token, owner, recipient, amount)
    }

    fn transfer(
        &self,
        token: &Address,
        custody: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer(token, custody, recipient, amount)
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn emit(&self, event: &PoolEvent) {
        (**self).emit(event);
    }
}
