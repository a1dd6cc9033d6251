use super::AmmEngine;
use crate::domain::{Address, Amount, Price, Shares, TokenPair};
use crate::error::AmmError;
use crate::math::scaled_ratio;
use crate::pools::Pool;
use crate::traits::{Clock, EventSink, PoolView, TokenTransfer};

impl<T, C, E> AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    /// Runs `read` against the pair's pool, or against the zero state when
    /// no record exists.  Never creates a record.
    fn read_pool<R>(
        &self,
        token_a: Address,
        token_b: Address,
        read: impl FnOnce(&TokenPair, &Pool) -> R,
    ) -> Result<R, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        match self.registry.handle(&pair.key()) {
            Some(handle) => Ok(read(&pair, &handle.lock())),
            None => Ok(read(&pair, &Pool::default())),
        }
    }
}

impl<T, C, E> PoolView for AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    fn get_price(&self, token_a: Address, token_b: Address) -> Result<Price, AmmError> {
        let (reserve_a, reserve_b) = self.read_pool(token_a, token_b, |pair, pool| {
            pool.oriented(pair.is_first(&token_a))
        })?;
        scaled_ratio(reserve_a, reserve_b)
    }

    fn get_reserves(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> Result<(Amount, Amount), AmmError> {
        self.read_pool(token_a, token_b, |_, pool| (pool.reserve_a(), pool.reserve_b()))
    }

    fn shares_of(
        &self,
        token_a: Address,
        token_b: Address,
        account: Address,
    ) -> Result<Shares, AmmError> {
        self.read_pool(token_a, token_b, |_, pool| pool.shares_of(&account))
    }

    fn total_shares(&self, token_a: Address, token_b: Address) -> Result<Shares, AmmError> {
        self.read_pool(token_a, token_b, |_, pool| pool.total_shares())
    }

    fn pool(&self, token_a: Address, token_b: Address) -> Result<Option<Pool>, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        Ok(self.registry.get(&pair.key()))
    }
}
