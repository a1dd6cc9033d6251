//! Liquidity provision: deposits mint shares, withdrawals burn them.

use super::{ensure_recipient, AmmEngine};
use crate::domain::{
    Address, AddLiquidity, Amount, Deposit, PoolEvent, RemoveLiquidity, Shares, TokenPair,
    Withdrawal,
};
use crate::error::{AmmError, Side};
use crate::math::mul_div;
use crate::pools::{Entry, Pool};
use crate::traits::{Clock, EventSink, LiquidityEngine, TokenTransfer};

/// Amounts credited for a deposit, in the caller's argument order.
///
/// Empty pool: the desired amounts as-is.  Otherwise both proportional
/// amounts are computed and each must fit within its desired amount.
fn deposit_amounts(
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    request: &AddLiquidity,
) -> Result<(Amount, Amount), AmmError> {
    let (amount_a, amount_b) = if total_shares.is_zero() {
        (request.amount_a_desired, request.amount_b_desired)
    } else {
        let amount_a = Amount::new(mul_div(
            request.amount_b_desired.get(),
            reserve_a.get(),
            reserve_b.get(),
        )?);
        if amount_a > request.amount_a_desired {
            return Err(AmmError::ExcessiveInputRequired(Side::A));
        }
        let amount_b = Amount::new(mul_div(
            request.amount_a_desired.get(),
            reserve_b.get(),
            reserve_a.get(),
        )?);
        if amount_b > request.amount_b_desired {
            return Err(AmmError::ExcessiveInputRequired(Side::B));
        }
        (amount_a, amount_b)
    };

    if amount_a < request.amount_a_min || amount_b < request.amount_b_min {
        return Err(AmmError::SlippageExceeded);
    }
    Ok((amount_a, amount_b))
}

/// Stages a withdrawal of `request.liquidity` shares held by `owner`.
///
/// Returns the staged pool and the payouts in the caller's argument order.
fn stage_withdrawal(
    pool: &Pool,
    pair: &TokenPair,
    owner: &Address,
    request: &RemoveLiquidity,
) -> Result<(Pool, Amount, Amount), AmmError> {
    let held = pool.shares_of(owner);
    if held < request.liquidity {
        return Err(AmmError::InsufficientLiquidityShares {
            requested: request.liquidity.get(),
            held: held.get(),
        });
    }

    let total = pool.total_shares();
    if total.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let a_is_first = pair.is_first(&request.token_a);
    let (reserve_a, reserve_b) = pool.oriented(a_is_first);
    let amount_a = Amount::new(mul_div(request.liquidity.get(), reserve_a.get(), total.get())?);
    let amount_b = Amount::new(mul_div(request.liquidity.get(), reserve_b.get(), total.get())?);

    if amount_a < request.amount_a_min || amount_b < request.amount_b_min {
        return Err(AmmError::SlippageExceeded);
    }

    let (slot_a, slot_b) = if a_is_first {
        (amount_a, amount_b)
    } else {
        (amount_b, amount_a)
    };
    let mut staged = pool.clone();
    staged.withdraw(owner, request.liquidity, slot_a, slot_b)?;
    Ok((staged, amount_a, amount_b))
}

impl<T, C, E> AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    /// Prices a deposit against `pool`, pulls both desired amounts and
    /// returns the staged pool.  The caller commits it.
    fn stage_deposit(
        &self,
        pair: &TokenPair,
        caller: &Address,
        request: &AddLiquidity,
        pool: &Pool,
    ) -> Result<(Pool, Deposit), AmmError> {
        let a_is_first = pair.is_first(&request.token_a);
        let (reserve_a, reserve_b) = pool.oriented(a_is_first);
        let (amount_a, amount_b) =
            deposit_amounts(reserve_a, reserve_b, pool.total_shares(), request)?;
        let liquidity = Shares::from_deposit(amount_a, amount_b)
            .ok_or(AmmError::Overflow("minted shares overflow"))?;

        let (slot_a, slot_b) = if a_is_first {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        let mut staged = pool.clone();
        staged.deposit(slot_a, slot_b, request.recipient, liquidity)?;

        // Desired amounts are pulled in full; the excess stays in custody.
        self.pull(&request.token_a, caller, request.amount_a_desired)?;
        if let Err(e) = self.pull(&request.token_b, caller, request.amount_b_desired) {
            self.unwind_pull(&request.token_a, caller, request.amount_a_desired);
            return Err(e);
        }

        Ok((
            staged,
            Deposit {
                amount_a,
                amount_b,
                liquidity,
            },
        ))
    }

    fn deposit_committed(
        &self,
        pair: &TokenPair,
        caller: Address,
        request: &AddLiquidity,
        deposit: &Deposit,
    ) {
        tracing::info!(
            pool = %pair.key(),
            amount_a = %deposit.amount_a,
            amount_b = %deposit.amount_b,
            liquidity = %deposit.liquidity,
            "liquidity added"
        );
        self.emit(&PoolEvent::LiquidityAdded {
            provider: caller,
            token_a: request.token_a,
            token_b: request.token_b,
            amount_a: deposit.amount_a,
            amount_b: deposit.amount_b,
            liquidity: deposit.liquidity,
        });
    }
}

impl<T, C, E> LiquidityEngine for AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    fn add_liquidity(&self, caller: Address, request: &AddLiquidity) -> Result<Deposit, AmmError> {
        self.ensure_deadline(request.deadline)?;
        let pair = TokenPair::new(request.token_a, request.token_b)?;
        ensure_recipient(&request.recipient)?;

        let key = pair.key();
        tracing::debug!(
            pool = %key,
            %caller,
            amount_a_desired = %request.amount_a_desired,
            amount_b_desired = %request.amount_b_desired,
            "add_liquidity"
        );

        // A new pool is only inserted once its first deposit has succeeded.
        let created = self.registry.get_or_create_with(key, |empty| {
            let (staged, deposit) = self.stage_deposit(&pair, &caller, request, empty)?;
            self.deposit_committed(&pair, caller, request, &deposit);
            Ok((staged, deposit))
        })?;
        let handle = match created {
            Entry::Created(deposit) => return Ok(deposit),
            Entry::Existing(handle) => handle,
        };

        let mut pool = handle.lock();
        let (staged, deposit) = self.stage_deposit(&pair, &caller, request, &pool)?;
        *pool = staged;
        self.deposit_committed(&pair, caller, request, &deposit);
        Ok(deposit)
    }

    fn remove_liquidity(
        &self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<Withdrawal, AmmError> {
        self.ensure_deadline(request.deadline)?;
        let pair = TokenPair::new(request.token_a, request.token_b)?;
        ensure_recipient(&request.recipient)?;

        let key = pair.key();
        tracing::debug!(pool = %key, %caller, liquidity = %request.liquidity, "remove_liquidity");

        let Some(handle) = self.registry.handle(&key) else {
            // An absent pool behaves as the zero state: no shares to burn.
            stage_withdrawal(&Pool::default(), &pair, &caller, request)?;
            return Err(AmmError::DivisionByZero);
        };
        let mut pool = handle.lock();

        let (staged, amount_a, amount_b) = stage_withdrawal(&pool, &pair, &caller, request)?;

        self.push(&request.token_a, &request.recipient, amount_a)?;
        if let Err(e) = self.push(&request.token_b, &request.recipient, amount_b) {
            self.unwind_push(&request.token_a, &request.recipient, amount_a);
            return Err(e);
        }

        *pool = staged;
        tracing::info!(pool = %key, %amount_a, %amount_b, "liquidity removed");
        self.emit(&PoolEvent::LiquidityRemoved {
            provider: caller,
            token_a: request.token_a,
            token_b: request.token_b,
            amount_a,
            amount_b,
        });

        Ok(Withdrawal { amount_a, amount_b })
    }
}
