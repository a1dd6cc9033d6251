//! Exact-input swaps along a direct pair.

use super::{ensure_recipient, AmmEngine};
use crate::domain::{Address, PoolEvent, SwapExactIn, SwapOutcome, SwapPath};
use crate::error::AmmError;
use crate::math::get_amount_out;
use crate::traits::{Clock, EventSink, SwapEngine, TokenTransfer};

impl<T, C, E> SwapEngine for AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    fn swap_exact_tokens_for_tokens(
        &self,
        caller: Address,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome, AmmError> {
        let path = SwapPath::new(&request.path)?;
        self.ensure_deadline(request.deadline)?;
        ensure_recipient(&request.recipient)?;
        let pair = path.pair()?;

        let key = pair.key();
        let (token_in, token_out) = (path.token_in(), path.token_out());
        tracing::debug!(pool = %key, %caller, amount_in = %request.amount_in, "swap");

        let Some(handle) = self.registry.handle(&key) else {
            return Err(AmmError::InsufficientPoolLiquidity);
        };
        let mut pool = handle.lock();

        let input_is_a = pair.is_first(&token_in);
        let (reserve_in, reserve_out) = pool.oriented(input_is_a);
        let amount_out = get_amount_out(request.amount_in, reserve_in, reserve_out)?;
        if amount_out < request.amount_out_min {
            return Err(AmmError::SlippageExceeded);
        }

        let mut staged = pool.clone();
        staged.apply_swap(input_is_a, request.amount_in, amount_out)?;

        self.pull(&token_in, &caller, request.amount_in)?;
        if let Err(e) = self.push(&token_out, &request.recipient, amount_out) {
            self.unwind_pull(&token_in, &caller, request.amount_in);
            return Err(e);
        }

        *pool = staged;
        tracing::info!(pool = %key, amount_in = %request.amount_in, %amount_out, "swapped");
        self.emit(&PoolEvent::TokenSwapped {
            user: caller,
            token_in,
            token_out,
            amount_in: request.amount_in,
            amount_out,
        });

        Ok(SwapOutcome {
            amount_in: request.amount_in,
            amount_out,
        })
    }
}
