//! Property-based tests using `proptest` for engine invariants.
//!
//! 1. **Key symmetry**: `derive(a, b) == derive(b, a)`.
//! 2. **Pricing bounds**: zero in gives zero out; output is monotonic in
//!    the input and strictly below the output reserve.
//! 3. **Product preservation**: `reserve_a × reserve_b` never decreases
//!    across a swap.
//! 4. **Liquidity conservation**: add then remove returns at most what
//!    was credited.
//! 5. **Deadline atomicity**: an expired call leaves state untouched.
//! 6. **Share accounting**: `Σ shares == total_shares` after any sequence
//!    of deposits and withdrawals.
//! 7. **Custody tracking**: custody holds each reserve plus the retained
//!    deposit excess, even when transfers fail midway through a call.

use proptest::prelude::*;

use super::fixtures::{alice, bob, custody, harness, token_x, token_y, Harness, NOW};
use crate::domain::{
    AddLiquidity, Address, Amount, PoolKey, RemoveLiquidity, Shares, SwapExactIn, Timestamp,
};
use crate::math::get_amount_out;
use crate::traits::{LiquidityEngine, PoolView, SwapEngine};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn add_request(recipient: Address, a: u128, b: u128) -> AddLiquidity {
    AddLiquidity {
        token_a: token_x(),
        token_b: token_y(),
        amount_a_desired: Amount::new(a),
        amount_b_desired: Amount::new(b),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient,
        deadline: Timestamp::from_secs(NOW),
    }
}

fn remove_request(recipient: Address, liquidity: Shares) -> RemoveLiquidity {
    RemoveLiquidity {
        token_a: token_x(),
        token_b: token_y(),
        liquidity,
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient,
        deadline: Timestamp::from_secs(NOW),
    }
}

fn seeded(a: u128, b: u128) -> Harness {
    let h = harness();
    let Ok(_) = h.engine.add_liquidity(alice(), &add_request(alice(), a, b)) else {
        panic!("seed deposit");
    };
    h
}

fn reserves(h: &Harness) -> (u128, u128) {
    let Ok((a, b)) = h.engine.get_reserves(token_x(), token_y()) else {
        panic!("distinct tokens");
    };
    (a.get(), b.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Token identifiers; never the null address.
fn address_strategy() -> impl Strategy<Value = Address> {
    (1u64..=u64::MAX).prop_map(Address::from_low_u64)
}

// ---------------------------------------------------------------------------
// Property 1: Key Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pool_key_is_order_independent(
        a in address_strategy(),
        b in address_strategy(),
    ) {
        prop_assume!(a != b);
        prop_assert_eq!(PoolKey::derive(a, b), PoolKey::derive(b, a));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Pricing Bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pricing_bounds(
        r_in in 1u128..=u128::MAX,
        r_out in 1u128..=u128::MAX,
        small in 0u128..=u128::MAX / 2,
        extra in 0u128..=u128::MAX / 2,
    ) {
        let (r_in, r_out) = (Amount::new(r_in), Amount::new(r_out));
        prop_assert_eq!(get_amount_out(Amount::ZERO, r_in, r_out), Ok(Amount::ZERO));

        let Ok(low) = get_amount_out(Amount::new(small), r_in, r_out) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        let Ok(high) = get_amount_out(Amount::new(small + extra), r_in, r_out) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        prop_assert!(low <= high, "not monotonic: {} > {}", low, high);
        prop_assert!(high < r_out, "drained pool: {} >= {}", high, r_out);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Product Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 0u128..=1_000_000_000u128,
        x_to_y in any::<bool>(),
    ) {
        let h = seeded(ra, rb);
        let path = if x_to_y { vec![token_x(), token_y()] } else { vec![token_y(), token_x()] };
        let request = SwapExactIn {
            amount_in: Amount::new(amount_in),
            amount_out_min: Amount::ZERO,
            path,
            recipient: bob(),
            deadline: Timestamp::from_secs(NOW),
        };
        let Ok(_) = h.engine.swap_exact_tokens_for_tokens(bob(), &request) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        let (na, nb) = reserves(&h);
        prop_assert!(na * nb >= ra * rb, "k decreased: {} < {}", na * nb, ra * rb);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_returns_at_most_credited(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        add_a in 1u128..=1_000_000_000u128,
        add_b in 1u128..=1_000_000_000u128,
    ) {
        let h = seeded(ra, rb);
        let Ok(deposit) = h.engine.add_liquidity(bob(), &add_request(bob(), add_a, add_b)) else {
            // Disproportionate desired amounts are rejected; nothing to check.
            return Ok(());
        };
        let Ok(withdrawal) =
            h.engine.remove_liquidity(bob(), &remove_request(bob(), deposit.liquidity))
        else {
            return Err(TestCaseError::fail("withdrawal failed"));
        };
        prop_assert!(withdrawal.amount_a <= deposit.amount_a);
        prop_assert!(withdrawal.amount_b <= deposit.amount_b);
        prop_assert_eq!(h.engine.shares_of(token_x(), token_y(), bob()), Ok(Shares::ZERO));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Deadline Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_expired_calls_change_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        late_by in 1u64..=1_000_000u64,
        amount in 1u128..=1_000_000u128,
    ) {
        let h = seeded(ra, rb);
        let before = h.engine.pool(token_x(), token_y());
        h.clock.advance(late_by);

        let swap = SwapExactIn {
            amount_in: Amount::new(amount),
            amount_out_min: Amount::ZERO,
            path: vec![token_x(), token_y()],
            recipient: bob(),
            deadline: Timestamp::from_secs(NOW),
        };
        prop_assert!(h.engine.swap_exact_tokens_for_tokens(bob(), &swap).is_err());
        prop_assert!(h.engine.add_liquidity(bob(), &add_request(bob(), amount, amount)).is_err());
        prop_assert!(h
            .engine
            .remove_liquidity(alice(), &remove_request(alice(), Shares::new(amount)))
            .is_err());

        prop_assert_eq!(h.engine.pool(token_x(), token_y()), before);
        prop_assert_eq!(h.sink.len(), 1);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Share Accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_sum_to_total(
        ops in prop::collection::vec((any::<bool>(), any::<bool>(), 1u128..=100_000u128), 1..20),
    ) {
        let h = seeded(1_000_000, 1_000_000);
        for (is_add, use_bob, amount) in ops {
            let who = if use_bob { bob() } else { alice() };
            if is_add {
                let _ = h.engine.add_liquidity(who, &add_request(who, amount, amount));
            } else {
                let _ = h.engine.remove_liquidity(who, &remove_request(who, Shares::new(amount)));
            }
        }
        let Ok(Some(pool)) = h.engine.pool(token_x(), token_y()) else {
            return Err(TestCaseError::fail("pool missing"));
        };
        prop_assert!(pool.shares_balanced());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Custody Tracking
// ---------------------------------------------------------------------------

/// One step of a random session; `Freeze` toggles transfers of `token_y`.
#[derive(Debug, Clone)]
enum Step {
    Add(u128, u128),
    Swap(bool, u128),
    Remove(u128),
    Freeze,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u128..=100_000u128, 1u128..=100_000u128).prop_map(|(a, b)| Step::Add(a, b)),
        (any::<bool>(), 1u128..=100_000u128).prop_map(|(x_to_y, n)| Step::Swap(x_to_y, n)),
        (1u128..=200_000u128).prop_map(Step::Remove),
        Just(Step::Freeze),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_custody_tracks_reserves(
        steps in prop::collection::vec(step_strategy(), 1..30),
    ) {
        let h = seeded(1_000_000, 1_000_000);
        let mut frozen = false;
        let (mut excess_x, mut excess_y) = (0u128, 0u128);

        for step in steps {
            match step {
                Step::Add(a, b) => {
                    if let Ok(d) = h.engine.add_liquidity(bob(), &add_request(bob(), a, b)) {
                        excess_x += a - d.amount_a.get();
                        excess_y += b - d.amount_b.get();
                    }
                }
                Step::Swap(x_to_y, n) => {
                    let path = if x_to_y { vec![token_x(), token_y()] } else { vec![token_y(), token_x()] };
                    let request = SwapExactIn {
                        amount_in: Amount::new(n),
                        amount_out_min: Amount::ZERO,
                        path,
                        recipient: bob(),
                        deadline: Timestamp::from_secs(NOW),
                    };
                    let _ = h.engine.swap_exact_tokens_for_tokens(bob(), &request);
                }
                Step::Remove(n) => {
                    let _ = h.engine.remove_liquidity(alice(), &remove_request(alice(), Shares::new(n)));
                }
                Step::Freeze => {
                    if frozen {
                        h.ledger.unfreeze(&token_y());
                    } else {
                        h.ledger.freeze(&token_y());
                    }
                    frozen = !frozen;
                }
            }

            let (ra, rb) = reserves(&h);
            prop_assert_eq!(h.ledger.balance_of(&token_x(), &custody()).get(), ra + excess_x);
            prop_assert_eq!(h.ledger.balance_of(&token_y(), &custody()).get(), rb + excess_y);
        }
    }
}
