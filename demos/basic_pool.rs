//! Constant product pool walkthrough.
//!
//! Seeds a USDC/WETH pool, trades against it in both directions, queries
//! prices and reserves, and exits, printing ledger balances along the way.
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic_pool
//! ```

use std::sync::Arc;

use pair_amm::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Pair AMM (x · y = k, 0.30% fee) ===\n");

    // ── 1. Host collaborators ───────────────────────────────────────────
    let usdc = Address::from_low_u64(0x05dc);
    let weth = Address::from_low_u64(0x0e7e);
    let lp = Address::from_low_u64(0x1001);
    let trader = Address::from_low_u64(0x2002);
    let custody = Address::from_low_u64(0xc0c0);

    let ledger = Arc::new(MemoryLedger::new());
    for who in [lp, trader] {
        ledger.mint(&usdc, &who, Amount::new(10_000_000));
        ledger.mint(&weth, &who, Amount::new(10_000));
    }
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let deadline = Timestamp::from_secs(1_700_000_300);

    let engine = AmmEngine::new(
        EngineConfig::new(custody)?,
        Arc::clone(&ledger),
        Arc::clone(&clock),
        TracingSink,
    )?;

    // ── 2. Seed the pool: 2 000 000 USDC against 1 000 WETH ─────────────
    let deposit = engine.add_liquidity(
        lp,
        &AddLiquidity {
            token_a: usdc,
            token_b: weth,
            amount_a_desired: Amount::new(2_000_000),
            amount_b_desired: Amount::new(1_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: lp,
            deadline,
        },
    )?;
    println!("Seeded pool, minted {} shares", deposit.liquidity);

    let (ra, rb) = engine.get_reserves(usdc, weth)?;
    println!("  Reserves (canonical): {ra} / {rb}");
    println!("  WETH priced in USDC:  {}", engine.get_price(usdc, weth)?);

    // ── 3. Sell 20 000 USDC for WETH ────────────────────────────────────
    let quote = get_amount_out(Amount::new(20_000), ra, rb)?;
    let bought = engine.swap_exact_tokens_for_tokens(
        trader,
        &SwapExactIn {
            amount_in: Amount::new(20_000),
            amount_out_min: quote,
            path: vec![usdc, weth],
            recipient: trader,
            deadline,
        },
    )?;
    println!("\n--- Swap: sell {} USDC ---", bought.amount_in);
    println!("  Quoted:   {quote}");
    println!("  Received: {} WETH", bought.amount_out);
    println!("  New WETH price: {}", engine.get_price(usdc, weth)?);

    // ── 4. A stale quote is rejected without side effects ───────────────
    let stale = engine.swap_exact_tokens_for_tokens(
        trader,
        &SwapExactIn {
            amount_in: Amount::new(20_000),
            amount_out_min: quote,
            path: vec![usdc, weth],
            recipient: trader,
            deadline,
        },
    );
    println!("\nRepeating the swap with the old quote: {stale:?}");

    // ── 5. Sell the WETH back ───────────────────────────────────────────
    let sold = engine.swap_exact_tokens_for_tokens(
        trader,
        &SwapExactIn {
            amount_in: bought.amount_out,
            amount_out_min: Amount::ZERO,
            path: vec![weth, usdc],
            recipient: trader,
            deadline,
        },
    )?;
    println!(
        "\n--- Swap back: sell {} WETH, receive {} USDC ---",
        sold.amount_in, sold.amount_out
    );

    // ── 6. The deadline passes ──────────────────────────────────────────
    clock.advance(600);
    let late = engine.remove_liquidity(
        lp,
        &RemoveLiquidity {
            token_a: usdc,
            token_b: weth,
            liquidity: deposit.liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: lp,
            deadline,
        },
    );
    println!("\nExit after deadline: {late:?}");

    // ── 7. Exit with a fresh deadline ───────────────────────────────────
    let exit = engine.remove_liquidity(
        lp,
        &RemoveLiquidity {
            token_a: usdc,
            token_b: weth,
            liquidity: deposit.liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: lp,
            deadline: clock.now(),
        },
    )?;
    println!(
        "Exit: {} USDC + {} WETH (fees earned in USDC: {})",
        exit.amount_a,
        exit.amount_b,
        exit.amount_a.get().saturating_sub(2_000_000)
    );

    println!("\nFinal balances:");
    for (name, who) in [("lp", lp), ("trader", trader), ("custody", custody)] {
        println!(
            "  {name:<8} USDC {:>10}  WETH {:>6}",
            ledger.balance_of(&usdc, &who),
            ledger.balance_of(&weth, &who)
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
