//! Property-based fuzzing for the pool state machine
//!
//! Run with: cargo test -p pool_model
//! Increase cases: PROPTEST_CASES=5000 cargo test -p pool_model
//!
//! This suite implements:
//! - Conservation checking across an action-based state machine
//! - Global invariants (reserve consistency, share conservation, k growth)
//! - Focused property tests for each operation's rounding direction

use pool_model::*;
use proptest::prelude::*;

// ============================================================================
// WORLD: ONE POOL, ONE LP/TRADER, EXTERNAL BALANCES TRACKED
// ============================================================================

/// Pool plus the caller's wallet, so token conservation is observable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct World {
    pool: Pool,
    user_x: u64,
    user_y: u64,
    user_shares: u64,
}

impl World {
    fn new(fee_bps: u16) -> Self {
        World {
            pool: Pool::new(fee_bps).unwrap(),
            user_x: 1 << 50,
            user_y: 1 << 50,
            user_shares: 0,
        }
    }

    fn total_x(&self) -> u128 {
        self.user_x as u128 + self.pool.reserve_x as u128
    }

    fn total_y(&self) -> u128 {
        self.user_y as u128 + self.pool.reserve_y as u128
    }

    fn assert_invariants(&self) {
        assert!(
            self.pool.reserves_consistent(),
            "reserve consistency violated: {:?}",
            self.pool
        );
        // Single LP: the wallet holds the entire supply
        assert_eq!(
            self.user_shares, self.pool.total_shares,
            "share conservation violated"
        );
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Deposit { shares: u64 },
    Withdraw { shares: u64 },
    Swap { x_to_y: bool, amount_in: u64 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1u64..=1 << 30).prop_map(|shares| Action::Deposit { shares }),
        (1u64..=1 << 30).prop_map(|shares| Action::Withdraw { shares }),
        (any::<bool>(), 1u64..=1 << 30)
            .prop_map(|(x_to_y, amount_in)| Action::Swap { x_to_y, amount_in }),
    ]
}

/// Apply one action; on a rejected quote the world is untouched
fn step(world: &mut World, action: Action) {
    let before = *world;
    match action {
        Action::Deposit { shares } => {
            match quote_deposit(&world.pool, shares, world.user_x, world.user_y) {
                Ok(quote) => {
                    world.user_x -= quote.required_x;
                    world.user_y -= quote.required_y;
                    world.user_shares += shares;
                    world.pool = quote.pool;
                }
                Err(_) => assert_eq!(*world, before, "failed deposit must not mutate"),
            }
        }
        Action::Withdraw { shares } => {
            if shares > world.user_shares {
                // Harness-level InsufficientShares: the model agrees
                assert_eq!(
                    quote_withdraw(&world.pool, shares, 0, 0),
                    Err(PoolError::InsufficientShares)
                );
                return;
            }
            match quote_withdraw(&world.pool, shares, 0, 0) {
                Ok(quote) => {
                    world.user_x += quote.amount_x;
                    world.user_y += quote.amount_y;
                    world.user_shares -= shares;
                    world.pool = quote.pool;
                }
                Err(_) => assert_eq!(*world, before, "failed withdraw must not mutate"),
            }
        }
        Action::Swap { x_to_y, amount_in } => {
            let direction = if x_to_y {
                SwapDirection::XtoY
            } else {
                SwapDirection::YtoX
            };
            let funds = if x_to_y { world.user_x } else { world.user_y };
            if amount_in > funds {
                return;
            }
            let k_before = world.pool.k();
            match quote_swap(&world.pool, direction, amount_in, 0) {
                Ok(quote) => {
                    if x_to_y {
                        world.user_x -= amount_in;
                        world.user_y += quote.amount_out;
                    } else {
                        world.user_y -= amount_in;
                        world.user_x += quote.amount_out;
                    }
                    world.pool = quote.pool;
                    assert!(world.pool.k() >= k_before, "k decreased across swap");
                }
                Err(_) => assert_eq!(*world, before, "failed swap must not mutate"),
            }
        }
    }
}

// ============================================================================
// SECTION 1: ACTION-BASED STATE MACHINE
// ============================================================================

proptest! {
    #[test]
    fn fuzz_state_machine_preserves_invariants(
        fee_bps in 0u16..=10_000,
        actions in proptest::collection::vec(action_strategy(), 1..60),
    ) {
        let mut world = World::new(fee_bps);
        let initial_x = world.total_x();
        let initial_y = world.total_y();

        for action in actions {
            step(&mut world, action);
            world.assert_invariants();
            // Tokens only move between wallet and vaults, never appear or
            // vanish
            prop_assert_eq!(world.total_x(), initial_x);
            prop_assert_eq!(world.total_y(), initial_y);
        }
    }
}

// ============================================================================
// SECTION 2: FOCUSED OPERATION PROPERTIES
// ============================================================================

fn funded_pool_strategy() -> impl Strategy<Value = Pool> {
    (1u64..=1 << 40, 1u64..=1 << 40, 1u64..=1 << 40, 0u16..=10_000).prop_map(
        |(reserve_x, reserve_y, total_shares, fee_bps)| Pool {
            reserve_x,
            reserve_y,
            total_shares,
            fee_bps,
            locked: false,
        },
    )
}

proptest! {
    /// Deposit rounding never undercharges: required * total >= shares * reserve
    #[test]
    fn fuzz_deposit_rounds_against_depositor(
        pool in funded_pool_strategy(),
        shares in 1u64..=1 << 40,
    ) {
        if let Ok(quote) = quote_deposit(&pool, shares, u64::MAX, u64::MAX) {
            prop_assert!(
                (quote.required_x as u128) * (pool.total_shares as u128)
                    >= (shares as u128) * (pool.reserve_x as u128)
            );
            prop_assert!(
                (quote.required_y as u128) * (pool.total_shares as u128)
                    >= (shares as u128) * (pool.reserve_y as u128)
            );
            prop_assert!(quote.pool.reserves_consistent());
        }
    }

    /// Deposit-then-withdraw of the same shares never returns more than it cost
    #[test]
    fn fuzz_round_trip_is_adversarial(
        pool in funded_pool_strategy(),
        shares in 1u64..=1 << 40,
    ) {
        if let Ok(deposit) = quote_deposit(&pool, shares, u64::MAX, u64::MAX) {
            let withdraw = quote_withdraw(&deposit.pool, shares, 0, 0).unwrap();
            prop_assert!(withdraw.amount_x <= deposit.required_x);
            prop_assert!(withdraw.amount_y <= deposit.required_y);
        }
    }

    /// Withdrawing the entire supply always empties the pool exactly
    #[test]
    fn fuzz_full_withdraw_empties_pool(pool in funded_pool_strategy()) {
        let quote = quote_withdraw(&pool, pool.total_shares, 0, 0).unwrap();
        prop_assert_eq!(quote.amount_x, pool.reserve_x);
        prop_assert_eq!(quote.amount_y, pool.reserve_y);
        prop_assert!(quote.pool.reserves_consistent());
    }

    /// k never decreases across a swap; strictly grows when a fee is charged
    #[test]
    fn fuzz_swap_k_monotone(
        pool in funded_pool_strategy(),
        x_to_y in any::<bool>(),
        amount_in in 1u64..=1 << 40,
    ) {
        let direction = if x_to_y { SwapDirection::XtoY } else { SwapDirection::YtoX };
        if let Ok(quote) = quote_swap(&pool, direction, amount_in, 0) {
            prop_assert!(quote.pool.k() >= pool.k());
            if pool.fee_bps > 0 {
                prop_assert!(quote.pool.k() > pool.k());
            }
        }
    }

    /// The output side is never drained to zero by a swap
    #[test]
    fn fuzz_swap_never_drains(
        pool in funded_pool_strategy(),
        amount_in in 1u64..=1 << 40,
    ) {
        if let Ok(quote) = quote_swap(&pool, SwapDirection::XtoY, amount_in, 0) {
            prop_assert!(quote.pool.reserve_y > 0);
        }
    }

    /// A locked pool rejects every operation with PoolLocked
    #[test]
    fn fuzz_locked_pool_rejects_everything(
        pool in funded_pool_strategy(),
        amount in 1u64..=1 << 40,
    ) {
        let locked = Pool { locked: true, ..pool };
        prop_assert_eq!(
            quote_deposit(&locked, amount, u64::MAX, u64::MAX),
            Err(PoolError::PoolLocked)
        );
        prop_assert_eq!(quote_withdraw(&locked, amount, 0, 0), Err(PoolError::PoolLocked));
        prop_assert_eq!(
            quote_swap(&locked, SwapDirection::XtoY, amount, 0),
            Err(PoolError::PoolLocked)
        );
    }
}
