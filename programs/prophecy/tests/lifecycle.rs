use anchor_lang::prelude::*;

use prophecy::constants::PRECISION;
use prophecy::engine::{settlement, trading};
use prophecy::error::ProphecyError;
use prophecy::state::{Outcome, Side, Stream, UserPosition};

const NOW: i64 = 1_700_000_000;
const ONE: u64 = PRECISION;

fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: ProphecyError) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}

fn open_stream(authority: Pubkey, liquidity: u64) -> Stream {
    Stream::new(
        authority,
        1,
        "A".to_string(),
        "B".to_string(),
        liquidity,
        3600,
        "https://example.com/stream/1".to_string(),
        NOW,
    )
    .unwrap()
}

#[test]
fn full_stream_lifecycle() {
    let authority = Pubkey::new_unique();
    let mut stream = open_stream(authority, 100 * ONE);

    let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());
    let mut alice_position = UserPosition::default();
    let mut bob_position = UserPosition::default();

    trading::buy(&mut stream, &mut alice_position, alice, 1, 2 * ONE, NOW + 10).unwrap();
    trading::buy(&mut stream, &mut bob_position, bob, 2, ONE, NOW + 20).unwrap();
    assert_eq!(stream.total_pool, 3 * ONE);

    assert_err(
        settlement::end_stream(&mut stream, &bob, 1, NOW + 3600),
        ProphecyError::Unauthorized,
    );
    assert_err(
        settlement::end_stream(&mut stream, &authority, 1, NOW + 100),
        ProphecyError::StreamNotEnded,
    );

    settlement::end_stream(&mut stream, &authority, 1, NOW + 3600).unwrap();
    assert!(!stream.is_active);
    assert_eq!(stream.winning_side, Outcome::SideA);

    assert_err(
        trading::buy(&mut stream, &mut bob_position, bob, 2, ONE, NOW + 3700),
        ProphecyError::StreamNotActive,
    );

    let expected = (stream.total_pool as u128 * alice_position.side_a_shares as u128
        / stream.side_a_shares as u128) as u64;
    let receipt = settlement::claim(&stream, &mut alice_position, &alice).unwrap();
    assert_eq!(receipt.payout, expected);
    assert!(receipt.payout > 0);

    assert_err(
        settlement::claim(&stream, &mut alice_position, &alice),
        ProphecyError::AlreadyClaimed,
    );
    assert_err(
        settlement::claim(&stream, &mut bob_position, &bob),
        ProphecyError::NoWinningShares,
    );

    assert_eq!(
        settlement::emergency_withdraw(&stream, &authority, 42).unwrap(),
        42
    );
}

#[test]
fn unscaled_scenario_matches_reference_numbers() {
    let mut stream = open_stream(Pubkey::new_unique(), 100);
    let mut position = UserPosition::default();

    trading::buy(&mut stream, &mut position, Pubkey::new_unique(), 1, 5, NOW).unwrap();

    assert_eq!(stream.side_a_reserve, 46);
    assert_eq!(stream.side_b_reserve, 55);
    assert_eq!(stream.side_a_shares, 4);
}

#[test]
fn selling_straight_back_never_returns_more_than_paid() {
    // 11 on side A of a 50/50 pool, then 38 SOL into a 100 SOL pool followed
    // by a large buy at the skewed price
    for (liquidity, setup, amount) in [
        (100, 0, 11),
        (100 * ONE, 38 * ONE, 55_765_904_320),
    ] {
        let mut stream = open_stream(Pubkey::new_unique(), liquidity);
        if setup > 0 {
            let mut other = UserPosition::default();
            trading::buy(&mut stream, &mut other, Pubkey::new_unique(), 1, setup, NOW).unwrap();
        }

        let user = Pubkey::new_unique();
        let mut position = UserPosition::default();
        let bought = trading::buy(&mut stream, &mut position, user, 1, amount, NOW).unwrap();
        let sold =
            trading::sell(&mut stream, &mut position, user, 1, bought.amount_out, NOW).unwrap();

        assert!(sold.amount_out <= amount, "{} > {amount}", sold.amount_out);
    }
}

#[test]
fn invariants_hold_across_trade_sequence() {
    let mut stream = open_stream(Pubkey::new_unique(), 100 * ONE);
    let users: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
    let mut positions = vec![UserPosition::default(); users.len()];

    // Small deterministic LCG so the sequence is reproducible
    let mut seed: u64 = 0x5eed;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        seed >> 33
    };

    let mut last_pool = 0;
    let mut paid_out = 0;
    for step in 0..200 {
        let who = (next() % 3) as usize;
        let side = if next() % 2 == 0 { Side::A } else { Side::B };
        let held = positions[who].shares(side);

        if held > 0 && next() % 3 == 0 {
            let shares = held / 2 + 1;
            let receipt =
                trading::sell(&mut stream, &mut positions[who], users[who], side.id(), shares, NOW)
                    .unwrap();
            paid_out += receipt.amount_out;
        } else {
            let amount = ONE / 1_000 + next() % (5 * ONE);
            let k_before = stream.side_a_reserve as u128 * stream.side_b_reserve as u128;
            let (_, opposite) = stream.reserves_for(side);
            trading::buy(&mut stream, &mut positions[who], users[who], side.id(), amount, NOW)
                .unwrap();
            let (own_after, _) = stream.reserves_for(side);
            let expected = k_before.div_ceil((opposite + amount) as u128);
            assert_eq!(own_after as u128, expected, "step {step}");
        }

        assert!(stream.side_a_reserve > 0 && stream.side_b_reserve > 0);
        assert!(stream.total_pool >= last_pool);
        last_pool = stream.total_pool;

        // Deposits net of sells always back every outstanding share
        let outstanding = stream.side_a_shares + stream.side_b_shares;
        assert!(stream.total_pool - paid_out >= outstanding, "step {step}");

        for side in [Side::A, Side::B] {
            let held: u64 = positions.iter().map(|p| p.shares(side)).sum();
            assert_eq!(held, stream.outstanding_shares(side), "step {step}");
        }
    }
}

#[test]
fn payouts_never_exceed_pool() {
    let authority = Pubkey::new_unique();
    let mut stream = open_stream(authority, 100 * ONE);
    let users: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
    let mut positions = vec![UserPosition::default(); users.len()];

    for (i, user) in users.iter().enumerate() {
        let side = if i % 2 == 0 { 1 } else { 2 };
        let amount = (i as u64 + 1) * ONE + 123;
        trading::buy(&mut stream, &mut positions[i], *user, side, amount, NOW).unwrap();
    }
    settlement::end_stream(&mut stream, &authority, 2, NOW + 3600).unwrap();

    let mut paid = 0;
    for (i, user) in users.iter().enumerate() {
        match settlement::claim(&stream, &mut positions[i], user) {
            Ok(receipt) => paid += receipt.payout,
            Err(err) => {
                let expected: anchor_lang::error::Error = ProphecyError::NoWinningShares.into();
                assert_eq!(err, expected);
            }
        }
    }

    assert!(paid <= stream.total_pool);
    assert!(stream.total_pool - paid < users.len() as u64);
}
