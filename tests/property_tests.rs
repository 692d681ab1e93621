//! Property tests for the resolution engine and the state machine.

use proptest::prelude::*;
use scorebook::core::{Base, Bases, GameConfig, GameState, Half, PlayOutcome, PlayerId, Side};
use scorebook::rules::{resolve, ResultCode};

fn bases_from(first: bool, second: bool, third: bool) -> Bases {
    let runner = |on: bool, name: &str| on.then(|| Some(PlayerId::new(name)));
    Bases::from_runners(runner(first, "r1"), runner(second, "r2"), runner(third, "r3"))
}

fn any_bases() -> impl Strategy<Value = Bases> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(a, b, c)| bases_from(a, b, c))
}

fn any_code() -> impl Strategy<Value = ResultCode> {
    proptest::sample::select(ResultCode::ALL.to_vec())
}

proptest! {
    /// Property: every runner in a review proposal is out, scores or stays.
    #[test]
    fn prop_review_proposal_accounts_for_every_runner(bases in any_bases(), code in any_code()) {
        prop_assume!(code.opens_review());
        let proposal = resolve(code, &bases, None);

        let outs = proposal.moves().iter().filter(|m| m.is_out()).count();
        let runs = proposal.moves().iter().filter(|m| m.is_run()).count();
        let on_base = proposal.moves().iter().filter(|m| m.stays_on_base()).count();
        prop_assert_eq!(outs + runs + on_base, bases.occupied_count() + 1);
    }

    /// Property: pure-out codes leave the batter out of the runner list.
    #[test]
    fn prop_pure_outs_have_no_batter_entry(bases in any_bases()) {
        for code in [ResultCode::Strikeout, ResultCode::GroundOut, ResultCode::FlyOut] {
            let proposal = resolve(code, &bases, None);
            prop_assert!(proposal.batter().is_none());
            prop_assert_eq!(proposal.len(), bases.occupied_count());
            prop_assert_eq!(proposal.outs(), 1);
        }
    }

    /// Property: a walk moves a runner iff every lower base is occupied.
    #[test]
    fn prop_walk_forces_iff_all_below_occupied(
        bases in any_bases(),
        code in proptest::sample::select(vec![
            ResultCode::Walk,
            ResultCode::IntentionalWalk,
            ResultCode::HitByPitch,
        ]),
    ) {
        let proposal = resolve(code, &bases, None);
        for base in bases.occupied() {
            let mv = proposal.runner_from(base).unwrap();
            let moved = mv.destination().base() != Some(base);
            prop_assert_eq!(moved, bases.all_below_occupied(base));
        }
        prop_assert_eq!(proposal.runs(), u32::from(bases.is_loaded()));
        prop_assert!(proposal.outcome().bases.is_occupied(Base::First));
    }

    /// Property: reaching three outs always resolves into a clean side change.
    #[test]
    fn prop_side_change_resets_half_inning(
        start_outs in 0u8..3,
        added in 1u8..4,
        bases in any_bases(),
        bottom in any::<bool>(),
    ) {
        prop_assume!(start_outs + added >= 3);
        let mut state = GameState::new(&GameConfig::default());
        if bottom {
            state.change_side();
        }
        state.apply_outcome(&PlayOutcome::outs_only(&Bases::new(), start_outs));
        prop_assume!(state.check_side_change().is_none());

        let before = state.half_inning();
        let change = state.commit(&PlayOutcome::outs_only(&bases, added), true);

        prop_assert!(change.is_some());
        prop_assert_eq!(state.outs(), 0);
        prop_assert!(state.bases.is_empty());
        prop_assert_eq!(state.side, before.side.flip());
        let expected_inning = if before.half == Half::Bottom { before.inning + 1 } else { before.inning };
        prop_assert_eq!(state.inning, expected_inning);
    }

    /// Property: outs stay below three between operations.
    #[test]
    fn prop_outs_below_threshold(codes in proptest::collection::vec(any_code(), 0..60)) {
        let mut state = GameState::new(&GameConfig::default());
        for code in codes {
            let outcome = resolve(code, &state.bases, None).outcome();
            state.commit(&outcome, code.advances_batting_order());
            prop_assert!(state.outs() < 3);
        }
    }

    /// Property: a full turn through the order returns to the same batter.
    #[test]
    fn prop_batting_order_wraps(start in 0usize..9, side_first in any::<bool>()) {
        let mut state = GameState::new(&GameConfig::default());
        if side_first {
            state.change_side();
        }
        for _ in 0..start {
            state.advance_batter();
        }
        let side = state.side;
        let before = state.batter_index(side);
        for _ in 0..9 {
            state.commit(&PlayOutcome::outs_only(&state.bases.clone(), 0), true);
        }
        prop_assert_eq!(state.batter_index(side), before);
        prop_assert_eq!(state.batter_index(side.flip()), 0);
        prop_assert_eq!(state.side, if side_first { Side::Defense } else { Side::Attack });
    }
}
