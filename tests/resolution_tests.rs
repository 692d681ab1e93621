//! Resolution engine and review session integration tests.

use scorebook::core::{Base, Bases, DoublePlayPolicy, GameConfig, PlayerId};
use scorebook::review::ReviewSession;
use scorebook::rules::{Destination, MovementClass, Origin, ResolutionRules, ResultCode, StandardRules};

fn runner(s: &str) -> Option<Option<PlayerId>> {
    Some(Some(PlayerId::new(s)))
}

fn first_and_third() -> Bases {
    Bases::from_runners(runner("a"), None, runner("c"))
}

// =============================================================================
// Movement Class Tests
// =============================================================================

/// Test that every code has a movement class and review codes move the batter.
#[test]
fn test_every_code_classified() {
    for code in ResultCode::ALL {
        let class = code.movement_class();
        if code.opens_review() {
            assert_ne!(class, MovementClass::Forced, "{code}");
            assert!(code.batter_destination().is_some(), "{code}");
        }
    }
}

/// Test that hit distances add to the runner's base.
#[test]
fn test_advance_values() {
    let bases = first_and_third();
    let rules = StandardRules::default();

    let cases = [
        (ResultCode::Single, Destination::Second),
        (ResultCode::ReachedOnError, Destination::Second),
        (ResultCode::FieldersChoice, Destination::Second),
        (ResultCode::Sacrifice, Destination::Second),
        (ResultCode::Double, Destination::Third),
        (ResultCode::Triple, Destination::Home),
        (ResultCode::HomeRun, Destination::Home),
    ];
    for (code, expected) in cases {
        assert_eq!(rules.runner_destination(code, Base::First, &bases), expected, "{code}");
        assert_eq!(
            rules.runner_destination(code, Base::Third, &bases),
            Destination::Home,
            "{code}"
        );
    }
}

// =============================================================================
// Double Play Policy Tests
// =============================================================================

/// Test the default policy retires first and second and scores third.
#[test]
fn test_double_play_default_policy() {
    let rules = StandardRules::from_config(&GameConfig::default());
    let bases = Bases::from_runners(runner("a"), runner("b"), runner("c"));
    let proposal = rules.resolve(ResultCode::GroundedIntoDoublePlay, &bases, None);

    assert_eq!(proposal.outs(), 3);
    assert_eq!(proposal.runs(), 1);
}

/// Test the opt-in policy only retires the forced runner.
#[test]
fn test_double_play_forced_runner_policy() {
    let config = GameConfig::default().with_double_play(DoublePlayPolicy::ForcedRunnerOnly);
    let rules = StandardRules::from_config(&config);
    let proposal = rules.resolve(ResultCode::GroundedIntoDoublePlay, &first_and_third(), None);

    assert_eq!(proposal.outs(), 2);
    assert_eq!(proposal.runs(), 0);
    assert!(proposal.outcome().bases.is_occupied(Base::Third));
}

// =============================================================================
// Review Session Tests
// =============================================================================

/// Test a review session confirming an edited proposal.
#[test]
fn test_review_edit_and_confirm() {
    let rules = StandardRules::default();
    let batter = PlayerId::new("bat");
    let mut session = ReviewSession::open(&rules, ResultCode::Double, &first_and_third(), Some(&batter));

    assert_eq!(session.runners()[0].origin(), Origin::Batter);
    // Runner from First thrown out at home.
    let index = session
        .runners()
        .iter()
        .position(|m| m.origin() == Origin::First)
        .unwrap();
    session.set_destination(index, Destination::Out).unwrap();

    let play = session.confirm();
    assert!(play.overridden);
    assert_eq!(play.outcome.outs_added, 1);
    assert_eq!(play.outcome.runs, 1);
    assert_eq!(play.outcome.bases.occupant(Base::Second), Some(&batter));
}

/// Test that resetting a session restores the engine's proposal.
#[test]
fn test_review_reset() {
    let rules = StandardRules::default();
    let mut session = ReviewSession::open(&rules, ResultCode::SacrificeFly, &first_and_third(), None);
    let original = session.preview();

    session.set_destination(1, Destination::Third).unwrap();
    assert_ne!(session.preview(), original);

    session.reset();
    assert!(!session.is_overridden());
    assert_eq!(session.preview(), original);
}

/// Test that a destination of None takes the runner off with no out or run.
#[test]
fn test_destination_none() {
    let rules = StandardRules::default();
    let mut session = ReviewSession::open(&rules, ResultCode::Single, &first_and_third(), None);
    session.set_destination(1, Destination::None).unwrap();

    let outcome = session.preview();
    assert_eq!(outcome.runs, 0);
    assert_eq!(outcome.outs_added, 0);
    assert!(!outcome.bases.is_occupied(Base::Third));
}
