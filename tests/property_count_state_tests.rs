use pitch_chart::game::{
    BattedType, CountStateMachine, GameState, Half, HitOutcome, HitResult, PitchEvent,
};
use proptest::prelude::*;

fn batted_type_strategy() -> impl Strategy<Value = BattedType> {
    prop_oneof![
        Just(BattedType::GroundBall),
        Just(BattedType::FlyBall),
        Just(BattedType::LineDrive),
        Just(BattedType::Popup),
        Just(BattedType::Bunt),
    ]
}

fn hit_result_strategy() -> impl Strategy<Value = HitResult> {
    prop_oneof![
        Just(HitResult::Single),
        Just(HitResult::Double),
        Just(HitResult::Triple),
        Just(HitResult::HomeRun),
        Just(HitResult::DoublePlay),
        Just(HitResult::TriplePlay),
        Just(HitResult::FieldersChoice),
        Just(HitResult::Error),
        Just(HitResult::FieldOut),
    ]
}

fn event_strategy() -> impl Strategy<Value = PitchEvent> {
    prop_oneof![
        Just(PitchEvent::Ball),
        Just(PitchEvent::CalledStrike),
        Just(PitchEvent::SwingingStrike),
        Just(PitchEvent::Foul),
        Just(PitchEvent::StrikeoutLooking),
        Just(PitchEvent::StrikeoutSwinging),
        Just(PitchEvent::Walk),
        Just(PitchEvent::HitByPitch),
        (batted_type_strategy(), hit_result_strategy())
            .prop_map(|(batted, result)| PitchEvent::InPlay(HitOutcome::new(batted, result))),
        (0u8..=3).prop_map(|outs_recorded| PitchEvent::BaserunnerEvent { outs_recorded }),
    ]
}

fn state_strategy() -> impl Strategy<Value = GameState> {
    (0u8..=3, 0u8..=2, 0u8..=3, 1u32..=12, any::<bool>()).prop_map(
        |(balls, strikes, outs, inning, bottom)| {
            let half = if bottom { Half::Bottom } else { Half::Top };
            GameState::new(balls, strikes, outs, inning, half)
        },
    )
}

proptest! {
    #[test]
    fn balls_never_exceed_three(count in 0usize..64) {
        let machine = CountStateMachine::default();
        let balls = std::iter::repeat_n(PitchEvent::Ball, count);
        let next = machine.apply_all(GameState::opening(), balls);
        prop_assert!(next.balls <= 3);
    }

    #[test]
    fn fouls_never_make_a_third_strike(balls in 0u8..=3, count in 1usize..32) {
        let machine = CountStateMachine::default();
        let state = GameState::new(balls, 2, 0, 1, Half::Top);
        let next = machine.apply_all(state, std::iter::repeat_n(PitchEvent::Foul, count));
        prop_assert_eq!(next.strikes, 2);
        prop_assert_eq!(next.balls, balls);
    }

    #[test]
    fn every_transition_lands_in_resting_ranges(
        state in state_strategy(),
        event in event_strategy(),
        disable_auto_outs in any::<bool>()
    ) {
        let transition = CountStateMachine::new(disable_auto_outs).apply(state, event);
        let next = transition.next;

        prop_assert!(next.balls <= 3);
        prop_assert!(next.strikes <= 2);
        prop_assert!(next.outs <= 3);
        prop_assert!(next.inning >= state.inning);
        prop_assert!(
            !(transition.batter_change_required && transition.half_inning_change_required)
        );
        if !disable_auto_outs {
            prop_assert!(next.outs < 3);
        }
    }

    #[test]
    fn rollover_resets_and_advances_exactly_one_half(
        state in state_strategy(),
        event in event_strategy()
    ) {
        let transition = CountStateMachine::default().apply(state, event);
        if transition.half_inning_change_required {
            let next = transition.next;
            prop_assert_eq!((next.balls, next.strikes, next.outs), (0, 0, 0));
            prop_assert_eq!(next.half, state.half.flipped());
            let expected_inning = match state.half {
                Half::Top => state.inning,
                Half::Bottom => state.inning + 1,
            };
            prop_assert_eq!(next.inning, expected_inning);
        }
    }

    #[test]
    fn disabled_auto_outs_never_roll_over(
        state in state_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40)
    ) {
        let machine = CountStateMachine::new(true);
        let mut current = state;
        for event in events {
            let transition = machine.apply(current, event);
            prop_assert!(!transition.half_inning_change_required);
            prop_assert_eq!(transition.next.inning, state.inning);
            prop_assert_eq!(transition.next.half, state.half);
            current = transition.next;
        }
    }
}
