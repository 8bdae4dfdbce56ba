use chrono::{TimeZone, Utc};
use pitch_chart::ChartError;
use pitch_chart::api::{
    Batter, BattingHand, Catcher, ChartKind, GameStateMarker, Participants, PitchCorrection,
    PitchFields, PitchId, PitchType, Pitcher, PromptRole, RecordContext, StoredPitch,
    build_pitch_record, restore_game_state,
};
use pitch_chart::core::{Hand, PlottedPoint, ZoneId, ZoneScheme};
use pitch_chart::game::{
    BattedType, CountStateMachine, GameState, Half, HitOutcome, HitResult, PitchEvent,
};
use pitch_chart::interaction::{PlotState, PlotTarget};
use rust_decimal::Decimal;

fn participants() -> Participants {
    Participants::default()
        .with_pitcher(Pitcher::new("Alvarez", Hand::Right).expect("pitcher"))
        .with_batter(Batter::new("Brooks", BattingHand::Switch).expect("batter"))
        .with_catcher(Catcher::new("Cole").expect("catcher"))
}

fn plotted(x: f64, y: f64) -> PlotState {
    let mut plot = PlotState::default();
    plot.plot(PlotTarget::StrikeZone, PlottedPoint::new(x, y));
    plot
}

fn game_context(state: GameState, event: PitchEvent) -> RecordContext {
    RecordContext::Game {
        event,
        transition: CountStateMachine::default().apply(state, event),
    }
}

fn recorded_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 2, 19, 5, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn game_record_carries_post_pitch_state() {
    let fields = PitchFields::default()
        .with_pitch_type(PitchType::Slider)
        .with_velocity(Decimal::new(871, 1));
    let state = GameState::new(1, 1, 0, 2, Half::Top);

    let record = build_pitch_record(
        &participants(),
        plotted(1.5, 10.0),
        &fields,
        game_context(state, PitchEvent::CalledStrike),
        recorded_at(),
    )
    .expect("record");

    assert_eq!(record.pitcher.name, "Alvarez");
    assert_eq!(record.batter.as_ref().map(|b| b.name.as_str()), Some("Brooks"));
    assert_eq!(record.catcher.as_ref().map(|c| c.name.as_str()), Some("Cole"));
    assert_eq!(record.location, PlottedPoint::new(1.5, 10.0));
    assert_eq!(record.event, Some(PitchEvent::CalledStrike));
    assert_eq!(record.game_state, Some(GameState::new(1, 2, 0, 2, Half::Top)));
    assert_eq!(record.velocity, Some(Decimal::new(871, 1)));
    assert_eq!(record.pitch_type, Some(PitchType::Slider));
    assert_eq!(record.zone, None);
    assert_eq!(record.recorded_at, recorded_at());
}

#[test]
fn missing_point_or_participants_are_rejected() {
    let fields = PitchFields::default();
    let context = game_context(GameState::opening(), PitchEvent::Ball);

    let err = build_pitch_record(
        &participants(),
        PlotState::default(),
        &fields,
        context,
        recorded_at(),
    )
    .expect_err("no point");
    assert!(matches!(err, ChartError::MissingPlottedPoint));

    let no_pitcher = Participants {
        pitcher: None,
        ..participants()
    };
    let err = build_pitch_record(&no_pitcher, plotted(0.0, 12.0), &fields, context, recorded_at())
        .expect_err("no pitcher");
    assert!(matches!(
        err,
        ChartError::MissingParticipant {
            role: PromptRole::Pitcher
        }
    ));

    let no_batter = Participants {
        batter: None,
        ..participants()
    };
    let err = build_pitch_record(&no_batter, plotted(0.0, 12.0), &fields, context, recorded_at())
        .expect_err("no batter");
    assert!(matches!(
        err,
        ChartError::MissingParticipant {
            role: PromptRole::Batter
        }
    ));
}

#[test]
fn bullpen_record_needs_no_batter_and_keeps_zones() {
    let pitcher_only = Participants::default()
        .with_pitcher(Pitcher::new("Alvarez", Hand::Left).expect("pitcher"));
    let zone = ZoneId::new(5, ZoneScheme::Standard13).expect("zone");
    let intended = ZoneId::new(1, ZoneScheme::Standard13).expect("zone");
    let fields = PitchFields::default().with_intended_zone(intended);

    let record = build_pitch_record(
        &pitcher_only,
        plotted(0.0, 12.0),
        &fields,
        RecordContext::Bullpen { zone: Some(zone) },
        recorded_at(),
    )
    .expect("bullpen record");

    assert_eq!(record.batter, None);
    assert_eq!(record.event, None);
    assert_eq!(record.game_state, None);
    assert_eq!(record.zone, Some(zone));
    assert_eq!(record.intended_zone, Some(intended));
}

#[test]
fn hit_location_is_kept_only_for_balls_in_play() {
    let mut plot = plotted(0.0, 12.0);
    plot.plot(PlotTarget::Field, PlottedPoint::new(-80.0, 250.0));
    let fields = PitchFields::default();
    let in_play = PitchEvent::InPlay(HitOutcome::new(BattedType::LineDrive, HitResult::Double));

    let record = build_pitch_record(
        &participants(),
        plot,
        &fields,
        game_context(GameState::opening(), in_play),
        recorded_at(),
    )
    .expect("in play record");
    assert_eq!(record.hit_location, Some(PlottedPoint::new(-80.0, 250.0)));

    let record = build_pitch_record(
        &participants(),
        plot,
        &fields,
        game_context(GameState::opening(), PitchEvent::Foul),
        recorded_at(),
    )
    .expect("foul record");
    assert_eq!(record.hit_location, None);
}

#[test]
fn pitch_fields_validate_velocity_and_notes() {
    let fields = PitchFields::default()
        .with_velocity(Decimal::new(955, 1))
        .with_note("   ")
        .validate()
        .expect("valid fields");
    assert_eq!(fields.note, None);

    assert!(PitchFields::default().with_velocity(Decimal::ZERO).validate().is_err());
    assert!(PitchFields::default().with_velocity(Decimal::from(121)).validate().is_err());
}

#[test]
fn corrections_change_only_velocity_and_note() {
    let mut record = build_pitch_record(
        &participants(),
        plotted(0.0, 12.0),
        &PitchFields::default().with_note("first"),
        game_context(GameState::opening(), PitchEvent::Ball),
        recorded_at(),
    )
    .expect("record");
    let original = record.clone();

    assert!(PitchCorrection::default().validate().is_err());

    let correction = PitchCorrection::velocity(Decimal::new(902, 1));
    correction.validate().expect("valid correction");
    correction.apply_to(&mut record);
    assert_eq!(record.velocity, Some(Decimal::new(902, 1)));
    assert_eq!(record.note.as_deref(), Some("first"));

    PitchCorrection::note("").apply_to(&mut record);
    assert_eq!(record.note, None);
    assert_eq!(record.location, original.location);
    assert_eq!(record.game_state, original.game_state);
}

#[test]
fn game_state_restores_from_last_snapshot() {
    let build = |state: GameState, event: PitchEvent| {
        build_pitch_record(
            &participants(),
            plotted(0.0, 12.0),
            &PitchFields::default(),
            game_context(state, event),
            recorded_at(),
        )
        .expect("record")
    };
    let first = build(GameState::opening(), PitchEvent::Ball);
    let second = build(GameState::new(1, 0, 0, 1, Half::Top), PitchEvent::Foul);
    let pitches = vec![
        StoredPitch {
            id: PitchId::new("p1"),
            record: first,
        },
        StoredPitch {
            id: PitchId::new("p2"),
            record: second,
        },
    ];

    assert_eq!(
        restore_game_state(ChartKind::Game, &pitches, None),
        Some(GameState::new(1, 1, 0, 1, Half::Top))
    );
    assert_eq!(restore_game_state(ChartKind::Game, &[], None), Some(GameState::opening()));
    assert_eq!(restore_game_state(ChartKind::Bullpen, &pitches, None), None);
}

#[test]
fn marker_on_the_last_pitch_overrides_its_snapshot() {
    let build = |state: GameState, event: PitchEvent| {
        build_pitch_record(
            &participants(),
            plotted(0.0, 12.0),
            &PitchFields::default(),
            game_context(state, event),
            recorded_at(),
        )
        .expect("record")
    };
    let pitches = vec![
        StoredPitch {
            id: PitchId::new("p1"),
            record: build(GameState::opening(), PitchEvent::Ball),
        },
        StoredPitch {
            id: PitchId::new("p2"),
            record: build(GameState::new(1, 0, 0, 1, Half::Top), PitchEvent::Ball),
        },
    ];
    let bottom = GameState::new(0, 0, 0, 1, Half::Bottom);
    let current = GameStateMarker::after(&pitches, bottom);
    let stale = GameStateMarker::after(&pitches[..1], bottom);

    assert_eq!(
        restore_game_state(ChartKind::Game, &pitches, Some(&current)),
        Some(bottom)
    );
    assert_eq!(
        restore_game_state(ChartKind::Game, &pitches, Some(&stale)),
        Some(GameState::new(2, 0, 0, 1, Half::Top))
    );
    assert_eq!(
        restore_game_state(ChartKind::Game, &[], Some(&GameStateMarker::after(&[], bottom))),
        Some(bottom)
    );
    assert_eq!(restore_game_state(ChartKind::Bullpen, &pitches, Some(&current)), None);
}

#[test]
fn switch_hitter_bats_opposite_the_pitcher() {
    assert_eq!(participants().batter_side(), Some(Hand::Left));
    let lefty = Participants {
        pitcher: Some(Pitcher::new("Diaz", Hand::Left).expect("pitcher")),
        ..participants()
    };
    assert_eq!(lefty.batter_side(), Some(Hand::Right));
    assert!(Pitcher::new("  ", Hand::Right).is_err());
}
