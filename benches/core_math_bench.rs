use chrono::Utc;
use criterion::{Criterion, criterion_group, criterion_main};
use pitch_chart::SessionConfig;
use pitch_chart::api::{
    Batter, BattingHand, ChartKind, ChartingSession, InMemoryChartStore, Participants,
    PitchFields, Pitcher, RecordContext, build_pitch_record,
};
use pitch_chart::core::{
    Hand, PlotAxes, PlottedPoint, PointerPoint, StrikeZoneGeometry, ZoneScheme, classify,
};
use pitch_chart::game::{
    BattedType, CountStateMachine, GameState, HitOutcome, HitResult, PitchEvent,
};
use pitch_chart::interaction::{PlotState, PlotTarget};
use std::hint::black_box;

fn bench_pitcher_view_round_trip(c: &mut Criterion) {
    let view = PlotAxes::strike_zone_default()
        .view_config(true)
        .expect("valid axes");

    c.bench_function("pitcher_view_round_trip", |b| {
        b.iter(|| {
            let domain = view
                .to_domain(black_box(PointerPoint::new(143.25, 161.5)))
                .expect("inside plot");
            let _ = view.to_pointer(domain);
        })
    });
}

fn bench_classify_grid_10k(c: &mut Criterion) {
    let geometry = StrikeZoneGeometry::default();
    let points: Vec<PlottedPoint> = (0..10_000)
        .map(|i| {
            let t = f64::from(i);
            PlottedPoint::new((t * 0.37) % 40.0 - 20.0, (t * 0.53) % 48.0 - 12.0)
        })
        .collect();

    c.bench_function("classify_standard13_10k", |b| {
        b.iter(|| {
            for point in black_box(&points) {
                let _ = classify(*point, ZoneScheme::Standard13, geometry);
            }
        })
    });
}

fn bench_count_state_machine_game(c: &mut Criterion) {
    let machine = CountStateMachine::default();
    let ground_out =
        PitchEvent::InPlay(HitOutcome::new(BattedType::GroundBall, HitResult::FieldOut));
    let plate_appearance = [
        PitchEvent::Ball,
        PitchEvent::CalledStrike,
        PitchEvent::Foul,
        PitchEvent::Foul,
        PitchEvent::Ball,
        ground_out,
    ];
    let events: Vec<PitchEvent> = plate_appearance
        .iter()
        .copied()
        .cycle()
        .take(6 * 54)
        .collect();

    c.bench_function("count_state_machine_nine_innings", |b| {
        b.iter(|| {
            let _ = machine.apply_all(GameState::opening(), black_box(events.iter().copied()));
        })
    });
}

fn bench_submit_pitch_in_memory(c: &mut Criterion) {
    let participants = Participants::default()
        .with_pitcher(Pitcher::new("Alvarez", Hand::Right).expect("pitcher"))
        .with_batter(Batter::new("Brooks", BattingHand::Switch).expect("batter"));
    let mut plot = PlotState::default();
    plot.plot(PlotTarget::StrikeZone, PlottedPoint::new(1.0, 13.0));
    let transition = CountStateMachine::default().apply(GameState::opening(), PitchEvent::Ball);

    c.bench_function("build_pitch_record", |b| {
        b.iter(|| {
            let _ = build_pitch_record(
                black_box(&participants),
                black_box(plot),
                &PitchFields::default(),
                RecordContext::Game {
                    event: PitchEvent::Ball,
                    transition,
                },
                Utc::now(),
            )
            .expect("record");
        })
    });

    let mut store = InMemoryChartStore::new();
    let chart_id = store
        .create_chart("bench", ChartKind::Bullpen, participants)
        .expect("chart");
    let mut session =
        ChartingSession::load(store, chart_id, SessionConfig::default()).expect("session");

    c.bench_function("bullpen_submit_in_memory", |b| {
        b.iter(|| {
            session
                .plot_domain(PlotTarget::StrikeZone, PlottedPoint::new(-3.0, 18.0))
                .expect("plot");
            let _ = session.submit().expect("submit");
        })
    });
}

criterion_group!(
    benches,
    bench_pitcher_view_round_trip,
    bench_classify_grid_10k,
    bench_count_state_machine_game,
    bench_submit_pitch_in_memory
);
criterion_main!(benches);
