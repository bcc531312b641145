//! End-to-end placement behavior
//!
//! Run with: RUST_LOG=debug cargo test --features tracing -- --nocapture

use arrow_placement::{
    AdjustmentSource, ArrowGlyph, ArrowPlacement, ArrowPlacementEngine, Color, CoordinateSystem,
    Degrees, EngineData, Figure, GridMode, Location, Motion, MotionType, Offset, PlacementError,
    Point, RotationDirection, Turns,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine() -> ArrowPlacementEngine {
    init_tracing();
    ArrowPlacementEngine::builtin().unwrap()
}

fn turns(t: f64) -> Turns {
    Turns::try_new(t).unwrap()
}

fn place(
    engine: &ArrowPlacementEngine,
    letter: &str,
    grid_mode: GridMode,
    motion: Motion,
) -> Result<ArrowPlacement, PlacementError> {
    let figure = Figure::new(letter, grid_mode)
        .with_motion(Color::Blue, motion);
    let glyph = ArrowGlyph::for_motion(Color::Blue, &motion);
    engine.calculate_arrow_position(&glyph, &figure, &motion)
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: got {actual}, expected {expected}"
    );
}

/// A well-formed motion of `motion_type` whose glyph lands on `location`
fn motion_at(motion_type: MotionType, location: Location, dir: RotationDirection) -> Motion {
    let (start, end) = match motion_type {
        MotionType::Static => (location, location),
        MotionType::Dash => (location.opposite(), location),
        MotionType::Pro | MotionType::Anti | MotionType::Float => (
            Location::from_index(location.index() + 7),
            Location::from_index(location.index() + 1),
        ),
    };
    Motion::new(motion_type, start, end, dir, turns(1.0))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn static_north_without_special_entry() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Static,
        Location::N,
        Location::N,
        RotationDirection::None,
        Turns::ZERO,
    );

    assert_eq!(engine.resolver().resolve(&m), Ok(Location::N));
    let adj = engine.adjuster().adjustment("G", &m, Location::N);
    assert_eq!(adj.source, AdjustmentSource::Fallback);

    let p = place(&engine, "G", GridMode::Diamond, m).unwrap();
    let base = engine
        .coordinates()
        .initial_position(&m, Location::N, GridMode::Diamond);
    assert_eq!(p.rotation, Degrees::ZERO);
    assert_close(p.x, base.x - adj.bbox_center.x, "x");
    assert_close(p.y, base.y - adj.bbox_center.y, "y");
}

#[test]
fn pro_clockwise_with_special_entry() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::Clockwise,
        turns(1.0),
    );

    let p = place(&engine, "G", GridMode::Diamond, m).unwrap();
    assert_eq!(p.location, Some(Location::NE));
    assert_eq!(p.rotation.raw(), 45.0);
    assert!(!p.is_mirrored);
    // (618.1, 331.9) + (15, -12) - (75.7, 52)
    assert_close(p.x, 557.4, "x");
    assert_close(p.y, 267.9, "y");
}

#[test]
fn pro_counter_clockwise_is_mirrored() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::CounterClockwise,
        turns(1.0),
    );

    let p = place(&engine, "G", GridMode::Diamond, m).unwrap();
    assert_eq!(p.rotation.raw(), 315.0);
    assert!(p.is_mirrored);
    // Mirrored key flips the local x offset: (-15, -12)
    assert_close(p.x, 527.4, "x");
    assert_close(p.y, 267.9, "y");
}

#[test]
fn absent_special_entry_still_places() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Anti,
        Location::W,
        Location::S,
        RotationDirection::Clockwise,
        turns(2.0),
    );

    let adj = engine.adjuster().adjustment("Z", &m, Location::SW);
    assert_eq!(adj.source, AdjustmentSource::Fallback);
    assert_eq!(adj.offset, Offset::ZERO);
    assert_eq!(adj.bbox_center, Point::new(90.45, 67.3));

    let p = place(&engine, "Z", GridMode::Diamond, m).unwrap();
    assert!(p.is_finite());
    assert!(!p.is_fallback);
}

// =============================================================================
// Float glyphs
// =============================================================================

#[test]
fn float_turns_on_shift_motion_place_as_float() {
    let engine = engine();
    let pro_fl = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::None,
        Turns::FLOAT,
    );
    let float = Motion::new(
        MotionType::Float,
        Location::N,
        Location::E,
        RotationDirection::None,
        Turns::FLOAT,
    );

    let a = place(&engine, "Σ", GridMode::Diamond, pro_fl).unwrap();
    let b = place(&engine, "Σ", GridMode::Diamond, float).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.rotation.raw(), 135.0);

    let adj = engine.adjuster().adjustment("Σ", &pro_fl, Location::NE);
    assert_eq!(adj.source, AdjustmentSource::Special);
}

#[test]
fn float_motion_with_numeric_turns_uses_float_entry() {
    let engine = engine();
    let json = r#"{"motion_type": "float", "start_loc": "w", "end_loc": "s", "turns": 1}"#;
    let m: Motion = serde_json::from_str(json).unwrap();
    assert_eq!(m.turns, Turns::FLOAT);

    let adj = engine.adjuster().adjustment("Σ", &m, Location::SW);
    assert_eq!(adj.source, AdjustmentSource::Special);
    assert_eq!(adj.offset, Offset::new(-8.0, -8.0));

    let p = place(&engine, "Σ", GridMode::Diamond, m).unwrap();
    assert_eq!(p.rotation.raw(), 315.0);
    assert_close(p.x, 331.9 - 8.0 - 55.25, "x");
    assert_close(p.y, 618.1 - 8.0 - 48.0, "y");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn totality_over_enum_space() {
    let engine = engine();
    for mt in MotionType::ALL {
        for dir in RotationDirection::ALL {
            for loc in Location::ALL {
                for mode in GridMode::ALL {
                    let m = motion_at(mt, loc, dir);
                    let angle = engine.rotations().rotation(&m, loc).raw();
                    assert!((0.0..360.0).contains(&angle));
                    let base = engine.coordinates().initial_position(&m, loc, mode);
                    assert!(base.is_finite());

                    let p = place(&engine, "A", mode, m)
                        .unwrap_or_else(|e| panic!("{mt} {dir:?} at {loc} in {mode}: {e}"));
                    assert_eq!(p.location, Some(loc));
                    assert!(p.is_finite());
                }
            }
        }
    }
}

#[test]
fn mirror_symmetry() {
    let engine = engine();
    let kinds = [
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Dash,
        MotionType::Static,
    ];
    for mt in kinds {
        for loc in Location::ALL {
            let cw = motion_at(mt, loc, RotationDirection::Clockwise);
            let ccw = cw.with_prop_rot_dir(RotationDirection::CounterClockwise);

            let a = place(&engine, "A", GridMode::Diamond, cw).unwrap();
            let b = place(&engine, "A", GridMode::Diamond, ccw).unwrap();

            assert_eq!(b.rotation, a.rotation.mirrored(), "{mt} at {loc}");
            assert_ne!(a.is_mirrored, b.is_mirrored, "{mt} at {loc}");
        }
    }
}

#[test]
fn determinism() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Anti,
        Location::NE,
        Location::SE,
        RotationDirection::CounterClockwise,
        turns(1.0),
    );
    let first = place(&engine, "A", GridMode::Box, m).unwrap();
    for _ in 0..100 {
        let again = place(&engine, "A", GridMode::Box, m).unwrap();
        assert_eq!(again.x.to_bits(), first.x.to_bits());
        assert_eq!(again.y.to_bits(), first.y.to_bits());
        let (a, b) = (again.rotation.raw(), first.rotation.raw());
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn concurrent_calls_agree() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Pro,
        Location::S,
        Location::W,
        RotationDirection::Clockwise,
        turns(0.0),
    );
    let run = || place(&engine, "A", GridMode::Diamond, m);
    let expected = run().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(run)).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Ok(expected));
        }
    });
}

#[test]
fn fallback_safety_for_every_letter_and_turn() {
    let engine = engine();
    for letter in ["", "?", "Ω", "W-"] {
        for t in Turns::all_numeric() {
            let dir = RotationDirection::Clockwise;
            let m = Motion::new(MotionType::Dash, Location::E, Location::W, dir, t);
            let adj = engine.adjuster().adjustment(letter, &m, Location::W);
            let center = adj.bbox_center;
            assert_eq!(adj.source, AdjustmentSource::Fallback);
            assert!(center.is_finite() && center.x > 0.0 && center.y > 0.0);
        }
    }
}

#[test]
fn malformed_motion_reports_unresolved_location() {
    let engine = engine();
    let m = Motion::new(
        MotionType::Dash,
        Location::N,
        Location::E,
        RotationDirection::None,
        Turns::ZERO,
    );
    let err = place(&engine, "A", GridMode::Diamond, m).unwrap_err();
    assert!(matches!(
        err,
        PlacementError::UnresolvedLocation {
            motion_type: MotionType::Dash,
            start_loc: Location::N,
            end_loc: Location::E,
            ..
        }
    ));
}

// =============================================================================
// Figures
// =============================================================================

#[test]
fn place_figure_updates_every_glyph() {
    let engine = engine();
    let blue = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::Clockwise,
        turns(1.0),
    );
    let red = Motion::new(
        MotionType::Pro,
        Location::S,
        Location::W,
        RotationDirection::Clockwise,
        turns(1.0),
    );
    let figure = Figure::new("G", GridMode::Diamond)
        .with_motion(Color::Blue, blue)
        .with_motion(Color::Red, red);

    let placed = engine.place_figure(&figure);

    let b = placed.arrow(Color::Blue).unwrap();
    assert_close(b.position.x, 557.4, "blue x");
    assert_close(b.position.y, 267.9, "blue y");
    assert_eq!(b.rotation_angle.raw(), 45.0);

    // Special offset turned two quadrants: (15, -12) -> (-15, 12)
    let r = placed.arrow(Color::Red).unwrap();
    assert_close(r.position.x, 331.9 - 15.0 - 75.7, "red x");
    assert_close(r.position.y, 618.1 + 12.0 - 52.0, "red y");
    assert_eq!(r.rotation_angle.raw(), 225.0);

    // The input figure is untouched
    assert_eq!(figure.arrow(Color::Blue).unwrap().position, Point::ORIGIN);
}

#[test]
fn place_figure_parks_unplaceable_glyph_at_center() {
    let engine = engine();
    let bad = Motion::new(
        MotionType::Static,
        Location::N,
        Location::S,
        RotationDirection::None,
        Turns::ZERO,
    );
    let figure = Figure::new("A", GridMode::Box).with_motion(Color::Red, bad);

    let placed = engine.place_figure(&figure);
    let r = placed.arrow(Color::Red).unwrap();
    assert_eq!(r.position, CoordinateSystem::canvas_center());
    assert!(r.is_visible);
}

// =============================================================================
// Injected data
// =============================================================================

#[test]
fn injected_dataset_replaces_bundled_one() {
    init_tracing();
    let json = r#"{"special_placements": {"G": {"static": {"0": {"offset": [0, -10]}}}}}"#;
    let engine = ArrowPlacementEngine::from_json_str(json).unwrap();
    let m = Motion::new(
        MotionType::Static,
        Location::N,
        Location::N,
        RotationDirection::None,
        Turns::ZERO,
    );
    let p = place(&engine, "G", GridMode::Diamond, m).unwrap();
    assert_close(p.x, 454.0, "x");
    assert_close(p.y, 331.9 - 10.0 - 55.8, "y");

    // The bundled pro entry for G is gone
    let m = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::Clockwise,
        turns(1.0),
    );
    let adj = engine.adjuster().adjustment("G", &m, Location::NE);
    assert_eq!(adj.source, AdjustmentSource::Fallback);
}

#[test]
fn builtin_engine_matches_default_tables() {
    let data = EngineData::builtin().unwrap();
    assert_eq!(data.coordinates, CoordinateSystem::default());
    assert_eq!(CoordinateSystem::canvas_size(), 950.0);
}
