//! End-to-end play-throughs of the sprint review slide.

mod common;

use common::{controller, tile, REQUIRED};
use slide_rush::{Bounds, GameEvent, Intent, Point, Screen};

const SLIDE: Bounds = Bounds::new(40.0, 80.0, 840.0, 580.0);

// =============================================================================
// Start
// =============================================================================

/// Starting a game empties the slide and fills the timer.
#[test]
fn test_start_game_resets_session() {
    let mut game = controller();
    let ticket = game.start_game();
    game.place_tile(tile(&game, "header"));
    game.tick(ticket);

    game.start_game();

    assert_eq!(game.session().screen(), Screen::Playing);
    assert!(game.session().placement().is_empty());
    assert_eq!(game.session().remaining(), 10);
    assert!(game.session().outcome().is_none());
}

// =============================================================================
// Manual finish
// =============================================================================

/// Five required tiles placed, finish with 7 seconds left.
#[test]
fn test_all_required_finish_early_succeeds() {
    let mut game = controller();
    let ticket = game.start_game();

    for name in REQUIRED {
        let events = game.place_tile(tile(&game, name));
        assert_eq!(events.len(), 1);
    }
    for _ in 0..3 {
        game.tick(ticket);
    }
    assert_eq!(game.session().remaining(), 7);

    let events = game.finish();

    assert_eq!(
        events.as_slice(),
        &[GameEvent::SessionSucceeded { elapsed: 3 }]
    );
    let outcome = game.session().outcome().unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.elapsed, 3);
    assert_eq!(game.session().screen(), Screen::Result);
    assert!(game.flavor_text().is_some());
}

/// Decoys on the slide do not spoil a win.
#[test]
fn test_decoys_do_not_block_success() {
    let mut game = controller();
    game.start_game();

    for name in REQUIRED.iter().chain(["useless1", "useless2"].iter()) {
        game.place_tile(tile(&game, name));
    }

    assert_eq!(
        game.finish().as_slice(),
        &[GameEvent::SessionSucceeded { elapsed: 0 }]
    );
}

/// Removing a required tile before finishing loses.
#[test]
fn test_removed_required_tile_fails() {
    let mut game = controller();
    game.start_game();
    for name in REQUIRED {
        game.place_tile(tile(&game, name));
    }
    game.remove_tile(tile(&game, "chart"));

    assert_eq!(
        game.finish().as_slice(),
        &[GameEvent::SessionFailed { elapsed: 0 }]
    );
}

// =============================================================================
// Expiry
// =============================================================================

/// Header and list only, timer runs out: one automatic failure.
#[test]
fn test_timer_expiry_fails_once() {
    let mut game = controller();
    let ticket = game.start_game();
    game.place_tile(tile(&game, "header"));
    game.place_tile(tile(&game, "list"));

    let mut events = Vec::new();
    for _ in 0..10 {
        events.extend(game.tick(ticket));
    }
    // Late ticks and a late click on "done" change nothing
    events.extend(game.tick(ticket));
    events.extend(game.finish());

    assert_eq!(events, vec![GameEvent::SessionFailed { elapsed: 10 }]);
    let outcome = game.session().outcome().unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.elapsed, 10);
    assert_eq!(game.session().remaining(), 0);
}

/// Expiry and manual finish agree for the same placement.
#[test]
fn test_expiry_matches_manual_finish() {
    let mut manual = controller();
    let mut expired = controller();
    let manual_ticket = manual.start_game();
    let expired_ticket = expired.start_game();

    for game in [&mut manual, &mut expired] {
        for name in REQUIRED {
            let id = tile(game, name);
            game.place_tile(id);
        }
    }

    for _ in 0..9 {
        manual.tick(manual_ticket);
        expired.tick(expired_ticket);
    }
    let manual_events = manual.finish();
    let expired_events = expired.tick(expired_ticket);

    assert_eq!(
        manual_events.as_slice(),
        &[GameEvent::SessionSucceeded { elapsed: 9 }]
    );
    assert_eq!(
        expired_events.as_slice(),
        &[GameEvent::SessionSucceeded { elapsed: 10 }]
    );
    for game in [&manual, &expired] {
        let outcome = game.session().outcome().unwrap();
        assert_eq!(game.session().screen(), Screen::Result);
        assert!(outcome.success);
        assert_eq!(outcome.elapsed, 10 - game.session().remaining());
    }
}

// =============================================================================
// Drag and drop
// =============================================================================

/// A drop outside the slide changes nothing and says nothing.
#[test]
fn test_drop_outside_is_silent() {
    let mut game = controller();
    game.start_game();
    let image = tile(&game, "image");

    game.dispatch(Intent::BeginDrag(image));
    let events = game.dispatch(Intent::Drop {
        pointer: Point::new(900.0, 300.0),
        slide: SLIDE,
    });
    game.dispatch(Intent::EndDrag);

    assert!(events.is_empty());
    assert!(game.session().placement().is_empty());
}

/// Dragging a placed tile off the slide leaves it placed; only removal
/// takes it off.
#[test]
fn test_drag_off_slide_keeps_tile() {
    let mut game = controller();
    game.start_game();
    let header = tile(&game, "header");

    game.dispatch(Intent::BeginDrag(header));
    game.dispatch(Intent::Drop {
        pointer: Point::new(40.0, 80.0),
        slide: SLIDE,
    });
    game.dispatch(Intent::EndDrag);
    assert!(game.session().is_placed(header));

    game.dispatch(Intent::BeginDrag(header));
    game.dispatch(Intent::Drop {
        pointer: Point::new(0.0, 0.0),
        slide: SLIDE,
    });
    game.dispatch(Intent::EndDrag);
    assert!(game.session().is_placed(header));

    let events = game.dispatch(Intent::RemoveTile(header));
    assert_eq!(
        events.as_slice(),
        &[GameEvent::TileRemoved { tile: header }]
    );
    assert!(!game.session().is_placed(header));
}

/// Dropping the same tile twice reports it as already placed.
#[test]
fn test_second_drop_reports_already_placed() {
    let mut game = controller();
    game.start_game();
    let plans = tile(&game, "plans");
    let inside = Intent::Drop {
        pointer: Point::new(100.0, 100.0),
        slide: SLIDE,
    };

    game.dispatch(Intent::BeginDrag(plans));
    let first = game.dispatch(inside);
    let second = game.dispatch(inside);

    assert_eq!(first.as_slice(), &[GameEvent::TilePlaced { tile: plans }]);
    assert_eq!(
        second.as_slice(),
        &[GameEvent::TileAlreadyPlaced { tile: plans }]
    );
    assert_eq!(game.session().placed_count(), 1);
}

/// Restarting mid-drag forgets the drag.
#[test]
fn test_restart_clears_drag() {
    let mut game = controller();
    game.start_game();
    game.begin_drag(tile(&game, "list"));

    game.start_game();

    assert!(game.dragging().is_none());
    assert!(game.drop_at(Point::new(100.0, 100.0), SLIDE).is_empty());
}

// =============================================================================
// Presentation helpers
// =============================================================================

/// The timer turns critical for its last three seconds.
#[test]
fn test_time_critical_window() {
    let mut game = controller();
    let ticket = game.start_game();

    let mut critical = Vec::new();
    for _ in 0..9 {
        game.tick(ticket);
        critical.push(game.session().is_time_critical());
    }

    assert_eq!(
        critical,
        vec![false, false, false, false, false, false, true, true, true]
    );
}

/// Every tile gets a position in range on each start.
#[test]
fn test_layout_rolled_per_session() {
    let mut game = controller();
    game.start_game();
    let first = game.session().layout().clone();
    game.start_game();
    let second = game.session().layout().clone();

    for id in game.session().tiles().ids() {
        for layout in [&first, &second] {
            let pos = layout.position(id).unwrap();
            assert!((5.0..65.0).contains(&pos.x));
            assert!((5.0..65.0).contains(&pos.y));
        }
    }
    assert_ne!(first, second);
}

/// Acknowledgement text exists for placements and results.
#[test]
fn test_acknowledgements_for_play() {
    let mut game = controller();
    game.start_game();

    let placed = game.place_tile(tile(&game, "header"));
    let finished = game.finish();

    assert!(placed[0].acknowledgement().is_some());
    assert!(finished[0].acknowledgement().is_some());
}
