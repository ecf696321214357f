use furrow::{
    ContentRegion, EdgePolicy, NavigationConfig, NavigationController, RegionBounds,
    ScrollRegion, WheelIntent, WheelOutcome,
};
use std::time::{Duration, Instant};

const VIEWPORT: f64 = 1000.0;
const SETTLED: Duration = Duration::from_millis(900);

fn in_view() -> Option<RegionBounds> {
    Some(RegionBounds::new(0.0, 800.0))
}

fn wheel(delta_y: f64) -> WheelIntent {
    WheelIntent::new(delta_y, 400.0)
}

fn controller_with_extents(extents: &[f64], config: NavigationConfig) -> NavigationController {
    let mut controller = NavigationController::new(extents.len(), config);
    for (i, extent) in extents.iter().enumerate() {
        controller.mount_region(i + 1, ContentRegion::new(VIEWPORT + extent, VIEWPORT));
    }
    controller
}

fn flat_story() -> NavigationController {
    controller_with_extents(&[0.0; 4], NavigationConfig::default())
}

#[test]
fn test_starts_on_first_chapter_unlocked() {
    let controller = flat_story();

    assert_eq!(controller.active_index(), 1);
    assert!(!controller.is_locked());
    assert_eq!(controller.horizontal_progress(), 0.0);
    assert!(controller.transition().is_none());
}

#[test]
fn test_forward_intents_walk_every_chapter_in_order() {
    let mut controller = flat_story();
    let mut now = Instant::now();
    let mut visited = vec![controller.active_index()];

    for expected in 2..=4 {
        let outcome = controller.on_wheel_intent(wheel(200.0), in_view(), now);
        assert_eq!(
            outcome,
            WheelOutcome::Advanced {
                from: expected - 1,
                to: expected
            }
        );
        visited.push(controller.active_index());
        now += SETTLED;
    }

    assert_eq!(visited, vec![1, 2, 3, 4]);

    let outcome = controller.on_wheel_intent(wheel(200.0), in_view(), now);
    assert_eq!(outcome, WheelOutcome::Suppressed);
    assert_eq!(controller.active_index(), 4);
}

#[test]
fn test_backward_intents_retreat_to_first_chapter() {
    let mut controller = flat_story();
    let mut now = Instant::now();
    controller.on_chapter_tab_click(4);

    for expected in (1..=3).rev() {
        let outcome = controller.on_wheel_intent(wheel(-200.0), in_view(), now);
        assert_eq!(
            outcome,
            WheelOutcome::Advanced {
                from: expected + 1,
                to: expected
            }
        );
        now += SETTLED;
    }

    let outcome = controller.on_wheel_intent(wheel(-200.0), in_view(), now);
    assert_eq!(outcome, WheelOutcome::Suppressed);
    assert_eq!(controller.active_index(), 1);
}

#[test]
fn test_locked_controller_swallows_wheel_in_both_directions() {
    let mut controller = flat_story();
    let start = Instant::now();

    controller.on_wheel_intent(wheel(200.0), in_view(), start);
    assert!(controller.is_locked());
    assert_eq!(controller.active_index(), 2);

    for (i, delta) in [200.0, -200.0, 500.0, -1.0].into_iter().enumerate() {
        let at = start + Duration::from_millis(100 * (i as u64 + 1));
        let outcome = controller.on_wheel_intent(wheel(delta), in_view(), at);
        assert_eq!(outcome, WheelOutcome::Suppressed);
        assert!(outcome.prevents_default());
        assert_eq!(controller.active_index(), 2);
    }
}

#[test]
fn test_settle_timer_releases_lock_after_delay() {
    let mut controller = flat_story();
    let start = Instant::now();
    controller.on_wheel_intent(wheel(200.0), in_view(), start);

    assert!(!controller.tick(start + Duration::from_millis(799)));
    assert!(controller.is_locked());
    assert!(controller.tick(start + Duration::from_millis(800)));
    assert!(!controller.is_locked());
    assert!(controller.transition().is_none());
}

#[test]
fn test_horizontal_region_is_consumed_before_chapter_advance() {
    let mut controller = controller_with_extents(&[0.0, 300.0, 0.0, 0.0], NavigationConfig::default());
    let now = Instant::now();
    controller.on_chapter_tab_click(2);

    let outcome = controller.on_wheel_intent(wheel(100.0), in_view(), now);
    assert!(matches!(outcome, WheelOutcome::Scrolled { offset, .. } if offset == 100.0));
    assert_eq!(controller.active_index(), 2);
    assert!((controller.horizontal_progress() - 1.0 / 3.0).abs() < 1e-9);

    let outcome = controller.on_wheel_intent(wheel(250.0), in_view(), now);
    assert_eq!(
        outcome,
        WheelOutcome::Scrolled {
            offset: 300.0,
            progress: 1.0
        }
    );
    assert_eq!(controller.region(2).map(|r| r.offset()), Some(300.0));
    assert_eq!(controller.active_index(), 2);

    let outcome = controller.on_wheel_intent(wheel(200.0), in_view(), now);
    assert_eq!(outcome, WheelOutcome::Advanced { from: 2, to: 3 });
    assert_eq!(controller.active_index(), 3);
}

#[test]
fn test_backward_intent_scrolls_left_before_retreating() {
    let mut controller = controller_with_extents(&[0.0, 300.0, 0.0, 0.0], NavigationConfig::default());
    let now = Instant::now();
    controller.on_chapter_tab_click(2);
    controller.scroll_active_region(300.0);

    let outcome = controller.on_wheel_intent(wheel(-100.0), in_view(), now);
    assert!(matches!(outcome, WheelOutcome::Scrolled { offset, .. } if offset == 200.0));

    let outcome = controller.on_wheel_intent(wheel(-500.0), in_view(), now);
    assert!(matches!(outcome, WheelOutcome::Scrolled { offset, .. } if offset == 0.0));
    assert_eq!(controller.horizontal_progress(), 0.0);

    let outcome = controller.on_wheel_intent(wheel(-200.0), in_view(), now);
    assert_eq!(outcome, WheelOutcome::Advanced { from: 2, to: 1 });
}

#[test]
fn test_epsilon_treats_near_edge_offset_as_exhausted() {
    let mut controller = controller_with_extents(&[300.0, 0.0, 0.0, 0.0], NavigationConfig::default());
    controller.scroll_active_region(297.0);

    let outcome = controller.on_wheel_intent(wheel(200.0), in_view(), Instant::now());
    assert_eq!(outcome, WheelOutcome::Advanced { from: 1, to: 2 });
}

#[test]
fn test_progress_resets_on_every_chapter_change() {
    let mut controller = controller_with_extents(&[300.0, 300.0, 300.0, 0.0], NavigationConfig::default());
    let mut now = Instant::now();

    controller.scroll_active_region(300.0);
    assert_eq!(controller.horizontal_progress(), 1.0);
    controller.on_wheel_intent(wheel(200.0), in_view(), now);
    assert_eq!(controller.active_index(), 2);
    assert_eq!(controller.horizontal_progress(), 0.0);
    assert_eq!(controller.region(2).map(|r| r.offset()), Some(0.0));

    now += SETTLED;
    controller.tick(now);
    controller.scroll_active_region(150.0);
    assert_eq!(controller.horizontal_progress(), 0.5);
    controller.on_chapter_tab_click(1);
    assert_eq!(controller.horizontal_progress(), 0.0);
    assert_eq!(controller.region(1).map(|r| r.offset()), Some(0.0));

    controller.scroll_active_region(120.0);
    controller.on_next_chapter_click(now);
    assert_eq!(controller.active_index(), 2);
    assert_eq!(controller.horizontal_progress(), 0.0);
}

#[test]
fn test_tab_click_bypasses_lock_and_overrides_transition() {
    let mut controller = flat_story();
    let start = Instant::now();

    controller.on_wheel_intent(wheel(200.0), in_view(), start);
    assert!(controller.is_locked());
    assert_eq!(controller.active_index(), 2);

    controller.on_chapter_tab_click(4);
    assert_eq!(controller.active_index(), 4);
    assert_eq!(controller.horizontal_progress(), 0.0);
    assert!(controller.is_locked());
    assert!(controller.transition().is_none());

    controller.tick(start + SETTLED);
    assert!(!controller.is_locked());
    assert_eq!(controller.active_index(), 4);
}

#[test]
fn test_tab_click_clamps_out_of_range_targets() {
    let mut controller = flat_story();

    controller.on_chapter_tab_click(0);
    assert_eq!(controller.active_index(), 1);

    controller.on_chapter_tab_click(99);
    assert_eq!(controller.active_index(), 4);
}

#[test]
fn test_wheel_outside_chapter_stack_passes_through() {
    let mut controller = flat_story();
    let now = Instant::now();

    let below = Some(RegionBounds::new(500.0, 1300.0));
    let above = Some(RegionBounds::new(-900.0, 50.0));
    for bounds in [below, above, None] {
        let outcome = controller.on_wheel_intent(wheel(200.0), bounds, now);
        assert_eq!(outcome, WheelOutcome::PassThrough);
        assert!(!outcome.prevents_default());
    }
    assert_eq!(controller.active_index(), 1);
    assert!(!controller.is_locked());
}

#[test]
fn test_small_deltas_accumulate_before_advancing() {
    let mut controller = flat_story();
    let now = Instant::now();

    assert_eq!(
        controller.on_wheel_intent(wheel(100.0), in_view(), now),
        WheelOutcome::Suppressed
    );
    assert_eq!(controller.active_index(), 1);
    assert_eq!(
        controller.on_wheel_intent(wheel(100.0), in_view(), now),
        WheelOutcome::Advanced { from: 1, to: 2 }
    );
}

#[test]
fn test_direction_reversal_resets_accumulator() {
    let mut controller = flat_story();
    let now = Instant::now();
    controller.on_chapter_tab_click(2);

    for delta in [100.0, -100.0, 100.0, -100.0] {
        let outcome = controller.on_wheel_intent(wheel(delta), in_view(), now);
        assert_eq!(outcome, WheelOutcome::Suppressed);
    }
    assert_eq!(controller.active_index(), 2);
}

#[test]
fn test_edge_policy_controls_boundary_input() {
    let now = Instant::now();

    let mut swallow = flat_story();
    assert_eq!(
        swallow.on_wheel_intent(wheel(-200.0), in_view(), now),
        WheelOutcome::Suppressed
    );

    let config = NavigationConfig {
        edge_policy: EdgePolicy::Release,
        ..NavigationConfig::default()
    };
    let mut release = controller_with_extents(&[0.0; 4], config);
    assert_eq!(
        release.on_wheel_intent(wheel(-200.0), in_view(), now),
        WheelOutcome::PassThrough
    );
    release.on_chapter_tab_click(4);
    assert_eq!(
        release.on_wheel_intent(wheel(200.0), in_view(), now),
        WheelOutcome::PassThrough
    );
    assert_eq!(release.active_index(), 4);
}

#[test]
fn test_unmounted_region_falls_through_to_chapter_advance() {
    let mut controller: NavigationController =
        NavigationController::new(4, NavigationConfig::default());

    let outcome = controller.on_wheel_intent(wheel(200.0), in_view(), Instant::now());
    assert_eq!(outcome, WheelOutcome::Advanced { from: 1, to: 2 });
    assert!(controller.scroll_active_region(50.0).is_none());
}

#[test]
fn test_finish_transition_releases_lock_and_drops_stale_timer() {
    let mut controller = flat_story();
    let start = Instant::now();

    controller.on_wheel_intent(wheel(200.0), in_view(), start);
    assert!(controller.finish_transition());
    assert!(!controller.is_locked());

    let second = start + Duration::from_millis(100);
    controller.on_wheel_intent(wheel(200.0), in_view(), second);
    assert_eq!(controller.active_index(), 3);

    // The first transition's deadline must not unlock the second one.
    assert!(!controller.tick(start + Duration::from_millis(800)));
    assert!(controller.is_locked());
    assert!(controller.tick(second + Duration::from_millis(800)));
}

#[test]
fn test_teardown_detaches_and_cancels_timer() {
    let mut controller = flat_story();
    let start = Instant::now();
    controller.on_wheel_intent(wheel(200.0), in_view(), start);

    controller.teardown();
    assert!(!controller.is_attached());
    assert!(controller.next_deadline().is_none());
    assert!(!controller.tick(start + SETTLED));

    let later = start + Duration::from_secs(5);
    assert_eq!(
        controller.on_wheel_intent(wheel(200.0), in_view(), later),
        WheelOutcome::PassThrough
    );
    controller.on_chapter_tab_click(4);
    controller.on_next_chapter_click(later);
    assert_eq!(controller.active_index(), 2);
}

#[test]
fn test_next_chapter_click_advances_without_lock() {
    let mut controller = flat_story();
    let now = Instant::now();

    controller.on_next_chapter_click(now);
    assert_eq!(controller.active_index(), 2);
    assert!(!controller.is_locked());
    assert!(controller.transition().is_some_and(|t| t.is_forward()));

    controller.on_chapter_tab_click(4);
    controller.on_next_chapter_click(now);
    assert_eq!(controller.active_index(), 4);
}

#[test]
fn test_horizontal_scroll_observer_normalizes_progress() {
    let mut controller = flat_story();

    controller.on_horizontal_scroll(150.0, 300.0);
    assert_eq!(controller.horizontal_progress(), 0.5);

    controller.on_horizontal_scroll(40.0, 0.0);
    assert_eq!(controller.horizontal_progress(), 0.0);

    controller.on_horizontal_scroll(400.0, 300.0);
    assert_eq!(controller.horizontal_progress(), 1.0);
}

#[test]
fn test_horizontal_wheel_never_changes_chapter() {
    let mut controller = controller_with_extents(&[300.0, 0.0, 0.0, 0.0], NavigationConfig::default());

    assert_eq!(controller.scroll_active_region(1000.0), Some(300.0));
    assert_eq!(controller.scroll_active_region(1000.0), Some(300.0));
    assert_eq!(controller.active_index(), 1);
    assert_eq!(controller.horizontal_progress(), 1.0);
}

#[test]
fn test_horizontal_wheel_is_consumed_while_locked() {
    let mut controller = controller_with_extents(&[300.0, 300.0, 0.0, 0.0], NavigationConfig::default());
    let start = Instant::now();
    controller.scroll_active_region(300.0);
    controller.on_wheel_intent(wheel(200.0), in_view(), start);
    assert!(controller.is_locked());
    assert_eq!(controller.active_index(), 2);

    assert_eq!(controller.scroll_active_region(150.0), None);
    assert_eq!(controller.region(2).map(|r| r.offset()), Some(0.0));
    assert_eq!(controller.horizontal_progress(), 0.0);

    controller.tick(start + SETTLED);
    assert!(!controller.is_locked());
    assert_eq!(controller.scroll_active_region(150.0), Some(150.0));
    assert_eq!(controller.horizontal_progress(), 0.5);
}

#[test]
fn test_transition_progress_and_deadline() {
    let mut controller = flat_story();
    let start = Instant::now();
    controller.on_wheel_intent(wheel(200.0), in_view(), start);

    let transition = *controller.transition().expect("transition in flight");
    assert_eq!((transition.from, transition.to), (1, 2));
    assert_eq!(transition.progress(start), 0.0);
    assert!((transition.progress(start + Duration::from_millis(400)) - 0.5).abs() < 1e-9);
    assert_eq!(transition.progress(start + Duration::from_secs(3)), 1.0);
    assert_eq!(controller.next_deadline(), Some(start + Duration::from_millis(800)));
}

#[test]
fn test_active_index_stays_in_bounds_under_arbitrary_input() {
    let mut controller = controller_with_extents(&[120.0, 0.0, 40.0, 0.0], NavigationConfig::default());
    let mut now = Instant::now();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;

        let delta = (seed % 600) as f64 - 300.0;
        match seed % 7 {
            0 => controller.on_chapter_tab_click((seed % 9) as usize),
            1 => {
                controller.scroll_active_region(delta);
            }
            2 => controller.on_next_chapter_click(now),
            _ => {
                controller.on_wheel_intent(wheel(delta), in_view(), now);
            }
        }
        now += Duration::from_millis(seed % 400);

        let active = controller.active_index();
        assert!((1..=4).contains(&active), "active index {} escaped", active);
        let progress = controller.horizontal_progress();
        assert!((0.0..=1.0).contains(&progress));
    }
}
