use crate::{
    constants::{
        ADVANCE_THRESHOLD, REGION_THRESHOLD, SCROLL_EPSILON, SETTLE_DELAY,
        TERMINAL_ADVANCE_THRESHOLD, TERMINAL_REGION_THRESHOLD, TERMINAL_SCROLL_EPSILON,
    },
    scroll_region::{ContentRegion, ScrollRegion},
};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// What happens to wheel input that pushes past the first or last chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Consume the event; the page stays pinned to the chapter stack.
    #[default]
    Swallow,
    /// Let the event through so the page scrolls past the stack.
    Release,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Viewport line the chapter stack must straddle to capture the wheel.
    pub region_threshold: f64,
    pub scroll_epsilon: f64,
    /// Accumulated wheel travel required before a chapter change.
    pub advance_threshold: f64,
    pub settle_delay: Duration,
    pub edge_policy: EdgePolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            region_threshold: REGION_THRESHOLD,
            scroll_epsilon: SCROLL_EPSILON,
            advance_threshold: ADVANCE_THRESHOLD,
            settle_delay: SETTLE_DELAY,
            edge_policy: EdgePolicy::Swallow,
        }
    }
}

impl NavigationConfig {
    /// Cell-based preset for terminal hosts.
    pub fn terminal() -> Self {
        Self {
            region_threshold: TERMINAL_REGION_THRESHOLD,
            scroll_epsilon: TERMINAL_SCROLL_EPSILON,
            advance_threshold: TERMINAL_ADVANCE_THRESHOLD,
            ..Self::default()
        }
    }
}

/// Viewport-relative vertical bounds of the chapter stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn dominates_viewport(&self, threshold: f64) -> bool {
        self.top <= threshold && self.bottom >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelIntent {
    /// Positive is forward (down), negative is backward (up).
    pub delta_y: f64,
    pub pointer_y: f64,
}

impl WheelIntent {
    pub fn new(delta_y: f64, pointer_y: f64) -> Self {
        Self { delta_y, pointer_y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Not ours; the host should apply its default page scroll.
    PassThrough,
    /// Consumed without any state change.
    Suppressed,
    /// Routed into the active chapter's horizontal region.
    Scrolled { offset: f64, progress: f64 },
    /// Chapter changed; the host should bring the stack into view.
    Advanced { from: usize, to: usize },
}

impl WheelOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, WheelOutcome::PassThrough)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    active_index: usize,
    transition_locked: bool,
    horizontal_progress: f64,
}

impl NavigationState {
    fn new() -> Self {
        Self {
            active_index: 1,
            transition_locked: false,
            horizontal_progress: 0.0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn transition_locked(&self) -> bool {
        self.transition_locked
    }

    pub fn horizontal_progress(&self) -> f64 {
        self.horizontal_progress
    }
}

/// An animated chapter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub started_at: Instant,
    pub settles_at: Instant,
}

impl Transition {
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.settles_at.saturating_duration_since(self.started_at);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Turns wheel and click input into chapter transitions.
///
/// At most one chapter change is in flight: a wheel-driven change locks the
/// controller until the settle timer fires (see [`tick`](Self::tick)) or the
/// host reports the animation finished. Tab clicks ignore the lock.
#[derive(Debug)]
pub struct NavigationController<R = ContentRegion> {
    chapter_count: usize,
    config: NavigationConfig,
    state: NavigationState,
    regions: Vec<Option<R>>,
    accumulator: f64,
    settle_at: Option<Instant>,
    transition: Option<Transition>,
    attached: bool,
}

impl<R: ScrollRegion> NavigationController<R> {
    pub fn new(chapter_count: usize, config: NavigationConfig) -> Self {
        let chapter_count = chapter_count.max(1);
        Self {
            chapter_count,
            config,
            state: NavigationState::new(),
            regions: (0..chapter_count).map(|_| None).collect(),
            accumulator: 0.0,
            settle_at: None,
            transition: None,
            attached: true,
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_locked(&self) -> bool {
        self.state.transition_locked
    }

    pub fn horizontal_progress(&self) -> f64 {
        self.state.horizontal_progress
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let animation = self.transition.map(|t| t.settles_at);
        match (self.settle_at, animation) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn mount_region(&mut self, index: usize, region: R) {
        if let Some(slot) = Self::slot(index).and_then(|i| self.regions.get_mut(i)) {
            *slot = Some(region);
        }
    }

    pub fn unmount_region(&mut self, index: usize) -> Option<R> {
        Self::slot(index)
            .and_then(|i| self.regions.get_mut(i))
            .and_then(Option::take)
    }

    pub fn region(&self, index: usize) -> Option<&R> {
        Self::slot(index)
            .and_then(|i| self.regions.get(i))
            .and_then(Option::as_ref)
    }

    pub fn region_mut(&mut self, index: usize) -> Option<&mut R> {
        Self::slot(index)
            .and_then(|i| self.regions.get_mut(i))
            .and_then(Option::as_mut)
    }

    fn slot(index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    pub fn on_wheel_intent(
        &mut self,
        intent: WheelIntent,
        stack: Option<RegionBounds>,
        now: Instant,
    ) -> WheelOutcome {
        if !self.attached {
            return WheelOutcome::PassThrough;
        }
        self.tick(now);

        let Some(bounds) = stack else {
            trace!("Chapter stack not mounted; wheel passes through");
            return WheelOutcome::PassThrough;
        };
        if !bounds.dominates_viewport(self.config.region_threshold) {
            return WheelOutcome::PassThrough;
        }

        if self.state.transition_locked {
            trace!(pointer_y = intent.pointer_y, "Wheel consumed during transition");
            return WheelOutcome::Suppressed;
        }

        let delta = intent.delta_y;
        if !delta.is_finite() || delta == 0.0 {
            return WheelOutcome::PassThrough;
        }

        if let Some(outcome) = self.scroll_horizontally(delta) {
            return outcome;
        }

        self.resolve_chapter_intent(delta, now)
    }

    /// Forwards the delta into the active region if it still has room in
    /// that direction. A missing region counts as exhausted.
    fn scroll_horizontally(&mut self, delta: f64) -> Option<WheelOutcome> {
        let epsilon = self.config.scroll_epsilon;
        let active = self.state.active_index;
        let region = self.region_mut(active)?;

        let has_room = if delta > 0.0 {
            region.can_scroll_right(epsilon)
        } else {
            region.can_scroll_left(epsilon)
        };
        if !has_room {
            return None;
        }

        let offset = region.scroll_by(delta);
        let extent = region.extent();
        self.accumulator = 0.0;
        self.on_horizontal_scroll(offset, extent);

        Some(WheelOutcome::Scrolled {
            offset,
            progress: self.state.horizontal_progress,
        })
    }

    fn resolve_chapter_intent(&mut self, delta: f64, now: Instant) -> WheelOutcome {
        let active = self.state.active_index;
        let target = if delta > 0.0 && active < self.chapter_count {
            Some(active + 1)
        } else if delta < 0.0 && active > 1 {
            Some(active - 1)
        } else {
            None
        };

        let Some(target) = target else {
            self.accumulator = 0.0;
            return match self.config.edge_policy {
                EdgePolicy::Swallow => WheelOutcome::Suppressed,
                EdgePolicy::Release => WheelOutcome::PassThrough,
            };
        };

        if self.accumulator != 0.0 && self.accumulator.signum() != delta.signum() {
            self.accumulator = 0.0;
        }
        self.accumulator += delta;
        if self.accumulator.abs() <= self.config.advance_threshold {
            trace!(accumulated = self.accumulator, "Wheel accumulating toward chapter change");
            return WheelOutcome::Suppressed;
        }

        self.begin_transition(target, now);
        WheelOutcome::Advanced {
            from: active,
            to: target,
        }
    }

    fn begin_transition(&mut self, target: usize, now: Instant) {
        let from = self.state.active_index;
        let settles_at = now + self.config.settle_delay;

        if self.settle_at.replace(settles_at).is_some() {
            debug!("Replacing pending settle timer");
        }
        self.state.transition_locked = true;
        self.transition = Some(Transition {
            from,
            to: target,
            started_at: now,
            settles_at,
        });

        debug!("Chapter transition {} -> {} (locked)", from, target);
        self.change_chapter(target);
    }

    fn change_chapter(&mut self, target: usize) {
        self.state.active_index = target;
        self.accumulator = 0.0;
        if let Some(region) = self.region_mut(target) {
            region.set_offset(0.0);
        }
        self.state.horizontal_progress = 0.0;
    }

    /// Jumps straight to `target`, clamped to the chapter range. Neither
    /// checks nor sets the transition lock.
    pub fn on_chapter_tab_click(&mut self, target: usize) {
        if !self.attached {
            return;
        }
        let target = target.clamp(1, self.chapter_count);
        debug!(
            locked = self.state.transition_locked,
            "Tab jump {} -> {}", self.state.active_index, target
        );
        self.transition = None;
        self.change_chapter(target);
    }

    /// "Next Chapter" button: one step forward, animated but unlocked.
    pub fn on_next_chapter_click(&mut self, now: Instant) {
        if !self.attached {
            return;
        }
        let from = self.state.active_index;
        if from >= self.chapter_count {
            return;
        }

        self.transition = Some(Transition {
            from,
            to: from + 1,
            started_at: now,
            settles_at: now + self.config.settle_delay,
        });
        debug!("Next chapter {} -> {}", from, from + 1);
        self.change_chapter(from + 1);
    }

    /// Passive observer for the active region's scroll position.
    pub fn on_horizontal_scroll(&mut self, offset: f64, extent: f64) {
        let progress = if extent > 0.0 { offset / extent } else { 0.0 };
        self.state.horizontal_progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Native horizontal input on the active region. Never changes chapter,
    /// and is consumed without effect while a transition holds the lock.
    pub fn scroll_active_region(&mut self, delta: f64) -> Option<f64> {
        if !self.attached || !delta.is_finite() {
            return None;
        }
        if self.state.transition_locked {
            trace!("Horizontal wheel suppressed while locked");
            return None;
        }
        let active = self.state.active_index;
        let region = self.region_mut(active)?;
        let offset = region.scroll_by(delta);
        let extent = region.extent();

        self.accumulator = 0.0;
        self.on_horizontal_scroll(offset, extent);
        Some(offset)
    }

    /// Re-reads the active region after it was resized or remounted.
    pub fn sync_active_progress(&mut self) {
        let reading = self
            .region(self.state.active_index)
            .map(|region| (region.offset(), region.extent()));
        match reading {
            Some((offset, extent)) => self.on_horizontal_scroll(offset, extent),
            None => self.state.horizontal_progress = 0.0,
        }
    }

    /// Fires the settle timer if it is due. Returns true when the lock was
    /// released.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.transition.is_some_and(|t| now >= t.settles_at) {
            self.transition = None;
        }

        match self.settle_at {
            Some(at) if now >= at => {
                self.settle_at = None;
                self.state.transition_locked = false;
                debug!("Transition settled on chapter {}", self.state.active_index);
                true
            }
            _ => false,
        }
    }

    /// Explicit end-of-animation signal. Releases the lock without waiting
    /// for the settle timer.
    pub fn finish_transition(&mut self) -> bool {
        self.transition = None;
        let was_locked = self.state.transition_locked;
        self.settle_at = None;
        self.state.transition_locked = false;
        if was_locked {
            debug!("Transition finished early on chapter {}", self.state.active_index);
        }
        was_locked
    }

    /// Cancels any pending timer and detaches. Later input is ignored.
    pub fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        self.settle_at = None;
        self.transition = None;
        self.attached = false;
        debug!("Navigation controller detached");
    }
}
