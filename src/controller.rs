// Navigation controller - single owner of `NavigationState`
//
// Every mutation of the state, every write to the address bar and every
// programmatic scroll goes through here. Scroll-driven suggestions from the
// visibility tracker are only applied while the nav is pinned and no
// programmatic navigation is in flight, which is what keeps scroll -> URL
// and URL -> scroll from feeding each other.
use crate::catalog::item_id;
use crate::layout;
use crate::registry::SectionRegistry;
use crate::scheduler::{Scheduler, TaskKind};
use crate::state::{CurrentSection, NavigationState, SearchKeyword, SectionId, SortOrder};
use crate::tracker::{Evaluation, ScrollSample, StickyNavDetector, VisibilityTracker};
use crate::url::{FragmentCodec, HistoryBackend, SessionHistory, Traversal};
use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerOptions {
    pub guard: Duration,
    pub cooldown: Duration,
    pub debounce: Duration,
    pub initial_scroll_delay: Duration,
    pub min_ratio: f32,
    pub enter_at: f32,
    pub exit_at: f32,
    /// False when the host cannot report anchor visibility at all.
    pub observation_available: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            guard: Duration::from_millis(layout::NAVIGATION_GUARD_MS),
            cooldown: Duration::from_millis(layout::SECTION_COOLDOWN_MS),
            debounce: Duration::from_millis(layout::SECTION_DEBOUNCE_MS),
            initial_scroll_delay: Duration::from_millis(layout::INITIAL_SCROLL_DELAY_MS),
            min_ratio: layout::MIN_INTERSECTION_RATIO,
            enter_at: layout::STICKY_ENTER_AT,
            exit_at: layout::STICKY_EXIT_AT,
            observation_available: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scroll the host should perform. Requests whose target does not exist
/// are skipped by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Bring the sentinel above the nav to the top so the nav pins.
    NavSentinel(ScrollBehavior),
    Anchor {
        anchor_id: String,
        behavior: ScrollBehavior,
    },
    PageTop(ScrollBehavior),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&NavigationState)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryWrite {
    /// New entry; back/forward can step through it.
    Push,
    /// Coalesce into the current entry.
    Replace,
}

pub struct NavigationController<H: HistoryBackend = SessionHistory> {
    state: NavigationState,
    codec: FragmentCodec,
    history: H,
    tracker: VisibilityTracker,
    sticky: StickyNavDetector,
    scheduler: Scheduler,
    options: ControllerOptions,
    scroll_requests: Vec<ScrollRequest>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    mounted: bool,
    torn_down: bool,
}

impl<H: HistoryBackend> NavigationController<H> {
    /// Builds the controller with its state decoded from the current URL.
    pub fn new(codec: FragmentCodec, history: H, options: ControllerOptions) -> Self {
        let registry = codec.registry().clone();
        let tracker = if options.observation_available {
            VisibilityTracker::new(registry, options.min_ratio, options.cooldown)
        } else {
            VisibilityTracker::unavailable(registry)
        };
        let state = codec.decode(history.current());
        log::debug!("Initial navigation state from '#{}': {:?}", history.current(), state);

        Self {
            state,
            codec,
            history,
            tracker,
            sticky: StickyNavDetector::new(options.enter_at, options.exit_at),
            scheduler: Scheduler::new(),
            options,
            scroll_requests: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            mounted: false,
            torn_down: false,
        }
    }

    // --- Accessors ---

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_section(&self) -> &CurrentSection {
        &self.state.current_section
    }

    /// Current address-bar fragment, without `#`.
    pub fn fragment(&self) -> &str {
        self.history.current()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn codec(&self) -> &FragmentCodec {
        &self.codec
    }

    pub fn registry(&self) -> &SectionRegistry {
        self.codec.registry()
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn is_pinned(&self) -> bool {
        self.sticky.is_pinned()
    }

    /// True while a programmatic scroll is still settling.
    pub fn is_navigating(&self) -> bool {
        self.scheduler.is_pending(TaskKind::NavigationGuard)
    }

    pub fn auto_detection_enabled(&self) -> bool {
        self.tracker.is_available()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    // --- Lifecycle ---

    /// Runs the initial deep-link sequence once the page is laid out: the
    /// URL is not written (apart from a legacy alias rewrite) and the scroll
    /// to a linked section is deferred by `initial_scroll_delay`.
    pub fn mount(&mut self, now: Instant) {
        if self.torn_down || self.mounted {
            return;
        }
        self.mounted = true;

        self.rewrite_legacy_fragment();

        if !self.state.current_section.is_home() {
            let scroll_at = now + self.options.initial_scroll_delay;
            self.scheduler.schedule(TaskKind::InitialScroll, scroll_at);
            // Keep the hero's unpinned nav from resetting the linked section
            // before the deferred scroll lands.
            self.scheduler
                .schedule(TaskKind::NavigationGuard, scroll_at + self.options.guard);
            log::info!("Deep link to '{}', scrolling after mount", self.state.current_section);
        }
    }

    /// Clears every timer, listener and queued scroll. The controller ignores
    /// all further input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.scheduler.clear();
        self.tracker.reset();
        self.listeners.clear();
        self.scroll_requests.clear();
        log::debug!("Navigation controller torn down");
    }

    /// Fires every deferred task that is due.
    pub fn tick(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        for task in self.scheduler.due(now) {
            match task {
                TaskKind::NavigationGuard => log::trace!("Navigation guard released"),
                TaskKind::VisibilityDebounce => self.commit_visible_section(now),
                TaskKind::InitialScroll => self.initial_scroll(),
            }
        }
    }

    // --- User-triggered operations ---

    /// Activates `section`, writes a new history entry and smooth-scrolls to
    /// its anchor. Scroll-driven changes are ignored for the guard period.
    pub fn navigate_to_section(&mut self, section: &SectionId, now: Instant) {
        if self.torn_down {
            return;
        }
        let Some(anchor_id) = self.registry().anchor_for(section).map(str::to_string) else {
            log::warn!("Ignoring navigation to unregistered section '{section}'");
            return;
        };

        self.arm_guard(now);
        let target = CurrentSection::Active(section.clone());
        self.apply(HistoryWrite::Push, |state| state.current_section = target);
        self.scroll_requests.push(ScrollRequest::Anchor {
            anchor_id,
            behavior: ScrollBehavior::Smooth,
        });
    }

    pub fn navigate_home(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.arm_guard(now);
        self.apply(HistoryWrite::Push, |state| state.current_section = CurrentSection::Home);
        self.scroll_requests
            .push(ScrollRequest::PageTop(ScrollBehavior::Smooth));
    }

    /// Returns true if the state (and so the URL) changed.
    pub fn update_sort(&mut self, sort_order: SortOrder) -> bool {
        if self.torn_down {
            return false;
        }
        self.apply(HistoryWrite::Push, |state| state.sort_order = sort_order)
    }

    pub fn update_search(&mut self, keyword: &str) -> bool {
        if self.torn_down {
            return false;
        }
        let keyword = SearchKeyword::new(keyword);
        self.apply(HistoryWrite::Push, |state| state.search_keyword = keyword)
    }

    /// Replaces the selected values of one category.
    pub fn update_filter<I, S>(&mut self, category: &str, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.torn_down || !self.accepts_category(category) {
            return false;
        }
        self.apply(HistoryWrite::Push, |state| {
            state.filter_selections.set_category(category, values)
        })
    }

    pub fn toggle_filter_value(&mut self, category: &str, value: &str, checked: bool) -> bool {
        if self.torn_down || !self.accepts_category(category) {
            return false;
        }
        self.apply(HistoryWrite::Push, |state| {
            if checked {
                state.filter_selections.insert(category, value);
            } else {
                // Deep links may spell a value differently than the catalog.
                let id = item_id(value);
                state
                    .filter_selections
                    .remove_matching(category, |selected| item_id(selected) == id);
            }
        })
    }

    pub fn clear_filter_category(&mut self, category: &str) -> bool {
        if self.torn_down {
            return false;
        }
        self.apply(HistoryWrite::Push, |state| {
            state.filter_selections.clear_category(category);
        })
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.apply(HistoryWrite::Push, |state| state.filter_selections.clear())
    }

    // --- Platform events ---

    /// Scroll event: feeds the sentinel position (`None` if the sentinel is
    /// not on the page) to the sticky detector.
    pub fn on_scroll(&mut self, sentinel_top: Option<f32>) {
        if self.torn_down {
            return;
        }
        let Some(top) = sentinel_top else {
            log::trace!("Nav sentinel missing, skipping sticky update");
            return;
        };
        let was_pinned = self.sticky.is_pinned();
        let pinned = self.sticky.update(top);
        if pinned != was_pinned {
            log::debug!("Nav {} at sentinel top {top:.1}", if pinned { "pinned" } else { "unpinned" });
        }

        if pinned || self.is_navigating() {
            return;
        }
        // Back in the hero area: nothing below it is active.
        self.cancel_visibility_debounce();
        if !self.state.current_section.is_home() {
            self.apply(HistoryWrite::Replace, |state| {
                state.current_section = CurrentSection::Home
            });
        }
    }

    /// Visibility change for one or more anchors.
    pub fn on_visibility(
        &mut self,
        samples: impl IntoIterator<Item = ScrollSample>,
        viewport_height: f32,
        now: Instant,
    ) {
        if self.torn_down || !self.tracker.is_available() {
            return;
        }
        self.tracker.record(samples);

        if !self.sticky.is_pinned() || self.is_navigating() {
            return;
        }
        match self
            .tracker
            .evaluate(&self.state.current_section, viewport_height, now)
        {
            Evaluation::Schedule {
                candidate,
                not_before,
            } => {
                let due = (now + self.options.debounce).max(not_before);
                log::trace!(
                    "Section candidate '{candidate}', committing in {:?}",
                    due - now
                );
                self.scheduler.schedule(TaskKind::VisibilityDebounce, due);
            }
            Evaluation::Cancel => {
                self.scheduler.cancel(TaskKind::VisibilityDebounce);
            }
            Evaluation::Idle => {}
        }
    }

    /// Browser back/forward landed on a new entry: adopt it wholesale and
    /// scroll to its section.
    pub fn on_popstate(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.rewrite_legacy_fragment();
        let decoded = self.codec.decode(self.history.current());
        self.cancel_visibility_debounce();
        if decoded != self.state {
            self.state = decoded;
            self.notify();
        }

        self.arm_guard(now);
        match self.state.current_section.section() {
            Some(section) => {
                let Some(anchor_id) = self.registry().anchor_for(section).map(str::to_string) else {
                    return;
                };
                if !self.sticky.is_pinned() {
                    self.scroll_requests
                        .push(ScrollRequest::NavSentinel(ScrollBehavior::Smooth));
                }
                self.scroll_requests.push(ScrollRequest::Anchor {
                    anchor_id,
                    behavior: ScrollBehavior::Smooth,
                });
            }
            None => self
                .scroll_requests
                .push(ScrollRequest::PageTop(ScrollBehavior::Smooth)),
        }
    }

    /// Steps the history and handles the resulting popstate.
    pub fn traverse(&mut self, direction: Traversal, now: Instant) -> bool {
        if self.torn_down || !self.history.traverse(direction) {
            return false;
        }
        self.on_popstate(now);
        true
    }

    /// Fragment typed into the address bar: a new history entry, handled
    /// like any other hash change.
    pub fn open_fragment(&mut self, fragment: &str, now: Instant) {
        if self.torn_down {
            return;
        }
        let fragment = fragment.trim().trim_start_matches('#');
        if fragment != self.history.current() {
            self.history.push(fragment.to_string());
        }
        self.on_popstate(now);
    }

    // --- Subscriptions ---

    pub fn subscribe(&mut self, listener: impl FnMut(&NavigationState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        if !self.torn_down {
            self.listeners.push((id, Box::new(listener)));
        }
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // --- Internals ---

    fn accepts_category(&self, category: &str) -> bool {
        let accepted = self.codec.accepts_category(category);
        if !accepted {
            log::debug!("Ignoring filter update for unknown category '{category}'");
        }
        accepted
    }

    fn arm_guard(&mut self, now: Instant) {
        self.cancel_visibility_debounce();
        self.scheduler
            .schedule(TaskKind::NavigationGuard, now + self.options.guard);
    }

    fn cancel_visibility_debounce(&mut self) {
        self.scheduler.cancel(TaskKind::VisibilityDebounce);
        self.tracker.clear_pending();
    }

    fn commit_visible_section(&mut self, now: Instant) {
        let Some(candidate) = self.tracker.take_pending() else {
            return;
        };
        if !self.sticky.is_pinned() || self.is_navigating() {
            log::debug!("Dropping section candidate '{candidate}' (nav unpinned or navigating)");
            return;
        }
        self.tracker.mark_committed(now);
        let target = CurrentSection::Active(candidate);
        self.apply(HistoryWrite::Replace, |state| state.current_section = target);
    }

    fn initial_scroll(&mut self) {
        let Some(section) = self.state.current_section.section() else {
            return;
        };
        let Some(anchor_id) = self.registry().anchor_for(section).map(str::to_string) else {
            return;
        };
        if !self.sticky.is_pinned() {
            self.scroll_requests
                .push(ScrollRequest::NavSentinel(ScrollBehavior::Instant));
        }
        self.scroll_requests.push(ScrollRequest::Anchor {
            anchor_id,
            behavior: ScrollBehavior::Instant,
        });
    }

    fn rewrite_legacy_fragment(&mut self) {
        if let Some(rewrite) = self.codec.legacy_rewrite(self.history.current()) {
            log::info!("Rewriting legacy fragment '#{}' to '#{rewrite}'", self.history.current());
            self.history.replace(rewrite);
        }
    }

    /// Mutates the state; on an actual change writes the URL and notifies.
    fn apply(&mut self, write: HistoryWrite, mutate: impl FnOnce(&mut NavigationState)) -> bool {
        let before = self.state.clone();
        mutate(&mut self.state);
        if self.state == before {
            return false;
        }
        self.write_url(write);
        self.notify();
        true
    }

    fn write_url(&mut self, write: HistoryWrite) {
        let fragment = self.codec.encode(&self.state);
        if fragment == self.history.current() {
            return;
        }
        log::debug!("{write:?} '#{fragment}'");
        match write {
            HistoryWrite::Push => self.history.push(fragment),
            HistoryWrite::Replace => self.history.replace(fragment),
        }
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl<H: HistoryBackend> Drop for NavigationController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
