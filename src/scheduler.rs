// Deferred tasks - named, cancellable timers owned by the controller
//
// Nothing here sleeps: the host calls `due(now)` from its event loop and
// the controller reacts to whatever fired.
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Programmatic-navigation guard; scroll-driven changes are ignored while pending.
    NavigationGuard,
    /// Quiet window before a visibility candidate is committed.
    VisibilityDebounce,
    /// Deferred deep-link scroll after mount.
    InitialScroll,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<(TaskKind, Instant)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` at `due`, replacing any pending task of the same kind.
    pub fn schedule(&mut self, kind: TaskKind, due: Instant) {
        self.cancel(kind);
        self.tasks.push((kind, due));
    }

    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(k, _)| *k != kind);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|(k, _)| *k == kind)
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut fired: Vec<(TaskKind, Instant)> = Vec::new();
        self.tasks.retain(|&(kind, at)| {
            if at <= now {
                fired.push((kind, at));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(_, at)| *at);
        fired.into_iter().map(|(kind, _)| kind).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|(_, at)| *at).min()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_schedule_replaces_same_kind() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(TaskKind::VisibilityDebounce, now + Duration::from_millis(300));
        scheduler.schedule(TaskKind::VisibilityDebounce, now + Duration::from_millis(600));
        assert!(scheduler.due(now + Duration::from_millis(300)).is_empty());
        assert_eq!(
            scheduler.due(now + Duration::from_millis(600)),
            vec![TaskKind::VisibilityDebounce]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_due_in_deadline_order() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(TaskKind::NavigationGuard, now + Duration::from_millis(1500));
        scheduler.schedule(TaskKind::InitialScroll, now + Duration::from_millis(100));
        assert_eq!(scheduler.next_deadline(), Some(now + Duration::from_millis(100)));
        assert_eq!(
            scheduler.due(now + Duration::from_secs(2)),
            vec![TaskKind::InitialScroll, TaskKind::NavigationGuard]
        );
    }

    #[test]
    fn test_cancel_and_clear() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(TaskKind::NavigationGuard, now);
        assert!(scheduler.cancel(TaskKind::NavigationGuard));
        assert!(!scheduler.cancel(TaskKind::NavigationGuard));
        scheduler.schedule(TaskKind::InitialScroll, now);
        scheduler.clear();
        assert!(!scheduler.is_pending(TaskKind::InitialScroll));
        assert_eq!(scheduler.next_deadline(), None);
    }
}
