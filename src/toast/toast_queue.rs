use axum::http::Extensions;
use chrono::Utc;
use dashmap::DashMap;
use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{runtime::Handle, sync::broadcast, task::AbortHandle, time::Instant};

use crate::error::{AppError, Result};

use super::toast_models::{Toast, ToastCategory, ToastEvent, ToastId};

pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_millis(4000);

const EVENT_CAPACITY: usize = 100;

struct ActiveToast {
    toast: Toast,
    expires_at: Instant,
}

struct Inner {
    active: Mutex<Vec<ActiveToast>>,
    timers: DashMap<ToastId, AbortHandle>,
    lifetime: Duration,
    events: broadcast::Sender<ToastEvent>,
}

/// In-memory queue of transient notifications.
///
/// Every toast expires `lifetime` after it was enqueued. Removal, whether by
/// expiry or by an explicit dismiss, is always "remove if present", so the
/// two paths can race freely. The queue has no capacity limit.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                active: Mutex::new(Vec::new()),
                timers: DashMap::new(),
                lifetime,
                events,
            }),
        }
    }

    /// Get the queue installed on a request, failing loudly when the router
    /// was built without it.
    pub fn from_extensions(extensions: &Extensions) -> Result<Self> {
        extensions
            .get::<ToastQueue>()
            .cloned()
            .ok_or(AppError::ToastProviderMissing)
    }

    /// Append a toast and schedule its expiry. Never fails.
    pub fn enqueue(&self, message: impl Into<String>, category: Option<ToastCategory>) -> ToastId {
        let toast = Toast {
            id: ToastId::generate(),
            message: message.into(),
            category: category.unwrap_or_default(),
            created_at: Utc::now(),
        };
        let id = toast.id;

        tracing::debug!(toast_id = %id, category = %toast.category, "Toast enqueued");

        // Events go out under the lock so subscribers see them in state order.
        {
            let mut entries = self.entries();
            entries.push(ActiveToast {
                toast: toast.clone(),
                expires_at: Instant::now() + self.inner.lifetime,
            });
            let _ = self.inner.events.send(ToastEvent::Added { toast });
        }
        self.schedule_expiry(id);

        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, Some(ToastCategory::Success))
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, Some(ToastCategory::Error))
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, Some(ToastCategory::Warning))
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, Some(ToastCategory::Info))
    }

    /// Remove a toast ahead of its expiry and cancel its timer.
    /// Unknown or already removed ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        if let Some((_, timer)) = self.inner.timers.remove(&id) {
            timer.abort();
        }

        if self.remove_if_present(id) {
            tracing::debug!(toast_id = %id, "Toast dismissed");
        }
    }

    /// Active toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut expired = Vec::new();

        let toasts = {
            let mut entries = self.entries();
            entries.retain(|entry| {
                if entry.expires_at <= now {
                    expired.push(entry.toast.id);
                    false
                } else {
                    true
                }
            });
            for id in &expired {
                let _ = self.inner.events.send(ToastEvent::Dismissed { id: *id });
            }
            entries.iter().map(|entry| entry.toast.clone()).collect()
        };

        // Entries whose timer has not run yet (or could not be scheduled).
        for id in expired {
            if let Some((_, timer)) = self.inner.timers.remove(&id) {
                timer.abort();
            }
        }

        toasts
    }

    pub fn len(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    fn schedule_expiry(&self, id: ToastId) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(toast_id = %id, "No runtime for toast timer, relying on lazy expiry");
            return;
        };

        let queue = Arc::downgrade(&self.inner);
        let lifetime = self.inner.lifetime;
        let timer = runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Some(inner) = queue.upgrade() {
                ToastQueue { inner }.expire(id);
            }
        });

        self.inner.timers.insert(id, timer.abort_handle());

        // The timer may already have run on another worker.
        if !self.contains(id) {
            self.inner.timers.remove(&id);
        }
    }

    fn expire(&self, id: ToastId) {
        self.inner.timers.remove(&id);

        if self.remove_if_present(id) {
            tracing::debug!(toast_id = %id, "Toast expired");
        }
    }

    fn remove_if_present(&self, id: ToastId) -> bool {
        let mut entries = self.entries();
        match entries.iter().position(|entry| entry.toast.id == id) {
            Some(index) => {
                entries.remove(index);
                let _ = self.inner.events.send(ToastEvent::Dismissed { id });
                true
            }
            None => false,
        }
    }

    fn contains(&self, id: ToastId) -> bool {
        self.entries().iter().any(|entry| entry.toast.id == id)
    }

    fn entries(&self) -> MutexGuard<'_, Vec<ActiveToast>> {
        self.inner.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIFETIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueue_defaults_to_info() {
        let queue = ToastQueue::default();
        queue.enqueue("X", None);

        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "X");
        assert_eq!(active[0].category, ToastCategory::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrappers_fix_category() {
        let queue = ToastQueue::default();
        queue.success("a");
        queue.error("b");
        queue.warning("c");
        queue.info("d");

        let categories: Vec<_> = queue.active().into_iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                ToastCategory::Success,
                ToastCategory::Error,
                ToastCategory::Warning,
                ToastCategory::Info,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_unique_and_insertion_ordered() {
        let queue = ToastQueue::default();
        let ids: Vec<_> = (0..10).map(|i| queue.info(format!("toast {i}"))).collect();

        let active = queue.active();
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), ids);

        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.to_string());
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_lifetime() {
        let queue = ToastQueue::default();
        queue.info("short lived");

        tokio::time::advance(Duration::from_millis(3999)).await;
        settle().await;
        assert_eq!(queue.len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(queue.is_empty());
        assert!(queue.inner.timers.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_count_tracks_unexpired_enqueues() {
        let queue = ToastQueue::default();
        queue.info("first");
        tokio::time::advance(Duration::from_millis(2000)).await;
        queue.info("second");
        queue.info("third");
        assert_eq!(queue.len(), 3);

        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;
        assert_eq!(queue.len(), 2);

        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;
        assert_eq!(queue.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let queue = ToastQueue::default();
        let id = queue.warning("dismiss me");

        queue.dismiss(id);
        assert!(queue.is_empty());
        assert!(queue.inner.timers.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_dismiss_leaves_others_alone() {
        let queue = ToastQueue::default();
        let first = queue.info("first");
        tokio::time::advance(Duration::from_millis(1000)).await;
        let second = queue.info("second");

        // Expiry of the first races ahead of the manual dismiss.
        tokio::time::advance(Duration::from_millis(3000)).await;
        settle().await;
        queue.dismiss(first);
        queue.dismiss(first);

        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_before_expiry_then_timer_window() {
        let queue = ToastQueue::default();
        let first = queue.info("first");
        queue.dismiss(first);

        tokio::time::advance(Duration::from_millis(2000)).await;
        let second = queue.info("second");
        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;

        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_only_for_effective_changes() {
        let queue = ToastQueue::default();
        let mut rx = queue.subscribe();

        let id = queue.success("saved");
        match rx.try_recv() {
            Ok(ToastEvent::Added { toast }) => assert_eq!(toast.id, id),
            other => panic!("unexpected event: {other:?}"),
        }

        queue.dismiss(id);
        assert_eq!(rx.try_recv().ok(), Some(ToastEvent::Dismissed { id }));

        queue.dismiss(id);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_added_precedes_dismissed_across_threads() {
        let queue = ToastQueue::default();
        let mut rx = queue.subscribe();
        let done = std::sync::atomic::AtomicBool::new(false);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..40 {
                    queue.info(format!("toast {i}"));
                }
                done.store(true, std::sync::atomic::Ordering::SeqCst);
            });
            scope.spawn(|| loop {
                let finished = done.load(std::sync::atomic::Ordering::SeqCst);
                let active = queue.active();
                for toast in &active {
                    queue.dismiss(toast.id);
                }
                if finished && active.is_empty() {
                    break;
                }
            });
        });

        let mut seen = std::collections::HashSet::new();
        let mut dismissed = 0;
        while let Ok(event) = rx.try_recv() {
            match event {
                ToastEvent::Added { toast } => {
                    seen.insert(toast.id);
                }
                ToastEvent::Dismissed { id } => {
                    assert!(seen.contains(&id), "dismissed {id} before it was added");
                    dismissed += 1;
                }
            }
        }
        assert_eq!(seen.len(), 40);
        assert_eq!(dismissed, 40);
    }

    #[test]
    fn test_lazy_expiry_without_runtime() {
        let queue = ToastQueue::new(Duration::ZERO);
        queue.info("no timer");
        assert!(queue.inner.timers.is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_from_extensions_requires_provider() {
        let mut extensions = Extensions::new();
        assert!(matches!(
            ToastQueue::from_extensions(&extensions),
            Err(AppError::ToastProviderMissing)
        ));

        extensions.insert(ToastQueue::default());
        assert!(ToastQueue::from_extensions(&extensions).is_ok());
    }
}
