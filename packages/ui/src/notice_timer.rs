//! Cancellable deferred clearing of success notices.

use std::time::Duration;

use directory::DirectoryView;
use dioxus::core::Task;
use dioxus::prelude::*;

/// Handle to the pending clear of the current notice.
///
/// Arming cancels the previous clear. The task is spawned in the calling
/// component's scope.
#[derive(Debug, Default)]
pub struct NoticeTimer {
    task: Option<Task>,
}

impl NoticeTimer {
    /// Clear the notice shown at `generation` once `lifetime` has passed.
    pub fn arm(&mut self, mut view: Signal<DirectoryView>, generation: u64, lifetime: Duration) {
        self.arm_with(lifetime, generation, move |g| view.write().expire_notice(g));
    }

    /// Call `expire(generation)` once `lifetime` has passed, unless re-armed
    /// or cancelled first.
    pub fn arm_with(
        &mut self,
        lifetime: Duration,
        generation: u64,
        expire: impl FnMut(u64) -> bool + 'static,
    ) {
        self.cancel();
        self.task = Some(spawn(async move {
            expire_after(lifetime, generation, expire).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!("Cancelling pending notice clear");
            task.cancel();
        }
    }
}

/// A [`NoticeTimer`] owned by the calling component. Its pending clear is
/// cancelled when the component unmounts.
pub fn use_notice_timer() -> Signal<NoticeTimer> {
    let mut timer = use_signal(NoticeTimer::default);
    use_drop(move || {
        if let Ok(mut timer) = timer.try_write() {
            timer.cancel();
        }
    });
    timer
}

/// Wait out `lifetime`, then expire `generation`.
pub async fn expire_after(
    lifetime: Duration,
    generation: u64,
    mut expire: impl FnMut(u64) -> bool,
) -> bool {
    sleep(lifetime).await;
    expire(generation)
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
