use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::vm::{QuizIntent, QuizVm};

pub(super) const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to the once-per-second countdown task.
///
/// At most one task is alive. It is bound to the session generation it was
/// started for, and ends itself once the session no longer wants ticks.
#[derive(Default)]
pub(crate) struct TickTimer {
    task: Option<Task>,
    generation: Option<u64>,
}

impl TickTimer {
    #[must_use]
    pub(crate) fn running_generation(&self) -> Option<u64> {
        self.generation
    }

    pub(crate) fn start(
        &mut self,
        generation: u64,
        vm: Signal<QuizVm>,
        handle: Signal<TickTimer>,
    ) {
        self.stop();
        let task = spawn(async move {
            let mut vm = vm;
            let mut handle = handle;
            loop {
                tokio::time::sleep(TICK_INTERVAL).await;
                let keep_going = {
                    let mut guard = vm.write();
                    guard.dispatch(QuizIntent::Tick { generation }).is_ok()
                        && guard.timer_should_run()
                };
                if !keep_going {
                    break;
                }
            }
            handle.write().release(generation);
        });
        self.task = Some(task);
        self.generation = Some(generation);
    }

    /// Forget a task that ended on its own. A newer task is left alone.
    fn release(&mut self, generation: u64) {
        if self.generation == Some(generation) {
            self.task = None;
            self.generation = None;
        }
    }

    pub(crate) fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.generation = None;
    }
}

/// Bring the tick task in line with the session after an intent.
pub(super) fn sync_timer(timer: Signal<TickTimer>, vm: Signal<QuizVm>) {
    let (should_run, generation) = {
        let guard = vm.peek();
        (guard.timer_should_run(), guard.generation())
    };
    let mut handle = timer;
    let mut current = handle.write();
    if !should_run {
        current.stop();
    } else if current.running_generation() != Some(generation) {
        current.start(generation, vm, timer);
    }
}
