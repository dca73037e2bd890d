use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::TimerDuration;
use quiz_core::time::fixed_clock;
use services::fixtures::numbered_bank;
use services::{QuestionBank, QuizSession, SessionOptions};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    bank: QuestionBank,
    timer: TimerDuration,
}

impl UiApp for TestApp {
    fn new_session(&self) -> QuizSession {
        QuizSession::new(
            self.bank.clone(),
            SessionOptions {
                timer: self.timer,
                seed: Some(21),
                clock: fixed_clock(),
                ..SessionOptions::default()
            },
        )
    }

    fn bank_size(&self) -> usize {
        self.bank.len()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the view's dispatcher, then re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&QuizVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.peek()))
    }

    pub fn timer_generation(&self) -> Option<u64> {
        let timer = self.handles.timer();
        self.dom.in_runtime(|| timer.peek().running_generation())
    }

    /// Let spawned tasks run until `done` holds. Meant for paused tokio time,
    /// where idle waits jump straight to the next timer.
    pub async fn run_until(&mut self, mut done: impl FnMut(&Self) -> bool) {
        for _ in 0..64 {
            if done(self) {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_secs(5), self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
        panic!("view never reached the expected state");
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(bank_size: u32, timer: TimerDuration) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: numbered_bank(bank_size),
        timer,
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
