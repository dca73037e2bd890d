mod empty;
mod home;
mod keyboard;
mod question;
mod results;
mod timer;

use dioxus::prelude::*;

use services::QuizSnapshot;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm, map_question, map_results};
use empty::EmptyScreen;
use home::HomeScreen;
use keyboard::intent_for_key;
use question::QuestionScreen;
use results::ResultsScreen;
use timer::{TickTimer, sync_timer};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank_size = ctx.bank_size();
    let mut vm = use_signal(|| QuizVm::new(ctx.new_session()));
    let mut timer = use_signal(TickTimer::default);

    let dispatch = use_callback(move |intent: QuizIntent| {
        // Stop ticking before the session is replaced.
        if intent == QuizIntent::Restart {
            timer.write().stop();
        }
        // Rejected intents are logged by the vm.
        let _ = vm.write().dispatch(intent);
        sync_timer(timer, vm);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm, timer);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let snapshot = vm.peek().snapshot();
        if let Some(intent) = intent_for_key(&evt.data.key(), &snapshot) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let snapshot = vm.read().snapshot();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match snapshot {
                QuizSnapshot::Home(home) => rsx! {
                    HomeScreen { home, bank_size, on_intent: dispatch }
                },
                QuizSnapshot::Question(question) => rsx! {
                    QuestionScreen { vm: map_question(&question), on_intent: dispatch }
                },
                QuizSnapshot::Results(results) => rsx! {
                    ResultsScreen { vm: map_results(&results), on_intent: dispatch }
                },
                QuizSnapshot::Empty(empty) => rsx! {
                    EmptyScreen { started: empty.started, on_intent: dispatch }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
    timer: Rc<RefCell<Option<Signal<TickTimer>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<QuizVm>,
        timer: Signal<TickTimer>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn timer(&self) -> Signal<TickTimer> {
        (*self.timer.borrow()).expect("quiz timer registered")
    }
}
