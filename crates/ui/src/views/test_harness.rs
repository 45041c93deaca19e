use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuizLoop, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    settings: QuizSettings,
    initial_week: Option<String>,
}

impl UiApp for TestApp {
    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_week(&self) -> Option<String> {
        self.initial_week.clone()
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
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
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

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_quiz<R>(&self, read: impl FnOnce(&QuizLoop) -> R) -> R {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| read(&quiz.peek()))
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_view_harness(settings: QuizSettings, initial_week: Option<&str>) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        settings,
        initial_week: initial_week.map(str::to_string),
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
