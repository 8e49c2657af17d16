use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use content::ContentStore;
use services::QuizSession;

use crate::context::build_app_context;
use crate::views::{AssessmentView, ResultsView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Assessment,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    store: Arc<ContentStore>,
    session: QuizSession,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(Arc::clone(&props.store)));
    let session = props.session.clone();
    use_context_provider(|| Signal::new(session));
    use_context_provider(|| props.view);
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
    match use_context::<ViewKind>() {
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

pub fn embedded_store() -> Arc<ContentStore> {
    Arc::new(ContentStore::load().expect("embedded content loads"))
}

pub fn setup_view_harness(view: ViewKind, session: QuizSession) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            store: embedded_store(),
            session,
            view,
        },
    );
    ViewHarness { dom }
}
