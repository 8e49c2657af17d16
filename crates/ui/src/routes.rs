use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use services::QuizSession;

use crate::context::AppContext;
use crate::views::{AssessmentView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AssessmentView)] Assessment {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();

    // One session per app run, shared by both routes. Navigating between
    // the assessment and the report never resets answers; only an explicit
    // restart does.
    use_context_provider(|| Signal::new(QuizSession::start(ctx.store().statements())));

    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Enneagram Resonance Check" }
                p { class: "masthead__tagline",
                    "Rate how strongly each statement resonates with you."
                }
                nav {
                    Link { to: Route::Assessment {}, "Questions" }
                    Link { to: Route::Results {}, "Results" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
