//! Info Pages
//!
//! EduRev and Projects landing pages. Both are static content.

use leptos::*;
use leptos_router::*;

use edurev::portal::Route as PortalRoute;

#[component]
fn InfoPage(
    icon: &'static str,
    title: &'static str,
    lead: &'static str,
    points: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto space-y-10">
            <div class="text-center space-y-3">
                <div class="text-5xl">{icon}</div>
                <h1 class="text-4xl font-bold text-gray-900">{title}</h1>
                <p class="text-lg text-gray-600">{lead}</p>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                {points.iter().map(|(heading, body)| view! {
                    <div class="bg-white border border-gray-200 rounded-xl p-5">
                        <h2 class="font-semibold text-gray-900">{*heading}</h2>
                        <p class="text-sm text-gray-600 mt-2">{*body}</p>
                    </div>
                }).collect_view()}
            </div>

            <div class="text-center">
                <A
                    href=PortalRoute::Signup.path()
                    class="inline-block px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white
                           rounded-lg font-semibold transition-colors"
                >
                    "Join EduRev"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn EduRevInfo() -> impl IntoView {
    view! {
        <InfoPage
            icon="📚"
            title="EduRev"
            lead="Structured revision for every subject, at your own pace."
            points=&[
                ("Curated notes", "Concise chapter summaries written by teachers."),
                ("Practice sets", "Topic-wise questions with worked solutions."),
                ("Progress tracking", "See which topics need another pass before exams."),
            ]
        />
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <InfoPage
            icon="🛠️"
            title="Projects"
            lead="Build real things and show them off."
            points=&[
                ("Showcase", "Publish your projects with screenshots and write-ups."),
                ("Collaborate", "Find teammates with the skills your idea needs."),
                ("Get feedback", "Mentors review your work and suggest next steps."),
            ]
        />
    }
}
