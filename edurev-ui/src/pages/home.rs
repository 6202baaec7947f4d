//! Home Page

use leptos::*;
use leptos_router::*;

use edurev::portal::Route as PortalRoute;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    route: PortalRoute,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📚",
        title: "EduRev",
        body: "Revise smarter with curated notes, practice sets and progress tracking.",
        route: PortalRoute::EduRev,
    },
    Feature {
        icon: "🏆",
        title: "Beyond Academics",
        body: "Log competitions, sports, leadership and service, and earn points for them.",
        route: PortalRoute::BeyondAcademics,
    },
    Feature {
        icon: "🛠️",
        title: "Projects",
        body: "Showcase what you build and collaborate with other students.",
        route: PortalRoute::Projects,
    },
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            // Hero
            <section class="text-center py-12 md:py-20 space-y-6">
                <h1 class="text-4xl md:text-6xl font-extrabold text-gray-900">
                    "Your learning, "
                    <span class="text-blue-600">"recognised"</span>
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-gray-600">
                    "EduRev brings your studies, projects and achievements beyond the classroom \
                     into one student portal."
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-3">
                    <A
                        href=PortalRoute::Signup.path()
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                               font-semibold transition-colors"
                    >
                        "Get Started"
                    </A>
                    <A
                        href=PortalRoute::BeyondAcademics.path()
                        class="px-6 py-3 border border-gray-300 hover:bg-gray-100 text-gray-800
                               rounded-lg font-semibold transition-colors"
                    >
                        "View Dashboard"
                    </A>
                </div>
            </section>

            // Feature highlights
            <section class="grid md:grid-cols-3 gap-6">
                {FEATURES.iter().map(|feature| view! {
                    <A
                        href=feature.route.path()
                        class="block bg-white border border-gray-200 rounded-xl p-6
                               hover:shadow-md transition-shadow"
                    >
                        <div class="text-4xl mb-3">{feature.icon}</div>
                        <h2 class="text-xl font-semibold text-gray-900">{feature.title}</h2>
                        <p class="text-gray-600 mt-2">{feature.body}</p>
                    </A>
                }).collect_view()}
            </section>
        </div>
    }
}
