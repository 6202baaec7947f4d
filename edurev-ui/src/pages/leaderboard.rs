//! Leaderboard Page
//!
//! Shows the student's standing. The full ranking table is not built yet.

use leptos::*;
use leptos_router::*;

use edurev::portal::Route as PortalRoute;

use crate::components::Loading;
use crate::state::global::use_global_state;

#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_global_state();

    let snapshot = create_local_resource(
        move || state.data_source.get(),
        |source| async move { source.load_dashboard().await },
    );

    view! {
        <div class="max-w-2xl mx-auto space-y-6 text-center">
            <h1 class="text-3xl font-bold text-gray-900">"🏅 Leaderboard"</h1>

            <Suspense fallback=move || view! { <Loading /> }>
                {move || snapshot.get().map(|(data, _)| view! {
                    <div class="bg-white border border-gray-200 rounded-xl p-8 space-y-2">
                        <p class="text-gray-500">"Your current rank"</p>
                        <p class="text-5xl font-extrabold text-blue-600">
                            {format!("#{}", data.stats.rank)}
                        </p>
                        <p class="text-gray-500">
                            {format!("{} points from {} achievements",
                                data.stats.total_points, data.stats.total_achievements)}
                        </p>
                    </div>
                })}
            </Suspense>

            <p class="text-gray-500">"The full leaderboard is coming soon!"</p>

            <A
                href=PortalRoute::BeyondAcademics.path()
                class="inline-block text-sm text-blue-600 hover:underline"
            >
                "← Back to dashboard"
            </A>
        </div>
    }
}
