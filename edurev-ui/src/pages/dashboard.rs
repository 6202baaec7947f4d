//! Beyond Academics Dashboard
//!
//! Stat tiles, the achievements list and the coming-soon tabs.

use leptos::*;
use leptos_router::*;

use edurev::portal::{DashboardSnapshot, DashboardTab, Notice, Route as PortalRoute};

use crate::components::{AchievementCard, DataSourceSettings, ListSkeleton, StatTile, TileSkeleton};
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let (tab, set_tab) = create_signal(DashboardTab::default());

    let snapshot = create_local_resource(
        move || state.data_source.get(),
        move |source| async move {
            let (data, error) = source.load_dashboard().await;
            if let Some(message) = &error {
                state.notify(Notice::error("Could Not Load Dashboard", message.clone()));
            }
            (data, error)
        },
    );

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Beyond Academics"</h1>
                    <p class="text-gray-500 mt-1">
                        "Track achievements outside the classroom and earn points for them"
                    </p>
                </div>
                <div class="flex gap-2">
                    <A
                        href=PortalRoute::Leaderboard.path()
                        class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700
                               hover:bg-gray-100 font-medium transition-colors"
                    >
                        "🏅 Leaderboard"
                    </A>
                    <A
                        href=PortalRoute::AddAchievement.path()
                        class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white
                               font-medium transition-colors"
                    >
                        "+ Add Achievement"
                    </A>
                </div>
            </div>

            <Suspense fallback=move || view! {
                <TileSkeleton />
                <ListSkeleton count=4 />
            }>
                {move || snapshot.get().map(|(data, error)| view! {
                    {error.map(|message| view! {
                        <div class="px-4 py-3 rounded-lg bg-yellow-50 border border-yellow-200 text-sm text-yellow-800">
                            {format!("Could not reach the EduRev API ({}). Showing sample data.", message)}
                        </div>
                    })}

                    // Stats tiles
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        {data.stats.tiles().into_iter().map(|tile| view! {
                            <StatTile tile=tile />
                        }).collect_view()}
                    </div>

                    <DashboardTabs tab=tab set_tab=set_tab data=data />
                })}
            </Suspense>

            <DataSourceSettings />
        </div>
    }
}

#[component]
fn DashboardTabs(
    tab: ReadSignal<DashboardTab>,
    set_tab: WriteSignal<DashboardTab>,
    data: DashboardSnapshot,
) -> impl IntoView {
    let achievements = store_value(data.achievements);

    view! {
        <section class="bg-white border border-gray-200 rounded-xl">
            // Tab bar
            <div class="flex border-b border-gray-200 overflow-x-auto">
                {DashboardTab::ALL.into_iter().map(|t| view! {
                    <button
                        type="button"
                        class=move || if tab.get() == t {
                            "px-5 py-3 text-sm font-medium border-b-2 border-blue-600 text-blue-700"
                        } else {
                            "px-5 py-3 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-800"
                        }
                        on:click=move |_| set_tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            // Tab body
            <div class="p-4 md:p-6">
                {move || match tab.get().placeholder() {
                    Some(message) => view! {
                        <div class="text-center py-12 text-gray-500">
                            <div class="text-4xl mb-3">"🚧"</div>
                            <p>{message}</p>
                        </div>
                    }.into_view(),
                    None => achievements.with_value(|list| {
                        if list.is_empty() {
                            view! {
                                <p class="text-center py-12 text-gray-500">
                                    "No achievements yet. Add your first one!"
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    {list.iter().cloned().map(|record| view! {
                                        <AchievementCard record=record />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }),
                }}
            </div>
        </section>
    }
}
