//! Achievement Card Component
//!
//! One row of the achievements list with its status badge.

use leptos::*;

use edurev::portal::{AchievementRecord, AchievementStatus};

#[component]
pub fn AchievementCard(record: AchievementRecord) -> impl IntoView {
    let date = record.display_date();

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-between gap-3 p-4
                    border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors">
            <div class="space-y-1">
                <h3 class="font-semibold text-gray-900">{record.title}</h3>
                <div class="flex flex-wrap items-center gap-x-3 gap-y-1 text-sm text-gray-500">
                    <span>{record.category}</span>
                    <span>"•"</span>
                    <span>{date}</span>
                    <span>"•"</span>
                    <span class="flex items-center space-x-1">
                        <span>"📄"</span>
                        <span>{record.file_name}</span>
                    </span>
                </div>
            </div>

            <div class="flex items-center space-x-3">
                <span class="text-sm font-semibold text-amber-600">
                    {format!("+{} pts", record.points)}
                </span>
                <StatusBadge status=record.status />
            </div>
        </div>
    }
}

#[component]
pub fn StatusBadge(status: AchievementStatus) -> impl IntoView {
    let badge = status.badge();

    view! {
        <span class=format!(
            "inline-flex items-center space-x-1 px-2.5 py-0.5 rounded-full border text-xs font-medium {}",
            badge.class
        )>
            <span>{badge.icon}</span>
            <span>{badge.label}</span>
        </span>
    }
}
