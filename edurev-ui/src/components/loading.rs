//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for the stat tiles
#[component]
pub fn TileSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white border border-gray-200 rounded-xl p-5">
                    <div class="h-4 bg-gray-200 rounded w-1/2 mb-4" />
                    <div class="h-8 bg-gray-200 rounded w-1/3" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded h-16" />
            }).collect_view()}
        </div>
    }
}
