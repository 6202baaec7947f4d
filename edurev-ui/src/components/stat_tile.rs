//! Stat Tile Component
//!
//! Displays a single dashboard statistic.

use leptos::*;

use edurev::portal::StatTile as Tile;

/// Stat tile component
#[component]
pub fn StatTile(tile: Tile) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-5 border border-gray-200 shadow-sm">
            <div class="flex items-center justify-between">
                <span class="text-gray-500 text-sm">{tile.label}</span>
                <span class="text-2xl">{tile.icon}</span>
            </div>
            <div class=format!("text-3xl font-bold mt-2 {}", tile.accent)>
                {tile.value}
            </div>
        </div>
    }
}
