//! Data Source Settings
//!
//! Lets the dashboard switch between sample data and a running EduRev API.

use leptos::*;

use edurev::portal::Notice;

use crate::api;
use crate::state::global::use_global_state;
use crate::state::DataSource;

#[component]
pub fn DataSourceSettings() -> impl IntoView {
    let state = use_global_state();

    let (api_url, set_api_url) = create_signal(api::saved_api_base().unwrap_or_default());

    let save_url = move |_| {
        api::set_api_base(&api_url.get_untracked());
        let source = DataSource::detect();
        state.notify(Notice::info(
            "Data Source Updated",
            format!("Dashboard now shows: {}", source.label()),
        ));
        state.data_source.set(source);
    };

    let use_samples = move |_| {
        api::set_api_base("");
        set_api_url.set(String::new());
        state.data_source.set(DataSource::Fixtures);
    };

    view! {
        <details class="bg-white border border-gray-200 rounded-xl p-4 text-sm">
            <summary class="cursor-pointer text-gray-600">
                "Data source: "
                <span class="font-medium text-gray-900">{move || state.data_source.get().label()}</span>
            </summary>

            <div class="mt-4 space-y-2">
                <label class="block text-gray-500">"EduRev API URL"</label>
                <div class="flex flex-col sm:flex-row gap-2">
                    <input
                        type="text"
                        placeholder="http://localhost:8090/api/v1"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 rounded-lg px-4 py-2 border border-gray-300
                               focus:border-blue-500 focus:outline-none"
                    />
                    <button
                        on:click=save_url
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                    <button
                        on:click=use_samples
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Use sample data"
                    </button>
                </div>
            </div>
        </details>
    }
}
