//! Add Achievement Page
//!
//! Submission form for a new beyond-academics achievement.

use leptos::*;
use leptos_router::*;

use edurev::portal::{edit_field, submit, FormField, Route as PortalRoute, ACHIEVEMENT_KINDS};

use crate::api::SimulatedGateway;
use crate::components::{FilePicker, InlineLoading};
use crate::state::global::use_global_state;
use crate::state::SignalFormStore;

/// Add achievement page component
#[component]
pub fn AddAchievement() -> impl IntoView {
    let store = SignalFormStore::new(use_global_state());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            submit(&store, &SimulatedGateway::default()).await;
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <A
                href=PortalRoute::BeyondAcademics.path()
                class="inline-flex items-center text-sm text-gray-500 hover:text-gray-800"
            >
                "← Back to dashboard"
            </A>

            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Add Achievement"</h1>
                <p class="text-gray-500 mt-1">
                    "Submit an achievement with a proof document for review"
                </p>
            </div>

            <form
                on:submit=on_submit
                class="bg-white border border-gray-200 rounded-xl p-6 space-y-5"
            >
                <TextField store=store field=FormField::StudentName placeholder="Your full name" />
                <TextField store=store field=FormField::StudentId placeholder="e.g. STU-2024-001" />

                // Achievement type
                <div class="space-y-2">
                    <FieldLabel field=FormField::AchievementType />
                    <select
                        class="w-full rounded-lg px-4 py-2 border border-gray-300 bg-white
                               focus:border-blue-500 focus:outline-none"
                        disabled=move || store.submitting.get()
                        prop:value=move || store.form.with(|f| f.achievement_type.clone())
                        on:change=move |ev| {
                            edit_field(&store, FormField::AchievementType, event_target_value(&ev))
                        }
                    >
                        <option value="">"Select achievement type"</option>
                        {ACHIEVEMENT_KINDS.iter().map(|kind| view! {
                            <option value=kind.value>{kind.label}</option>
                        }).collect_view()}
                    </select>
                </div>

                // Description
                <div class="space-y-2">
                    <FieldLabel field=FormField::Description />
                    <textarea
                        rows="4"
                        placeholder="What did you achieve, when and where?"
                        class="w-full rounded-lg px-4 py-2 border border-gray-300
                               focus:border-blue-500 focus:outline-none"
                        disabled=move || store.submitting.get()
                        prop:value=move || store.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            edit_field(&store, FormField::Description, event_target_value(&ev))
                        }
                    />
                </div>

                <FilePicker store=store />

                <button
                    type="submit"
                    disabled=move || store.submitting.get()
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300
                           text-white rounded-lg font-semibold transition-colors
                           flex items-center justify-center space-x-2"
                >
                    {move || if store.submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Submitting..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Submit Achievement"</span> }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldLabel(field: FormField) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-gray-700">
            {field.label()}
            {field.is_required().then(|| view! { <span class="text-red-500">" *"</span> })}
        </label>
    }
}

#[component]
fn TextField(
    store: SignalFormStore,
    field: FormField,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel field=field />
            <input
                type="text"
                placeholder=placeholder
                class="w-full rounded-lg px-4 py-2 border border-gray-300
                       focus:border-blue-500 focus:outline-none"
                disabled=move || store.submitting.get()
                prop:value=move || store.form.with(|f| f.field(field).to_string())
                on:input=move |ev| edit_field(&store, field, event_target_value(&ev))
            />
        </div>
    }
}
