//! File Picker Component
//!
//! Proof document input for the add-achievement form.

use leptos::*;
use wasm_bindgen::JsCast;

use edurev::portal::{remove_file, select_file, AttachedFile, ACCEPT_ATTRIBUTE};

use crate::state::SignalFormStore;

/// Read the first picked file's metadata from a change event
fn picked_file(ev: &web_sys::Event) -> Option<(web_sys::HtmlInputElement, AttachedFile)> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    let attached = AttachedFile::new(file.name(), file.type_(), file.size() as u64);
    Some((input, attached))
}

#[component]
pub fn FilePicker(store: SignalFormStore) -> impl IntoView {
    let attached = move || store.form.with(|form| form.attached_file.clone());
    let file_input = store.file_input;

    let on_change = move |ev: web_sys::Event| {
        let Some((input, file)) = picked_file(&ev) else {
            return;
        };
        if !select_file(&store, file) {
            // Let the same file be picked again after a rejection
            input.set_value("");
        }
    };

    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-700">
                "Proof Document "
                <span class="text-red-500">"*"</span>
            </label>

            <label class="flex flex-col items-center justify-center w-full px-4 py-6
                          border-2 border-dashed border-gray-300 rounded-lg cursor-pointer
                          hover:border-blue-400 hover:bg-blue-50 transition-colors">
                <span class="text-3xl">"📤"</span>
                <span class="mt-2 text-sm text-gray-600">"Click to upload a file"</span>
                <span class="text-xs text-gray-400">"PDF, JPG or PNG, up to 10MB"</span>
                <input
                    type="file"
                    class="hidden"
                    accept=ACCEPT_ATTRIBUTE
                    node_ref=file_input
                    disabled=move || store.submitting.get()
                    on:change=on_change
                />
            </label>

            {move || attached().map(|file| view! {
                <div class="flex items-center justify-between px-4 py-3 bg-green-50
                            border border-green-200 rounded-lg">
                    <div class="flex items-center space-x-2 text-sm">
                        <span>"📄"</span>
                        <span class="font-medium text-gray-900">{file.name.clone()}</span>
                        <span class="text-gray-500">{format!("({}KB)", file.size_kb())}</span>
                    </div>
                    <button
                        type="button"
                        class="text-sm text-red-600 hover:text-red-700 disabled:opacity-50"
                        disabled=move || store.submitting.get()
                        on:click=move |_| remove_file(&store)
                    >
                        "Remove"
                    </button>
                </div>
            })}
        </div>
    }
}
