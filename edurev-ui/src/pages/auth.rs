//! Login and Signup Pages
//!
//! The forms render but there is no account backend yet; submitting shows a
//! notice instead.

use leptos::*;
use leptos_router::*;

use edurev::portal::{Notice, Route as PortalRoute};

use crate::state::global::use_global_state;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <AuthCard
            title="Welcome back"
            action="Log In"
            with_name=false
            switch_prompt="Don't have an account?"
            switch_label="Sign up"
            switch_route=PortalRoute::Signup
        />
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <AuthCard
            title="Create your account"
            action="Sign Up"
            with_name=true
            switch_prompt="Already have an account?"
            switch_label="Log in"
            switch_route=PortalRoute::Login
        />
    }
}

#[component]
fn AuthCard(
    title: &'static str,
    action: &'static str,
    with_name: bool,
    switch_prompt: &'static str,
    switch_label: &'static str,
    switch_route: PortalRoute,
) -> impl IntoView {
    let state = use_global_state();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.notify(Notice::info(
            format!("{} not available yet", action),
            "Accounts are coming soon. You can explore the portal without one.",
        ));
    };

    view! {
        <div class="max-w-md mx-auto bg-white border border-gray-200 rounded-xl p-8 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 text-center">{title}</h1>

            <form on:submit=on_submit class="space-y-4">
                {with_name.then(|| view! {
                    <AuthInput label="Full Name" kind="text" />
                })}
                <AuthInput label="Email" kind="email" />
                <AuthInput label="Password" kind="password" />

                <button
                    type="submit"
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                           font-semibold transition-colors"
                >
                    {action}
                </button>
            </form>

            <p class="text-center text-sm text-gray-500">
                {switch_prompt}" "
                <A href=switch_route.path() class="text-blue-600 hover:underline">
                    {switch_label}
                </A>
            </p>
        </div>
    }
}

#[component]
fn AuthInput(label: &'static str, kind: &'static str) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-gray-700">{label}</span>
            <input
                type=kind
                class="w-full rounded-lg px-4 py-2 border border-gray-300
                       focus:border-blue-500 focus:outline-none"
            />
        </label>
    }
}
