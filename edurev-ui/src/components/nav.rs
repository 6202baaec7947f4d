//! Navigation Component
//!
//! Header navigation bar with logo, links and a collapsible mobile menu.

use leptos::*;
use leptos_router::*;

use edurev::portal::{NavItem, Route, NAV_ITEMS};

use crate::state::global::{use_global_state, GlobalState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let location = use_location();

    close_menu_on_navigation(state, location.pathname);

    view! {
        <nav class="bg-white/90 backdrop-blur border-b border-gray-200 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=Route::Home.path() class="flex items-center space-x-2">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-gray-900">"EduRev"</span>
                    </A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS.iter().map(|item| view! { <NavLink item=*item /> }).collect_view()}
                    </div>

                    // Auth actions
                    <div class="hidden md:flex items-center space-x-2">
                        <AuthLinks />
                    </div>

                    // Mobile toggle
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg text-gray-700 hover:bg-gray-100"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || state.menu_open.get().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        {move || if state.menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile menu
                <Show when=move || state.menu_open.get()>
                    <div class="md:hidden pb-4 space-y-1">
                        {NAV_ITEMS.iter().map(|item| view! { <NavLink item=*item mobile=true /> }).collect_view()}
                        <div class="flex space-x-2 pt-2">
                            <AuthLinks />
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Close the mobile menu whenever the path changes, however it changed
fn close_menu_on_navigation(state: GlobalState, pathname: Memo<String>) {
    create_effect(move |_| {
        pathname.track();
        state.close_menu();
    });
}

/// Individual navigation link
#[component]
fn NavLink(
    item: NavItem,
    #[prop(optional)]
    mobile: bool,
) -> impl IntoView {
    let location = use_location();
    let active = create_memo(move |_| location.pathname.with(|path| item.is_active(path)));

    view! {
        <A
            href=item.path
            class=move || {
                let base = if mobile {
                    "flex items-center space-x-2 px-4 py-3 rounded-lg transition-colors"
                } else {
                    "flex items-center space-x-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors"
                };
                if active.get() {
                    format!("{} bg-blue-50 text-blue-700", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900 hover:bg-gray-100", base)
                }
            }
        >
            <span>{item.icon}</span>
            <span>{item.label}</span>
        </A>
    }
}

#[component]
fn AuthLinks() -> impl IntoView {
    view! {
        <A
            href=Route::Login.path()
            class="px-4 py-2 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-100 transition-colors"
        >
            "Log In"
        </A>
        <A
            href=Route::Signup.path()
            class="px-4 py-2 rounded-lg text-sm font-medium bg-blue-600 hover:bg-blue-700 text-white transition-colors"
        >
            "Sign Up"
        </A>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::state::DataSource;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_menu_closes_on_route_change() {
        let state = GlobalState::new(DataSource::Fixtures);
        let (path, set_path) = create_signal("/".to_string());
        close_menu_on_navigation(state, create_memo(move |_| path.get()));
        TimeoutFuture::new(0).await;

        state.toggle_menu();
        TimeoutFuture::new(0).await;
        assert!(state.menu_open.get_untracked(), "toggling alone keeps it open");

        set_path.set(Route::Projects.path().to_string());
        TimeoutFuture::new(0).await;
        assert!(!state.menu_open.get_untracked());
    }
}
