//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use edurev::portal::Route as PortalRoute;

use crate::components::{Nav, Toast};
use crate::pages::{
    AddAchievement, Dashboard, EduRevInfo, Home, Leaderboard, Login, Projects, Signup,
};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=PortalRoute::Home.path() view=Home />
                        <Route path=PortalRoute::EduRev.path() view=EduRevInfo />
                        <Route path=PortalRoute::BeyondAcademics.path() view=Dashboard />
                        <Route path=PortalRoute::Projects.path() view=Projects />
                        <Route path=PortalRoute::Login.path() view=Login />
                        <Route path=PortalRoute::Signup.path() view=Signup />
                        <Route path=PortalRoute::Leaderboard.path() view=Leaderboard />
                        <Route path=PortalRoute::AddAchievement.path() view=AddAchievement />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-white py-6">
            <div class="container mx-auto px-4 text-center text-sm text-gray-500">
                "EduRev student portal"
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=PortalRoute::Home.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
