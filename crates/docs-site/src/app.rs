//! Main application component

use leptos::*;
use leptos_router::*;

use crate::components::NavBar;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <NavBar/>
                <main class="pt-16">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/docs" view=|| view! { <DocsPage section=DocSection::Overview/> }/>
                        <Route path="/docs/guides" view=|| view! { <DocsPage section=DocSection::Guides/> }/>
                        <Route path="/docs/reference" view=|| view! { <DocsPage section=DocSection::Reference/> }/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
