use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::AppRoute;
use crate::ui::pages::{AuthPage, BaheePage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vigat_bahee.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=path!("") view=RootLayout>
                    <Route path=path!("") view=AuthPage/>
                    <Route path=path!("bahee") view=BaheePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Shared layout of the routes under `/`; sets the document title
#[component]
fn RootLayout() -> impl IntoView {
    let location = use_location();
    let title = move || {
        AppRoute::resolve(&location.pathname.get())
            .unwrap_or(AppRoute::Auth)
            .title()
    };

    view! {
        <Title text=title/>
        <div class="w-full min-h-screen">
            <Outlet/>
        </div>
    }
}
