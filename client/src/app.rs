//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::pages::{
    book_detail::BookDetailPage, books::BooksPage, genres::GenresPage, home::HomePage,
    publishers::PublishersPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: navigation bar plus the routed page.
///
/// Each list page owns its state, so nothing is provided through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-admin.css"/>
        <Title text="Book Management System"/>

        <Router>
            <Nav/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("books") view=BooksPage/>
                    <Route path=(StaticSegment("books"), ParamSegment("id")) view=BookDetailPage/>
                    <Route path=StaticSegment("genres") view=GenresPage/>
                    <Route path=StaticSegment("publishers") view=PublishersPage/>
                </Routes>
            </main>
        </Router>
    }
}
