use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container not-found-page">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"This trail doesn't exist"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the course"</A>
            </nav>
        </main>
    }
}
