use launcher_runtime::{LauncherShell, SessionProvider};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Pinokio" />
        <Meta name="description" content="Launcher shell for the local Pinokio server." />

        <main class="site-root">
            <SessionProvider host_services=launcher_host_web::host_services()>
                <LauncherShell />
            </SessionProvider>
        </main>
    }
}
