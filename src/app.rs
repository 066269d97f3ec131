mod about;
mod browser;
mod contact;
mod footer;
mod header;
mod hero;
mod hooks;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Alexandre - Desenvolvedor Front-End. Portfólio, projetos e contato."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title formatter=|title| format!("Alexandre - {title}") />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole single-page layout, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Desenvolvedor Front-End" />
        <Header />
        <main class="min-h-screen">
            <Hero />
            <About />
            <Portfolio />
            <Contact />
        </main>
        <Footer />
    }
}
