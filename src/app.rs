mod about;
mod contact;
mod hero;
mod navbar;
mod showcase;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Portfolio};
use crate::sections::ActiveSectionTracker;
use about::About;
use contact::{Contact, Footer};
use hero::Hero;
use navbar::Navbar;
use showcase::{Gallery, Services, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio()
        .map(|p| p.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

fn load_page() -> crate::Result<(&'static Portfolio, ActiveSectionTracker)> {
    let portfolio = portfolio()?;
    let tracker = ActiveSectionTracker::new(portfolio.sections.clone())?;
    Ok((portfolio, tracker))
}

#[component]
fn HomePage() -> impl IntoView {
    match load_page() {
        Ok((portfolio, tracker)) => Either::Left(view! {
            <Title text="Portfolio" />
            <Navbar brand=portfolio.profile.name.clone() tracker />
            <main class="pt-16">
                <Hero profile=&portfolio.profile config=portfolio.typing_config() />
                <About profile=&portfolio.profile />
                <Skills skills=&portfolio.skills />
                <Services services=&portfolio.services />
                <Gallery projects=&portfolio.projects />
                <Contact />
            </main>
            <Footer owner=portfolio.profile.name.clone() />
        }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="flex h-screen items-center justify-center bg-blue-950 text-white">
                    <p class="text-lg">"This page is temporarily unavailable."</p>
                </main>
            })
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="flex flex-col h-screen items-center justify-center gap-6 bg-blue-950 text-white">
            <h1 class="text-4xl font-serif font-bold text-cyan-400">"404"</h1>
            <p class="text-lg">"Nothing lives at this address."</p>
            <a href="/" class="underline hover:text-cyan-300">"Back home"</a>
        </main>
    }
}
