use leptos::{either::Either, prelude::*};

use super::browser::BrowserDocument;
use super::hooks::use_scroll_metrics;
use crate::config::SiteConfig;
use crate::links::OWNER;
use crate::navigation::{MobileMenu, SectionId, SectionNavigator};

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let metrics = use_scroll_metrics(config.scroll);
    let (menu, set_menu) = signal(MobileMenu::default());
    let navigator = SectionNavigator::new(BrowserDocument);

    let go_to = move |section: SectionId| {
        set_menu.update(|menu| {
            navigator.go_to_from_menu(section, menu);
        });
    };

    view! {
        <header class=move || {
            if metrics.get().is_compact_header {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/70 backdrop-blur-sm shadow-card border-b border-border/20"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent backdrop-blur-0"
            }
        }>
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    <button
                        class="text-2xl font-bold cursor-pointer gradient-text"
                        on:click=move |_| go_to(SectionId::Home)
                    >
                        {OWNER}
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| go_to(section)
                                        class="text-foreground/80 hover:text-foreground transition-colors duration-300 font-medium relative group"
                                    >
                                        {section.label()}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-primary transition-all duration-300 group-hover:w-full"></span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden p-2 rounded-md hover:bg-muted transition-colors"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu.update(MobileMenu::toggle)
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(view! { <span class="text-2xl">"✕"</span> })
                            } else {
                                Either::Right(view! { <span class="text-2xl">"☰"</span> })
                            }
                        }}
                    </button>
                </div>
            </nav>

            <div class=move || {
                if menu.get().is_open() {
                    "md:hidden transition-all duration-300 max-h-screen"
                } else {
                    "md:hidden transition-all duration-300 max-h-0 overflow-hidden"
                }
            }>
                <div class="px-4 py-4 bg-background/95 backdrop-blur-md border-t border-border">
                    <div class="flex flex-col space-y-4">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| go_to(section)
                                        class="text-left text-foreground/80 hover:text-foreground transition-colors duration-300 font-medium py-2"
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </header>

        <div
            class=move || {
                if menu.get().is_open() { "mobile-menu-overlay active" } else { "mobile-menu-overlay" }
            }
            on:click=move |_| set_menu.update(MobileMenu::close)
        ></div>

        <button
            class=move || {
                if metrics.get().is_back_to_top_visible {
                    "back-to-top visible flex justify-center items-center w-12 h-12 rounded-full"
                } else {
                    "back-to-top flex justify-center items-center w-12 h-12 rounded-full"
                }
            }
            aria-label="Voltar ao topo"
            on:click=move |_| navigator.back_to_top()
        >
            <span class="text-2xl">"⌃"</span>
        </button>
    }
}
