use leptos::prelude::*;

use super::browser::BrowserDocument;
use crate::links::{mailto, EMAIL, GITHUB, LINKEDIN, LOCATION, OWNER, PHONE_INTERNATIONAL};
use crate::navigation::{SectionId, SectionNavigator};

#[component]
pub fn Footer() -> impl IntoView {
    let navigator = SectionNavigator::new(BrowserDocument);
    let socials = [
        (GITHUB.name, GITHUB.url.to_string(), true),
        (LINKEDIN.name, LINKEDIN.url.to_string(), true),
        ("Email", mailto(), false),
    ];

    view! {
        <footer class="bg-card border-t border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold gradient-text mb-4">{OWNER}</h3>
                        <p class="text-muted-foreground leading-relaxed mb-6">
                            "Desenvolvedor Front-End apaixonado por criar experiências digitais únicas e memoráveis."
                        </p>
                        <ul class="flex gap-4">
                            {socials
                                .into_iter()
                                .map(|(name, href, new_tab)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                target=new_tab.then_some("_blank")
                                                rel=new_tab.then_some("noopener noreferrer")
                                                aria-label=name
                                                class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                            >
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold text-foreground mb-4">"Links Rápidos"</h4>
                        <ul class="space-y-2">
                            {SectionId::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| {
                                                    navigator.go_to_section(section);
                                                }
                                                class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                            >
                                                {section.label()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold text-foreground mb-4">"Contato"</h4>
                        <ul class="space-y-2 text-muted-foreground">
                            <li>{EMAIL}</li>
                            <li>{PHONE_INTERNATIONAL}</li>
                            <li>{LOCATION}</li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-border mt-8 pt-8 text-center">
                    <p class="text-muted-foreground text-sm">
                        {format!("© {} {OWNER}. Todos os direitos reservados.", env!("BUILD_YEAR"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
