use leptos::prelude::*;

use super::browser::BrowserDocument;
use super::hooks::reveal_class;
use crate::links::{mailto, GITHUB, LINKEDIN};
use crate::navigation::{SectionId, SectionNavigator};

#[component]
pub fn Hero() -> impl IntoView {
    // the banner is already on screen, so it fades in as soon as it mounts
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible.set(true));
    let navigator = SectionNavigator::new(BrowserDocument);

    view! {
        <section
            id=SectionId::Home.anchor()
            class="relative min-h-screen flex items-center justify-center bg-hero"
        >
            <div class="absolute inset-0 bg-background/60"></div>

            <div class="relative z-10 container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 items-center min-h-screen py-20">
                    <div class=move || {
                        format!("transition-all duration-1000 {}", reveal_class(visible.get()))
                    }>
                        <div class="mb-6">
                            <p class="text-muted-foreground text-lg font-light">
                                "Construindo pontes digitais,"
                            </p>
                            <p class="text-muted-foreground text-lg font-light">"pixel a pixel."</p>
                        </div>

                        <div class="mb-8">
                            <h1 class="text-5xl lg:text-7xl font-bold text-foreground leading-tight mb-4">
                                "DESENVOLVEDOR"
                            </h1>
                            <h1 class="text-3xl lg:text-4xl font-bold text-foreground leading-tight">
                                "& " <span class="gradient-text">"FRONT-END"</span> "."
                            </h1>
                        </div>

                        <div class="mb-8">
                            <p class="text-muted-foreground text-lg leading-relaxed max-w-lg">
                                "Ajudo marcas a desenvolver "
                                <span class="text-primary font-medium">
                                    "experiências digitais únicas"
                                </span>
                                ", pensadas no contexto do mundo digital moderno. Cada detalhe é planejado para provocar uma "
                                <span class="text-primary font-medium">
                                    "transformação real e memorável"
                                </span> "."
                            </p>
                        </div>

                        <div class="flex gap-6 text-lg font-medium">
                            <a
                                href=GITHUB.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                aria-label="GitHub"
                            >
                                "GitHub"
                            </a>
                            <a
                                href=LINKEDIN.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                aria-label="LinkedIn"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                href=mailto()
                                target="_blank"
                                class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                aria-label="Email"
                            >
                                "Email"
                            </a>
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "text-center lg:text-left transition-all duration-1000 delay-300 {}",
                            reveal_class(visible.get()),
                        )
                    }>
                        <div class="mb-8 flex justify-center lg:justify-start">
                            <div class="profile-circle" role="img" aria-label="Alexandre - Desenvolvedor Front-End">
                                <span class="gradient-text text-7xl font-bold">"A"</span>
                            </div>
                        </div>

                        <div class="mb-6">
                            <h2 class="text-2xl font-bold text-foreground mb-2">"Alexandre"</h2>
                            <p class="text-primary font-medium">"Desenvolvedor"</p>
                            <p class="text-primary font-medium">"Front-End"</p>
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <button
                        on:click=move |_| {
                            navigator.go_to_section(SectionId::About);
                        }
                        class="text-muted-foreground hover:text-primary transition-colors duration-300 text-3xl"
                        aria-label="Rolar para baixo"
                    >
                        "⌄"
                    </button>
                </div>
            </div>
        </section>
    }
}
