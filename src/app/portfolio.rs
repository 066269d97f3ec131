use leptos::{html, prelude::*};

use super::browser::BrowserDocument;
use super::hooks::{reveal_class, use_reveal};
use crate::config::SiteConfig;
use crate::navigation::{SectionId, SectionNavigator};
use crate::portfolio::{filter, CategoryFilter, Project, PROJECTS};

#[component]
pub fn Portfolio() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.section_reveal);
    let (active, set_active) = signal(CategoryFilter::default());
    let navigator = SectionNavigator::new(BrowserDocument);

    view! {
        <section id=SectionId::Portfolio.anchor() node_ref=section_ref class="py-20 lg:py-32">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("transition-all duration-1000 {}", reveal_class(visible.get()))
                }>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-6">
                            "Meu " <span class="gradient-text">"Portfólio"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-primary mx-auto mb-8"></div>
                        <p class="text-xl text-muted-foreground max-w-3xl mx-auto leading-relaxed">
                            "Conheça alguns dos projetos que desenvolvi, combinando design e tecnologia para criar soluções digitais."
                        </p>
                    </div>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        {CategoryFilter::OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        data-filter=option.slug()
                                        on:click=move |_| set_active.set(option)
                                        class=move || {
                                            if active.get() == option {
                                                "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-gradient-primary text-white shadow-glow"
                                            } else {
                                                "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-card border border-border text-foreground hover:border-primary"
                                            }
                                        }
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            filter(PROJECTS, active.get())
                                .into_iter()
                                .enumerate()
                                .map(|(i, project)| {
                                    let delay = config.stagger_delay(i).as_millis();
                                    view! { <ProjectCard project=project delay=delay /> }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="text-center mt-16">
                        <p class="text-muted-foreground mb-6">
                            "Tem um projeto em mente? Vamos conversar!"
                        </p>
                        <button
                            on:click=move |_| {
                                navigator.go_to_section(SectionId::Contact);
                            }
                            class="px-8 py-3 bg-gradient-primary text-white rounded-full font-medium hover-float shadow-glow"
                        >
                            "Iniciar um Projeto"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay: u128) -> impl IntoView {
    view! {
        <article
            class="group bg-card border border-border rounded-xl overflow-hidden shadow-card hover-float animate-fade-in-up"
            style=format!("animation-delay: {delay}ms")
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end justify-center gap-4 pb-4">
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 bg-primary text-white rounded-full text-sm"
                    >
                        "Ver Projeto"
                    </a>
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 bg-card text-foreground rounded-full text-sm"
                    >
                        "Código"
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold text-foreground mb-2">{project.title}</h3>
                <p class="text-muted-foreground text-sm leading-relaxed mb-4">
                    {project.description}
                </p>
                <ul class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class="px-3 py-1 bg-muted text-muted-foreground rounded-full text-xs">
                                    {*tech}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
