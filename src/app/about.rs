use leptos::{html, prelude::*};

use super::hooks::{reveal_class, use_reveal};
use crate::config::SiteConfig;
use crate::navigation::SectionId;

struct Skill {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SKILLS: [Skill; 4] = [
    Skill {
        icon: "</>",
        title: "Desenvolvimento Front-End",
        description: "Criação de interfaces performáticas com tecnologias modernas como React, TypeScript, Next.js, HTML, CSS e JavaScript.",
    },
    Skill {
        icon: "🎨",
        title: "UI/UX",
        description: "Design de interfaces intuitivas e experiências centradas no usuário, focadas em usabilidade e conversão.",
    },
    Skill {
        icon: "🚀",
        title: "Performance",
        description: "Aprimoramento de performance com foco em velocidade de carregamento, SEO técnico e acessibilidade.",
    },
    Skill {
        icon: "👥",
        title: "Colaboração",
        description: "Colaboração em equipe com metodologias ágeis e comunicação clara em todas as etapas do projeto.",
    },
];

const STACK: [&str; 8] = [
    "React",
    "TypeScript",
    "Next.js",
    "Tailwind CSS",
    "HTML",
    "Git",
    "CSS",
    "Javascript",
];

#[component]
pub fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.about_reveal);

    view! {
        <section id=SectionId::About.anchor() node_ref=section_ref class="py-20 lg:py-32 bg-muted/30">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("transition-all duration-1000 {}", reveal_class(visible.get()))
                }>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-6">
                            "Sobre " <span class="gradient-text">"Alexandre"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-primary mx-auto mb-8"></div>
                        <p class="text-xl text-muted-foreground max-w-3xl mx-auto leading-relaxed">
                            "Transformo ideias em experiências digitais que aproximam pessoas e marcas, com foco em código limpo e arquitetura bem estruturada."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-16 items-center mb-20">
                        <div class="space-y-6 animate-fade-in-left">
                            <h3 class="text-2xl font-bold text-foreground">
                                "Onde ideias ganham vida no mundo digital."
                            </h3>
                            <p class="text-muted-foreground leading-relaxed">
                                "Minha abordagem integra conhecimentos sólidos em HTML, CSS, JavaScript, React, TypeScript e outras tecnologias modernas, sempre com foco em arquiteturas escaláveis e código de fácil manutenção. Acredito que um bom código deve ser compreensível e evolutivo para qualquer desenvolvedor."
                            </p>

                            <div class="grid grid-cols-3 gap-6 pt-8">
                                <Stat value="5+" label="Projetos" color="text-primary" />
                                <Stat value="1+" label="Anos" color="text-accent" />
                                <Stat value="100%" label="Dedicação" color="text-secondary" />
                            </div>
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 animate-fade-in-right">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div
                                            class="bg-card border border-border rounded-xl p-6 shadow-card hover-float"
                                            style=format!(
                                                "animation-delay: {}ms",
                                                config.stagger_delay(i).as_millis(),
                                            )
                                        >
                                            <div class="w-12 h-12 rounded-lg bg-gradient-primary flex items-center justify-center mb-4 text-white">
                                                {skill.icon}
                                            </div>
                                            <h4 class="text-lg font-semibold text-foreground mb-2">
                                                {skill.title}
                                            </h4>
                                            <p class="text-muted-foreground text-sm leading-relaxed">
                                                {skill.description}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="text-center">
                        <h3 class="text-2xl font-bold text-foreground mb-8">"Stack de tecnologias"</h3>
                        <div class="flex flex-wrap justify-center gap-4">
                            {STACK
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-4 py-2 bg-gradient-primary text-white rounded-full text-sm font-medium hover-float">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("text-3xl font-bold {color}")>{value}</div>
            <div class="text-sm text-muted-foreground">{label}</div>
        </div>
    }
}
