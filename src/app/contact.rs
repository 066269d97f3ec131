use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};

use super::browser::{BrowserOpener, BrowserStorage, TimeoutScheduler};
use super::hooks::{reveal_class, use_reveal};
use crate::config::SiteConfig;
use crate::contact::{ContactComposer, ContactSubmission, SubmitOutcome};
use crate::links::{contact_channels, EMAIL, SOCIAL_PROFILES};
use crate::navigation::SectionId;

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u32,
    title: &'static str,
    description: String,
    is_error: bool,
}

impl Toast {
    fn from_outcome(id: u32, outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::MailClientOpened => Self {
                id,
                title: "Cliente de e-mail aberto",
                description: "Por favor complete o envio no seu aplicativo de e-mail".to_string(),
                is_error: false,
            },
            SubmitOutcome::MailClientFailed(_) => Self {
                id,
                title: "Não foi possível abrir o e-mail",
                description: format!("Envie sua mensagem diretamente para {EMAIL}"),
                is_error: true,
            },
        }
    }
}

fn field_value(input: NodeRef<html::Input>) -> String {
    input.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.section_reveal);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (submitting, set_submitting) = signal(false);
    let (toast, set_toast) = signal(None::<Toast>);
    let (toast_count, set_toast_count) = signal(0u32);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let record = ContactSubmission {
            name: field_value(name_ref),
            email: field_value(email_ref),
            subject: field_value(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        // subject may be left blank when the form is bypassed, the mailto falls back
        if let Err(err) = record.validate() {
            log::debug!("contact: submitting incomplete form: {err}");
        }

        set_submitting.set(true);
        let composer = ContactComposer::new(
            BrowserOpener,
            BrowserStorage,
            TimeoutScheduler,
            config.submit_delay,
        );
        composer.submit(record, move |outcome| {
            set_submitting.set(false);
            let id = toast_count.get_untracked() + 1;
            set_toast_count.set(id);
            set_toast.set(Some(Toast::from_outcome(id, outcome)));
            set_timeout(
                move || {
                    set_toast.update(|current| {
                        if current.as_ref().is_some_and(|t| t.id == id) {
                            *current = None;
                        }
                    })
                },
                TOAST_DURATION,
            );
        });
    };

    view! {
        <section id=SectionId::Contact.anchor() node_ref=section_ref class="py-20 lg:py-32 bg-muted/30">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("transition-all duration-1000 {}", reveal_class(visible.get()))
                }>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-6">
                            "Vamos " <span class="gradient-text">"Conversar"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-primary mx-auto mb-8"></div>
                        <p class="text-xl text-muted-foreground max-w-3xl mx-auto leading-relaxed">
                            "Tem um projeto em mente ou quer apenas trocar uma ideia? Estou sempre aberto a novas oportunidades e colaborações."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="bg-card border border-border rounded-xl p-8 shadow-card">
                            <h3 class="text-2xl font-bold text-foreground mb-6">"Envie uma Mensagem"</h3>
                            <form on:submit=on_submit class="space-y-6">
                                <div class="grid sm:grid-cols-2 gap-4">
                                    <FormField label="Nome" for_id="name">
                                        <input
                                            id="name"
                                            name="name"
                                            type="text"
                                            required=true
                                            placeholder="Seu nome"
                                            node_ref=name_ref
                                            class="w-full px-4 py-2 bg-background border border-border rounded-md"
                                        />
                                    </FormField>
                                    <FormField label="Email" for_id="email">
                                        <input
                                            id="email"
                                            name="email"
                                            type="email"
                                            required=true
                                            placeholder="seu@email.com"
                                            node_ref=email_ref
                                            class="w-full px-4 py-2 bg-background border border-border rounded-md"
                                        />
                                    </FormField>
                                </div>
                                <FormField label="Assunto" for_id="subject">
                                    <input
                                        id="subject"
                                        name="subject"
                                        type="text"
                                        required=true
                                        placeholder="Sobre o que você quer conversar?"
                                        node_ref=subject_ref
                                        class="w-full px-4 py-2 bg-background border border-border rounded-md"
                                    />
                                </FormField>
                                <FormField label="Mensagem" for_id="message">
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        required=true
                                        placeholder="Conte-me mais sobre seu projeto..."
                                        node_ref=message_ref
                                        class="w-full px-4 py-2 bg-background border border-border rounded-md resize-none"
                                    ></textarea>
                                </FormField>
                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="w-full py-3 bg-gradient-primary text-white rounded-md font-medium hover-float disabled:opacity-60"
                                >
                                    {move || {
                                        if submitting.get() { "Enviando..." } else { "Enviar Mensagem" }
                                    }}
                                </button>
                            </form>
                        </div>

                        <div class="space-y-8">
                            <div>
                                <h3 class="text-2xl font-bold text-foreground mb-6">"Informações de Contato"</h3>
                                <ul class="space-y-4">
                                    {contact_channels()
                                        .into_iter()
                                        .map(|channel| {
                                            let (target, rel) = if channel.new_tab {
                                                (Some("_blank"), Some("noopener noreferrer"))
                                            } else {
                                                (None, None)
                                            };
                                            view! {
                                                <li>
                                                    <a
                                                        href=channel.href
                                                        target=target
                                                        rel=rel
                                                        class="flex items-center gap-4 p-4 bg-card border border-border rounded-lg hover-float"
                                                    >
                                                        <div>
                                                            <p class="font-medium text-foreground">{channel.title}</p>
                                                            <p class="text-muted-foreground text-sm">{channel.value}</p>
                                                        </div>
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>

                            <div>
                                <h3 class="text-xl font-bold text-foreground mb-4">"Redes Sociais"</h3>
                                <ul class="space-y-3">
                                    {SOCIAL_PROFILES
                                        .into_iter()
                                        .map(|profile| {
                                            view! {
                                                <li>
                                                    <a
                                                        href=profile.url
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="flex items-center justify-between p-3 bg-card border border-border rounded-lg hover:border-primary transition-colors"
                                                    >
                                                        <span class="font-medium text-foreground">{profile.name}</span>
                                                        <span class="text-muted-foreground text-sm">{profile.username}</span>
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>

                            <div class="p-6 bg-gradient-primary rounded-xl text-white">
                                <h4 class="text-lg font-bold mb-2">"Vamos trabalhar juntos!"</h4>
                                <p class="text-white/90 text-sm">
                                    "Respondo todas as mensagens em até 24 horas. Vamos transformar sua ideia em realidade!"
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            {move || {
                toast
                    .get()
                    .map(|t| {
                        let class = if t.is_error {
                            "fixed bottom-6 right-6 z-50 max-w-sm p-4 rounded-lg shadow-card border bg-destructive text-white"
                        } else {
                            "fixed bottom-6 right-6 z-50 max-w-sm p-4 rounded-lg shadow-card border border-border bg-card"
                        };
                        view! {
                            <div class=class role="status">
                                <p class="font-semibold">{t.title}</p>
                                <p class="text-sm opacity-90">{t.description}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn FormField(label: &'static str, for_id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label for=for_id class="block text-sm font-medium text-foreground mb-2">
                {label}
            </label>
            {children()}
        </div>
    }
}
