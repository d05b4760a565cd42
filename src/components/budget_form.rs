use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::toast::{Notice, Toast};
use crate::config;
use crate::handoff;
use crate::lead::{LeadForm, ProjectType, SubmitRefused, Submission};

/// Timer handle for the simulated send, plus whether its callback already ran.
struct PendingSend<T> {
    _handle: T,
    fired: Rc<Cell<bool>>,
}

impl<T> PendingSend<T> {
    /// Wraps the handle built by `arm`, which receives the flag its
    /// callback must raise when it runs.
    fn arm(arm: impl FnOnce(Rc<Cell<bool>>) -> T) -> Self {
        let fired = Rc::new(Cell::new(false));
        let handle = arm(fired.clone());
        PendingSend { _handle: handle, fired }
    }

    /// Drops the handle; true when the callback had not run yet.
    fn cancel(self) -> bool {
        !self.fired.get()
    }
}

#[function_component(BudgetForm)]
pub fn budget_form() -> Html {
    let form = use_state(LeadForm::default);
    let submission = use_state(Submission::default);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u64);
    let pending = use_mut_ref(|| None::<PendingSend<Timeout>>);
    let select_ref = use_node_ref();

    // A send still waiting on its delay must not fire into an unmounted form
    {
        let pending = pending.clone();
        use_unmount(move || {
            if let Some(send) = pending.borrow_mut().take() {
                if send.cancel() {
                    info!("Budget form unmounted, dropping pending submission");
                }
            }
        });
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_project_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(LeadForm {
                project_type: ProjectType::from_value(&select.value()),
                ..(*form).clone()
            });
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(LeadForm { description: input.value(), ..(*form).clone() });
        })
    };

    let on_reference_link = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm { reference_link: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        let pending = pending.clone();
        let select_ref = select_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let started = match submission.begin(&form) {
                Ok(started) => started,
                Err(SubmitRefused::InFlight) => {
                    debug!("Ignoring submit while a budget request is pending");
                    return;
                }
                Err(e) => {
                    warn!("Budget form rejected: {}", e);
                    return;
                }
            };

            info!("Preparing budget request for {:?}", form.project_type);
            submission.set(started.clone());

            let form = form.clone();
            let submission = submission.clone();
            let notice = notice.clone();
            let notice_seq = notice_seq.clone();
            let select_ref = select_ref.clone();
            let send = PendingSend::arm(move |fired| {
                Timeout::new(config::SUBMIT_DELAY_MS, move || {
                    fired.set(true);
                    let Some(done) = started.finish(&config::whatsapp_number()) else {
                        return;
                    };

                    if let Err(e) = handoff::open_in_new_tab(&done.url) {
                        warn!("WhatsApp handoff failed: {}", e);
                    }

                    let seq = {
                        let mut seq = notice_seq.borrow_mut();
                        *seq += 1;
                        *seq
                    };
                    notice.set(Some(Notice::handoff_prepared(seq)));
                    form.set(done.form);
                    // The placeholder option is not re-selected by attributes alone
                    // once the user has picked something
                    if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                        select.set_value("");
                    }
                    submission.set(done.submission);
                })
            });
            *pending.borrow_mut() = Some(send);
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let is_submitting = submission.is_submitting();
    let selected_type = form.project_type.map(ProjectType::value).unwrap_or_default();

    html! {
        <section id="orcamento" class="budget-section">
            <style>
                {r#"
                    .budget-section {
                        position: relative;
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, var(--background), var(--card-soft), var(--background));
                    }
                    .budget-inner {
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .budget-form {
                        padding: 2rem;
                        border-radius: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        animation: riseIn 0.6s ease 0.2s both;
                    }
                    .form-field label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .form-optional {
                        margin-left: 0.5rem;
                        font-weight: 400;
                        color: var(--muted-foreground);
                    }
                    .form-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1.25rem;
                        border-radius: 0.75rem;
                        background: var(--secondary);
                        border: 1px solid var(--border);
                        color: var(--foreground);
                        font: inherit;
                        transition: all 0.3s ease;
                    }
                    .form-input::placeholder {
                        color: var(--muted-foreground);
                    }
                    .form-input:focus {
                        outline: none;
                        border-color: var(--primary);
                        box-shadow: 0 0 0 2px var(--primary-glow);
                    }
                    select.form-input {
                        cursor: pointer;
                    }
                    textarea.form-input {
                        resize: none;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font-size: 1.125rem;
                        font-weight: 600;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        cursor: pointer;
                        box-shadow: 0 10px 25px var(--primary-glow);
                        transition: all 0.3s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        transform: scale(1.02);
                    }
                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: var(--primary-foreground);
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .trust-indicators {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        padding-top: 1rem;
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }
                    .trust-indicators span::before {
                        content: '✓ ';
                        color: var(--primary);
                    }
                "#}
            </style>
            <div class="section-line"></div>

            <div class="container">
                <div class="budget-inner">
                    <div class="section-header">
                        <h2>
                            <span>{"Solicite um "}</span>
                            <span class="gradient-text">{"Orçamento"}</span>
                        </h2>
                        <p>{"Conte-me sobre seu projeto e retornarei em até 24 horas."}</p>
                    </div>

                    <form class="budget-form glass-card" {onsubmit}>
                        <div class="form-field">
                            <label for="name">{"Nome completo"}</label>
                            <input
                                type="text"
                                id="name"
                                class="form-input"
                                required=true
                                placeholder="Seu nome"
                                value={form.name.clone()}
                                oninput={on_name}
                            />
                        </div>

                        <div class="form-field">
                            <label for="email">{"E-mail"}</label>
                            <input
                                type="email"
                                id="email"
                                class="form-input"
                                required=true
                                placeholder="seu@email.com"
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </div>

                        <div class="form-field">
                            <label for="projectType">{"Tipo de projeto"}</label>
                            <select
                                id="projectType"
                                class="form-input"
                                required=true
                                ref={select_ref}
                                onchange={on_project_type}
                            >
                                <option value="" disabled=true selected={selected_type.is_empty()}>
                                    {"Selecione o tipo de projeto"}
                                </option>
                                {
                                    ProjectType::ALL.into_iter().map(|project_type| html! {
                                        <option
                                            key={project_type.value()}
                                            value={project_type.value()}
                                            selected={selected_type == project_type.value()}
                                        >
                                            {project_type.label()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>

                        <div class="form-field">
                            <label for="description">{"Descrição do projeto"}</label>
                            <textarea
                                id="description"
                                class="form-input"
                                required=true
                                rows="5"
                                placeholder="Descreva seu projeto, objetivos, público-alvo e qualquer informação relevante..."
                                value={form.description.clone()}
                                oninput={on_description}
                            />
                        </div>

                        <div class="form-field">
                            <label for="referenceLink">
                                {"Link de referência / briefing"}
                                <span class="form-optional">{"(opcional)"}</span>
                            </label>
                            <input
                                type="url"
                                id="referenceLink"
                                class="form-input"
                                placeholder="https://..."
                                value={form.reference_link.clone()}
                                oninput={on_reference_link}
                            />
                        </div>

                        <button type="submit" class="submit-button" disabled={is_submitting}>
                            if is_submitting {
                                <>
                                    <div class="spinner"></div>
                                    {"Enviando..."}
                                </>
                            } else {
                                <>
                                    <span>{"➤"}</span>
                                    {"Enviar Orçamento"}
                                </>
                            }
                        </button>

                        <div class="trust-indicators">
                            <span>{"Resposta em 24h"}</span>
                            <span>{"Orçamento gratuito"}</span>
                        </div>
                    </form>
                </div>
            </div>

            <Toast notice={(*notice).clone()} {on_dismiss} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_before_firing_reports_pending() {
        let send = PendingSend::arm(|_fired| ());
        assert!(send.cancel());
    }

    #[test]
    fn cancel_after_firing_reports_nothing_pending() {
        let mut raise = None;
        let send = PendingSend::arm(|fired| raise = Some(fired));
        raise.expect("arm hands out the flag").set(true);
        assert!(!send.cancel());
    }
}
