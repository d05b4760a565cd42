use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

/// `seq` tells apart two notices with the same text, so showing the same
/// message again restarts the dismiss timer.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u64,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn handoff_prepared(seq: u64) -> Self {
        Notice {
            seq,
            title: "Mensagem preparada!".to_string(),
            description: "Você será redirecionado para o WhatsApp.".to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Bottom-right confirmation popup. Dismisses itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(())));
                // Dropping the handle cancels a pending dismiss
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast glass-card" role="status" {onclick}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 100;
                        max-width: 22rem;
                        padding: 1rem 1.25rem;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        animation: riseIn 0.3s ease;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }
                "#}
            </style>
            <div class="toast-title">{&notice.title}</div>
            <div class="toast-description">{&notice.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_notice_is_a_new_value() {
        let first = Notice::handoff_prepared(1);
        let second = Notice::handoff_prepared(2);
        assert_eq!(first.title, second.title);
        assert_eq!(first.description, second.description);
        assert_ne!(Some(first), Some(second));
    }
}
