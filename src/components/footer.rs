use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{CLIENTS, SOCIAL_LINKS};

/// Visitor's local calendar year.
fn copyright_year() -> i32 {
    Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = copyright_year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 5rem 0;
                        border-top: 1px solid var(--border);
                        background: linear-gradient(to top, var(--card-soft), var(--background));
                    }
                    .clients {
                        text-align: center;
                        margin-bottom: 5rem;
                    }
                    .clients-badge {
                        display: inline-block;
                        margin-bottom: 2.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid var(--primary-glow);
                        background: var(--primary-soft);
                        color: var(--primary);
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }
                    .clients h3 {
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        margin: 0 0 1rem;
                    }
                    .clients p {
                        max-width: 28rem;
                        margin: 0 auto 3rem;
                        color: var(--muted-foreground);
                    }
                    .client-grid {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .client-logo {
                        width: 8rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.75rem;
                        border: 1px solid var(--border);
                        background: var(--card);
                        font-family: var(--font-display);
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: var(--muted-foreground);
                        transition: all 0.3s ease;
                    }
                    .client-logo:hover {
                        transform: translateY(-5px) scale(1.05);
                        border-color: var(--primary-glow);
                        color: var(--primary);
                    }
                    .footer-main {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    .footer-brand {
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--foreground);
                        text-decoration: none;
                    }
                    .footer-copy {
                        margin-top: 0.75rem;
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }
                    .footer-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .footer-nav a {
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                        text-decoration: none;
                    }
                    .footer-nav a:hover {
                        color: var(--foreground);
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        color: var(--muted-foreground);
                        text-decoration: none;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .social-link:hover {
                        color: var(--primary);
                    }
                    .footer-cta {
                        margin-top: 3rem;
                        text-align: center;
                    }
                    .footer-cta a {
                        display: inline-flex;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid var(--primary-glow);
                        color: var(--primary);
                        font-weight: 500;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .footer-cta a:hover {
                        background: var(--primary);
                        color: var(--primary-foreground);
                    }
                    @media (max-width: 768px) {
                        .footer-main {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="clients">
                    <span class="clients-badge">{"Confiança de Grandes Marcas"}</span>
                    <h3>
                        {"Clientes "}
                        <span class="gradient-text">{"Atendidos"}</span>
                    </h3>
                    <p>{"Empresas que confiam no meu trabalho para transformar suas visões em realidade."}</p>
                    <div class="client-grid">
                        {
                            CLIENTS.iter().map(|client| html! {
                                <div key={client.name} class="client-logo" title={client.name}>
                                    {client.logo}
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="section-divider"></div>

                <div class="footer-main">
                    <div>
                        <a href="#" class="footer-brand">
                            {"Murilo "}
                            <span class="gradient-text">{"Celestino"}</span>
                        </a>
                        <p class="footer-copy">{format!("© {} Todos os direitos reservados.", year)}</p>
                    </div>

                    <nav class="footer-nav">
                        <a href="#portfolio">{"Portfólio"}</a>
                        <a href="#orcamento">{"Orçamento"}</a>
                    </nav>

                    <div class="social-links">
                        {
                            SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                    class="social-link glass-card"
                                >
                                    {social.icon}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="footer-cta">
                    <a href="#orcamento">{"Solicitar Orçamento"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn copyright_year_follows_local_clock() {
        let before = Local::now().year();
        let year = copyright_year();
        let after = Local::now().year();
        assert!(year == before || year == after);
        // Local and UTC can disagree by at most one year around New Year
        assert!((year - Utc::now().year()).abs() <= 1);
    }
}
