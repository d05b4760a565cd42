use yew::prelude::*;

use crate::components::software_icons::SoftwareIcons;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                        animation: glowPulse 3s ease-in-out infinite;
                    }
                    .hero-orb.primary {
                        top: 25%;
                        left: 25%;
                        width: 500px;
                        height: 500px;
                        background: var(--primary-soft);
                        filter: blur(120px);
                    }
                    .hero-orb.accent {
                        bottom: 25%;
                        right: 25%;
                        width: 400px;
                        height: 400px;
                        background: var(--accent-soft);
                        filter: blur(100px);
                        animation-delay: 1.5s;
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.02;
                        background-image:
                            linear-gradient(rgba(255,255,255,.1) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255,255,255,.1) 1px, transparent 1px);
                        background-size: 100px 100px;
                    }
                    @keyframes glowPulse {
                        0%, 100% { opacity: 0.6; }
                        50% { opacity: 1; }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .hero-tools {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 2rem;
                    }
                    .hero-title {
                        font-family: var(--font-display);
                        font-size: clamp(3rem, 9vw, 6rem);
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        line-height: 1.05;
                        margin: 0 0 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        font-weight: 500;
                        color: var(--muted-foreground);
                        margin-bottom: 1rem;
                    }
                    .hero-description {
                        max-width: 36rem;
                        margin: 0 auto 2.5rem;
                        color: var(--muted-foreground);
                        opacity: 0.8;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .hero-cta.primary {
                        background: var(--primary);
                        color: var(--primary-foreground);
                    }
                    .hero-cta.primary:hover {
                        box-shadow: 0 20px 40px var(--primary-glow);
                    }
                    .hero-cta.secondary {
                        border: 1px solid var(--border);
                        color: var(--foreground);
                    }
                    .hero-cta.secondary:hover {
                        background: var(--secondary);
                        border-color: var(--primary-glow);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--muted-foreground);
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        opacity: 0;
                        animation: fadeIn 0.6s ease 1.2s forwards;
                    }
                    .scroll-mouse {
                        width: 1.25rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 2px solid var(--border);
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        animation: bob 1.5s ease-in-out infinite;
                    }
                    .scroll-mouse span {
                        width: 0.25rem;
                        height: 0.375rem;
                        border-radius: 9999px;
                        background: var(--muted-foreground);
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }
                "#}
            </style>
            <div class="hero-orb primary"></div>
            <div class="hero-orb accent"></div>
            <div class="hero-grid"></div>

            <div class="container hero-content">
                <div class="hero-tools">
                    <SoftwareIcons />
                </div>

                <h1 class="hero-title">
                    <span>{"Murilo"}</span>
                    <br />
                    <span class="gradient-text">{"Celestino"}</span>
                </h1>

                <p class="hero-subtitle">{"Editor de Vídeo Profissional"}</p>

                <p class="hero-description">
                    {"Transformando ideias em histórias visuais impactantes. Especializado em VSLs, Ads e conteúdo para redes sociais."}
                </p>

                <div class="hero-cta-group">
                    <a href="#portfolio" class="hero-cta primary">
                        <span>{"▶"}</span>
                        {"Ver Portfólio"}
                    </a>
                    <a href="#orcamento" class="hero-cta secondary">
                        {"Solicitar Orçamento"}
                    </a>
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"Scroll"}</span>
                <div class="scroll-mouse">
                    <span></span>
                </div>
            </div>
        </section>
    }
}
