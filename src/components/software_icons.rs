use yew::prelude::*;

use crate::content::SOFTWARE;

#[function_component(SoftwareIcons)]
pub fn software_icons() -> Html {
    html! {
        <div class="software-icons">
            <style>
                {r#"
                    .software-icons {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .software-icon {
                        position: relative;
                        opacity: 0;
                        animation: riseIn 0.5s ease forwards;
                    }
                    .software-badge {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.75rem;
                        border: 1px solid transparent;
                        font-family: var(--font-display);
                        font-weight: 700;
                        transition: all 0.3s ease;
                    }
                    .software-badge:hover {
                        border-color: rgba(255, 255, 255, 0.1);
                        transform: scale(1.1);
                    }
                    .software-tooltip {
                        position: absolute;
                        bottom: -3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.375rem 0.75rem;
                        border-radius: 0.5rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        font-size: 0.75rem;
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                        z-index: 10;
                    }
                    .software-icon:hover .software-tooltip {
                        opacity: 1;
                    }
                "#}
            </style>
            {
                SOFTWARE.iter().enumerate().map(|(index, tool)| {
                    let delay = format!("animation-delay: {:.1}s;", 0.3 + index as f64 * 0.1);
                    html! {
                        <div key={tool.name} class="software-icon" style={delay}>
                            <div
                                class="software-badge"
                                style={format!("background-color: {}; color: {};", tool.bg_color, tool.color)}
                            >
                                {tool.abbr}
                            </div>
                            <div class="software-tooltip">{tool.name}</div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
