use log::debug;
use yew::prelude::*;

use crate::content::{catalog, filter_by_category, Category, VideoEntry};

pub const EMPTY_CATEGORY_MESSAGE: &str = "Nenhum vídeo nesta categoria ainda.";

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: VideoEntry,
    index: usize,
    hovered: bool,
    on_hover: Callback<Option<String>>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let VideoCardProps { video, index, hovered, on_hover } = props;

    let onmouseenter = {
        let on_hover = on_hover.clone();
        let id = video.id.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id.clone())))
    };
    let onmouseleave = {
        let on_hover = on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <a
            href={video.video_url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("video-card", hovered.then(|| "hovered"))}
            style={format!("animation-delay: {:.1}s;", *index as f64 * 0.1)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="video-thumb">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} loading="lazy" />
                <div class="video-overlay"></div>
                <div class="video-play">
                    <div class="video-play-button">{"▶"}</div>
                </div>
                <div class="video-duration">{&video.duration}</div>
            </div>
            <div class="video-info">
                <h3>
                    {&video.title}
                    <span class="video-external">{"↗"}</span>
                </h3>
            </div>
        </a>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_category = use_state(Category::default);
    let hovered = use_state(|| None::<String>);

    let filtered = filter_by_category(catalog(), *active_category);

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |id: Option<String>| hovered.set(id))
    };

    html! {
        <section id="portfolio" class="portfolio-section">
            <style>
                {r#"
                    .portfolio-section {
                        position: relative;
                        padding: 6rem 0;
                    }
                    .tab-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 3rem;
                    }
                    .tab {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: var(--secondary);
                        color: var(--secondary-foreground);
                        transition: all 0.3s ease;
                    }
                    .tab.active {
                        background: var(--primary);
                        color: var(--primary-foreground);
                        box-shadow: 0 10px 25px var(--primary-glow);
                    }
                    .video-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1.5rem;
                        animation: riseIn 0.4s ease;
                    }
                    @media (max-width: 1024px) {
                        .video-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                    @media (max-width: 640px) {
                        .video-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .video-card {
                        display: block;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: var(--card);
                        border: 1px solid var(--border);
                        color: inherit;
                        text-decoration: none;
                        opacity: 0;
                        animation: riseIn 0.4s ease forwards;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .video-card:hover {
                        border-color: var(--primary-glow);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .video-thumb {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }
                    .video-thumb img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .video-card:hover .video-thumb img {
                        transform: scale(1.1);
                    }
                    .video-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(10, 10, 15, 0.9), rgba(10, 10, 15, 0.2), transparent);
                    }
                    .video-play {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .video-play-button {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding-left: 0.25rem;
                        background: var(--primary);
                        color: white;
                        font-size: 1.5rem;
                        box-shadow: 0 20px 40px var(--primary-glow);
                        transition: transform 0.3s ease;
                    }
                    .video-card.hovered .video-play-button {
                        transform: scale(1.1);
                    }
                    .video-duration {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.375rem;
                        background: rgba(10, 10, 15, 0.8);
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .video-info {
                        padding: 1.25rem;
                    }
                    .video-info h3 {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: 1.125rem;
                        font-weight: 600;
                        transition: color 0.3s ease;
                    }
                    .video-card:hover .video-info h3 {
                        color: var(--primary);
                    }
                    .video-external {
                        font-size: 0.875rem;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .video-card:hover .video-external {
                        opacity: 1;
                    }
                    .empty-state {
                        text-align: center;
                        padding: 5rem 0;
                        color: var(--muted-foreground);
                    }
                "#}
            </style>
            <div class="section-line"></div>

            <div class="container">
                <div class="section-header">
                    <h2>
                        <span>{"Meus "}</span>
                        <span class="gradient-text">{"Trabalhos"}</span>
                    </h2>
                    <p>{"Uma seleção dos projetos mais recentes. Clique para assistir."}</p>
                </div>

                <div class="tab-bar">
                    {
                        Category::ALL.into_iter().map(|category| {
                            let onclick = {
                                let active_category = active_category.clone();
                                Callback::from(move |_: MouseEvent| {
                                    debug!("Portfolio category -> {}", category.slug());
                                    active_category.set(category);
                                })
                            };
                            html! {
                                <button
                                    key={category.slug()}
                                    class={classes!("tab", (*active_category == category).then(|| "active"))}
                                    {onclick}
                                >
                                    {category.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                if filtered.is_empty() {
                    <div class="empty-state">
                        <p>{EMPTY_CATEGORY_MESSAGE}</p>
                    </div>
                } else {
                    <div key={active_category.slug()} class="video-grid">
                        {
                            filtered.iter().enumerate().map(|(index, video)| html! {
                                <VideoCard
                                    key={video.id.clone()}
                                    video={(*video).clone()}
                                    {index}
                                    hovered={hovered.as_deref() == Some(video.id.as_str())}
                                    on_hover={on_hover.clone()}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
        </section>
    }
}
