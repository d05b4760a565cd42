use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-family: var(--font-display);
                        font-size: 4rem;
                        margin: 0;
                    }
                    .not-found p {
                        color: var(--muted-foreground);
                        font-size: 1.25rem;
                    }
                    .not-found .back-home {
                        color: var(--primary);
                        text-decoration: underline;
                    }
                "#}
            </style>
            <h1 class="gradient-text">{"404"}</h1>
            <p>{"Página não encontrada"}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Voltar para o início"}
            </Link<Route>>
        </div>
    }
}
