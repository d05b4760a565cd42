use yew::prelude::*;

use crate::components::{
    budget_form::BudgetForm,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    portfolio::Portfolio,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <Portfolio />
                <BudgetForm />
            </main>
            <Footer />
        </div>
    }
}
