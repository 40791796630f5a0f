mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::forms::SubmitAssignmentForm;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="studymate">
            <header class="app-header">
                <h1>{"📚 StudyMate"}</h1>
            </header>
            <SubmitAssignmentForm />
        </main>
    }
}

fn main() {
    Logger::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
