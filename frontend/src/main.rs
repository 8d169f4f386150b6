use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::accounts::AccountPanel;
use components::header::Header;
use components::transactions::TransactionPage;
use hooks::use_reference_data::use_reference_data;
use hooks::use_update_counter::use_update_counter;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_state(ApiClient::new);
    // Bumped when accounts change so every selector reloads
    let reference_version = use_update_counter();
    let reference = use_reference_data(&api_client, reference_version.value);

    use_effect_with((), {
        let base_url = api_client.base_url().to_string();
        move |_| {
            Logger::info_with_component("app", &format!("Using API at {}", base_url));
            || ()
        }
    });

    html! {
        <>
            <Header api_client={(*api_client).clone()} />
            <main class="main">
                <div class="container">
                    <AccountPanel
                        api_client={(*api_client).clone()}
                        on_change={reference_version.bump.clone()}
                    />
                    <TransactionPage api_client={(*api_client).clone()} reference={reference} />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
