use yew::prelude::*;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub api_client: ApiClient,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session_label = if props.api_client.session().is_authenticated() {
        "Signed in"
    } else {
        "No session token"
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Finance Tracker"}</h1>
                <div class="header-right">
                    <span class="connection-status">
                        {format!("Connected to {}", props.api_client.base_url())}
                    </span>
                    <span class="session-status">{session_label}</span>
                </div>
            </div>
        </header>
    }
}
