use yew::prelude::*;
use shared::ReferenceData;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Load accounts and categories for the selectors; reloads when `version`
/// changes
#[hook]
pub fn use_reference_data(api_client: &ApiClient, version: u32) -> ReferenceData {
    let reference = use_state(ReferenceData::default);

    {
        let api_client = api_client.clone();
        let reference = reference.clone();

        use_effect_with(version, move |_| {
            spawn_local(async move {
                let load = api_client.get_reference_data().await;
                if let Some(e) = &load.account_error {
                    Logger::error_with_component("use-reference-data", &format!("Failed to load accounts: {}", e));
                }
                if let Some(e) = &load.category_error {
                    Logger::error_with_component("use-reference-data", &format!("Failed to load categories: {}", e));
                }
                // Keep the previous lists when nothing loaded at all
                if load.account_error.is_none() || load.category_error.is_none() {
                    reference.set(load.data);
                }
            });

            || ()
        });
    }

    (*reference).clone()
}
