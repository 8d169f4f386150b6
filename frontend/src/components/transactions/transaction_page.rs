use yew::prelude::*;
use shared::{CreateTransactionRequest, ExpenseFormData, ReferenceData};
use wasm_bindgen_futures::spawn_local;
use crate::components::forms::{ExpenseForm, TransactionForm};
use crate::hooks::use_transactions::use_transactions;
use crate::hooks::use_update_counter::use_update_counter;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use super::transaction_table::TransactionTable;

#[derive(Properties, PartialEq)]
pub struct TransactionPageProps {
    pub api_client: ApiClient,
    pub reference: ReferenceData,
}

/// Transaction forms plus the table they refresh
#[function_component(TransactionPage)]
pub fn transaction_page(props: &TransactionPageProps) -> Html {
    let update = use_update_counter();
    let transactions = use_transactions(&props.api_client, update.value);

    let record = {
        let api_client = props.api_client.clone();
        let bump = update.bump.clone();

        Callback::from(move |request: CreateTransactionRequest| {
            let api_client = api_client.clone();
            let bump = bump.clone();

            spawn_local(async move {
                match api_client.create_transaction(&request).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "transaction-page",
                            &format!("Recorded {} of {}", request.transaction_type, request.amount),
                        );
                        bump.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transaction-page",
                            &format!("Failed to record transaction: {}", e),
                        );
                    }
                }
            });
        })
    };

    let on_expense = {
        let reference = props.reference.clone();
        let record = record.clone();

        Callback::from(move |data: ExpenseFormData| match reference.resolve_expense(&data) {
            Ok(request) => record.emit(request),
            Err(e) => Logger::warn_with_component("transaction-page", &e.to_string()),
        })
    };

    html! {
        <div class="transaction-page">
            <div class="forms">
                <TransactionForm reference={props.reference.clone()} on_submit={record} />
                <ExpenseForm reference={props.reference.clone()} on_submit={on_expense} />
            </div>
            <TransactionTable
                transactions={transactions.transactions}
                loading={transactions.loading}
                reference={props.reference.clone()}
            />
        </div>
    }
}
