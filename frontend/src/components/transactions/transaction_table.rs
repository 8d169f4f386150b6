use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::{ReferenceData, Transaction, TransactionTableService, TransactionType, TypeFilter};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub reference: ReferenceData,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let filter = use_state(TypeFilter::default);
    let service = TransactionTableService::new();
    let view = service.build_view(&props.transactions, *filter);

    let on_type_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(TypeFilter::from_select_value(&select.value()));
        })
    };

    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>

            {if props.loading && props.transactions.is_empty() {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>
                                        <select class="table-filter" onchange={on_type_change}>
                                            <option value="type" selected={*filter == TypeFilter::All}>{"type"}</option>
                                            {for TransactionType::ALL.iter().map(|transaction_type| html! {
                                                <option
                                                    value={transaction_type.as_str()}
                                                    selected={*filter == TypeFilter::Only(*transaction_type)}
                                                >
                                                    {transaction_type.as_str()}
                                                </option>
                                            })}
                                        </select>
                                    </th>
                                    <th>{"Amount"}</th>
                                    // Account and category selectors are display-only
                                    <th>
                                        <select class="table-filter">
                                            <option value="">{"account"}</option>
                                            {for props.reference.accounts.iter().map(|account| html! {
                                                <option value={account.id.clone()}>{&account.name}</option>
                                            })}
                                        </select>
                                    </th>
                                    <th>
                                        <select class="table-filter">
                                            <option value="">{"category"}</option>
                                            {for props.reference.categories().into_iter().map(|category| html! {
                                                <option value={category.id}>{category.name}</option>
                                            })}
                                        </select>
                                    </th>
                                    <th>{"note"}</th>
                                    <th>{"Des"}</th>
                                    <th>{"Edit"}</th>
                                    <th>{"Delete"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for view.rows.iter().map(|row| {
                                    let amount_class = match row.transaction_type {
                                        TransactionType::Income => "amount positive",
                                        TransactionType::Expense => "amount negative",
                                    };

                                    html! {
                                        <tr key={row.id.clone()}>
                                            <td class="date">{&row.date}</td>
                                            <td class="type">{row.transaction_type.as_str()}</td>
                                            <td class={amount_class}>{&row.formatted_amount}</td>
                                            <td class="account">{&row.account_name}</td>
                                            <td class="category">{&row.category_name}</td>
                                            <td class="note">{&row.note}</td>
                                            <td class="description">{&row.description}</td>
                                            <td><button type="button" class="btn btn-small">{"Edit"}</button></td>
                                            <td><button type="button" class="btn btn-small btn-danger">{"Delete"}</button></td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="2">{"Total"}</td>
                                    <td class="amount total">
                                        {format!("{}{}", service.currency_symbol(), view.formatted_total)}
                                    </td>
                                    <td colspan="6"></td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
