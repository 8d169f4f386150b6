use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{FormController, FormDraft, SubmitOutcome};
use crate::services::logging::Logger;

/// Store typed text into one field of the form held by `form`
pub fn input_callback<D>(form: &UseStateHandle<FormController<D>>, field: &'static str) -> Callback<InputEvent>
where
    D: FormDraft + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        next.set_field(field, input.value());
        form.set(next);
    })
}

/// Store the chosen option of a select into one field
pub fn select_callback<D>(form: &UseStateHandle<FormController<D>>, field: &'static str) -> Callback<Event>
where
    D: FormDraft + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        next.set_field(field, select.value());
        form.set(next);
    })
}

/// Validate on submit; a valid record goes to `on_submit` and the form is
/// cleared, an invalid one only reveals its messages
pub fn submit_callback<D>(
    form: &UseStateHandle<FormController<D>>,
    on_submit: Callback<D::Output>,
    component: &'static str,
) -> Callback<SubmitEvent>
where
    D: FormDraft + 'static,
    D::Output: 'static,
{
    let form = form.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();

        let mut next = (*form).clone();
        if let SubmitOutcome::Blocked(errors) = next.submit(|data| on_submit.emit(data)) {
            Logger::debug_with_component(component, &format!("Submission blocked: {}", errors));
        }
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
            <FieldError error={props.error.clone()} />
        </div>
    }
}

/// One `<option>` of a select field
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    /// Label of the empty leading option
    pub placeholder: AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub error: Option<String>,
    pub onchange: Callback<Event>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <select id={props.id.clone()} name={props.id.clone()} onchange={props.onchange.clone()}>
                <option value="" selected={props.value.is_empty()}>{props.placeholder.clone()}</option>
                {for props.options.iter().map(|option| {
                    html! {
                        <option value={option.value.clone()} selected={option.value == props.value}>
                            {option.label.clone()}
                        </option>
                    }
                })}
            </select>
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    if let Some(error) = props.error.as_ref() {
        html! {
            <div class="form-message error">
                {error}
            </div>
        }
    } else {
        html! {}
    }
}
