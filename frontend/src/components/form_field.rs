use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::FeedbackField;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: FeedbackField,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    /// Render a textarea instead of an input
    #[prop_or(false)]
    pub multiline: bool,
    pub value: String,
    pub error: String,

    pub on_change: Callback<(FeedbackField, String)>,
}

/// Labelled input with its inline validation error
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let field = props.field;
    let id = format!("feedback-{}", field.as_str());

    let oninput = {
        let on_change = props.on_change.clone();
        let multiline = props.multiline;
        Callback::from(move |e: InputEvent| {
            let value = if multiline {
                e.target_unchecked_into::<HtmlTextAreaElement>().value()
            } else {
                e.target_unchecked_into::<HtmlInputElement>().value()
            };
            on_change.emit((field, value));
        })
    };

    html! {
        <div class="form-group">
            <label for={id.clone()}>{props.label.to_string()}</label>
            {if props.multiline {
                html! {
                    <textarea
                        id={id}
                        name={field.as_str()}
                        placeholder={props.placeholder.clone()}
                        value={props.value.clone()}
                        {oninput}
                    />
                }
            } else {
                html! {
                    <input
                        id={id}
                        type={props.input_type.clone()}
                        name={field.as_str()}
                        placeholder={props.placeholder.clone()}
                        value={props.value.clone()}
                        {oninput}
                    />
                }
            }}
            {if !props.error.is_empty() {
                html! { <p class="error-text">{&props.error}</p> }
            } else { html! {} }}
        </div>
    }
}
