use yew::prelude::*;
use shared::FeedbackField;

use crate::components::{FeedbackListView, FormField};
use crate::hooks::use_feedback_form::use_feedback_form;
use crate::hooks::use_feedback_list::use_feedback_list;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct FeedbackFormProps {
    pub config: AppConfig,
}

/// The whole feedback page: entry form, success banner and submitted list
#[function_component(FeedbackForm)]
pub fn feedback_form(props: &FeedbackFormProps) -> Html {
    let api_client = ApiClient::from_config(&props.config);

    let list = use_feedback_list(&api_client);
    let form = use_feedback_form(&api_client, &props.config.form, list.actions.refresh.clone());

    let state = &form.state;
    let on_change = form.actions.on_change.clone();

    let onsubmit = {
        let submit = form.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="App">
            <h1>{"Feedback Application"}</h1>

            {if !state.success_message.is_empty() {
                html! { <p class="success-message">{&state.success_message}</p> }
            } else { html! {} }}

            <form class="feedback-form" {onsubmit}>
                <FormField
                    field={FeedbackField::Name}
                    label="Name:"
                    placeholder="Enter your name"
                    value={state.draft.name.clone()}
                    error={state.errors.get(FeedbackField::Name).to_string()}
                    on_change={on_change.clone()}
                />
                <FormField
                    field={FeedbackField::Email}
                    label="Email:"
                    placeholder="Enter your email"
                    input_type="email"
                    value={state.draft.email.clone()}
                    error={state.errors.get(FeedbackField::Email).to_string()}
                    on_change={on_change.clone()}
                />
                <FormField
                    field={FeedbackField::Message}
                    label="Feedback:"
                    placeholder="Enter your feedback"
                    multiline=true
                    value={state.draft.message.clone()}
                    error={state.errors.get(FeedbackField::Message).to_string()}
                    {on_change}
                />

                <button type="submit" disabled={state.submit_disabled}>
                    {"Submit"}
                </button>
            </form>

            <FeedbackListView records={list.state.records.clone()} loading={list.state.loading} />
        </div>
    }
}
