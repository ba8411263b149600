use yew::prelude::*;
use shared::FeedbackRecord;

#[derive(Properties, PartialEq)]
pub struct FeedbackListViewProps {
    pub records: Vec<FeedbackRecord>,
    pub loading: bool,
}

#[function_component(FeedbackListView)]
pub fn feedback_list_view(props: &FeedbackListViewProps) -> Html {
    html! {
        <section class="feedback-list-section">
            <h2>{"Submitted Feedback"}</h2>

            {if props.loading {
                html! { <p class="loading">{"Loading feedback..."}</p> }
            } else {
                html! {
                    <ul class="feedback-list">
                        {for props.records.iter().map(|record| {
                            html! {
                                <li class="feedback-item">
                                    <p><strong>{&record.name}</strong>{" ("}<em>{&record.email}</em>{")"}</p>
                                    <p>{&record.message}</p>
                                    <p class="timestamp">
                                        <small>{record.display_timestamp()}</small>
                                    </p>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
