use yew::prelude::*;
use gloo::timers::future::TimeoutFuture;
use shared::{
    ErrorMap, FeedbackApi, FeedbackDraft, FeedbackField, FeedbackForm, FeedbackFormConfig,
    SubmissionController, SubmissionOutcome,
};
use wasm_bindgen_futures::spawn_local;
use crate::services::alerts::show_alert;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct FeedbackFormState {
    pub draft: FeedbackDraft,
    pub errors: ErrorMap,
    pub submit_disabled: bool,
    pub success_message: String,
}

pub struct UseFeedbackFormResult {
    pub state: FeedbackFormState,
    pub actions: UseFeedbackFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFeedbackFormActions {
    pub on_change: Callback<(FeedbackField, String)>,
    pub submit: Callback<()>,
}

/// Hook for the feedback draft, its validation and the submit workflow.
///
/// `on_submitted` fires after the API accepts a submission.
#[hook]
pub fn use_feedback_form(
    api_client: &ApiClient,
    config: &FeedbackFormConfig,
    on_submitted: Callback<()>,
) -> UseFeedbackFormResult {
    let form = use_mut_ref(FeedbackForm::new);
    let controller = {
        let config = config.clone();
        use_mut_ref(move || SubmissionController::new(config))
    };
    let redraw = use_force_update();

    let on_change = {
        let form = form.clone();
        let redraw = redraw.clone();

        use_callback((), move |(field, value): (FeedbackField, String), _| {
            form.borrow_mut().change(field, value);
            redraw.force_update();
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let form = form.clone();
        let controller = controller.clone();
        let redraw = redraw.clone();

        use_callback(on_submitted, move |_, on_submitted| {
            let draft = {
                let mut form = form.borrow_mut();
                controller.borrow_mut().begin(&mut form)
            };
            redraw.force_update();

            // Invalid: the error map now says why
            let Some(draft) = draft else {
                return;
            };

            let api_client = api_client.clone();
            let form = form.clone();
            let controller = controller.clone();
            let redraw = redraw.clone();
            let on_submitted = on_submitted.clone();

            spawn_local(async move {
                let result = api_client.submit_feedback(&draft).await;
                let outcome = {
                    let mut form = form.borrow_mut();
                    controller.borrow_mut().finish(&mut form, result)
                };
                redraw.force_update();

                match outcome {
                    SubmissionOutcome::Succeeded { dismiss_token } => {
                        on_submitted.emit(());

                        let display_ms = controller.borrow().config().success_message_duration_ms;
                        spawn_local(async move {
                            TimeoutFuture::new(display_ms).await;
                            if controller.borrow_mut().dismiss_success(dismiss_token) {
                                redraw.force_update();
                            }
                        });
                    }
                    SubmissionOutcome::Failed { alert, .. } => show_alert(&alert),
                    SubmissionOutcome::Invalid => {}
                }
            });
        })
    };

    let state = {
        let form = form.borrow();
        FeedbackFormState {
            draft: form.draft().clone(),
            errors: form.errors().clone(),
            submit_disabled: form.is_submit_disabled(),
            success_message: controller.borrow().success_message().to_string(),
        }
    };

    UseFeedbackFormResult {
        state,
        actions: UseFeedbackFormActions { on_change, submit },
    }
}
