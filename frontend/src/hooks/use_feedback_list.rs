use yew::prelude::*;
use shared::{FeedbackApi, FeedbackList, FeedbackRecord};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct FeedbackListState {
    pub records: Vec<FeedbackRecord>,
    pub loading: bool,
}

pub struct UseFeedbackListResult {
    pub state: FeedbackListState,
    pub actions: UseFeedbackListActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFeedbackListActions {
    pub refresh: Callback<()>,
}

/// Hook owning the submitted-feedback list. Fetches once on mount; call
/// `actions.refresh` to fetch again. Overlapping fetches are allowed and the
/// most recently started one decides what is shown.
#[hook]
pub fn use_feedback_list(api_client: &ApiClient) -> UseFeedbackListResult {
    let list = use_mut_ref(FeedbackList::new);
    let redraw = use_force_update();

    let refresh = {
        let api_client = api_client.clone();
        let list = list.clone();
        let redraw = redraw.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let list = list.clone();
            let redraw = redraw.clone();

            let ticket = list.borrow_mut().begin_fetch();
            redraw.force_update();

            spawn_local(async move {
                let result = api_client.list_feedback().await;
                if list.borrow_mut().complete(ticket, result) {
                    redraw.force_update();
                }
            });
        })
    };

    // Load on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let state = {
        let list = list.borrow();
        FeedbackListState {
            records: list.records().to_vec(),
            loading: list.is_loading(),
        }
    };

    UseFeedbackListResult {
        state,
        actions: UseFeedbackListActions { refresh },
    }
}
