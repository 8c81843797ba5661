use crate::components::icons::{MessageSquare, Star};
use crate::components::list_view::{
    FilterSelect, ListView, Notice, SearchBox, SortSelect, StatCard, StatusBadge, Toast, format_rating,
    seeded_page, stars, status_options,
};
use blinkbuy_shared::entity::{DefaultView, Feedback, FeedbackField, FeedbackStats};
use blinkbuy_shared::fixtures;
use blinkbuy_shared::list::EntityId;
use leptos::prelude::*;

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("date-desc", "Date: Newest First"),
    ("date-asc", "Date: Oldest First"),
    ("rating-desc", "Rating: High to Low"),
    ("rating-asc", "Rating: Low to High"),
];

const RATINGS: [&str; 5] = ["5", "4", "3", "2", "1"];

/// Reply being written for one feedback entry
#[derive(Debug, Clone, PartialEq)]
struct ReplyDraft {
    id: EntityId,
    customer: String,
    text: String,
}

#[component]
pub fn CustomerFeedbackPage() -> impl IntoView {
    seeded_page(fixtures::customer_feedback, |rows| view! { <FeedbackCards rows=rows /> })
}

#[component]
fn FeedbackCards(rows: Vec<Feedback>) -> impl IntoView {
    let list = ListView::new(rows, Feedback::default_view());
    let notice = RwSignal::new(None);
    let replying = RwSignal::new(None::<ReplyDraft>);
    let stats = Signal::derive(move || list.with_all(FeedbackStats::of));
    let visible = list.visible();

    let open_reply = move |id: EntityId| {
        if let Some(f) = list.get(id) {
            replying.set(Some(ReplyDraft {
                id,
                customer: f.customer,
                text: f.reply.unwrap_or_default(),
            }));
        }
    };
    let send_reply = move |_| {
        let Some(draft) = replying.get_untracked() else {
            return;
        };
        let mut recorded = false;
        let result = list.update(draft.id, |f| recorded = f.record_reply(&draft.text));
        notice.set(Some(match result {
            Ok(()) if recorded => Notice::success(format!("Reply sent to {}", draft.customer)),
            Ok(()) => Notice::error("Reply cannot be empty"),
            Err(err) => Notice::error(err.to_string()),
        }));
        if recorded {
            replying.set(None);
        }
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard title="Total Reviews" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Average Rating"
                value=Signal::derive(move || format_rating(stats.get().average_rating))
                tone="text-warning"
            />
            <StatCard
                title="Positive"
                value=Signal::derive(move || stats.get().positive.to_string())
                description="4 stars and above"
                tone="text-success"
            />
            <StatCard
                title="Response rate"
                value=Signal::derive(move || format!("{:.0}%", stats.get().response_rate))
                tone="text-info"
            />
        </div>

        <div class="flex flex-col md:flex-row md:items-end gap-4">
            <SearchBox
                value=list.search_term()
                on_input=Callback::new(move |term| list.set_search(term))
                placeholder="Search customer, product or comment"
            />
            <FilterSelect
                label="Rating"
                options=status_options(RATINGS)
                selected=list.filter_option(FeedbackField::Rating)
                on_change=Callback::new(move |option: String| list.set_filter(FeedbackField::Rating, &option))
            />
            <SortSelect
                options=SORT_OPTIONS
                selected=list.sort_key()
                on_change=Callback::new(move |key: String| list.apply_sort_key(&key))
            />
        </div>

        <div class="space-y-4">
            {move || {
                let rows = visible.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-base-content/50">"No feedback matches the filters"</div>
                    }
                    .into_any();
                }
                rows.into_iter()
                    .map(|f| {
                        let id = f.id;
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <div class="flex flex-wrap items-center justify-between gap-2">
                                        <div>
                                            <h3 class="font-semibold">{f.customer.clone()}</h3>
                                            <p class="text-sm text-base-content/60">
                                                {f.product.clone()} " · " {f.date.display_label()}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <span class="text-warning" title=format!("{} of 5", f.rating)>
                                                {stars(f.rating)}
                                            </span>
                                            <StatusBadge label=f.status.label() />
                                        </div>
                                    </div>
                                    <p>{f.comment.clone()}</p>
                                    {f.reply.clone().map(|reply| view! {
                                        <div class="bg-base-200 rounded-lg p-3 text-sm">
                                            <span class="font-semibold">"Your reply: "</span>
                                            {reply}
                                        </div>
                                    })}
                                    <div class="card-actions justify-end">
                                        <button class="btn btn-sm btn-outline gap-1" on:click=move |_| open_reply(id)>
                                            <MessageSquare attr:class="h-4 w-4" />
                                            {if f.responded { "Edit reply" } else { "Reply" }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>

        <div class="modal" class:modal-open=move || replying.with(Option::is_some)>
            <div class="modal-box">
                <h3 class="font-bold text-lg flex items-center gap-2">
                    <Star attr:class="h-5 w-5 text-warning" />
                    {move || replying.with(|r| r.as_ref().map(|r| format!("Reply to {}", r.customer)))}
                </h3>
                <textarea
                    class="textarea textarea-bordered w-full mt-4"
                    rows="4"
                    placeholder="Thank the customer or address their concern"
                    prop:value=move || replying.with(|r| r.as_ref().map(|r| r.text.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        replying.update(|r| {
                            if let Some(r) = r {
                                r.text = text;
                            }
                        });
                    }
                ></textarea>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| replying.set(None)>"Cancel"</button>
                    <button class="btn btn-primary" on:click=send_reply>"Send reply"</button>
                </div>
            </div>
        </div>
    }
}
