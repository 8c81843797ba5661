use crate::components::icons::Trash2;
use crate::components::list_view::{
    EmptyRow, FilterSelect, ListView, Notice, SearchBox, StatCard, StatusBadge, Toast, format_rating,
    seeded_page, stars, status_options,
};
use blinkbuy_shared::entity::{DefaultView, Feedback, FeedbackField, FeedbackStats, FeedbackStatus};
use blinkbuy_shared::fixtures;
use blinkbuy_shared::list::EntityId;
use leptos::prelude::*;

/// Moderation queue of product reviews
#[component]
pub fn FeedbackPage() -> impl IntoView {
    seeded_page(fixtures::admin_feedback, |rows| view! { <FeedbackTable rows=rows /> })
}

#[component]
fn FeedbackTable(rows: Vec<Feedback>) -> impl IntoView {
    let list = ListView::new(rows, Feedback::default_view());
    let notice = RwSignal::new(None);
    let stats = Signal::derive(move || list.with_all(FeedbackStats::of));
    let visible = list.visible();

    let set_status = move |id: EntityId, status: FeedbackStatus| {
        let result = list.update(id, |f| f.status = status);
        notice.set(Some(match result {
            Ok(()) => Notice::success(format!("Feedback marked {}", status.label())),
            Err(err) => Notice::error(err.to_string()),
        }));
    };
    let delete = move |id: EntityId| {
        let result = list.remove(id);
        notice.set(Some(match result {
            Ok(f) => Notice::success(format!("Removed feedback from {}", f.customer)),
            Err(err) => Notice::error(err.to_string()),
        }));
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard title="Total Feedback" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Pending Review"
                value=Signal::derive(move || stats.get().pending.to_string())
                tone="text-warning"
            />
            <StatCard
                title="Average Rating"
                value=Signal::derive(move || format_rating(stats.get().average_rating))
                tone="text-success"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4">
                    <SearchBox
                        value=list.search_term()
                        on_input=Callback::new(move |term| list.set_search(term))
                        placeholder="Search customer, product or comment"
                    />
                    <FilterSelect
                        label="Status"
                        options=status_options(FeedbackStatus::ALL.map(|s| s.label()))
                        selected=list.filter_option(FeedbackField::Status)
                        on_change=Callback::new(move |option: String| list.set_filter(FeedbackField::Status, &option))
                    />
                </div>

                <div class="overflow-x-auto mt-4">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                {list.header(FeedbackField::Customer)}
                                {list.header(FeedbackField::Product)}
                                {list.header(FeedbackField::Rating)}
                                {list.header(FeedbackField::Comment)}
                                {list.header(FeedbackField::Date)}
                                {list.header(FeedbackField::Status)}
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=7 message="No feedback found" /> }.into_any();
                                }
                                rows.into_iter()
                                    .map(|f| {
                                        let id = f.id;
                                        let status = f.status;
                                        view! {
                                            <tr class="hover">
                                                <td class="font-medium">{f.customer}</td>
                                                <td>{f.product}</td>
                                                <td class="text-warning whitespace-nowrap">{stars(f.rating)}</td>
                                                <td class="max-w-xs truncate" title=f.comment.clone()>{f.comment.clone()}</td>
                                                <td>{f.date.display_label()}</td>
                                                <td><StatusBadge label=status.label() /></td>
                                                <td class="flex gap-1">
                                                    <Show when=move || status == FeedbackStatus::Pending>
                                                        <button
                                                            class="btn btn-xs btn-info"
                                                            on:click=move |_| set_status(id, FeedbackStatus::Reviewed)
                                                        >
                                                            "Review"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || status != FeedbackStatus::Resolved>
                                                        <button
                                                            class="btn btn-xs btn-success"
                                                            on:click=move |_| set_status(id, FeedbackStatus::Resolved)
                                                        >
                                                            "Resolve"
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        title="Delete feedback"
                                                        on:click=move |_| delete(id)
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
