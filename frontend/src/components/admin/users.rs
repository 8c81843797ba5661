use crate::components::icons::Trash2;
use crate::components::list_view::{
    EmptyRow, FilterSelect, ListView, Notice, SearchBox, StatCard, StatusBadge, Toast, seeded_page,
    status_options,
};
use blinkbuy_shared::entity::{DefaultView, User, UserField, UserStats, UserStatus};
use blinkbuy_shared::fixtures;
use blinkbuy_shared::list::EntityId;
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    seeded_page(fixtures::users, |rows| view! { <UsersTable rows=rows /> })
}

#[component]
fn UsersTable(rows: Vec<User>) -> impl IntoView {
    let list = ListView::new(rows, User::default_view());
    let notice = RwSignal::new(None);
    let stats = Signal::derive(move || list.with_all(UserStats::of));
    let visible = list.visible();

    let delete = move |id: EntityId| {
        let result = list.remove(id);
        notice.set(Some(match result {
            Ok(user) => Notice::success(format!("Removed {}", user.name)),
            Err(err) => Notice::error(err.to_string()),
        }));
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard title="Total Users" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Active"
                value=Signal::derive(move || stats.get().active.to_string())
                tone="text-success"
            />
            <StatCard
                title="Pending approval"
                value=Signal::derive(move || stats.get().pending.to_string())
                tone="text-warning"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4">
                    <SearchBox
                        value=list.search_term()
                        on_input=Callback::new(move |term| list.set_search(term))
                        placeholder="Search by name or email"
                    />
                    <FilterSelect
                        label="Role"
                        options=list.filter_options(UserField::Role)
                        selected=list.filter_option(UserField::Role)
                        on_change=Callback::new(move |option: String| list.set_filter(UserField::Role, &option))
                    />
                    <FilterSelect
                        label="Status"
                        options=status_options(UserStatus::ALL.map(|s| s.label()))
                        selected=list.filter_option(UserField::Status)
                        on_change=Callback::new(move |option: String| list.set_filter(UserField::Status, &option))
                    />
                </div>

                <div class="overflow-x-auto mt-4">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                {list.header(UserField::Name)}
                                {list.header(UserField::Email)}
                                {list.header(UserField::Role)}
                                {list.header(UserField::Status)}
                                {list.header(UserField::JoinDate)}
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=6 message="No users match the current filters" /> }
                                        .into_any();
                                }
                                rows.into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        view! {
                                            <tr class="hover">
                                                <td class="font-medium">{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>{user.role}</td>
                                                <td><StatusBadge label=user.status.label() /></td>
                                                <td>{user.join_date.display_label()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-sm text-error"
                                                        title="Delete user"
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
                <p class="text-sm text-base-content/60">
                    {move || format!("Showing {} of {} users", visible.with(Vec::len), list.total().get())}
                </p>
            </div>
        </div>
    }
}
