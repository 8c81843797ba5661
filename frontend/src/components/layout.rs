use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::web::router::{Link, use_router};
use blinkbuy_shared::{AdminPage, AppRoute, Section, SellerPage};
use leptos::prelude::*;

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Admin(AdminPage::Dashboard) | AppRoute::Seller(SellerPage::Dashboard) => {
            view! { <LayoutDashboard attr:class="h-5 w-5" /> }.into_any()
        }
        AppRoute::Admin(AdminPage::Users) | AppRoute::Seller(SellerPage::Customers) => {
            view! { <UsersIcon attr:class="h-5 w-5" /> }.into_any()
        }
        AppRoute::Admin(AdminPage::Products) | AppRoute::Seller(SellerPage::Products) => {
            view! { <Package attr:class="h-5 w-5" /> }.into_any()
        }
        AppRoute::Seller(SellerPage::Orders) => {
            view! { <ShoppingBag attr:class="h-5 w-5" /> }.into_any()
        }
        _ => view! { <MessageSquare attr:class="h-5 w-5" /> }.into_any(),
    }
}

/// Shell of a guarded section: sidebar navigation, page title and logout.
#[component]
pub fn SectionLayout(section: Section, children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let on_logout = move |_| logout(&auth);

    let nav = section
        .pages()
        .iter()
        .map(|&page| {
            let class = Signal::derive(move || {
                if current.get() == page {
                    "active".to_string()
                } else {
                    String::new()
                }
            });
            view! {
                <li>
                    <Link to=page class=class>
                        {nav_icon(page)}
                        {page.title()}
                    </Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200 font-sans">
            <input id="section-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow-md lg:hidden">
                    <label for="section-drawer" class="btn btn-ghost drawer-button">"☰"</label>
                    <span class="text-xl font-bold">"BlinkBuy"</span>
                </div>
                <main class="p-4 md:p-8 space-y-6">
                    <h1 class="text-3xl font-bold text-base-content">
                        {move || format!("{} {}", section.label(), current.get().title())}
                    </h1>
                    {children()}
                </main>
            </div>
            <div class="drawer-side">
                <label for="section-drawer" class="drawer-overlay"></label>
                <aside class="bg-base-100 w-64 min-h-full flex flex-col">
                    <div class="p-6 text-2xl font-bold text-primary">
                        "BlinkBuy "
                        <span class="badge badge-neutral align-middle">{section.label()}</span>
                    </div>
                    <ul class="menu p-4 gap-1 flex-1">{nav}</ul>
                    <div class="p-4">
                        <button on:click=on_logout class="btn btn-outline btn-error w-full gap-2">
                            <LogOut attr:class="h-4 w-4" />
                            "Logout"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
