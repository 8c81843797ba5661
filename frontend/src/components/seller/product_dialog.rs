//! Create/edit dialog of the seller product page
//!
//! The inputs are kept as raw text in [`ProductFormState`] and only turned
//! into a [`ProductDraft`] on submit, so a half-typed price never fights the
//! input's cursor.

use crate::components::login::FieldHint;
use blinkbuy_shared::entity::ProductDraft;
use blinkbuy_shared::list::EntityId;
use blinkbuy_shared::validation::{FieldError, ValidationErrors, validate_product};
use leptos::prelude::*;

/// Product being edited; `target` is `None` for a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    pub target: Option<EntityId>,
    pub draft: ProductDraft,
}

impl ProductEdit {
    pub fn create() -> Self {
        Self {
            target: None,
            draft: ProductDraft::default(),
        }
    }

    pub fn edit(id: EntityId, draft: ProductDraft) -> Self {
        Self {
            target: Some(id),
            draft,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProductFormState {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub original_price: RwSignal<String>,
    pub stock: RwSignal<String>,
}

fn number_text(value: f64) -> String {
    if value > 0.0 { value.to_string() } else { String::new() }
}

impl ProductFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            original_price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
        }
    }

    pub fn load(&self, draft: &ProductDraft) {
        self.name.set(draft.name.clone());
        self.category.set(draft.category.clone());
        self.price.set(number_text(draft.price));
        self.original_price.set(number_text(draft.original_price));
        self.stock.set(draft.stock.to_string());
    }

    /// Parses and validates the inputs. A blank original price means "no
    /// discount".
    pub fn to_draft(&self) -> Result<ProductDraft, ValidationErrors> {
        parse_draft(
            &self.name.get_untracked(),
            &self.category.get_untracked(),
            &self.price.get_untracked(),
            &self.original_price.get_untracked(),
            &self.stock.get_untracked(),
        )
    }
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_draft(
    name: &str,
    category: &str,
    price: &str,
    original_price: &str,
    stock: &str,
) -> Result<ProductDraft, ValidationErrors> {
    let mut parse_errors = Vec::new();
    let stock = match stock.trim() {
        "" => 0,
        text => text.parse::<u32>().unwrap_or_else(|_| {
            parse_errors.push(FieldError::new("stock", "Stock must be a whole number of 0 or more"));
            0
        }),
    };
    let original_price = match original_price.trim() {
        "" => 0.0,
        text => text.parse::<f64>().unwrap_or_else(|_| {
            parse_errors.push(FieldError::new("original_price", "Original price must be a number"));
            0.0
        }),
    };
    let draft = ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        price: price.trim().parse().unwrap_or(f64::NAN),
        original_price,
        stock,
    };

    let rule_errors = validate_product(&draft).err().unwrap_or_default();
    let errors: Vec<FieldError> = rule_errors.iter().copied().chain(parse_errors).collect();
    if errors.is_empty() {
        Ok(draft)
    } else {
        Err(ValidationErrors::from(errors))
    }
}

#[component]
pub fn ProductDialog(
    editing: RwSignal<Option<ProductEdit>>,
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] on_save: Callback<(Option<EntityId>, ProductDraft)>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = ProductFormState::new();
    let errors = RwSignal::new(ValidationErrors::default());
    let is_edit = move || editing.with(|e| e.as_ref().is_some_and(|e| e.target.is_some()));

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        match editing.get() {
            Some(edit) => {
                form.load(&edit.draft);
                errors.set(ValidationErrors::default());
                if !dialog.open() {
                    if let Err(err) = dialog.show_modal() {
                        log::error!("could not open product dialog: {err:?}");
                    }
                }
            }
            None if dialog.open() => dialog.close(),
            None => {}
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let target = editing.with_untracked(|e| e.as_ref().and_then(|e| e.target));
        match form.to_draft() {
            Ok(draft) => {
                on_save.run((target, draft));
                editing.set(None);
            }
            Err(found) => errors.set(found),
        }
    };

    let text_input = move |id: &'static str, label: &'static str, value: RwSignal<String>, kind: &'static str| {
        view! {
            <div class="form-control">
                <label for=id class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    step=if kind == "number" { "0.01" } else { "" }
                    min=if kind == "number" { "0" } else { "" }
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered w-full"
                />
                <FieldHint errors=errors field=id />
            </div>
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| editing.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || if is_edit() { "Edit Product" } else { "Add New Product" }}
                </h3>

                <form on:submit=on_submit class="space-y-2 mt-4" novalidate>
                    {text_input("name", "Product Name", form.name, "text")}
                    <div class="grid grid-cols-2 gap-4">
                        {text_input("price", "Price", form.price, "number")}
                        {text_input("original_price", "Original Price", form.original_price, "number")}
                    </div>
                    {text_input("stock", "Stock", form.stock, "number")}

                    <div class="form-control">
                        <label for="category" class="label">
                            <span class="label-text">"Category"</span>
                        </label>
                        <select
                            id="category"
                            class="select select-bordered w-full"
                            prop:value=form.category
                            on:change=move |ev| form.category.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            <For
                                each=move || categories.get()
                                key=|c| c.clone()
                                children=move |c| {
                                    let current = c.clone();
                                    view! {
                                        <option value=c.clone() selected=move || form.category.get() == current>
                                            {c.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <FieldHint errors=errors field="category" />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if is_edit() { "Update Product" } else { "Add Product" }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_original_price_means_no_discount() {
        let draft = parse_draft("Desk Lamp", "Home", "25.5", "", "12").unwrap();
        assert_eq!(draft.price, 25.5);
        assert_eq!(draft.original_price, 0.0);
        assert_eq!(draft.stock, 12);
    }

    #[test]
    fn unparsable_numbers_are_reported_per_field() {
        let errors = parse_draft("Desk Lamp", "Home", "abc", "", "-3").unwrap_err();
        assert_eq!(errors.for_field("price"), Some("Price must be greater than 0"));
        assert!(errors.for_field("stock").is_some());
        assert_eq!(errors.for_field("name"), None);
    }

    #[test]
    fn unparsable_original_price_is_reported() {
        let errors = parse_draft("Desk Lamp", "Home", "25", "twenty", "3").unwrap_err();
        assert_eq!(errors.for_field("original_price"), Some("Original price must be a number"));
        assert_eq!(errors.for_field("price"), None);
    }

    #[test]
    fn missing_name_and_category_are_rejected() {
        let errors = parse_draft("  ", "", "10", "", "1").unwrap_err();
        assert!(errors.for_field("name").is_some());
        assert!(errors.for_field("category").is_some());
    }
}
