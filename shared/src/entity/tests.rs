use super::*;
use crate::fixtures;
use crate::list::{EntityCollection, FilterValue, SortDirection, SortField, apply, distinct_values};
use rstest::rstest;

fn ids<E: crate::list::ListEntity>(rows: &[E]) -> Vec<u32> {
    rows.iter().map(|r| r.id()).collect()
}

#[test]
fn searching_jane_finds_one_user() {
    let users = fixtures::users();
    let view = User::default_view().with_search("jane");
    let found = apply(&users, &view);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "jane@example.com");
}

#[test]
fn users_default_to_name_ascending() {
    let users = fixtures::users();
    let found = apply(&users, &User::default_view());
    assert_eq!(ids(&found), vec![4, 3, 2, 1, 5]);
}

#[rstest]
#[case("Active", vec![1, 2, 5])]
#[case("Pending", vec![4])]
#[case("All", vec![1, 2, 3, 4, 5])]
fn user_status_filter(#[case] status: &str, #[case] expected: Vec<u32>) {
    let users = fixtures::users();
    let view = FilterSortDescriptor::new(UserField::JoinDate, SortDirection::Asc)
        .with_filter(UserField::Status, FilterValue::from_option(status));
    let mut found = ids(&apply(&users, &view));
    found.sort_unstable();
    assert_eq!(found, expected);
}

#[test]
fn join_date_sorts_chronologically() {
    let users = fixtures::users();
    let view = FilterSortDescriptor::new(UserField::JoinDate, SortDirection::Desc);
    assert_eq!(ids(&apply(&users, &view)), vec![3, 4, 1, 5, 2]);
}

#[test]
fn product_price_sorts_numerically() {
    let products = fixtures::admin_products();
    let view = FilterSortDescriptor::new(ProductField::Price, SortDirection::Asc);
    // 19 < 89 < 129 < 199 < 699; a text sort would put 129 first
    assert_eq!(ids(&apply(&products, &view)), vec![5, 3, 4, 2, 1]);
}

#[test]
fn product_search_covers_seller_and_category() {
    let products = fixtures::admin_products();
    let by_seller = Product::default_view().with_search("hub");
    assert_eq!(ids(&apply(&products, &by_seller)), vec![2]);
    let by_category = Product::default_view().with_search("BOOKS");
    assert_eq!(ids(&apply(&products, &by_category)), vec![5]);
}

#[test]
fn product_filters_and_together() {
    let products = fixtures::admin_products();
    let view = Product::default_view()
        .with_filter(ProductField::Category, FilterValue::Is("Home".into()))
        .with_filter(ProductField::Status, FilterValue::Is("Active".into()));
    assert!(apply(&products, &view).is_empty());
}

#[test]
fn category_options_start_with_all() {
    let products = fixtures::seller_products();
    assert_eq!(
        distinct_values(&products, ProductField::Category),
        vec!["All", "Electronics", "Fashion", "Home", "Sports"]
    );
}

#[test]
fn seller_sort_key_selects_stock_descending() {
    let products = fixtures::seller_products();
    let mut view = Product::default_view();
    assert!(view.apply_sort_key("stock-desc"));
    assert_eq!(view.sort_field, ProductField::Stock);
    assert_eq!(ids(&apply(&products, &view)), vec![1, 4, 2, 3]);
}

#[test]
fn feedback_rating_filter_matches_numbers() {
    let feedback = fixtures::admin_feedback();
    let view = Feedback::default_view().with_filter(FeedbackField::Rating, FilterValue::Is("4".into()));
    // newest first among the 4-star reviews
    assert_eq!(ids(&apply(&feedback, &view)), vec![5, 1]);
}

#[test]
fn orders_default_to_newest_first() {
    let orders = fixtures::orders();
    assert_eq!(ids(&apply(&orders, &Order::default_view())), vec![3, 2, 1]);
}

#[test]
fn order_search_covers_shipping_address() {
    let orders = fixtures::orders();
    let view = Order::default_view().with_search("tech park");
    assert_eq!(ids(&apply(&orders, &view)), vec![2]);
}

#[test]
fn customers_sort_by_spend() {
    let customers = fixtures::customers();
    let mut view = Customer::default_view();
    assert!(view.apply_sort_key("spent-desc"));
    assert_eq!(ids(&apply(&customers, &view)), vec![3, 1, 2, 4]);
}

#[test]
fn every_field_key_round_trips() {
    fn check<F: SortField>() {
        for field in F::ALL {
            assert_eq!(F::from_key(field.key()), Some(*field));
        }
    }
    check::<UserField>();
    check::<ProductField>();
    check::<FeedbackField>();
    check::<OrderField>();
    check::<CustomerField>();
}

#[test]
fn stats_from_fixtures() {
    assert_eq!(
        UserStats::of(&fixtures::users()),
        UserStats { total: 5, active: 3, pending: 1 }
    );
    assert_eq!(
        ProductStats::of(&fixtures::admin_products()),
        ProductStats { total: 5, active: 3, out_of_stock: 1, categories: 5 }
    );

    let feedback = FeedbackStats::of(&fixtures::customer_feedback());
    assert_eq!(feedback.total, 4);
    assert_eq!(feedback.positive, 3);
    assert!((feedback.average_rating - 4.25).abs() < 1e-9);
    assert!((feedback.response_rate - 50.0).abs() < 1e-9);

    let orders = OrderStats::of(&fixtures::orders());
    assert_eq!((orders.total, orders.pending, orders.shipped), (3, 1, 1));
    assert!((orders.revenue - 1049.96).abs() < 1e-6);

    let customers = CustomerStats::of(&fixtures::customers());
    assert_eq!(customers.orders, 17);
    assert!((customers.revenue - 4589.83).abs() < 1e-6);
}

#[test]
fn empty_stats_do_not_divide_by_zero() {
    assert_eq!(FeedbackStats::of(&[]), FeedbackStats::default());
    assert_eq!(CustomerStats::of(&[]).average_spend, 0.0);
}

#[test]
fn zero_stock_edit_marks_product_out_of_stock() {
    let mut collection = EntityCollection::from_seed(fixtures::seller_products()).unwrap();
    collection
        .update(1, |p| {
            let mut draft = ProductDraft::from_product(p);
            draft.stock = 0;
            p.apply_draft(&draft);
        })
        .unwrap();
    assert_eq!(collection.get(1).unwrap().status, ProductStatus::OutOfStock);

    collection
        .update(3, |p| {
            let mut draft = ProductDraft::from_product(p);
            draft.stock = 12;
            p.apply_draft(&draft);
        })
        .unwrap();
    assert_eq!(collection.get(3).unwrap().status, ProductStatus::Active);
}

#[test]
fn new_product_gets_next_id_and_store() {
    let mut collection = EntityCollection::from_seed(fixtures::seller_products()).unwrap();
    let draft = ProductDraft {
        name: " Desk Lamp ".into(),
        category: "Home".into(),
        price: 35.0,
        original_price: 0.0,
        stock: 7,
    };
    let id = collection.create(|id| draft.into_product(id, fixtures::DEMO_STORE)).unwrap();
    let lamp = collection.get(id).unwrap();
    assert_eq!(id, 5);
    assert_eq!(lamp.name, "Desk Lamp");
    assert_eq!(lamp.original_price, 35.0);
    assert_eq!(lamp.discount_percent(), None);
    assert_eq!(collection.get(1).unwrap().discount_percent(), Some(13));
}

#[test]
fn blank_reply_is_ignored() {
    let mut feedback = fixtures::customer_feedback().remove(0);
    assert!(!feedback.record_reply("   "));
    assert!(!feedback.responded);
    assert!(feedback.record_reply("Thanks for the review!"));
    assert!(feedback.responded);
    assert_eq!(feedback.reply.as_deref(), Some("Thanks for the review!"));
}

#[test]
fn order_status_labels_parse_back() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_label(status.label()), Some(status));
    }
    assert_eq!(OrderStatus::from_label("Lost"), None);
}

#[test]
fn product_status_serializes_with_spaces() {
    let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
    assert_eq!(json, "\"Out of Stock\"");
}
