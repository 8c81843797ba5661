//! Seed rows for the table pages
//!
//! There is no backend for these collections; each page seeds its own
//! [`EntityCollection`](crate::list::EntityCollection) from here on mount.

use crate::date::CalendarDate;
use crate::entity::{
    Customer, Feedback, FeedbackStatus, Order, OrderItem, OrderStatus, Product, ProductStatus,
    User, UserStatus,
};

/// Store shown on the seller pages
pub const DEMO_STORE: &str = "TechTrendz";

pub fn users() -> Vec<User> {
    let user = |id, name: &str, email: &str, role: &str, status, join_date| User {
        id,
        name: name.into(),
        email: email.into(),
        role: role.into(),
        status,
        join_date,
    };
    vec![
        user(1, "John Doe", "john@example.com", "Customer", UserStatus::Active, CalendarDate::ymd(2024, 1, 15)),
        user(2, "Jane Smith", "jane@example.com", "Seller", UserStatus::Active, CalendarDate::ymd(2023, 11, 20)),
        user(3, "Bob Johnson", "bob@example.com", "Customer", UserStatus::Inactive, CalendarDate::ymd(2024, 3, 10)),
        user(4, "Alice Brown", "alice@example.com", "Seller", UserStatus::Pending, CalendarDate::ymd(2024, 2, 28)),
        user(5, "Mike Wilson", "mike@example.com", "Customer", UserStatus::Active, CalendarDate::ymd(2023, 12, 5)),
    ]
}

/// Catalogue across all sellers, as moderated by admins.
pub fn admin_products() -> Vec<Product> {
    let product = |id, name: &str, category: &str, price: f64, stock, seller: &str, status| Product {
        id,
        name: name.into(),
        category: category.into(),
        price,
        original_price: price,
        stock,
        seller: seller.into(),
        status,
        rating: 0.0,
    };
    vec![
        product(1, "Smartphone X", "Electronics", 699.0, 50, "TechTrendz", ProductStatus::Active),
        product(2, "Leather Jacket", "Fashion", 199.0, 30, "StyleHub", ProductStatus::Active),
        product(3, "Coffee Maker", "Home", 89.0, 0, "HomeHaven", ProductStatus::OutOfStock),
        product(4, "Running Shoes", "Sports", 129.0, 15, "FitGear", ProductStatus::Active),
        product(5, "Novel Book", "Books", 19.0, 100, "BookWorm", ProductStatus::Inactive),
    ]
}

/// Products of [`DEMO_STORE`].
pub fn seller_products() -> Vec<Product> {
    let product = |id, name: &str, category: &str, price, original_price, stock, rating| Product {
        id,
        name: name.into(),
        category: category.into(),
        price,
        original_price,
        stock,
        seller: DEMO_STORE.into(),
        status: if stock == 0 {
            ProductStatus::OutOfStock
        } else {
            ProductStatus::Active
        },
        rating,
    };
    vec![
        product(1, "Smartphone X", "Electronics", 699.99, 799.99, 50, 4.5),
        product(2, "Leather Jacket", "Fashion", 199.99, 249.99, 30, 4.0),
        product(3, "Coffee Maker", "Home", 89.99, 99.99, 0, 4.8),
        product(4, "Running Shoes", "Sports", 129.99, 149.99, 40, 4.2),
    ]
}

/// Platform-wide reviews awaiting moderation.
pub fn admin_feedback() -> Vec<Feedback> {
    let feedback = |id, customer: &str, product: &str, rating, comment: &str, date, status| Feedback {
        id,
        customer: customer.into(),
        product: product.into(),
        rating,
        comment: comment.into(),
        date,
        status,
        responded: false,
        reply: None,
    };
    vec![
        feedback(1, "John Doe", "Smartphone X", 4, "Great phone, fast delivery!", CalendarDate::ymd(2024, 4, 1), FeedbackStatus::Reviewed),
        feedback(2, "Jane Smith", "Leather Jacket", 3, "Good quality but sizing issue", CalendarDate::ymd(2024, 3, 28), FeedbackStatus::Pending),
        feedback(3, "Bob Johnson", "Coffee Maker", 5, "Best coffee ever!", CalendarDate::ymd(2024, 4, 2), FeedbackStatus::Resolved),
        feedback(4, "Alice Brown", "Running Shoes", 2, "Wore out quickly", CalendarDate::ymd(2024, 3, 30), FeedbackStatus::Pending),
        feedback(5, "Mike Wilson", "Novel Book", 4, "Engaging read", CalendarDate::ymd(2024, 4, 3), FeedbackStatus::Reviewed),
    ]
}

/// Reviews of [`DEMO_STORE`]'s products.
pub fn customer_feedback() -> Vec<Feedback> {
    let feedback = |id, customer: &str, product: &str, rating, comment: &str, date, responded: bool| Feedback {
        id,
        customer: customer.into(),
        product: product.into(),
        rating,
        comment: comment.into(),
        date,
        status: if responded {
            FeedbackStatus::Resolved
        } else {
            FeedbackStatus::Pending
        },
        responded,
        reply: None,
    };
    vec![
        feedback(1, "John Doe", "Smartphone X", 5, "Amazing phone! Great camera and battery life.", CalendarDate::ymd(2024, 4, 1), false),
        feedback(2, "Jane Smith", "Leather Jacket", 4, "Good quality, but the size was a bit off.", CalendarDate::ymd(2024, 3, 28), true),
        feedback(3, "Alice Johnson", "Coffee Maker", 3, "Works fine, but the instructions were unclear.", CalendarDate::ymd(2024, 3, 25), false),
        feedback(4, "Bob Williams", "Running Shoes", 5, "Super comfortable and stylish!", CalendarDate::ymd(2024, 3, 20), true),
    ]
}

pub fn orders() -> Vec<Order> {
    let item = |product_id, name: &str, price| OrderItem {
        product_id,
        name: name.into(),
        price,
    };
    vec![
        Order {
            id: 1,
            customer: "John Doe".into(),
            items: vec![item(1, "Smartphone X", 699.99)],
            total: 699.99,
            order_date: CalendarDate::ymd(2024, 4, 1),
            status: OrderStatus::Pending,
            shipping_address: "123 BlinkBuy Street, Commerce City, CC 45678".into(),
        },
        Order {
            id: 2,
            customer: "Jane Smith".into(),
            items: vec![
                item(2, "Leather Jacket", 199.99),
                item(3, "Wireless Earbuds", 59.99),
            ],
            total: 259.98,
            order_date: CalendarDate::ymd(2024, 4, 2),
            status: OrderStatus::Shipped,
            shipping_address: "456 Tech Park, Innovation Drive, Tech City, TC 12345".into(),
        },
        Order {
            id: 3,
            customer: "Alice Johnson".into(),
            items: vec![item(4, "Coffee Maker", 89.99)],
            total: 89.99,
            order_date: CalendarDate::ymd(2024, 4, 3),
            status: OrderStatus::Delivered,
            shipping_address: "789 Main St, Downtown, DC 67890".into(),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    let customer = |id, name: &str, email: &str, phone: &str, total_orders, total_spent, last_order_date, join_date| Customer {
        id,
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        total_orders,
        total_spent,
        last_order_date,
        join_date,
    };
    vec![
        customer(1, "John Doe", "john.doe@blinkbuy.com", "+1 (800) 555-0123", 5, 1499.95, CalendarDate::ymd(2024, 4, 1), CalendarDate::ymd(2023, 1, 15)),
        customer(2, "Jane Smith", "jane.smith@blinkbuy.com", "+1 (800) 555-0124", 3, 599.97, CalendarDate::ymd(2024, 3, 28), CalendarDate::ymd(2023, 3, 10)),
        customer(3, "Alice Johnson", "alice.johnson@blinkbuy.com", "+1 (800) 555-0125", 8, 2399.92, CalendarDate::ymd(2024, 3, 25), CalendarDate::ymd(2022, 11, 5)),
        customer(4, "Bob Williams", "bob.williams@blinkbuy.com", "+1 (800) 555-0126", 1, 89.99, CalendarDate::ymd(2024, 2, 15), CalendarDate::ymd(2024, 1, 20)),
    ]
}
