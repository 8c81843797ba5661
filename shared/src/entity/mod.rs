//! Entities listed by the admin and seller table pages

mod customer;
mod feedback;
mod order;
mod product;
mod user;

#[cfg(test)]
mod tests;

pub use customer::{Customer, CustomerField, CustomerStats};
pub use feedback::{Feedback, FeedbackField, FeedbackStats, FeedbackStatus};
pub use order::{Order, OrderField, OrderItem, OrderStats, OrderStatus};
pub use product::{Product, ProductDraft, ProductField, ProductStats, ProductStatus};
pub use user::{User, UserField, UserStats, UserStatus};

use crate::list::{FilterSortDescriptor, SortDirection};

/// Initial descriptor of each table page.
pub trait DefaultView: crate::list::ListEntity + Sized {
    fn default_view() -> FilterSortDescriptor<Self::Field>;
}

impl DefaultView for User {
    fn default_view() -> FilterSortDescriptor<UserField> {
        FilterSortDescriptor::new(UserField::Name, SortDirection::Asc)
    }
}

impl DefaultView for Product {
    fn default_view() -> FilterSortDescriptor<ProductField> {
        FilterSortDescriptor::new(ProductField::Name, SortDirection::Asc)
    }
}

impl DefaultView for Feedback {
    fn default_view() -> FilterSortDescriptor<FeedbackField> {
        FilterSortDescriptor::new(FeedbackField::Date, SortDirection::Desc)
    }
}

impl DefaultView for Order {
    fn default_view() -> FilterSortDescriptor<OrderField> {
        FilterSortDescriptor::new(OrderField::OrderDate, SortDirection::Desc)
    }
}

impl DefaultView for Customer {
    fn default_view() -> FilterSortDescriptor<CustomerField> {
        FilterSortDescriptor::new(CustomerField::Name, SortDirection::Asc)
    }
}
