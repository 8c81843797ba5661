//! Pages of the `/seller` section

mod customers;
mod dashboard;
mod feedback;
mod orders;
mod product_dialog;
mod products;

pub use customers::CustomersPage;
pub use dashboard::SellerDashboard;
pub use feedback::CustomerFeedbackPage;
pub use orders::OrdersPage;
pub use products::SellerProductsPage;
