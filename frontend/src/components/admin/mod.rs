//! Pages of the `/admin` section

mod dashboard;
mod feedback;
mod products;
mod users;

pub use dashboard::AdminDashboard;
pub use feedback::FeedbackPage;
pub use products::ProductsPage;
pub use users::UsersPage;
