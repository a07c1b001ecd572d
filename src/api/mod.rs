//! One module per backend resource; each method is a plain verb + path
//! mapping with no retries, caching, or validation. Errors propagate
//! unchanged from the request wrapper.

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod reports;
pub mod transactions;
pub mod users;

pub use accounts::AccountsApi;
pub use auth::AuthApi;
pub use budgets::BudgetsApi;
pub use categories::CategoriesApi;
pub use reports::ReportsApi;
pub use transactions::TransactionsApi;
pub use users::UsersApi;
