pub mod account;
pub mod budget;
pub mod category;
pub mod common;
pub mod page;
pub mod report;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountType, CreateAccountRequest, UpdateAccountRequest};
pub use budget::{Budget, CreateBudgetRequest};
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use common::Identifiable;
pub use page::Page;
pub use report::{CategorySpending, MonthlyTrend, Summary};
pub use transaction::{
    CreateTransactionRequest, Transaction, TransactionFilter, TransactionType,
    UpdateTransactionRequest,
};
pub use user::{
    AuthSession, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateUserRequest, User,
};
