use uuid::Uuid;

use crate::{
    api::AccountsApi,
    domain::{Account, CreateAccountRequest, UpdateAccountRequest},
    errors::ApiError,
};

/// Holds the fetched account collection and its loading flag.
pub struct AccountStore {
    api: AccountsApi,
    accounts: Vec<Account>,
    loading: bool,
}

impl AccountStore {
    pub fn new(api: AccountsApi) -> Self {
        Self {
            api,
            accounts: Vec::new(),
            loading: false,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Replaces the collection with the server result. Failures are logged
    /// and swallowed; the collection keeps its last known state.
    pub async fn fetch_accounts(&mut self) {
        self.loading = true;
        match self.api.get_all().await {
            Ok(accounts) => self.accounts = accounts,
            Err(err) => tracing::error!("Fetch accounts error: {err}"),
        }
        self.loading = false;
    }

    /// Creates the account server-side and appends the returned entity.
    pub async fn create_account(
        &mut self,
        request: &CreateAccountRequest,
    ) -> Result<Account, ApiError> {
        let account = self.api.create(request).await.map_err(|err| {
            tracing::error!("Create account error: {err}");
            err
        })?;
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Updates server-side, then replaces the matching local entry; the
    /// local list is untouched when the id is not present.
    pub async fn update_account(
        &mut self,
        id: Uuid,
        request: &UpdateAccountRequest,
    ) -> Result<Account, ApiError> {
        let account = self.api.update(id, request).await.map_err(|err| {
            tracing::error!("Update account error: {err}");
            err
        })?;
        super::replace_by_id(&mut self.accounts, account.clone());
        Ok(account)
    }

    pub async fn delete_account(&mut self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(id).await.map_err(|err| {
            tracing::error!("Delete account error: {err}");
            err
        })?;
        super::remove_by_id(&mut self.accounts, id);
        Ok(())
    }
}
