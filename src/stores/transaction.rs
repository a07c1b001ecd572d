use uuid::Uuid;

use crate::{
    api::TransactionsApi,
    domain::{
        CreateTransactionRequest, Transaction, TransactionFilter, UpdateTransactionRequest,
    },
    errors::ApiError,
};

/// Holds the latest fetched transaction page.
pub struct TransactionStore {
    api: TransactionsApi,
    transactions: Vec<Transaction>,
    total_elements: i64,
    loading: bool,
}

impl TransactionStore {
    pub fn new(api: TransactionsApi) -> Self {
        Self {
            api,
            transactions: Vec::new(),
            total_elements: 0,
            loading: false,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Server-side total across all pages, as of the last fetch.
    pub fn total_elements(&self) -> i64 {
        self.total_elements
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub async fn fetch_transactions(&mut self, filter: &TransactionFilter) {
        self.loading = true;
        match self.api.get_all(filter).await {
            Ok(page) => {
                self.transactions = page.content;
                self.total_elements = page.total_elements;
            }
            Err(err) => tracing::error!("Fetch transactions error: {err}"),
        }
        self.loading = false;
    }

    pub async fn create_transaction(
        &mut self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        let transaction = self.api.create(request).await.map_err(|err| {
            tracing::error!("Create transaction error: {err}");
            err
        })?;
        self.transactions.push(transaction.clone());
        self.total_elements += 1;
        Ok(transaction)
    }

    pub async fn update_transaction(
        &mut self,
        id: Uuid,
        request: &UpdateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        let transaction = self.api.update(id, request).await.map_err(|err| {
            tracing::error!("Update transaction error: {err}");
            err
        })?;
        super::replace_by_id(&mut self.transactions, transaction.clone());
        Ok(transaction)
    }

    pub async fn delete_transaction(&mut self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(id).await.map_err(|err| {
            tracing::error!("Delete transaction error: {err}");
            err
        })?;
        if super::remove_by_id(&mut self.transactions, id) {
            self.total_elements -= 1;
        }
        Ok(())
    }
}
