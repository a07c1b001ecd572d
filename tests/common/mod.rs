#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use finman_client::{
    config::ClientConfig,
    domain::{Account, AccountType, Budget, Category, Transaction, TransactionType, User},
    http::Http,
    notify::Notifier,
    session::SessionStore,
};
use tempfile::TempDir;
use uuid::Uuid;

/// Notifier that records what the wrapper reported, for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub redirects: Mutex<usize>,
}

impl RecordingNotifier {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.lock().expect("lock errors").clone()
    }

    pub fn redirect_count(&self) -> usize {
        *self.redirects.lock().expect("lock redirects")
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().expect("lock errors").push(message.to_string());
    }

    fn redirect_to_login(&self) {
        *self.redirects.lock().expect("lock redirects") += 1;
    }
}

/// A wrapper wired to an isolated session directory and recording notifier.
pub struct TestClient {
    pub http: Http,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    dir: TempDir,
}

impl TestClient {
    /// Directory holding the persisted `token`/`user` files.
    pub fn session_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// Serves `routes` under `/api` on a loopback port, returning the base URL.
pub async fn serve(routes: Router) -> String {
    let app = Router::new().nest("/api", routes);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    format!("http://{addr}/api")
}

/// Builds a client against an already-running base URL.
pub fn client_at(base_url: &str) -> TestClient {
    let dir = TempDir::new().expect("create temp dir");
    let session = Arc::new(SessionStore::open(dir.path()).expect("open session store"));
    let notifier = Arc::new(RecordingNotifier::default());
    let http = Http::new(
        ClientConfig::new(base_url),
        session.clone(),
        notifier.clone(),
    )
    .expect("build http wrapper");
    TestClient {
        http,
        session,
        notifier,
        dir,
    }
}

/// Spawns the stub backend and builds a client against it.
pub async fn client(routes: Router) -> TestClient {
    let base_url = serve(routes).await;
    client_at(&base_url)
}

pub fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "ana@example.com".into(),
        name: "Ana".into(),
        created_at: None,
    }
}

pub fn sample_account(name: &str) -> Account {
    Account {
        id: Uuid::new_v4(),
        name: name.into(),
        kind: AccountType::Bank,
        balance: 1200.50,
        currency: "TWD".into(),
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_category(name: &str, kind: TransactionType) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.into(),
        kind,
        icon: Some("wallet".into()),
        color: Some("#336699".into()),
        is_system: false,
        created_at: None,
    }
}

pub fn sample_budget(category_id: Uuid, amount: f64) -> Budget {
    Budget {
        id: Uuid::new_v4(),
        category_id,
        category_name: Some("Groceries".into()),
        amount,
        spent: 0.0,
        remaining: amount,
        month: 3,
        year: 2024,
        created_at: None,
    }
}

pub fn sample_transaction(account_id: Uuid, category_id: Uuid, amount: f64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        account_id,
        account_name: Some("Checking".into()),
        category_id,
        category_name: Some("Groceries".into()),
        amount,
        kind: TransactionType::Expense,
        description: Some("weekly shop".into()),
        transaction_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
        created_at: None,
        updated_at: None,
    }
}
