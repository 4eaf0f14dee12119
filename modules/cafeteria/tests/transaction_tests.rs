//! Transaction boundaries of the service, observed through in-memory mocks

use cafeteria::contract::*;
use cafeteria::domain::{Repository, Service};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

mod common;
use common::print_test_header;

// Mock repository implementations for testing
pub mod mocks {
    use async_trait::async_trait;
    use cafeteria::contract::Entity;
    use cafeteria::domain::{Repository, TransactionManager};
    use parking_lot::{Mutex, RwLock};
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    /// Transaction handle carrying a sequence number
    #[derive(Debug)]
    pub struct MockTx(pub u64);

    /// Records begin/commit/rollback calls in order
    #[derive(Default)]
    pub struct RecordingTransactions {
        next: AtomicU64,
        log: Mutex<Vec<String>>,
    }

    impl RecordingTransactions {
        pub fn log(&self) -> Vec<String> {
            self.log.lock().clone()
        }
    }

    #[async_trait]
    impl TransactionManager<MockTx> for RecordingTransactions {
        async fn begin(&self) -> anyhow::Result<MockTx> {
            let id = self.next.fetch_add(1, Ordering::SeqCst);
            self.log.lock().push(format!("begin {id}"));
            Ok(MockTx(id))
        }

        async fn commit(&self, tx: MockTx) -> anyhow::Result<()> {
            self.log.lock().push(format!("commit {}", tx.0));
            Ok(())
        }

        async fn rollback(&self, tx: MockTx) -> anyhow::Result<()> {
            self.log.lock().push(format!("rollback {}", tx.0));
            Ok(())
        }
    }

    /// Vec-backed repository that records whether each call got a transaction
    pub struct MemoryRepo<T: Entity> {
        rows: RwLock<Vec<T>>,
        fail_writes: AtomicBool,
        calls: Mutex<Vec<Option<u64>>>,
    }

    impl<T: Entity> MemoryRepo<T> {
        pub fn new(rows: Vec<T>) -> Self {
            Self {
                rows: RwLock::new(rows),
                fail_writes: AtomicBool::new(false),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn fail_writes(&self) {
            self.fail_writes.store(true, Ordering::SeqCst);
        }

        /// Transaction id seen by each call, `None` for calls without one
        pub fn calls(&self) -> Vec<Option<u64>> {
            self.calls.lock().clone()
        }

        pub fn len(&self) -> usize {
            self.rows.read().len()
        }

        fn record(&self, tx: Option<&MockTx>) {
            self.calls.lock().push(tx.map(|tx| tx.0));
        }

        fn check_writable(&self) -> anyhow::Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<T: Entity> Repository<T, MockTx> for MemoryRepo<T> {
        async fn find(&self, id: T::Id, tx: Option<&MockTx>) -> anyhow::Result<Option<T>> {
            self.record(tx);
            Ok(self.rows.read().iter().find(|row| row.id() == id).cloned())
        }

        async fn find_all(&self, tx: Option<&MockTx>) -> anyhow::Result<Vec<T>> {
            self.record(tx);
            Ok(self.rows.read().clone())
        }

        async fn save(&self, entity: &T, tx: Option<&MockTx>) -> anyhow::Result<T> {
            self.record(tx);
            self.check_writable()?;
            let mut rows = self.rows.write();
            match rows.iter_mut().find(|row| row.id() == entity.id()) {
                Some(row) => *row = entity.clone(),
                None => rows.push(entity.clone()),
            }
            Ok(entity.clone())
        }

        async fn delete(&self, entity: &T, tx: Option<&MockTx>) -> anyhow::Result<()> {
            self.record(tx);
            self.check_writable()?;
            self.rows.write().retain(|row| row.id() != entity.id());
            Ok(())
        }
    }
}

use mocks::{MemoryRepo, MockTx, RecordingTransactions};

struct Fixture {
    service: Service<MockTx>,
    transactions: Arc<RecordingTransactions>,
    menus: Arc<MemoryRepo<Menu>>,
    submenus: Arc<MemoryRepo<Submenu>>,
    dishes: Arc<MemoryRepo<Dish>>,
    menu: Menu,
    submenu: Submenu,
}

/// A menu holding one submenu, mirrored into the submenu repository
fn fixture() -> Fixture {
    let now = Utc::now();
    let menu_id = Uuid::new_v4();
    let submenu = Submenu {
        id: Uuid::new_v4(),
        title: "Desserts".to_string(),
        description: "Sweet things".to_string(),
        menu_id,
        dishes: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    let menu = Menu {
        id: menu_id,
        title: "Dinner".to_string(),
        description: "After six".to_string(),
        submenus: vec![submenu.clone()],
        created_at: now,
        updated_at: now,
    };

    let transactions = Arc::new(RecordingTransactions::default());
    let menus = Arc::new(MemoryRepo::new(vec![menu.clone()]));
    let submenus = Arc::new(MemoryRepo::new(vec![submenu.clone()]));
    let dishes: Arc<MemoryRepo<Dish>> = Arc::new(MemoryRepo::new(Vec::new()));

    let service = Service::new(
        transactions.clone(),
        menus.clone(),
        submenus.clone(),
        dishes.clone(),
    );

    Fixture {
        service,
        transactions,
        menus,
        submenus,
        dishes,
        menu,
        submenu,
    }
}

fn cake() -> NewDish {
    NewDish {
        title: "Napoleon".to_string(),
        description: "Layered cake".to_string(),
        price: Decimal::new(650, 2),
    }
}

#[tokio::test]
async fn test_successful_mutation_commits_once() {
    let f = fixture();

    print_test_header(
        "test_successful_mutation_commits_once",
        &["Validation reads and the write share the single transaction that gets committed."],
    );

    let dish = f
        .service
        .add_dish(f.menu.id, f.submenu.id, cake())
        .await
        .expect("Failed to add dish");

    assert_eq!(dish.submenu_id, f.submenu.id);
    assert_eq!(f.transactions.log(), ["begin 0", "commit 0"]);
    assert_eq!(f.menus.calls(), [Some(0)]);
    assert_eq!(f.submenus.calls(), [Some(0)]);
    assert_eq!(f.dishes.calls(), [Some(0)]);
    assert_eq!(f.dishes.len(), 1);
}

#[tokio::test]
async fn test_failed_validation_rolls_back() {
    let f = fixture();

    let err = f
        .service
        .create_submenu(Uuid::new_v4(), NewSubmenu {
            title: "Orphan".to_string(),
            description: "No parent".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CafeteriaError::MenuNotFound { .. }));
    assert_eq!(f.transactions.log(), ["begin 0", "rollback 0"]);
    assert_eq!(f.submenus.len(), 1);
    assert!(f.submenus.calls().is_empty());
}

#[tokio::test]
async fn test_storage_failure_is_passed_through_and_rolled_back() {
    let f = fixture();
    f.dishes.fail_writes();

    let err = f
        .service
        .add_dish(f.menu.id, f.submenu.id, cake())
        .await
        .unwrap_err();

    match err {
        CafeteriaError::Storage(source) => assert_eq!(source.to_string(), "disk full"),
        other => panic!("expected storage error, got {other:?}"),
    }
    assert_eq!(f.transactions.log(), ["begin 0", "rollback 0"]);
    assert_eq!(f.dishes.len(), 0);
}

#[tokio::test]
async fn test_reads_open_no_service_transaction() {
    let f = fixture();

    let menu = f.service.get_menu(f.menu.id).await.unwrap();
    assert_eq!(menu.submenus_count, 1);

    let submenus = f.service.list_submenus(f.menu.id).await.unwrap();
    assert_eq!(submenus.len(), 1);

    assert!(f.transactions.log().is_empty());
    assert!(f.menus.calls().iter().all(Option::is_none));
}

#[tokio::test]
async fn test_membership_is_decided_by_menu_collection() {
    let f = fixture();
    let now = Utc::now();

    // Claims to belong to the menu but is missing from its collection
    let stray = Submenu {
        id: Uuid::new_v4(),
        title: "Stray".to_string(),
        description: "Points at the menu".to_string(),
        menu_id: f.menu.id,
        dishes: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    f.submenus
        .save(&stray, None)
        .await
        .expect("Failed to store stray submenu");

    let err = f
        .service
        .get_submenu(f.menu.id, stray.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CafeteriaError::SubmenuNotIncludedInMenu { .. }));

    let err = f
        .service
        .delete_submenu(f.menu.id, stray.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CafeteriaError::SubmenuNotIncludedInMenu { .. }));
    assert_eq!(f.transactions.log(), ["begin 0", "rollback 0"]);
    assert_eq!(f.submenus.len(), 2);
}

#[tokio::test]
async fn test_delete_returns_state_before_removal() {
    let f = fixture();

    let deleted = f.service.delete_menu(f.menu.id).await.unwrap();

    assert_eq!(deleted.id, f.menu.id);
    assert_eq!(deleted.submenus_count, 1);
    assert_eq!(f.menus.len(), 0);
    assert_eq!(f.transactions.log(), ["begin 0", "commit 0"]);
}
