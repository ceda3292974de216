use once_cell::sync::OnceCell;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ExpenseRow;

static STORE: OnceCell<ExpenseStore> = OnceCell::new();

// Process-local expense ledger, shared across handlers
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: RwLock<Vec<ExpenseRow>>,
}

pub fn init_store() {
    STORE
        .set(ExpenseStore::default())
        .expect("Expense store already initialized");
}

pub fn get_store() -> &'static ExpenseStore {
    STORE.get().expect("Expense store not initialized")
}

impl ExpenseStore {
    pub async fn list(&self) -> Vec<ExpenseRow> {
        self.expenses.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<ExpenseRow> {
        self.expenses
            .read()
            .await
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
    }

    pub async fn insert(&self, row: ExpenseRow) {
        self.expenses.write().await.push(row);
    }

    // Replaces the row with the same id; None if it is gone
    pub async fn update(&self, row: ExpenseRow) -> Option<ExpenseRow> {
        let mut expenses = self.expenses.write().await;
        let entry = expenses.iter_mut().find(|expense| expense.id == row.id)?;
        *entry = row.clone();
        Some(row)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let mut expenses = self.expenses.write().await;
        let before = expenses.len();
        expenses.retain(|expense| expense.id != id);
        expenses.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(payer: &str, amount: f64) -> ExpenseRow {
        ExpenseRow {
            id: Uuid::new_v4(),
            payer: payer.to_string(),
            recipients: vec![payer.to_string()],
            amount,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_list_keeps_insertion_order() {
        let store = ExpenseStore::default();
        let first = row("A", 10.0);
        let second = row("B", 20.0);
        store.insert(first.clone()).await;
        store.insert(second.clone()).await;

        let listed = store.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn update_replaces_matching_row_only() {
        let store = ExpenseStore::default();
        let original = row("A", 10.0);
        store.insert(original.clone()).await;

        let mut changed = original.clone();
        changed.amount = 25.0;
        let updated = store.update(changed).await.expect("row should exist");
        assert_eq!(updated.amount, 25.0);
        assert_eq!(store.get(original.id).await.unwrap().amount, 25.0);

        let missing = row("B", 5.0);
        assert!(store.update(missing).await.is_none());
    }

    #[tokio::test]
    async fn remove_reports_whether_a_row_was_deleted() {
        let store = ExpenseStore::default();
        let existing = row("A", 10.0);
        store.insert(existing.clone()).await;

        assert!(store.remove(existing.id).await);
        assert!(!store.remove(existing.id).await);
        assert!(store.list().await.is_empty());
    }
}
