use chrono::Utc;
use rocket::Route;
use rocket::http::Status;
use rocket::serde::json::Json;
use uuid::Uuid;

use crate::config::get_config;
use crate::models::*;
use crate::split::{compute_balances, compute_settlements};
use crate::store::get_store;

// Health check
#[get("/health")]
fn health() -> &'static str {
    "OK"
}

// Roster as configured at startup
#[get("/users")]
fn get_users() -> Json<Vec<String>> {
    Json(get_config().users.clone())
}

fn validate_expense_input(payer: &str, amount: f64) -> Result<(), Status> {
    if payer.trim().is_empty() {
        return Err(Status::BadRequest);
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(Status::BadRequest);
    }
    Ok(())
}

// List expenses, newest first
#[get("/expenses")]
async fn get_expenses() -> Json<Vec<Expense>> {
    let mut rows = get_store().list().await;
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(rows.into_iter().map(Expense::from).collect())
}

// Record a new expense
#[post("/expenses", data = "<request>")]
async fn create_expense(request: Json<CreateExpenseRequest>) -> Result<Json<Expense>, Status> {
    validate_expense_input(&request.payer, request.amount)?;

    let row = ExpenseRow {
        id: Uuid::new_v4(),
        payer: request.payer.clone(),
        recipients: request.recipients.clone(),
        amount: request.amount,
        description: request.description.clone(),
        created_at: Utc::now(),
    };
    get_store().insert(row.clone()).await;

    Ok(Json(Expense::from(row)))
}

// Update an expense, keeping its original timestamp
#[put("/expenses/<expense_id>", data = "<request>")]
async fn update_expense(
    expense_id: &str,
    request: Json<UpdateExpenseRequest>,
) -> Result<Json<Expense>, Status> {
    let expense_uuid = Uuid::parse_str(expense_id).map_err(|_| Status::BadRequest)?;
    validate_expense_input(&request.payer, request.amount)?;

    let existing = get_store()
        .get(expense_uuid)
        .await
        .ok_or(Status::NotFound)?;

    let row = ExpenseRow {
        id: expense_uuid,
        payer: request.payer.clone(),
        recipients: request.recipients.clone(),
        amount: request.amount,
        description: request.description.clone(),
        created_at: existing.created_at,
    };
    let updated = get_store().update(row).await.ok_or(Status::NotFound)?;

    Ok(Json(Expense::from(updated)))
}

// Delete an expense
#[delete("/expenses/<expense_id>")]
async fn delete_expense(expense_id: &str) -> Result<Status, Status> {
    let expense_uuid = Uuid::parse_str(expense_id).map_err(|_| Status::BadRequest)?;

    if !get_store().remove(expense_uuid).await {
        return Err(Status::NotFound);
    }

    Ok(Status::NoContent)
}

// Net balance per roster user, recomputed from the full ledger
#[get("/balances")]
async fn get_balances() -> Json<Vec<Balance>> {
    let config = get_config();
    let rows = get_store().list().await;
    let records: Vec<ExpenseRecord> = rows.iter().map(ExpenseRecord::from).collect();

    Json(compute_balances(&records, &config.users, config.balance_epsilon))
}

// Suggested transfers that would settle the current balances
#[get("/settlements")]
async fn get_settlements() -> Json<Vec<Settlement>> {
    let config = get_config();
    let rows = get_store().list().await;
    let records: Vec<ExpenseRecord> = rows.iter().map(ExpenseRecord::from).collect();
    let balances = compute_balances(&records, &config.users, config.balance_epsilon);

    Json(compute_settlements(&balances))
}

// Record an executed settlement as a regular expense with a single
// recipient, so the next recompute moves both parties toward zero
#[post("/settle", data = "<request>")]
async fn settle(request: Json<SettleRequest>) -> Result<Json<Expense>, Status> {
    if request.from.trim().is_empty() || request.to.trim().is_empty() {
        return Err(Status::BadRequest);
    }
    if request.from == request.to {
        return Err(Status::BadRequest);
    }
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(Status::BadRequest);
    }

    let row = ExpenseRow {
        id: Uuid::new_v4(),
        payer: request.from.clone(),
        recipients: vec![request.to.clone()],
        amount: request.amount,
        description: format!(
            "Settlement payment from {} to {}",
            request.from, request.to
        ),
        created_at: Utc::now(),
    };
    get_store().insert(row.clone()).await;

    Ok(Json(Expense::from(row)))
}

pub fn get_routes() -> Vec<Route> {
    routes![
        health,
        get_users,
        get_expenses,
        create_expense,
        update_expense,
        delete_expense,
        get_balances,
        get_settlements,
        settle
    ]
}
