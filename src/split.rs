use crate::models::{Balance, ExpenseRecord, Settlement};

/// Default threshold below which a computed balance is snapped to zero.
/// Overridable through the `BALANCE_EPSILON` environment variable.
pub const DEFAULT_BALANCE_EPSILON: f64 = 0.1;

// A working balance this close to zero counts as settled during matching.
const MATCH_EPSILON: f64 = 1e-6;

/// Calculate the net balance for each user in `users` based on `expenses`.
/// Positive balance means the user is owed money; negative means they owe money.
/// Balances with absolute value below `epsilon` are reported as exactly zero.
pub fn compute_balances(
    expenses: &[ExpenseRecord],
    users: &[String],
    epsilon: f64,
) -> Vec<Balance> {
    // Initialize balances in roster order
    let mut balances: Vec<Balance> = users
        .iter()
        .map(|user| Balance {
            user: user.clone(),
            balance: 0.0,
        })
        .collect();

    for expense in expenses {
        let count = expense.recipients.len();
        if count == 0 {
            continue;
        }
        let share = expense.amount / count as f64;

        // Each recipient occurrence owes a share; names outside the roster
        // get no entry
        for recipient in &expense.recipients {
            if let Some(entry) = balances.iter_mut().find(|b| b.user == *recipient) {
                entry.balance -= share;
            }
        }

        // The payer is credited the full amount
        if let Some(entry) = balances.iter_mut().find(|b| b.user == expense.payer) {
            entry.balance += expense.amount;
        }
    }

    // Absorb residual floating-point error from the share divisions
    for entry in &mut balances {
        if entry.balance.abs() < epsilon {
            entry.balance = 0.0;
        }
    }

    balances
}

struct WorkingBalance<'a> {
    user: &'a str,
    balance: f64,
}

/// Given net balances, return the transfers that settle them: largest
/// creditor against largest debtor, greedily, until one side runs out.
/// Emits at most `debtors + creditors - 1` suggestions, in generation order.
pub fn compute_settlements(balances: &[Balance]) -> Vec<Settlement> {
    let mut creditors: Vec<WorkingBalance> = Vec::new();
    let mut debtors: Vec<WorkingBalance> = Vec::new();
    for entry in balances {
        let working = WorkingBalance {
            user: &entry.user,
            balance: entry.balance,
        };
        if entry.balance > 0.0 {
            creditors.push(working);
        } else if entry.balance < 0.0 {
            debtors.push(working);
        }
    }

    // Highest positive first, most negative first. Both sorts are stable, so
    // equal balances keep their order of appearance in the input.
    creditors.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance));

    let mut suggestions = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < debtors.len() && j < creditors.len() {
        let transfer = creditors[j].balance.min(-debtors[i].balance);
        if transfer <= 0.0 {
            break;
        }
        suggestions.push(Settlement {
            from: debtors[i].user.to_string(),
            to: creditors[j].user.to_string(),
            amount: transfer,
        });
        debtors[i].balance += transfer;
        creditors[j].balance -= transfer;
        if debtors[i].balance.abs() < MATCH_EPSILON {
            i += 1;
        }
        if creditors[j].balance.abs() < MATCH_EPSILON {
            j += 1;
        }
    }

    suggestions
}
