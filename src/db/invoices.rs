// src/db/invoices.rs
use crate::domain::invoice::{Invoice, NewInvoice};
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn insert_invoice(conn: &Connection, invoice: &NewInvoice, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert into invoices (worker, concept, amount_cents, issued_on, paid, created_at) values (?, ?, ?, ?, 0, ?)",
        params![
            invoice.worker,
            invoice.concept,
            invoice.amount_cents,
            invoice.issued_on,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert invoice failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_invoices(conn: &Connection) -> Result<Vec<Invoice>, ServerError> {
    let mut stmt = conn
        .prepare("select id, worker, concept, amount_cents, issued_on, paid from invoices order by issued_on desc, id desc")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Invoice {
                id: row.get(0)?,
                worker: row.get(1)?,
                concept: row.get(2)?,
                amount_cents: row.get(3)?,
                issued_on: row.get(4)?,
                paid: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut invoices = Vec::new();
    for r in rows {
        invoices.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(invoices)
}

pub fn mark_invoice_paid(conn: &Connection, invoice_id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute("update invoices set paid = 1 where id = ?", params![invoice_id])
        .map_err(|e| ServerError::DbError(format!("mark invoice paid failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn unpaid_total_cents(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row(
        "select coalesce(sum(amount_cents), 0) from invoices where paid = 0",
        [],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("sum unpaid invoices failed: {e}")))
}
