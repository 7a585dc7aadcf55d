// src/db/leads.rs
use crate::domain::lead::{Lead, LeadKind, LeadStatus, NewLead};
use crate::errors::ServerError;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::str::FromStr;

pub fn insert_lead(conn: &Connection, lead: &NewLead, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (kind, name, email, phone, message, status, created_at)
        values (?, ?, ?, ?, ?, 'new', ?)
        "#,
        params![
            lead.kind.as_str(),
            lead.name,
            lead.email,
            lead.phone,
            lead.message,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Newest first. `kind` narrows the list to one lead kind.
pub fn list_leads(conn: &Connection, kind: Option<LeadKind>) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, kind, name, email, phone, message, status, created_at
            from leads
            where (?1 is null or kind = ?1)
            order by created_at desc, id desc
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![kind.map(|k| k.as_str())], lead_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut leads = Vec::new();
    for r in rows {
        leads.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(leads)
}

pub fn update_lead_status(
    conn: &Connection,
    lead_id: i64,
    status: LeadStatus,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update leads set status = ? where id = ?",
            params![status.as_str(), lead_id],
        )
        .map_err(|e| ServerError::DbError(format!("update lead status failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Count per status, in pipeline order, including zero counts.
pub fn count_leads_by_status(conn: &Connection) -> Result<Vec<(LeadStatus, i64)>, ServerError> {
    LeadStatus::ALL
        .iter()
        .map(|status| {
            conn.query_row(
                "select count(*) from leads where status = ?",
                params![status.as_str()],
                |r| r.get(0),
            )
            .map(|count| (*status, count))
            .map_err(|e| ServerError::DbError(format!("count leads failed: {e}")))
        })
        .collect()
}

fn lead_from_row(row: &Row<'_>) -> rusqlite::Result<Lead> {
    Ok(Lead {
        id: row.get(0)?,
        kind: parse_column(row, 1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        message: row.get(5)?,
        status: parse_column(row, 6)?,
        created_at: row.get(7)?,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
