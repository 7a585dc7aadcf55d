// src/handlers/admin.rs
use crate::copywriter::build_prompt;
use crate::db::{invoices, leads};
use crate::domain::invoice::NewInvoice;
use crate::domain::lead::{LeadKind, LeadStatus};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::Params;
use crate::spreadsheets::export_leads_xlsx;
use crate::state::AppState;
use crate::templates::pages::{self, AdminLeadsVm, CopyVm, InvoicesVm};

fn kind_filter(query: &Params) -> Result<Option<LeadKind>, ServerError> {
    match query.get("kind").map(|k| k.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(raw.parse::<LeadKind>()?)),
    }
}

pub fn leads(state: &AppState, query: &Params) -> ResultResp {
    let filter = kind_filter(query)?;

    let (leads, counts) = state.db.with_conn(|conn| {
        Ok((
            leads::list_leads(conn, filter)?,
            leads::count_leads_by_status(conn)?,
        ))
    })?;

    html_response(pages::admin_leads_page(&AdminLeadsVm {
        leads,
        counts,
        filter,
        tz: state.tz,
    }))
}

pub fn export_leads(state: &AppState, query: &Params) -> ResultResp {
    let filter = kind_filter(query)?;
    let leads = state.db.with_conn(|conn| leads::list_leads(conn, filter))?;

    let today = state
        .clock
        .now()
        .with_timezone(&state.tz)
        .format("%Y-%m-%d")
        .to_string();
    let filename = match filter {
        Some(kind) => format!("leads_{}_{today}.xlsx", kind.as_str()),
        None => format!("leads_{today}.xlsx"),
    };

    tracing::info!(count = leads.len(), %filename, "exporting leads");
    export_leads_xlsx(&leads, state.tz, &filename)
}

pub fn set_lead_status(state: &AppState, lead_id: i64, form: &Params) -> ResultResp {
    let status = form
        .get("status")
        .ok_or_else(|| ServerError::BadRequest("status is required".into()))?
        .parse::<LeadStatus>()?;

    state
        .db
        .with_conn(|conn| leads::update_lead_status(conn, lead_id, status))?;

    tracing::info!(lead_id, %status, "lead status updated");
    redirect(302, "/admin/leads")
}

pub fn invoices(state: &AppState) -> ResultResp {
    let (invoices, unpaid_total_cents) = state.db.with_conn(|conn| {
        Ok((
            invoices::list_invoices(conn)?,
            invoices::unpaid_total_cents(conn)?,
        ))
    })?;

    html_response(pages::invoices_page(&InvoicesVm {
        invoices,
        unpaid_total_cents,
    }))
}

pub fn add_invoice(state: &AppState, form: &Params) -> ResultResp {
    let invoice = NewInvoice::from_form(form)?;
    let now = state.now_unix();

    let invoice_id = state
        .db
        .with_conn(|conn| invoices::insert_invoice(conn, &invoice, now))?;

    tracing::info!(invoice_id, worker = %invoice.worker, "invoice added");
    redirect(302, "/admin/invoices")
}

pub fn mark_paid(state: &AppState, invoice_id: i64) -> ResultResp {
    state
        .db
        .with_conn(|conn| invoices::mark_invoice_paid(conn, invoice_id))?;
    redirect(302, "/admin/invoices")
}

pub fn copy_form(state: &AppState) -> ResultResp {
    html_response(pages::copy_page(&CopyVm {
        enabled: state.copywriter.is_some(),
        ..CopyVm::default()
    }))
}

pub fn draft_copy(state: &AppState, form: &Params) -> ResultResp {
    let field = |name: &str| form.get(name).cloned().unwrap_or_default();
    let mut vm = CopyVm {
        enabled: state.copywriter.is_some(),
        topic: field("topic"),
        tone: field("tone"),
        ..CopyVm::default()
    };

    let Some(generator) = &state.copywriter else {
        return html_response(pages::copy_page(&vm));
    };

    match build_prompt(&vm.topic, &vm.tone) {
        Err(e) => vm.error = Some(e.to_string()),
        Ok(prompt) => match generator.generate(&prompt) {
            Ok(text) => vm.draft = Some(text),
            Err(e) => {
                tracing::warn!(error = %e, "copy drafting failed");
                vm.error = Some("The text generator is not available right now.".to_string());
            }
        },
    }

    html_response(pages::copy_page(&vm))
}
