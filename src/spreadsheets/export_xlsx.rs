use crate::domain::lead::Lead;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::clock::format_local;
use chrono_tz::Tz;
use rust_xlsxwriter::Workbook;

/// "Received" is written as wall time in `tz`.
pub fn build_leads_workbook(leads: &[Lead], tz: Tz) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = ["ID", "Kind", "Name", "Email", "Phone", "Status", "Received", "Message"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;
        let received = format_local(lead.created_at, tz);

        worksheet
            .write_number(r, 0, lead.id as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {e}")))?;

        let cells = [
            (1, lead.kind.as_str()),
            (2, lead.name.as_str()),
            (3, lead.email.as_str()),
            (4, lead.phone.as_deref().unwrap_or("")),
            (5, lead.status.as_str()),
            (6, received.as_str()),
            (7, lead.message.as_str()),
        ];
        for (col, value) in cells {
            worksheet.write_string(r, col, value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {e}", headers[col as usize]))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_leads_xlsx(leads: &[Lead], tz: Tz, filename: &str) -> ResultResp {
    let buffer = build_leads_workbook(leads, tz)?;
    xlsx_response(buffer, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::{LeadKind, LeadStatus};

    #[test]
    fn workbook_is_a_zip_archive() {
        let leads = vec![Lead {
            id: 1,
            kind: LeadKind::Owner,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: None,
            message: "Three flats".into(),
            status: LeadStatus::Contacted,
            created_at: 1_715_760_000,
        }];
        let bytes = build_leads_workbook(&leads, chrono_tz::Europe::Madrid).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
