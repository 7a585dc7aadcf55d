use crate::domain::lead::{Lead, LeadKind, LeadStatus};
use crate::templates::desktop_layout;
use crate::clock::format_local;
use chrono_tz::Tz;
use maud::{html, Markup};

pub struct AdminLeadsVm {
    pub leads: Vec<Lead>,
    pub counts: Vec<(LeadStatus, i64)>,
    pub filter: Option<LeadKind>,
    /// Zone the "Received" column is shown in.
    pub tz: Tz,
}

pub fn admin_leads_page(vm: &AdminLeadsVm) -> Markup {
    desktop_layout(
        "Leads",
        true,
        html! {
            main class="container" {
                h1 { "Leads" }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Pipeline" }
                    ul class="pipeline" {
                        @for (status, count) in &vm.counts {
                            li { (status.as_str()) ": " strong { (count) } }
                        }
                    }
                }

                div class="card" {
                    div style="display: flex; gap: 10px; align-items: center;" {
                        a href="/admin/leads" { "All" }
                        @for kind in LeadKind::ALL {
                            @if vm.filter == Some(kind) {
                                strong { (kind.as_str()) }
                            } @else {
                                a href=(format!("/admin/leads?kind={}", kind.as_str())) { (kind.as_str()) }
                            }
                        }
                        a href=(export_href(vm.filter)) style="margin-left: auto;" { "Download XLSX" }
                    }

                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Received" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Kind" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Name" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Email" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Phone" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Message" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Status" }
                                }
                            }
                            tbody {
                                @for lead in &vm.leads {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6; color: #6b7280; font-size: 0.9em;" {
                                            (format_local(lead.created_at, vm.tz))
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (lead.kind.as_str()) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (lead.name) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (lead.email) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (lead.phone.as_deref().unwrap_or("—")) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6; max-width: 320px;" { (lead.message) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            form action=(format!("/admin/leads/{}/status", lead.id)) method="post" style="display: flex; gap: 8px; margin: 0;" {
                                                select name="status" {
                                                    @for status in LeadStatus::ALL {
                                                        option value=(status.as_str()) selected[status == lead.status] { (status.as_str()) }
                                                    }
                                                }
                                                button type="submit" style="padding: 4px 8px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Set" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn export_href(filter: Option<LeadKind>) -> String {
    match filter {
        Some(kind) => format!("/admin/leads/export?kind={}", kind.as_str()),
        None => "/admin/leads/export".to_string(),
    }
}

