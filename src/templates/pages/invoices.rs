use crate::domain::invoice::{format_cents, Invoice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct InvoicesVm {
    pub invoices: Vec<Invoice>,
    pub unpaid_total_cents: i64,
}

pub fn invoices_page(vm: &InvoicesVm) -> Markup {
    desktop_layout(
        "Worker invoices",
        true,
        html! {
            main class="container" {
                h1 { "Worker invoices" }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Pending payment" }
                    p { strong id="unpaid-total" { (format_cents(vm.unpaid_total_cents)) " €" } }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Add invoice" }
                    form action="/admin/invoices" method="post" style="display: flex; gap: 10px; align-items: center; flex-wrap: wrap;" {
                        input type="text" name="worker" placeholder="Worker" required;
                        input type="text" name="concept" placeholder="Concept";
                        input type="text" name="amount" placeholder="0.00" inputmode="decimal" required;
                        input type="date" name="issued_on" required;
                        button type="submit" style="padding: 8px 16px; background: #10b981; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Add" }
                    }
                }

                div class="card" {
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; font-size: 0.9em;" {
                            thead {
                                tr {
                                    th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Date" }
                                    th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Worker" }
                                    th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Concept" }
                                    th style="padding: 8px; text-align: right; border-bottom: 2px solid #eee;" { "Amount" }
                                    th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Status" }
                                }
                            }
                            tbody {
                                @for invoice in &vm.invoices {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f9f9f9;" { (invoice.issued_on.format("%Y-%m-%d").to_string()) }
                                        td style="padding: 8px; border-bottom: 1px solid #f9f9f9;" { (invoice.worker) }
                                        td style="padding: 8px; border-bottom: 1px solid #f9f9f9;" { (invoice.concept) }
                                        td style="padding: 8px; border-bottom: 1px solid #f9f9f9; text-align: right;" { (format_cents(invoice.amount_cents)) " €" }
                                        td style="padding: 8px; border-bottom: 1px solid #f9f9f9;" {
                                            @if invoice.paid {
                                                span style="color: green;" { "Paid" }
                                            } @else {
                                                form action=(format!("/admin/invoices/{}/paid", invoice.id)) method="post" style="margin: 0;" {
                                                    button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer; font-weight: 500; padding: 0;" {
                                                        "Mark paid"
                                                    }
                                                }
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
