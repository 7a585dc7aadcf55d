use maud::{html, Markup, PreEscaped, DOCTYPE};

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.status .dot { display: inline-block; width: 8px; height: 8px; border-radius: 50%; margin-right: 6px; background: #9ca3af; }
.status.open .dot { background: #10b981; }
.btn.whatsapp { background: #25d366; color: white; padding: 6px 12px; border-radius: 6px; text-decoration: none; }
.floating-widget { position: fixed; right: 1rem; bottom: 1rem; background: white; box-shadow: 0 4px 12px rgba(0,0,0,.15); border-radius: 12px; padding: .75rem 1rem; }
.notice.error { color: #dc2626; }
.microcopy, .muted { color: #6b7280; font-size: .9em; }
"#;

pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Rental Management" }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-home"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { "Rental Management" }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/discounts" { "Discounts" } }
                          li { a href="/rooms" { "Rooms" } }
                          li { a href="/contact" { "Contact" } }
                          @if is_admin {
                              li { a href="/admin/leads" { "Leads" } }
                              li { a href="/admin/invoices" { "Invoices" } }
                              li { a href="/admin/copy" { "Copy" } }
                          }
                      }
                  }
              }
                (content)

                // Floating contact widget, refreshed every minute.
                aside
                    id="contact-widget"
                    class="floating-widget"
                    hx-get="/widget"
                    hx-trigger="load, every 60s"
                    hx-swap="innerHTML"
                {}
            }
        }
    }
}
