use crate::domain::rates::{RateResult, ASSUMED_MONTHLY_RENT};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DiscountsVm {
    pub properties: u32,
    pub referrals: u32,
    pub result: RateResult,
}

pub fn discounts_page(vm: &DiscountsVm) -> Markup {
    let r = &vm.result;

    desktop_layout(
        "Discounts",
        false,
        html! {
            main class="container" {
                h1 { "Volume and referral discounts" }
                p class="lead" {
                    "Our base fee is " (pct(r.base_rate_percent)) ". It drops with every property you manage with us "
                    "and every investor you refer, down to " (pct(r.floor_rate_percent)) "."
                }

                form method="get" action="/discounts" class="card calculator" {
                    label for="properties" { "Properties: " strong { (vm.properties) } }
                    input type="range" id="properties" name="properties" min="1" max="20" value=(vm.properties);

                    label for="referrals" { "Referred investors: " strong { (vm.referrals) } }
                    input type="range" id="referrals" name="referrals" min="0" max="20" value=(vm.referrals);

                    button type="submit" class="primary" { "Recalculate" }
                }

                section class="card" id="rate-result" {
                    table {
                        tbody {
                            tr { td { "Volume rate" } td { (pct(r.volume_rate_percent)) } }
                            tr { td { "Referral discount" } td { "−" (pct(r.referral_discount_percent)) } }
                            tr class="total" { td { "Your rate" } td { strong { (pct(r.final_rate_percent)) } } }
                            tr { td { "Saving vs. base" } td { (pct(r.savings_percent)) } }
                        }
                    }
                    p {
                        "Approximate yearly saving: "
                        strong { (format!("{:.0}", r.yearly_savings)) " €" }
                    }
                    p class="microcopy" {
                        "Rough projection assuming " (format!("{ASSUMED_MONTHLY_RENT:.0}")) " € rent per property per month. "
                        "Not a quote."
                    }
                }

                table class="card tiers" {
                    thead { tr { th { "Properties" } th { "Rate" } } }
                    tbody {
                        tr { td { "1" } td { "15%" } }
                        tr { td { "2" } td { "14%" } }
                        tr { td { "3 – 5" } td { "13%" } }
                        tr { td { "6 – 10" } td { "12%" } }
                        tr { td { "More than 10" } td { "10%" } }
                    }
                }
            }
        },
    )
}

fn pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}
