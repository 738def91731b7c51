//! Dashboard Component
//!
//! KPI cards, a monthly sales trend, the pipeline distribution and the
//! recent deals list. Charts are plain proportional markup; no chart
//! library is involved.

use leptos::prelude::*;

use crate::models::format_currency;

struct MonthlySales {
    month: &'static str,
    sales: f64,
    leads: u32,
}

const SALES_DATA: &[MonthlySales] = &[
    MonthlySales { month: "Jan", sales: 65000.0, leads: 120 },
    MonthlySales { month: "Feb", sales: 59000.0, leads: 98 },
    MonthlySales { month: "Mar", sales: 80000.0, leads: 156 },
    MonthlySales { month: "Apr", sales: 81000.0, leads: 143 },
    MonthlySales { month: "May", sales: 96000.0, leads: 167 },
    MonthlySales { month: "Jun", sales: 105000.0, leads: 189 },
];

const PIPELINE_SHARE: &[(&str, u32, &str)] = &[
    ("Qualified", 35, "stage-blue"),
    ("Proposal", 25, "stage-purple"),
    ("Negotiation", 20, "stage-orange"),
    ("Closed Won", 20, "stage-green"),
];

const RECENT_DEALS: &[(&str, &str, &str, u32)] = &[
    ("Acme Corp", "$45,000", "Negotiation", 85),
    ("TechStart Inc", "$32,000", "Proposal", 60),
    ("Global Systems", "$78,000", "Qualified", 40),
    ("Innovation Lab", "$28,000", "Closed Won", 100),
];

#[component]
fn KpiCard(
    title: &'static str,
    value: &'static str,
    delta: &'static str,
    delta_up: bool,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card kpi-card">
            <div class="kpi-head">
                <span class="kpi-title">{title}</span>
                <span class="kpi-icon">{icon}</span>
            </div>
            <div class="kpi-value">{value}</div>
            <div class=if delta_up { "kpi-delta up" } else { "kpi-delta down" }>
                {if delta_up { "▲ " } else { "▼ " }}
                {delta}
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let max_sales = SALES_DATA
        .iter()
        .map(|m| m.sales)
        .fold(0.0f64, f64::max);

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Sales Dashboard"</h1>
                    <p class="page-subtitle">"Track your sales performance and pipeline"</p>
                </div>
            </div>

            <div class="kpi-grid">
                <KpiCard
                    title="Total Revenue"
                    value="$486,000"
                    delta="+12.5% from last month"
                    delta_up=true
                    icon="💲"
                />
                <KpiCard
                    title="Active Deals"
                    value="47"
                    delta="+8 new this week"
                    delta_up=true
                    icon="📈"
                />
                <KpiCard
                    title="New Leads"
                    value="189"
                    delta="-3.2% from last month"
                    delta_up=false
                    icon="🎯"
                />
                <KpiCard
                    title="Conversion Rate"
                    value="24.8%"
                    delta="+2.1% from last month"
                    delta_up=true
                    icon="👥"
                />
            </div>

            <div class="chart-row">
                <div class="card chart-card">
                    <h3 class="chart-title">"Sales Trend"</h3>
                    <div class="bar-chart">
                        {SALES_DATA.iter().map(|m| {
                            let height = (m.sales / max_sales * 100.0).round() as u32;
                            view! {
                                <div class="bar-group">
                                    <div
                                        class="bar"
                                        style=format!("height: {}%;", height)
                                        title=format!("{}: {} / {} leads", m.month, format_currency(m.sales), m.leads)
                                    ></div>
                                    <span class="bar-label">{m.month}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="card chart-card">
                    <h3 class="chart-title">"Pipeline Distribution"</h3>
                    <div class="distribution">
                        {PIPELINE_SHARE.iter().map(|&(label, share, color)| view! {
                            <div class="distribution-row">
                                <span class=format!("stage-dot {}", color)></span>
                                <span class="distribution-label">{label}</span>
                                <div class="distribution-track">
                                    <div
                                        class=format!("distribution-fill {}", color)
                                        style=format!("width: {}%;", share)
                                    ></div>
                                </div>
                                <span class="distribution-share">{format!("{}%", share)}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-title">"Recent Deals"</h3>
                <div class="recent-deals">
                    {RECENT_DEALS.iter().map(|&(company, amount, stage, probability)| view! {
                        <div class="recent-deal-row">
                            <span class="recent-company">{company}</span>
                            <span class="recent-amount">{amount}</span>
                            <span class="badge badge-outline">{stage}</span>
                            <span class="recent-probability">{format!("{}%", probability)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
