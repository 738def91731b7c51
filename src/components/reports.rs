//! Advanced Reports Component
//!
//! Key metrics, monthly performance, conversion funnel with stage-to-stage
//! rates, and team/source analysis tables over the sample datasets.

use leptos::prelude::*;

use crate::models::format_currency;

struct MonthlyPerformance {
    month: &'static str,
    revenue: f64,
    deals: u32,
    leads: u32,
    conversion: f64,
}

const PERFORMANCE: &[MonthlyPerformance] = &[
    MonthlyPerformance { month: "Jan", revenue: 65000.0, deals: 15, leads: 120, conversion: 12.5 },
    MonthlyPerformance { month: "Feb", revenue: 59000.0, deals: 12, leads: 98, conversion: 12.2 },
    MonthlyPerformance { month: "Mar", revenue: 80000.0, deals: 18, leads: 156, conversion: 11.5 },
    MonthlyPerformance { month: "Apr", revenue: 81000.0, deals: 19, leads: 143, conversion: 13.3 },
    MonthlyPerformance { month: "May", revenue: 96000.0, deals: 22, leads: 167, conversion: 13.2 },
    MonthlyPerformance { month: "Jun", revenue: 105000.0, deals: 25, leads: 189, conversion: 13.2 },
];

const FUNNEL: &[(&str, u32, &str)] = &[
    ("Visitors", 10000, "stage-blue"),
    ("Leads", 3500, "stage-purple"),
    ("Qualified", 1200, "stage-orange"),
    ("Proposals", 450, "stage-green"),
    ("Closed Won", 180, "stage-red"),
];

const TEAM: &[(&str, u32, f64, f64)] = &[
    ("Sarah Johnson", 28, 340000.0, 15.2),
    ("Michael Chen", 22, 280000.0, 12.8),
    ("Emily Rodriguez", 25, 315000.0, 14.1),
    ("David Park", 18, 225000.0, 11.5),
    ("Lisa Wang", 20, 250000.0, 13.0),
];

const SOURCES: &[(&str, u32, f64, f64)] = &[
    ("Website", 450, 12.5, 125000.0),
    ("LinkedIn", 320, 15.2, 180000.0),
    ("Referrals", 280, 18.8, 210000.0),
    ("Cold Email", 180, 8.2, 65000.0),
    ("Events", 150, 22.5, 95000.0),
];

#[component]
pub fn Reports() -> impl IntoView {
    let funnel_top = FUNNEL[0].1 as f64;

    view! {
        <div class="page reports-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Advanced Reports"</h1>
                    <p class="page-subtitle">"Comprehensive analytics and insights"</p>
                </div>
                <div class="header-actions">
                    <select class="range-select">
                        <option value="last-7-days">"Last 7 days"</option>
                        <option value="last-30-days">"Last 30 days"</option>
                        <option value="last-3-months">"Last 3 months"</option>
                        <option value="last-6-months" selected>"Last 6 months"</option>
                        <option value="last-year">"Last year"</option>
                    </select>
                    <button class="btn btn-outline">"Export"</button>
                </div>
            </div>

            <div class="stat-grid">
                <div class="card stat-card">
                    <div>
                        <p class="stat-label">"Total Revenue"</p>
                        <p class="stat-value">"$486,000"</p>
                        <p class="stat-note up">"▲ +12.5% vs last period"</p>
                    </div>
                    <div class="stat-icon stage-green">"💲"</div>
                </div>
                <div class="card stat-card">
                    <div>
                        <p class="stat-label">"Deals Closed"</p>
                        <p class="stat-value">"111"</p>
                        <p class="stat-note up">"▲ +8.3% vs last period"</p>
                    </div>
                    <div class="stat-icon stage-blue">"📈"</div>
                </div>
                <div class="card stat-card">
                    <div>
                        <p class="stat-label">"New Leads"</p>
                        <p class="stat-value">"873"</p>
                        <p class="stat-note up">"▲ +15.1% vs last period"</p>
                    </div>
                    <div class="stat-icon stage-orange">"🎯"</div>
                </div>
                <div class="card stat-card">
                    <div>
                        <p class="stat-label">"Conversion Rate"</p>
                        <p class="stat-value">"12.7%"</p>
                        <p class="stat-note down">"▼ -0.8% vs last period"</p>
                    </div>
                    <div class="stat-icon stage-purple">"👥"</div>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-title">"Monthly Performance"</h3>
                <table class="report-table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th>"Revenue"</th>
                            <th>"Deals"</th>
                            <th>"Leads"</th>
                            <th>"Conversion"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {PERFORMANCE.iter().map(|m| view! {
                            <tr>
                                <td>{m.month}</td>
                                <td>{format_currency(m.revenue)}</td>
                                <td>{m.deals}</td>
                                <td>{m.leads}</td>
                                <td>{format!("{:.1}%", m.conversion)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h3 class="chart-title">"Conversion Funnel"</h3>
                <div class="funnel">
                    {FUNNEL.iter().enumerate().map(|(i, &(label, count, color))| {
                        let width = (count as f64 / funnel_top * 100.0).max(4.0);
                        let step_rate = FUNNEL.get(i + 1).map(|&(_, next, _)| {
                            format!("{:.1}% advance", next as f64 / count as f64 * 100.0)
                        });
                        view! {
                            <div class="funnel-row">
                                <span class="funnel-label">{label}</span>
                                <div class="funnel-track">
                                    <div
                                        class=format!("funnel-fill {}", color)
                                        style=format!("width: {:.1}%;", width)
                                    ></div>
                                </div>
                                <span class="funnel-count">{count}</span>
                                <span class="funnel-rate">{step_rate.unwrap_or_default()}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="chart-row">
                <div class="card">
                    <h3 class="chart-title">"Team Performance"</h3>
                    <table class="report-table">
                        <thead>
                            <tr>
                                <th>"Rep"</th>
                                <th>"Deals"</th>
                                <th>"Revenue"</th>
                                <th>"Conversion"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {TEAM.iter().map(|&(name, deals, revenue, conversion)| view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{deals}</td>
                                    <td>{format_currency(revenue)}</td>
                                    <td>{format!("{:.1}%", conversion)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="card">
                    <h3 class="chart-title">"Source Analysis"</h3>
                    <table class="report-table">
                        <thead>
                            <tr>
                                <th>"Source"</th>
                                <th>"Leads"</th>
                                <th>"Conversion"</th>
                                <th>"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {SOURCES.iter().map(|&(name, leads, conversion, revenue)| view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{leads}</td>
                                    <td>{format!("{:.1}%", conversion)}</td>
                                    <td>{format_currency(revenue)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
