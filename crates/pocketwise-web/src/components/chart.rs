//! SVG spending pie and CSS income/expense bars

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;
use pocketwise_core::{
    CategoryTotal, Money, MonthlyFlow, filter_by_account, format::short_month, format_currency, group_by_category,
    monthly_series,
};

use crate::state::use_dashboard;

const VIEW_SIZE: f64 = 400.0;
const OUTER_RADIUS: f64 = 150.0;
/// Wedges thinner than this (radians) get no in-chart label
const MIN_LABEL_SWEEP: f64 = 0.35;

/// One wedge of the spending pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub label: String,
    pub path: String,
    pub color: String,
    pub label_x: f64,
    pub label_y: f64,
    pub sweep: f64,
}

/// Slice fill: hue steps of 45 degrees per category
pub fn slice_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", index * 45)
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Lay out wedges clockwise from twelve o'clock
///
/// A lone category is drawn as two half arcs since a single arc cannot close
/// on its own start point.
pub fn pie_slices(groups: &[CategoryTotal], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: Money = groups.iter().map(|g| g.total).sum();
    if total <= Money::ZERO {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut slices = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let sweep = group.total.as_rupees_f64() / total.as_rupees_f64() * TAU;
        let end = start + sweep;
        let (x1, y1) = point(cx, cy, r, start);
        let (x2, y2) = point(cx, cy, r, end);

        let path = if sweep >= TAU - 1e-9 {
            let (mx, my) = point(cx, cy, r, start + TAU / 2.0);
            format!("M {x1:.2} {y1:.2} A {r} {r} 0 1 1 {mx:.2} {my:.2} A {r} {r} 0 1 1 {x1:.2} {y1:.2} Z")
        } else {
            let large_arc = u8::from(sweep > TAU / 2.0);
            format!("M {cx} {cy} L {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
        };

        let (label_x, label_y) = point(cx, cy, r * 0.65, start + sweep / 2.0);
        slices.push(PieSlice {
            category: group.category.clone(),
            label: format!("{}: {}", group.category, format_currency(group.total)),
            path,
            color: slice_color(i),
            label_x,
            label_y,
            sweep,
        });
        start = end;
    }
    slices
}

/// Width of a bar relative to the largest value, in percent
pub fn bar_percent(value: Money, max: Money) -> f64 {
    value.percent_of(max).clamp(0.0, 100.0)
}

/// Spending by category for the selected account
#[component]
pub fn SpendingChart() -> impl IntoView {
    let state = use_dashboard();
    let groups = Memo::new(move |_| {
        let filter = state.filter.get();
        state
            .dataset
            .with(|d| group_by_category(filter_by_account(&d.transactions, &filter)))
    });
    let center = VIEW_SIZE / 2.0;
    let slices = move || groups.with(|g| pie_slices(g, center, center, OUTER_RADIUS));

    view! {
        <Show
            when=move || !groups.with(Vec::is_empty)
            fallback=|| view! { <p class="muted">"No spending for this account."</p> }
        >
            <div class="chart">
                <svg viewBox=format!("0 0 {VIEW_SIZE} {VIEW_SIZE}") role="img" aria-label="Spending by category">
                    {move || {
                        slices()
                            .into_iter()
                            .map(|s| {
                                let name = (s.sweep > MIN_LABEL_SWEEP).then(|| s.category.clone());
                                view! {
                                    <path d=s.path fill=s.color stroke="#fff"></path>
                                    {name.map(|name| view! {
                                        <text x=s.label_x y=s.label_y text-anchor="middle" class="slice-label">{name}</text>
                                    })}
                                }
                            })
                            .collect_view()
                    }}
                </svg>
                <ul class="legend">
                    {move || {
                        slices()
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <span class="swatch" style=format!("background-color: {}", s.color)></span>
                                        {s.label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}

/// Income and expenses for the trailing months
#[component]
pub fn MonthlyTrend() -> impl IntoView {
    let state = use_dashboard();
    let months = state.config.with_value(|c| c.trend_months);
    let series = Memo::new(move |_| {
        let filter = state.filter.get();
        state.dataset.with(|d| {
            let txns: Vec<_> = filter_by_account(&d.transactions, &filter).into_iter().cloned().collect();
            monthly_series(&txns, months)
        })
    });

    let row = move |flow: MonthlyFlow, max: Money| {
        view! {
            <div class="trend-row">
                <span class="trend-month">{short_month(flow.month)}</span>
                <div class="trend-bars">
                    <div class="bar tone-success" style:width=format!("{:.1}%", bar_percent(flow.inflow, max))>
                        {format_currency(flow.inflow)}
                    </div>
                    <div class="bar tone-error" style:width=format!("{:.1}%", bar_percent(flow.outflow, max))>
                        {format_currency(flow.outflow)}
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="trend">
            {move || {
                let flows = series.get();
                let max = flows.iter().map(|f| f.inflow.max(f.outflow)).max().unwrap_or(Money::ZERO);
                flows.into_iter().map(|f| row(f, max)).collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: &str, rupees: i64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            total: Money::rupees(rupees),
        }
    }

    #[test]
    fn test_pie_sweeps_cover_full_circle() {
        let groups = vec![group("Housing", 15_000), group("Food", 2_500), group("Services", 10_000)];
        let slices = pie_slices(&groups, 200.0, 200.0, 150.0);
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert_eq!(slices[0].label, "Housing: ₹15,000");
        assert_eq!(slices[2].color, "hsl(90, 70%, 50%)");
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let slices = pie_slices(&[group("Big", 3), group("Small", 1)], 200.0, 200.0, 150.0);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_pie_single_category_is_closed_circle() {
        let slices = pie_slices(&[group("Food", 500)], 200.0, 200.0, 150.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_pie_empty_or_zero() {
        assert!(pie_slices(&[], 200.0, 200.0, 150.0).is_empty());
        assert!(pie_slices(&[group("Nothing", 0)], 200.0, 200.0, 150.0).is_empty());
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(Money::rupees(50), Money::rupees(200)), 25.0);
        assert_eq!(bar_percent(Money::rupees(50), Money::ZERO), 0.0);
    }
}
