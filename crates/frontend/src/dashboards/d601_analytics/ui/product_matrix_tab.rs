use crate::shared::charts::{billions_axis, legend, ScatterChart, ScatterPoint};
use crate::shared::components::{CardAnimated, EmptyState};
use contracts::dashboards::d601_analytics::{MarginBucket, MatrixReference, ProductMatrixPoint};
use contracts::shared::number_format::{
    format_currency, format_grouped, format_ratio,
};
use leptos::prelude::*;

fn margin_axis(value: f64) -> String {
    format_ratio(value, 0)
}

fn to_point(p: &ProductMatrixPoint) -> ScatterPoint {
    ScatterPoint {
        x: p.revenue,
        y: p.margin,
        color: MarginBucket::from_margin(p.margin).color().to_string(),
        label: p.name.clone(),
        details: vec![
            format!("Revenue: {}", format_currency(p.revenue)),
            format!("Margin: {}", format_ratio(p.margin, 1)),
            format!("Profit: {}", format_currency(p.profit)),
            format!("Quantity: {}", format_grouped(p.quantity)),
        ],
    }
}

/// Revenue vs margin bubbles with average reference lines
#[component]
pub fn ProductMatrixTab(points: Vec<ProductMatrixPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <EmptyState message="No product data available" /> }.into_any();
    }

    let reference = MatrixReference::from_points(&points);
    let scatter: Vec<ScatterPoint> = points.iter().map(to_point).collect();

    view! {
        <CardAnimated
            title="Product Matrix"
            subtitle="Revenue vs profit margin. Dashed lines mark the averages."
        >
            <ScatterChart
                points=scatter
                reference=(reference.avg_revenue, reference.avg_margin)
                x_format=billions_axis
                y_format=margin_axis
                x_label="Revenue"
                y_label="Margin %"
            />
            {legend(
                MarginBucket::ALL
                    .into_iter()
                    .map(|b| (b.label().to_string(), b.color().to_string()))
                    .collect(),
            )}
        </CardAnimated>
    }
    .into_any()
}
