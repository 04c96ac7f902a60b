//! SVG rendering of a [`PieChart`].

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use num_traits::ToPrimitive;

use super::PieChart;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const CENTER_X: f64 = 210.0;
const CENTER_Y: f64 = 230.0;
const RADIUS: f64 = 160.0;
const LEGEND_X: f64 = 420.0;
const LEGEND_Y: f64 = 150.0;
const LEGEND_ROW: f64 = 28.0;

/// Point on a circle; angles run clockwise from twelve o'clock.
fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (
        CENTER_X + radius * angle.sin(),
        CENTER_Y - radius * angle.cos(),
    )
}

fn sector(start: f64, end: f64, outer: f64, inner: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(outer, start);
    let (ox1, oy1) = polar(outer, end);
    let (ix1, iy1) = polar(inner, end);
    let (ix0, iy0) = polar(inner, start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
    )
}

fn sector_path(start: f64, end: f64, outer: f64, inner: f64) -> String {
    // A single arc cannot start and end on the same point.
    if end - start >= TAU - 1e-9 {
        let mid = start + PI;
        format!(
            "{} {}",
            sector(start, mid, outer, inner),
            sector(mid, end, outer, inner)
        )
    } else {
        sector(start, end, outer, inner)
    }
}

/// Escapes text for use in XML or HTML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the chart as a standalone SVG document.
pub fn render_svg(chart: &PieChart) -> String {
    let total = chart.total_value().to_f64().unwrap_or(0.0);
    let inner = RADIUS * chart.hole.clamp(0.0, 0.95);
    let label_radius = (RADIUS + inner) / 2.0;

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{title}">"#,
        title = escape_xml(&chart.title)
    );
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="40" text-anchor="middle" font-family="sans-serif" font-size="20" font-weight="bold">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape_xml(&chart.title)
    );

    let mut angle = 0.0;
    for slice in &chart.slices {
        let value = slice.value.to_f64().unwrap_or(0.0);
        if total <= 0.0 || value <= 0.0 {
            continue;
        }
        let sweep = value / total * TAU;
        let end = angle + sweep;
        let _ = writeln!(
            svg,
            r##"<path d="{d}" fill="{color}" stroke="#ffffff" stroke-width="2"><title>{label}: {share}%</title></path>"##,
            d = sector_path(angle, end, RADIUS, inner),
            color = escape_xml(&slice.color),
            label = escape_xml(&slice.label),
            share = slice.share_pct,
        );
        let (lx, ly) = polar(label_radius, angle + sweep / 2.0);
        let _ = writeln!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" dominant-baseline="middle" font-family="sans-serif" font-size="13">{share}%</text>"#,
            share = slice.share_pct,
        );
        angle = end;
    }

    for (i, slice) in chart.slices.iter().enumerate() {
        let y = LEGEND_Y + LEGEND_ROW * i as f64;
        let _ = writeln!(
            svg,
            r#"<rect x="{LEGEND_X}" y="{ry:.2}" width="16" height="16" rx="3" fill="{color}"/>"#,
            ry = y - 12.0,
            color = escape_xml(&slice.color),
        );
        let _ = writeln!(
            svg,
            r#"<text x="{tx}" y="{y:.2}" font-family="sans-serif" font-size="14">{label} ({share}%)</text>"#,
            tx = LEGEND_X + 26.0,
            label = escape_xml(&slice.label),
            share = slice.share_pct,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{compute_allocation, AllocationPlan, AssetBucket, HouseholdProfile};
    use crate::chart::PieSlice;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn renders_one_path_per_slice_with_legend() {
        let chart = PieChart::from_plan(&compute_allocation(&HouseholdProfile::default()));
        let svg = render_svg(&chart);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 4);
        assert_eq!(svg.matches("<rect").count(), 4);
        assert!(svg.contains("3-person household allocation plan"));
        assert!(svg.contains("Insurance (42.4%)"));
        assert!(svg.contains(r##"fill="#66C5CC""##));
    }

    #[test]
    fn escapes_text() {
        let mut chart = PieChart::from_plan(&compute_allocation(&HouseholdProfile::default()));
        chart.title = "Tom & Jerry <plan>".to_string();
        let svg = render_svg(&chart);
        assert!(svg.contains("Tom &amp; Jerry &lt;plan&gt;"));
        assert!(!svg.contains("<plan>"));
    }

    #[test]
    fn full_circle_slice_is_split_into_two_arcs() {
        let chart = PieChart {
            title: "solo".to_string(),
            hole: 0.3,
            slices: vec![PieSlice {
                bucket: AssetBucket::Cash,
                label: "Cash".to_string(),
                value: dec!(1),
                share_pct: dec!(100),
                color: "#66C5CC".to_string(),
            }],
        };
        let svg = render_svg(&chart);
        let path = svg.lines().find(|l| l.starts_with("<path")).unwrap();
        assert_eq!(path.matches('M').count(), 2);
    }

    #[test]
    fn zero_weight_slices_are_not_drawn() {
        let plan = AllocationPlan {
            family_members: 2,
            cash_pct: dec!(0.5),
            fixed_income_pct: Decimal::ZERO,
            equity_pct: dec!(0.5),
            insurance_pct: Decimal::ZERO,
        };
        let svg = render_svg(&PieChart::from_plan(&plan));
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches("<rect").count(), 4);
    }
}
