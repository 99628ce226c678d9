//=============================================================================
// File: src/components/price_chart.rs
//=============================================================================
use api::chart::ChartFrame;
use api::chart::LineSeries;
use api::chart::PlottedSeries;
use dioxus::prelude::*;

const LINE_COLOR: &str = "rgba(75,192,192,1)";
const POINT_COLOR: &str = "rgba(75,192,192,0.4)";

/// Builds the SVG markup for a plotted series: baseline, day ticks, the line
/// and a dot per sample.
fn render_svg(frame: &ChartFrame, plotted: &PlottedSeries, label: &str) -> String {
    let ChartFrame {
        width,
        height,
        padding,
    } = *frame;
    let baseline = height - padding;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" role="img" aria-label="{label}">"#
    );
    svg.push_str(&format!(
        r#"<line x1="{padding}" y1="{baseline}" x2="{x2}" y2="{baseline}" stroke="currentColor" stroke-opacity="0.3"/>"#,
        x2 = width - padding,
    ));

    for tick in &plotted.day_ticks {
        svg.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{padding}" x2="{x:.2}" y2="{baseline}" stroke="currentColor" stroke-opacity="0.1"/><text x="{x:.2}" y="{text_y}" font-size="10" text-anchor="middle" fill="currentColor">{label}</text>"#,
            x = tick.x,
            text_y = height - 6.0,
            label = tick.label,
        ));
    }

    if !plotted.points.is_empty() {
        svg.push_str(&format!(
            r#"<polyline points="{points}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
            points = plotted.points,
        ));
        for point in plotted.points.split(' ') {
            if let Some((x, y)) = point.split_once(',') {
                svg.push_str(&format!(r#"<circle cx="{x}" cy="{y}" r="2.5" fill="{POINT_COLOR}"/>"#));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// A single-line price chart with a day-granular time axis.
#[component]
pub fn PriceChart(series: LineSeries) -> Element {
    let frame = ChartFrame::default();
    let plotted = frame.plot(&series);
    let image = render_svg(&frame, &plotted, series.label);

    let range = match (plotted.min_price, plotted.max_price) {
        (Some(min), Some(max)) => format!("{} ({} points, {min} – {max})", series.label, series.points.len()),
        _ => format!("{} (no data)", series.label),
    };

    rsx! {
        figure {
            style: "margin: 0;",
            div {
                dangerous_inner_html: "{image}"
            }
            figcaption {
                style: "text-align: center; font-size: 14px; margin-top: 8px;",
                "{range}"
            }
        }
    }
}
