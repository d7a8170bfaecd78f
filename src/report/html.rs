//! Self-contained HTML newsletter body.
//!
//! One card per ticker, colored purely off the zone score band so severity
//! rendering never drifts from classification. Errored tickers get a
//! distinct error card.

use chrono::NaiveDate;

use crate::models::signal::{SignalResult, TickerReport, Zone};

/// Everything the renderer needs besides the per-ticker reports.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub date: NaiveDate,
    pub force_buy: bool,
    pub volatility_threshold_pct: f64,
}

/// Card accent color for a zone score band.
fn zone_color(score: i32) -> &'static str {
    match score {
        s if s >= 100 => "#10b981",
        s if s >= 90 => "#0ea5e9",
        s if s >= 75 => "#8b5cf6",
        s if s >= 60 => "#f59e0b",
        s if s >= 30 => "#f97316",
        _ => "#ef4444",
    }
}

/// Recommendation row: CSS class and text.
fn recommendation(signal: &SignalResult, force_buy: bool) -> (&'static str, String) {
    if force_buy || signal.buy_signal {
        let text = match signal.zone {
            Zone::Goated => "GOATED PRICE - STRONG ACCUMULATE",
            Zone::Excellent => "EXCELLENT PRICE - ACCUMULATE",
            Zone::Great => "GREAT PRICE - ACCUMULATE",
            _ => "GOOD PRICE - ACCUMULATE",
        };
        ("buy", text.to_string())
    } else if signal.zone_score >= 60 {
        ("hold", "WAIT - Approaching good price".to_string())
    } else {
        ("avoid", "AVOID - Price too high".to_string())
    }
}

fn render_error_card(report: &TickerReport) -> String {
    format!(
        r#"<div class="error-card"><strong>Error analyzing {}:</strong> {}</div>"#,
        report.ticker,
        report.error.as_deref().unwrap_or("unavailable")
    )
}

fn render_trend_rows(signal: &SignalResult) -> String {
    signal
        .trends
        .iter()
        .zip(&signal.deviations)
        .map(|(trend, dev)| {
            let class = if dev.pct < 0.0 { "diff-down" } else { "diff-up" };
            format!(
                r#"<tr><td>{h} EMA</td><td>{v:.2}</td><td class="{class}">{d:+.1}%</td></tr>"#,
                h = trend.horizon,
                v = trend.value,
                class = class,
                d = dev.pct
            )
        })
        .collect()
}

fn render_card(report: &TickerReport, force_buy: bool) -> String {
    let Some(signal) = report.signal.as_ref() else {
        return render_error_card(report);
    };

    let color = zone_color(signal.zone_score);
    let (rec_class, rec_text) = recommendation(signal, force_buy);

    format!(
        r#"<div class="card" style="border-top-color: {color}">
  <div class="card-header">
    <div class="card-title">{ticker}</div>
    <div class="zone-class" style="background: {color}22; color: {color}">{zone} ({reason})</div>
  </div>
  <div class="price-container">
    <div class="price-box"><div class="price-label">CURRENT PRICE</div><div class="price-value">{close:.2}</div></div>
    <div class="price-box"><div class="price-label">VOLATILITY</div><div class="price-value">{vol:.1}%</div></div>
  </div>
  <table class="ma-table">
    <tr><th>EMA</th><th>Value</th><th>Difference</th></tr>
    {rows}
  </table>
  <div class="recommendation {rec_class}">{rec_text}</div>
</div>"#,
        color = color,
        ticker = report.ticker,
        zone = signal.zone,
        reason = signal.reason,
        close = signal.last_close,
        vol = signal.volatility_pct,
        rows = render_trend_rows(signal),
        rec_class = rec_class,
        rec_text = rec_text
    )
}

fn render_legend() -> String {
    let entries = [
        ("#10b981", "Goated Zone (100)"),
        ("#0ea5e9", "Excellent Zone (90)"),
        ("#8b5cf6", "Great Zone (75)"),
        ("#f59e0b", "Good Zone (60)"),
        ("#f97316", "Caution Zone (30-59)"),
        ("#ef4444", "Avoid Zone (<30)"),
    ];
    entries
        .iter()
        .map(|(color, text)| {
            format!(
                r#"<div class="legend-item"><div class="legend-color" style="background: {}"></div><div>{}</div></div>"#,
                color, text
            )
        })
        .collect()
}

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; background: #f8fafc; color: #1e293b; line-height: 1.6; padding: 20px; }
.container { max-width: 1000px; margin: 0 auto; background: white; border-radius: 12px; overflow: hidden; }
.header { background: linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%); color: white; text-align: center; padding: 25px 20px; }
.header h1 { margin: 0; font-size: 1.8rem; }
.date-badge { display: inline-block; background: rgba(255,255,255,0.15); padding: 5px 12px; border-radius: 20px; margin-top: 12px; font-size: 0.9rem; }
.force-buy-notice { background: #fffbeb; padding: 15px; text-align: center; border-bottom: 1px solid #fde68a; }
.cards-container { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; padding: 25px; }
.card { background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border-top: 4px solid; }
.card-header { padding: 15px 20px; border-bottom: 1px solid #e2e8f0; display: flex; justify-content: space-between; align-items: center; }
.card-title { font-weight: 600; font-size: 1.1rem; }
.zone-class { font-weight: 600; padding: 4px 10px; border-radius: 20px; font-size: 0.85rem; }
.price-container { display: flex; padding: 15px 20px; border-bottom: 1px solid #e2e8f0; }
.price-box { flex: 1; }
.price-label { font-size: 0.9rem; color: #64748b; margin-bottom: 5px; }
.price-value { font-weight: 700; font-size: 1.4rem; }
.ma-table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
.ma-table th, .ma-table td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #e2e8f0; }
.ma-table th { font-weight: 600; color: #64748b; background: #f8fafc; }
.diff-down { color: #10b981; font-weight: 600; }
.diff-up { color: #ef4444; font-weight: 600; }
.recommendation { padding: 15px; text-align: center; font-weight: 700; border-top: 1px solid #e2e8f0; }
.buy { background: #d1fae5; color: #065f46; }
.hold { background: #fef3c7; color: #92400e; }
.avoid { background: #fee2e2; color: #991b1b; }
.footer { background: #f1f5f9; padding: 25px; text-align: center; border-top: 1px solid #e2e8f0; }
.legend { display: flex; flex-wrap: wrap; justify-content: center; gap: 15px; margin-bottom: 20px; }
.legend-item { display: flex; align-items: center; gap: 8px; font-size: 0.85rem; }
.legend-color { width: 12px; height: 12px; border-radius: 50%; }
.disclaimer { font-size: 0.8rem; color: #64748b; max-width: 700px; margin: 0 auto; }
.error-card { background: #fee2e2; border-radius: 8px; padding: 20px; color: #991b1b; font-weight: 500; }
"#;

/// Render the full newsletter body.
pub fn render(reports: &[TickerReport], meta: &ReportMeta) -> String {
    let notice = if meta.force_buy {
        r#"<div class="force-buy-notice">Monthly Reminder: last trading day of the month. Recommended to accumulate if not done already.</div>"#
    } else {
        ""
    };

    let cards: String = reports
        .iter()
        .map(|r| render_card(r, meta.force_buy))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Accumulation Zone Report</title><style>{style}</style></head>
<body>
<div class="container">
  <div class="header">
    <h1>Accumulation Zone Report</h1>
    <p>Multi-horizon EMA strategy</p>
    <div class="date-badge">{date}</div>
  </div>
  {notice}
  <div class="cards-container">
  {cards}
  </div>
  <div class="footer">
    <div class="legend">{legend}</div>
    <div class="disclaimer">
      Buy signals trigger only in a Great-or-better accumulation zone with
      volatility at or below {threshold:.1}%. Volatility is annualized.
      Always conduct your own research.
    </div>
  </div>
</div>
</body>
</html>"#,
        style = STYLE,
        date = meta.date.format("%d %B %Y"),
        notice = notice,
        cards = cards,
        legend = render_legend(),
        threshold = meta.volatility_threshold_pct
    )
}
