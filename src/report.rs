//! Text rendering for simulation results.
//!
//! Presentation only. Everything here is derived from the summary and the
//! configuration that produced it; the engine itself never formats output.

use crate::config::SimConfig;
use crate::summary::SimSummary;

/// Qualitative severity band, matching how CH severity is described when
/// mapping an observed cat to slider values.
fn severity_band(severity: f64) -> &'static str {
    if severity < 0.2 {
        "minimal"
    } else if severity < 0.5 {
        "mild"
    } else if severity < 0.8 {
        "moderate"
    } else {
        "severe"
    }
}

fn control_rating(accuracy: f64) -> &'static str {
    if accuracy >= 0.95 {
        "STEADY - signals almost always arrive intact"
    } else if accuracy >= 0.75 {
        "WOBBLY - visible jitter but most signals arrive"
    } else if accuracy >= 0.4 {
        "IMPAIRED - coordination noticeably degraded"
    } else {
        "SEVERE - most movement signals are disrupted"
    }
}

/// Generate the full text report for one simulation run.
pub fn render(config: &SimConfig, summary: &SimSummary) -> String {
    let mut report = String::new();

    report.push_str("═══════════════════════════════════════════════════════════════\n");
    report.push_str("                  SIGNAL TRANSMISSION REPORT\n");
    report.push_str("               (Cerebellar Hypoplasia Pathway)\n");
    report.push_str("═══════════════════════════════════════════════════════════════\n\n");

    report.push_str(&format!(
        "Condition: {}, severity {:.2} ({}), adaptation {:.2}\n",
        config.condition,
        config.severity,
        severity_band(config.severity),
        config.adaptation
    ));
    let seed_note = match config.seed {
        Some(seed) => format!(", seed {}", seed),
        None => String::new(),
    };
    report.push_str(&format!(
        "Pathway: {} nodes, {} attempts{}\n\n",
        config.node_count, config.attempt_count, seed_note
    ));

    report.push_str("── SIGNAL METRICS ───────────────────────────────────────────────\n");
    report.push_str(&format!(
        "  Total Attempts:      {}\n",
        summary.total_attempts
    ));
    report.push_str(&format!(
        "  Successful Signals:  {}\n",
        summary.successful_signals
    ));
    report.push_str(&format!(
        "  Accuracy:            {:.1}%\n",
        summary.accuracy * 100.0
    ));
    report.push_str(&format!(
        "  Jitter Events:       {}\n",
        summary.jitter_events
    ));
    report.push_str(&format!(
        "  Avg Node Failures:   {:.2}\n\n",
        summary.avg_node_failures
    ));

    report.push_str("── DELIVERY ─────────────────────────────────────────────────────\n");
    let delivered_pct = summary.accuracy * 100.0;
    let disrupted_pct = 100.0 - delivered_pct;
    for (label, pct) in [("Delivered", delivered_pct), ("Disrupted", disrupted_pct)] {
        let bar_len = (pct / 5.0) as usize;
        let bar: String = "█".repeat(bar_len);
        report.push_str(&format!("  {}: {:>5.1}% {}\n", label, pct, bar));
    }
    report.push('\n');

    report.push_str("── COORDINATION ASSESSMENT ──────────────────────────────────────\n");
    report.push_str(&format!(
        "  Severity Band:  {}\n",
        severity_band(config.severity)
    ));
    report.push_str(&format!(
        "  Motor Control:  {}\n",
        control_rating(summary.accuracy)
    ));

    if summary.accuracy < 0.4 {
        report.push_str("  ⚠️  Most attempts blocked - compensation is not keeping up\n");
    }
    if summary.avg_node_failures > f64::from(config.node_count) / 2.0 {
        report.push_str("  ⚠️  Raw failure load exceeds half the pathway\n");
    }
    if summary.accuracy >= 0.9 && summary.avg_node_failures >= 1.0 {
        report.push_str(&format!(
            "  ⚠️  {:.1} failures per signal still delivered - adaptation is masking damage\n",
            summary.avg_node_failures
        ));
    }

    report.push_str("\n═══════════════════════════════════════════════════════════════\n");

    report
}

/// One-line explanations for every reported metric.
pub fn metric_legend() -> &'static str {
    r#"── METRIC GUIDE ─────────────────────────────────────────────────
  Total Attempts:      brain signals sent for movement
  Successful Signals:  signals that transmitted intact
  Accuracy:            fraction of successful movement control
  Jitter Events:       failed signals due to cerebellar disruption
  Avg Node Failures:   broken relay nodes per signal, compensated or not
  Severity:            how damaged the pathway is (closer to 1 = worse)
  Adaptation:          capacity to reroute around broken nodes
"#
}
