use std::fmt;

use serde::Serialize;

use crate::sim::Verdict;

/// Ordered verdicts for one input batch, index aligned with the input lines.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub verdicts: Vec<Verdict>,
}

/// Counts over a batch report. Errored lines are counted separately from
/// ordinary rejections even though both end up not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub errored: usize,
}

impl Summary {
    pub fn from_report(report: &BatchReport) -> Summary {
        let mut summary = Summary {
            total: report.verdicts.len(),
            accepted: 0,
            rejected: 0,
            errored: 0,
        };
        for verdict in &report.verdicts {
            if verdict.accepted {
                summary.accepted += 1;
            } else if verdict.error.is_some() {
                summary.errored += 1;
            } else {
                summary.rejected += 1;
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} accepted, {} rejected, {} errored",
            self.total, self.accepted, self.rejected, self.errored
        )
    }
}

// one VALID/INVALID line per verdict, the `.out` format the frontend displays
pub fn render_plain(report: &BatchReport) -> String {
    let mut out = String::new();
    for verdict in &report.verdicts {
        out.push_str(if verdict.accepted { "VALID\n" } else { "INVALID\n" });
    }
    out
}
