use serde::Serialize;

use crate::models::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    Perfect,
    Over,
    Under,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSummary {
    pub total: f64,
    pub status: WeightStatus,
}

impl WeightSummary {
    pub fn of(events: &[Event]) -> Self {
        let total = compute_total_weight(events);
        Self { total, status: status_for(total) }
    }

    pub fn is_perfect(&self) -> bool {
        self.status == WeightStatus::Perfect
    }

    pub fn is_over(&self) -> bool {
        self.status == WeightStatus::Over
    }
}

/// Sum of every event's weight as a percentage, rounded to the hundredth.
/// Weights that hold no number count as zero.
pub fn compute_total_weight(events: &[Event]) -> f64 {
    let total: f64 = events
        .iter()
        .map(|e| parse_weight(&e.weight).unwrap_or(0.0))
        .sum();
    (total * 100.0).round() / 100.0
}

pub fn status_for(total: f64) -> WeightStatus {
    if total == 100.0 {
        WeightStatus::Perfect
    } else if total > 100.0 {
        WeightStatus::Over
    } else {
        WeightStatus::Under
    }
}

/// Keeps only digits and dots, then reads the longest leading decimal, so
/// `" 7.5 % "` is 7.5 and `"1.2.3%"` is 1.2.
fn parse_weight(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    let number = cleaned[..end].trim_end_matches('.');
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if number.starts_with('.') {
        format!("0{}", number).parse().ok()
    } else {
        number.parse().ok()
    }
}
