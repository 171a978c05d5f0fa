//! Status distribution bar
//!
//! Renders a proportional bar with one colored segment per job status,
//! followed by a row of `label count` pairs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::models::{Counts, JobStatus};
use crate::ui::theme::{status_color, COLOR_DIM};

// ============================================================================
// Block Characters
// ============================================================================

const BLOCK_FILLED: char = '\u{2588}'; // Full block

/// Track shown when there is nothing to distribute
const BLOCK_LIGHT: char = '\u{2591}'; // Light shade

// ============================================================================
// Segments
// ============================================================================

/// One status slice of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Wire value, e.g. `APPLIED`
    pub key: String,
    pub label: String,
    pub count: u64,
    pub color: Color,
}

/// Build the segments for the non-zero status counts.
///
/// Known statuses come first in their declared order, then any status the
/// client does not know about in key order.
pub fn segments_from_counts(counts: &Counts) -> Vec<Segment> {
    let known = JobStatus::ALL.iter().filter_map(|status| {
        let count = counts.get(status.as_str()).copied().unwrap_or(0);
        (count > 0).then(|| Segment {
            key: status.as_str().to_string(),
            label: status.label().to_string(),
            count,
            color: status_color(status.as_str()),
        })
    });

    let unknown = counts
        .iter()
        .filter(|(key, count)| **count > 0 && key.parse::<JobStatus>().is_err())
        .map(|(key, count)| Segment {
            key: key.clone(),
            label: key.clone(),
            count: *count,
            color: status_color(key),
        });

    known.chain(unknown).collect()
}

/// Calculate proportional widths for each count.
///
/// The widths always sum to `total_width`: each segment gets the floor of its
/// share and the rounding remainder goes to the largest segment. When every
/// count is zero all widths are zero.
pub fn calculate_segment_widths(counts: &[u64], total_width: u16) -> Vec<u16> {
    let total = counts
        .iter()
        .fold(0u128, |acc, &c| acc.saturating_add(u128::from(c)));
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut widths: Vec<u16> = counts
        .iter()
        .map(|&count| {
            let share = u128::from(count) * u128::from(total_width) / total;
            u16::try_from(share).unwrap_or(total_width)
        })
        .collect();

    let used = widths.iter().fold(0u16, |acc, &w| acc.saturating_add(w));
    let remainder = total_width.saturating_sub(used);
    if remainder > 0 {
        let largest = counts
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(i, _)| i);
        if let Some(i) = largest {
            widths[i] = widths[i].saturating_add(remainder);
        }
    }

    widths
}

// ============================================================================
// Public API
// ============================================================================

/// Render the bar (row 0) and its labels (row 1).
///
/// ```text
/// ██████████████████████████████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░
/// ■ Wishlist 4  ■ Applied 12  ■ Interview 2
/// ```
pub fn render(frame: &mut Frame, area: Rect, status_counts: &Counts) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let segments = segments_from_counts(status_counts);
    let counts: Vec<u64> = segments.iter().map(|s| s.count).collect();
    let widths = calculate_segment_widths(&counts, area.width);

    let buf = frame.buffer_mut();
    render_proportional_bar(buf, area, &segments, &widths);
    render_labels(buf, area, &segments);
}

// ============================================================================
// Rendering
// ============================================================================

fn render_proportional_bar(buf: &mut Buffer, area: Rect, segments: &[Segment], widths: &[u16]) {
    let y = area.y;
    let right = area.right();

    if segments.is_empty() {
        let style = Style::default().fg(COLOR_DIM);
        for x in area.x..right {
            buf[(x, y)].set_char(BLOCK_LIGHT).set_style(style);
        }
        return;
    }

    let mut x = area.x;
    for (segment, width) in segments.iter().zip(widths) {
        let style = Style::default().fg(segment.color);
        for _ in 0..*width {
            if x < right {
                buf[(x, y)].set_char(BLOCK_FILLED).set_style(style);
                x += 1;
            }
        }
    }
}

fn render_labels(buf: &mut Buffer, area: Rect, segments: &[Segment]) {
    let y = area.y + 1;
    let right = area.right();
    let mut x = area.x;

    for segment in segments {
        let text = format!("{} {}", segment.label, segment.count);
        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        // Swatch + space + text
        let needed = text_width.saturating_add(2);
        if needed > right.saturating_sub(x) {
            break;
        }

        buf[(x, y)]
            .set_char('■')
            .set_style(Style::default().fg(segment.color));
        x += 2;
        buf.set_string(x, y, &text, Style::default().fg(COLOR_DIM));
        x = x.saturating_add(text_width).saturating_add(2);
    }
}

// ============================================================================
// Tests
// ============================================================================
