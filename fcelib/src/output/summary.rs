//! Summary block for a course.

use crate::query::summary::CourseSummary;

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render the course header and its averages, followed by a blank line.
pub fn format_summary(summary: &CourseSummary<'_>) -> String {
    format!(
        "{} - {} -{}\nAVG. HOURS: {:.1} hrs/wk\nAVG. RATING: {:.1}/5.0\n\n",
        summary.courseno,
        summary.coursename,
        summary.department,
        round_tenth(summary.avg_hours),
        round_tenth(summary.avg_rating),
    )
}
