//! HTML rendering for the schedule page.
//!
//! The page is a single self-contained document: a number form, and (when a
//! schedule is present) one row per assignment classed by its water level
//! bucket, plus a total count.

use drs_schedule::bucket::LevelBucket;
use drs_schedule::release::ReleaseAssignment;

/// Inline stylesheet, dark theme.
const STYLE: &str = r#"
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #121212;
    color: #FFFFFF;
    margin: 0;
    padding: 0;
    display: flex;
    justify-content: center;
    align-items: center;
    height: 100vh;
    flex-direction: column;
    transition: background-color 0.5s;
}
h1 {
    color: #FFFFFF;
    margin-bottom: 20px;
    font-size: 2.5rem;
    animation: fadeIn 1.5s ease-in-out;
}
.form-container {
    margin-bottom: 20px;
    text-align: center;
}
.form-container input[type="number"] {
    padding: 10px;
    font-size: 16px;
    border: 1px solid #333;
    border-radius: 5px;
    margin-right: 10px;
    color: #000;
    max-width: 200px;
}
.form-container input[type="submit"] {
    padding: 10px 20px;
    background-color: #1E90FF;
    color: #FFFFFF;
    border: none;
    border-radius: 5px;
    cursor: pointer;
    font-size: 16px;
    transition: background-color 0.3s;
}
.form-container input[type="submit"]:hover {
    background-color: #1C86EE;
}
.schedule-container {
    padding: 15px;
    border: 1px solid #333;
    background-color: #1C1C1C;
    max-width: 80%;
    border-radius: 10px;
    margin-top: 20px;
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.5);
    animation: slideUp 1.5s ease-out;
}
.schedule-item {
    padding: 10px;
    border-bottom: 1px solid #333;
    font-size: 18px;
    transition: transform 0.2s, background-color 0.3s;
}
.schedule-item.low {
    background-color: #32CD32;
}
.schedule-item.medium {
    background-color: #FFA500;
}
.schedule-item.high {
    background-color: #DC143C;
}
.schedule-item:hover {
    transform: scale(1.05);
    background-color: #F08080;
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideUp {
    from { transform: translateY(20px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
@media (max-width: 600px) {
    h1 { font-size: 2rem; }
    .form-container input[type="number"],
    .form-container input[type="submit"] { font-size: 14px; }
    .schedule-item { font-size: 16px; }
}
"#;

const FORM: &str = r#"<div class="form-container">
<form method="post" id="damForm">
<input type="number" id="num_dams" name="num_dams" min="1" placeholder="Enter number of dams" required>
<input type="submit" value="Get Schedule">
</form>
</div>
"#;

/// Render the schedule page. An empty schedule renders just the form.
pub fn page(schedule: &[ReleaseAssignment]) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>Dam Release Schedule</title>\n");
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>Dam Release Schedule</h1>\n");
    html.push_str(FORM);

    if !schedule.is_empty() {
        html.push_str("<div class=\"schedule-container\">\n<h2>Release Schedule</h2>\n");
        for assignment in schedule {
            let bucket = LevelBucket::classify(assignment.water_level);
            html.push_str(&format!(
                "<div class=\"schedule-item {}\">{} should release water at {}.</div>\n",
                bucket.css_class(),
                escape(&assignment.name),
                assignment.release_time
            ));
        }
        html.push_str(&format!(
            "<p><strong>Total number of dams to release water: {}</strong></p>\n",
            schedule.len()
        ));
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for text interpolated from the spreadsheet.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, page};
    use drs_schedule::release::ReleaseAssignment;

    fn assignment(name: &str, release_time: &'static str, level: Option<f64>) -> ReleaseAssignment {
        ReleaseAssignment {
            name: name.to_string(),
            release_time,
            water_level: level,
        }
    }

    #[test]
    fn test_empty_schedule_renders_form_only() {
        let html = page(&[]);
        assert!(html.contains("name=\"num_dams\""));
        assert!(html.contains("<form method=\"post\""));
        assert!(!html.contains("schedule-container"));
        assert!(!html.contains("Total number of dams"));
    }

    #[test]
    fn test_schedule_rows_carry_bucket_classes() {
        let schedule = vec![
            assignment("Srisailam", "8:00 AM", Some(264.2)),
            assignment("Kadem", "12:00 PM", Some(88.4)),
            assignment("Dindi", "4:00 PM", Some(42.8)),
            assignment("Musi", "8:00 PM", None),
        ];
        let html = page(&schedule);
        assert!(html.contains("schedule-item high\">Srisailam should release water at 8:00 AM."));
        assert!(html.contains("schedule-item medium\">Kadem should release water at 12:00 PM."));
        assert!(html.contains("schedule-item low\">Dindi should release water at 4:00 PM."));
        assert!(html.contains("schedule-item low\">Musi should release water at 8:00 PM."));
        assert!(html.contains("Total number of dams to release water: 4"));
    }

    #[test]
    fn test_names_are_escaped() {
        let schedule = vec![assignment("<script>alert(1)</script>", "8:00 AM", Some(10.0))];
        let html = page(&schedule);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tank & Bund"), "Tank &amp; Bund");
        assert_eq!(escape("a<b>\"c'"), "a&lt;b&gt;&quot;c&#39;");
        assert_eq!(escape("Srisailam"), "Srisailam");
    }
}
