use crate::domain::{Summary, SummaryAudit, SummaryLevel};

const MAX_BULLETS: usize = 3;

pub fn summarize(text: &str, level: SummaryLevel) -> Summary {
    let summary = match level {
        SummaryLevel::OneLine => one_line(text),
        SummaryLevel::Bullets => bullets(text),
        SummaryLevel::Detailed => detailed(text),
    };

    Summary {
        level,
        summary,
        audit: SummaryAudit::local(),
    }
}

fn one_line(text: &str) -> String {
    let first = text.split('.').next().unwrap_or(text);
    format!("{first}.")
}

fn bullets(text: &str) -> String {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_BULLETS)
        .map(|s| format!("- {s}."))
        .collect::<Vec<_>>()
        .join("\n")
}

fn detailed(text: &str) -> String {
    format!("Detailed Summary:\n{text}")
}
