use std::io::IsTerminal;
use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{Width, terminal_size};

use crate::directory::{BuiltinCareer, CareerDetail, DetailSource};
use crate::history::QuizRecord;
use crate::scoring::{
    combination_key, split_career, AnswerSequence, Category, QuizOutcome, QuizResult,
};

/// Width of the score bars in the result view
const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Fit a line to the terminal; pipes get the full text
pub(crate) fn fit(text: &str, used: usize) -> String {
    match get_terminal_width() {
        Some(width) if width > used + 10 => truncate_title(text, width - used),
        Some(_) => truncate_title(text, 20),
        None => text.to_string(),
    }
}

/// Horizontal bar proportional to `score / max_score`
pub fn score_bar(score: f64, max_score: f64, width: usize) -> String {
    let ratio = if max_score > 0.0 {
        (score / max_score).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn format_career_line(index: usize, entry: &str, use_colors: bool) -> String {
    let (title, description) = split_career(entry);
    let prefix = format!("  {:>2}. ", index + 1);
    let line = match description {
        Some(d) => format!("{} – {}", title, d),
        None => title.to_string(),
    };
    let line = fit(&line, prefix.chars().count());

    if use_colors {
        // Bold only the title part
        match line.split_once(" – ") {
            Some((t, rest)) => format!("{}{} – {}", prefix, t.bold(), rest.dimmed()),
            None => format!("{}{}", prefix, line.bold()),
        }
    } else {
        format!("{}{}", prefix, line)
    }
}

/// Human-readable quiz result: headline, score breakdown, suggested careers
pub fn format_quiz_result(result: &QuizResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let headline = result.cluster_name();
    if use_colors {
        lines.push(format!("Your career cluster: {}", headline.bold().cyan()));
        lines.push(result.cluster_description().italic().to_string());
    } else {
        lines.push(format!("Your career cluster: {}", headline));
        lines.push(result.cluster_description().to_string());
    }

    match &result.outcome {
        QuizOutcome::Single { primary, .. } => {
            lines.push(String::new());
            lines.push(primary.style.to_string());
        }
        QuizOutcome::Paired {
            category,
            secondary_category,
            secondary,
            blended,
            ..
        } => {
            lines.push(String::new());
            lines.push(format!(
                "Close second: {} ({})",
                secondary.name,
                combination_key(*category, *secondary_category)
            ));
            if blended.is_empty() {
                lines.push("No blended careers for this pairing; showing your top cluster.".to_string());
            }
        }
        QuizOutcome::Mixed { profile } => {
            lines.push(String::new());
            lines.push(profile.style.to_string());
        }
    }

    // Score breakdown, highest first
    lines.push(String::new());
    lines.push(if use_colors {
        "Scores".bold().to_string()
    } else {
        "Scores".to_string()
    });
    let max = result.scores.max();
    for (category, score) in result.scores.ranked() {
        let label = format!("  {} {:<9}", category.label(), category.short_name());
        let value = format!("{:>5.1}", score);
        let bar = score_bar(score, max, BAR_WIDTH);
        if use_colors {
            let is_top = result.outcome.primary_category() == Some(category)
                || result.outcome.secondary_category() == Some(category);
            if is_top {
                lines.push(format!("{} {} {}", label.bold(), value.bold(), bar.green()));
            } else {
                lines.push(format!("{} {} {}", label, value, bar.dimmed()));
            }
        } else {
            lines.push(format!("{} {} {}", label, value, bar));
        }
    }
    if result.social_bonus_applied {
        lines.push(format!(
            "  (+0.2 to {} for your answer to the last question)",
            Category::D.short_name()
        ));
    }

    lines.push(String::new());
    lines.push(if use_colors {
        "Suggested careers".bold().to_string()
    } else {
        "Suggested careers".to_string()
    });
    for (i, entry) in result.careers().iter().enumerate() {
        lines.push(format_career_line(i, entry, use_colors));
    }

    lines.join("\n")
}

/// Machine-readable quiz result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport<'a> {
    pub answers: Vec<String>,
    pub cluster: String,
    pub cluster_description: &'a str,
    pub careers: Vec<&'a str>,
    pub result: &'a QuizResult,
}

impl<'a> QuizReport<'a> {
    pub fn new(result: &'a QuizResult, answers: &AnswerSequence) -> Self {
        Self {
            answers: answers.to_codes(),
            cluster: result.cluster_name(),
            cluster_description: result.cluster_description(),
            careers: result.careers(),
            result,
        }
    }
}

pub fn format_quiz_json(result: &QuizResult, answers: &AnswerSequence) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&QuizReport::new(result, answers))
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

/// Saved quiz results, newest first
/// Format: "{id}  {age}  {cluster}  ({top careers})"
pub fn format_history(records: &[QuizRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No saved quiz results.".to_string();
    }

    let now = Utc::now();
    records
        .iter()
        .map(|record| {
            let age = format!("{:>4}", format_age(now - record.date));
            let top: Vec<&str> = record
                .careers
                .iter()
                .take(3)
                .map(|c| split_career(c).0)
                .collect();
            let id_width = record.id.len();
            let tail = if top.is_empty() {
                record.cluster.clone()
            } else {
                format!("{}  ({})", record.cluster, top.join(", "))
            };
            let tail = fit(&tail, id_width + age.len() + 4);

            if use_colors {
                format!("{}  {}  {}", record.id.dimmed(), age.yellow(), tail)
            } else {
                format!("{}  {}  {}", record.id, age, tail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full career view
pub fn format_career_detail(detail: &CareerDetail, page_url: &str, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(detail.name.bold().cyan().to_string());
    } else {
        lines.push(detail.name.clone());
    }
    if let Some(ref cluster) = detail.cluster {
        lines.push(format!("  Cluster: {}", cluster));
    }
    if let Some(ref description) = detail.description {
        lines.push(format!("  {}", description));
    }

    let sections = [
        ("Overview", &detail.overview),
        ("Highlights", &detail.highlights),
        ("Industry demand", &detail.industry_demand),
        ("Recommended stream", &detail.recommended_stream),
    ];
    for (label, value) in sections {
        if let Some(v) = value {
            lines.push(String::new());
            lines.push(section_title(label, use_colors));
            lines.push(format!("  {}", v));
        }
    }

    if detail.has_salary() {
        lines.push(String::new());
        lines.push(section_title("Salary", use_colors));
        let levels = [
            ("Starting", &detail.salary_starting),
            ("Experienced", &detail.salary_experienced),
            ("Senior", &detail.salary_senior),
        ];
        for (label, value) in levels {
            if let Some(v) = value {
                lines.push(format!("  {:<12} {}", label, v));
            }
        }
    }

    if !detail.education_pathway.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Education pathway", use_colors));
        for (i, step) in detail.education_pathway.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, step));
        }
    }

    if !detail.related.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Related careers", use_colors));
        for related in &detail.related {
            if use_colors {
                lines.push(format!("  {} {}", related.name, related.slug.dimmed()));
            } else {
                lines.push(format!("  {} ({})", related.name, related.slug));
            }
        }
    }

    lines.push(String::new());
    let source = match detail.source {
        DetailSource::Hosted => "career directory",
        DetailSource::Builtin => "built-in career list",
    };
    if use_colors {
        lines.push(format!("{} {}", page_url.underline(), format!("[{}]", source).dimmed()));
    } else {
        lines.push(format!("{} [{}]", page_url, source));
    }

    lines.join("\n")
}

pub(crate) fn section_title(label: &str, use_colors: bool) -> String {
    if use_colors {
        label.bold().to_string()
    } else {
        label.to_string()
    }
}

/// Browse list: one career per line with its slug
/// Format: "{slug}  {title}  [{cluster}]"
pub fn format_career_list(careers: &[BuiltinCareer], use_colors: bool) -> String {
    if careers.is_empty() {
        return "No careers found.".to_string();
    }

    let slug_width = careers
        .iter()
        .map(|c| c.slug().len())
        .max()
        .unwrap_or(0);

    careers
        .iter()
        .map(|career| {
            let slug = format!("{:<width$}", career.slug(), width = slug_width);
            let cluster = match career.category {
                Some(category) => category.short_name(),
                None => "Mixed",
            };
            let title = fit(career.title(), slug_width + cluster.len() + 6);
            if use_colors {
                format!("{}  {}  {}", slug.dimmed(), title.bold(), format!("[{}]", cluster).cyan())
            } else {
                format!("{}  {}  [{}]", slug, title, cluster)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
