use chrono::Utc;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::colleges::{aid_note, College, CollegeGuide, CollegeKind, EntranceExam};
use crate::directory::DetailSource;
use crate::history::SavedCollege;

use super::formatter::{fit, format_age, section_title};

fn kind_tag(kind: CollegeKind, use_colors: bool) -> String {
    let tag = format!("[{}]", kind.label());
    if !use_colors {
        return tag;
    }
    match kind {
        CollegeKind::Government => tag.green().to_string(),
        CollegeKind::AidedPrivate => tag.yellow().to_string(),
        CollegeKind::Private => tag.dimmed().to_string(),
    }
}

/// "₹8,000/year (₹32,000 total)"
fn fees_line(college: &College) -> Option<String> {
    match (&college.annual_fees, &college.total_fees) {
        (Some(annual), Some(total)) => Some(format!("{} ({})", annual, total)),
        (Some(fees), None) | (None, Some(fees)) => Some(fees.clone()),
        (None, None) => None,
    }
}

fn format_college(index: usize, college: &College, saved: bool, use_colors: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let mut heading = format!("{}. ", index + 1);
    if use_colors {
        heading.push_str(&college.name.bold().to_string());
    } else {
        heading.push_str(&college.name);
    }
    heading.push_str(&format!("  {}", kind_tag(college.kind, use_colors)));
    if let Some(rating) = college.rating {
        heading.push_str(&format!("  ★ {:.1}", rating));
    }
    if saved {
        heading.push_str(&if use_colors {
            "  (saved)".cyan().to_string()
        } else {
            "  (saved)".to_string()
        });
    }
    lines.push(heading);

    let facts: Vec<String> = [
        college.location.clone(),
        fees_line(college),
        college.duration.clone(),
        college.seats.as_ref().map(|s| format!("{} seats", s)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !facts.is_empty() {
        lines.push(format!("   {}", fit(&facts.join(" | "), 3)));
    }

    if !college.financial_aid.is_empty() {
        lines.push(format!("   Aid: {}", college.financial_aid.join(", ")));
    }
    if !college.highlights.is_empty() {
        lines.push(format!("   Highlights: {}", college.highlights.join(", ")));
    }
    if let Some(ref details) = college.scholarship_details {
        lines.push(format!("   Scholarship: {}", details));
    }
    if college.courses.len() > 1 {
        let names: Vec<&str> = college.courses.iter().map(|c| c.name.as_str()).collect();
        lines.push(format!("   Courses: {}", names.join(", ")));
    }
    if !college.entrance_exams.is_empty() {
        lines.push(format!("   Exams: {}", college.entrance_exams.join(", ")));
    }

    let contact: Vec<&str> = [&college.phone, &college.email, &college.website]
        .into_iter()
        .filter_map(|c| c.as_deref())
        .collect();
    if !contact.is_empty() {
        let contact = contact.join(" | ");
        lines.push(if use_colors {
            format!("   {}", contact.dimmed())
        } else {
            format!("   {}", contact)
        });
    }

    lines
}

/// Colleges, entrance exams, scholarships and the aid terms they use.
/// `saved` holds the names of colleges already saved for this career.
pub fn format_college_guide(guide: &CollegeGuide, saved: &[String], use_colors: bool) -> String {
    let mut lines = Vec::new();

    let title = format!("Colleges for {}", guide.career_title);
    lines.push(if use_colors {
        title.bold().cyan().to_string()
    } else {
        title
    });

    if guide.colleges.is_empty() {
        lines.push("  No colleges match.".to_string());
    }
    for (i, college) in guide.colleges.iter().enumerate() {
        let is_saved = saved.iter().any(|name| college.matches_name(name));
        lines.push(String::new());
        lines.extend(format_college(i, college, is_saved, use_colors));
    }

    if !guide.exams.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Entrance exams", use_colors));
        for exam in &guide.exams {
            let line = match exam.full_name {
                Some(ref full) => format!("{} – {}", exam.name, full),
                None => exam.name.clone(),
            };
            lines.push(format!("  {}", fit(&line, 2)));
        }
    }

    if !guide.scholarships.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Scholarships", use_colors));
        for scholarship in &guide.scholarships {
            let name = if use_colors {
                scholarship.name.bold().to_string()
            } else {
                scholarship.name.to_string()
            };
            lines.push(format!(
                "  {} ({}): {}",
                name, scholarship.provider, scholarship.amount
            ));
            lines.push(format!(
                "     {}. Deadline: {}",
                scholarship.eligibility, scholarship.deadline
            ));
            lines.push(format!("     {}", scholarship.link));
        }
    }

    let mut notes: Vec<(&str, &str)> = Vec::new();
    for aid in guide.colleges.iter().flat_map(|c| c.financial_aid.iter()) {
        if let Some(note) = aid_note(aid) {
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
    }
    if !notes.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Aid terms", use_colors));
        for (term, note) in notes {
            lines.push(format!("  {}: {}", term, note));
        }
    }

    lines.push(String::new());
    let source = match guide.source {
        DetailSource::Hosted => "[career directory]",
        DetailSource::Builtin => "[built-in college list]",
    };
    lines.push(if use_colors {
        source.dimmed().to_string()
    } else {
        source.to_string()
    });

    lines.join("\n")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollegeGuideReport<'a> {
    #[serde(flatten)]
    guide: &'a CollegeGuide,
    saved: Vec<&'a str>,
}

/// Machine-readable guide; `saved` lists the saved colleges that appear in it
pub fn format_college_guide_json(guide: &CollegeGuide, saved: &[String]) -> serde_json::Result<String> {
    let saved = guide
        .colleges
        .iter()
        .filter(|c| saved.iter().any(|name| c.matches_name(name)))
        .map(|c| c.name.as_str())
        .collect();
    serde_json::to_string_pretty(&CollegeGuideReport { guide, saved })
}

/// Full view of one entrance exam
pub fn format_exam(exam: &EntranceExam, use_colors: bool) -> String {
    let mut lines = Vec::new();

    lines.push(if use_colors {
        exam.name.bold().cyan().to_string()
    } else {
        exam.name.clone()
    });
    if let Some(ref full) = exam.full_name {
        lines.push(format!("  {}", full));
    }
    if let Some(ref description) = exam.description {
        lines.push(format!("  {}", description));
    }

    if !exam.eligibility.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Eligibility", use_colors));
        for item in &exam.eligibility {
            lines.push(format!("  - {}", item));
        }
    }

    let sections = [
        ("Pattern", &exam.exam_pattern),
        ("Difficulty", &exam.difficulty_level),
        ("Dates", &exam.exam_dates),
    ];
    for (label, value) in sections {
        if let Some(v) = value {
            lines.push(String::new());
            lines.push(section_title(label, use_colors));
            lines.push(format!("  {}", v));
        }
    }

    if let Some(ref website) = exam.official_website {
        lines.push(String::new());
        lines.push(if use_colors {
            website.underline().to_string()
        } else {
            website.clone()
        });
    }

    if exam.is_bare() {
        lines.push(String::new());
        lines.push("No further details for this exam.".to_string());
    }

    lines.join("\n")
}

/// Saved colleges, newest first
/// Format: "{age}  {name}  [{type}]  {career}"
pub fn format_saved_colleges(colleges: &[SavedCollege], use_colors: bool) -> String {
    if colleges.is_empty() {
        return "No saved colleges.".to_string();
    }

    let now = Utc::now();
    colleges
        .iter()
        .map(|college| {
            let age = format!("{:>4}", format_age(now - college.saved_date));
            let kind = format!("[{}]", college.kind);
            let name = fit(&college.name, age.len() + kind.len() + college.career.len() + 6);
            if use_colors {
                format!(
                    "{}  {}  {}  {}",
                    age.yellow(),
                    name.bold(),
                    kind.dimmed(),
                    college.career.cyan()
                )
            } else {
                format!("{}  {}  {}  {}", age, name, kind, college.career)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colleges::{builtin_exam, builtin_guide};
    use crate::history::{NewSavedCollege, ProfileHistory};
    use chrono::Duration;

    #[test]
    fn test_guide_lists_colleges_exams_and_scholarships() {
        let guide = builtin_guide("lawyer").unwrap();
        let output = format_college_guide(&guide, &[], false);

        assert!(output.starts_with("Colleges for Law & Legal Studies"));
        assert!(output.contains("1. Government Law College  [Government]  ★ 4.4"));
        assert!(output.contains("Exams: CLAT, Karnataka PGCET Law, KSLAT"));
        assert!(output.contains("Entrance exams"));
        assert!(output.contains("CLAT – Common Law Admission Test"));
        assert!(output.contains("Central Sector Scholarship Scheme (Ministry of Education): ₹20,000/year"));
        assert!(output.ends_with("[built-in college list]"));
        assert!(!output.contains("(saved)"));
    }

    #[test]
    fn test_guide_marks_saved_colleges() {
        let guide = builtin_guide("lawyer").unwrap();
        let saved = vec!["government law college".to_string()];
        let output = format_college_guide(&guide, &saved, false);

        assert_eq!(output.matches("(saved)").count(), 1);
        assert!(output.contains("Government Law College  [Government]  ★ 4.4  (saved)"));
    }

    #[test]
    fn test_guide_explains_aid_terms() {
        let guide = builtin_guide("civil-engineer").unwrap();
        let output = format_college_guide(&guide, &[], false);

        assert!(output.contains("Aid terms"));
        assert!(output.contains("  EWS: Economically Weaker Section"));
        assert!(output.contains("  SC/ST: "));
        assert_eq!(output.matches("  EWS: ").count(), 1);
    }

    #[test]
    fn test_government_filter_leaves_only_government() {
        let mut guide = builtin_guide("civil-engineer").unwrap();
        guide.retain_kind(CollegeKind::Government);
        let output = format_college_guide(&guide, &[], false);

        assert!(!output.contains("[Private]"));
        assert!(output.contains("[Government]"));
    }

    #[test]
    fn test_empty_guide() {
        let mut guide = builtin_guide("lawyer").unwrap();
        guide.retain_kind(CollegeKind::Private);
        let output = format_college_guide(&guide, &[], false);
        assert!(output.contains("No colleges match."));
    }

    #[test]
    fn test_guide_json() {
        let guide = builtin_guide("teacher").unwrap();
        let saved = vec!["Christ University (Education)".to_string(), "Elsewhere".to_string()];
        let json: serde_json::Value =
            serde_json::from_str(&format_college_guide_json(&guide, &saved).unwrap()).unwrap();

        assert_eq!(json["careerSlug"], "teacher");
        assert_eq!(json["source"], "builtin");
        assert_eq!(json["colleges"][0]["kind"], "Government");
        assert_eq!(json["colleges"][0]["underservedScholarships"], true);
        assert_eq!(json["saved"], serde_json::json!(["Christ University (Education)"]));
        assert_eq!(json["scholarships"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_format_exam() {
        let exam = builtin_exam("KCET").unwrap();
        let output = format_exam(&exam, false);

        assert!(output.starts_with("KCET\n  Karnataka Common Entrance Test"));
        assert!(output.contains("Eligibility\n  - 12th pass with required subjects"));
        assert!(output.contains("Pattern\n"));
        assert!(output.ends_with("https://kea.kar.nic.in"));
    }

    #[test]
    fn test_format_bare_exam() {
        let output = format_exam(&EntranceExam::named("COMEDK"), false);
        assert_eq!(output, "COMEDK\n\nNo further details for this exam.");
    }

    #[test]
    fn test_format_saved_colleges() {
        assert_eq!(format_saved_colleges(&[], false), "No saved colleges.");

        let mut history = ProfileHistory::new();
        history.save_college(
            NewSavedCollege {
                name: "UVCE".to_string(),
                location: "Bangalore".to_string(),
                kind: "Government".to_string(),
                fees: "₹8,000/year".to_string(),
                career: "civil-engineer".to_string(),
            },
            Utc::now() - Duration::days(2),
        );
        let output = format_saved_colleges(history.saved_colleges(), false);
        assert_eq!(output, "  2d  UVCE  [Government]  civil-engineer");
    }
}
