use serde::Serialize;

use crate::directory::DetailSource;

/// Funding model of a college
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollegeKind {
    Government,
    #[serde(rename = "Aided Private")]
    AidedPrivate,
    Private,
}

impl CollegeKind {
    /// Parse the directory's `type` column ("govt", "Government", "aided", ...)
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label == "govt" || label == "government" {
            CollegeKind::Government
        } else if label.contains("aided") {
            CollegeKind::AidedPrivate
        } else {
            CollegeKind::Private
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollegeKind::Government => "Government",
            CollegeKind::AidedPrivate => "Aided Private",
            CollegeKind::Private => "Private",
        }
    }
}

/// A course as offered by one college
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub name: String,
    pub duration: Option<String>,
    pub annual_fees: Option<String>,
    pub total_fees: Option<String>,
    pub seats: Option<String>,
    pub admission_process: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    pub location: Option<String>,
    pub kind: CollegeKind,
    pub rating: Option<f64>,
    pub annual_fees: Option<String>,
    pub total_fees: Option<String>,
    pub duration: Option<String>,
    pub seats: Option<String>,
    pub financial_aid: Vec<String>,
    pub highlights: Vec<String>,
    /// Aid aimed at first-generation and low-income students
    pub underserved_scholarships: bool,
    pub scholarship_details: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub courses: Vec<CourseOffering>,
    /// Exams this college accepts for the career
    pub entrance_exams: Vec<String>,
}

impl College {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceExam {
    pub name: String,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub eligibility: Vec<String>,
    pub exam_pattern: Option<String>,
    pub difficulty_level: Option<String>,
    pub exam_dates: Option<String>,
    pub official_website: Option<String>,
}

impl EntranceExam {
    /// An exam known only by name
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Fill fields the directory left empty from another record of the same exam
    pub fn fill_missing(&mut self, other: &EntranceExam) {
        fn fill(slot: &mut Option<String>, from: &Option<String>) {
            if slot.is_none() {
                slot.clone_from(from);
            }
        }
        fill(&mut self.full_name, &other.full_name);
        fill(&mut self.description, &other.description);
        fill(&mut self.exam_pattern, &other.exam_pattern);
        fill(&mut self.difficulty_level, &other.difficulty_level);
        fill(&mut self.exam_dates, &other.exam_dates);
        fill(&mut self.official_website, &other.official_website);
        if self.eligibility.is_empty() {
            self.eligibility.clone_from(&other.eligibility);
        }
    }

    pub fn is_bare(&self) -> bool {
        self.description.is_none() && self.eligibility.is_empty() && self.exam_pattern.is_none()
    }
}

/// A scholarship scheme open to students of any career
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub name: &'static str,
    pub provider: &'static str,
    pub amount: &'static str,
    pub eligibility: &'static str,
    pub deadline: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub highlight: &'static str,
}

/// Colleges, exams and scholarships for one career
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeGuide {
    pub career_slug: String,
    pub career_title: String,
    pub colleges: Vec<College>,
    pub exams: Vec<EntranceExam>,
    pub scholarships: Vec<Scholarship>,
    pub source: DetailSource,
}

impl CollegeGuide {
    /// Keep only colleges of one kind
    pub fn retain_kind(&mut self, kind: CollegeKind) {
        self.colleges.retain(|c| c.kind == kind);
    }

    pub fn find_college(&self, name: &str) -> Option<&College> {
        self.colleges.iter().find(|c| c.matches_name(name))
    }
}
