use anyhow::Result;
use reqwest::Url;
use serde::Deserialize;
use std::fmt;

use crate::directory::hosted::{in_filter, RowId};
use crate::directory::{DetailSource, HostedDirectory};

use super::builtin::{builtin_exam, scholarships};
use super::types::{College, CollegeGuide, CollegeKind, CourseOffering, EntranceExam};

/// Highlights taken from a college description
const MAX_HIGHLIGHTS: usize = 3;

/// Free text that some rows store as a string and others as an array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Non-blank entries; a string is split on line breaks
    pub fn entries(&self) -> Vec<String> {
        let items: Vec<&str> = match self {
            TextOrList::Text(text) => text.lines().collect(),
            TextOrList::List(items) => items.iter().map(String::as_str).collect(),
        };
        items
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Fees and seat counts come back as numbers or as display strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Number(n) => write!(f, "{}", n),
            TextOrNumber::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

fn display(value: Option<TextOrNumber>) -> Option<String> {
    value.map(|v| v.to_string()).filter(|v| !v.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One row of the `college` table
#[derive(Debug, Clone, Deserialize)]
pub struct CollegeRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub description: Option<TextOrList>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub scholarshipdetails: Option<TextOrList>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl CollegeRow {
    fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    fn into_college(self) -> College {
        let location = self.location();
        let highlights = self
            .description
            .as_ref()
            .map(|d| d.entries().into_iter().take(MAX_HIGHLIGHTS).collect())
            .unwrap_or_default();
        let scholarship_details = self
            .scholarshipdetails
            .as_ref()
            .map(|s| s.entries().join("; "))
            .filter(|s| !s.is_empty());

        College {
            name: self.name,
            location,
            kind: CollegeKind::from_label(self.kind.as_deref().unwrap_or_default()),
            rating: self.rating,
            annual_fees: None,
            total_fees: None,
            duration: None,
            seats: None,
            financial_aid: Vec::new(),
            highlights,
            underserved_scholarships: scholarship_details.is_some(),
            scholarship_details,
            phone: non_blank(self.phone),
            email: non_blank(self.email),
            website: non_blank(self.website),
            courses: Vec::new(),
            entrance_exams: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub duration: Option<String>,
}

/// A `college_courses` row with its college and course embedded
#[derive(Debug, Clone, Deserialize)]
pub struct CollegeCourseRow {
    #[serde(default)]
    pub college: Option<CollegeRow>,
    #[serde(default)]
    pub course: Option<CourseRow>,
    #[serde(default)]
    pub annual_fees: Option<TextOrNumber>,
    #[serde(default)]
    pub total_fees: Option<TextOrNumber>,
    #[serde(default)]
    pub seats: Option<TextOrNumber>,
    #[serde(default)]
    pub duration_override: Option<String>,
    #[serde(default)]
    pub admission_process: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CourseLinkRow {
    course_id: RowId,
}

#[derive(Debug, Clone, Deserialize)]
struct ExamLinkRow {
    #[serde(default)]
    entrance_exam: Option<ExamRow>,
}

/// One row of the `entrance_exam` table
#[derive(Debug, Clone, Deserialize)]
pub struct ExamRow {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub eligibility: Option<TextOrList>,
    #[serde(default)]
    pub exam_pattern: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub exam_dates: Option<String>,
    #[serde(default)]
    pub official_website: Option<String>,
}

impl ExamRow {
    /// Convert, filling gaps from the built-in exam table
    pub fn into_exam(self) -> EntranceExam {
        let mut exam = EntranceExam {
            name: self.name.trim().to_string(),
            full_name: None,
            description: non_blank(self.description),
            eligibility: self.eligibility.map(|e| e.entries()).unwrap_or_default(),
            exam_pattern: non_blank(self.exam_pattern),
            difficulty_level: non_blank(self.difficulty_level),
            exam_dates: non_blank(self.exam_dates),
            official_website: non_blank(self.official_website),
        };
        if let Some(known) = builtin_exam(&exam.name) {
            exam.fill_missing(&known);
        }
        exam
    }
}

/// Group course rows by college, first appearance first. A course listed
/// twice for the same college is kept once. The first course's fees, seats
/// and duration stand in for the college's.
pub fn group_college_courses(rows: Vec<CollegeCourseRow>) -> Vec<College> {
    let mut grouped: Vec<(RowId, College, Vec<RowId>)> = Vec::new();

    for row in rows {
        let (Some(college_row), Some(course)) = (row.college, row.course) else {
            continue;
        };

        let index = match grouped.iter().position(|(id, _, _)| *id == college_row.id) {
            Some(index) => index,
            None => {
                let id = college_row.id.clone();
                grouped.push((id, college_row.into_college(), Vec::new()));
                grouped.len() - 1
            }
        };
        let (_, college, course_ids) = &mut grouped[index];
        if course_ids.contains(&course.id) {
            continue;
        }
        course_ids.push(course.id);

        let offering = CourseOffering {
            name: course.name,
            duration: non_blank(row.duration_override).or(non_blank(course.duration)),
            annual_fees: display(row.annual_fees),
            total_fees: display(row.total_fees),
            seats: display(row.seats),
            admission_process: non_blank(row.admission_process),
        };
        if college.courses.is_empty() {
            college.annual_fees.clone_from(&offering.annual_fees);
            college.total_fees.clone_from(&offering.total_fees);
            college.duration.clone_from(&offering.duration);
            college.seats.clone_from(&offering.seats);
        }
        college.courses.push(offering);
    }

    grouped.into_iter().map(|(_, college, _)| college).collect()
}

/// Exams in first-mention order, without repeats
fn unique_exams(links: Vec<ExamLinkRow>) -> Vec<EntranceExam> {
    let mut exams: Vec<EntranceExam> = Vec::new();
    for row in links.into_iter().filter_map(|link| link.entrance_exam) {
        let exam = row.into_exam();
        if !exams.iter().any(|e| e.name.eq_ignore_ascii_case(&exam.name)) {
            exams.push(exam);
        }
    }
    exams
}

impl HostedDirectory {
    pub fn career_courses_url(&self, career_id: &RowId) -> Result<Url> {
        self.table_url(
            "careerpath_courses",
            &[
                ("careerpath_id", format!("eq.{}", career_id)),
                ("select", "course_id".to_string()),
            ],
        )
    }

    pub fn college_courses_url(&self, course_ids: &[RowId]) -> Result<Url> {
        self.table_url(
            "college_courses",
            &[
                ("course_id", in_filter(course_ids)),
                (
                    "select",
                    "*,college:college_id(*),course:course_id(id,name,duration)".to_string(),
                ),
            ],
        )
    }

    pub fn course_exams_url(&self, course_ids: &[RowId]) -> Result<Url> {
        self.table_url(
            "course_entrance_exams",
            &[
                ("course_id", in_filter(course_ids)),
                ("select", "entrance_exam:entranceexam_id(*)".to_string()),
            ],
        )
    }

    pub fn exam_url(&self, name: &str) -> Result<Url> {
        self.table_url(
            "entrance_exam",
            &[
                ("name", format!("ilike.{}", name.trim())),
                ("select", "*".to_string()),
                ("limit", "1".to_string()),
            ],
        )
    }

    /// Colleges and exams for a career slug. `Ok(None)` means the directory
    /// answered but lists no colleges for it.
    pub async fn fetch_college_guide(&self, slug: &str) -> Result<Option<CollegeGuide>> {
        tracing::debug!(slug, "fetching colleges from hosted directory");

        let Some(career) = self.fetch_career_row(slug).await? else {
            return Ok(None);
        };

        let links: Vec<CourseLinkRow> = self.get_rows(self.career_courses_url(&career.id)?).await?;
        let mut course_ids: Vec<RowId> = Vec::new();
        for link in links {
            if !course_ids.contains(&link.course_id) {
                course_ids.push(link.course_id);
            }
        }
        if course_ids.is_empty() {
            return Ok(None);
        }

        let colleges_url = self.college_courses_url(&course_ids)?;
        let exams_url = self.course_exams_url(&course_ids)?;
        let (colleges, exams) = futures::join!(
            self.get_rows::<CollegeCourseRow>(colleges_url),
            self.get_rows::<ExamLinkRow>(exams_url)
        );

        let colleges = group_college_courses(colleges?);
        if colleges.is_empty() {
            return Ok(None);
        }
        // Exams are optional: the colleges alone still make a guide
        let exams = match exams {
            Ok(links) => unique_exams(links),
            Err(e) => {
                tracing::debug!(error = %e, "entrance exams unavailable");
                Vec::new()
            }
        };

        tracing::debug!(
            slug,
            colleges = colleges.len(),
            exams = exams.len(),
            "hosted colleges found"
        );
        Ok(Some(CollegeGuide {
            career_slug: slug.to_string(),
            career_title: career.name,
            colleges,
            exams,
            scholarships: scholarships().to_vec(),
            source: DetailSource::Hosted,
        }))
    }

    /// Fetch one entrance exam by name, case-insensitively
    pub async fn fetch_exam(&self, name: &str) -> Result<Option<EntranceExam>> {
        let rows: Vec<ExamRow> = self.get_rows(self.exam_url(name)?).await?;
        Ok(rows.into_iter().next().map(ExamRow::into_exam))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;

    fn directory() -> HostedDirectory {
        let config = DirectoryConfig {
            url: "https://example.supabase.co".to_string(),
            api_key_env: None,
            timeout: None,
        };
        HostedDirectory::new(&config, "anon-key".to_string()).unwrap()
    }

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    const COLLEGE_COURSES: &str = r#"[
        {
            "id": 1, "college_id": 10, "course_id": 3,
            "annual_fees": "₹8,000/year", "total_fees": 32000, "seats": 150,
            "admission_process": "KCET counselling",
            "college": {
                "id": 10, "name": "UVCE", "city": "Bangalore", "state": "Karnataka",
                "type": "govt", "rating": 4.4,
                "description": ["Oldest engineering college in the state", "", "Strong alumni", "Central campus", "Hostels"],
                "scholarshipdetails": "Fee waiver for EWS",
                "phone": "", "email": "principal@uvce.ac.in"
            },
            "course": {"id": 3, "name": "B.E. Civil", "duration": "4 Years"}
        },
        {
            "id": 2, "college_id": 10, "course_id": 3,
            "college": {"id": 10, "name": "UVCE"},
            "course": {"id": 3, "name": "B.E. Civil", "duration": "4 Years"}
        },
        {
            "id": 3, "college_id": 11, "course_id": 4,
            "duration_override": "5 Years",
            "college": {"id": 11, "name": "Private Tech", "type": "private", "description": "Labs\nIndustry projects"},
            "course": {"id": 4, "name": "B.Arch", "duration": "4 Years"}
        },
        {"id": 4, "college_id": 12, "course_id": 5, "college": null, "course": null}
    ]"#;

    #[test]
    fn test_college_courses_url() {
        let url = directory()
            .college_courses_url(&[RowId::Number(3), RowId::Number(4)])
            .unwrap();
        assert_eq!(url.path(), "/rest/v1/college_courses");
        assert_eq!(query(&url, "course_id").as_deref(), Some("in.(3,4)"));
        assert_eq!(
            query(&url, "select").as_deref(),
            Some("*,college:college_id(*),course:course_id(id,name,duration)")
        );
    }

    #[test]
    fn test_career_courses_and_exam_urls() {
        let dir = directory();
        let url = dir.career_courses_url(&RowId::Text("c9".to_string())).unwrap();
        assert_eq!(url.path(), "/rest/v1/careerpath_courses");
        assert_eq!(query(&url, "careerpath_id").as_deref(), Some("eq.c9"));

        let url = dir.course_exams_url(&[RowId::Number(3)]).unwrap();
        assert_eq!(
            query(&url, "select").as_deref(),
            Some("entrance_exam:entranceexam_id(*)")
        );

        let url = dir.exam_url(" KCET ").unwrap();
        assert_eq!(query(&url, "name").as_deref(), Some("ilike.KCET"));
    }

    #[test]
    fn test_group_college_courses() {
        let rows: Vec<CollegeCourseRow> = serde_json::from_str(COLLEGE_COURSES).unwrap();
        let colleges = group_college_courses(rows);
        assert_eq!(colleges.len(), 2);

        let uvce = &colleges[0];
        assert_eq!(uvce.name, "UVCE");
        assert_eq!(uvce.kind, CollegeKind::Government);
        assert_eq!(uvce.location.as_deref(), Some("Bangalore, Karnataka"));
        assert_eq!(
            uvce.highlights,
            vec!["Oldest engineering college in the state", "Strong alumni", "Central campus"]
        );
        assert!(uvce.underserved_scholarships);
        assert!(uvce.phone.is_none());
        // The repeated course row is dropped
        assert_eq!(uvce.courses.len(), 1);
        assert_eq!(uvce.annual_fees.as_deref(), Some("₹8,000/year"));
        assert_eq!(uvce.total_fees.as_deref(), Some("32000"));
        assert_eq!(uvce.seats.as_deref(), Some("150"));
        assert_eq!(uvce.duration.as_deref(), Some("4 Years"));

        let private = &colleges[1];
        assert_eq!(private.kind, CollegeKind::Private);
        assert!(private.location.is_none());
        assert_eq!(private.highlights, vec!["Labs", "Industry projects"]);
        assert!(!private.underserved_scholarships);
        assert_eq!(private.duration.as_deref(), Some("5 Years"));
    }

    #[test]
    fn test_exam_rows_are_unique_and_filled() {
        let json = r#"[
            {"entrance_exam": {"id": 1, "name": "KCET", "description": "State CET", "eligibility": "12th pass\nKarnataka domicile"}},
            {"entrance_exam": {"id": 1, "name": "kcet"}},
            {"entrance_exam": {"id": 2, "name": "Board Interview", "eligibility": ["Any stream"]}},
            {"entrance_exam": null}
        ]"#;
        let links: Vec<ExamLinkRow> = serde_json::from_str(json).unwrap();
        let exams = unique_exams(links);
        assert_eq!(exams.len(), 2);

        let kcet = &exams[0];
        assert_eq!(kcet.description.as_deref(), Some("State CET"));
        assert_eq!(kcet.eligibility, vec!["12th pass", "Karnataka domicile"]);
        assert_eq!(kcet.official_website.as_deref(), Some("https://kea.kar.nic.in"));

        assert_eq!(exams[1].eligibility, vec!["Any stream"]);
        assert!(exams[1].official_website.is_none());
    }
}
