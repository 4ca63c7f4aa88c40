pub mod builtin;
pub mod hosted;
pub mod types;

pub use builtin::{aid_note, builtin_college_careers, builtin_exam, builtin_guide, scholarships};
pub use types::{College, CollegeGuide, CollegeKind, CourseOffering, EntranceExam, Scholarship};

use crate::directory::{generate_slug, CareerDirectory, DirectoryError};

/// Colleges, entrance exams and scholarships for a career name or slug.
///
/// The hosted directory is asked first when configured; the built-in
/// lists cover the careers it has nothing for or when it is unreachable.
pub async fn college_guide(
    directory: &CareerDirectory,
    query: &str,
) -> Result<CollegeGuide, DirectoryError> {
    let slug = generate_slug(query);
    if slug.is_empty() {
        return Err(DirectoryError::NoColleges(query.to_string()));
    }

    let mut hosted_failure = None;
    if let Some(hosted) = directory.hosted() {
        match hosted.fetch_college_guide(&slug).await {
            Ok(Some(guide)) => return Ok(guide),
            Ok(None) => {
                tracing::info!(slug = %slug, "no hosted colleges, using built-in list");
            }
            Err(e) => {
                tracing::warn!("Career directory unavailable, using built-in colleges: {:#}", e);
                hosted_failure = Some(format!("{:#}", e));
            }
        }
    }

    match (builtin_guide(&slug), hosted_failure) {
        (Some(guide), _) => Ok(guide),
        (None, Some(reason)) => Err(DirectoryError::Unavailable {
            query: query.to_string(),
            reason,
        }),
        (None, None) => Err(DirectoryError::NoColleges(query.to_string())),
    }
}

/// Details for one entrance exam, hosted first
pub async fn lookup_exam(
    directory: &CareerDirectory,
    name: &str,
) -> Result<EntranceExam, DirectoryError> {
    if name.trim().is_empty() {
        return Err(DirectoryError::ExamNotFound(name.to_string()));
    }

    let mut hosted_failure = None;
    if let Some(hosted) = directory.hosted() {
        match hosted.fetch_exam(name).await {
            Ok(Some(exam)) => return Ok(exam),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Career directory unavailable, using built-in exams: {:#}", e);
                hosted_failure = Some(format!("{:#}", e));
            }
        }
    }

    match (builtin_exam(name), hosted_failure) {
        (Some(exam), _) => Ok(exam),
        (None, Some(reason)) => Err(DirectoryError::Unavailable {
            query: name.to_string(),
            reason,
        }),
        (None, None) => Err(DirectoryError::ExamNotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;
    use crate::directory::{DetailSource, HostedDirectory};

    /// A directory pointed at a local port nothing listens on
    async fn unreachable_directory() -> CareerDirectory {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = DirectoryConfig {
            url: format!("http://{}", addr),
            api_key_env: None,
            timeout: Some("2s".to_string()),
        };
        CareerDirectory::with_hosted(HostedDirectory::new(&config, "anon-key".to_string()).unwrap())
    }

    #[tokio::test]
    async fn test_builtin_guide_by_career_name() {
        let guide = college_guide(&CareerDirectory::builtin(), "Software Developer")
            .await
            .unwrap();
        assert_eq!(guide.career_slug, "software-developer");
        assert_eq!(guide.source, DetailSource::Builtin);
        assert!(!guide.colleges.is_empty());
    }

    #[tokio::test]
    async fn test_career_without_colleges() {
        let err = college_guide(&CareerDirectory::builtin(), "Nurse")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NoColleges(ref q) if q == "Nurse"));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_unreachable_directory_falls_back() {
        let directory = unreachable_directory().await;
        let guide = college_guide(&directory, "lawyer").await.unwrap();
        assert_eq!(guide.source, DetailSource::Builtin);
        assert_eq!(guide.colleges.len(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_directory_without_builtin_is_network_error() {
        let directory = unreachable_directory().await;
        let err = college_guide(&directory, "Nurse").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_lookup_exam() {
        let directory = CareerDirectory::builtin();
        let exam = lookup_exam(&directory, "kcet").await.unwrap();
        assert_eq!(exam.name, "KCET");

        let err = lookup_exam(&directory, "Dragon Riding Test").await.unwrap_err();
        assert!(matches!(err, DirectoryError::ExamNotFound(_)));
        assert!(matches!(
            lookup_exam(&directory, " ").await,
            Err(DirectoryError::ExamNotFound(_))
        ));
    }
}
