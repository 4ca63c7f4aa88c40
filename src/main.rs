use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use disha::directory::{CareerDirectory, DirectoryError};
use disha::history::{JsonFileStore, NewQuizRecord, NewSavedCollege, ProfileStore};
use disha::scoring::{AnswerSequence, Category, QuestionBank, QuizResult};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the quiz in the terminal (default if no subcommand)
    Quiz {
        /// Don't add the result to your history
        #[arg(long)]
        no_save: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Score answers given on the command line, e.g. `aabbccddef` or `a,a,b,b,...`
    Score {
        /// One code (a-f) per question
        #[arg(required = true, num_args = 1..)]
        answers: Vec<String>,

        /// Add the result to your history
        #[arg(long)]
        save: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show or edit saved quiz results
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,

        #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
        format: Format,
    },
    /// Show details for one career
    Career {
        /// Career name or slug, e.g. "Civil Engineer" or civil-engineer
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Open the career's page in your browser
        #[arg(long)]
        open: bool,
    },
    /// Colleges, entrance exams and scholarships for a career
    Colleges {
        /// Career name or slug, e.g. "Software Developer"
        #[arg(required = true, num_args = 1..)]
        career: Vec<String>,

        /// Only government colleges
        #[arg(long)]
        government: bool,

        /// Save a college from this career's list
        #[arg(long, value_name = "COLLEGE", conflicts_with = "unsave")]
        save: Option<String>,

        /// Remove a saved college for this career
        #[arg(long, value_name = "COLLEGE")]
        unsave: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show details for one entrance exam, e.g. KCET or "JEE Main"
    Exam {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Browse the built-in career list
    Careers {
        /// Only careers in this cluster (a-f)
        #[arg(long)]
        cluster: Option<String>,

        /// Only careers whose title or description contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List saved results, newest first (default)
    List,
    /// Delete a saved result by id
    Remove { id: String },
    /// List saved colleges, newest first
    Colleges,
}

#[derive(Parser, Debug)]
#[command(name = "disha")]
#[command(about = "Career interest quiz: find your career cluster", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/disha/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_with(code: i32, message: impl Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("disha=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(disha::stderr_buffer::writer)
        .init();
}

fn print_result(result: &QuizResult, answers: &AnswerSequence, format: Format) {
    match format {
        Format::Text => {
            let use_colors = disha::output::should_use_colors();
            println!("{}", disha::output::format_quiz_result(result, use_colors));
        }
        Format::Json => match disha::output::format_quiz_json(result, answers) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(EXIT_INPUT, format!("Failed to serialize result: {}", e)),
        },
    }
}

fn save_result(store: &mut JsonFileStore, result: &QuizResult, answers: &AnswerSequence, format: Format) {
    match store.append(NewQuizRecord::from_result(result, answers)) {
        Ok(record) => {
            tracing::info!(id = %record.id, "saved quiz result");
            if format == Format::Text {
                println!();
                println!("Saved to history as {}", record.id);
            }
        }
        Err(e) => exit_with(EXIT_CONFIG, format!("Failed to save result: {:#}", e)),
    }
}

/// Nothing matched: input error. Directory unreachable: network error.
fn exit_directory_error(e: DirectoryError) -> ! {
    let code = if e.is_network() { EXIT_NETWORK } else { EXIT_INPUT };
    exit_with(code, e)
}

fn career_directory(config: &disha::config::Config) -> CareerDirectory {
    match CareerDirectory::from_config(config) {
        Ok(d) => d,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    }
}

fn parse_cluster(code: &str) -> Option<Category> {
    Category::from_code(&code.trim().to_lowercase())
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Quiz {
        no_save: false,
        format: Format::Text,
    });
    let config_path = cli.config.map(PathBuf::from);

    // Init runs before config load: there may be no config yet
    if let Commands::Init = command {
        if let Err(e) = disha::config::init::run_init_wizard(config_path) {
            exit_with(EXIT_CONFIG, format!("Init failed: {:#}", e));
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match disha::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    // Validate config and reference data at startup
    let bank: QuestionBank = config.quiz().question_bank();
    let mut errors = Vec::new();
    if let Err(e) = disha::config::validate_config(&config, bank.len()) {
        errors.extend(e);
    }
    if let Err(e) = disha::scoring::validate_question_bank(&bank) {
        errors.extend(e);
    }
    if let Err(e) = disha::scoring::validate_reference_tables() {
        errors.extend(e);
    }
    if !errors.is_empty() {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let profile_path = match config.profile_path.clone() {
        Some(p) => p,
        None => match disha::history::get_profile_path() {
            Ok(p) => p,
            Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
        },
    };
    let mut store = JsonFileStore::new(profile_path);
    tracing::debug!(profile = %store.path().display(), questions = bank.len(), "ready");

    match command {
        Commands::Quiz { no_save, format } => {
            let theme = disha::tui::resolve_theme(config.theme);
            let answers = match disha::tui::run_quiz_tui(bank.clone(), theme).await {
                Ok(Some(answers)) => answers,
                Ok(None) => {
                    println!("Quiz cancelled. Nothing was saved.");
                    std::process::exit(EXIT_SUCCESS);
                }
                Err(e) => exit_with(EXIT_INPUT, format!("Terminal error: {:#}", e)),
            };

            let result = disha::scoring::score_answers(&answers, &bank);
            print_result(&result, &answers, format);
            if !no_save {
                save_result(&mut store, &result, &answers, format);
            }
        }
        Commands::Score {
            answers,
            save,
            format,
        } => {
            let answers = match AnswerSequence::parse(&answers.join(" "), bank.len()) {
                Ok(a) => a,
                Err(e) => exit_with(EXIT_INPUT, format!("Invalid answers: {}", e)),
            };

            let result = disha::scoring::score_answers(&answers, &bank);
            print_result(&result, &answers, format);
            if save {
                save_result(&mut store, &result, &answers, format);
            }
        }
        Commands::History { action, format } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => {
                let records = match store.list() {
                    Ok(r) => r,
                    Err(e) => exit_with(EXIT_CONFIG, format!("Failed to load history: {:#}", e)),
                };
                match format {
                    Format::Text => {
                        let use_colors = disha::output::should_use_colors();
                        println!("{}", disha::output::format_history(&records, use_colors));
                    }
                    Format::Json => match serde_json::to_string_pretty(&records) {
                        Ok(json) => println!("{}", json),
                        Err(e) => exit_with(EXIT_INPUT, format!("Failed to serialize history: {}", e)),
                    },
                }
            }
            HistoryAction::Remove { id } => match store.remove(&id) {
                Ok(true) => println!("Removed {}", id),
                Ok(false) => exit_with(EXIT_INPUT, format!("No saved result with id {}", id)),
                Err(e) => exit_with(EXIT_CONFIG, format!("Failed to update history: {:#}", e)),
            },
            HistoryAction::Colleges => {
                let colleges = match store.saved_colleges() {
                    Ok(c) => c,
                    Err(e) => exit_with(EXIT_CONFIG, format!("Failed to load history: {:#}", e)),
                };
                match format {
                    Format::Text => {
                        let use_colors = disha::output::should_use_colors();
                        println!("{}", disha::output::format_saved_colleges(&colleges, use_colors));
                    }
                    Format::Json => match serde_json::to_string_pretty(&colleges) {
                        Ok(json) => println!("{}", json),
                        Err(e) => exit_with(EXIT_INPUT, format!("Failed to serialize history: {}", e)),
                    },
                }
            }
        },
        Commands::Career { name, open } => {
            let query = name.join(" ");
            let directory = career_directory(&config);

            let detail = match directory.lookup(&query).await {
                Ok(d) => d,
                Err(e) => exit_directory_error(e),
            };

            let page_url = disha::directory::career_page_url(config.site_url(), &detail.slug);
            let use_colors = disha::output::should_use_colors();
            println!(
                "{}",
                disha::output::format_career_detail(&detail, &page_url, use_colors)
            );

            if open {
                if let Err(e) = disha::browser::open_url(&page_url) {
                    exit_with(EXIT_NETWORK, format!("Failed to open browser: {:#}", e));
                }
                println!("Opening {} in browser", page_url);
            }
        }
        Commands::Colleges {
            career,
            government,
            save,
            unsave,
            format,
        } => {
            let query = career.join(" ");
            let directory = career_directory(&config);
            let mut guide = match disha::colleges::college_guide(&directory, &query).await {
                Ok(g) => g,
                Err(e) => exit_directory_error(e),
            };
            let slug = guide.career_slug.clone();

            if let Some(name) = save {
                let Some(college) = guide.find_college(&name) else {
                    exit_with(
                        EXIT_INPUT,
                        format!("No college named '{}' in the list for {}", name, guide.career_title),
                    );
                };
                match store.save_college(NewSavedCollege::from_college(college, &slug)) {
                    Ok(saved) => println!("Saved {} for {}", saved.name, guide.career_title),
                    Err(e) => exit_with(EXIT_CONFIG, format!("Failed to save college: {:#}", e)),
                }
                std::process::exit(EXIT_SUCCESS);
            }

            if let Some(name) = unsave {
                match store.unsave_college(&name, &slug) {
                    Ok(true) => println!("Removed {} from saved colleges", name.trim()),
                    Ok(false) => exit_with(
                        EXIT_INPUT,
                        format!("'{}' is not saved for {}", name.trim(), guide.career_title),
                    ),
                    Err(e) => exit_with(EXIT_CONFIG, format!("Failed to update history: {:#}", e)),
                }
                std::process::exit(EXIT_SUCCESS);
            }

            if government {
                guide.retain_kind(disha::colleges::CollegeKind::Government);
            }
            let saved: Vec<String> = match store.saved_colleges() {
                Ok(colleges) => colleges
                    .into_iter()
                    .filter(|c| c.career == slug)
                    .map(|c| c.name)
                    .collect(),
                Err(e) => {
                    tracing::warn!("Saved colleges unavailable: {:#}", e);
                    Vec::new()
                }
            };

            match format {
                Format::Text => {
                    let use_colors = disha::output::should_use_colors();
                    println!(
                        "{}",
                        disha::output::format_college_guide(&guide, &saved, use_colors)
                    );
                }
                Format::Json => match disha::output::format_college_guide_json(&guide, &saved) {
                    Ok(json) => println!("{}", json),
                    Err(e) => exit_with(EXIT_INPUT, format!("Failed to serialize colleges: {}", e)),
                },
            }
        }
        Commands::Exam { name } => {
            let query = name.join(" ");
            let directory = career_directory(&config);
            let exam = match disha::colleges::lookup_exam(&directory, &query).await {
                Ok(e) => e,
                Err(e) => exit_directory_error(e),
            };
            let use_colors = disha::output::should_use_colors();
            println!("{}", disha::output::format_exam(&exam, use_colors));
        }
        Commands::Careers { cluster, search } => {
            let category = match cluster.as_deref() {
                Some(code) => match parse_cluster(code) {
                    Some(c) => Some(c),
                    None => exit_with(
                        EXIT_INPUT,
                        format!("Unknown cluster '{}', expected one of a, b, c, d, e, f", code),
                    ),
                },
                None => None,
            };

            let careers = disha::directory::browse_builtin(category, search.as_deref());
            let use_colors = disha::output::should_use_colors();
            println!(
                "{}",
                disha::output::format_career_list(&careers, use_colors)
            );
        }
        // Handled before config load
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_score() {
        let cli = Cli::parse_from(["disha", "score", "aabbccddef", "--save"]);
        match cli.command {
            Some(Commands::Score { answers, save, format }) => {
                assert_eq!(answers, vec!["aabbccddef"]);
                assert!(save);
                assert_eq!(format, Format::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_default_is_quiz() {
        let cli = Cli::parse_from(["disha", "-v"]);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_history_remove() {
        let cli = Cli::parse_from(["disha", "history", "remove", "1700000000000"]);
        match cli.command {
            Some(Commands::History {
                action: Some(HistoryAction::Remove { id }),
                ..
            }) => assert_eq!(id, "1700000000000"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_career_joins_words() {
        let cli = Cli::parse_from(["disha", "career", "Civil", "Engineer", "--open"]);
        match cli.command {
            Some(Commands::Career { name, open }) => {
                assert_eq!(name.join(" "), "Civil Engineer");
                assert!(open);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_colleges_save() {
        let cli = Cli::parse_from([
            "disha",
            "colleges",
            "Civil",
            "Engineer",
            "--save",
            "UVCE",
            "--government",
        ]);
        match cli.command {
            Some(Commands::Colleges {
                career,
                government,
                save,
                unsave,
                format,
            }) => {
                assert_eq!(career.join(" "), "Civil Engineer");
                assert!(government);
                assert_eq!(save.as_deref(), Some("UVCE"));
                assert!(unsave.is_none());
                assert_eq!(format, Format::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_colleges_save_conflicts_with_unsave() {
        let result = Cli::try_parse_from([
            "disha", "colleges", "lawyer", "--save", "A", "--unsave", "B",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_exam_and_saved_colleges() {
        let cli = Cli::parse_from(["disha", "exam", "JEE", "Main"]);
        match cli.command {
            Some(Commands::Exam { name }) => assert_eq!(name.join(" "), "JEE Main"),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["disha", "history", "colleges", "--format", "json"]);
        match cli.command {
            Some(Commands::History {
                action: Some(HistoryAction::Colleges),
                format,
            }) => assert_eq!(format, Format::Json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_cluster() {
        assert_eq!(parse_cluster("B"), Some(Category::B));
        assert_eq!(parse_cluster(" f "), Some(Category::F));
        assert_eq!(parse_cluster("g"), None);
    }
}
