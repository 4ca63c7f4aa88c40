use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{
    get_config_path, Config, DirectoryConfig, ThemeChoice, DEFAULT_API_KEY_ENV,
    DEFAULT_DIRECTORY_TIMEOUT, DEFAULT_SITE_URL,
};
use crate::scoring::{QuestionBank, QuizConfig};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Parse "3, 10" or "3 10" into 1-based positions, checking each is within the bank.
fn parse_positions(input: &str, question_count: usize) -> Result<Vec<usize>, String> {
    let mut positions = Vec::new();
    for part in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        let position: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
        if position == 0 || position > question_count {
            return Err(format!(
                "{} is outside 1..={}",
                position, question_count
            ));
        }
        if positions.contains(&position) {
            return Err(format!("{} is listed twice", position));
        }
        positions.push(position);
    }
    Ok(positions)
}

fn parse_theme(input: &str) -> Option<ThemeChoice> {
    match input.to_lowercase().as_str() {
        "auto" => Some(ThemeChoice::Auto),
        "dark" => Some(ThemeChoice::Dark),
        "light" => Some(ThemeChoice::Light),
        _ => None,
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Disha Configuration Wizard");
    println!("==========================");
    println!();

    // 1. Quiz weighting
    let question_count = QuestionBank::reference().len();
    typewriter("Some questions count for more than others. By default questions 3 and 10 count 1.5x.");
    let quiz = if prompt_yes_no("Keep the default weighted questions?", true)? {
        None
    } else {
        let positions = loop {
            let input = prompt(&format!(
                "  Weighted question numbers (1-{}, comma separated, empty for none): ",
                question_count
            ))?;
            match parse_positions(&input, question_count) {
                Ok(p) => break p,
                Err(e) => println!("  Invalid: {}. Try again.", e),
            }
        };
        Some(QuizConfig {
            weighted_questions: Some(positions),
        })
    };

    // 2. Hosted career directory
    println!();
    typewriter("Career details can come from a hosted directory. Without one, the built-in career lists are used.");
    let directory = if prompt_yes_no("Configure a hosted career directory?", false)? {
        let url = loop {
            let input = prompt("  Directory URL (e.g. https://project.supabase.co): ")?;
            if reqwest::Url::parse(&input).is_ok() {
                break input;
            }
            println!("  Invalid URL. Try again.");
        };
        let api_key_env = prompt_with_default(
            "  Environment variable holding the API key",
            DEFAULT_API_KEY_ENV,
        )?;
        let timeout = loop {
            let input = prompt_with_default("  Request timeout", DEFAULT_DIRECTORY_TIMEOUT)?;
            match humantime::parse_duration(&input) {
                Ok(_) => break input,
                Err(e) => println!("  Invalid: {}. Try again.", e),
            }
        };
        Some(DirectoryConfig {
            url,
            api_key_env: (api_key_env != DEFAULT_API_KEY_ENV).then_some(api_key_env),
            timeout: (timeout != DEFAULT_DIRECTORY_TIMEOUT).then_some(timeout),
        })
    } else {
        None
    };

    // 3. Site URL and theme
    println!();
    let site_url = loop {
        let input = prompt_with_default("Site used for career pages", DEFAULT_SITE_URL)?;
        if reqwest::Url::parse(&input).is_ok() {
            break input;
        }
        println!("  Invalid URL. Try again.");
    };
    let theme = loop {
        let input = prompt_with_default("Theme (auto, dark, light)", "auto")?;
        match parse_theme(&input) {
            Some(t) => break t,
            None => println!("  Invalid theme. Try again."),
        }
    };

    // 4. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 5. Write config
    let config = Config {
        quiz,
        directory,
        site_url: (site_url != DEFAULT_SITE_URL).then_some(site_url),
        profile_path: None,
        theme,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    if let Some(ref directory) = config.directory {
        typewriter(&format!(
            "Remember to export {} before looking up careers.",
            directory.api_key_env()
        ));
    }
    println!("Run `disha` to take the quiz.");

    Ok(())
}
