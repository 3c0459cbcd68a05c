use chrono::{DateTime, Local, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use learnmate_config::{Config, ConfigManager};
use learnmate_observability::{create_practice_span, create_session_span, LogManager};
use learnmate_session::{
    FileBackend, FileBackendConfig, PlaceholderContent, PracticeMachine, PracticeState, Session,
    SessionLifecycle, SessionStore, SessionType, Submission, Summary, Transition, UploadSlot,
    VideoFile,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader, Lines};
use tracing::Instrument;

/// Typed during practice to go back to the summary
const BACK_COMMAND: &str = ":back";

/// Line that ends pasted notes in the study flow
const NOTES_END: &str = ".";

#[derive(Parser)]
#[command(name = "learnmate")]
#[command(about = "Study notes and videos, then practice interview questions")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Config file path
    #[arg(long, env = "LEARNMATE_CONFIG", default_value = "~/.learnmate/config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a session from text or a video
    New(NewArgs),
    /// List past sessions
    History,
    /// Show a session's summary and questions
    Show {
        /// Session id
        id: i64,
    },
    /// Practice a session's interview questions
    Practice {
        /// Session id
        id: i64,
    },
    /// Interactive flow: input, summary, then practice
    Study,
    /// Delete a session
    Delete {
        /// Session id
        id: i64,
    },
    /// Write a session to a JSON file
    Export {
        /// Session id
        id: i64,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Configuration commands
    Config(ConfigArgs),
}

#[derive(Args)]
struct NewArgs {
    #[command(subcommand)]
    command: NewCommands,
}

#[derive(Subcommand)]
enum NewCommands {
    /// From study notes; reads stdin when neither TEXT nor --file is given
    Text {
        /// Notes text
        text: Option<String>,
        /// Read the notes from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// From a video file (only .mp4 is accepted)
    Video {
        /// Path to the video
        path: PathBuf,
    },
}

#[derive(Args, Clone)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Get a config value
    Get {
        /// Config key (e.g. storage.path, logging.level)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key (e.g. storage.path, logging.level)
        key: String,
        /// Value
        value: String,
    },
    /// Write the default config
    Init {
        /// Overwrite an existing config
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Show the current config
    Show,
}

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Where a practice run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PracticeExit {
    Completed,
    Back,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_path =
        learnmate_config::expand_tilde(&cli.config).unwrap_or_else(|| PathBuf::from(&cli.config));

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!("{}", format!("[DEBUG] Config path: {:?}", config_path).dimmed());
    }

    let command = match cli.command {
        Commands::Config(args) => return Ok(handle_config(args, &config_path).await?.into()),
        command => command,
    };

    let config = ConfigManager::load(&config_path).await?.snapshot().await;

    let mut logging = config.logging.clone();
    if cli.debug {
        logging.level = learnmate_config::LogLevel::Debug;
    }
    let _log_manager = match LogManager::new(&logging) {
        Ok(manager) => Some(manager),
        Err(e) => {
            eprintln!("{}", format!("⚠️  Logging disabled: {}", e).yellow());
            None
        }
    };

    let lifecycle = build_lifecycle(&config, cli.debug).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let outcome = run_command(command, &lifecycle, &mut lines).await?;
    Ok(outcome.into())
}

async fn run_command<R: AsyncBufRead + Unpin>(
    command: Commands,
    lifecycle: &SessionLifecycle,
    lines: &mut Lines<R>,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::New(args) => handle_new(lifecycle, args).await,
        Commands::History => show_history(lifecycle).await,
        Commands::Show { id } => {
            let Some(session) = find_session(lifecycle, id).await? else {
                return Ok(Outcome::Failed);
            };
            print_session(&session);
            Ok(Outcome::Done)
        }
        Commands::Practice { id } => resume_practice(lifecycle, id, lines).await,
        Commands::Study => run_study(lifecycle, lines).await,
        Commands::Delete { id } => delete_session(lifecycle, id).await,
        Commands::Export { id, out } => export_session(lifecycle, id, &out).await,
        Commands::Config(_) => Ok(Outcome::Done),
    }
}

async fn build_lifecycle(config: &Config, debug: bool) -> anyhow::Result<SessionLifecycle> {
    let data_dir = learnmate_config::expand_tilde(&config.storage.path)
        .unwrap_or_else(|| PathBuf::from(&config.storage.path));

    if debug {
        eprintln!(
            "{}",
            format!("[DEBUG] Storage: {:?} (key: {})", data_dir, config.storage.key).dimmed()
        );
    }

    let backend = FileBackend::new(FileBackendConfig::new(data_dir)).await?;
    let store = Arc::new(SessionStore::with_key(
        Arc::new(backend),
        config.storage.key.clone(),
    ));

    Ok(SessionLifecycle::new(store, Arc::new(PlaceholderContent))
        .with_accepted_video_type(config.upload.accepted_video_type.clone()))
}

async fn handle_new(lifecycle: &SessionLifecycle, args: NewArgs) -> anyhow::Result<Outcome> {
    let submission = match args.command {
        NewCommands::Text { text, file } => {
            let raw = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
                (None, None) => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };
            lifecycle.create_from_text(&raw).await?
        }
        NewCommands::Video { path } => submit_video(lifecycle, &path).await?,
    };

    let Some(session) = accepted_or_report(submission) else {
        return Ok(Outcome::Failed);
    };

    println!(
        "{}",
        format!("✅ Created {} session {}", session.session_type, session.id).green()
    );
    println!();
    print_session(&session);
    Ok(Outcome::Done)
}

async fn submit_video(lifecycle: &SessionLifecycle, path: &Path) -> anyhow::Result<Submission> {
    let mut slot = UploadSlot::new(lifecycle.accepted_video_type());
    let file = VideoFile::from_path(path);

    // Rejected by the slot; the lifecycle reports the media type
    if !slot.offer(file.clone()) {
        return Ok(lifecycle.create_from_video(Some(&file)).await?);
    }

    Ok(lifecycle.create_from_video(slot.selected()).await?)
}

/// Print the rejection hint, if any
fn accepted_or_report(submission: Submission) -> Option<Session> {
    match submission {
        Submission::Accepted(session) => Some(session),
        Submission::Rejected(rejection) => {
            println!("{}", format!("⚠️  {}", rejection).yellow());
            None
        }
    }
}

async fn find_session(lifecycle: &SessionLifecycle, id: i64) -> anyhow::Result<Option<Session>> {
    let session = lifecycle.get(id).await?;
    if session.is_none() {
        println!("{}", format!("❌ Session not found: {}", id).red());
    }
    Ok(session)
}

async fn show_history(lifecycle: &SessionLifecycle) -> anyhow::Result<Outcome> {
    let previews = lifecycle.history().await?;

    if previews.is_empty() {
        println!("{}", "No sessions yet. Create one with `learnmate new`.".dimmed());
        return Ok(Outcome::Done);
    }

    println!("{}", "📜 History".cyan().bold());
    for preview in previews {
        println!();
        println!(
            "{}  {}  {}",
            preview.id.to_string().bold(),
            preview.title,
            format_date(preview.date).dimmed()
        );
        for point in &preview.preview_points {
            println!("  • {}", point);
        }
        if preview.remaining_points > 0 {
            println!("{}", format!("  +{} more", preview.remaining_points).dimmed());
        }
        println!(
            "{}",
            format!(
                "  {}/{} questions answered",
                preview.answered_count, preview.question_count
            )
            .dimmed()
        );
    }
    Ok(Outcome::Done)
}

fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn print_session(session: &Session) {
    println!(
        "{}",
        format!("{} #{}", session.session_type.title(), session.id)
            .cyan()
            .bold()
    );
    println!("{}", format_date(session.date).dimmed());
    match session.session_type {
        SessionType::Text => println!("{}", session.content),
        SessionType::Video => println!("🎬 {}", session.content),
    }
    println!();
    print_summary(&session.summary);

    if !session.questions.is_empty() {
        println!();
        println!("{}", "Interview questions".bold());
        for (i, question) in session.questions.iter().enumerate() {
            println!("  {}. {}", i + 1, question.question);
            if question.is_answered() {
                println!("     {}", format!("Answer: {}", question.answer).dimmed());
                println!("     {}", format!("Feedback: {}", question.feedback).green());
            }
        }
    }
}

fn print_summary(summary: &Summary) {
    println!("{}", "Summary".bold());
    for point in &summary.bullet_points {
        println!("  • {}", point);
    }
    if !summary.paragraph.is_empty() {
        println!();
        println!("{}", summary.paragraph);
    }
}

async fn prompt<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}", label.bold());
    io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// `n`, `N` or end of input
fn declined(answer: Option<&str>) -> bool {
    matches!(answer.map(str::trim), Some("n") | Some("N") | None)
}

/// Read pasted notes up to a lone `.` line or end of input
async fn read_notes<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) -> anyhow::Result<String> {
    let mut notes = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == NOTES_END {
            break;
        }
        notes.push(line);
    }
    Ok(notes.join("\n"))
}

async fn resume_practice<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    id: i64,
    lines: &mut Lines<R>,
) -> anyhow::Result<Outcome> {
    let Some(session) = find_session(lifecycle, id).await? else {
        return Ok(Outcome::Failed);
    };

    if session.is_fully_answered() {
        println!("{}", "All questions answered; starting over.".dimmed());
    }

    let machine = PracticeMachine::resume(session, lifecycle.provider())?;
    practice_session(lifecycle, machine, lines)
        .instrument(create_session_span(id))
        .await?;
    Ok(Outcome::Done)
}

/// Practice until completion, offering to resume whenever the user goes back
async fn practice_session<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    mut machine: PracticeMachine,
    lines: &mut Lines<R>,
) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("🎤 Interview practice: {} questions", machine.question_count())
            .cyan()
            .bold()
    );
    println!(
        "{}",
        format!("Type {} to return to the summary.", BACK_COMMAND).dimmed()
    );

    loop {
        if run_practice(lifecycle, &mut machine, lines).await? == PracticeExit::Completed {
            return Ok(());
        }

        if machine.back() == Transition::ReturnedToSummary {
            println!();
            print_summary(&machine.session().summary);
            println!();
        }

        let answer = prompt(lines, "Resume practice? [Y/n] ").await?;
        if declined(answer.as_deref()) {
            println!(
                "{}",
                format!(
                    "Progress saved. Continue with: learnmate practice {}",
                    machine.session().id
                )
                .dimmed()
            );
            return Ok(());
        }
    }
}

async fn run_practice<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    machine: &mut PracticeMachine,
    lines: &mut Lines<R>,
) -> anyhow::Result<PracticeExit> {
    let session_id = machine.session().id;

    while !machine.is_complete() {
        let index = machine.state().index();
        let went_back = practice_step(lifecycle, machine, lines)
            .instrument(create_practice_span(session_id, index))
            .await?;
        if went_back {
            return Ok(PracticeExit::Back);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "🎉 Practice complete: {}/{} answered",
            machine.session().answered_count(),
            machine.question_count()
        )
        .green()
        .bold()
    );
    Ok(PracticeExit::Completed)
}

/// Handle one input for the current state. Returns `true` on `:back` or end of input.
async fn practice_step<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    machine: &mut PracticeMachine,
    lines: &mut Lines<R>,
) -> anyhow::Result<bool> {
    let total = machine.question_count();

    match machine.state() {
        PracticeState::Asking(index) => {
            let question = machine.current_question();
            println!();
            println!("{}", format!("Question {}/{}", index + 1, total).bold());
            println!("{}", question.question);
            if question.is_answered() {
                println!("{}", format!("Previous answer: {}", question.answer).dimmed());
            }

            let line = match prompt(lines, "> ").await? {
                Some(line) if line.trim() != BACK_COMMAND => line,
                _ => return Ok(true),
            };

            machine.edit_answer(line);
            match machine.submit_pending() {
                Transition::FeedbackShown { feedback, .. } => {
                    println!("{}", format!("💡 {}", feedback).green());
                    if !lifecycle.save_progress(machine.session()).await? {
                        println!(
                            "{}",
                            "⚠️  Session no longer exists; progress not saved".yellow()
                        );
                    }
                }
                _ => println!("{}", "Please type an answer first.".yellow()),
            }
        }
        PracticeState::ShowingFeedback(index) => {
            let label = if index + 1 < total {
                "Press Enter for the next question "
            } else {
                "Press Enter to finish "
            };
            match prompt(lines, label).await? {
                Some(line) if line.trim() != BACK_COMMAND => {
                    machine.advance();
                }
                _ => return Ok(true),
            }
        }
    }

    Ok(false)
}

/// Ask for text or a video until a submission is accepted. `None` at end of input.
async fn study_input<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    lines: &mut Lines<R>,
) -> anyhow::Result<Option<Session>> {
    loop {
        let Some(choice) = prompt(lines, "Input type [text/video]: ").await? else {
            return Ok(None);
        };

        let submission = match choice.trim().to_lowercase().as_str() {
            "video" | "v" => {
                let Some(path) = prompt(lines, "Path to the video: ").await? else {
                    return Ok(None);
                };
                submit_video(lifecycle, Path::new(path.trim())).await?
            }
            _ => {
                println!(
                    "{}",
                    format!("Paste your notes, then a line with only '{}':", NOTES_END).dimmed()
                );
                let notes = read_notes(lines).await?;
                lifecycle.create_from_text(&notes).await?
            }
        };

        if let Some(session) = accepted_or_report(submission) {
            return Ok(Some(session));
        }
    }
}

async fn run_study<R: AsyncBufRead + Unpin>(
    lifecycle: &SessionLifecycle,
    lines: &mut Lines<R>,
) -> anyhow::Result<Outcome> {
    println!("{}", "📚 New study session".cyan().bold());

    let Some(session) = study_input(lifecycle, lines).await? else {
        return Ok(Outcome::Done);
    };

    println!();
    print_summary(&session.summary);
    println!();

    let answer = prompt(lines, "Start interview practice? [Y/n] ").await?;
    if declined(answer.as_deref()) {
        println!(
            "{}",
            format!("Saved as session {}", session.id).dimmed()
        );
        return Ok(Outcome::Done);
    }

    let id = session.id;
    let machine = PracticeMachine::new(session, lifecycle.provider())?;
    practice_session(lifecycle, machine, lines)
        .instrument(create_session_span(id))
        .await?;
    Ok(Outcome::Done)
}

async fn delete_session(lifecycle: &SessionLifecycle, id: i64) -> anyhow::Result<Outcome> {
    let existed = lifecycle.get(id).await?.is_some();
    lifecycle
        .delete(id)
        .instrument(create_session_span(id))
        .await?;

    if existed {
        println!("{}", format!("🗑  Deleted session {}", id).green());
    } else {
        println!("{}", format!("Session {} not found; nothing deleted", id).dimmed());
    }
    Ok(Outcome::Done)
}

async fn export_session(
    lifecycle: &SessionLifecycle,
    id: i64,
    out: &Path,
) -> anyhow::Result<Outcome> {
    let Some(session) = find_session(lifecycle, id).await? else {
        return Ok(Outcome::Failed);
    };
    let blob = lifecycle.export(&session)?;

    tokio::fs::create_dir_all(out).await?;
    let path = out.join(&blob.file_name);
    tokio::fs::write(&path, &blob.bytes).await?;

    println!(
        "{}",
        format!("✅ Exported session {} to {:?} ({})", id, path, blob.media_type).green()
    );
    Ok(Outcome::Done)
}

async fn handle_config(args: ConfigArgs, config_path: &Path) -> anyhow::Result<Outcome> {
    match args.command {
        ConfigCommands::Get { key } => {
            let manager = ConfigManager::load(config_path).await?;
            let config = manager.snapshot().await;

            match config.get_value(&key) {
                Some(value) => {
                    println!("{}", format!("{} = {}", key, value).green());
                }
                None => {
                    println!("{}", format!("❌ Key not found: {}", key).red());
                    return Ok(Outcome::Failed);
                }
            }
        }
        ConfigCommands::Set { key, value } => {
            let manager = ConfigManager::load(config_path).await?;

            if let Err(e) = manager.update(|config| config.set_value(&key, &value)).await {
                eprintln!("{}", format!("❌ Failed to set value: {}", e).red());
                return Ok(Outcome::Failed);
            }
            println!("{}", format!("✅ Set {} = {}", key, value).green());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                println!(
                    "{}",
                    format!("⚠️  Config already exists at {:?}", config_path).yellow()
                );
                println!("{}", "Use --force to overwrite".dimmed());
                return Ok(Outcome::Done);
            }

            learnmate_config::init_learnmate_dirs().await?;

            let manager = ConfigManager::new(Config::default(), config_path.to_path_buf());
            manager.save().await?;

            println!(
                "{}",
                format!("✅ Config initialized at {:?}", config_path).green()
            );
            println!("{}", "You can edit this file to customize your settings".dimmed());
        }
        ConfigCommands::Show => {
            let manager = ConfigManager::load(config_path).await?;
            let config = manager.snapshot().await;

            println!("{}", "📋 Current Configuration:".cyan().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use learnmate_session::MemoryBackend;
    use tempfile::TempDir;

    fn memory_lifecycle() -> SessionLifecycle {
        let store = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
        SessionLifecycle::new(store, Arc::new(PlaceholderContent))
    }

    fn scripted(input: &'static str) -> Lines<BufReader<&'static [u8]>> {
        BufReader::new(input.as_bytes()).lines()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_text_and_export() {
        let cli = Cli::try_parse_from(["learnmate", "new", "text", "my notes"]).unwrap();
        match cli.command {
            Commands::New(NewArgs {
                command: NewCommands::Text { text, file },
            }) => {
                assert_eq!(text.as_deref(), Some("my notes"));
                assert!(file.is_none());
            }
            _ => panic!("expected new text"),
        }

        let cli =
            Cli::try_parse_from(["learnmate", "export", "1718000000000", "--out", "/tmp/out"])
                .unwrap();
        match cli.command {
            Commands::Export { id, out } => {
                assert_eq!(id, 1718000000000);
                assert_eq!(out, PathBuf::from("/tmp/out"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result =
            Cli::try_parse_from(["learnmate", "new", "text", "notes", "--file", "notes.txt"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_notes_keeps_blank_lines() {
        let mut lines = scripted("first\n\nthird\n.\nafter\n");
        assert_eq!(read_notes(&mut lines).await.unwrap(), "first\n\nthird");
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("after"));

        let mut lines = scripted("only line");
        assert_eq!(read_notes(&mut lines).await.unwrap(), "only line");
    }

    #[tokio::test]
    async fn test_study_asks_again_after_rejection() {
        let lifecycle = memory_lifecycle();
        let mut lines = scripted(
            "text\n\n.\nvideo\nclip.mov\ntext\nline one\n\nline three\n.\nn\n",
        );

        let outcome = run_study(&lifecycle, &mut lines).await.unwrap();
        assert_eq!(outcome, Outcome::Done);

        let stored = lifecycle.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content, "line one\n\nline three");
        assert_eq!(stored[0].answered_count(), 0);
    }

    #[tokio::test]
    async fn test_study_resumes_same_run_after_back() {
        let lifecycle = memory_lifecycle();
        let mut lines = scripted(
            "text\nnotes\n.\ny\nanswer one\n\n:back\ny\nanswer two\n\nanswer three\n\n",
        );

        run_study(&lifecycle, &mut lines).await.unwrap();

        let stored = lifecycle.list().await.unwrap();
        let answers: Vec<_> = stored[0].questions.iter().map(|q| q.answer.as_str()).collect();
        assert_eq!(answers, vec!["answer one", "answer two", "answer three"]);
    }

    #[tokio::test]
    async fn test_practice_command_continues_at_first_unanswered() {
        let lifecycle = memory_lifecycle();
        let mut lines = scripted("text\nnotes\n.\ny\nanswer one\n:back\nn\n");
        run_study(&lifecycle, &mut lines).await.unwrap();
        let id = lifecycle.list().await.unwrap()[0].id;

        let mut lines = scripted("answer two\n\nanswer three\n\n");
        let outcome = resume_practice(&lifecycle, id, &mut lines).await.unwrap();
        assert_eq!(outcome, Outcome::Done);

        let session = lifecycle.get(id).await.unwrap().unwrap();
        let answers: Vec<_> = session.questions.iter().map(|q| q.answer.as_str()).collect();
        assert_eq!(answers, vec!["answer one", "answer two", "answer three"]);
    }

    #[tokio::test]
    async fn test_failures_return_failed_outcome() {
        let lifecycle = memory_lifecycle();
        let mut lines = scripted("");

        let blank = NewArgs {
            command: NewCommands::Text {
                text: Some("   ".to_string()),
                file: None,
            },
        };
        assert_eq!(handle_new(&lifecycle, blank).await.unwrap(), Outcome::Failed);
        assert_eq!(
            run_command(Commands::Show { id: 42 }, &lifecycle, &mut lines)
                .await
                .unwrap(),
            Outcome::Failed
        );
        assert_eq!(
            run_command(Commands::Practice { id: 42 }, &lifecycle, &mut lines)
                .await
                .unwrap(),
            Outcome::Failed
        );
        assert!(lifecycle.list().await.unwrap().is_empty());

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let get_missing = ConfigArgs {
            command: ConfigCommands::Get {
                key: "storage.missing".to_string(),
            },
        };
        assert_eq!(
            handle_config(get_missing, &config_path).await.unwrap(),
            Outcome::Failed
        );
    }
}
