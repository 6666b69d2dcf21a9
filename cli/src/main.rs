//! Terminal front end for the barbershop booking API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the same session store the browser client uses, over `reqwest` and a
//! JSON session file, so `sign-in` in one invocation authenticates the next.

mod http;
mod render;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use barbershop::SessionStore;
use barbershop::schedule;
use barbershop::session::SessionError;
use barbershop::types::AvatarUpload;
use barbershop::validation::{
    FieldErrors, ForgotPasswordForm, ProfileForm, ResetPasswordForm, SignInForm, SignUpForm,
};
use clap::{Args, Parser, Subcommand};
use time::{Date, Month, OffsetDateTime, macros::format_description};
use tracing_subscriber::EnvFilter;

use crate::http::HttpApi;
use crate::store::{FileStore, default_store_path};

type Session = SessionStore<FileStore, HttpApi>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.user_message())]
    Session(#[from] SessionError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("no session file location; pass --store or set BARBERSHOP_STORE")]
    NoStorePath,
    #[error("read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid date `{0}`; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid month {0}; expected 1-12")]
    InvalidMonth(u8),
    #[error("output encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FieldErrors> for CliError {
    fn from(errors: FieldErrors) -> Self {
        let fields: Vec<String> = errors.iter().map(|(field, message)| format!("{field}: {message}")).collect();
        Self::Invalid(fields.join("; "))
    }
}

#[derive(Parser, Debug)]
#[command(name = "barbershop", about = "Barbershop booking CLI")]
struct Cli {
    #[arg(long, env = "BARBERSHOP_API_URL", default_value = "http://localhost:3333")]
    api_url: String,

    /// Session file; defaults to `<config dir>/barbershop/session.json`.
    #[arg(long, env = "BARBERSHOP_STORE")]
    store: Option<PathBuf>,

    /// Log requests and session changes to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a session.
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BARBERSHOP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session and forget the stored token.
    SignOut,
    /// Show the signed-in user.
    Whoami {
        #[arg(long)]
        json: bool,
    },
    /// Create an account.
    SignUp {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "BARBERSHOP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Ask for a password recovery email.
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password with the token from the recovery email.
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirmation: String,
    },
    /// Update name, email, and optionally the password.
    Profile(ProfileArgs),
    /// Upload a new avatar image.
    Avatar { file: PathBuf },
    /// Show the month calendar with unavailable days marked.
    Availability {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u8>,
    },
    /// Show the agenda of one day.
    Appointments {
        /// Day as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Defaults to the current name.
    #[arg(long)]
    name: Option<String>,
    /// Defaults to the current email.
    #[arg(long)]
    email: Option<String>,
    #[arg(long, default_value = "")]
    old_password: String,
    #[arg(long, default_value = "")]
    password: String,
    #[arg(long, default_value = "")]
    password_confirmation: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Local offset lookup must happen before any other thread exists.
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli, now).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli, now: OffsetDateTime) -> Result<(), CliError> {
    let path = cli.store.or_else(default_store_path).ok_or(CliError::NoStorePath)?;
    tracing::debug!(store = %path.display(), api_url = %cli.api_url, "starting");
    let session: Session = SessionStore::new(FileStore::new(path), HttpApi::new(cli.api_url));

    match cli.command {
        Command::SignIn { email, password } => {
            let credentials = SignInForm { email, password }.validate()?;
            let user = session.sign_in(&credentials).await?;
            println!("Signed in as {}", render::user_line(&user));
        }
        Command::SignOut => {
            session.sign_out();
            println!("Signed out");
        }
        Command::Whoami { json } => {
            let user = session.user().ok_or(SessionError::NotSignedIn)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                println!("{}", render::user_line(&user));
            }
        }
        Command::SignUp { name, email, password } => {
            let request = SignUpForm { name, email, password }.validate()?;
            session.sign_up(&request).await?;
            println!("Account created for {}. You can now sign in.", request.email);
        }
        Command::ForgotPassword { email } => {
            let request = ForgotPasswordForm { email }.validate()?;
            session.forgot_password(&request).await?;
            println!("Recovery email sent to {}", request.email);
        }
        Command::ResetPassword { token, password, password_confirmation } => {
            let token = token.trim();
            if token.is_empty() {
                return Err(CliError::Invalid("token: the reset token is required".to_owned()));
            }
            let request = ResetPasswordForm { password, password_confirmation }.validate(token)?;
            session.reset_password(&request).await?;
            println!("Password reset. Sign in with your new password.");
        }
        Command::Profile(args) => update_profile(&session, args).await?,
        Command::Avatar { file } => {
            let upload = read_avatar(file)?;
            let user = session.update_avatar(&upload).await?;
            println!("Avatar updated: {}", user.avatar_url.unwrap_or_default());
        }
        Command::Availability { year, month } => {
            let year = year.unwrap_or(now.year());
            let month = match month {
                Some(m) => Month::try_from(m).map_err(|_| CliError::InvalidMonth(m))?,
                None => now.month(),
            };
            let items = session.month_availability(schedule::month_query(year, month)).await?;
            print!("{}", render::calendar(year, month, &items));
        }
        Command::Appointments { date } => {
            let day = match date {
                Some(text) => parse_date(&text)?,
                None => now.date(),
            };
            let list = session.day_appointments(schedule::day_query(day)).await?;
            print!("{}", render::agenda(day, now, list));
        }
    }
    Ok(())
}

async fn update_profile(session: &Session, args: ProfileArgs) -> Result<(), CliError> {
    let current = session.user().ok_or(SessionError::NotSignedIn)?;
    let form = ProfileForm {
        name: args.name.unwrap_or(current.name),
        email: args.email.unwrap_or(current.email),
        old_password: args.old_password,
        password: args.password,
        password_confirmation: args.password_confirmation,
    };
    let update = form.validate()?;
    let user = session.update_profile(&update).await?;
    println!("Profile updated: {}", render::user_line(&user));
    Ok(())
}

fn parse_date(text: &str) -> Result<Date, CliError> {
    Date::parse(text, format_description!("[year]-[month]-[day]")).map_err(|_| CliError::InvalidDate(text.to_owned()))
}

/// MIME type from the file extension; servers sniff anything else.
fn content_type_for(path: &std::path::Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn read_avatar(path: PathBuf) -> Result<AvatarUpload, CliError> {
    let bytes = std::fs::read(&path).map_err(|source| CliError::ReadFile { path: path.clone(), source })?;
    let file_name = path.file_name().map_or_else(|| "avatar".to_owned(), |n| n.to_string_lossy().into_owned());
    Ok(AvatarUpload { file_name, content_type: content_type_for(&path).to_owned(), bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use time::macros::date;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2020-06-08").unwrap(), date!(2020 - 06 - 08));
        assert!(matches!(parse_date("08/06/2020"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("me.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("me.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("me")), "application/octet-stream");
    }

    #[test]
    fn field_errors_render_on_one_line() {
        let errors = SignInForm::default().validate().unwrap_err();
        let err = CliError::from(errors);
        assert_eq!(err.to_string(), "invalid input: email: Email is required; password: Password is required");
    }

    #[test]
    fn session_errors_use_friendly_text() {
        let err = CliError::from(SessionError::NotSignedIn);
        assert_eq!(err.to_string(), "You need to sign in first.");
    }

    #[test]
    fn read_avatar_reports_missing_file() {
        let err = read_avatar(PathBuf::from("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }

    #[test]
    fn read_avatar_takes_name_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.jpg");
        std::fs::write(&path, [0xFF, 0xD8]).unwrap();
        let upload = read_avatar(path).unwrap();
        assert_eq!(upload.file_name, "face.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.bytes, vec![0xFF, 0xD8]);
    }

    #[test]
    fn cli_parses_profile_defaults() {
        let cli = Cli::try_parse_from(["barbershop", "--store", "/tmp/s.json", "profile", "--name", "Ann"]).unwrap();
        let Command::Profile(args) = cli.command else { panic!("expected profile") };
        assert_eq!(args.name.as_deref(), Some("Ann"));
        assert!(args.old_password.is_empty());
    }
}
