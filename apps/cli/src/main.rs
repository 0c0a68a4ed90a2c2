use std::{fmt::Write as _, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use client_core::{
    evaluate, load_settings, AccountService, LoginForm, PasswordStrength, RegistrationForm,
    SimulatedAccountService,
};
use shared::{domain::Route, error::FormError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quizmaster", about = "QuizMaster form and routing utilities")]
struct Cli {
    /// Settings file; defaults to `quizmaster.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a password the way the sign-up form does.
    Strength {
        password: String,
        #[arg(long)]
        json: bool,
    },
    /// Run the sign-in form against the simulated account service.
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Run the sign-up form against the simulated account service.
    Register {
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        qualification: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// List the routes the site serves.
    Routes,
    /// Resolve a path to the page that would render it.
    Route { path: String },
}

fn render_strength(strength: &PasswordStrength) -> String {
    let label = if strength.label.as_str().is_empty() {
        "-"
    } else {
        strength.label.as_str()
    };
    let mut out = format!(
        "score: {}/{} ({label})\n",
        strength.score,
        PasswordStrength::MAX_SCORE
    );
    for (rule, met) in strength.checklist() {
        let mark = if met { "x" } else { " " };
        let _ = writeln!(out, "  [{mark}] {}", rule.description());
    }
    out
}

/// Logs a validation failure and turns it into the command's error.
fn rejected(form: &'static str, err: FormError) -> anyhow::Error {
    warn!(form, code = err.code(), "form rejected");
    anyhow!(err)
}

fn render_route(route: &Route) -> String {
    match route {
        Route::NotFound(path) => format!("{path} -> not found"),
        known => format!("{} -> {}", known.path(), known.title()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Strength { password, json } => {
            let strength = evaluate(&password);
            info!(
                score = strength.score,
                label = strength.label.as_str(),
                "password evaluated"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&strength)?);
            } else {
                print!("{}", render_strength(&strength));
            }
        }
        Command::Login { email, password } => {
            let settings = load_settings(cli.config.as_deref())?;
            let mut form = LoginForm::default();
            form.email = email;
            form.password = password;
            let credentials = form.submit().map_err(|err| rejected("login", err))?;
            let service = SimulatedAccountService::new(settings.submit_delay());
            info!(
                email = %credentials.email,
                delay_ms = service.delay().as_millis() as u64,
                "signing in"
            );
            let outcome = service.sign_in(credentials).await?;
            form.complete();
            println!(
                "signed in as {} ({}); redirect: {}",
                outcome.email,
                outcome.role.label(),
                outcome.redirect
            );
        }
        Command::Register {
            full_name,
            email,
            qualification,
            date_of_birth,
            password,
            confirm_password,
        } => {
            let settings = load_settings(cli.config.as_deref())?;
            let mut form = RegistrationForm::default();
            form.full_name = full_name;
            form.email = email;
            form.qualification = qualification.unwrap_or_default();
            form.date_of_birth = date_of_birth.unwrap_or_default();
            form.password = password;
            form.confirm_password = confirm_password;
            let registration = form.submit().map_err(|err| rejected("register", err))?;
            let service = SimulatedAccountService::new(settings.submit_delay());
            info!(
                email = %registration.email,
                delay_ms = service.delay().as_millis() as u64,
                "creating account"
            );
            let outcome = service.register(registration).await?;
            form.complete();
            println!(
                "registered {}; redirect: {}",
                outcome.email, outcome.redirect
            );
        }
        Command::Routes => {
            for route in Route::KNOWN {
                println!("{}", render_route(&route));
            }
        }
        Command::Route { path } => {
            println!("{}", render_route(&Route::parse(&path)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_report_lists_every_rule() {
        let report = render_strength(&evaluate("Abcdefg1!"));
        assert!(report.starts_with("score: 4/4 (Strong)"));
        assert_eq!(report.matches("[x]").count(), 4);

        let empty = render_strength(&evaluate(""));
        assert!(empty.starts_with("score: 0/4 (-)"));
        assert_eq!(empty.matches("[ ]").count(), 4);
    }

    #[test]
    fn routes_render_with_their_titles() {
        assert_eq!(render_route(&Route::Register), "/register -> Sign Up");
        assert_eq!(
            render_route(&Route::parse("/blog")),
            "/blog -> not found"
        );
    }

    #[test]
    fn rejected_forms_report_the_inline_message() {
        let err = rejected("register", FormError::PasswordTooShort);
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            err.downcast_ref::<FormError>(),
            Some(&FormError::PasswordTooShort)
        );
    }

    #[test]
    fn login_flags_are_optional_so_the_form_can_reject_them() {
        let cli = Cli::try_parse_from(["quizmaster", "login", "--email", "a@b.c"]).expect("parse");
        match cli.command {
            Command::Login { email, password } => {
                assert_eq!(email, "a@b.c");
                assert!(password.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn strength_accepts_a_json_flag() {
        let cli =
            Cli::try_parse_from(["quizmaster", "strength", "hunter2", "--json"]).expect("parse");
        assert!(matches!(cli.command, Command::Strength { json: true, .. }));
    }
}
