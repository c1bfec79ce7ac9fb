use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;

use enroll_api::client::ApiClient;

mod error;
mod input;
mod flow;
mod session;
mod state;
mod signup;
mod commands;

use error::Context;
use session::SessionStore;
use state::AppState;

fn main() {
    use tracing_subscriber::{FmtSubscriber, EnvFilter};

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .expect("failed to initialize global tracing subscriber");

    let end_result = run();

    if let Err(err) = end_result {
        println!("{}", err);

        std::process::exit(1);
    }
}

fn run() -> error::Result {
    let app_matches = commands::cli().get_matches();

    let session_file = if let Some(arg) = app_matches.get_one::<PathBuf>("session-file") {
        arg.clone()
    } else {
        let mut current_dir = std::env::current_dir()?;
        current_dir.push("enroll_session.json");
        current_dir
    };

    let mut client_builder = ApiClient::builder();

    let host = app_matches.get_one::<String>("host").unwrap();
    let port = app_matches.get_one::<u16>("port")
        .cloned()
        .unwrap();

    client_builder.secure(app_matches.get_flag("secure"));
    client_builder.port(Some(port));

    if !client_builder.host(host.clone()) {
        return Err(error::Error::from(format!(
            "cannot set host to the value provided. {}",
            host
        )));
    }

    if let Some(timeout) = app_matches.get_one::<u64>("timeout") {
        client_builder.timeout(Duration::from_secs(*timeout));
    }

    let client = client_builder.build()?;
    let sessions = SessionStore::load(session_file)
        .context("failed to load session file")?;

    let mut state = AppState::new(client, sessions);

    match app_matches.subcommand() {
        Some((cmd, cmd_matches)) => run_subcommand(&mut state, cmd, cmd_matches),
        None => unreachable!()
    }
}

fn run_subcommand(state: &mut AppState, command: &str, matches: &ArgMatches) -> error::Result {
    match command {
        "signup" => commands::signup(state, matches),
        "login" => commands::login(state, matches),
        "forgot-password" => commands::forgot_password(state, matches),
        "logout" => commands::logout(state, matches),
        "whoami" => commands::whoami(state, matches),
        _ => {
            println!("unknown command");

            Ok(())
        }
    }
}
