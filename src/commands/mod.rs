use std::path::PathBuf;

use chrono::Utc;
use clap::{Command, Arg, ArgAction, ArgMatches, value_parser};

use enroll_api::client::auth::session::CreateSession;
use enroll_api::client::auth::password::{ForgotPassword, ResetPassword};
use enroll_api::client::error::RequestError;
use enroll_api::ApiErrorKind;
use enroll_api::error::AuthKind;
use enroll_lib::contact::Contact;
use enroll_lib::otp;
use enroll_lib::sec::authn::{self, Strength};

use crate::error;
use crate::input;
use crate::signup;
use crate::state::AppState;

fn default_help_arg() -> Arg {
    Arg::new("help")
        .long("help")
        .action(ArgAction::Help)
        .help("display the current help information")
}

pub fn cli() -> Command {
    Command::new("enroll")
        .subcommand_required(true)
        .disable_help_flag(true)
        .arg(default_help_arg())
        .arg(Arg::new("session-file")
            .long("session-file")
            .value_parser(value_parser!(PathBuf))
            .help("specifies a specific file to store session data in")
        )
        .arg(Arg::new("host")
            .long("host")
            .short('h')
            .default_value("localhost")
            .help("the desired hostname to connect to")
        )
        .arg(Arg::new("port")
            .long("port")
            .short('p')
            .default_value("80")
            .value_parser(value_parser!(u16))
            .help("the desired port to connect to")
        )
        .arg(Arg::new("secure")
            .long("secure")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("sets the connection to use https")
        )
        .arg(Arg::new("timeout")
            .long("timeout")
            .value_parser(value_parser!(u64))
            .help("server request timeout in seconds")
        )
        .subcommand(Command::new("signup")
            .about("signs up a new account with a verified contact")
            .disable_help_flag(true)
            .arg(default_help_arg())
            .arg(Arg::new("role")
                .long("role")
                .short('r')
                .required(true)
                .help("the account type to sign up as. fellow, host or speaker")
            )
        )
        .subcommand(Command::new("login")
            .about("logs in with an existing account")
        )
        .subcommand(Command::new("forgot-password")
            .about("resets the password for an existing account")
        )
        .subcommand(Command::new("logout")
            .about("clears the stored session")
        )
        .subcommand(Command::new("whoami")
            .about("displays the stored session")
        )
}

pub fn signup(state: &mut AppState, args: &ArgMatches) -> error::Result {
    signup::signup(state, args)
}

pub fn login(state: &mut AppState, _args: &ArgMatches) -> error::Result {
    if let Some(session) = state.sessions.session() {
        println!("already logged in as {}", session.user.contact);

        return Ok(());
    }

    let contact = loop {
        let given = input::read_stdin_trimmed("mobile number or email: ")?;

        match Contact::parse(&given) {
            Some(contact) => break contact,
            None => println!("enter a valid 10-digit mobile number or an email address"),
        }
    };

    loop {
        let password = rpassword::prompt_password("password: ")?;

        match CreateSession::contact(contact.as_str(), password).send(&state.client) {
            Ok(result) => {
                let created = result.into_payload();
                let display = created.user.full_name()
                    .unwrap_or_else(|| created.user.contact.clone());

                state.sessions.set_session(created, Utc::now());
                state.sessions.save()?;

                println!("logged in as {}", display);

                return Ok(());
            },
            Err(RequestError::Api(err)) => match err.kind() {
                ApiErrorKind::Auth(AuthKind::InvalidPassword) |
                ApiErrorKind::Auth(AuthKind::Unauthenticated) => {
                    println!("invalid contact or password");
                    continue;
                },
                _ => {
                    return Err(error::Error::from(err));
                }
            },
            Err(err) => {
                return Err(err.into());
            }
        }
    }
}

pub fn forgot_password(state: &mut AppState, _args: &ArgMatches) -> error::Result {
    let contact = loop {
        let given = input::read_stdin_trimmed("mobile number or email: ")?;

        match Contact::parse(&given) {
            Some(contact) => break contact,
            None => println!("enter a valid 10-digit mobile number or an email address"),
        }
    };

    ForgotPassword::contact(contact.as_str()).send(&state.client)?;

    println!("a {} digit code was sent to {}", otp::OTP_DIGITS, contact);

    loop {
        let code = otp::filter_code_input(&input::read_stdin_trimmed("code: ")?);

        if !otp::code_valid(&code) {
            println!("the verification code must be {} digits", otp::OTP_DIGITS);
            continue;
        }

        let password = rpassword::prompt_password("new password: ")?;

        let strength = Strength::from_score(authn::strength_score(&password));
        println!("password strength: {}", strength);

        let confirm = rpassword::prompt_password("confirm password: ")?;

        if password != confirm {
            println!("passwords do not match");
            continue;
        }

        if password.chars().count() < authn::MIN_PASSWORD_CHARS {
            println!("the password must be at least {} characters", authn::MIN_PASSWORD_CHARS);
            continue;
        }

        match ResetPassword::contact(contact.as_str(), code, password, confirm).send(&state.client) {
            Ok(()) => {
                println!("password updated, log in with the new password");

                return Ok(());
            },
            Err(RequestError::Api(err)) => match err.kind() {
                ApiErrorKind::Auth(AuthKind::InvalidOtp) |
                ApiErrorKind::Auth(AuthKind::OtpExpired) |
                ApiErrorKind::Auth(AuthKind::OtpNotFound) => {
                    println!("invalid code");
                    continue;
                },
                _ => {
                    return Err(error::Error::from(err));
                }
            },
            Err(err) => {
                return Err(err.into());
            }
        }
    }
}

pub fn logout(state: &mut AppState, _args: &ArgMatches) -> error::Result {
    state.sessions.clear();
    state.sessions.save()?;

    println!("logged out");

    Ok(())
}

pub fn whoami(state: &mut AppState, _args: &ArgMatches) -> error::Result {
    if let Some(session) = state.sessions.session() {
        let display = session.user.full_name()
            .unwrap_or_else(|| session.user.contact.clone());

        println!("{} ({})", display, session.user.user_type);
        println!("contact: {}", session.user.contact);
        println!("logged in since: {}", session.issued_at);
    } else if let Some(pending) = state.sessions.pending_registration() {
        println!(
            "{} verified for {} registration on {}, signup is not finished",
            pending.contact,
            pending.role,
            pending.verified_at
        );
    } else {
        println!("not logged in");
    }

    Ok(())
}
