use std::time::Instant;

use chrono::Utc;
use clap::ArgMatches;

use enroll_api::client::ApiClient;
use enroll_api::client::auth::signup::{
    CheckContact,
    RequestCode,
    VerifyCode,
    ResendCode,
    SetCredential,
};
use enroll_api::client::error::RequestError;
use enroll_lib::otp;
use enroll_lib::roles::Role;
use enroll_lib::sec::authn::{self, Strength};

use crate::error::{self, Context};
use crate::flow::{
    Call,
    FlowConfig,
    FlowState,
    Progress,
    Reply,
    SignupFlow,
    Terminal,
};
use crate::input;
use crate::state::AppState;

pub fn signup(state: &mut AppState, args: &ArgMatches) -> error::Result {
    if state.sessions.session().is_some() {
        return Err(error::Error::from(
            "a session is already stored, log out before signing up"
        ));
    }

    let role_arg = args.get_one::<String>("role").unwrap();
    let role = Role::from_str(role_arg)
        .context("role must be one of fellow, host or speaker")?;

    let mut flow = SignupFlow::new(FlowConfig::new(role));

    collect_info(state, &mut flow)?;
    verify_code(state, &mut flow)?;

    match flow.config().terminal() {
        Terminal::Credential => set_credential(state, &mut flow),
        Terminal::Registration => finish_handoff(state, &flow),
    }
}

fn collect_info(state: &mut AppState, flow: &mut SignupFlow) -> error::Result {
    while flow.state() == FlowState::CollectingInfo {
        let contact = input::read_stdin_trimmed("mobile number or email: ")?;
        let first_name = input::read_stdin_trimmed("first name: ")?;
        let last_name = input::read_stdin_trimmed("last name: ")?;

        let call = match flow.submit_info(&contact, &first_name, &last_name) {
            Ok(call) => call,
            Err(refusal) => {
                println!("{}", refusal);
                continue;
            }
        };

        if !settle(state, flow, call)? {
            if let Some(msg) = flow.last_error() {
                println!("{}", msg);
            }
        }
    }

    Ok(())
}

fn verify_code(state: &mut AppState, flow: &mut SignupFlow) -> error::Result {
    let contact = flow.info()
        .context("no contact information collected")?
        .contact
        .as_str()
        .to_owned();

    println!("a {} digit code was sent to {}", otp::OTP_DIGITS, contact);

    while flow.state() == FlowState::CodeSent {
        let given = input::read_stdin_trimmed("code (or \"resend\"): ")?;

        let result = if given.eq_ignore_ascii_case("resend") {
            flow.resend_code(Instant::now())
        } else {
            flow.submit_code(&given)
        };

        let call = match result {
            Ok(call) => call,
            Err(refusal) => {
                println!("{}", refusal);
                continue;
            }
        };

        let resending = matches!(call, Call::ResendCode { .. });

        if settle(state, flow, call)? {
            if resending {
                println!("a new code was sent to {}", contact);
            }
        } else if let Some(msg) = flow.last_error() {
            println!("{}", msg);
        }
    }

    Ok(())
}

fn set_credential(state: &mut AppState, flow: &mut SignupFlow) -> error::Result {
    while flow.state() == FlowState::Verified {
        let password = rpassword::prompt_password("password: ")?;

        let strength = Strength::from_score(authn::strength_score(&password));
        println!("password strength: {}", strength);

        let confirm = rpassword::prompt_password("confirm password: ")?;

        let call = match flow.submit_credential(&password, &confirm) {
            Ok(call) => call,
            Err(refusal) => {
                println!("{}", refusal);
                continue;
            }
        };

        if !settle(state, flow, call)? {
            if let Some(msg) = flow.last_error() {
                println!("{}", msg);
            }
        }
    }

    let session = flow.take_session()
        .context("signup finished without an issued session")?;

    let display = session.user.full_name()
        .unwrap_or_else(|| session.user.contact.clone());

    state.sessions.set_session(session, Utc::now());
    state.sessions.save()?;

    println!("signed up and logged in as {}", display);

    Ok(())
}

fn finish_handoff(state: &mut AppState, flow: &SignupFlow) -> error::Result {
    let handoff = flow.handoff()?;

    state.sessions.set_pending_registration(
        handoff.contact.clone(),
        handoff.role,
        Utc::now()
    );
    state.sessions.save()?;

    println!(
        "{} verified. continue with {} registration to finish signing up",
        handoff.contact,
        handoff.role
    );

    Ok(())
}

/// run the backend call a transition produced, plus any follow-up it
/// settles into, until the machine advances or rejects. Ok(false) means
/// the step stayed put and last_error has the reason
fn settle(state: &mut AppState, flow: &mut SignupFlow, mut call: Call) -> error::Result<bool> {
    loop {
        match execute(&state.client, call) {
            Ok(reply) => match flow.complete(reply, Instant::now())? {
                Progress::Next(next) => {
                    call = next;
                },
                Progress::Advanced(_) => {
                    return Ok(true);
                },
                Progress::Rejected => {
                    return Ok(false);
                }
            },
            Err(err) => {
                match &err {
                    RequestError::Api(api) => flow.fail(Some(api)),
                    RequestError::Reqwest(_) => {
                        tracing::error!("server request failed: {}", err);

                        flow.fail(None);
                    }
                }

                return Ok(false);
            }
        }
    }
}

fn execute(client: &ApiClient, call: Call) -> Result<Reply, RequestError> {
    match call {
        Call::CheckContact { contact } => {
            let result = CheckContact::contact(contact).send(client)?;

            Ok(Reply::ContactExists {
                exists: result.into_payload().exists
            })
        },
        Call::RequestCode { contact, role, first_name, last_name, .. } => {
            let mut request = RequestCode::contact(contact, role);
            request.first_name(first_name);
            request.last_name(last_name);

            request.send(client)?;

            Ok(Reply::CodeSent)
        },
        Call::VerifyCode { contact, code, purpose } => {
            VerifyCode::code(contact, code, purpose).send(client)?;

            Ok(Reply::CodeVerified)
        },
        Call::ResendCode { contact, purpose } => {
            ResendCode::contact(contact, purpose).send(client)?;

            Ok(Reply::CodeSent)
        },
        Call::SetCredential { contact, password, confirm_password } => {
            let result = SetCredential::contact(contact, password, confirm_password)
                .send(client)?;

            Ok(Reply::SessionCreated(result.into_payload()))
        },
    }
}
