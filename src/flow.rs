use std::time::{Duration, Instant};

use enroll_lib::contact::Contact;
use enroll_lib::names;
use enroll_lib::otp;
use enroll_lib::roles::{Role, Purpose};
use enroll_lib::sec::authn;
use enroll_api::{ApiError, ApiErrorKind};
use enroll_api::error::AuthKind;
use enroll_api::auth::session::CreatedSession;

/// how long after a successful send before another code may be requested
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

pub const ALREADY_REGISTERED: &str = "this contact is already registered";
pub const INVALID_CODE: &str = "invalid code";
pub const GENERIC_FAILURE: &str = "something went wrong, try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    CollectingInfo,
    CodeSent,
    Verified,
    CredentialSet,
}

/// what happens once the contact is verified. host and speaker signups
/// collect a password and receive tokens, the fellow signup hands the
/// verified contact to the registration screens instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Credential,
    Registration,
}

#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub role: Role,
}

impl FlowConfig {
    pub fn new(role: Role) -> Self {
        FlowConfig { role }
    }

    pub fn purpose(&self) -> Purpose {
        self.role.purpose()
    }

    pub fn terminal(&self) -> Terminal {
        match self.role {
            Role::Fellow => Terminal::Registration,
            Role::Host |
            Role::Speaker => Terminal::Credential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInfo {
    pub contact: Contact,
    pub first_name: String,
    pub last_name: String,
}

/// the backend request a driver must perform before the transition that
/// produced it can settle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CheckContact {
        contact: String,
    },
    RequestCode {
        contact: String,
        role: Role,
        purpose: Purpose,
        first_name: String,
        last_name: String,
    },
    ResendCode {
        contact: String,
        purpose: Purpose,
    },
    VerifyCode {
        contact: String,
        code: String,
        purpose: Purpose,
    },
    SetCredential {
        contact: String,
        password: String,
        confirm_password: String,
    },
}

/// successful reply for the call in flight. failures go through
/// [`SignupFlow::fail`] instead
#[derive(Debug)]
pub enum Reply {
    ContactExists { exists: bool },
    CodeSent,
    CodeVerified,
    SessionCreated(CreatedSession),
}

#[derive(Debug)]
pub enum Progress {
    /// a follow-up backend call is needed before the transition settles
    Next(Call),
    /// the transition settled and the machine advanced
    Advanced(FlowState),
    /// the backend refused the transition, state is unchanged and the
    /// message is available from last_error
    Rejected,
}

/// a transition that was refused before any backend call was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    Busy,
    WrongState,
    MissingField(&'static str),
    InvalidContact,
    InvalidCode,
    PasswordTooShort,
    PasswordMismatch,
    InvalidPassword,
    CooldownActive { remaining: u64 },
    NoPending,
    UnexpectedReply,
}

impl Refusal {
    /// refusals worth keeping as the machine's last error. busy and
    /// cooldown refusals are suppressed duplicates of a control that
    /// should have been disabled
    fn user_facing(&self) -> bool {
        match self {
            Refusal::MissingField(_) |
            Refusal::InvalidContact |
            Refusal::InvalidCode |
            Refusal::PasswordTooShort |
            Refusal::PasswordMismatch |
            Refusal::InvalidPassword => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Refusal::Busy => write!(f, "another request is already in flight"),
            Refusal::WrongState => write!(f, "this step is not active"),
            Refusal::MissingField(field) => write!(f, "please provide a value for {}", field),
            Refusal::InvalidContact => write!(f, "enter a valid 10-digit mobile number or an email address"),
            Refusal::InvalidCode => write!(f, "the verification code must be 6 digits"),
            Refusal::PasswordTooShort => write!(
                f, "the password must be at least {} characters", authn::MIN_PASSWORD_CHARS
            ),
            Refusal::PasswordMismatch => write!(f, "passwords do not match"),
            Refusal::InvalidPassword => write!(f, "the password contains characters that cannot be used"),
            Refusal::CooldownActive { remaining } => write!(
                f, "a new code can be requested in {} seconds", remaining
            ),
            Refusal::NoPending => write!(f, "no request is in flight"),
            Refusal::UnexpectedReply => write!(f, "reply does not match the request in flight"),
        }
    }
}

impl std::error::Error for Refusal {}

/// verified contact handed to the registration screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub contact: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCall {
    CheckContact,
    RequestCode,
    ResendCode,
    VerifyCode,
    SetCredential,
}

/// the signup workflow. one machine per identity candidate, parameterized
/// by role. transitions are two-phase: the submit methods validate locally
/// and return the backend [`Call`] to perform, the reply settles through
/// [`complete`](SignupFlow::complete) or [`fail`](SignupFlow::fail). at
/// most one call may be outstanding, a transition requested while one is
/// pending is refused without issuing a second call
pub struct SignupFlow {
    config: FlowConfig,
    state: FlowState,
    info: Option<CandidateInfo>,
    pending: Option<PendingCall>,
    resend_at: Option<Instant>,
    last_error: Option<String>,
    session: Option<CreatedSession>,
}

impl SignupFlow {
    pub fn new(config: FlowConfig) -> Self {
        SignupFlow {
            config,
            state: FlowState::CollectingInfo,
            info: None,
            pending: None,
            resend_at: None,
            last_error: None,
            session: None,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// entered info survives every failure so it can be corrected and
    /// resubmitted
    pub fn info(&self) -> Option<&CandidateInfo> {
        self.info.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_ref().map(|v| v.as_str())
    }

    pub fn issued_session(&self) -> Option<&CreatedSession> {
        self.session.as_ref()
    }

    pub fn take_session(&mut self) -> Option<CreatedSession> {
        self.session.take()
    }

    pub fn resend_remaining(&self, now: Instant) -> u64 {
        let Some(at) = self.resend_at else {
            return 0;
        };

        let dur = at.saturating_duration_since(now);
        let secs = dur.as_secs();

        if dur.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    pub fn resend_ready(&self, now: Instant) -> bool {
        self.resend_remaining(now) == 0
    }

    pub fn submit_info(
        &mut self,
        contact: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Call, Refusal> {
        self.guard(FlowState::CollectingInfo)?;

        if contact.trim().is_empty() {
            return Err(self.refuse(Refusal::MissingField("contact")));
        }

        if first_name.trim().is_empty() {
            return Err(self.refuse(Refusal::MissingField("first name")));
        }

        if last_name.trim().is_empty() {
            return Err(self.refuse(Refusal::MissingField("last name")));
        }

        let Some(parsed) = Contact::parse(contact) else {
            return Err(self.refuse(Refusal::InvalidContact));
        };

        if !names::name_part_valid(first_name) || !names::name_part_valid(last_name) {
            return Err(self.refuse(Refusal::MissingField("name")));
        }

        let info = CandidateInfo {
            contact: parsed,
            first_name: first_name.trim().to_owned(),
            last_name: last_name.trim().to_owned(),
        };

        let call = Call::CheckContact {
            contact: info.contact.as_str().to_owned(),
        };

        self.info = Some(info);
        self.pending = Some(PendingCall::CheckContact);
        self.last_error = None;

        Ok(call)
    }

    pub fn submit_code(&mut self, code: &str) -> Result<Call, Refusal> {
        self.guard(FlowState::CodeSent)?;

        let filtered = otp::filter_code_input(code);

        if !otp::code_valid(&filtered) {
            return Err(self.refuse(Refusal::InvalidCode));
        }

        let Some(info) = self.info.as_ref() else {
            return Err(Refusal::WrongState);
        };

        let call = Call::VerifyCode {
            contact: info.contact.as_str().to_owned(),
            code: filtered,
            purpose: self.config.purpose(),
        };

        self.pending = Some(PendingCall::VerifyCode);
        self.last_error = None;

        Ok(call)
    }

    pub fn resend_code(&mut self, now: Instant) -> Result<Call, Refusal> {
        self.guard(FlowState::CodeSent)?;

        let remaining = self.resend_remaining(now);

        if remaining > 0 {
            return Err(Refusal::CooldownActive { remaining });
        }

        let Some(info) = self.info.as_ref() else {
            return Err(Refusal::WrongState);
        };

        let call = Call::ResendCode {
            contact: info.contact.as_str().to_owned(),
            purpose: self.config.purpose(),
        };

        self.pending = Some(PendingCall::ResendCode);
        self.last_error = None;

        Ok(call)
    }

    pub fn submit_credential(
        &mut self,
        password: &str,
        confirm_password: &str,
    ) -> Result<Call, Refusal> {
        self.guard(FlowState::Verified)?;

        if self.config.terminal() != Terminal::Credential {
            return Err(Refusal::WrongState);
        }

        if password.is_empty() {
            return Err(self.refuse(Refusal::MissingField("password")));
        }

        if confirm_password.is_empty() {
            return Err(self.refuse(Refusal::MissingField("confirm password")));
        }

        if password != confirm_password {
            return Err(self.refuse(Refusal::PasswordMismatch));
        }

        if password.chars().count() < authn::MIN_PASSWORD_CHARS {
            return Err(self.refuse(Refusal::PasswordTooShort));
        }

        if !authn::password_valid(password) {
            return Err(self.refuse(Refusal::InvalidPassword));
        }

        let Some(info) = self.info.as_ref() else {
            return Err(Refusal::WrongState);
        };

        let call = Call::SetCredential {
            contact: info.contact.as_str().to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        };

        self.pending = Some(PendingCall::SetCredential);
        self.last_error = None;

        Ok(call)
    }

    /// fellow signups end here. the verified contact is handed to the
    /// registration flow instead of collecting a credential. passwords are
    /// never derived from the contact or name on this side
    pub fn handoff(&self) -> Result<Handoff, Refusal> {
        if self.pending.is_some() {
            return Err(Refusal::Busy);
        }

        if self.state != FlowState::Verified || self.config.terminal() != Terminal::Registration {
            return Err(Refusal::WrongState);
        }

        let Some(info) = self.info.as_ref() else {
            return Err(Refusal::WrongState);
        };

        Ok(Handoff {
            contact: info.contact.as_str().to_owned(),
            role: self.config.role,
        })
    }

    /// settle the call in flight with its successful reply
    pub fn complete(&mut self, reply: Reply, now: Instant) -> Result<Progress, Refusal> {
        let Some(pending) = self.pending else {
            return Err(Refusal::NoPending);
        };

        match (pending, reply) {
            (PendingCall::CheckContact, Reply::ContactExists { exists }) => {
                self.pending = None;

                if exists {
                    self.last_error = Some(ALREADY_REGISTERED.to_owned());

                    return Ok(Progress::Rejected);
                }

                let Some(info) = self.info.as_ref() else {
                    return Err(Refusal::WrongState);
                };

                let call = Call::RequestCode {
                    contact: info.contact.as_str().to_owned(),
                    role: self.config.role,
                    purpose: self.config.purpose(),
                    first_name: info.first_name.clone(),
                    last_name: info.last_name.clone(),
                };

                self.pending = Some(PendingCall::RequestCode);

                Ok(Progress::Next(call))
            },
            (PendingCall::RequestCode, Reply::CodeSent) => {
                self.pending = None;
                self.state = FlowState::CodeSent;
                self.resend_at = Some(now + RESEND_COOLDOWN);

                Ok(Progress::Advanced(self.state))
            },
            (PendingCall::ResendCode, Reply::CodeSent) => {
                self.pending = None;
                self.resend_at = Some(now + RESEND_COOLDOWN);

                Ok(Progress::Advanced(self.state))
            },
            (PendingCall::VerifyCode, Reply::CodeVerified) => {
                self.pending = None;
                self.state = FlowState::Verified;

                Ok(Progress::Advanced(self.state))
            },
            (PendingCall::SetCredential, Reply::SessionCreated(session)) => {
                self.pending = None;
                self.session = Some(session);
                self.state = FlowState::CredentialSet;

                Ok(Progress::Advanced(self.state))
            },
            _ => Err(Refusal::UnexpectedReply),
        }
    }

    /// settle the call in flight with a failure. the machine stays on the
    /// current step and records a user-facing message. transport failures
    /// (timeouts included) pass None and get the generic fallback
    pub fn fail(&mut self, err: Option<&ApiError>) {
        self.pending = None;
        self.last_error = Some(match err {
            Some(api) => failure_message(api),
            None => GENERIC_FAILURE.to_owned(),
        });
    }

    fn guard(&mut self, expect: FlowState) -> Result<(), Refusal> {
        if self.pending.is_some() {
            return Err(Refusal::Busy);
        }

        if self.state != expect {
            return Err(Refusal::WrongState);
        }

        Ok(())
    }

    fn refuse(&mut self, refusal: Refusal) -> Refusal {
        if refusal.user_facing() {
            self.last_error = Some(refusal.to_string());
        }

        refusal
    }
}

/// wrong and expired codes are deliberately indistinguishable to the user.
/// everything else surfaces the server's message when it has one
fn failure_message(err: &ApiError) -> String {
    match err.kind() {
        ApiErrorKind::Auth(AuthKind::AlreadyRegistered) => ALREADY_REGISTERED.to_owned(),
        ApiErrorKind::Auth(AuthKind::InvalidOtp) |
        ApiErrorKind::Auth(AuthKind::OtpExpired) |
        ApiErrorKind::Auth(AuthKind::OtpNotFound) => INVALID_CODE.to_owned(),
        ApiErrorKind::Auth(AuthKind::OtpAttemptsExceeded) => err.message()
            .map(|v| v.to_owned())
            .unwrap_or_else(|| INVALID_CODE.to_owned()),
        _ => err.message()
            .map(|v| v.to_owned())
            .unwrap_or_else(|| GENERIC_FAILURE.to_owned()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use enroll_api::users::User;

    fn host_flow() -> SignupFlow {
        SignupFlow::new(FlowConfig::new(Role::Host))
    }

    fn fellow_flow() -> SignupFlow {
        SignupFlow::new(FlowConfig::new(Role::Fellow))
    }

    fn created_session() -> CreatedSession {
        CreatedSession {
            user: User {
                id: 7,
                contact: String::from("9876543210"),
                user_type: Role::Host,
                first_name: Some(String::from("Asha")),
                last_name: Some(String::from("Rao")),
                profile_photo_url: None,
            },
            access_token: String::from("access"),
            refresh_token: String::from("refresh"),
        }
    }

    /// drive a flow from collecting info to a sent code
    fn to_code_sent(flow: &mut SignupFlow, now: Instant) {
        let call = flow.submit_info("9876543210", "Asha", "Rao").unwrap();
        assert!(matches!(call, Call::CheckContact { .. }));

        let progress = flow.complete(Reply::ContactExists { exists: false }, now).unwrap();
        let Progress::Next(call) = progress else {
            panic!("expected a follow-up call, got {:?}", progress);
        };
        assert!(matches!(call, Call::RequestCode { .. }));

        let progress = flow.complete(Reply::CodeSent, now).unwrap();
        assert!(matches!(progress, Progress::Advanced(FlowState::CodeSent)));
    }

    #[test]
    fn submit_info_sends_code_for_new_contact() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);

        assert_eq!(flow.state(), FlowState::CodeSent);
        assert!(flow.last_error().is_none());
        assert_eq!(flow.resend_remaining(now), 60);
    }

    #[test]
    fn submit_info_conflict_stays_put() {
        let mut flow = host_flow();
        let now = Instant::now();

        flow.submit_info("9876543210", "Asha", "Rao").unwrap();

        let progress = flow.complete(Reply::ContactExists { exists: true }, now).unwrap();

        assert!(matches!(progress, Progress::Rejected), "no send-code call may follow");
        assert_eq!(flow.state(), FlowState::CollectingInfo);
        assert!(flow.last_error().unwrap().contains("already registered"));
        assert!(!flow.in_flight());
    }

    #[test]
    fn submit_info_validates_locally() {
        let mut flow = host_flow();

        assert_eq!(
            flow.submit_info("", "Asha", "Rao"),
            Err(Refusal::MissingField("contact"))
        );
        assert_eq!(
            flow.submit_info("9876543210", "", "Rao"),
            Err(Refusal::MissingField("first name"))
        );
        assert_eq!(
            flow.submit_info("1234567890", "Asha", "Rao"),
            Err(Refusal::InvalidContact),
            "mobile numbers start with 6-9"
        );
        assert_eq!(
            flow.submit_info("98765", "Asha", "Rao"),
            Err(Refusal::InvalidContact)
        );

        assert_eq!(flow.state(), FlowState::CollectingInfo);
        assert!(!flow.in_flight());
    }

    #[test]
    fn duplicate_submit_while_in_flight_is_suppressed() {
        let mut flow = host_flow();

        flow.submit_info("9876543210", "Asha", "Rao").unwrap();

        assert_eq!(
            flow.submit_info("9876543210", "Asha", "Rao"),
            Err(Refusal::Busy),
            "second submit may not produce a second call"
        );
        assert!(flow.in_flight());
    }

    #[test]
    fn submit_code_rejects_malformed_codes_locally() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);

        assert_eq!(flow.submit_code("1234"), Err(Refusal::InvalidCode));
        assert_eq!(flow.submit_code("12a456"), Err(Refusal::InvalidCode), "filtered to five digits");
        assert_eq!(flow.submit_code(""), Err(Refusal::InvalidCode));
        assert!(!flow.in_flight(), "no network call for a malformed code");

        let call = flow.submit_code(" 123456 ").unwrap();
        assert!(matches!(call, Call::VerifyCode { ref code, .. } if code == "123456"));
    }

    #[test]
    fn submit_code_wrong_state() {
        let mut flow = host_flow();

        assert_eq!(flow.submit_code("123456"), Err(Refusal::WrongState));
    }

    #[test]
    fn wrong_code_keeps_step_and_fields() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);
        flow.submit_code("000000").unwrap();

        let err = ApiError::from(AuthKind::InvalidOtp);
        flow.fail(Some(&err));

        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(flow.last_error(), Some(INVALID_CODE));
        assert!(!flow.in_flight());

        let info = flow.info().unwrap();
        assert_eq!(info.contact.as_str(), "9876543210");
        assert_eq!(info.first_name, "Asha");
    }

    #[test]
    fn expired_and_wrong_codes_read_the_same() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);
        flow.submit_code("000000").unwrap();

        let err = ApiError::from((AuthKind::OtpExpired, "OTP has expired. Please request a new one"));
        flow.fail(Some(&err));

        assert_eq!(flow.last_error(), Some(INVALID_CODE));
    }

    #[test]
    fn server_failure_during_verify_keeps_its_message() {
        use enroll_api::error::GeneralKind;

        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);
        flow.submit_code("123456").unwrap();

        let err = ApiError::from((
            GeneralKind::InternalFailure,
            "database unavailable, please retry later"
        ));
        flow.fail(Some(&err));

        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(
            flow.last_error(),
            Some("database unavailable, please retry later"),
            "only code failures collapse to the invalid code message"
        );
    }

    #[test]
    fn transport_failure_gets_generic_message() {
        let mut flow = host_flow();

        flow.submit_info("9876543210", "Asha", "Rao").unwrap();
        flow.fail(None);

        assert_eq!(flow.state(), FlowState::CollectingInfo);
        assert_eq!(flow.last_error(), Some(GENERIC_FAILURE));
        assert!(!flow.in_flight());
    }

    #[test]
    fn resend_cooldown_counts_down_by_seconds() {
        let mut flow = host_flow();
        let t0 = Instant::now();

        to_code_sent(&mut flow, t0);

        assert_eq!(flow.resend_remaining(t0), 60);
        assert_eq!(flow.resend_remaining(t0 + Duration::from_secs(1)), 59);
        assert_eq!(flow.resend_remaining(t0 + Duration::from_secs(30)), 30);
        assert_eq!(flow.resend_remaining(t0 + Duration::from_millis(30_500)), 30);
        assert_eq!(flow.resend_remaining(t0 + Duration::from_secs(60)), 0);
        assert!(flow.resend_ready(t0 + Duration::from_secs(61)));
    }

    #[test]
    fn resend_refused_during_cooldown() {
        let mut flow = host_flow();
        let t0 = Instant::now();

        to_code_sent(&mut flow, t0);

        assert_eq!(
            flow.resend_code(t0 + Duration::from_secs(30)),
            Err(Refusal::CooldownActive { remaining: 30 })
        );
        assert!(!flow.in_flight(), "refused resend issues no call");

        let at = t0 + Duration::from_secs(61);
        let call = flow.resend_code(at).unwrap();
        assert!(matches!(call, Call::ResendCode { .. }));

        flow.complete(Reply::CodeSent, at).unwrap();
        assert_eq!(flow.resend_remaining(at), 60, "cooldown restarts after a resend");
        assert_eq!(flow.state(), FlowState::CodeSent);
    }

    #[test]
    fn submit_credential_local_rejections() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);
        flow.submit_code("123456").unwrap();
        flow.complete(Reply::CodeVerified, now).unwrap();

        assert_eq!(
            flow.submit_credential("short", "short"),
            Err(Refusal::PasswordTooShort)
        );
        assert_eq!(
            flow.submit_credential("Str0ng!Pass", "Str0ng!Pass2"),
            Err(Refusal::PasswordMismatch)
        );
        assert_eq!(
            flow.submit_credential("", ""),
            Err(Refusal::MissingField("password"))
        );
        assert_eq!(
            flow.submit_credential("aaaaaaaa", "aaaaaaaa").map(|_| ()),
            Ok(()),
            "a weak strength score is not a gate"
        );
    }

    #[test]
    fn host_signup_end_to_end() {
        let mut flow = host_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);

        flow.submit_code("123456").unwrap();
        let progress = flow.complete(Reply::CodeVerified, now).unwrap();
        assert!(matches!(progress, Progress::Advanced(FlowState::Verified)));

        let call = flow.submit_credential("Str0ng!Pass", "Str0ng!Pass").unwrap();
        assert!(matches!(call, Call::SetCredential { .. }));

        let progress = flow.complete(Reply::SessionCreated(created_session()), now).unwrap();
        assert!(matches!(progress, Progress::Advanced(FlowState::CredentialSet)));

        let session = flow.issued_session().unwrap();
        assert_eq!(session.user.contact, "9876543210");
        assert!(!session.access_token.is_empty());
        assert!(!session.refresh_token.is_empty());
    }

    #[test]
    fn fellow_flow_hands_off_instead_of_collecting_credential() {
        let mut flow = fellow_flow();
        let now = Instant::now();

        assert!(matches!(flow.handoff(), Err(Refusal::WrongState)));

        to_code_sent(&mut flow, now);
        flow.submit_code("123456").unwrap();
        flow.complete(Reply::CodeVerified, now).unwrap();

        assert_eq!(
            flow.submit_credential("Str0ng!Pass", "Str0ng!Pass"),
            Err(Refusal::WrongState),
            "fellow signups never collect a password here"
        );

        let handoff = flow.handoff().unwrap();
        assert_eq!(handoff.contact, "9876543210");
        assert_eq!(handoff.role, Role::Fellow);
    }

    #[test]
    fn fellow_purpose_tag() {
        let mut flow = fellow_flow();
        let now = Instant::now();

        to_code_sent(&mut flow, now);

        let call = flow.submit_code("123456").unwrap();
        assert!(matches!(call, Call::VerifyCode { purpose: Purpose::SignupFellow, .. }));
    }

    #[test]
    fn complete_without_pending_call() {
        let mut flow = host_flow();

        assert_eq!(
            flow.complete(Reply::CodeSent, Instant::now()).unwrap_err(),
            Refusal::NoPending
        );
    }

    #[test]
    fn mismatched_reply_is_refused() {
        let mut flow = host_flow();

        flow.submit_info("9876543210", "Asha", "Rao").unwrap();

        assert_eq!(
            flow.complete(Reply::CodeVerified, Instant::now()).unwrap_err(),
            Refusal::UnexpectedReply
        );
        assert!(flow.in_flight(), "the original call is still outstanding");
    }
}
