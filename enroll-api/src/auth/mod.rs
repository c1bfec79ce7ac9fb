pub mod signup;
pub mod session;
pub mod password;
