//! Demo login against a fixed credential table.
//!
//! This is a demo mechanism, not a trust boundary: plain-text comparison,
//! no hashing, no lockout, no rate limiting, on purpose.

/// The mentor-provided demo accounts.
const DEMO_ACCOUNTS: [(&str, &str); 4] = [
    ("neel", "1234"),
    ("soumy", "1111"),
    ("vivek", "2222"),
    ("student", "student"),
];

/// Lowercase, trimmed form of a username, as stored in the session.
#[must_use]
pub fn normalize(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Check a username/password pair against the demo table.
///
/// The username is normalized before lookup; the password is trimmed and
/// must match exactly.
#[must_use]
pub fn verify(username: &str, password: &str) -> bool {
    let username = normalize(username);
    let password = password.trim();
    DEMO_ACCOUNTS
        .iter()
        .any(|(user, pass)| *user == username && *pass == password)
}
