/// Password hash stored for fixture users.
///
/// It does not parse as a PBKDF2 hash, so logging in as a fixture user always fails.
/// Tests exercising login register their user through the auth service instead.
pub static MOCK_PASSWORD_HASH: &str = "!unusable";

/// Password used by tests that register users through the auth service.
pub static TEST_PASSWORD: &str = "correct horse battery";
