//! Test fixtures and constants.

/// Key id passed to commands that encrypt.
pub const TEST_KEY_ID: &str = "alias/kmsenv-test";

/// Ciphertext the mock backend produces for `plaintext`.
#[cfg(feature = "test-kms")]
pub fn sealed(plaintext: &str) -> String {
    kmsenv::core::cipher::mock::MockKms::seal(plaintext)
}

/// A file mixing plain and encrypted values, with its decrypted form.
#[cfg(feature = "test-kms")]
pub fn mixed_file() -> (String, &'static str) {
    let content = format!(
        "DATABASE_URL=postgres://localhost/mydb?sslmode=disable\nAPI_KEY=secret:{}\nREGION=eu-west-1\nJWT_SECRET=secret:{}\n",
        sealed("sk-test-12345"),
        sealed("super=secret=jwt"),
    );
    let expected = "DATABASE_URL=postgres://localhost/mydb?sslmode=disable\nAPI_KEY=sk-test-12345\nREGION=eu-west-1\nJWT_SECRET=super=secret=jwt\n";
    (content, expected)
}
