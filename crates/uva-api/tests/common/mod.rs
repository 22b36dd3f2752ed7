#![allow(dead_code)]

pub mod test_harness;

pub use test_harness::TestHarness;

use assert_cmd::Command;

pub const TEST_TOKEN: &str = "tok-test-abc123";

pub fn uva_api_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("uva-api"));
    cmd.env_remove("RUST_LOG")
        .env_remove("UVA_API_LOG")
        .env_remove("UVA_API_CREDENTIALS_FILE")
        .env("NO_COLOR", "1");
    cmd
}
