#![expect(missing_docs)]

use std::process::Command;

#[test]
fn snapshot_driver_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_remove-ext"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run remove-ext");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    example
    literal?
    ");
}
