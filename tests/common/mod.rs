use assert_cmd::Command;

pub fn daymark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daymark").unwrap();
    cmd.env_remove("DAYMARK_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
