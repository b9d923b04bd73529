use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

const INPUT: &str = "// Current forwarded port\n\
    Json(Optional<quint16>, port)\n\
    \n\
    Json(std::deque<QString>, recentHosts)\n";

const EXPECTED: &str = "/// Current forwarded port\n\
    port: Option<u16>,\n\
    \n\
    recent_hosts: Vec<String>,\n";

/// Piped stdin/stdout and file input with `-o` produce byte-identical
/// output.
#[test]
fn file_and_stdio_paths_agree() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transdecl"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(INPUT.as_bytes())
        .unwrap();
    let piped = child.wait_with_output().unwrap();
    assert!(piped.status.success());
    assert_eq!(piped.stdout, EXPECTED.as_bytes());

    let dir = std::env::temp_dir();
    let in_path = dir.join(format!("transdecl-cli-{}.h", std::process::id()));
    let out_path = dir.join(format!("transdecl-cli-{}.rs", std::process::id()));
    fs::write(&in_path, INPUT).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_transdecl"))
        .arg(&in_path)
        .arg("-o")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&out_path).unwrap(), piped.stdout);

    fs::remove_file(&in_path).unwrap();
    fs::remove_file(&out_path).unwrap();
}

/// An unknown type makes the binary exit nonzero.
#[test]
fn unknown_type_fails_the_run() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transdecl"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Json(size_t, broken)\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
}
