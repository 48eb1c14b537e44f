//! Ctrl-C handling of the real binary.
#![cfg(unix)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use serde_json::json;
use tempfile::tempdir;

fn wait_for_output(rx: &mpsc::Receiver<Vec<u8>>, needle: &str, timeout: Duration) -> String {
    let deadline = Instant::now() + timeout;
    let mut seen = Vec::new();
    while !String::from_utf8_lossy(&seen).contains(needle) {
        let left = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(left) {
            Ok(chunk) => seen.extend(chunk),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&seen).into_owned()
}

fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().expect("try_wait") {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_ctrl_c_at_code_prompt_exits() {
    let dir = tempdir().expect("temp dir");
    let home = dir.path().join("home");
    std::fs::create_dir_all(&home).expect("home");
    let secret_path = dir.path().join("client_secret.json");
    let secret = json!({
        "installed": {
            "client_id": "123.apps.googleusercontent.com",
            "client_secret": "s3cr3t",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "http://127.0.0.1:9/token",
            "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob"]
        }
    });
    std::fs::write(&secret_path, secret.to_string()).expect("write secret");

    let mut child = Command::new(env!("CARGO_BIN_EXE_tukija"))
        .arg("--client-secret")
        .arg(&secret_path)
        .arg("auth")
        .current_dir(dir.path())
        .env("HOME", &home)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tukija");

    // Held open so the prompt keeps waiting for a code.
    let _stdin = child.stdin.take().expect("stdin");
    let mut stdout = child.stdout.take().expect("stdout");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0_u8; 1024];
        while let Ok(read) = stdout.read(&mut buf) {
            if read == 0 || tx.send(buf[..read].to_vec()).is_err() {
                break;
            }
        }
    });

    let seen = wait_for_output(&rx, "Code: ", Duration::from_secs(10));
    if !seen.contains("Code: ") {
        let _ = child.kill();
        panic!("no code prompt, output was: {seen:?}");
    }

    let sent = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("run kill");
    assert!(sent.success());

    let Some(status) = wait_for_exit(&mut child, Duration::from_secs(5)) else {
        let _ = child.kill();
        let _ = child.wait();
        panic!("tukija still running 5s after SIGINT");
    };

    assert!(!status.success());
    assert_eq!(status.code(), Some(130));
    assert!(!home.join(".credentials").join("tukija.json").exists());
}
