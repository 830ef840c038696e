use httpmock::prelude::*;
use std::process::Command;

fn mfc_probe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mfc-probe"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_prints_report_to_stdout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/mfc.js");
        then.status(200)
            .body("mfc.flow_value = 12.5;\nmfc.pressure_value = 1.333;\n");
    });

    let output = mfc_probe()
        .args(["--url", &server.url("/mfc.js")])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Flow rate: 12.5\npressure value: 1.333\npressure value in mbar: 1.0\n"
    );
}

#[test]
fn test_cli_non_200_exits_normally() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/mfc.js");
        then.status(500);
    });

    let output = mfc_probe()
        .args(["--host", &server.address().to_string()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Failed to fetch mfc.js, status code: 500\n");
}

#[test]
fn test_cli_invalid_config_exits_with_one() {
    let output = mfc_probe()
        .args(["--url", "not-a-url"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_unreachable_device_exits_with_two() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let output = mfc_probe()
        .args([
            "--url",
            &format!("http://127.0.0.1:{}/mfc.js", port),
            "--timeout-seconds",
            "2",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
