#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    time::Duration,
};

use config::{Check, Network, Scenario};
use harness::{
    generate_accounts, query_balances, ContractMode, EndpointSuite, HarnessError,
    RPC_ENDPOINT_PLACEHOLDER,
};

const ZERO_REPORT: &str =
    r#"{"0xaaaa": {"gas": "0", "token": "0"}, "0xbbbb": {"gas": "0", "token": "0"}}"#;

fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("erc20_processor");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_template(dir: &Path) -> PathBuf {
    let path = dir.join("config-payments_template.toml");
    fs::write(
        &path,
        format!("[chain.holesky]\nrpc-endpoints = [\"{RPC_ENDPOINT_PLACEHOLDER}\"]\n"),
    )
    .unwrap();
    path
}

fn scenario(processor: PathBuf, template: PathBuf) -> Scenario {
    Scenario {
        processor,
        template,
        account_count: 2,
        probe_timeout_secs: 10,
        checks: vec![Check {
            network: Network::Holesky,
            endpoints: vec!["https://example.org".to_string()],
        }],
    }
}

#[tokio::test]
async fn full_suite_passes_with_zero_balances() {
    let dir = tempfile::tempdir().unwrap();
    // the balance branch checks that the harness staged both files into
    // the working directory before probing
    let stub = write_stub(
        dir.path(),
        &format!(
            r##"case "$1" in
generate-key)
    echo "# ETH_ADDRESS_0: 0xaaaa"
    echo "ETH_PRIVATE_KEYS=deadbeef,feedface"
    ;;
balance)
    test -f config-payments.toml || exit 3
    test -f .env || exit 4
    echo '{ZERO_REPORT}'
    ;;
esac"##
        ),
    );
    let template = write_template(dir.path());

    let suite = EndpointSuite::new(scenario(stub, template)).unwrap();
    suite.run().await.unwrap();
}

#[tokio::test]
async fn non_zero_balance_fails_the_suite() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(
        dir.path(),
        r#"case "$1" in
generate-key) echo "ETH_PRIVATE_KEYS=deadbeef,feedface" ;;
balance) echo '{"0xaaaa": {"gas": "31415", "token": "0"}, "0xbbbb": {"gas": "0", "token": "0"}}' ;;
esac"#,
    );
    let template = write_template(dir.path());

    let suite = EndpointSuite::new(scenario(stub, template)).unwrap();
    let err = suite.run().await.unwrap_err();
    assert!(matches!(err, HarnessError::NonZeroGasBalance { .. }));
}

#[tokio::test]
async fn failing_processor_is_fatal_even_with_json_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(
        dir.path(),
        &format!(
            r#"case "$1" in
generate-key) echo "ETH_PRIVATE_KEYS=deadbeef,feedface" ;;
balance) echo '{ZERO_REPORT}'; exit 1 ;;
esac"#
        ),
    );
    let template = write_template(dir.path());

    let suite = EndpointSuite::new(scenario(stub, template)).unwrap();
    let err = suite.run().await.unwrap_err();
    assert!(matches!(err, HarnessError::ProcessFailed { .. }));
}

#[tokio::test]
async fn hanging_processor_hits_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "sleep 30");
    let template = write_template(dir.path());

    let mut scenario = scenario(stub, template);
    scenario.probe_timeout_secs = 1;

    let suite = EndpointSuite::new(scenario).unwrap();
    let err = suite.run().await.unwrap_err();
    assert!(matches!(err, HarnessError::Timeout { secs: 1 }));
}

#[tokio::test]
async fn missing_processor_fails_to_spawn() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path());

    let res = EndpointSuite::new(scenario(dir.path().join("no-such-binary"), template));
    assert!(matches!(res, Err(HarnessError::Spawn { .. })));
}

#[tokio::test]
async fn provisioning_writes_captured_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), r#"echo "KEYS_REQUESTED=$3""#);
    let env_file = dir.path().join(".env");

    generate_accounts(&stub, 7, &env_file, Duration::from_secs(10))
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "KEYS_REQUESTED=7\n");
}

#[tokio::test]
async fn provisioning_rejects_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "true");
    let env_file = dir.path().join(".env");

    let err = generate_accounts(&stub, 7, &env_file, Duration::from_secs(10))
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::EmptyOutput));
}

#[tokio::test]
async fn probe_forwards_the_no_wrapper_contract_flag() {
    let dir = tempfile::tempdir().unwrap();
    // echoes its arguments to stderr so the test can see the exact
    // command line the probe built
    let stub = write_stub(dir.path(), r#"echo "$@" >&2; echo '{}'"#);

    let direct = query_balances(
        &stub,
        Network::Polygon,
        ContractMode::Direct,
        dir.path(),
        Duration::from_secs(10),
    )
    .await
    .unwrap();
    let stderr = String::from_utf8(direct.stderr).unwrap();
    assert_eq!(stderr.trim(), "balance -c polygon --no-wrapper-contract");

    let wrapper = query_balances(
        &stub,
        Network::Polygon,
        ContractMode::Wrapper,
        dir.path(),
        Duration::from_secs(10),
    )
    .await
    .unwrap();
    let stderr = String::from_utf8(wrapper.stderr).unwrap();
    assert_eq!(stderr.trim(), "balance -c polygon");
}
