//! Integration tests for vipera-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vipera() -> Command {
    Command::cargo_bin("vipera").unwrap()
}

#[test]
fn missing_module_name_prints_usage_on_stdout_and_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("MODULE"));

    // Zero filesystem side effects.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn help_flag_succeeds() {
    vipera()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vipera"))
        .stdout(predicate::str::contains("MODULE"));
}

#[test]
fn version_flag_succeeds() {
    vipera()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generates_the_full_payments_module() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .arg("payments")
        .assert()
        .success();

    let module = temp.path().join("Payments");
    for relative in [
        "Contract/PaymentsContract.swift",
        "View/PaymentsViewController.swift",
        "Interactor/PaymentsInteracter.swift",
        "Presenter/PaymentsPresenter.swift",
        "Router/PaymentsRouter.swift",
        "Common/Service/PaymentsEndpoint.swift",
        "Common/Service/PaymentsService.swift",
    ] {
        assert!(module.join(relative).is_file(), "missing {relative}");
    }

    let router = std::fs::read_to_string(module.join("Router/PaymentsRouter.swift")).unwrap();
    for type_name in [
        "PaymentsViewController",
        "PaymentsPresenter",
        "PaymentsRouter",
        "PaymentsInteracter",
        "PaymentsService",
    ] {
        assert!(router.contains(type_name), "router missing {type_name}");
    }
}

#[test]
fn lowercase_input_creates_capitalized_module_directory() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .arg("checkout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checkout"));

    assert!(temp.path().join("Checkout").is_dir());
    assert!(!temp.path().join("checkout").exists());
}

#[test]
fn rerun_overwrites_and_warns() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .arg("payments")
        .assert()
        .success();

    vipera()
        .current_dir(temp.path())
        .arg("payments")
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten"));

    // Still exactly the seven artifacts.
    let service_dir = temp.path().join("Payments/Common/Service");
    assert_eq!(std::fs::read_dir(service_dir).unwrap().count(), 2);
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .args(["-q", "payments"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("Payments").is_dir());
}

#[test]
fn author_config_pins_the_header_author() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("vipera.toml");
    std::fs::write(&config, "author = \"Config Author\"\n").unwrap();

    vipera()
        .current_dir(temp.path())
        .args(["--config", "vipera.toml", "payments"])
        .assert()
        .success();

    let contract =
        std::fs::read_to_string(temp.path().join("Payments/Contract/PaymentsContract.swift"))
            .unwrap();
    assert!(contract.contains("Created by Config Author on"));
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    vipera()
        .current_dir(temp.path())
        .args(["--config", "does-not-exist.toml", "payments"])
        .assert()
        .failure()
        .code(4);

    assert!(!temp.path().join("Payments").exists());
}
