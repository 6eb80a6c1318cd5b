use assert_cmd::Command;
use predicates::prelude::*;

fn bootforge() -> Command {
    Command::cargo_bin("bootforge").expect("binary builds")
}

#[test]
fn keymap_writes_the_768_byte_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("keymap.bin");

    bootforge()
        .args(["keymap", "-o"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(bytes.len(), 768);

    // Spot-check the driver contract on the default AZERTY layout.
    assert_eq!(bytes[0x02], b'&');
    assert_eq!(bytes[0x02 + 256], b'1');
    assert_eq!(bytes[0x48], b'8');
    assert_eq!(bytes[0x48 + 512], 0x11);
    assert_eq!(bytes[0x50 + 512], 0x12);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.bin");
    let second = dir.path().join("b.bin");

    for out in [&first, &second] {
        bootforge().args(["keymap", "-o"]).arg(out).assert().success();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn qwerty_layout_shares_the_numpad_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("qwerty.bin");

    bootforge()
        .args(["keymap", "--layout", "qwerty", "-o"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(bytes.len(), 768);
    assert_eq!(bytes[0x10], b'q');
    assert_eq!(bytes[0x02], b'1');
    assert_eq!(bytes[0x02 + 256], b'!');
    assert_eq!(bytes[0x48 + 512], 0x11);
}

#[test]
fn custom_rule_file_replaces_the_layout() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("rules.json");
    let out = dir.path().join("custom.bin");

    std::fs::write(
        &rules,
        r#"[{"scancode": 2, "normal": "x", "shift": "X", "special": 9}]"#,
    )
    .unwrap();

    bootforge()
        .args(["keymap", "--rules"])
        .arg(&rules)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(bytes[0x02], b'x');
    assert_eq!(bytes[0x02 + 256], b'X');
    assert_eq!(bytes[0x02 + 512], 9);
    // Only one rule: every other scancode is unmapped.
    assert_eq!(bytes.iter().filter(|&&b| b != 0).count(), 3);
}

#[test]
fn unknown_layout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("keymap.bin");

    bootforge()
        .args(["keymap", "--layout", "bepo", "-o"])
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn unwritable_destination_fails_without_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no_such_dir").join("keymap.bin");

    bootforge().args(["keymap", "-o"]).arg(&out).assert().failure();
    assert!(!out.exists());
}

#[test]
fn show_renders_layer_grids() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("keymap.bin");

    bootforge()
        .args(["keymap", "--show", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Layer: normal"))
        .stdout(predicate::str::contains("Layer: special"));
}

#[test]
fn iso_aborts_early_on_missing_efi_binary() {
    let dir = tempfile::tempdir().unwrap();

    // Fails before any external tool is invoked, so this passes on hosts
    // without mtools/xorriso installed.
    bootforge()
        .current_dir(dir.path())
        .args(["iso", "--efi", "no_such.efi"])
        .assert()
        .failure();

    assert!(!dir.path().join("uefi_boot.iso").exists());
}

#[test]
fn run_aborts_early_on_missing_efi_binary() {
    let dir = tempfile::tempdir().unwrap();

    bootforge()
        .current_dir(dir.path())
        .args(["run", "no_such.efi"])
        .assert()
        .failure();

    assert!(!dir.path().join("deploy").exists());
}
