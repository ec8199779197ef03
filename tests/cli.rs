use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const ICON: &str = "
<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24'>
    <rect width='10' height='10'/>
</svg>
";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("svg2vectordrawable").unwrap();
    cmd.arg("--skip-system-fonts");
    cmd
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    let output = dir.path().join("res/drawable/ic_icon.xml");
    fs::write(&input, ICON).unwrap();

    cmd()
        .args(["-i", path_arg(&input), "-o", path_arg(&output)])
        .assert()
        .success()
        .stdout(contains("ic_icon.xml"))
        .stderr("");

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with("<vector"));
    assert!(xml.contains("android:pathData=\"M0 0L10 0L10 10L0 10Z\""));
}

#[test]
fn free_argument_is_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, ICON).unwrap();

    cmd().arg(path_arg(&input)).assert().success();
    assert!(dir.path().join("icon.xml").exists());
}

#[test]
fn folder_to_folder() {
    let dir = tempfile::tempdir().unwrap();
    let icons = dir.path().join("icons");
    let drawable = dir.path().join("drawable");
    fs::create_dir(&icons).unwrap();
    fs::write(icons.join("a.svg"), ICON).unwrap();
    fs::write(icons.join("b.svg"), ICON).unwrap();
    fs::write(icons.join("readme.txt"), "").unwrap();

    cmd()
        .args(["-f", path_arg(&icons), "-o", path_arg(&drawable)])
        .assert()
        .success()
        .stdout(contains("a.xml").and(contains("b.xml")));

    assert!(drawable.join("a.xml").exists());
    assert!(drawable.join("b.xml").exists());
    assert!(!drawable.join("readme.xml").exists());
}

#[test]
fn folder_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.svg"), ICON).unwrap();

    cmd().args(["--folder", path_arg(dir.path())]).assert().success();
    assert!(dir.path().join("a.xml").exists());
}

#[test]
fn broken_file_does_not_stop_others() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.svg"), "<svg").unwrap();
    fs::write(dir.path().join("b.svg"), ICON).unwrap();

    cmd()
        .args(["-f", path_arg(dir.path())])
        .assert()
        .code(1)
        .stderr(contains("Failed to convert").and(contains("a.svg")))
        .stdout(contains("b.xml"));

    assert!(!dir.path().join("a.xml").exists());
    assert!(dir.path().join("b.xml").exists());
}

#[test]
fn string_to_stdout() {
    cmd()
        .args(["-s", "<rect width='10' height='10'/>"])
        .assert()
        .success()
        .stdout(
            contains("Android Vector Drawable Code:")
                .and(contains("<vector"))
                .and(contains("android:width=\"10dp\"")),
        );
}

#[test]
fn string_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ic_rect");

    cmd()
        .args(["--string", ICON, "-o", path_arg(&output)])
        .assert()
        .success()
        .stdout(contains("Save to"));

    let xml = fs::read_to_string(dir.path().join("ic_rect.xml")).unwrap();
    assert!(xml.contains("android:viewportWidth=\"24\""));
}

#[test]
fn string_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, ICON).unwrap();

    cmd()
        .args(["-i", path_arg(&input), "-s", "<circle r='5'/>"])
        .assert()
        .success()
        .stdout(contains("Android Vector Drawable Code:"));

    assert!(!dir.path().join("icon.xml").exists());
}

#[test]
fn invalid_string() {
    cmd()
        .args(["-s", "icon.svg"])
        .assert()
        .code(1)
        .stderr("Option \"-s, --string\" must be a SVG code.\n");
}

#[test]
fn option_without_value() {
    cmd()
        .arg("-i")
        .assert()
        .code(1)
        .stderr("Option \"-i, --input\" must have a value.\n");
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.svg");

    cmd()
        .args(["-i", path_arg(&input)])
        .assert()
        .code(1)
        .stderr(predicate::str::ends_with("\" is not exists.\n"));
}

#[test]
fn single_file_to_folder() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    fs::write(&input, ICON).unwrap();

    cmd()
        .args(["-i", path_arg(&input), "-o", path_arg(dir.path())])
        .assert()
        .code(1)
        .stderr("Output must be a XML file.\n");
}

#[test]
fn many_files_to_xml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.svg"), ICON).unwrap();
    fs::write(dir.path().join("b.svg"), ICON).unwrap();
    let output = dir.path().join("out.xml");

    cmd()
        .args(["-f", path_arg(dir.path()), "-o", path_arg(&output)])
        .assert()
        .code(1)
        .stderr("Output must be a folder.\n");
}

#[test]
fn unknown_option() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stderr("Unknown option \"--frobnicate\".\n");
}

#[test]
fn version() {
    cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help() {
    cmd().arg("--help").assert().success().stdout(contains("USAGE:"));

    // No input prints help too.
    cmd().assert().success().stdout(contains("USAGE:"));
}

#[test]
fn formatting_options() {
    cmd()
        .args([
            "--indent",
            "none",
            "--attrs-indent",
            "none",
            "--precision",
            "1",
            "--leading-zero",
            "-s",
            "<rect x='0.25' width='10' height='10' fill-opacity='0.5'/>",
        ])
        .assert()
        .success()
        .stdout(
            contains("<path android:fillColor=\"#000000\" android:fillAlpha=\"0.5\"")
                .and(contains("android:pathData=\"M0.3 0L")),
        );
}

#[test]
fn quiet_hides_warnings() {
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 10 10'>\
               <rect width='10' height='10' stroke='black' stroke-dasharray='2'/></svg>";

    cmd()
        .args(["-s", svg])
        .assert()
        .success()
        .stderr(contains("Dashed strokes are not supported"));

    cmd().args(["--quiet", "-s", svg]).assert().success().stderr("");
}
