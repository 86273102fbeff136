mod common;

use predicates::prelude::PredicateBooleanExt;
use sidedoc_core::AnyEmptyResult;

const HELLO: &str = "#!/bin/sh\n# Say hi to the world.\necho hi\n";

#[test]
fn renders_a_file_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("hello.sh");
	std::fs::write(&script, HELLO)?;

	common::sidedoc_cmd()
		.arg(&script)
		.assert()
		.success()
		.stdout(predicates::str::contains("<!DOCTYPE html>"))
		.stdout(predicates::str::contains("Say hi to the world."))
		.stdout(predicates::str::contains("echo hi"));

	Ok(())
}

#[test]
fn title_defaults_to_the_source_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("hello.sh");
	std::fs::write(&script, HELLO)?;

	common::sidedoc_cmd()
		.arg(&script)
		.assert()
		.success()
		.stdout(predicates::str::contains(format!(
			"<title>{}</title>",
			script.display()
		)));

	Ok(())
}

#[test]
fn title_flag_overrides_the_default() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("hello.sh");
	std::fs::write(&script, HELLO)?;

	common::sidedoc_cmd()
		.arg("--title")
		.arg("My Script")
		.arg(&script)
		.assert()
		.success()
		.stdout(predicates::str::contains("<title>My Script</title>"));

	Ok(())
}

#[test]
fn reads_standard_input_when_no_source_is_given() {
	common::sidedoc_cmd()
		.write_stdin(HELLO)
		.assert()
		.success()
		.stdout(predicates::str::contains("<title>stdin</title>"))
		.stdout(predicates::str::contains("echo hi"));
}

#[test]
fn dash_reads_standard_input() {
	common::sidedoc_cmd()
		.arg("-")
		.write_stdin(HELLO)
		.assert()
		.success()
		.stdout(predicates::str::contains("<title>stdin</title>"));
}

#[test]
fn header_code_renders_beside_the_opening_prose() {
	// The shebang precedes the first comment in the source, but the first
	// table row carries both.
	let output = common::sidedoc_cmd()
		.write_stdin(HELLO)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let html = String::from_utf8(output).expect("utf8 output");
	let first_row = html
		.lines()
		.find(|line| line.contains("<tr><td class=\"docs\">"))
		.expect("a rendered table row");
	assert!(first_row.contains("Say hi to the world."));
	assert!(first_row.contains("#!/bin/sh"));
}

#[test]
fn warns_when_the_shebang_is_missing() {
	common::sidedoc_cmd()
		.write_stdin("# No directive here.\necho hi\n")
		.assert()
		.success()
		.stderr(predicates::str::contains("no shebang line"));
}

#[test]
fn no_warning_for_a_directive_led_file() {
	common::sidedoc_cmd()
		.write_stdin(HELLO)
		.assert()
		.success()
		.stderr(predicates::str::contains("warning").not());
}

#[test]
fn missing_source_file_is_fatal() {
	let tmp = tempfile::tempdir().expect("tempdir");

	common::sidedoc_cmd()
		.arg(tmp.path().join("absent.sh"))
		.assert()
		.failure();
}

#[test]
fn forged_divider_marker_is_a_fatal_integrity_error() {
	common::sidedoc_cmd()
		.write_stdin("#!/bin/sh\n# ##### DIVIDER\necho hi\n")
		.assert()
		.failure()
		.stderr(predicates::str::contains("fragment"));
}
