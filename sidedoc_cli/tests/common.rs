use assert_cmd::Command;

pub fn sidedoc_cmd() -> Command {
	let mut cmd = Command::cargo_bin("sidedoc").expect("sidedoc binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}
