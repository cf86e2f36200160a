use assert_cmd::Command;

fn quotelist() -> Command {
    Command::cargo_bin("quotelist").expect("binary should be built")
}

#[test]
fn prints_sample_list_without_items() {
    quotelist()
        .assert()
        .success()
        .stdout("\"apple\", \"banana\", \"orange\"\n");
}

#[test]
fn formats_given_items_with_quote() {
    quotelist()
        .args(["-q", "'", "it's", "fine"])
        .assert()
        .success()
        .stdout("'it\\'s', 'fine'\n");
}

#[test]
fn accepts_strategy_name() {
    quotelist()
        .args(["--strategy", "builder", "--quote", "*", "a", "b"])
        .assert()
        .success()
        .stdout("*a*, *b*\n");
}

#[test]
fn compare_prints_every_strategy() {
    quotelist()
        .arg("--compare")
        .assert()
        .success()
        .stdout(concat!(
            "builder: \"apple\", \"banana\", \"orange\"\n",
            "interpolated: \"apple\", \"banana\", \"orange\"\n",
            "joined: \"apple\", \"banana\", \"orange\"\n",
        ));
}

#[test]
fn empty_quote_fails() {
    quotelist().args(["-q", "", "a"]).assert().failure();
}

#[test]
fn unknown_strategy_fails() {
    quotelist().args(["-s", "regex", "a"]).assert().failure();
}
