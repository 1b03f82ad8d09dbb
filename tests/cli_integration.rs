use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_DICTIONARY: &str = "Haus/N,Substantiv,Neutrum\n\
                                 Katze/N,Substantiv,Femininum\n\
                                 /Nfehler\n\
                                 Hunde/N,Substantiv,Plural\n\
                                 ab/VB\n";

fn nounlist() -> Command {
    Command::cargo_bin("nounlist").unwrap()
}

fn workspace_with_dictionary(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("german.dic"), contents).unwrap();
    temp_dir
}

#[test]
fn default_run_reads_german_dic_and_writes_nouns_dic() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--output-format", "plain", "--quiet"])
        .assert()
        .success()
        .stdout("3\nHAUS\n");

    let output = fs::read_to_string(workspace.path().join("nouns.dic")).unwrap();
    assert_eq!(output, "\"HAUS\",\n\"KATZE\",\n\"HUNDE\",\n");
}

#[test]
fn human_mode_prints_count_and_first_noun() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3\nHAUS\n"));
}

#[test]
fn explicit_source_and_output_paths() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);
    fs::rename(
        workspace.path().join("german.dic"),
        workspace.path().join("words.dic"),
    )
    .unwrap();

    nounlist()
        .current_dir(workspace.path())
        .args(["words.dic", "--output", "generated.dic", "--quiet"])
        .assert()
        .success();

    let output = fs::read_to_string(workspace.path().join("generated.dic")).unwrap();
    assert_eq!(output, "\"HAUS\",\n\"KATZE\",\n\"HUNDE\",\n");
}

#[test]
fn missing_source_exits_with_code_3() {
    let workspace = TempDir::new().unwrap();

    nounlist()
        .current_dir(workspace.path())
        .args(["--quiet"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn no_matching_nouns_exits_with_code_6_and_writes_nothing() {
    let workspace = workspace_with_dictionary("laufen/V\nschnell/ADJ\n");

    nounlist()
        .current_dir(workspace.path())
        .args(["--quiet"])
        .assert()
        .failure()
        .code(6);

    assert!(!workspace.path().join("nouns.dic").exists());
}

#[test]
fn length_override_changes_the_window() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--length", "4", "--output-format", "plain", "--quiet"])
        .assert()
        .success()
        .stdout("1\nHAUS\n");

    let output = fs::read_to_string(workspace.path().join("nouns.dic")).unwrap();
    assert_eq!(output, "\"HAUS\",\n");
}

#[test]
fn rerun_produces_byte_identical_output() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--quiet"])
        .assert()
        .success();
    let first = fs::read(workspace.path().join("nouns.dic")).unwrap();

    nounlist()
        .current_dir(workspace.path())
        .args(["--quiet"])
        .assert()
        .success();
    let second = fs::read(workspace.path().join("nouns.dic")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn json_mode_emits_structured_result() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--output-format", "json", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"result\""))
        .stdout(predicate::str::contains("\"count\":3"))
        .stdout(predicate::str::contains("\"first_noun\":\"HAUS\""));
}

#[test]
fn report_flag_writes_json_sidecar() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--report", "--quiet"])
        .assert()
        .success();

    let report = fs::read_to_string(workspace.path().join("nouns.dic.report.json")).unwrap();
    assert!(report.contains("\"first_noun\": \"HAUS\""));
    assert!(report.contains("\"lines_read\": 5"));
}

#[test]
fn dry_run_writes_nothing() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);

    nounlist()
        .current_dir(workspace.path())
        .args(["--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run completed successfully"));

    assert!(!workspace.path().join("nouns.dic").exists());
}

#[test]
fn generate_config_creates_sample_file() {
    let workspace = TempDir::new().unwrap();
    let config_path = workspace.path().join("nounlist.toml");

    nounlist()
        .current_dir(workspace.path())
        .args(["--generate-config", "--config", "nounlist.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[filter]"));
    assert!(content.contains("marker = \"/N\""));
}

#[test]
fn config_file_is_picked_up_and_cli_overrides_win() {
    let workspace = workspace_with_dictionary(SAMPLE_DICTIONARY);
    fs::write(
        workspace.path().join("nounlist.toml"),
        "[filter]\nmarker = \"/N\"\nnoun_length = 4\nexclude_patterns = []\n\n\
         [output]\ndestination = \"from-config.dic\"\ngenerate_report = false\n",
    )
    .unwrap();

    // Config file alone: length 4, destination from-config.dic
    nounlist()
        .current_dir(workspace.path())
        .args(["--output-format", "plain", "--quiet"])
        .assert()
        .success()
        .stdout("1\nHAUS\n");
    assert!(workspace.path().join("from-config.dic").exists());

    // CLI flag overrides the config file value
    nounlist()
        .current_dir(workspace.path())
        .args(["--length", "5", "--output-format", "plain", "--quiet"])
        .assert()
        .success()
        .stdout("3\nHAUS\n");
}

#[test]
fn exclude_patterns_skip_matching_lines() {
    // Without the exclude pattern the commented entry would slip through as
    // the five-character candidate "#HAUS"
    let workspace = workspace_with_dictionary("#Haus/N,Kommentar\nKatze/N,Substantiv\n");

    nounlist()
        .current_dir(workspace.path())
        .args(["--exclude", "^#", "--output-format", "plain", "--quiet"])
        .assert()
        .success()
        .stdout("1\nKATZE\n");
}
