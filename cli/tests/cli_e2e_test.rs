use assert_cmd::{Command, cargo_bin_cmd};

fn weft() -> Command {
    let mut cmd = cargo_bin_cmd!("weft");
    // Keep ambient configuration out of the tests
    cmd.env_remove("WEFT_CONTENT");
    cmd.env_remove("WEFT_PLUGINS");
    cmd.env_remove("WEFT_THEME_COLORS");
    cmd.env_remove("WEFT_CONFIG");
    cmd
}

mod help_and_version {
    use predicates::prelude::predicate;

    use super::*;

    #[test]
    fn test_help_flag() {
        weft()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("Commands:"));
    }

    #[test]
    fn test_short_help_flag() {
        weft()
            .arg("-h")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_version_flag() {
        weft()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("weft"));
    }

    #[test]
    fn test_no_args_shows_help() {
        weft()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage:"));
    }
}

mod init_command {
    use std::fs;

    use predicates::prelude::predicate;

    use super::*;

    #[test]
    fn test_init_writes_starter_config() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Initialized Weft"));

        let written = fs::read_to_string(workdir.path().join("weft.toml")).unwrap();
        assert!(written.contains("./js/**/*.{js,jsx,ts,tsx}"));
        assert!(written.contains("#FD4F00"));
        assert!(written.contains("@tailwindcss/forms"));
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let workdir = tempfile::tempdir().unwrap();
        fs::write(workdir.path().join("weft.toml"), "content = [\"./x\"]\n").unwrap();

        weft()
            .current_dir(workdir.path())
            .arg("init")
            .assert()
            .success()
            .stderr(predicate::str::contains("already exists"));

        let untouched = fs::read_to_string(workdir.path().join("weft.toml")).unwrap();
        assert_eq!(untouched, "content = [\"./x\"]\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let workdir = tempfile::tempdir().unwrap();
        fs::write(workdir.path().join("weft.toml"), "content = [\"./x\"]\n").unwrap();

        weft()
            .current_dir(workdir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let written = fs::read_to_string(workdir.path().join("weft.toml")).unwrap();
        assert!(written.contains("#FD4F00"));
    }

    #[test]
    fn test_init_into_explicit_path() {
        let workdir = tempfile::tempdir().unwrap();
        let target = workdir.path().join("nested/project");

        weft()
            .current_dir(workdir.path())
            .args(["init", "--path", target.to_str().unwrap()])
            .assert()
            .success();

        assert!(target.join("weft.toml").is_file());
    }
}

mod show_command {
    use predicates::prelude::predicate;

    use super::*;

    #[test]
    fn test_show_embedded_declaration() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("#FD4F00"))
            .stdout(predicate::str::contains("@tailwindcss/forms"));
    }

    #[test]
    fn test_show_json_is_parseable() {
        let workdir = tempfile::tempdir().unwrap();

        let assert = weft()
            .current_dir(workdir.path())
            .args(["show", "--format", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(parsed["content"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["theme"]["extend"]["colors"]["brand"], "#FD4F00");
        assert_eq!(parsed["plugins"][0], "@tailwindcss/forms");
    }

    #[test]
    fn test_show_yaml_format() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .args(["show", "--format", "yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("brand: '#FD4F00'"));
    }

    #[test]
    fn test_show_env_overrides_plugins() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .env("WEFT_PLUGINS", "@tailwindcss/typography")
            .args(["show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("@tailwindcss/typography"));
    }

    #[test]
    fn test_show_cli_flag_beats_env() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .env("WEFT_PLUGINS", "@tailwindcss/typography")
            .args([
                "show",
                "--format",
                "json",
                "--plugin",
                "@tailwindcss/aspect-ratio",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("@tailwindcss/aspect-ratio"));
    }

    #[test]
    fn test_show_missing_config_file() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .args(["show", "--config", "does-not-exist.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No configuration file"));
    }

    #[test]
    fn test_show_rejects_invalid_plugin_override() {
        let workdir = tempfile::tempdir().unwrap();

        weft()
            .current_dir(workdir.path())
            .args(["show", "--plugin", "Not A Package"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid plugin override"));
    }
}

mod completion_command {
    use predicates::prelude::predicate;

    use super::*;

    #[test]
    fn test_completion_bash() {
        weft()
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("weft"));
    }

    #[test]
    fn test_completion_rejects_unknown_shell() {
        weft().args(["completion", "tcsh"]).assert().failure();
    }
}
