#[cfg(test)]
mod cli {
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::str::{contains, is_empty};
    use pretty_assertions::assert_eq;
    use std::{error::Error, fs, io::Write};
    use tempfile::{NamedTempFile, tempdir};
    use test_utils::{fixtures_path, link, load_fixture};

    type Result<T> = std::result::Result<T, Box<dyn Error>>;

    #[test]
    fn test_stdin_plain_text() {
        cargo_bin_cmd!()
            .write_stdin("<b>Mail bob@example.com</b>")
            .env_clear()
            .assert()
            .success()
            .stdout(format!(
                "&lt;b&gt;Mail {}&lt;/b&gt;",
                link!("mailto:bob&#64;example.com", "bob&#64;example.com")
            ));
    }

    #[test]
    fn test_trusted_html() {
        cargo_bin_cmd!()
            .arg("--trusted-html")
            .arg("-")
            .write_stdin("<b>see example.com</b>")
            .env_clear()
            .assert()
            .success()
            .stdout(format!(
                "<b>see {}</b>",
                link!("http://example.com", "example.com")
            ));
    }

    #[test]
    fn test_fixture_files() {
        cargo_bin_cmd!()
            .arg(fixtures_path!("escaping", "example.txt"))
            .env_clear()
            .assert()
            .success()
            .stdout(load_fixture!("escaping", "example.expected.html"));

        cargo_bin_cmd!()
            .arg("--trusted-html")
            .arg(fixtures_path!("trusted", "example.html"))
            .env_clear()
            .assert()
            .success()
            .stdout(load_fixture!("trusted", "example.expected.html"));
    }

    #[test]
    fn test_output_file() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("linked.html");

        cargo_bin_cmd!()
            .arg("--output")
            .arg(&output)
            .write_stdin("e.com/a?b=c&d=e")
            .env_clear()
            .assert()
            .success()
            .stdout(is_empty());

        assert_eq!(
            fs::read_to_string(output)?,
            link!("http://e.com/a?b=c&amp;d=e", "e.com/a")
        );
        Ok(())
    }

    #[test]
    fn test_flags() {
        cargo_bin_cmd!()
            .arg("--allow-ftp-addresses")
            .arg("--allow-upper-case-url-schemes")
            .write_stdin("ftp://example.com HTTP://EXAMPLE.ORG")
            .env_clear()
            .assert()
            .success()
            .stdout(format!(
                "{} {}",
                link!("ftp://example.com", "example.com"),
                link!("HTTP://EXAMPLE.ORG", "EXAMPLE.ORG")
            ));
    }

    #[test]
    fn test_config_file() -> Result<()> {
        let mut config = NamedTempFile::new()?;
        writeln!(config, "allowFtpAddresses = true")?;
        writeln!(config, r#"htmlLinkCreator = '<a href="{{href}}" rel="nofollow">{{content}}</a>'"#)?;

        cargo_bin_cmd!()
            .arg("--config")
            .arg(config.path())
            .write_stdin("ftp://example.com")
            .env_clear()
            .assert()
            .success()
            .stdout(r#"<a href="ftp://example.com" rel="nofollow">example.com</a>"#);
        Ok(())
    }

    #[test]
    fn test_default_config_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("urlinker.toml"), "trustedHtml = true\n")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .write_stdin("<i>example.com</i>")
            .env_clear()
            .assert()
            .success()
            .stdout(format!(
                "<i>{}</i>",
                link!("http://example.com", "example.com")
            ));
        Ok(())
    }

    #[test]
    fn test_invalid_config_type() -> Result<()> {
        let mut config = NamedTempFile::new()?;
        writeln!(config, "allowFtpAddresses = 'yes'")?;

        cargo_bin_cmd!()
            .arg("--config")
            .arg(config.path())
            .write_stdin("example.com")
            .env_clear()
            .assert()
            .code(3)
            .stderr(contains(
                r#"Option "allowFtpAddresses" must be of type "boolean", "string" given."#,
            ));
        Ok(())
    }

    #[test]
    fn test_invalid_default_config() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("urlinker.toml"), "allowFtpAddresses = \n")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .write_stdin("example.com")
            .env_clear()
            .assert()
            .code(3)
            .stderr(contains("Cannot load default configuration file"));
        Ok(())
    }

    #[test]
    fn test_missing_config_file() {
        cargo_bin_cmd!()
            .arg("--config")
            .arg("does-not-exist.toml")
            .write_stdin("example.com")
            .env_clear()
            .assert()
            .code(3)
            .stderr(contains("Cannot load configuration file `does-not-exist.toml`"));
    }

    #[test]
    fn test_missing_input_file() {
        cargo_bin_cmd!()
            .arg("does-not-exist.txt")
            .env_clear()
            .assert()
            .code(1)
            .stderr(contains("Cannot read input file `does-not-exist.txt`"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        cargo_bin_cmd!()
            .arg("-vv")
            .write_stdin("example.com")
            .env_clear()
            .assert()
            .success()
            .stdout(link!("http://example.com", "example.com"))
            .stderr(contains("[INFO] Linking 1 input(s)"));
    }
}
