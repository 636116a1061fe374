mod common;

use common::TestResult;
use fontinject::SourceMap;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "families": [
    { "name": "Inter", "faces": { "src": "/fonts/inter.woff2" } },
    { "name": "Lato", "faces": { "src": ["/fonts/lato.woff", { "name": "Lato" }], "weight": 400 } }
  ]
}"#;

const STYLESHEET: &str = "body { font-family: Inter, sans-serif; }\nh1 { font-family: Lato; }\n";

fn fontinject(args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_fontinject")).args(args).output()
}

fn write_fixtures(dir: &TempDir) -> std::io::Result<(String, String)> {
    let input = dir.path().join("app.css");
    let config = dir.path().join("fonts.json");
    fs::write(&input, STYLESHEET)?;
    fs::write(&config, CONFIG)?;
    Ok((path_str(&input), path_str(&config)))
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_writes_to_stdout() -> TestResult {
    let dir = TempDir::new()?;
    let (input, config) = write_fixtures(&dir)?;

    let output = fontinject(&[&input, "--config", &config, "--order", "discovery"])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    let inter = stdout.find("font-family: 'Inter';").expect("Inter block");
    let lato = stdout.find("font-family: 'Lato';").expect("Lato block");
    assert!(inter < lato);
    assert!(stdout.contains(r#"src: url("/fonts/lato.woff") format(woff), local("Lato");"#));
    assert!(stdout.ends_with(STYLESHEET));
    Ok(())
}

#[test]
fn test_cli_writes_output_and_map() -> TestResult {
    let dir = TempDir::new()?;
    let (input, config) = write_fixtures(&dir)?;
    let out = path_str(&dir.path().join("out.css"));

    let output = fontinject(&[&input, "-c", &config, "-o", &out, "--source-map"])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let code = fs::read_to_string(&out)?;
    assert_eq!(code.matches("@font-face").count(), 2);

    let map: SourceMap = serde_json::from_str(&fs::read_to_string(format!("{out}.map"))?)?;
    assert_eq!(map.version, 3);
    assert_eq!(map.file.as_deref(), Some("out.css"));
    assert_eq!(map.sources, vec![input]);
    assert_eq!(map.sources_content, vec![Some(STYLESHEET.to_string())]);

    let injected_lines = code.lines().count() - STYLESHEET.lines().count();
    assert_eq!(map.lookup(injected_lines as u32, 0), Some((0, 0)));
    Ok(())
}

#[test]
fn test_cli_passes_through_unchanged_input() -> TestResult {
    let dir = TempDir::new()?;
    let (input, _) = write_fixtures(&dir)?;

    // Without a config nothing resolves.
    let output = fontinject(&[&input])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, STYLESHEET);
    Ok(())
}

#[test]
fn test_cli_rejects_bad_config() -> TestResult {
    let dir = TempDir::new()?;
    let (input, _) = write_fixtures(&dir)?;
    let config = dir.path().join("broken.json");
    fs::write(&config, "{ not json")?;

    let output = fontinject(&[&input, "--config", &path_str(&config)])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Json"));
    Ok(())
}

#[test]
fn test_cli_source_map_requires_output() -> TestResult {
    let dir = TempDir::new()?;
    let (input, _) = write_fixtures(&dir)?;
    let output = fontinject(&[&input, "--source-map"])?;
    assert!(!output.status.success());
    Ok(())
}
