use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_empty_target_is_fully_untranslated() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"HELLO": "Hi"}"#, "{}")?;
    test.write_file("json/fr.json", "{}")?;

    let output = test.compile_command().arg("json/fr.json").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Created js/fr.js (0 translated, 1 untranslated)\n\u{2713} Compiled 1 message file\n"
    );

    assert_snapshot!(test.read_file("js/fr.js")?, @r#"
    // This file was automatically generated.  Do not modify.

    'use strict';

    goog.provide('Blockly.Msg.fr');

    goog.require('Blockly.Msg');

    Blockly.Msg.HELLO = "Hi";  // untranslated
    "#);

    Ok(())
}

#[test]
fn test_merge_translated_untranslated_extra() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{"B": "y", "A": "x"}"#,
        r#"{"PROCEDURES_ALIAS": "A", "CONTROLS_ALIAS": "B"}"#,
    )?;
    test.write_file(
        "json/zh-hans.json",
        r#"{"@metadata": {"authors": ["x"]}, "A": "z", "C": "w", "CONTROLS_ALIAS": "s"}"#,
    )?;

    let output = test.compile_command().arg("json/zh-hans.json").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "warning: extra keys appeared: C  extra-key\n  \
         --> json/zh-hans.json\n\
         \n\
         warning: synonym keys appeared: CONTROLS_ALIAS  synonym-key\n  \
         --> json/zh-hans.json\n  \
         = hint: synonyms resolve to their canonical key and need no translation\n\
         \n\
         Created js/zh-hans.js (1 translated, 1 untranslated)\n\
         \u{2713} Compiled 1 message file\n"
    );

    assert_snapshot!(test.read_file("js/zh-hans.js")?, @r#"
    // This file was automatically generated.  Do not modify.

    'use strict';

    goog.provide('Blockly.Msg.zh.hans');

    goog.require('Blockly.Msg');

    Blockly.Msg.A = "z";
    Blockly.Msg.B = "y";  // untranslated
    Blockly.Msg.PROCEDURES_ALIAS = Blockly.Msg.A;
    Blockly.Msg.CONTROLS_ALIAS = Blockly.Msg.B;
    "#);

    Ok(())
}

#[test]
fn test_newline_in_target_is_sanitized() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"MSG": "one line"}"#, "{}")?;
    test.write_file("json/de.json", r#"{"MSG": "zwei\nZeilen"}"#)?;

    let output = test.compile_command().arg("json/de.json").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).starts_with(
        "warning: definition of MSG contained a newline character  line-break\n  \
         --> json/de.json\n"
    ));
    assert!(
        test.read_file("js/de.js")?
            .contains("Blockly.Msg.MSG = \"zwei Zeilen\";\n")
    );

    Ok(())
}

#[test]
fn test_non_ascii_keys_are_reported() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"MSG": "m"}"#, "{}")?;
    test.write_file("json/fr.json", r#"{"MSG": "m", "CLÉ": "k"}"#)?;

    let output = test.compile_command().arg("json/fr.json").output()?;
    assert!(output.status.success());
    assert!(
        stdout(&output).contains("warning: keys contain non ascii characters: CLÉ  non-ascii-key\n")
    );

    Ok(())
}

#[test]
fn test_quotes_and_backslashes_are_escaped() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"Q": "say \"hi\"", "P": "C:\\temp"}"#, "{}")?;
    test.write_file("json/es.json", "{}")?;

    test.compile_command().arg("json/es.json").output()?;

    let written = test.read_file("js/es.js")?;
    assert!(written.contains(r#"Blockly.Msg.Q = "say \"hi\"";  // untranslated"#));
    assert!(written.contains(r#"Blockly.Msg.P = "C:\\temp";  // untranslated"#));

    Ok(())
}

#[test]
fn test_malformed_source_aborts_before_writing() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"OK": "fine", "BAD": "multi\nline"}"#, "{}")?;
    test.write_file("json/fr.json", "{}")?;

    let output = test.compile_command().arg("json/fr.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        format!(
            "Error: definition of BAD in {} contained a newline character.\n",
            test.root().join("json/en.json").display()
        )
    );
    assert!(!test.root().join("js/fr.js").exists());

    Ok(())
}

#[test]
fn test_bad_target_is_isolated() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"MSG": "m"}"#, "{}")?;
    test.write_file("json/de.json", "{ broken")?;
    test.write_file("json/fr.json", r#"{"MSG": "fr"}"#)?;

    let output = test.compile_command().arg("json/*.json").output()?;
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("load-error"));
    assert!(err.contains("--> json/de.json"));
    assert!(err.ends_with("\u{2718} 1 of 3 message files failed\n"));

    assert!(!test.root().join("js/de.js").exists());
    assert!(test.root().join("js/fr.js").exists());
    assert!(test.root().join("js/en.js").exists());
    assert!(!test.root().join("js/synonyms.js").exists());

    Ok(())
}

#[test]
fn test_missing_output_dir_fails_per_target() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("json/en.json", r#"{"MSG": "m"}"#)?;
    test.write_file("json/synonyms.json", "{}")?;
    test.write_file("json/fr.json", "{}")?;

    let output = test.compile_command().arg("json/fr.json").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("write-error"));

    Ok(())
}

#[test]
fn test_quiet_suppresses_output() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"A": "a"}"#, "{}")?;
    test.write_file("json/fr.json", r#"{"A": "a", "EXTRA": "e"}"#)?;

    let output = test.compile_command().args(["--quiet", "json/fr.json"]).output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
    assert!(test.root().join("js/fr.js").exists());

    Ok(())
}

#[test]
fn test_synonym_block_identical_across_files() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{"A": "a", "B": "b"}"#,
        r#"{"ALIAS_ONE": "A", "ALIAS_TWO": "B"}"#,
    )?;
    test.write_file("json/fr.json", r#"{"A": "fr"}"#)?;
    test.write_file("json/de.json", r#"{"B": "de"}"#)?;
    test.write_file("json/qqq.json", r#"{"A": "docs"}"#)?;

    let output = test.compile_command().output()?;
    assert!(output.status.success());

    let block = "Blockly.Msg.ALIAS_ONE = Blockly.Msg.A;\nBlockly.Msg.ALIAS_TWO = Blockly.Msg.B;\n";
    for lang in ["en", "fr", "de"] {
        let written = test.read_file(&format!("js/{lang}.js"))?;
        assert!(written.ends_with(block), "{lang}.js should end with the alias block");
    }
    assert!(!test.root().join("js/qqq.js").exists());

    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{"Z": "z", "M": "m", "A": "a", "Q": "q"}"#,
        r#"{"ALIAS": "M"}"#,
    )?;
    test.write_file("json/it.json", r#"{"Q": "qq", "A": "aa"}"#)?;

    test.compile_command().arg("json/it.json").output()?;
    let first = test.read_file("js/it.js")?;
    test.compile_command().arg("json/it.json").output()?;
    let second = test.read_file("js/it.js")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("compile"));
    assert!(help.contains("init"));

    Ok(())
}
