use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stdout};

#[test]
fn test_supplement_appends_section() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"HELLO": "Hello"}"#, r#"{"HI": "HELLO"}"#)?;
    test.write_file("json/fr.json", r#"{"HELLO": "Bonjour"}"#)?;
    test.write_file("json/en_ardublockly.json", r#"{"ARD_PIN": "pin", "ARD_SERIAL": "serial"}"#)?;
    test.write_file("json/fr_ardublockly.json", r#"{"ARD_PIN": "broche"}"#)?;

    let output = test.compile_command().arg("json/fr.json").output()?;
    assert!(output.status.success());

    let output = test
        .compile_command()
        .args([
            "--supplement",
            "--source-lang-file",
            "json/en_ardublockly.json",
            "json/fr.json",
        ])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Processed supplemental translation: json/fr_ardublockly.json\n\
         Updated js/fr.js (1 translated, 1 untranslated)\n\
         \u{2713} Compiled 1 message file\n"
    );

    assert_snapshot!(test.read_file("js/fr.js")?, @r#"
    // This file was automatically generated.  Do not modify.

    'use strict';

    goog.provide('Blockly.Msg.fr');

    goog.require('Blockly.Msg');

    Blockly.Msg.HELLO = "Bonjour";
    Blockly.Msg.HI = Blockly.Msg.HELLO;


    // Ardublockly strings
    Blockly.Msg.ARD_PIN = "broche";
    Blockly.Msg.ARD_SERIAL = "serial";  // untranslated
    "#);

    Ok(())
}

#[test]
fn test_supplement_skips_missing_catalog() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"HELLO": "Hello"}"#, "{}")?;
    test.write_file("json/de.json", r#"{"HELLO": "Hallo"}"#)?;

    test.compile_command().arg("json/de.json").output()?;
    let before = test.read_file("js/de.js")?;

    let output = test
        .compile_command()
        .args(["--supplement", "json/de.json"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Compiled 0 message files\n");
    assert_eq!(test.read_file("js/de.js")?, before);

    Ok(())
}

#[test]
fn test_standard_run_ignores_supplemental_catalogs() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"HELLO": "Hello"}"#, "{}")?;
    test.write_file("json/fr.json", "{}")?;
    test.write_file("json/fr_ardublockly.json", "{}")?;

    let output = test.compile_command().output()?;
    assert!(output.status.success());
    assert!(test.root().join("js/fr.js").exists());
    assert!(!test.root().join("js/fr_ardublockly.js").exists());

    Ok(())
}

#[test]
fn test_supplement_appends_once_per_language() -> Result<()> {
    let test = CliTest::with_catalogs(r#"{"HELLO": "Hello"}"#, "{}")?;
    test.write_file("json/fr.json", r#"{"HELLO": "Bonjour"}"#)?;
    test.write_file("json/fr.old.json", r#"{"HELLO": "Salut"}"#)?;
    test.write_file("json/en_ardublockly.json", r#"{"ARD_PIN": "pin"}"#)?;
    test.write_file("json/fr_ardublockly.json", r#"{"ARD_PIN": "broche"}"#)?;

    let output = test.compile_command().output()?;
    assert!(output.status.success());
    assert!(test.read_file("js/fr.js")?.contains("Blockly.Msg.HELLO = \"Bonjour\";\n"));

    let output = test
        .compile_command()
        .args(["--supplement", "--source-lang-file", "json/en_ardublockly.json"])
        .output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains(
        "warning: skipped json/fr.old.json: an earlier file targets the same language\n"
    ));

    let written = test.read_file("js/fr.js")?;
    assert_eq!(written.matches("// Ardublockly strings").count(), 1);
    assert_eq!(written.matches("Blockly.Msg.ARD_PIN = \"broche\";").count(), 1);

    Ok(())
}
