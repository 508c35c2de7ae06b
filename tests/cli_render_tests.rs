//! End-to-end tests for `chordsheet render` command.

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the chordsheet binary
fn chordsheet_bin() -> &'static str {
    env!("CARGO_BIN_EXE_chordsheet")
}

#[test]
fn test_render_basic_succeeds() {
    let (input, temp) = write_temp_file("chordmap.txt", &sample_chordmap());
    let out = temp.path().join("sheet0.svg");

    let output = Command::new(chordsheet_bin())
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Render should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The first page carries the incremented filename.
    let page1 = temp.path().join("sheet1.svg");
    assert!(page1.exists(), "Missing page: {}", page1.display());
    let svg = fs::read_to_string(&page1).unwrap();
    assert!(svg.contains(">Simple Chords</text>"));
    assert!(svg.contains(">Modifiers</text>"));
    assert!(svg.contains("<title>chordmap (p. 1)</title>"));
    // Glyph legends and renamed special keys made it onto the sheet.
    assert!(svg.contains(">a</text>"));
    assert!(svg.contains(">Enter</text>"));
    // Multi-word legends render as stacked lines.
    assert!(svg.contains(">Left</text>"));
    assert!(svg.contains(">Shift</text>"));
    // The modifier chord lists its modifiers with the duration annotation.
    assert!(svg.contains(">L Alt</text>"));
    assert!(svg.contains(">L Shift</text>"));
    assert!(svg.contains(">(sticky)</text>"));
}

#[test]
fn test_render_emits_unused_and_customization_page() {
    let (input, temp) = write_temp_file("chordmap.txt", &sample_chordmap());
    let out = temp.path().join("sheet0.svg");

    let output = Command::new(chordsheet_bin())
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    // The explicit page break puts the unused chords on page two.
    let page2 = temp.path().join("sheet2.svg");
    assert!(page2.exists(), "Missing page: {}", page2.display());
    let svg = fs::read_to_string(&page2).unwrap();
    assert!(svg.contains(">Unused Chords</text>"));
    assert!(svg.contains(">[empty]</text>"));
    assert!(svg.contains(">Customization</text>"));
    assert!(svg.contains(">excellent</text>"));
    assert!(svg.contains(">swappable</text>"));
    let page1 = fs::read_to_string(temp.path().join("sheet1.svg")).unwrap();
    assert!(!page1.contains(">Unused Chords</text>"));
}

#[test]
fn test_render_to_stdout() {
    let (input, _temp) = write_temp_file("chordmap.txt", &sample_chordmap());

    let output = Command::new(chordsheet_bin())
        .args(["render", "--input", input.to_str().unwrap(), "--output", "-"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<?xml"));
    // The page break restarts the document on the same stream.
    assert_eq!(stdout.matches("<?xml").count(), 2);
    assert_eq!(stdout.matches("</svg>").count(), 2);
}

#[test]
fn test_render_rejects_bad_page_size() {
    let (input, temp) = write_temp_file("chordmap.txt", &sample_chordmap());
    let out = temp.path().join("sheet0.svg");

    let output = Command::new(chordsheet_bin())
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
            "--width",
            "0",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Page dimensions"));
    // Nothing was written.
    assert!(!temp.path().join("sheet1.svg").exists());
}

#[test]
fn test_render_rejects_unsequencable_output_name() {
    let (input, temp) = write_temp_file("chordmap.txt", &sample_chordmap());
    let out = temp.path().join("no-extension");

    let output = Command::new(chordsheet_bin())
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_render_missing_input_fails() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("sheet0.svg");

    let output = Command::new(chordsheet_bin())
        .args([
            "render",
            "--input",
            temp.path().join("nope.txt").to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}
