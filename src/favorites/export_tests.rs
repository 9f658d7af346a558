//! Tests for favorites export

use super::*;
use crate::test_utils::test_helpers::suggestion;
use insta::assert_snapshot;
use tempfile::TempDir;

#[test]
fn test_format_single_favorite() {
    let text = format_export(&[suggestion("艾琳", "Ài Lín")]);
    assert_snapshot!(text, @r"
    Chinese Name: 艾琳
    Pinyin: Ài Lín
    Individual Meanings: 艾 - meaning of 艾, 琳 - meaning of 琳
    Overall Meaning: Overall meaning of 艾琳
    Cultural Significance: Cultural note for 艾琳
    Personality Traits: Elegant and refined
    ");
}

#[test]
fn test_format_separates_blocks() {
    let text = format_export(&[suggestion("艾琳", "Ài Lín"), suggestion("慕影", "Mù Yǐng")]);
    let blocks: Vec<&str> = text.split("\n---\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("Chinese Name: 艾琳\n"));
    assert!(blocks[1].starts_with("Chinese Name: 慕影\n"));
    assert!(text.ends_with("Personality Traits: Elegant and refined\n"));
}

#[test]
fn test_format_empty() {
    assert_eq!(format_export(&[]), "");
}

#[test]
fn test_export_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chinese-names.txt");
    let favorites = vec![suggestion("艾琳", "Ài Lín")];

    export_to_file(&favorites, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, format_export(&favorites));
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("names").join("out.txt");

    export_to_file(&[suggestion("慕影", "Mù Yǐng")], &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chinese-names.txt");
    std::fs::write(&path, "old contents that are longer than the export").unwrap();

    export_to_file(&[suggestion("雅", "Yǎ")], &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Chinese Name: 雅\n"));
    assert!(!written.contains("old contents"));
}

#[test]
fn test_export_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chinese-names.txt");

    let result = export_to_file(&[], &path);
    assert!(matches!(result, Err(ZhnameError::NothingToExport)));
    assert!(!path.exists());
}

#[test]
fn test_export_to_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();
    // A regular file cannot be used as a directory
    let path = blocker.join("chinese-names.txt");

    let result = export_to_file(&[suggestion("艾琳", "Ài Lín")], &path);
    match result {
        Err(ZhnameError::Export { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected export error, got {:?}", other),
    }
}
