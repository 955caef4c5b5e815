//! Tests for SkylineService reading building files

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use skyline::application::services::SkylineService;
use skyline::application::ApplicationError;
use skyline::domain::{Building, DomainError};
use skyline::infrastructure::traits::RealFileSystem;

/// Helper to create temp building files for testing
fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write building file");
    path
}

fn service() -> SkylineService {
    SkylineService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_building_file_when_loading_then_returns_buildings_in_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_file(
        &temp,
        "city.txt",
        r#"# downtown
[1,4,1]
[2,3,2]

[7,8,1.5]
"#,
    );

    // Act
    let buildings = service().load_file(&path).unwrap();

    // Assert
    assert_eq!(
        buildings,
        vec![
            Building::new(1.0, 4.0, 1.0),
            Building::new(2.0, 3.0, 2.0),
            Building::new(7.0, 8.0, 1.5),
        ]
    );
}

#[test]
fn given_missing_file_when_loading_then_input_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.txt");

    let err = service().load_file(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::InputNotFound(p) if p == path));
}

#[test]
fn given_file_with_bad_line_when_loading_then_error_names_file_and_line() {
    let temp = TempDir::new().unwrap();
    let path = create_file(&temp, "bad.txt", "[1,2,3]\n[1,2,3\n");

    let err = service().load_file(&path).unwrap_err();

    match &err {
        ApplicationError::InvalidInput { line, source, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(*source, DomainError::Unparseable("[1,2,3".into()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with(&path.display().to_string()));
}

#[test]
fn given_files_and_inline_when_collecting_then_files_first() {
    let temp = TempDir::new().unwrap();
    let a = create_file(&temp, "a.txt", "[1,2,1]\n");
    let b = create_file(&temp, "b.txt", "[3,4,1]\n");

    let buildings = service()
        .collect(&[a, b], &["[5,6,1]".to_string()])
        .unwrap();

    let starts: Vec<f64> = buildings.iter().map(|b| b.start).collect();
    assert_eq!(starts, vec![1.0, 3.0, 5.0]);
}

#[test]
fn given_collected_buildings_when_building_then_outline_merged() {
    let temp = TempDir::new().unwrap();
    let path = create_file(&temp, "row.txt", "[0,1,2]\n[1,2,2]\n[2,3,2]\n");
    let svc = service();

    let skyline = svc.build(svc.load_file(&path).unwrap());

    assert_eq!(skyline.flatten(), vec![Building::new(0.0, 3.0, 2.0)]);
}
