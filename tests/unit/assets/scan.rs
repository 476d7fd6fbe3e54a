use super::*;

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("scan_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn picks_supported_extensions_case_insensitively() {
    let dir = fixture_dir("mixed");
    for name in ["b.PNG", "a.png", "c.Jpg", "d.jpeg", "e.bmp", "f.gif", "g.txt"] {
        std::fs::write(dir.join(name), b"stub").unwrap();
    }

    let found = scan_category_dir(&dir).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.png", "b.PNG", "c.Jpg", "d.jpeg", "e.bmp"]);
}

#[test]
fn skips_subdirectories_and_extensionless_files() {
    let dir = fixture_dir("nested");
    std::fs::create_dir_all(dir.join("sub.png")).unwrap();
    std::fs::write(dir.join("noext"), b"stub").unwrap();
    std::fs::write(dir.join("ok.png"), b"stub").unwrap();

    let found = scan_category_dir(&dir).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("ok.png"));
}

#[test]
fn empty_directory_yields_empty_pool() {
    let dir = fixture_dir("empty");
    assert!(scan_category_dir(&dir).unwrap().is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = PathBuf::from("target/scan_unit/does_not_exist");
    assert!(scan_category_dir(&dir).is_err());
}
