use super::*;
use crate::layout::Layout;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn make_key(s: &str) -> KeyId {
        KeyId::try_from(s).unwrap()
    }

    pub(super) fn create_store() -> KeyStore {
        KeyStore::new(&Layout::qwertz(), Color::try_from("white").unwrap())
    }

    pub(super) fn create_test_file() -> (LayoutFile, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let file = LayoutFile::new(temp_dir.path().join("keyboard_config.json"));
        (file, temp_dir)
    }

    pub(super) fn write(file: &LayoutFile, content: &str) {
        std::fs::write(file.path(), content).unwrap();
    }
}

mod save {
    use super::common::*;
    use super::*;

    #[test]
    fn test_save_writes_every_key() {
        let (file, _temp) = create_test_file();
        let store = create_store();

        file.save(&store).unwrap();

        let document = file.load().unwrap();
        assert_eq!(document.version, FORMAT_VERSION);
        assert_eq!(document.keys.len(), store.len());
        assert_eq!(
            document.keys["A"],
            KeyEntry {
                labels: vec!["A".to_string()],
                color: "white".to_string(),
            }
        );
    }

    #[test]
    fn test_save_document_shape() {
        let (file, _temp) = create_test_file();
        let mut store = create_store();
        store
            .set_labels(&make_key("A"), vec!["Auswahl".into(), "Alt".into()])
            .unwrap();

        file.save(&store).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["keys"]["A"]["labels"][1], "Alt");
        assert_eq!(raw["keys"]["A"]["color"], "white");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let file = LayoutFile::new(temp.path().join("nested").join("layout.json"));

        file.save(&create_store()).unwrap();

        assert!(file.exists());
    }

    #[test]
    fn test_save_failure_is_io_error() {
        let temp = TempDir::new().unwrap();
        // The target path is an existing directory.
        let file = LayoutFile::new(temp.path());

        let result = file.save(&create_store());

        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}

mod load {
    use super::common::*;
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let (file, _temp) = create_test_file();

        let result = file.load();

        assert!(matches!(result, Err(StorageError::NotFound(path)) if path == file.path()));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let (file, _temp) = create_test_file();
        write(&file, "{\"A\": {\"labels\": [\"A\"], ");

        assert!(matches!(file.load(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let (file, _temp) = create_test_file();
        write(&file, r#"{"A": {"labels": "A", "color": "red"}}"#);

        assert!(matches!(file.load(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_legacy_document_without_version() {
        let (file, _temp) = create_test_file();
        write(
            &file,
            r#"{"A": {"labels": ["Auswahl", "Alt"], "color": "red"}, "B": {"labels": ["B"], "color": "white"}}"#,
        );

        let document = file.load().unwrap();

        assert_eq!(document.version, FORMAT_VERSION);
        assert_eq!(document.keys.len(), 2);
        assert_eq!(document.keys["A"].labels, vec!["Auswahl", "Alt"]);
        assert_eq!(document.keys["A"].color, "red");
    }

    #[test]
    fn test_unsupported_version() {
        let (file, _temp) = create_test_file();
        write(&file, r#"{"version": 2, "keys": {}}"#);

        assert!(matches!(
            file.load(),
            Err(StorageError::UnsupportedVersion(2))
        ));
    }
}

mod into_states {
    use super::common::*;
    use super::*;

    fn document(entries: &[(&str, &[&str], &str)]) -> LayoutDocument {
        LayoutDocument {
            version: FORMAT_VERSION,
            keys: entries
                .iter()
                .map(|(id, labels, color)| {
                    (
                        id.to_string(),
                        KeyEntry {
                            labels: labels.iter().map(|s| s.to_string()).collect(),
                            color: color.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_known_and_unknown_keys_are_split() {
        let store = create_store();
        let doc = document(&[("A", &["x"], "red"), ("Hyper", &["h"], "blue")]);

        let (states, unknown) = doc.into_states(&store).unwrap();

        assert_eq!(states.len(), 1);
        assert_eq!(states[0].0, make_key("A"));
        assert_eq!(states[0].1.color, Color::try_from("red").unwrap());
        assert_eq!(unknown, vec!["Hyper".to_string()]);
    }

    #[test]
    fn test_empty_labels_rejected() {
        let store = create_store();
        let doc = document(&[("A", &[], "red")]);

        let result = doc.into_states(&store);

        assert!(matches!(result, Err(StorageError::InvalidEntry { key, .. }) if key == "A"));
    }

    #[test]
    fn test_blank_color_rejected() {
        let store = create_store();
        let doc = document(&[("B", &["B"], "  ")]);

        assert!(matches!(
            doc.into_states(&store),
            Err(StorageError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_unknown_key_with_invalid_entry_is_ignored() {
        let store = create_store();
        let doc = document(&[("Hyper", &[], "")]);

        let (states, unknown) = doc.into_states(&store).unwrap();

        assert!(states.is_empty());
        assert_eq!(unknown, vec!["Hyper".to_string()]);
    }
}
