use super::*;

// =============================================================
// FileMeta
// =============================================================

#[test]
fn extension_is_lowercased() {
    assert_eq!(FileMeta::new("Holiday.MP4", "", 1).extension().as_deref(), Some("mp4"));
    assert_eq!(FileMeta::new("noext", "", 1).extension(), None);
    assert_eq!(FileMeta::new(".hidden", "", 1).extension(), None);
}

#[test]
fn effective_mime_strips_parameters() {
    let meta = FileMeta::new("a.webm", "Video/WebM; codecs=\"vp9\"", 1);
    assert_eq!(meta.effective_mime(), "video/webm");
}

#[test]
fn effective_mime_falls_back_to_extension() {
    assert_eq!(FileMeta::new("a.mkv", "", 1).effective_mime(), "video/x-matroska");
    assert_eq!(FileMeta::new("a.txt", "", 1).effective_mime(), "");
}

// =============================================================
// Validator
// =============================================================

#[test]
fn accepts_supported_video() {
    let v = Validator::default();
    assert_eq!(v.validate(&FileMeta::new("a.mp4", "video/mp4", 1_000)), Ok(()));
    assert_eq!(v.validate(&FileMeta::new("b.mov", "", 1_000)), Ok(()));
}

#[test]
fn rejects_unsupported_type() {
    let v = Validator::default();
    let err = v.validate(&FileMeta::new("notes.txt", "text/plain", 10));
    assert_eq!(
        err,
        Err(LoadError::UnsupportedType { name: "notes.txt".to_owned(), mime: "text/plain".to_owned() })
    );
}

#[test]
fn rejects_oversized_file() {
    let v = Validator::new(["video/mp4"], 100);
    let err = v.validate(&FileMeta::new("big.mp4", "video/mp4", 101));
    assert_eq!(err, Err(LoadError::TooLarge { name: "big.mp4".to_owned(), size: 101, limit: 100 }));
    assert_eq!(v.validate(&FileMeta::new("edge.mp4", "video/mp4", 100)), Ok(()));
}

#[test]
fn rejects_empty_file() {
    let v = Validator::default();
    assert!(matches!(v.validate(&FileMeta::new("z.mp4", "video/mp4", 0)), Err(LoadError::EmptyFile { .. })));
}

#[test]
fn type_is_checked_before_size() {
    let v = Validator::new(["video/mp4"], 1);
    assert!(matches!(
        v.validate(&FileMeta::new("huge.png", "image/png", 10)),
        Err(LoadError::UnsupportedType { .. })
    ));
}

#[test]
fn error_reports_file_name_and_message() {
    let err = LoadError::TooLarge { name: "x.mp4".to_owned(), size: 3, limit: 2 };
    assert_eq!(err.file_name(), "x.mp4");
    assert_eq!(err.to_string(), "x.mp4: 3 bytes exceeds the 2 byte limit");
}
