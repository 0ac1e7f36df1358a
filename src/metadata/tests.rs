use super::*;

fn no_justify() -> RenderOptions {
    RenderOptions {
        justify: false,
        max_line_length: 0,
    }
}

#[test]
fn test_interchange_schema_flags() {
    let metadata = Metadata::new();

    let title = metadata.entry(keys::TITLE).unwrap();
    assert!(title.is_reserved());
    assert!(title.is_required());

    let resolution = metadata.entry(keys::RESOLUTION).unwrap();
    assert!(resolution.is_reserved());
    assert!(!resolution.is_required());

    assert_eq!(metadata.get(keys::JCAMP_DX), Some("4.24"));
}

#[test]
fn test_set_keeps_flags() {
    let mut metadata = Metadata::new();
    metadata.set(keys::OWNER, "operator");
    metadata.set("  Owner ", "second operator");

    let owner = metadata.entry(keys::OWNER).unwrap();
    assert_eq!(owner.value(), "second operator");
    assert!(owner.is_reserved());
    assert!(owner.is_required());
}

#[test]
fn test_unknown_key_is_user_defined() {
    let mut metadata = Metadata::new();
    let before = metadata.len();
    metadata.set("SPName", "filter 7");

    assert_eq!(metadata.len(), before + 1);
    let entry = metadata.entry("SPName").unwrap();
    assert!(!entry.is_reserved());
    assert!(!entry.is_required());
}

#[test]
fn test_required_empty_only_in_interchange_mode() {
    let metadata = Metadata::new();

    let interchange = metadata.render_interchange(&no_justify());
    assert!(interchange.lines().any(|l| l == "##OWNER="));
    assert!(interchange.lines().any(|l| l == "##JCAMP-DX= 4.24"));
    // optional and empty
    assert!(!interchange.contains("##RESOLUTION="));

    let plain = metadata.render_plain(&no_justify());
    assert!(!plain.contains("Owner"));
    assert_eq!(plain, "JCAMP-DX = 4.24\n");
}

#[test]
fn test_user_keys_use_dollar_prefix() {
    let mut metadata = Metadata::new();
    metadata.set(keys::TITLE, "glass filter");
    metadata.set("SPAlias", "BG18");

    let text = metadata.render_interchange(&no_justify());
    assert!(text.contains("##TITLE= glass filter\n"));
    assert!(text.contains("##$SPALIAS= BG18\n"));
}

#[test]
fn test_registration_order_is_render_order() {
    let mut metadata = MetadataSchema::new()
        .required("B")
        .reserved("A")
        .build();
    metadata.set("A", "1");
    metadata.set("C", "3");
    metadata.set("B", "2");

    let text = metadata.render_plain(&no_justify());
    assert_eq!(text, "B = 2\nA = 1\nC = 3\n");
}

#[test]
fn test_first_registration_wins() {
    let metadata = MetadataSchema::new()
        .required("Key")
        .user("Key")
        .build();
    assert_eq!(metadata.len(), 1);
    assert!(metadata.entry("Key").unwrap().is_required());
}

#[test]
fn test_plain_justification_and_exclusion() {
    let mut metadata = MetadataSchema::new().user("Long label").user("X").build();
    metadata.set("Long label", "a");
    metadata.set("X", "b");

    let options = RenderOptions {
        justify: true,
        max_line_length: 0,
    };
    assert_eq!(
        metadata.render_plain(&options),
        "Long label = a\nX          = b\n"
    );
    assert_eq!(
        metadata.render_plain_except(&options, &["X"]),
        "Long label = a\n"
    );
}

#[test]
fn test_interchange_truncation() {
    let mut metadata = Metadata::new();
    metadata.set(keys::TITLE, "t".repeat(200));
    let options = RenderOptions {
        justify: false,
        max_line_length: 80,
    };
    let text = metadata.render_interchange(&options);
    let title = text.lines().find(|l| l.starts_with("##TITLE=")).unwrap();
    assert_eq!(title.len(), 80);
    assert!(title.ends_with("..."));
}
