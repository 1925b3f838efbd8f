use implementors::{
    Delivery, ImplementorRegistry,
    environment::LocalEnvironment,
    script::{ScriptLayout, parse_script, read_script, render_script, write_script},
    testing::RecordingCallback,
};
use std::sync::Arc;

mod common;
use common::{UNWIND_SAFE_SCRIPT, fixture_path, texts};

#[test]
fn test_fixture_parses() {
    let table = parse_script(UNWIND_SAFE_SCRIPT).unwrap();

    assert_eq!(
        table.libraries().collect::<Vec<_>>(),
        vec![
            "arrayvec",
            "base64",
            "encoding",
            "idna",
            "lexical_core",
            "memchr",
            "nom",
            "rustyknife",
            "unicode_bidi",
            "unicode_normalization",
        ]
    );
    assert_eq!(table.descriptor_count(), 99);
    assert_eq!(table.get("arrayvec").unwrap().len(), 5);
    assert_eq!(table.get("nom").unwrap().len(), 8);
    assert!(
        table
            .iter()
            .flat_map(|(_, list)| list.iter())
            .all(|d| d.synthetic && d.types.is_empty())
    );
}

#[test]
fn test_fixture_descriptor_order_and_text() {
    let table = parse_script(UNWIND_SAFE_SCRIPT).unwrap();
    let rustyknife = texts(&table, "rustyknife");

    assert_eq!(rustyknife.len(), 27);
    assert_eq!(rustyknife[0], "impl UnwindSafe for Legacy");
    assert_eq!(rustyknife[1], "impl UnwindSafe for Intl");
    assert_eq!(rustyknife[2], "impl UnwindSafe for ContentDisposition");

    // Markup is carried verbatim.
    let arrayvec = texts(&table, "arrayvec");
    assert!(arrayvec[0].starts_with("impl&lt;A&gt; UnwindSafe for ArrayString&lt;A&gt; <span class=\"where fmt-newline\">"));
}

#[test]
fn test_fixture_renders_byte_for_byte() {
    let table = parse_script(UNWIND_SAFE_SCRIPT).unwrap();
    let rendered = render_script(&table, &ScriptLayout::new()).unwrap();
    assert_eq!(rendered, UNWIND_SAFE_SCRIPT);
}

#[test]
fn test_fixture_from_disk_into_environment() {
    let table = read_script(&fixture_path()).unwrap().into_shared();
    let recorder = RecordingCallback::new();
    let mut env = LocalEnvironment::new().with_callback(recorder.clone());

    let delivery = ImplementorRegistry::new(table.clone()).publish(&mut env);

    assert_eq!(delivery, Delivery::Registered);
    assert!(Arc::ptr_eq(&recorder.last().unwrap(), &table));
}

#[test]
fn test_write_then_read_under_custom_root() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ScriptLayout::new()
        .with_root("doc/implementors")
        .with_trailing_newline(true);
    let table = parse_script(UNWIND_SAFE_SCRIPT).unwrap();

    let path = write_script(dir.path(), "std::panic", "UnwindSafe", &table, &layout).unwrap();

    assert!(path.ends_with("doc/implementors/std/panic/trait.UnwindSafe.js"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("})()\n"));
    assert_eq!(read_script(&path).unwrap(), table);
}

#[test]
fn test_table_json_matches_script_payload() {
    let table = parse_script(UNWIND_SAFE_SCRIPT).unwrap();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["base64"].as_array().unwrap().len(), 5);
    assert_eq!(json["base64"][0]["text"], "impl UnwindSafe for Config");
    assert_eq!(json["base64"][0]["synthetic"], true);
}
