//! Loading and saving parser options as TOML.

use typesift_core::{
    BooleanMap, ConfigError, NumericOptions, ParserOptions, TimeLayout, TimeOptions,
    TrailingDecimal, ValueKind,
};

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("typesift.toml");

    let options = ParserOptions::standard()
        .with_booleans(BooleanMap::default().with("Y", true).with("N", false));
    options.save(&path).unwrap();

    let loaded = ParserOptions::load(&path).unwrap();
    assert_eq!(loaded, options);
}

#[test]
fn layouts_serialize_as_text() {
    let options = ParserOptions::generic().with_time(TimeOptions {
        datetime_layouts: vec![TimeLayout::Rfc3339, TimeLayout::format("%d.%m.%Y %H:%M")],
        date_layouts: vec![TimeLayout::format("%d.%m.%Y")],
    });
    let text = options.to_toml_string().unwrap();
    assert!(text.contains(r#""rfc3339""#), "{text}");
    assert!(text.contains(r#""%d.%m.%Y %H:%M""#), "{text}");
    assert_eq!(ParserOptions::from_toml_str(&text).unwrap(), options);
}

#[test]
fn loaded_options_drive_the_parser() {
    let options = ParserOptions::from_toml_str(
        r#"
        [numeric]
        currency_symbol = "€"
        digit_separator = "."
        decimal_separator = ","

        [time]
        datetime_layouts = []
        date_layouts = ["%d.%m.%Y"]

        [booleans]
        ja = true
        nein = false
        "#,
    )
    .unwrap();
    let parser = options.compile();

    let outcome = parser.parse("€1.234,50").unwrap();
    assert_eq!(outcome.kind(), ValueKind::Money);
    assert_eq!(outcome.numeric().unwrap().canonical(), "1234.50");

    assert_eq!(parser.parse("ja").unwrap().boolean(), Some(true));
    assert!(parser.parse("yes").is_err());
    assert!(parser.parse("2009-01-02T15:04:05Z").is_err());
}

#[test]
fn builder_matches_document() {
    let built = ParserOptions::generic().with_numeric(
        NumericOptions::default()
            .with_currency_symbol("€")
            .with_separators(".", ",")
            .with_trailing_decimal(TrailingDecimal::Drop),
    );
    let parsed = ParserOptions::from_toml_str(
        r#"
        [numeric]
        currency_symbol = "€"
        digit_separator = "."
        decimal_separator = ","
        trailing_decimal = "drop"
        "#,
    )
    .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParserOptions::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[numeric\ncurrency_symbol = 1").unwrap();

    let err = ParserOptions::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFile { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
