//! Loading descriptors from sheet text.

use std::io::Write;

use dyncss::modifier::Darken;
use dyncss::sheet::{load_sheet, parse_sheet, parse_sheet_with};
use dyncss::{CssGenerator, DynCssError, MediaQuery, Modifier, ModifierRegistry, StaticValue};
use insta::assert_snapshot;

const THEME: &str = r#"
/* Accent color */
color {
    a, .link;
    @media (min-width: 900px) { .nav a, .nav .link; }
}

background-color: darken(20%) {
    .btn:hover,
    .btn:focus;
}

border-color: identity {
    .card;
    .panel;
}
"#;

#[test]
fn test_parses_properties_in_order() {
    let props = parse_sheet(THEME).unwrap();
    let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["color", "background-color", "border-color"]);
}

#[test]
fn test_parses_selector_groups() {
    let props = parse_sheet(THEME).unwrap();
    let color = &props[0];

    let keys: Vec<&str> = color.selectors.iter().map(|g| g.media.as_key()).collect();
    assert_eq!(keys, vec!["noop", "@media (min-width: 900px)"]);
    assert_eq!(
        color
            .selectors
            .get(&MediaQuery::from_key("@media (min-width: 900px)"))
            .unwrap()
            .selectors,
        vec![".nav a", ".nav .link"]
    );
}

#[test]
fn test_repeated_noop_items_merge() {
    let props = parse_sheet(THEME).unwrap();
    let border = &props[2];

    assert_eq!(border.selectors.len(), 1);
    assert_eq!(
        border.selectors.get(&MediaQuery::Noop).unwrap().joined(),
        ".card, .panel"
    );
}

#[test]
fn test_resolves_builtin_modifiers() {
    let props = parse_sheet(THEME).unwrap();

    assert_eq!(props[0].modifier, None);
    assert_eq!(props[1].modifier, Some(Modifier::new(Darken::new(20.0))));
    assert_eq!(props[2].modifier, Some(Modifier::identity()));
}

#[test]
fn test_renders_parsed_sheet() {
    let generator =
        CssGenerator::with_properties(StaticValue::new("#ffffff"), parse_sheet(THEME).unwrap());

    assert_snapshot!(generator.render(), @r#"
    a, .link { color: #ffffff; }
    @media (min-width: 900px) { .nav a, .nav .link { color: #ffffff; } }
    .btn:hover, .btn:focus { background-color: #cccccc; }
    .card, .panel { border-color: #ffffff; }
    "#);
}

#[test]
fn test_empty_sheet_is_empty() {
    assert!(parse_sheet("").unwrap().is_empty());
    assert!(parse_sheet("  /* nothing */  \n").unwrap().is_empty());
}

#[test]
fn test_unknown_modifier_is_rejected() {
    let err = parse_sheet("color: sparkle(3) { .a; }").unwrap_err();
    assert!(matches!(err, DynCssError::InvalidModifierKind(name) if name == "sparkle"));
}

#[test]
fn test_bad_modifier_arguments_are_rejected() {
    let err = parse_sheet("color: darken(a lot) { .a; }").unwrap_err();
    assert!(matches!(err, DynCssError::InvalidModifierArgs { name, .. } if name == "darken"));
}

#[test]
fn test_block_without_selectors_is_rejected() {
    let err = parse_sheet("color { }").unwrap_err();
    assert!(matches!(err, DynCssError::MissingSelectors { property } if property == "color"));
}

#[test]
fn test_syntax_error_reports_line() {
    let err = parse_sheet("color { .a; }\n\n{ .b; }").unwrap_err();
    match err {
        DynCssError::InvalidSyntax(message) => {
            assert!(message.contains("line 3"), "{}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_custom_registry() {
    let mut registry = ModifierRegistry::new();
    registry.register("px", |_| Ok(Modifier::from_fn(|v| format!("{}px", v))));

    let sheet = "font-size: px { body; }";
    let props = parse_sheet_with(sheet, &registry).unwrap();
    let generator = CssGenerator::with_properties(StaticValue::new("16"), props);
    assert_eq!(generator.render(), "body { font-size: 16px; }\n");

    // Built-ins are not available in a fresh registry.
    assert!(matches!(
        parse_sheet_with("color: darken(10) { .a; }", &registry),
        Err(DynCssError::InvalidModifierKind(_))
    ));
}

#[test]
fn test_load_sheet_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "color {{ .a; }}").unwrap();

    let props = load_sheet(file.path()).unwrap();
    assert_eq!(props.len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_sheet("/definitely/not/here.dcss").unwrap_err();
    assert!(matches!(err, DynCssError::Io(_)));
}

#[test]
fn test_wrapped_prelude_renders_on_one_line() {
    let sheet = "color {
        @media (min-width: 900px)
            and (max-width: 1200px) { .a; }
        .nav
          a;
    }";
    let generator =
        CssGenerator::with_properties(StaticValue::new("red"), parse_sheet(sheet).unwrap());

    assert_eq!(
        generator.render(),
        "@media (min-width: 900px) and (max-width: 1200px) { .a { color: red; } }\n\
         .nav a { color: red; }\n"
    );
}

#[test]
fn test_comment_markers_inside_quotes_are_kept() {
    let sheet = r#"color { a[href^="/*"], a[href$="*/"]; /* links */ }"#;
    let props = parse_sheet(sheet).unwrap();
    assert_eq!(
        props[0].selectors.get(&MediaQuery::Noop).unwrap().selectors,
        vec![r#"a[href^="/*"]"#, r#"a[href$="*/"]"#]
    );
}

#[test]
fn test_stray_semicolons_are_ignored() {
    let props = parse_sheet("color { .a;; ; .b; }").unwrap();
    assert_eq!(props[0].selectors.len(), 1);
    assert_eq!(
        props[0].selectors.get(&MediaQuery::Noop).unwrap().joined(),
        ".a, .b"
    );
}
