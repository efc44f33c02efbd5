//! Rendering order, media query wrapping and output format.

use dyncss::modifier::Darken;
use dyncss::{CssGenerator, CssProperty, Modifier, SharedValue, StaticValue};
use insta::assert_snapshot;

#[test]
fn test_noop_group_renders_at_top_level() {
    let generator = CssGenerator::new(StaticValue::new("red"))
        .property(CssProperty::new("color").selectors("noop", [".a", ".b"]));

    assert_eq!(generator.render(), ".a, .b { color: red; }\n");
}

#[test]
fn test_media_group_wraps_rule_verbatim() {
    let generator = CssGenerator::new(StaticValue::new("blue")).property(
        CssProperty::new("background-color")
            .selectors("@media (min-width: 900px)", [".c"]),
    );

    assert_eq!(
        generator.render(),
        "@media (min-width: 900px) { .c { background-color: blue; } }\n"
    );
}

#[test]
fn test_media_key_is_not_rewritten() {
    // Whatever the key says ends up in front of the block, untouched.
    let generator = CssGenerator::new(StaticValue::new("0")).property(
        CssProperty::new("margin")
            .selectors("@supports   (display:grid)", ["main"]),
    );

    assert_eq!(
        generator.render(),
        "@supports   (display:grid) { main { margin: 0; } }\n"
    );
}

#[test]
fn test_empty_descriptor_list_renders_nothing() {
    let generator = CssGenerator::new(StaticValue::new("red"));
    assert_eq!(generator.render(), "");
}

#[test]
fn test_rules_follow_descriptor_then_group_order() {
    let generator = CssGenerator::new(StaticValue::new("red"))
        .property(
            CssProperty::new("color")
                .selectors("noop", [".a", ".b"])
                .selectors("@media (min-width: 900px)", [".c"]),
        )
        .property(CssProperty::new("border-color").selectors("noop", [".d"]))
        .property(
            CssProperty::new("outline-color")
                .selectors("@media print", [".e"])
                .selectors("noop", [".f"]),
        );

    assert_snapshot!(generator.render(), @r#"
    .a, .b { color: red; }
    @media (min-width: 900px) { .c { color: red; } }
    .d { border-color: red; }
    @media print { .e { outline-color: red; } }
    .f { outline-color: red; }
    "#);
}

#[test]
fn test_every_rule_ends_with_newline() {
    let generator = CssGenerator::new(StaticValue::new("red")).property(
        CssProperty::new("color")
            .selectors("noop", [".a"])
            .selectors("@media print", [".b"]),
    );

    let css = generator.render();
    assert!(css.ends_with("} }\n"));
    assert_eq!(css.matches('\n').count(), 2);
}

#[test]
fn test_modifier_output_replaces_value() {
    let generator = CssGenerator::new(StaticValue::new("#ffffff")).property(
        CssProperty::new("background-color")
            .selectors("noop", [".btn"])
            .with_modifier(Modifier::new(Darken::new(10.0))),
    );

    let css = generator.render();
    let expected = Darken::new(10.0);
    assert!(!css.contains("#ffffff"));
    assert_eq!(
        css,
        format!(
            ".btn {{ background-color: {}; }}\n",
            dyncss::Modify::modify(&expected, "#ffffff")
        )
    );
}

#[test]
fn test_modifier_applies_to_every_group() {
    let generator = CssGenerator::new(StaticValue::new("1")).property(
        CssProperty::new("z-index")
            .selectors("noop", [".a"])
            .selectors("@media print", [".b"])
            .with_modifier(Modifier::from_fn(|v| format!("{}0", v))),
    );

    assert_eq!(
        generator.render(),
        ".a { z-index: 10; }\n@media print { .b { z-index: 10; } }\n"
    );
}

#[test]
fn test_unmodified_descriptors_keep_base_value() {
    let generator = CssGenerator::new(StaticValue::new("#ffffff"))
        .property(
            CssProperty::new("color")
                .selectors("noop", [".a"])
                .with_modifier(Modifier::from_fn(|_| "black".to_string())),
        )
        .property(CssProperty::new("color").selectors("noop", [".b"]));

    assert_eq!(
        generator.render(),
        ".a { color: black; }\n.b { color: #ffffff; }\n"
    );
}

#[test]
fn test_render_is_idempotent() {
    let generator = CssGenerator::new(StaticValue::new("teal")).property(
        CssProperty::new("color")
            .selectors("noop", [".a"])
            .selectors("@media print", [".b"]),
    );

    assert_eq!(generator.render(), generator.render());
}

#[test]
fn test_render_tracks_shared_value() {
    let value = SharedValue::new("red");
    let generator = CssGenerator::new(value.clone())
        .property(CssProperty::new("color").selectors("noop", [".a"]));

    assert_eq!(generator.render(), ".a { color: red; }\n");
    value.set("green");
    assert_eq!(generator.render(), ".a { color: green; }\n");
}
