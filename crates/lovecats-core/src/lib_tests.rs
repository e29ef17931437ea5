use indoc::indoc;

use crate::{TypeExpr, parse_api};

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "version": "11.5",
        "functions": [
            {
                "name": "getVersion",
                "description": "Gets the current running version of LÖVE.",
                "variants": [
                    {
                        "returns": [
                            { "type": "number", "name": "major", "description": "The major version." },
                            { "type": "string", "name": "codename", "description": "The codename." }
                        ]
                    }
                ]
            }
        ],
        "callbacks": [
            { "name": "draw", "description": "Callback function used to draw on the screen.", "variants": [ {} ] }
        ],
        "modules": [
            {
                "name": "graphics",
                "description": "Drawing of shapes and images.",
                "types": [
                    {
                        "name": "Canvas",
                        "description": "Off-screen render target.",
                        "supertypes": [ "Texture", "Drawable", "Object" ],
                        "functions": [
                            {
                                "name": "getFormat",
                                "description": "Gets the format of the Canvas.",
                                "variants": [ { "returns": [ { "type": "PixelFormat", "name": "format" } ] } ]
                            }
                        ]
                    }
                ],
                "enums": [
                    {
                        "name": "AlignMode",
                        "description": "Text alignment.",
                        "constants": [ { "name": "center", "description": "Align text center." } ]
                    }
                ],
                "functions": [
                    {
                        "name": "setColor",
                        "description": "Sets the color used for drawing.",
                        "variants": [
                            {
                                "arguments": [
                                    { "type": "number", "name": "red", "description": "Red." },
                                    { "type": "number", "name": "alpha", "description": "Alpha.", "default": "1" }
                                ]
                            },
                            {
                                "description": "Table form.",
                                "arguments": [
                                    {
                                        "type": "table",
                                        "name": "rgba",
                                        "description": "A numerical indexed table.",
                                        "table": [ { "type": "number", "name": "r", "description": "Red." } ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    }
"#};

#[test]
fn parse_root_module() {
    let api = parse_api(SAMPLE_JSON).unwrap();

    assert_eq!(api.version.as_deref(), Some("11.5"));
    assert_eq!(api.root.name, "love");
    assert_eq!(api.root.functions.len(), 1);
    assert_eq!(api.root.callbacks.len(), 1);
    assert_eq!(api.root.modules.len(), 1);
}

#[test]
fn parse_nested_module() {
    let api = parse_api(SAMPLE_JSON).unwrap();
    let graphics = &api.root.modules[0];

    assert_eq!(graphics.name, "graphics");
    assert_eq!(graphics.types[0].supertypes, ["Texture", "Drawable", "Object"]);
    assert_eq!(graphics.types[0].functions[0].name, "getFormat");
    assert_eq!(graphics.enums[0].constants[0].name, "center");
}

#[test]
fn missing_lists_default_to_empty() {
    let api = parse_api(SAMPLE_JSON).unwrap();
    let draw = &api.root.callbacks[0];

    assert_eq!(draw.variants.len(), 1);
    assert!(draw.variants[0].arguments.is_empty());
    assert!(draw.variants[0].returns.is_empty());
    assert!(draw.variants[0].description.is_none());
}

#[test]
fn default_marks_argument_optional() {
    let api = parse_api(SAMPLE_JSON).unwrap();
    let set_color = &api.root.modules[0].functions[0];
    let args = &set_color.variants[0].arguments;

    assert!(!args[0].is_optional());
    assert!(args[1].is_optional());
    assert_eq!(args[1].default.as_deref(), Some("1"));
}

#[test]
fn table_argument_becomes_inline_table() {
    let api = parse_api(SAMPLE_JSON).unwrap();
    let set_color = &api.root.modules[0].functions[0];
    let rgba = &set_color.variants[1].arguments[0];

    let TypeExpr::InlineTable { declared, fields } = &rgba.ty else {
        panic!("expected inline table, got {:?}", rgba.ty);
    };
    assert_eq!(**declared, TypeExpr::Scalar("table".into()));
    assert_eq!(fields[0].name, "r");
    assert_eq!(fields[0].ty, TypeExpr::Scalar("number".into()));
    assert_eq!(set_color.variants[1].description.as_deref(), Some("Table form."));
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse_api("{ \"modules\": 3 }").is_err());
}
