// Integration tests for the interpolation engine and its print helpers

use bracefmt::args;
use bracefmt::interp::errors::InterpError;
use bracefmt::interp::scanner::interpolate;
use bracefmt::print::{log_interp, PrintConfig, Printer};
use bracefmt::value::Value;

#[test]
fn test_substitution_end_to_end() {
    let args = args!["Hello", "World"];
    assert_eq!(interpolate("{0} {1}!", &args).unwrap(), "Hello World!");
    assert_eq!(interpolate("{1}, {0}", &args).unwrap(), "World, Hello");
}

#[test]
fn test_every_value_type_stringifies() {
    let mut map = rustc_hash::FxHashMap::default();
    map.insert("k".to_string(), Value::Int(1));
    let args = vec![
        Value::Int(-7),
        Value::Float(2.5),
        Value::Char('x'),
        Value::Str("s".to_string()),
        Value::Bool(false),
        Value::List(vec![Value::Int(1), Value::Int(2)]),
        Value::Map(map),
        Value::Null,
    ];
    let out = interpolate("{0}|{1}|{2}|{3}|{4}|{5}|{6}|{7}", &args).unwrap();
    assert_eq!(out, "-7|2.5|x|s|false|[1, 2]|{k: 1}|null");
}

#[test]
fn test_lenient_recovery_never_fails_on_prose() {
    // Free-form text with every malformed brace shape stays literal
    let cases = [
        ("set {field to {0", "set {field to {0"),
        ("a { b", "a { b"),
        ("{} literal", "{} literal"),
        ("{Wombat}", "{Wombat}"),
        ("trailing{", "trailing{"),
        ("{12x{34", "{12x{34"),
    ];
    for (template, expected) in cases {
        assert_eq!(interpolate(template, &[]).unwrap(), expected, "template: {template:?}");
    }
}

#[test]
fn test_recovery_still_resolves_later_placeholders() {
    let args = args!["123", 'b'];
    assert_eq!(interpolate("{0{1}}", &args).unwrap(), "{0b}");
    assert_eq!(interpolate("{x} then {0}", &args).unwrap(), "{x} then 123");
}

#[test]
fn test_out_of_range_reports_index_and_len() {
    let err = interpolate("{5}", &args!["only one arg"]).unwrap_err();
    assert_eq!(err, InterpError::IndexOutOfRange { index: 5, len: 1 });
    assert!(err.to_string().contains("5"));
    assert!(err.to_string().contains("0 to 0"));
}

#[test]
fn test_printer_with_custom_separator() {
    let config = PrintConfig {
        separator: " | ".to_string(),
    };
    let mut printer = Printer::with_config(Vec::new(), config);
    printer.println("{0} scored {1}", &args!["Ada", 99]).unwrap();
    printer.println_all(&args![1, 2.5, None::<i32>]).unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(out, "Ada scored 99\n1 | 2.5 | null\n");
}

#[test]
fn test_log_helpers() {
    let _ = env_logger::builder().is_test(true).try_init();

    log_interp(log::Level::Info, "{0} connected from {1}", &args!["peer", "10.0.0.2"]).unwrap();
    bracefmt::print::warn("retry {0} of {1}", &args![2, 5]).unwrap();

    // A mismatched template comes back as an error instead of being logged
    let err = bracefmt::print::error("{9}", &args![1]).unwrap_err();
    assert_eq!(err, InterpError::IndexOutOfRange { index: 9, len: 1 });
}
