use std::sync::Arc;
use std::thread;

use fanny_core::Css;
use fanny_style::{compile_class_name, ClassName, StyleSheet};
use pretty_assertions::assert_eq;

#[test]
fn concurrent_compiles_register_once() {
    let sheet = Arc::new(StyleSheet::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sheet = Arc::clone(&sheet);
            thread::spawn(move || {
                let shared = sheet.compile(&Css::new().decl("display", "flex"), None);
                let own = sheet.compile(&Css::new().decl("order", i.to_string()), None);
                (shared, own)
            })
        })
        .collect();

    let results: Vec<(ClassName, ClassName)> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = &results[0].0;
    assert!(results.iter().all(|(shared, _)| shared == first));
    assert_eq!(sheet.class_count(), 9);
    assert_eq!(sheet.rule_count(), 9);
}

#[test]
fn composition_later_fragment_wins() {
    let sheet = StyleSheet::new();
    let navigation = sheet.compile(
        &Css::new().decl("display", "block").decl("color", "black"),
        None,
    );
    let side_nav = sheet.compile(&Css::new().decl("color", "white"), Some(&navigation));

    assert_ne!(navigation, side_nav);
    assert_eq!(
        sheet.fragment(side_nav.as_str()).unwrap(),
        Css::new().decl("display", "block").decl("color", "white")
    );
}

#[test]
fn rules_keep_insertion_order() {
    let sheet = StyleSheet::new();
    let a = sheet.compile(&Css::new().decl("color", "red"), None);
    let b = sheet.compile(&Css::new().decl("color", "blue"), None);

    assert_eq!(
        sheet.to_css(),
        format!(".{a}{{color:red;}}\n.{b}{{color:blue;}}")
    );
}

#[test]
fn global_sheet_is_shared() {
    let css = Css::new().decl("outline-offset", "3px");
    let class = compile_class_name(&css, None);
    assert!(StyleSheet::global().contains(class.as_str()));
    assert_eq!(compile_class_name(&css, None), class);
}

#[test]
fn custom_prefix() {
    let sheet = StyleSheet::with_prefix("ui");
    let class = sheet.compile(&Css::new().decl("color", "red"), None);
    assert!(class.as_str().starts_with("ui-"));
    assert_eq!(sheet.prefix(), "ui");
}
