// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end resolution and envelope tests

use i18n_respond::i18n::{Catalog, CatalogSource};
use i18n_respond::{Error, Options, Payload, RequestSignals, Resolver, Trace};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn en_only() -> Catalog {
    Catalog::build(vec![CatalogSource::new(
        "en-US.json",
        r#"{"0": "ok", "1000": "Hello,%s! Your id is:%s"}"#,
    )])
    .unwrap()
}

fn dev_options() -> Options {
    Options::default().with_run_env("dev")
}

fn bundled() -> Resolver {
    Resolver::new(
        dev_options()
            .with_lang_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("lang"))
            .with_debug_mode(true),
    )
    .expect("bundled lang dir should load")
}

#[test]
fn test_template_params_substituted() {
    let resolver = Resolver::with_catalog(en_only(), &dev_options());
    assert_eq!(
        resolver.resolve("en-US", "1000", &["Seakee", "18888888888"]),
        "Hello,Seakee! Your id is:18888888888"
    );
}

#[test]
fn test_unknown_language_falls_back_to_default() {
    let resolver = Resolver::with_catalog(en_only(), &dev_options());
    assert_eq!(resolver.resolve::<&str>("fr-FR", "0", &[]), "ok");
    assert_eq!(
        resolver.resolve("fr-FR", "1000", &["a", "b"]),
        resolver.resolve("en-US", "1000", &["a", "b"])
    );
}

#[test]
fn test_missing_code_is_echoed() {
    let catalog = Catalog::build(vec![CatalogSource::new("en-US.json", "{}")]).unwrap();
    let resolver = Resolver::with_catalog(catalog, &dev_options());
    assert_eq!(resolver.resolve::<&str>("en-US", "404", &[]), "404");
}

#[test]
fn test_zero_sources_fail() {
    let err = Catalog::build(Vec::<CatalogSource>::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog { .. }));
}

#[test]
fn test_prod_disables_debug_everywhere() {
    let resolver = Resolver::with_catalog(
        en_only(),
        &Options::default().with_run_env("prod").with_debug_mode(true),
    );
    let signals = RequestSignals::new().with_debug("1");
    assert!(!resolver.is_debug_allowed(&signals));

    let err = "boom";
    let envelope = resolver.build_envelope(&signals, 0, "x", Some(&err));
    assert_eq!(envelope.trace.description, "");
}

#[test]
fn test_run_mode_read_from_env_key() {
    // unique key so no other test observes it
    let key = "I18N_RESPOND_TEST_RUN_MODE";
    std::env::set_var(key, "prod");
    let resolver = Resolver::with_catalog(
        en_only(),
        &Options::default().with_env_key(key).with_debug_mode(true),
    );
    std::env::remove_var(key);

    assert_eq!(resolver.run_env(), "prod");
    assert!(!resolver.is_debug_allowed(&RequestSignals::new()));
}

#[test]
fn test_stored_template_returned_exactly() {
    let resolver = bundled();
    for lang in resolver.languages() {
        let messages = resolver.catalog().get(lang).unwrap();
        for (code, template) in messages {
            if !template.contains('%') {
                assert_eq!(&resolver.resolve::<&str>(lang, code, &[]), template);
            }
        }
    }
}

#[test]
fn test_empty_params_leave_template_untouched() {
    let catalog = Catalog::build(vec![CatalogSource::new(
        "en-US.json",
        r#"{"7": "100%% done %s"}"#,
    )])
    .unwrap();
    let resolver = Resolver::with_catalog(catalog, &dev_options());
    assert_eq!(resolver.resolve::<&str>("en-US", "7", &[]), "100%% done %s");
    assert_eq!(resolver.resolve("en-US", "7", &["now"]), "100% done now");
}

#[test]
fn test_oversized_width_template_still_resolves() {
    let catalog = Catalog::build(vec![CatalogSource::new(
        "en-US.json",
        r#"{"1": "x%9223372036854775807s"}"#,
    )])
    .unwrap();
    let resolver = Resolver::with_catalog(catalog, &dev_options());
    assert_eq!(resolver.resolve("en-US", "1", &["a"]), "x%!(BADWIDTH)a");
}

#[test]
fn test_resolve_is_idempotent() {
    let resolver = bundled();
    let first = resolver.resolve("zh-CN", "1000", &["x", "y"]);
    let second = resolver.resolve("zh-CN", "1000", &["x", "y"]);
    assert_eq!(first, second);
}

#[test]
fn test_bundled_response_table() {
    // (code, payload, error, expected msg, expected desc)
    let resolver = bundled();
    resolver.set_language("zh-CN");
    let signals = RequestSignals::new();

    let cases: Vec<(i64, Payload, Option<&str>, &str, &str)> = vec![
        (-1, Payload::from("busy"), Some("busy... "), "系统繁忙", "busy... "),
        (0, Payload::from("ok"), None, "ok", ""),
        (500, Payload::from("fail"), None, "500", ""),
        (400, Payload::from("params"), None, "请求参数错误", ""),
        (
            1000,
            Payload::with_params(["Seakee", "18888888888"], "test"),
            None,
            "你好,Seakee!你的账号是:18888888888",
            "",
        ),
    ];

    for (code, payload, err, msg, desc) in cases {
        let (_, data) = payload.clone().into_parts();
        let envelope = resolver.build_envelope(
            &signals,
            code,
            payload,
            err.as_ref().map(|e| e as &dyn std::fmt::Display),
        );
        assert_eq!(envelope.code, code);
        assert_eq!(envelope.message, msg, "code {code}");
        assert_eq!(envelope.trace.description, desc, "code {code}");
        assert_eq!(envelope.data, data);
    }
}

#[test]
fn test_user_agent_language_selects_catalog() {
    let resolver = bundled();
    let signals = RequestSignals::new().with_user_agent("Mozilla/5.0;Lang=zh-CN;os=linux");
    let envelope = resolver.build_envelope(&signals, 400, Payload::default(), None);
    assert_eq!(envelope.message, "请求参数错误");
    assert_eq!(envelope.data, json!(null));
    assert_eq!(envelope.trace, Trace::default());
}

#[test]
fn test_set_language_visible_across_threads() {
    let resolver = Arc::new(bundled());
    let writer = Arc::clone(&resolver);
    thread::spawn(move || writer.set_language("zh-CN"))
        .join()
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reader = Arc::clone(&resolver);
            thread::spawn(move || reader.resolve::<&str>("xx-XX", "-1", &[]))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "系统繁忙");
    }
}
