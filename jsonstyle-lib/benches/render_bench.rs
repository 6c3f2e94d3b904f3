extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use jsonstyle_lib::config::Configuration;
use jsonstyle_lib::parser::html::create_dom_tree;
use jsonstyle_lib::style::{build_stylesheet, to_css_key};
use jsonstyle_lib::styler::{apply, StyleTargets};

fn large_config() -> Configuration {
    let mut header = String::new();
    for i in 0..1_000 {
        if i > 0 {
            header.push(',');
        }
        header.push_str(&format!("\"borderTopLeftRadius{}\": \"{}px\"", i, i));
    }
    let json = format!(
        r#"{{"styles":{{"body":{{"margin":"0"}},"header":{{{}}},"headerP":{{"color":"red"}}}},
            "content":{{"headerText":"Bench"}}}}"#,
        header
    );
    Configuration::from_json(&json).expect("bench config parses")
}

fn bench_build_stylesheet(c: &mut Criterion) {
    let config = large_config();

    c.bench_function("build_stylesheet", |b| {
        b.iter(|| build_stylesheet(&config).to_string())
    });
}

fn bench_case_conversion(c: &mut Criterion) {
    c.bench_function("to_css_key", |b| {
        b.iter(|| to_css_key("borderTopLeftRadiusWebkitTransitionTimingFunction"))
    });
}

fn bench_apply_to_large_page(c: &mut Criterion) {
    let mut big_html = String::with_capacity(2_000_000);
    big_html.push_str("<html><head><style id=\"style-block\"></style></head><body><div>");
    for _ in 0..50_000 {
        big_html.push_str("<p>Test</p>");
    }
    big_html.push_str("<header><p id=\"header-text\"></p></header></div></body></html>");

    let document = create_dom_tree(&big_html);
    let css = build_stylesheet(&large_config()).to_string();
    let targets = StyleTargets::default();

    c.bench_function("apply_large_page", |b| {
        b.iter(|| apply(&document, &targets, &css, "Bench").expect("targets exist"))
    });
}

criterion_group!(
    benches,
    bench_build_stylesheet,
    bench_case_conversion,
    bench_apply_to_large_page
);
criterion_main!(benches);
