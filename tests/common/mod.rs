#![allow(dead_code)]

use fontinject::{FontFaceData, FontFaces, ResolveResult, StaticFontResolver};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Faces served for `family` by [`recording_resolver`].
pub fn faces_for(family: &str) -> ResolveResult {
    Ok(Some(FontFaces::from(FontFaceData::new(format!(
        "/fonts/{}.woff2",
        family.to_lowercase().replace(' ', "-")
    )))))
}

/// Every family a [`recording_resolver`] was asked about, in call order.
pub type Calls = Arc<Mutex<Vec<String>>>;

pub fn recording_resolver() -> (
    impl Fn(String) -> std::future::Ready<ResolveResult> + Send + Sync + 'static,
    Calls,
) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);
    let resolver = move |family: String| {
        seen.lock().unwrap().push(family.clone());
        std::future::ready(faces_for(&family))
    };
    (resolver, calls)
}

pub fn calls(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().clone()
}

/// A static table with a couple of well-known families.
pub fn static_resolver() -> StaticFontResolver {
    let resolver = StaticFontResolver::new();
    resolver
        .add("Inter", FontFaceData::new("/fonts/inter.woff2"))
        .unwrap();
    resolver
        .add(
            "Roboto",
            vec![
                FontFaceData::new("/fonts/roboto-400.woff2").with_weight(400),
                FontFaceData::new("/fonts/roboto-700.woff2").with_weight(700),
            ],
        )
        .unwrap();
    resolver
}

/// Rendered block for a face served by [`faces_for`].
pub fn expected_block(family: &str) -> String {
    format!(
        "@font-face {{\n  font-family: '{family}';\n  src: url(\"/fonts/{}.woff2\") format(woff2);\n  font-display: swap;\n}}",
        family.to_lowercase().replace(' ', "-")
    )
}
