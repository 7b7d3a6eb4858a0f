//! `test-utils` is used for testing in both `urlinker-lib` and `urlinker-bin`.
//! This crate does not depend on `urlinker-lib` or `urlinker-bin`, else we would get dependency cycles.
//! Macros are used instead, so that the importer is responsible for providing the dependencies.

/// Build the markup the default renderer produces for a link
#[macro_export]
macro_rules! link {
    ($href:expr, $content:expr $(,)?) => {
        format!(r#"<a href="{}">{}</a>"#, $href, $content)
    };
}

/// Get the root path of the project.
#[macro_export]
macro_rules! root_path {
    () => {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .to_path_buf()
    };
}

/// Gets the "fixtures" directory path.
#[macro_export]
macro_rules! fixtures_path {
    () => {
        $crate::root_path!().join("fixtures")
    };
    ($($segment:expr),+ $(,)?) => {{
        let mut path = $crate::fixtures_path!();
        $(path.push($segment);)+
        path
    }};
}

/// Loads a fixture from the `fixtures` directory
#[macro_export]
macro_rules! load_fixture {
    ($($segment:expr),+ $(,)?) => {{
        let path = $crate::fixtures_path!($($segment),+);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
    }};
}
