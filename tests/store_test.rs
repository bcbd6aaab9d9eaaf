use hummingbird::error::Error;
use hummingbird::store::TemplateStore;

#[test]
fn test_list_is_sorted_by_path() {
    let store = TemplateStore::from_entries([
        ("b.txt", b"b".to_vec()),
        ("a/z.go.tmpl", b"z".to_vec()),
        ("a/b.txt", b"ab".to_vec()),
    ]);

    let paths: Vec<_> = store.list().map(|entry| entry.path()).collect();
    assert_eq!(paths, ["a/b.txt", "a/z.go.tmpl", "b.txt"]);
}

#[test]
fn test_read() {
    let store = TemplateStore::from_entries([("README.md", b"hello".to_vec())]);

    assert_eq!(store.read("README.md").unwrap(), b"hello");
    match store.read("missing.md") {
        Err(Error::NotFound { path }) => assert_eq!(path, "missing.md"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_entry_classification() {
    let store = TemplateStore::from_entries([
        ("app/pages/index.templ.tmpl", Vec::<u8>::new()),
        ("main.go.tmpl", Vec::<u8>::new()),
        ("notes.tmpl", Vec::<u8>::new()),
        ("vite.config.ts", Vec::<u8>::new()),
    ]);

    let classified: Vec<_> = store
        .list()
        .map(|entry| (entry.output_path(), entry.is_template()))
        .collect();
    assert_eq!(
        classified,
        [
            ("app/pages/index.templ", true),
            ("main.go", true),
            ("notes", false),
            ("vite.config.ts", false),
        ]
    );
}

#[test]
fn test_embedded_store() {
    let store = TemplateStore::embedded();

    let paths: Vec<_> = store.list().map(|entry| entry.path()).collect();
    assert_eq!(
        paths,
        [
            "README.md",
            "app/layouts/base.templ.tmpl",
            "app/pages/index.templ.tmpl",
            "assets/component-loader.ts",
            "assets/components/Counter.ts",
            "assets/main.ts",
            "assets/styles.css",
            "main.go.tmpl",
            "package.json",
            "postcss.config.js",
            "tailwind.config.js",
            "vite.config.ts",
        ]
    );
    assert_eq!(
        store.read("vite.config.ts").unwrap(),
        include_bytes!("../templates/vite.config.ts")
    );
    assert!(std::ptr::eq(store, TemplateStore::embedded()));
}
