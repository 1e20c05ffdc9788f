use std::fs;

use pretty_assertions::assert_eq;
use sitegen_core::{BuildReport, Config, Site};
use tempfile::TempDir;

#[test]
fn builds_a_site_from_config() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("static/images")).unwrap();
    fs::write(root.join("static/index.css"), "body {}").unwrap();
    fs::write(root.join("static/images/logo.png"), "png").unwrap();
    fs::create_dir_all(root.join("content/blog/first")).unwrap();
    fs::write(root.join("content/index.md"), "# Home\n\nWelcome.").unwrap();
    fs::write(
        root.join("content/blog/first/index.md"),
        "# First\n\n![logo](/images/logo.png)",
    )
    .unwrap();
    fs::write(root.join("content/notes.txt"), "ignored").unwrap();
    fs::write(
        root.join("template.html"),
        r#"<title>{{ Title }}</title><link href="/index.css">{{ Content }}"#,
    )
    .unwrap();

    let config_path = root.join("sitegen.toml");
    fs::write(
        &config_path,
        format!(
            "[paths]\ncontent = {:?}\nstatic_dir = {:?}\noutput = {:?}\ntemplate = {:?}\n\n[site]\nbase_path = \"/site/\"\n",
            root.join("content"),
            root.join("static"),
            root.join("public"),
            root.join("template.html"),
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let report = Site::from_config(&config).build().unwrap();

    assert_eq!(
        report,
        BuildReport {
            pages: 2,
            static_files: 2
        }
    );
    assert_eq!(
        fs::read_to_string(root.join("public/index.html")).unwrap(),
        r#"<title>Home</title><link href="/site/index.css"><div><h1>Home</h1><p>Welcome.</p></div>"#
    );
    assert_eq!(
        fs::read_to_string(root.join("public/blog/first/index.html")).unwrap(),
        r#"<title>First</title><link href="/site/index.css"><div><h1>First</h1><p><img src="/site/images/logo.png" alt="logo"></img></p></div>"#
    );
    assert!(root.join("public/images/logo.png").exists());
    assert!(!root.join("public/notes.txt").exists());
}
