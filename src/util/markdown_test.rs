use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown_html("# Title\n\nSome *emphasis* here.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>emphasis</em>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
}

#[test]
fn drops_html_blocks() {
    let html = render_markdown_html("<div onclick=\"x()\">\nhi\n</div>\n\ntext");
    assert!(!html.contains("onclick"));
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn empty_body_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

// =============================================================
// Link and image destinations
// =============================================================

#[test]
fn drops_javascript_links() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"), "{html}");
    assert!(html.contains(r##"<a href="#">click</a>"##), "{html}");
}

#[test]
fn drops_obfuscated_schemes() {
    for source in [
        "[x](JaVaScRiPt:alert(1))",
        "[x](java&#09;script:alert(1))",
        "[x](javascript&#58;alert(1))",
        "<javascript:alert(1)>",
        "[x](data:text/html;base64,PHNjcmlwdD4=)",
        "[x][ref]\n\n[ref]: vbscript:msgbox(1)",
    ] {
        let html = render_markdown_html(source);
        assert!(html.contains(r##"href="#""##), "{source} rendered {html}");
    }
}

#[test]
fn drops_javascript_image_sources() {
    let html = render_markdown_html("![pic](javascript:alert(1))");
    assert!(html.contains(r##"src="#""##), "{html}");
}

#[test]
fn keeps_web_mail_and_relative_links() {
    let html = render_markdown_html(
        "[a](https://example.com/x) [b](http://example.com) [c](mailto:a@b.com) [d](/article/1) [e](#top) [f](notes/a:b)",
    );
    assert!(html.contains(r#"href="https://example.com/x""#));
    assert!(html.contains(r#"href="http://example.com""#));
    assert!(html.contains(r#"href="mailto:a@b.com""#));
    assert!(html.contains(r#"href="/article/1""#));
    assert!(html.contains(r##"href="#top""##));
    assert!(html.contains(r#"href="notes/a:b""#));
}

#[test]
fn keeps_https_images() {
    let html = render_markdown_html("![pic](https://example.com/a.png)");
    assert!(html.contains(r#"src="https://example.com/a.png""#));
}
