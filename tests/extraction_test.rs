use densitext::sanitize::sanitize;
use densitext::{parse, parse_bytes_with_options, parse_with_options, Options};

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Forest Management in the Alps</title>
<style>
body { margin: 0; font-family: serif; }
</style>
<script>
window.tracker = { enabled: true };
</script>
</head>
<body>
<nav><a href="/">Home</a> <a href="/news">News</a> <a href="/contact">Contact</a></nav>
<article>
<p>Alpine forests have been managed by village cooperatives for centuries, balancing timber yield against the protective function of the tree cover above settlements.</p>
<p>Records from the eighteenth century show rotation schedules that modern foresters would recognize, with harvest quotas adjusted after avalanche winters.</p>
<p>Today the same valleys combine satellite surveys with the old ledgers, and the continuity of the data is unmatched anywhere else in Europe.</p>
<p>Researchers argue that this archive offers a rare controlled view of how mountain forests respond to management across climatic swings.</p>
</article>
<footer>Copyright 2024 Example Press</footer>
</body>
</html>
"#;

#[test]
fn parse_selects_dense_article_region() {
    let body = parse(ARTICLE_HTML).expect("article should extract");
    // Default output is whitespace-stripped, so match stripped fragments.
    assert!(body.contains("Alpineforests"));
    assert!(body.contains("controlledview"));
    // Boilerplate outside the dense region is dropped.
    assert!(!body.contains("Copyright"));
    assert!(!body.contains("tracker"));
    assert!(!body.contains("margin"));
}

#[test]
fn parse_output_ends_with_line_terminator() {
    let body = parse(ARTICLE_HTML).expect("article should extract");
    assert!(body.ends_with('\n'));
}

#[test]
fn parse_is_deterministic() {
    let first = parse(ARTICLE_HTML).expect("article should extract");
    let second = parse(ARTICLE_HTML).expect("article should extract");
    assert_eq!(first, second);
}

#[test]
fn parse_with_preserve_whitespace_keeps_readable_lines() {
    let options = Options {
        preserve_whitespace: true,
        ..Options::default()
    };
    let body = parse_with_options(ARTICLE_HTML, &options).expect("article should extract");
    assert!(body.contains("Alpine forests have been managed by village cooperatives"));
}

#[test]
fn sanitize_removes_comment_script_and_entities() {
    let html = "<html><!-- c --><script>var x=1;</script><p>Hello&nbsp;World</p></html>";
    assert_eq!(sanitize(html), "Hello World");
}

#[test]
fn parse_bytes_detects_declared_charset() {
    let mut html: Vec<u8> = b"<meta charset=\"ISO-8859-1\">\n".to_vec();
    for _ in 0..4 {
        html.extend_from_slice(b"Der Gr\xFCnbestand wurde \xFCber Jahrhunderte gepflegt und vermessen.\n");
    }
    let options = Options {
        threshold: 10,
        ..Options::default()
    };
    let body = parse_bytes_with_options(&html, &options).expect("bytes should extract");
    assert!(body.contains("Gr\u{fc}nbestand"));
}
