use super::*;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Pricing</title>
  <style>body { color: red; }</style>
  <script>var tracking = "what is";</script>
</head>
<body>
  <header><h1>Site Banner</h1></header>
  <nav><a href="/">Home</a> <a href="/blog">Blog</a></nav>
  <main>
    <h1>Choosing a CRM</h1>
    <p>Compare the <b>best</b> tools &amp; pick one.</p>
    <h2>Pricing <em>plans</em></h2>
    <p>Plans start at $10.</p>
    <h3>  </h3>
    <h2>Case study</h2>
    <!-- <h2>Hidden</h2> -->
  </main>
  <footer>Copyright</footer>
</body>
</html>"#;

#[test]
fn chrome_blocks_are_removed_from_text() {
    let content = extract_html(PAGE);
    assert!(!content.text.contains("tracking"));
    assert!(!content.text.contains("color: red"));
    assert!(!content.text.contains("Site Banner"));
    assert!(!content.text.contains("Home"));
    assert!(!content.text.contains("Copyright"));
    assert!(!content.text.contains("Hidden"));
}

#[test]
fn text_is_whitespace_collapsed_and_decoded() {
    let content = extract_html(PAGE);
    assert!(content.text.contains("Compare the best tools & pick one."));
    assert!(content.text.contains("Plans start at $10."));
    assert!(!content.text.contains("  "));
}

#[test]
fn block_tags_separate_words() {
    let content = extract_html("<p>first</p><p>second</p>");
    assert_eq!(content.text, "first second");
}

#[test]
fn headings_grouped_by_level() {
    let content = extract_html(PAGE);
    assert_eq!(
        content.headings,
        vec![
            Heading::new("h1", "Choosing a CRM"),
            Heading::new("h2", "Pricing plans"),
            Heading::new("h2", "Case study"),
        ]
    );
}

#[test]
fn heading_levels_are_not_confused_with_other_tags() {
    let content = extract_html("<header2>x</header2><h2 class=\"t\">Real</h2><hr>");
    assert_eq!(content.headings, vec![Heading::new("h2", "Real")]);
}

#[test]
fn decodes_numeric_and_named_entities() {
    assert_eq!(clean_text("Tom&#39;s &quot;tips&quot; &#x2013; 5&nbsp;ways"), "Tom's \"tips\" \u{2013} 5 ways");
    assert_eq!(clean_text("&amp;lt;"), "&lt;");
}

#[test]
fn invalid_numeric_entity_is_left_alone() {
    assert_eq!(clean_text("&#xD800;"), "&#xD800;");
}

#[test]
fn empty_document_yields_nothing() {
    let content = extract_html("");
    assert!(content.text.is_empty());
    assert!(content.headings.is_empty());
}
