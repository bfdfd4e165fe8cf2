use pretty_assertions::assert_eq;
use wikiml_renderer::{ConfigError, Settings, WikiParser, parse};

fn render(source: &str) -> String {
    WikiParser::default().parse(source).html
}

#[test]
fn test_headers_lists_and_links() {
    let result = WikiParser::default()
        .parse("=Title=\n*[[apple]]\n*[http://a.com]\n*[http://b.com B]");

    assert_eq!(
        result.html,
        "<h1>Title</h1>\n\
         <ul>\n\
         <li><a href='http://www.wiki.com/wiki/Apple'>apple</a></li>\n\
         <li><a href='http://a.com'>[1]</a></li>\n\
         <li><a href='http://b.com'>B</a></li>\n\
         </ul>"
    );
    assert_eq!(result.unnamed_external_links, ["http://a.com"]);
}

#[test]
fn test_header_edge_cases() {
    assert_eq!(
        render("===\n==a===\n=== ="),
        "<h1>=</h1>\n<h2>a=</h2>\n<h1>== </h1>"
    );
}

#[test]
fn test_table_cells_get_links_and_emphasis() {
    let source = "{| class=\"t\"\n! Name !! Link\n|-\n| ''x'' || [[y]]\n|}";
    assert_eq!(
        render(source),
        "<table class=\"t\">\n\
         <tr>\n<th>Name</th>\n<th>Link</th>\n</tr>\n\
         <tr>\n<td><i>x</i></td>\n<td><a href='http://www.wiki.com/wiki/Y'>y</a></td>\n</tr>\n\
         </table>"
    );
}

#[test]
fn test_definition_list_with_emphasis() {
    assert_eq!(
        render(";'''Term'''\n:Definition"),
        "<dl>\n<dt><b>Term</b></dt>\n<dd>Definition</dd>\n</dl>"
    );
}

#[test]
fn test_preformatted_run_is_literal() {
    assert_eq!(
        render("Intro\n [[not a link]]\n ''raw''\nAfter ''it''"),
        "Intro\n<pre>\n[[not a link]]\n''raw''\n</pre>\nAfter <i>it</i>"
    );
}

#[test]
fn test_nowiki_links_are_not_numbered() {
    let result = WikiParser::default().parse("<nowiki>[http://x.com]</nowiki> [http://y.com]");

    assert_eq!(
        result.html,
        "<nowiki>[http://x.com]</nowiki> <a href='http://y.com'>[1]</a>"
    );
    assert_eq!(result.unnamed_external_links, ["http://y.com"]);
}

#[test]
fn test_no_placeholder_survives() {
    let html = render("*<nowiki>''a''</nowiki>\n*<pre>b</pre>\n <nowiki>c</nowiki>");

    assert!(!html.contains("PLACEHOLDER_"), "{html}");
    assert!(html.starts_with("<ul>\n<li><nowiki>''a''</nowiki></li>\n<li><pre>b</pre></li>\n</ul>"));
}

#[test]
fn test_rules_after_lists() {
    assert_eq!(render("*a\n----\nb"), "<ul>\n<li>a</li>\n</ul>\n<hr>\nb");
}

#[test]
fn test_settings_from_toml() {
    let settings = Settings::from_toml_str(
        r#"
[server]
protocol = "http"
subdomain = "en"
domain = "wikipedia"
tld = "org"
path = "wiki"

[[interwiki]]
indicators = ["s", "wikisource"]

[interwiki.server]
domain = "wikisource"
tld = "org"
"#,
    )
    .unwrap();

    let result = parse("[[s:Main Page]] and [[main Page]]", &settings).unwrap();
    assert_eq!(
        result.html,
        "<a href='http://en.wikisource.org/wiki/Main_Page'>s:Main Page</a> and \
         <a href='http://en.wikipedia.org/wiki/Main_Page'>main Page</a>"
    );
}

#[test]
fn test_inconsistent_settings_rejected() {
    let result = Settings::from_toml_str(
        r#"
[server]
domain = "wikipedia"

[[interwiki]]
subdomains = ["fr"]

[interwiki.server]
domain = "wikisource"
"#,
    );
    assert!(matches!(result, Err(ConfigError::Validation(_))));

    let settings = Settings::default().with_category_namespace("Cat:egory");
    assert!(matches!(
        parse("text", &settings),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_unmatched_markup_passes_through() {
    let source = "[[unclosed\n[nothing here]\n{|\n| no end\n''lonely";
    assert_eq!(render(source), source);
}

#[test]
fn test_parser_shared_between_threads() {
    let parser = WikiParser::default();
    let (first, second) = std::thread::scope(|scope| {
        let a = scope.spawn(|| parser.parse("[http://a.com]"));
        let b = scope.spawn(|| parser.parse("[http://b.com] [http://c.com]"));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(first.unnamed_external_links, ["http://a.com"]);
    assert_eq!(
        second.html,
        "<a href='http://b.com'>[1]</a> <a href='http://c.com'>[2]</a>"
    );
}
