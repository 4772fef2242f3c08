//! Formats that replay the source text

use super::markers::{HtmlMarker, TagMarker};
use super::markup::markup;
use super::registry::{FormatError, Formatter};
use crate::widl::ast::Document;
use crate::widl::config::MarkupConfig;

/// The exact reconstruction
pub struct SourceFormatter;

impl Formatter for SourceFormatter {
    fn name(&self) -> &str {
        "source"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let text = doc.reconstruct();
        if text != doc.source() {
            return Err(FormatError::SerializationError(format!(
                "reconstruction differs from the {} byte source",
                doc.source().len()
            )));
        }
        Ok(text)
    }

    fn description(&self) -> &str {
        "Reconstructed source text"
    }
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(markup(doc, &mut TagMarker))
    }

    fn description(&self) -> &str {
        "Source with debugging tags around every recognized span"
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    config: MarkupConfig,
}

impl HtmlFormatter {
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut marker = HtmlMarker::new(self.config.clone());
        Ok(markup(doc, &mut marker))
    }

    fn description(&self) -> &str {
        "Escaped source with classed elements for highlighting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::parser::parse;

    #[test]
    fn test_source_format_is_the_input() {
        let source = "interface A { attribute long b; };  // trailing\n";
        let doc = parse(source);
        assert_eq!(SourceFormatter.serialize(&doc), Ok(source.to_string()));
    }

    #[test]
    fn test_html_format() {
        let doc = parse("typedef Foo<T;");
        let config = MarkupConfig {
            class_prefix: "w-".to_string(),
            ..MarkupConfig::default()
        };
        let html = HtmlFormatter::new(config)
            .serialize(&doc)
            .expect("html to render");
        assert!(html.contains("&lt;"));
        assert!(!html.contains("Foo<T"));

        let doc = parse("enum E { \"a\" };");
        let html = HtmlFormatter::default().serialize(&doc).expect("html to render");
        insta::assert_snapshot!(html, @r#"<span class="idl-construct" data-idl-type="enum" data-idl-name="E"><span class="idl-keyword" data-idl-type="enum" data-idl-name="E">enum</span> <span class="idl-name" data-idl-type="enum" data-idl-name="E">E</span> { <span class="idl-enum-value" data-idl-type="enum" data-idl-name="E">&quot;a&quot;</span> };</span>"#);
    }

    #[test]
    fn test_unescaped_html() {
        let doc = parse("typedef Foo<T;");
        let config = MarkupConfig {
            escape: false,
            ..MarkupConfig::default()
        };
        let html = HtmlFormatter::new(config).serialize(&doc).expect("html to render");
        assert!(html.contains("Foo<T"));
    }
}
