#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use proptest::prelude::*;
use zxml::{
    parser::{Document, Element, Node, Tokenizer, XmlParser},
    utils::{format_xml, parse_xml},
};

fn root_element(document: &Document) -> &Element {
    match document.root() {
        Some(Node::Element(element)) => element,
        other => panic!("expected element root, got {:?}", other),
    }
}

// Strategy for element and attribute names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

// Strategy for attribute values within the accepted character set
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.%:-]{1,12}"
}

// Strategy for text content
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,20}"
}

proptest! {
    #[test]
    fn roundtrip_stabilizes(
        name in name_strategy(),
        attr in name_strategy(),
        value in value_strategy(),
        text in text_strategy(),
    ) {
        let input = format!(
            "<{} {}=\"{}\"><inner>{}</inner></{}>",
            name, attr, value, text, name
        );

        let document = parse_xml(&input).unwrap();
        let rendered = format_xml(&document).unwrap();

        let reparsed = parse_xml(&rendered).unwrap();
        let rerendered = format_xml(&reparsed).unwrap();

        prop_assert_eq!(&document, &reparsed);
        prop_assert_eq!(rendered, rerendered);
    }

    #[test]
    fn attribute_values_are_preserved(
        attr in name_strategy(),
        value in value_strategy(),
    ) {
        let input = format!("<root {}=\"{}\"/>", attr, value);
        let document = parse_xml(&input).unwrap();

        prop_assert_eq!(
            root_element(&document).attribute(&attr),
            Some(value.as_str())
        );
    }

    #[test]
    fn text_content_is_preserved(
        name in name_strategy(),
        text in text_strategy(),
    ) {
        let input = format!("<{}>{}</{}>", name, text, name);
        let document = parse_xml(&input).unwrap();

        let children = root_element(&document).children();
        prop_assert_eq!(children.len(), 1);
        prop_assert_eq!(children[0].as_text(), Some(text.as_str()));
    }

    #[test]
    fn balanced_input_tokenizes_to_expected_count(depth in 1usize..20) {
        let input = format!("{}hi{}", "<x>".repeat(depth), "</x>".repeat(depth));
        let tokenizer = Tokenizer::new(&input);

        // One opening and one closing tag per level plus the text leaf.
        prop_assert_eq!(tokenizer.len(), 2 * depth + 1);
    }

    #[test]
    fn balanced_input_is_fully_consumed(depth in 1usize..20) {
        let input = format!("{}hi{}", "<x>".repeat(depth), "</x>".repeat(depth));
        let mut parser = XmlParser::new(&input);
        parser.parse().unwrap();

        prop_assert_eq!(parser.tokens_remaining(), 0);
    }

    #[test]
    fn rendered_output_never_loses_elements(count in 1usize..10) {
        let items: String = (0..count)
            .map(|i| format!("<item id=\"{}\">v{}</item>", i, i))
            .collect();
        let input = format!("<list>{}</list>", items);

        let document = parse_xml(&input).unwrap();
        prop_assert_eq!(root_element(&document).children().len(), count);

        let rendered = format_xml(&document).unwrap();
        let reparsed = parse_xml(&rendered).unwrap();
        prop_assert_eq!(root_element(&reparsed).children().len(), count);
    }
}
