use super::{DocumentError, Element};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Render `root` as an indented UTF-8 document with an XML declaration
pub fn render_document(root: &Element) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(render_error)?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(render_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(render_error);
    }

    writer.write_event(Event::Start(start)).map_err(render_error)?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(render_error)
}

fn render_error(error: impl std::fmt::Display) -> DocumentError {
    DocumentError::Render {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn test_render_declaration_and_nesting() {
        let root = Element::new("session")
            .with_child(Element::new("practice"))
            .with_child(
                Element::new("trials").with_child(Element::new("trial").with_attribute("Delay", "3")),
            );

        let text = render_document(&root).unwrap();
        assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(text.contains("<practice/>"));
        assert!(text.contains(r#"<trial Delay="3"/>"#));
        assert!(text.contains("</trials>"));
    }

    #[test]
    fn test_rendered_text_reads_back() {
        let root = Element::new("session").with_child(
            Element::new("trial")
                .with_attribute("EndCondition", "time <out> & \"quit\"")
                .with_attribute("TouchPosition", "(1.0, 2.0)"),
        );

        let text = render_document(&root).unwrap();
        assert_eq!(parse_document(&text).unwrap(), root);
    }
}
