use super::{DocumentError, Element};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse document text into its root element
pub fn parse_document(text: &str) -> Result<Element, DocumentError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| DocumentError::Syntax {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => open.push(element_from(&start, reader.buffer_position())?),
            Event::Empty(start) => {
                let element = element_from(&start, reader.buffer_position())?;
                attach(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                let element = open.pop().ok_or(DocumentError::UnbalancedEnd)?;
                attach(&mut open, &mut root, element)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(DocumentError::UnclosedElement {
            name: unclosed.name,
        });
    }

    root.ok_or(DocumentError::MissingRoot)
}

fn element_from(start: &BytesStart<'_>, position: usize) -> Result<Element, DocumentError> {
    let syntax = |message: String| DocumentError::Syntax { position, message };

    let mut element = Element::new(&String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| syntax(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| syntax(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DocumentError> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DocumentError::MultipleRoots),
    }
}
