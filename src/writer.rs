use quick_xml::escape::escape;

use crate::element::{Element, Node};

/// Options for customizing the XML output of the serialization functions.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    indent_char: u8,
    indent_count: usize,
    declaration: bool,
    newline_on_attributes: bool,
}

pub(crate) static DEFAULT_OPTIONS: WriteOptions = WriteOptions::new();

impl WriteOptions {
    /// Constructs the default `WriteOptions`: two-space indentation, each
    /// attribute on its own line, no XML declaration.
    pub const fn new() -> WriteOptions {
        WriteOptions {
            indent_char: b' ',
            indent_count: 2,
            declaration: false,
            newline_on_attributes: true,
        }
    }

    /// Constructs `WriteOptions` producing a single line with no extra
    /// whitespace.
    pub const fn compact() -> WriteOptions {
        WriteOptions {
            indent_char: b' ',
            indent_count: 0,
            declaration: false,
            newline_on_attributes: false,
        }
    }

    /// Specify the character and the amount of it used to indent nested
    /// elements. A count of zero disables all line breaking.
    pub fn indent(mut self, indent_char: u8, indent_count: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_count = indent_count;
        self
    }

    /// Selects whether to write an XML declaration at the start of the
    /// document.
    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Selects whether each attribute is written on its own line, indented
    /// one level past its element. Has no effect when indentation is
    /// disabled.
    pub fn newline_on_attributes(mut self, newline_on_attributes: bool) -> Self {
        self.newline_on_attributes = newline_on_attributes;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions::new()
    }
}

pub(crate) fn write_document(element: &Element, options: &WriteOptions) -> String {
    let mut out = String::new();
    if options.declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        if options.indent_count > 0 {
            out.push('\n');
        }
    }
    write_element(&mut out, element, options, 0, false);
    out
}

fn write_element(
    out: &mut String,
    element: &Element,
    options: &WriteOptions,
    depth: usize,
    inline: bool,
) {
    // An element inside mixed content stays on the text's line, whatever the
    // indentation settings say.
    let indenting = options.indent_count > 0 && !inline;

    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        if indenting && options.newline_on_attributes {
            out.push('\n');
            push_indent(out, options, depth + 1);
        } else {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    let mixed = element
        .children()
        .iter()
        .any(|node| matches!(node, Node::Text(_)));
    if mixed || !indenting {
        for node in element.children() {
            match node {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(child) => write_element(out, child, options, depth, true),
            }
        }
    } else {
        for node in element.children() {
            if let Node::Element(child) = node {
                out.push('\n');
                push_indent(out, options, depth + 1);
                write_element(out, child, options, depth + 1, false);
            }
        }
        out.push('\n');
        push_indent(out, options, depth);
    }

    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

fn push_indent(out: &mut String, options: &WriteOptions, depth: usize) {
    for _ in 0..depth * options.indent_count {
        out.push(char::from(options.indent_char));
    }
}
