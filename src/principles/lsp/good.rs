//! Read and write access split before any implementation exists.

pub trait ReadableDocument {
    fn content(&self) -> &str;
}

pub trait WritableDocument: ReadableDocument {
    fn set_content(&mut self, content: String);
}

/// Offers reads only, so a write cannot even be written down:
///
/// ```compile_fail
/// use solid_showcase::principles::lsp::good::{ReadOnlyTextDocument, WritableDocument};
///
/// let mut document = ReadOnlyTextDocument::new("Initial content");
/// document.set_content("New content".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct ReadOnlyTextDocument {
    content: String,
}

impl ReadOnlyTextDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

impl ReadableDocument for ReadOnlyTextDocument {
    fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Default, Clone)]
pub struct SimpleDocument {
    content: String,
}

impl ReadableDocument for SimpleDocument {
    fn content(&self) -> &str {
        &self.content
    }
}

impl WritableDocument for SimpleDocument {
    fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_count(document: &dyn ReadableDocument) -> usize {
        document.content().split_whitespace().count()
    }

    #[test]
    fn test_readers_accept_both_implementations() {
        let read_only = ReadOnlyTextDocument::new("Initial content");
        let mut writable = SimpleDocument::default();
        writable.set_content("one two three".to_string());

        assert_eq!(word_count(&read_only), 2);
        assert_eq!(word_count(&writable), 3);
    }

    #[test]
    fn test_writers_see_their_writes() {
        let mut document = SimpleDocument::default();
        let writer: &mut dyn WritableDocument = &mut document;

        writer.set_content("Draft".to_string());

        assert_eq!(writer.content(), "Draft");
    }
}
