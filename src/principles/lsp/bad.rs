use crate::error::UnsupportedOperation;

/// A document that promises both reads and writes
pub trait Document {
    fn content(&self) -> &str;

    fn set_content(&mut self, content: String) -> Result<(), UnsupportedOperation>;
}

#[derive(Debug, Default, Clone)]
pub struct EditableDocument {
    content: String,
}

impl Document for EditableDocument {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) -> Result<(), UnsupportedOperation> {
        self.content = content;
        Ok(())
    }
}

/// Claims to be a `Document` yet refuses every write.
#[derive(Debug, Default, Clone)]
pub struct ReadOnlyDocument {
    content: String,
}

impl ReadOnlyDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

impl Document for ReadOnlyDocument {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, _content: String) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("set_content", "Read-only document"))
    }
}
