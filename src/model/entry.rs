/// One `#define XC_<name> <value>` line recognized in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: u32,
    pub comment: Option<String>,
    /// 1-based line in the header the entry came from.
    pub line: usize,
}

impl Entry {
    pub fn new<N: Into<String>>(name: N, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
            comment: None,
            line: 0,
        }
    }

    pub fn with_comment<C: Into<String>>(mut self, comment: C) -> Self {
        let comment = comment.into();
        self.comment = (!comment.is_empty()).then_some(comment);
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn info(&self) -> String {
        match &self.comment {
            Some(comment) => format!("{} = {} ({})", self.name, self.value, comment),
            None => format!("{} = {}", self.name, self.value),
        }
    }
}
