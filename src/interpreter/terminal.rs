// Output capture for the interpreter

/// Collects the text a program prints, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terminal {
    fragments: Vec<String>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            fragments: Vec::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: String) {
        self.fragments.push(text);
    }

    /// Print followed by a line break
    pub fn println(&mut self, mut text: String) {
        text.push('\n');
        self.print(text);
    }

    /// Everything printed so far, concatenated
    pub fn contents(&self) -> String {
        self.fragments.concat()
    }

    /// Get all lines as a vector of strings
    pub fn lines(&self) -> Vec<String> {
        let contents = self.contents();
        let mut result: Vec<String> = contents.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}
