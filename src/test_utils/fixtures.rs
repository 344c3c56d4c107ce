//! Sample documents for tests.

/// A document file to drop into a [`TestLibrary`](super::TestLibrary).
#[derive(Clone, Debug)]
pub struct DocumentFixture {
    /// File name, including extension
    pub file_name: String,
    pub content: String,
}

impl DocumentFixture {
    /// Any file name and content.
    pub fn raw(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Markdown recipe with YAML front matter.
    pub fn yaml(name: &str, tags: &[&str]) -> Self {
        let mut content = format!("---\ntitle: {name}\ntags:\n");
        for tag in tags {
            content.push_str(&format!("- {tag}\n"));
        }
        content.push_str(&format!("---\n\n# {name}\n\nMix everything and serve.\n"));
        Self::raw(format!("{name}.md"), content)
    }

    /// Markdown recipe with TOML front matter.
    pub fn toml(name: &str, tags: &[&str]) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| format!("\"{t}\"")).collect();
        Self::raw(
            format!("{name}.md"),
            format!(
                "+++\ntitle = \"{name}\"\ntags = [{}]\n+++\n\n# {name}\n\nBake until golden.\n",
                tags.join(", ")
            ),
        )
    }

    /// Markdown without front matter.
    pub fn plain(name: &str) -> Self {
        Self::raw(format!("{name}.md"), format!("# {name}\n\nNo metadata here.\n"))
    }

    /// YAML front matter whose `tags` is not a list.
    pub fn malformed(name: &str) -> Self {
        Self::raw(format!("{name}.md"), "---\ntags: 5\n---\n\n# Broken\n")
    }
}
