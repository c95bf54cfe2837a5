//! Flat multipart payload model
//!
//! The payload is platform-neutral: `F` is whatever the caller uses to
//! carry file contents (`web_sys::File` in the browser, `Vec<u8>` on the
//! server and in tests).

/// A file attached to a form part
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment<F> {
    pub file_name: String,
    pub content_type: Option<String>,
    pub file: F,
}

impl<F> Attachment<F> {
    pub fn new(file_name: impl Into<String>, file: F) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            file,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(Attachment<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart<F> {
    pub name: String,
    pub value: PartValue<F>,
}

/// Ordered list of form parts. Names may repeat, lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPayload<F> {
    parts: Vec<FormPart<F>>,
}

impl<F> Default for FormPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> FormPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    pub fn file(&mut self, name: &str, attachment: Attachment<F>) -> &mut Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            value: PartValue::File(attachment),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart<F>> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// Value of the first text part with this name
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// First file part with this name
    pub fn get_file(&self, name: &str) -> Option<&Attachment<F>> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::File(a) if p.name == name => Some(a),
            _ => None,
        })
    }

    /// Text parts only, in order, as `(name, value)` pairs
    pub fn text_parts(&self) -> Vec<(&str, &str)> {
        self.parts
            .iter()
            .filter_map(|p| match &p.value {
                PartValue::Text(v) => Some((p.name.as_str(), v.as_str())),
                PartValue::File(_) => None,
            })
            .collect()
    }
}

impl<F> FromIterator<FormPart<F>> for FormPayload<F> {
    fn from_iter<I: IntoIterator<Item = FormPart<F>>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_find_first_part_of_kind() {
        let mut payload: FormPayload<Vec<u8>> = FormPayload::new();
        payload
            .text("title", "Lamp")
            .file("mainImage", Attachment::new("lamp.png", vec![1, 2, 3]))
            .text("title", "ignored");

        assert_eq!(payload.get_text("title"), Some("Lamp"));
        assert_eq!(payload.get_text("mainImage"), None);
        assert_eq!(payload.get_file("mainImage").map(|a| a.file_name.as_str()), Some("lamp.png"));
        assert!(payload.get_file("title").is_none());
        assert_eq!(payload.text_parts(), vec![("title", "Lamp"), ("title", "ignored")]);
        assert_eq!(payload.len(), 3);
    }
}
