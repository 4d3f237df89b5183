use std::collections::BTreeMap;
use std::fmt::Write as _;

/// In-memory stand-in for the DOM subtree the provider mutates. The embedding
/// application owns the hero section element; the renderer adapter mutates it
/// through a shared handle.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.add_class(class_name);
        self
    }

    pub fn add_class(&mut self, class_name: &str) {
        if !self.has_class(class_name) {
            self.classes.push(class_name.to_string());
        }
    }

    pub fn remove_class(&mut self, class_name: &str) {
        self.classes.retain(|existing| existing != class_name);
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|existing| existing == class_name)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    pub fn clear_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn remove_children_with_class(&mut self, class_name: &str) {
        self.children.retain(|child| !child.has_class(class_name));
    }

    pub fn find_child_by_class(&self, class_name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.has_class(class_name))
    }

    pub fn find_child_by_class_mut(&mut self, class_name: &str) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .find(|child| child.has_class(class_name))
    }

    pub fn count_children_with_class(&self, class_name: &str) -> usize {
        self.children
            .iter()
            .filter(|child| child.has_class(class_name))
            .count()
    }

    /// Serialize the subtree as indented HTML, for diagnostics.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.write_html(&mut output, 0);
        output
    }

    fn write_html(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(output, "{}<{}", indent, self.tag);

        if !self.classes.is_empty() {
            let _ = write!(output, " class=\"{}\"", self.classes.join(" "));
        }

        for (name, value) in &self.attributes {
            let _ = write!(output, " {}=\"{}\"", name, value);
        }

        if !self.styles.is_empty() {
            let rendered_styles: Vec<String> = self
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect();
            let _ = write!(output, " style=\"{}\"", rendered_styles.join("; "));
        }

        if self.children.is_empty() {
            let _ = writeln!(output, "></{}>", self.tag);
            return;
        }

        let _ = writeln!(output, ">");
        for child in &self.children {
            child.write_html(output, depth + 1);
        }
        let _ = writeln!(output, "{}</{}>", indent, self.tag);
    }
}
