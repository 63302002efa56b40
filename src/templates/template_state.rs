use super::TemplateMatcher;
use crate::backend::Template;

/// State of the template picker popup
#[derive(Debug, Default)]
pub struct TemplatePickerState {
    visible: bool,
    loaded: bool,
    templates: Vec<Template>,
    filter: String,
    /// Indices into `templates` matching `filter`, in display order
    filtered: Vec<usize>,
    /// Index into `filtered`
    selected_index: usize,
    matcher: TemplateMatcher,
}

impl TemplatePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog and mark it loaded
    pub fn set_templates(&mut self, templates: Vec<Template>) {
        self.templates = templates;
        self.loaded = true;
        self.refilter();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.filter.clear();
        self.refilter();
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter.pop().is_some() {
            self.refilter();
        }
    }

    pub fn select_next(&mut self) {
        if !self.filtered.is_empty() && self.selected_index < self.filtered.len() - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&i| self.templates.get(i))
    }

    /// Templates matching the current filter, in display order
    pub fn visible_entries(&self) -> impl Iterator<Item = &Template> {
        self.filtered.iter().filter_map(|&i| self.templates.get(i))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.templates.len()
    }

    fn refilter(&mut self) {
        let entries: Vec<String> = self.templates.iter().map(entry_label).collect();
        self.filtered = self.matcher.filter(&self.filter, &entries);
        self.selected_index = 0;
    }
}

/// Row text used for matching and display
pub fn entry_label(template: &Template) -> String {
    format!("{} / {}", template.category, template.name)
}

#[cfg(test)]
#[path = "template_state_tests.rs"]
mod template_state_tests;
