//! Tabbed pages holding headers and forms

use crate::form::Form;

/// One entry of a tab
#[derive(Debug)]
pub enum TabItem<F = Form> {
	Header { title: String, size: Option<u8> },
	Form(F),
}

#[derive(Debug)]
pub struct Tab<F = Form> {
	pub title: String,
	pub items: Vec<TabItem<F>>,
}

impl<F> Tab<F> {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			items: vec![],
		}
	}

	pub fn header(&mut self, title: impl Into<String>) -> &mut Self {
		self.items.push(TabItem::Header {
			title: title.into(),
			size: None,
		});
		self
	}

	pub fn sized_header(&mut self, title: impl Into<String>, size: u8) -> &mut Self {
		self.items.push(TabItem::Header {
			title: title.into(),
			size: Some(size),
		});
		self
	}

	pub fn form(&mut self, form: F) -> &mut Self {
		self.items.push(TabItem::Form(form));
		self
	}

	pub fn forms(&self) -> impl Iterator<Item = &F> {
		self.items.iter().filter_map(|item| match item {
			TabItem::Form(f) => Some(f),
			TabItem::Header { .. } => None,
		})
	}

	pub fn forms_mut(&mut self) -> impl Iterator<Item = &mut F> {
		self.items.iter_mut().filter_map(|item| match item {
			TabItem::Form(f) => Some(f),
			TabItem::Header { .. } => None,
		})
	}
}

/// Ordered set of tabs
///
/// # Examples
///
/// ```
/// use formward_forms::{Form, Tabs};
///
/// let mut tabs: Tabs = Tabs::new();
/// tabs.add_tab("Basic Use")
///     .header("Very simple form")
///     .form(Form::new("subscribe"));
///
/// assert_eq!(tabs.titles().collect::<Vec<_>>(), vec!["Basic Use"]);
/// assert_eq!(tabs.tab("Basic Use").unwrap().forms().count(), 1);
/// ```
#[derive(Debug)]
pub struct Tabs<F = Form> {
	tabs: Vec<Tab<F>>,
}

impl<F> Tabs<F> {
	pub fn new() -> Self {
		Self { tabs: vec![] }
	}

	/// Append a tab and return it for filling in
	pub fn add_tab(&mut self, title: impl Into<String>) -> &mut Tab<F> {
		self.tabs.push(Tab::new(title));
		let last = self.tabs.len() - 1;
		&mut self.tabs[last]
	}

	pub fn tab(&self, title: &str) -> Option<&Tab<F>> {
		self.tabs.iter().find(|t| t.title == title)
	}

	pub fn titles(&self) -> impl Iterator<Item = &str> {
		self.tabs.iter().map(|t| t.title.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = &Tab<F>> {
		self.tabs.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab<F>> {
		self.tabs.iter_mut()
	}

	pub fn len(&self) -> usize {
		self.tabs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tabs.is_empty()
	}
}

impl<F> Default for Tabs<F> {
	fn default() -> Self {
		Self::new()
	}
}
