use serde::{Deserialize, Serialize};

/// Navigable destination shown as one row of the menu.
///
/// The item only names the destination; resolving it into a screen is the
/// job of a [`ScreenFactory`](crate::ScreenFactory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    destination_id: String,
    container_id: String,
    title: String,
}

impl MenuItem {
    pub fn new(
        destination_id: impl Into<String>,
        container_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            destination_id: destination_id.into(),
            container_id: container_id.into(),
            title: title.into(),
        }
    }

    /// Identifier of the screen inside its container.
    pub fn destination_id(&self) -> &str {
        &self.destination_id
    }

    /// Identifier of the container that can instantiate the screen.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Row title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered, append-only list of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuListModel {
    items: Vec<MenuItem>,
}

impl MenuListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single item after the existing ones.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Append items in iteration order.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = MenuItem>) {
        self.items.extend(items);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a MenuListModel {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
