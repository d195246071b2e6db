use crate::model::{MenuItem, MenuListModel};

/// Fixed height of every panel row.
pub const PANEL_ROW_HEIGHT: f32 = 60.0;
/// Title shown above the rows.
pub const PANEL_TITLE: &str = "Main Menu";

/// Elevated treatment drawn behind the panel's container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelShadow {
    pub opacity: f32,
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl PanelShadow {
    pub const ELEVATED: Self = Self {
        opacity: 0.5,
        radius: 2.0,
        offset_x: 2.0,
        offset_y: 0.0,
    };
}

/// One rendered row of the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub title: String,
    pub highlighted: bool,
}

/// Row choice reported back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSelection {
    pub index: usize,
    pub item: MenuItem,
}

/// Selectable list bound to a snapshot of the menu model.
///
/// The panel owns nothing but transient highlighting; the persistent
/// selection lives in the host and is read at presentation time.
#[derive(Debug, Clone, Default)]
pub struct MenuPanel {
    items: Vec<MenuItem>,
    rows: Vec<PanelRow>,
    shadow: Option<PanelShadow>,
}

impl MenuPanel {
    /// Build the rows for `model`, restoring the host's last choice.
    pub fn present(
        model: &MenuListModel,
        selected_index: Option<usize>,
    ) -> Self {
        let items = model.items().to_vec();
        let rows = items
            .iter()
            .map(|item| PanelRow {
                title: item.title().to_string(),
                highlighted: false,
            })
            .collect();

        let mut panel = Self {
            items,
            rows,
            shadow: None,
        };
        panel.restore_highlight(selected_index);
        panel
    }

    /// Drop any transient highlight and show the host's selection again.
    pub fn restore_highlight(&mut self, selected_index: Option<usize>) {
        for row in &mut self.rows {
            row.highlighted = false;
        }
        for index in 0..self.rows.len() {
            self.will_show_row(index, selected_index);
        }
    }

    /// Mark the row highlighted when it is the host's selected index.
    pub fn will_show_row(
        &mut self,
        index: usize,
        selected_index: Option<usize>,
    ) -> bool {
        let selected = selected_index == Some(index);
        if selected {
            if let Some(row) = self.rows.get_mut(index) {
                row.highlighted = true;
            }
        }
        selected
    }

    /// Move the highlight to `index` and report the choice upward.
    pub fn row_tapped(&mut self, index: usize) -> Option<PanelSelection> {
        let item = self.items.get(index)?.clone();
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            row.highlighted = row_index == index;
        }
        Some(PanelSelection { index, item })
    }

    pub fn apply_shadow(&mut self) {
        self.shadow = Some(PanelShadow::ELEVATED);
    }

    pub fn remove_shadow(&mut self) {
        self.shadow = None;
    }

    pub fn shadow(&self) -> Option<PanelShadow> {
        self.shadow
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn title(&self) -> &'static str {
        PANEL_TITLE
    }

    pub fn row_height(&self) -> f32 {
        PANEL_ROW_HEIGHT
    }

    pub fn content_height(&self) -> f32 {
        self.rows.len() as f32 * PANEL_ROW_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> MenuListModel {
        let mut model = MenuListModel::new();
        model.add_items([
            MenuItem::new("home", "Main", "Home"),
            MenuItem::new("inbox", "Main", "Inbox"),
            MenuItem::new("settings", "Prefs", "Settings"),
        ]);
        model
    }

    fn highlighted(panel: &MenuPanel) -> Vec<usize> {
        panel
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.highlighted)
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn given_model_when_presented_then_rows_show_titles_in_order() {
        let panel = MenuPanel::present(&model(), None);
        let titles: Vec<&str> =
            panel.rows().iter().map(|row| row.title.as_str()).collect();

        assert_eq!(titles, vec!["Home", "Inbox", "Settings"]);
        assert_eq!(panel.row_height(), 60.0);
        assert_eq!(panel.content_height(), 180.0);
        assert!(highlighted(&panel).is_empty());
    }

    #[test]
    fn given_selected_index_when_presented_then_that_row_is_highlighted() {
        let panel = MenuPanel::present(&model(), Some(2));
        assert_eq!(highlighted(&panel), vec![2]);
    }

    #[test]
    fn given_out_of_range_selection_when_presented_then_nothing_is_highlighted()
    {
        let panel = MenuPanel::present(&model(), Some(9));
        assert!(highlighted(&panel).is_empty());
    }

    #[test]
    fn given_row_tap_when_handled_then_selection_is_reported_and_highlight_moves()
     {
        let mut panel = MenuPanel::present(&model(), Some(0));

        let selection = panel.row_tapped(1).expect("row exists");

        assert_eq!(selection.index, 1);
        assert_eq!(selection.item.destination_id(), "inbox");
        assert_eq!(highlighted(&panel), vec![1]);
    }

    #[test]
    fn given_tapped_row_when_highlight_restored_then_host_selection_shows_again()
    {
        let mut panel = MenuPanel::present(&model(), Some(0));
        let _selection = panel.row_tapped(2);

        panel.restore_highlight(Some(0));

        assert_eq!(highlighted(&panel), vec![0]);
    }

    #[test]
    fn given_empty_model_when_presented_then_panel_has_zero_rows() {
        let mut panel = MenuPanel::present(&MenuListModel::new(), Some(0));

        assert!(panel.rows().is_empty());
        assert!(panel.row_tapped(0).is_none());
    }

    #[test]
    fn given_panel_when_shadow_toggled_then_elevation_follows() {
        let mut panel = MenuPanel::present(&model(), None);
        assert!(panel.shadow().is_none());

        panel.apply_shadow();
        assert_eq!(panel.shadow(), Some(PanelShadow::ELEVATED));

        panel.remove_shadow();
        assert!(panel.shadow().is_none());
    }
}
