// Panel rendering for the catalog window
// Address bar, filter sidebar and status line

use crate::app::CatalogApp;
use crate::message::Message;
use crate::style;
use catalog_nav::catalog::item_id;
use catalog_nav::{SortOrder, Traversal};
use eframe::egui;
use std::cell::RefCell;

impl CatalogApp {
    pub(crate) fn render_address_bar(&mut self, ui: &mut egui::Ui, messages: &RefCell<Vec<Message>>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let history = self.nav.history();
            if ui
                .add_enabled(history.can_go_back(), egui::Button::new("⬅"))
                .on_hover_text("Back")
                .clicked()
            {
                messages.borrow_mut().push(Message::Traverse(Traversal::Back));
            }
            if ui
                .add_enabled(history.can_go_forward(), egui::Button::new("➡"))
                .on_hover_text("Forward")
                .clicked()
            {
                messages.borrow_mut().push(Message::Traverse(Traversal::Forward));
            }
            if ui.button("⌂").on_hover_text("Top of page").clicked() {
                messages.borrow_mut().push(Message::NavigateHome);
            }

            let response = ui.add_sized(
                ui.available_size() - egui::vec2(260.0, 0.0),
                egui::TextEdit::singleline(&mut self.address).font(egui::TextStyle::Monospace),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                messages
                    .borrow_mut()
                    .push(Message::OpenFragment(self.address.clone()));
            }

            let mut query = self.search.query().to_string();
            let search = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search accelerators")
                    .desired_width(240.0),
            );
            if search.changed() {
                messages.borrow_mut().push(Message::SetSearch(query));
            }
        });
        ui.add_space(4.0);
    }

    pub(crate) fn render_filter_panel(&mut self, ui: &mut egui::Ui, messages: &RefCell<Vec<Message>>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Filters");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(self.filters.selected_count() > 0, egui::Button::new("Clear all"))
                    .clicked()
                {
                    messages.borrow_mut().push(Message::ClearFilters);
                }
            });
        });
        ui.separator();

        ui.label("Sort by");
        let current = self.sort.sort();
        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for order in SortOrder::ALL {
                    if ui.selectable_label(order == current, order.label()).clicked() && order != current {
                        messages.borrow_mut().push(Message::SetSort(order));
                    }
                }
            });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("filter_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let options = self.filters.options();
                for category in options.categories() {
                    let label = self.config.filter_label(category);
                    let open = !self.collapsed_categories.contains(category);
                    let header = egui::CollapsingHeader::new(label)
                        .id_salt(category)
                        .open(Some(open))
                        .show(ui, |ui| {
                            for value in options.values(category) {
                                let item = item_id(value);
                                let mut checked = self.filters.is_selected(category, &item);
                                if ui.checkbox(&mut checked, value.as_str()).changed() {
                                    messages.borrow_mut().push(Message::ToggleFilter {
                                        category: category.to_string(),
                                        item,
                                        checked,
                                    });
                                }
                            }
                            if ui.small_button("Clear").clicked() {
                                messages
                                    .borrow_mut()
                                    .push(Message::ClearFilterCategory(category.to_string()));
                            }
                        });
                    if header.header_response.clicked() {
                        if open {
                            self.collapsed_categories.insert(category.to_string());
                        } else {
                            self.collapsed_categories.remove(category);
                        }
                    }
                }
            });
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Section: {}", self.nav.current_section()));
            ui.separator();
            ui.label(if self.nav.is_pinned() { "Nav pinned" } else { "Nav in page" });
            if self.nav.is_navigating() {
                ui.separator();
                ui.colored_label(style::ACCENT, "Navigating");
            }
            if !self.nav.auto_detection_enabled() {
                ui.separator();
                ui.label("Auto-detection off");
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let history = self.nav.history();
                ui.label(format!("History {}/{}", history.index() + 1, history.len()));
            });
        });
    }
}
