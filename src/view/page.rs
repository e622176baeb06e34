// Page rendering - hero, nav tabs and catalog sections
//
// Rects measured while drawing a frame feed the controller (sentinel
// position, anchor visibility) and resolve the scroll requests it queued.

use crate::app::CatalogApp;
use crate::message::Message;
use crate::sample_catalog;
use crate::style;
use catalog_nav::catalog::{visible_items, CatalogItem};
use catalog_nav::layout;
use catalog_nav::{ScrollBehavior, ScrollRequest, ScrollSample, SectionId};
use eframe::egui;
use std::cell::RefCell;
use std::time::Instant;

#[derive(Default)]
struct PageRects {
    top: Option<egui::Rect>,
    sentinel: Option<egui::Rect>,
    anchors: Vec<(String, egui::Rect)>,
}

impl PageRects {
    fn anchor(&self, anchor_id: &str) -> Option<egui::Rect> {
        self.anchors
            .iter()
            .find(|(id, _)| id == anchor_id)
            .map(|(_, rect)| *rect)
    }
}

impl CatalogApp {
    pub(crate) fn render_page(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        now: Instant,
        messages: &RefCell<Vec<Message>>,
    ) {
        let mut rects = PageRects::default();

        let output = egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let (top, _) =
                    ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
                rects.top = Some(top);

                self.render_hero(ui, messages);

                let (sentinel, _) =
                    ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
                rects.sentinel = Some(sentinel);
                self.render_nav_tabs(ui, messages);
                ui.separator();

                let anchors: Vec<(SectionId, String)> = self
                    .nav
                    .registry()
                    .iter()
                    .map(|d| (d.id.clone(), d.anchor_id.clone()))
                    .collect();
                for (section, anchor_id) in anchors {
                    let rect = ui
                        .vertical(|ui| {
                            ui.set_min_height(layout::SECTION_MIN_HEIGHT);
                            self.render_section(ui, &section, messages);
                        })
                        .response
                        .rect;
                    rects.anchors.push((anchor_id, rect));
                }

                self.apply_scroll_requests(ui, &rects);
            });

        let viewport = output.inner_rect;
        self.nav
            .on_scroll(rects.sentinel.map(|rect| rect.top() - viewport.top()));
        let samples: Vec<ScrollSample> = rects
            .anchors
            .iter()
            .map(|(anchor_id, rect)| measure(anchor_id, *rect, viewport))
            .collect();
        self.nav.on_visibility(samples, viewport.height(), now);

        if self.nav.is_pinned() {
            egui::Area::new(egui::Id::new("pinned_nav"))
                .fixed_pos(viewport.min)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::new()
                        .fill(ui.visuals().panel_fill)
                        .inner_margin(egui::Margin::symmetric(8, 4))
                        .show(ui, |ui| {
                            ui.set_width(viewport.width() - 16.0);
                            self.render_nav_tabs(ui, messages);
                        });
                });
        }
    }

    fn apply_scroll_requests(&mut self, ui: &egui::Ui, rects: &PageRects) {
        while let Some(request) = self.pending_scroll.pop_front() {
            let (target, behavior) = match &request {
                ScrollRequest::NavSentinel(behavior) => (rects.sentinel, *behavior),
                ScrollRequest::Anchor { anchor_id, behavior } => (
                    rects
                        .anchor(anchor_id)
                        .map(|rect| rect.translate(egui::vec2(0.0, -self.config.sticky.scroll_offset))),
                    *behavior,
                ),
                ScrollRequest::PageTop(behavior) => (rects.top, *behavior),
            };
            let Some(target) = target else {
                log::debug!("Scroll target missing for {request:?}");
                continue;
            };
            match behavior {
                ScrollBehavior::Smooth => ui.scroll_to_rect(target, Some(egui::Align::TOP)),
                ScrollBehavior::Instant => ui.scroll_to_rect_animation(
                    target,
                    Some(egui::Align::TOP),
                    egui::style::ScrollAnimation::none(),
                ),
            }
        }
    }

    fn render_hero(&self, ui: &mut egui::Ui, messages: &RefCell<Vec<Message>>) {
        let size = egui::vec2(ui.available_width(), layout::HERO_HEIGHT);
        ui.allocate_ui_with_layout(size, egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.set_min_size(size);
            ui.add_space(layout::HERO_HEIGHT / 3.0);
            ui.heading(egui::RichText::new("AI Accelerators").size(36.0).strong());
            ui.label("Deployable solution templates for common AI scenarios.");
            ui.add_space(16.0);
            let browse = SectionId::new("accelerators");
            if self.nav.registry().contains(&browse) && ui.button("Browse accelerators").clicked() {
                messages.borrow_mut().push(Message::NavigateTo(browse));
            }
        });
    }

    fn render_nav_tabs(&self, ui: &mut egui::Ui, messages: &RefCell<Vec<Message>>) {
        let active = self.nav.current_section().section();
        ui.horizontal(|ui| {
            ui.set_min_height(layout::NAV_HEIGHT);
            for section in &self.config.sections {
                let id = SectionId::new(section.id.as_str());
                if !self.nav.registry().contains(&id) {
                    continue;
                }
                let is_active = active == Some(&id);
                if ui
                    .selectable_label(is_active, style::tab_text(section.label(), is_active))
                    .clicked()
                {
                    messages.borrow_mut().push(Message::NavigateTo(id));
                }
                ui.add_space(style::TAB_SPACING);
            }
        });
    }

    fn render_section(&self, ui: &mut egui::Ui, section: &SectionId, messages: &RefCell<Vec<Message>>) {
        let label = self
            .config
            .sections
            .iter()
            .find(|s| s.id == section.as_str())
            .map_or(section.as_str(), |s| s.label());
        style::section_heading(ui, label);

        match section.as_str() {
            "featured" => {
                let mut newest: Vec<&CatalogItem> = self.items.iter().collect();
                newest.sort_by(|a, b| b.release_date.cmp(&a.release_date));
                ui.columns(3, |columns| {
                    for (column, item) in columns.iter_mut().zip(newest) {
                        render_card(column, item);
                    }
                });
            }
            "accelerators" => self.render_catalog(ui, messages),
            "differentiators" => {
                for (title, text) in sample_catalog::DIFFERENTIATORS {
                    style::card_frame(ui).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(*title).strong());
                        ui.label(*text);
                    });
                    ui.add_space(style::CARD_SPACING);
                }
            }
            "how-it-works" => {
                for (i, step) in sample_catalog::STEPS.iter().enumerate() {
                    ui.label(format!("{}. {step}", i + 1));
                    ui.add_space(style::CARD_SPACING);
                }
            }
            "success-stories" => {
                for (quote, author) in sample_catalog::QUOTES {
                    ui.label(egui::RichText::new(format!("\u{201c}{quote}\u{201d}")).italics());
                    ui.weak(*author);
                    ui.add_space(style::CARD_SPACING);
                }
            }
            _ => {
                ui.weak("Nothing here yet.");
            }
        }
    }

    fn render_catalog(&self, ui: &mut egui::Ui, messages: &RefCell<Vec<Message>>) {
        let state = self.nav.state();
        let visible = visible_items(&self.items, state);
        ui.horizontal(|ui| {
            ui.label(format!("{} of {} accelerators", visible.len(), self.items.len()));
            if !state.search_keyword.is_empty() {
                ui.label(format!("matching \"{}\"", state.search_keyword));
                if ui.small_button("✕").clicked() {
                    messages.borrow_mut().push(Message::SetSearch(String::new()));
                }
            }
        });
        ui.add_space(style::CARD_SPACING);

        if visible.is_empty() {
            ui.weak("No accelerators match the current filters.");
            return;
        }
        for item in visible {
            render_card(ui, item);
            ui.add_space(style::CARD_SPACING);
        }
    }
}

fn render_card(ui: &mut egui::Ui, item: &CatalogItem) {
    style::card_frame(ui).show(ui, |ui| {
        ui.set_min_height(layout::CARD_HEIGHT);
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(item.title.as_str()).strong());
        style::truncated_label(ui, item.excerpt.as_str());
        ui.horizontal_wrapped(|ui| {
            for value in item.fields.values().flatten() {
                ui.small(value.as_str());
            }
        });
        ui.weak(format!("Released {}", item.release_date));
    });
}

/// Viewport-relative geometry of one anchor.
fn measure(anchor_id: &str, rect: egui::Rect, viewport: egui::Rect) -> ScrollSample {
    let visible = rect.intersect(viewport);
    let ratio = if rect.height() > 0.0 && visible.is_positive() {
        visible.height() / rect.height()
    } else {
        0.0
    };
    ScrollSample::new(anchor_id, ratio, rect.top() - viewport.top(), rect.height())
}
