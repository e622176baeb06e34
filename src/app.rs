use crate::message::Message;
use crate::sample_catalog;
use catalog_nav::bindings::{FilterBinding, SearchBinding, SortBinding};
use catalog_nav::catalog::{CatalogItem, FilterOptions};
use catalog_nav::{Config, FragmentCodec, NavigationController, ScrollRequest, SessionHistory};
use eframe::egui;
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Instant;

pub struct CatalogApp {
    pub config: Config,
    pub items: Vec<CatalogItem>,

    // Navigation
    pub nav: NavigationController,
    pub pending_scroll: VecDeque<ScrollRequest>,
    state_changed: Rc<Cell<bool>>,
    mounted: bool,

    // Widget bindings
    pub sort: SortBinding,
    pub search: SearchBinding,
    pub filters: FilterBinding,

    // UI State
    pub address: String,
    shown_fragment: String,
    window_title: String,
    pub collapsed_categories: HashSet<String>,
}

impl CatalogApp {
    pub fn new(config: Config, initial_fragment: &str) -> Self {
        let items = sample_catalog::items();
        let fields: Vec<&str> = config.filters.iter().map(|f| f.category.as_str()).collect();
        let options = FilterOptions::from_items(&items, &fields);

        let codec = FragmentCodec::new(config.registry(), config.filter_params())
            .with_known_categories(options.categories().map(str::to_string));
        let mut nav = NavigationController::new(
            codec,
            SessionHistory::new(initial_fragment),
            config.controller_options(),
        );

        let state_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&state_changed);
        nav.subscribe(move |state| {
            log::trace!("Navigation state changed: {state:?}");
            flag.set(true);
        });

        Self {
            sort: SortBinding::new(&nav),
            search: SearchBinding::new(&nav),
            filters: FilterBinding::new(&nav, options),
            address: format!("#{}", nav.fragment()),
            shown_fragment: nav.fragment().to_string(),
            config,
            items,
            nav,
            pending_scroll: VecDeque::new(),
            state_changed,
            mounted: false,
            window_title: String::new(),
            collapsed_categories: HashSet::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("Catalog - #{}", self.nav.fragment())
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::NavigateTo(section) => self.nav.navigate_to_section(&section, now),
            Message::NavigateHome => self.nav.navigate_home(now),
            Message::Traverse(direction) => {
                self.nav.traverse(direction, now);
            }
            Message::OpenFragment(fragment) => self.nav.open_fragment(&fragment, now),
            Message::SetSort(order) => {
                self.sort.set(&mut self.nav, order);
            }
            Message::SetSearch(query) => {
                self.search.set(&mut self.nav, &query);
            }
            Message::ToggleFilter {
                category,
                item,
                checked,
            } => {
                self.filters.toggle(&mut self.nav, &category, &item, checked);
            }
            Message::ClearFilterCategory(category) => {
                self.filters.clear_category(&mut self.nav, &category);
            }
            Message::ClearFilters => {
                self.filters.clear(&mut self.nav);
            }
        }
    }

    /// Pulls controller output into the widgets after any state change.
    fn sync_from_controller(&mut self) {
        self.pending_scroll.extend(self.nav.take_scroll_requests());
        if self.state_changed.replace(false) {
            let state = self.nav.state();
            self.sort.sync(state);
            self.search.sync(state);
            self.filters.sync(state);
        }
        // Leave the address bar alone while the user edits it.
        if self.nav.fragment() != self.shown_fragment {
            self.shown_fragment = self.nav.fragment().to_string();
            self.address = format!("#{}", self.shown_fragment);
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if !self.mounted {
            self.mounted = true;
            self.nav.mount(now);
        }
        self.nav.tick(now);
        self.sync_from_controller();

        // Deferred actions
        let messages = RefCell::new(Vec::new());

        egui::TopBottomPanel::top("address_bar").show(ctx, |ui| {
            self.render_address_bar(ui, &messages);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::left("filter_panel")
            .resizable(false)
            .exact_width(catalog_nav::layout::FILTER_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_filter_panel(ui, &messages);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui, ctx, now, &messages);
        });

        // Apply deferred actions
        let messages = messages.into_inner();
        if !messages.is_empty() {
            let now = Instant::now();
            for message in messages {
                self.handle_message(message, now);
            }
            ctx.request_repaint();
        }
        // Scroll and visibility events from this frame may have changed the state too.
        self.sync_from_controller();
        if !self.pending_scroll.is_empty() {
            ctx.request_repaint();
        }

        let title = self.title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }

        if let Some(deadline) = self.nav.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
