//! Terminal UI
//!
//! Full-screen storefront over the controller: category tabs, product
//! list, option dialog for the breakfast sets, and the cart pane. Pure
//! presentation; every cart rule lives in the controller and the cart
//! engine. All input is handled on this single thread, so each mutation
//! (and its storage mirror) completes before the next event is read.
//!
//! Keys: Tab focus, ←/→ category, ↑/↓ select, Enter add/confirm,
//! +/- quantity, d/Delete remove line, l language, q quit.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use shared::{Language, Product, SelectedOptions};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::cart::money;
use crate::core::{Notice, Storefront};
use crate::i18n::{self, keys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Menu,
    Cart,
}

/// Choice dialog for a configurable product, one option group at a time
struct OptionDialog {
    product_id: String,
    group_index: usize,
    choice_index: usize,
    chosen: SelectedOptions,
}

impl OptionDialog {
    fn new(product_id: String) -> Self {
        Self {
            product_id,
            group_index: 0,
            choice_index: 0,
            chosen: SelectedOptions::new(),
        }
    }
}

struct App {
    storefront: Storefront,
    focus: Focus,
    category_index: usize,
    product_index: usize,
    cart_index: usize,
    dialog: Option<OptionDialog>,
    /// Last confirmation, shown in the status line until replaced
    notice: Option<Notice>,
}

/// Run the storefront UI until the user quits
pub fn run(storefront: Storefront) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(storefront);
    let res = run_app(&mut terminal, &mut app);

    // Restore the terminal before surfacing any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                && app.handle_key(key.code)
            {
                return Ok(());
            }
        }
    }
}

impl App {
    fn new(storefront: Storefront) -> Self {
        Self {
            storefront,
            focus: Focus::Menu,
            category_index: 0,
            product_index: 0,
            cart_index: 0,
            dialog: None,
            notice: None,
        }
    }

    /// Handle one key press; returns true when the app should quit
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.dialog.is_some() {
            self.handle_dialog_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('l') => self.storefront.toggle_language(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Menu => Focus::Cart,
                    Focus::Cart => Focus::Menu,
                };
            }
            KeyCode::Left => self.switch_category(-1),
            KeyCode::Right => self.switch_category(1),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => match self.focus {
                Focus::Menu => self.add_selected_product(),
                // Checkout is deliberately inert; Enter in the cart does nothing
                Focus::Cart => {}
            },
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_selected_line(1),
            KeyCode::Char('-') => self.adjust_selected_line(-1),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                self.remove_selected_line();
            }
            _ => {}
        }
        false
    }

    fn handle_dialog_key(&mut self, code: KeyCode) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };
        let groups = self
            .storefront
            .catalog()
            .product(&dialog.product_id)
            .option_groups()
            .to_vec();

        match code {
            // Dropping the dialog cancels the add
            KeyCode::Esc => return,
            KeyCode::Up => {
                let len = groups[dialog.group_index].choices.len();
                dialog.choice_index = prev_index(dialog.choice_index, len);
            }
            KeyCode::Down => {
                let len = groups[dialog.group_index].choices.len();
                dialog.choice_index = next_index(dialog.choice_index, len);
            }
            KeyCode::Enter => {
                let group = &groups[dialog.group_index];
                let choice = group.choices[dialog.choice_index].clone();
                dialog.chosen.choose(&group.key, choice);
                dialog.group_index += 1;
                dialog.choice_index = 0;

                if dialog.group_index == groups.len() {
                    // Every group chosen; hand the line to the controller
                    self.storefront.add_item(&dialog.product_id, dialog.chosen);
                    self.refresh_notice();
                    return;
                }
            }
            _ => {}
        }

        self.dialog = Some(dialog);
    }

    fn switch_category(&mut self, step: i32) {
        if self.focus != Focus::Menu {
            return;
        }
        let len = self.storefront.catalog().list_categories().len();
        self.category_index = if step < 0 {
            prev_index(self.category_index, len)
        } else {
            next_index(self.category_index, len)
        };
        self.product_index = 0;
    }

    fn move_selection(&mut self, step: i32) {
        let (index, len) = match self.focus {
            Focus::Menu => (&mut self.product_index, {
                let catalog = self.storefront.catalog();
                let categories = catalog.list_categories();
                match categories.get(self.category_index) {
                    Some(c) => catalog.products_in(&c.key).len(),
                    None => 0,
                }
            }),
            Focus::Cart => (&mut self.cart_index, self.storefront.cart().len()),
        };
        *index = if step < 0 {
            prev_index(*index, len)
        } else {
            next_index(*index, len)
        };
    }

    fn add_selected_product(&mut self) {
        let selected = {
            let catalog = self.storefront.catalog();
            let categories = catalog.list_categories();
            categories.get(self.category_index).and_then(|c| {
                catalog
                    .products_in(&c.key)
                    .get(self.product_index)
                    .map(|p| (p.id().to_string(), matches!(p, Product::Configurable(_))))
            })
        };

        if let Some((product_id, configurable)) = selected {
            if configurable {
                self.dialog = Some(OptionDialog::new(product_id));
            } else {
                self.storefront.add_item(&product_id, SelectedOptions::new());
                self.refresh_notice();
            }
        }
    }

    fn adjust_selected_line(&mut self, delta: i32) {
        if self.focus != Focus::Cart {
            return;
        }
        let target = self
            .storefront
            .cart()
            .get(self.cart_index)
            .map(|l| (l.product_id.clone(), l.selected_options.clone()));
        if let Some((product_id, selections)) = target {
            self.storefront.update_quantity(&product_id, &selections, delta);
            self.clamp_cart_index();
        }
    }

    fn remove_selected_line(&mut self) {
        if self.focus != Focus::Cart {
            return;
        }
        let target = self
            .storefront
            .cart()
            .get(self.cart_index)
            .map(|l| (l.product_id.clone(), l.selected_options.clone()));
        if let Some((product_id, selections)) = target {
            self.storefront.remove_item(&product_id, &selections);
            self.clamp_cart_index();
        }
    }

    fn clamp_cart_index(&mut self) {
        self.cart_index = self
            .cart_index
            .min(self.storefront.cart().len().saturating_sub(1));
    }

    fn refresh_notice(&mut self) {
        if let Some(notice) = self.storefront.take_notice() {
            self.notice = Some(notice);
        }
    }
}

fn next_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + len - 1) % len }
}

/// Parse a `#RRGGBB` category color tag; unknown shapes render white
fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0xFF);
    Color::Rgb(channel(0), channel(2), channel(4))
}

/// Integer prices render without decimals, as on the printed menu
fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn ui(f: &mut Frame, app: &App) {
    let language = app.storefront.language();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Category tabs
            Constraint::Min(1),    // Products + cart
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    render_header(f, app, language, chunks[0]);
    render_tabs(f, app, language, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_products(f, app, language, main_chunks[0]);
    render_cart(f, app, language, main_chunks[1]);
    render_status(f, app, chunks[3]);
    render_dialog(f, app, language);
}

fn render_header(f: &mut Frame, app: &App, language: Language, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", i18n::tr(language, keys::APP_TITLE)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw(format!("🛒 {}", app.storefront.item_count())),
        Span::raw(" | "),
        Span::styled(
            match language {
                Language::Ar => "العربية",
                Language::En => "English",
            },
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, app: &App, language: Language, area: Rect) {
    let categories = app.storefront.catalog().list_categories();
    let titles: Vec<Line> = categories
        .iter()
        .map(|c| {
            Line::from(Span::styled(
                c.name.get(language),
                Style::default().fg(hex_color(&c.color)),
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.category_index)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, area);
}

fn render_products(f: &mut Frame, app: &App, language: Language, area: Rect) {
    let catalog = app.storefront.catalog();
    let categories = catalog.list_categories();
    let Some(category) = categories.get(app.category_index) else {
        return;
    };
    let products = catalog.products_in(&category.key);

    let items: Vec<ListItem> = products
        .iter()
        .map(|p| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    p.name().get(language).to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", fmt_amount(p.price()), i18n::CURRENCY),
                    Style::default().fg(Color::Green),
                ),
            ])];

            if !p.option_groups().is_empty() {
                let groups: Vec<String> = p
                    .option_groups()
                    .iter()
                    .map(|g| g.name.get(language).to_string())
                    .collect();
                lines.push(Line::from(Span::styled(
                    format!("  {}", groups.join(", ")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if !p.includes().is_empty() {
                let includes: Vec<String> = p
                    .includes()
                    .iter()
                    .map(|t| t.get(language).to_string())
                    .collect();
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {}: {}",
                        i18n::tr(language, keys::PRODUCT_INCLUDES),
                        includes.join(", ")
                    ),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let border_style = if app.focus == Focus::Menu {
        Style::default().fg(hex_color(&category.color))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", category.name.get(language)))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.product_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_cart(f: &mut Frame, app: &App, language: Language, area: Rect) {
    let cart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Lines
            Constraint::Length(1), // Total
            Constraint::Length(3), // Checkout
        ])
        .split(area);

    let border_style = if app.focus == Focus::Cart {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cart_block = Block::default()
        .title(format!(
            " {} ({}) ",
            i18n::tr(language, keys::CART_TITLE),
            app.storefront.item_count()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let cart = app.storefront.cart();
    if cart.is_empty() {
        let empty = Paragraph::new(i18n::tr(language, keys::CART_EMPTY))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(cart_block);
        f.render_widget(empty, cart_chunks[0]);
    } else {
        let items: Vec<ListItem> = cart
            .iter()
            .map(|line| {
                let mut rows = vec![Line::from(vec![
                    Span::styled(
                        line.name.get(language).to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  ×{}", line.quantity)),
                    Span::raw("  "),
                    Span::styled(
                        format!("{} {}", fmt_amount(money::line_total(line)), i18n::CURRENCY),
                        Style::default().fg(Color::Green),
                    ),
                ])];
                if !line.selected_options.is_empty() {
                    let choices: Vec<String> = line
                        .selected_options
                        .iter()
                        .map(|(_, choice)| choice.get(language).to_string())
                        .collect();
                    rows.push(Line::from(Span::styled(
                        format!("  {}", choices.join(", ")),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(rows)
            })
            .collect();

        let list = List::new(items)
            .block(cart_block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(app.cart_index));
        f.render_stateful_widget(list, cart_chunks[0], &mut state);
    }

    let total = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}: ", i18n::tr(language, keys::CART_TOTAL)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} {}",
                fmt_amount(app.storefront.total_amount()),
                i18n::CURRENCY
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(total, cart_chunks[1]);

    // Rendered enabled or disabled with the cart's emptiness; the action
    // itself is inert either way
    let checkout_style = if app.storefront.can_checkout() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let checkout = Paragraph::new(i18n::tr(language, keys::CART_CHECKOUT))
        .style(checkout_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(checkout_style));
    f.render_widget(checkout, cart_chunks[2]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    if let Some(notice) = &app.notice {
        let toast = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", notice.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(notice.detail.clone()),
        ]));
        f.render_widget(toast, area);
    }

    let help = Paragraph::new("Tab focus | ←/→ category | Enter add | +/- qty | d remove | l language | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(help, area);
}

fn render_dialog(f: &mut Frame, app: &App, language: Language) {
    let Some(dialog) = &app.dialog else {
        return;
    };
    let product = app.storefront.catalog().product(&dialog.product_id);
    let groups = product.option_groups();
    let Some(group) = groups.get(dialog.group_index) else {
        return;
    };

    let area = centered_rect(40, 40, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = group
        .choices
        .iter()
        .map(|choice| ListItem::new(choice.get(language).to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    " {} · {} ",
                    product.name().get(language),
                    group.name.get(language)
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(dialog.choice_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
