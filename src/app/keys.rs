//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, InputMode, Screen};

impl App {
    /// Route one key press to the active mode and screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match (self.input_mode, self.screen) {
            (InputMode::Search, _) => self.handle_search_key(key),
            (InputMode::Normal, Screen::Booking) => self.handle_booking_key(key),
            (InputMode::Normal, _) => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.navigate_to(self.screen.next_tab()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.navigate_to(Screen::TABS[index]);
            }
            KeyCode::F(5) => self.reload_content(),
            KeyCode::Esc => self.go_back(),
            _ => match self.screen {
                Screen::Offers | Screen::Amenities | Screen::Villas => self.handle_listing_key(key),
                Screen::VillaDetail => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char('b')) {
                        self.start_booking();
                    }
                }
                Screen::Contact => match key.code {
                    KeyCode::Char('r') => self.retry_map(),
                    KeyCode::Char('o') => self.open_map_link(),
                    _ => {}
                },
                Screen::Booking => {}
            },
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('p') => self.previous_page(),
            KeyCode::Right | KeyCode::Char('n') => self.next_page(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Enter => self.open_selected_villa(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(mut query) = self.current_catalog().map(|c| c.query().to_string()) else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match key.code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.set_search_query(String::new());
            }
            KeyCode::Backspace => {
                query.pop();
                self.set_search_query(query);
            }
            KeyCode::Char(c) => {
                query.push(c);
                self.set_search_query(query);
            }
            _ => {}
        }
    }

    fn handle_booking_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.go_back();
            return;
        }
        if key.code == KeyCode::Enter {
            self.submit_booking();
            return;
        }
        let Some(form) = self.booking.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }
}
