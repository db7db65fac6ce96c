//! UI rendering module

mod about;
mod contact;
mod experience;
mod home;
mod layout;
mod projects;
mod skills;
mod splash;
mod widgets;

pub use layout::{nav_tab_at, NAV_HEIGHT};

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function, dispatching to the active section
pub fn draw(frame: &mut Frame, app: &App) {
    if app.in_splash() {
        splash::draw(frame, frame.area(), &app.splash_state);
        return;
    }

    let (nav_area, content_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_view {
        View::Splash => {}
        View::Home => home::draw(frame, content_area, app),
        View::About => about::draw(frame, content_area, app),
        View::Skills => skills::draw(frame, content_area, app),
        View::Projects => projects::draw(frame, content_area, app),
        View::Experience => experience::draw(frame, content_area, app),
        View::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
