//! Bookfinder - search the IT Bookstore catalogue
//! Built with iced: type a term, fetch matching books, prune the list

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod i18n;
mod ui;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
