mod app;
mod ui;

use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Sweeplet".to_owned(),
        window_width: app::SCREEN_WIDTH,
        window_height: app::SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = app::App::new();
    loop {
        app.tick();
        next_frame().await;
    }
}
