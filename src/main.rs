//! Breakout to Refresh demo
//!
//! Drives the refresh control with a simulated 20-row list: the user pulls the
//! list down, lets go, and the "network" answers three seconds later.
//!
//! Usage: `breakout-to-refresh [--theme light|night] [--settings <file.json>]`

mod demo {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec2;

    use breakout_to_refresh::refresh::{Overlay, RefreshController, ScrollContainer};
    use breakout_to_refresh::renderer;
    use breakout_to_refresh::{Settings, Theme};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const RUN_SECS: f32 = 8.0;
    const LOAD_SECS: f32 = 3.0;
    /// Drag gesture: start, release and how far the list is pulled
    const DRAG_START: f32 = 0.2;
    const DRAG_END: f32 = 0.8;
    const PULL_DISTANCE: f32 = 140.0;
    const ROW_HEIGHT: f32 = 44.0;

    /// Stand-in for a table view with `rows` rows
    struct ListView {
        offset: Vec2,
        inset_top: f32,
        width: f32,
        rows: usize,
        /// Where the list settles after a drag
        target: Option<Vec2>,
    }

    impl ListView {
        fn new(width: f32, rows: usize) -> Self {
            Self {
                offset: Vec2::ZERO,
                inset_top: 0.0,
                width,
                rows,
                target: None,
            }
        }

        fn content_height(&self) -> f32 {
            self.rows as f32 * ROW_HEIGHT
        }

        /// Ease toward the drag target, or the top of the content when idle
        fn settle(&mut self, dt: f32) {
            let target = self.target.unwrap_or(Vec2::new(0.0, -self.inset_top));
            self.offset += (target - self.offset) * (dt * 10.0).min(1.0);
            if (self.offset - target).length() < 0.01 {
                self.offset = target;
                self.target = None;
            }
        }
    }

    impl ScrollContainer for ListView {
        fn content_offset(&self) -> Vec2 {
            self.offset
        }

        fn content_inset_top(&self) -> f32 {
            self.inset_top
        }

        fn set_content_inset_top(&mut self, inset: f32) {
            self.inset_top = inset;
        }

        fn width(&self) -> f32 {
            self.width
        }
    }

    fn load_settings() -> Settings {
        let args: Vec<String> = std::env::args().collect();
        let mut settings = Settings::default();

        if let Some(i) = args.iter().position(|a| a == "--settings") {
            match args.get(i + 1).map(std::fs::read_to_string) {
                Some(Ok(json)) => match Settings::from_json(&json) {
                    Ok(loaded) => settings = loaded,
                    Err(e) => log::error!("Invalid settings file: {}", e),
                },
                Some(Err(e)) => log::error!("Failed to read settings file: {}", e),
                None => log::warn!("--settings needs a file path"),
            }
        }
        if let Some(theme) = theme_from_args(&args) {
            log::info!("Theme: {}", theme.as_str());
            settings.apply_theme(theme);
        }

        log::debug!("Settings: {:?}", settings);
        settings
    }

    /// Theme named by `--theme <name>`; unknown names are reported and ignored
    fn theme_from_args(args: &[String]) -> Option<Theme> {
        let i = args.iter().position(|a| a == "--theme")?;
        let Some(name) = args.get(i + 1) else {
            log::warn!("--theme needs a name (light or night)");
            return None;
        };
        let theme = Theme::from_str(name);
        if theme.is_none() {
            log::warn!("Unknown theme '{}', keeping settings colors", name);
        }
        theme
    }

    pub fn run() {
        let mut list = ListView::new(320.0, 20);
        let mut controller = RefreshController::new(&list, load_settings());
        log::info!(
            "List with {} rows ({} pt tall), overlay {}x{}",
            list.rows,
            list.content_height(),
            controller.size().x,
            controller.size().y
        );

        let requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&requested);
        controller.set_delegate(move || flag.set(true));

        let mut end_at: Option<f32> = None;
        let mut time = 0.0;
        let mut frame = 0u32;

        while time < RUN_SECS {
            if time >= DRAG_START && time < DRAG_END {
                if !controller.is_dragging() {
                    controller.on_drag_begin();
                }
                let t = (time - DRAG_START) / (DRAG_END - DRAG_START);
                list.offset.y = -list.inset_top - PULL_DISTANCE * t;
                controller.on_scroll(&list);
            } else if controller.is_dragging() {
                let mut target = list.offset;
                controller.on_drag_end(&mut list, Vec2::ZERO, &mut target);
                log::info!("Released at {:.1}, settling at {:.1}", list.offset.y, target.y);
                list.target = Some(target);
            } else {
                list.settle(FRAME_DT);
                controller.on_scroll(&list);
            }

            if requested.replace(false) {
                log::info!("Loading started");
                end_at = Some(time + LOAD_SECS);
            }
            if end_at.is_some_and(|at| time >= at) {
                end_at = None;
                log::info!("Loading finished");
                controller.end_refreshing(&mut list);
            }

            controller.advance(FRAME_DT, &mut list);

            if frame % 60 == 0 {
                let game = controller.game_scene();
                let draw = renderer::draw(&controller);
                log::info!(
                    "t={:.1}s scene={:?} refreshing={} overlay={} inset={:.1} blocks={} rounds={} vertices={}",
                    time,
                    controller.presented(),
                    controller.is_refreshing(),
                    overlay_name(controller.overlay()),
                    list.inset_top,
                    game.world().block_count(),
                    game.rounds(),
                    draw.vertices.len()
                );
            }

            time += FRAME_DT;
            frame += 1;
        }

        log::info!("Demo finished");
    }

    fn overlay_name(overlay: Overlay) -> &'static str {
        match overlay {
            Overlay::Collapsed => "collapsed",
            Overlay::Expanding(_) => "expanding",
            Overlay::Expanded => "expanded",
            Overlay::Collapsing(_) => "collapsing",
        }
    }

}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout to Refresh demo starting...");
    demo::run();
}
